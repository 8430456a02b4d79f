use crate::api::models::User;
use crate::router::{CallKind, Tab};

/// Navigation and overlay changes triggered by clicks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Login(User),
    Logout,
    SelectTab(Tab),
    SelectConversation(String),
    ToggleProfile,
    CloseProfile,
    OpenCall(CallKind),
    CloseCall(CallKind),
    ToggleMute(CallKind),
    ToggleCamera,
    ToggleScreenShare,
    SetDarkMode(bool),
}
