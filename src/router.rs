use log::{debug, warn};

use crate::api::events::Action;
use crate::api::models::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Chats,
    Contacts,
    Groups,
    Favorites,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Chats,
        Tab::Contacts,
        Tab::Groups,
        Tab::Favorites,
        Tab::Settings,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Chats => "Chats",
            Tab::Contacts => "Contacts",
            Tab::Groups => "Groups",
            Tab::Favorites => "Favorites",
            Tab::Settings => "Settings",
        }
    }

    /// Stable name, used as the GTK stack page name.
    pub fn key(self) -> &'static str {
        match self {
            Tab::Chats => "chats",
            Tab::Contacts => "contacts",
            Tab::Groups => "groups",
            Tab::Favorites => "favorites",
            Tab::Settings => "settings",
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            Tab::Chats => "mail-unread-symbolic",
            Tab::Contacts => "avatar-default-symbolic",
            Tab::Groups => "system-users-symbolic",
            Tab::Favorites => "starred-symbolic",
            Tab::Settings => "emblem-system-symbolic",
        }
    }

    pub fn from_key(key: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|t| t.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    Audio,
    Video,
}

/// Toggles shown on a call overlay. Camera and screen share only exist on
/// video calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CallControls {
    pub muted: bool,
    pub camera_off: bool,
    pub screen_sharing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Auth,
    Messenger,
}

/// What the left column shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidePane {
    Profile,
    Tab(Tab),
}

#[derive(Debug, Clone, Default)]
pub struct ViewRouter {
    user: Option<User>,
    active_tab: Tab,
    selected_conversation: Option<String>,
    profile_open: bool,
    audio_call_open: bool,
    video_call_open: bool,
    audio_controls: CallControls,
    video_controls: CallControls,
    dark_mode: bool,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub(crate) fn current_user_mut(&mut self) -> Option<&mut User> {
        self.user.as_mut()
    }

    pub fn screen(&self) -> Screen {
        if self.is_authenticated() {
            Screen::Messenger
        } else {
            Screen::Auth
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn side_pane(&self) -> SidePane {
        if self.profile_open {
            SidePane::Profile
        } else {
            SidePane::Tab(self.active_tab)
        }
    }

    pub fn selected_conversation(&self) -> Option<&str> {
        self.selected_conversation.as_deref()
    }

    pub fn is_profile_open(&self) -> bool {
        self.profile_open
    }

    pub fn is_call_open(&self, kind: CallKind) -> bool {
        match kind {
            CallKind::Audio => self.audio_call_open,
            CallKind::Video => self.video_call_open,
        }
    }

    pub fn call_controls(&self, kind: CallKind) -> CallControls {
        match kind {
            CallKind::Audio => self.audio_controls,
            CallKind::Video => self.video_controls,
        }
    }

    /// Session-scoped; a fresh sign-in starts light.
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn apply(&mut self, action: Action) {
        if !self.is_authenticated() && !matches!(action, Action::Login(_)) {
            warn!("Ignoring {action:?} while signed out");
            return;
        }
        debug!("Router action {action:?}");
        match action {
            Action::Login(user) => {
                *self = Self {
                    user: Some(user),
                    ..Self::default()
                };
            }
            Action::Logout => *self = Self::default(),
            Action::SelectTab(tab) => self.active_tab = tab,
            Action::SelectConversation(id) => self.selected_conversation = Some(id),
            Action::ToggleProfile => self.profile_open = !self.profile_open,
            Action::CloseProfile => self.profile_open = false,
            Action::OpenCall(CallKind::Audio) => self.audio_call_open = true,
            Action::OpenCall(CallKind::Video) => self.video_call_open = true,
            Action::CloseCall(CallKind::Audio) => self.audio_call_open = false,
            Action::CloseCall(CallKind::Video) => self.video_call_open = false,
            Action::ToggleMute(CallKind::Audio) => {
                self.audio_controls.muted = !self.audio_controls.muted
            }
            Action::ToggleMute(CallKind::Video) => {
                self.video_controls.muted = !self.video_controls.muted
            }
            Action::ToggleCamera => {
                self.video_controls.camera_off = !self.video_controls.camera_off
            }
            Action::ToggleScreenShare => {
                self.video_controls.screen_sharing = !self.video_controls.screen_sharing
            }
            Action::SetDarkMode(on) => self.dark_mode = on,
        }
    }
}
