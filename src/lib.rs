//! State and behavior of the CheeseHome messenger prototype.
//!
//! Everything lives in memory: a seeded [`storage::ConversationStore`],
//! the two-step [`auth::AuthFlow`], and the [`router::ViewRouter`] that
//! decides what the GTK front end shows. [`api::client::MessengerClient`]
//! ties them together.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod profile;
pub mod router;
pub mod search;
pub mod seed;
pub mod storage;

pub use api::client::MessengerClient;
pub use error::{Error, Result};

/// Emoji offered in the reaction picker.
pub const REACTION_EMOJIS: [&str; 6] = ["❤️", "👍", "😂", "😮", "😢", "🔥"];
