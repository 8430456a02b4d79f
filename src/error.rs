use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("conversation '{0}' not found")]
    ConversationNotFound(String),
    #[error("message '{message_id}' not found in conversation '{conversation_id}'")]
    MessageNotFound {
        conversation_id: String,
        message_id: String,
    },
    #[error("conversation '{0}' already exists")]
    DuplicateConversation(String),
    #[error("message id '{message_id}' appears twice in conversation '{conversation_id}'")]
    DuplicateMessage {
        conversation_id: String,
        message_id: String,
    },
    #[error("malformed seed data: {0}")]
    Seed(#[from] serde_json::Error),
    #[error("failed to read config at {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
