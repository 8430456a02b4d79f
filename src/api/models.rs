use serde::{Deserialize, Serialize};

/// Id given to the locally fabricated user. Seeded messages sent "by me"
/// carry this sender id.
pub const LOCAL_USER_ID: &str = "1";

pub const DEFAULT_AVATAR: &str = "👤";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Email or phone the user signed in with.
    pub address: String,
    pub avatar: Option<String>,
}

impl User {
    pub fn avatar_or_default(&self) -> &str {
        self.avatar.as_deref().unwrap_or(DEFAULT_AVATAR)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub emoji: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender_id: String,
    /// Display time, `HH:MM`.
    pub timestamp: String,
    #[serde(default)]
    pub reactions: Vec<Reaction>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl Message {
    pub fn is_from(&self, user_id: &str) -> bool {
        self.sender_id == user_id
    }

    pub fn reaction(&self, emoji: &str) -> Option<&Reaction> {
        self.reactions.iter().find(|r| r.emoji == emoji)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationKind {
    #[default]
    Direct,
    Group,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub name: String,
    pub avatar: String,
    #[serde(default)]
    pub kind: ConversationKind,
    #[serde(default)]
    pub messages: Vec<Message>,
    /// Cosmetic; nothing ever decrements it.
    #[serde(default)]
    pub unread: Option<u32>,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default)]
    pub is_typing: bool,
    /// Label shown next to the conversation in the list ("10:30", "Yesterday").
    #[serde(default)]
    pub last_activity: String,
    /// Subtitle of the chat header.
    #[serde(default)]
    pub presence: String,
}

impl Conversation {
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn message(&self, message_id: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == message_id)
    }

    /// Text for the second line of a chat list row.
    pub fn preview(&self) -> &str {
        if self.is_typing {
            "typing…"
        } else {
            self.last_message().map(|m| m.text.as_str()).unwrap_or_default()
        }
    }

    pub fn unread_badge(&self) -> Option<u32> {
        self.unread.filter(|n| *n > 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub avatar: String,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default)]
    pub in_messenger: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub members: u32,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(default)]
    pub unread: Option<u32>,
}

/// A favorited message together with where it lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteEntry {
    pub conversation_id: String,
    pub conversation_name: String,
    pub avatar: String,
    pub message_id: String,
    pub text: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conversation(is_typing: bool) -> Conversation {
        Conversation {
            id: "c".into(),
            name: "Chat".into(),
            avatar: "🧀".into(),
            kind: ConversationKind::Direct,
            messages: vec![Message {
                id: "1".into(),
                text: "hello".into(),
                sender_id: LOCAL_USER_ID.into(),
                timestamp: "10:30".into(),
                reactions: Vec::new(),
                is_favorite: false,
            }],
            unread: Some(0),
            is_online: false,
            is_typing,
            last_activity: "10:30".into(),
            presence: String::new(),
        }
    }

    #[test]
    fn preview_shows_typing_indicator() {
        assert_eq!(conversation(false).preview(), "hello");
        assert_eq!(conversation(true).preview(), "typing…");
    }

    #[test]
    fn zero_unread_has_no_badge() {
        let mut conv = conversation(false);
        assert_eq!(conv.unread_badge(), None);
        conv.unread = Some(3);
        assert_eq!(conv.unread_badge(), Some(3));
    }

    #[test]
    fn missing_avatar_falls_back() {
        let user = User {
            id: "1".into(),
            name: "User".into(),
            address: "me@example.com".into(),
            avatar: None,
        };
        assert_eq!(user.avatar_or_default(), DEFAULT_AVATAR);
    }
}
