use std::collections::HashSet;

use log::{debug, warn};
use uuid::Uuid;

use crate::api::models::{Conversation, FavoriteEntry, Message, Reaction};
use crate::error::{Error, Result};

/// In-memory conversation cache. Conversations keep the order they were
/// inserted in; messages keep send order.
#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    conversations: Vec<Conversation>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_conversations(conversations: Vec<Conversation>) -> Result<Self> {
        let mut store = Self::new();
        for conv in conversations {
            store.insert(conv)?;
        }
        Ok(store)
    }

    pub fn insert(&mut self, conversation: Conversation) -> Result<()> {
        if self.get(&conversation.id).is_some() {
            return Err(Error::DuplicateConversation(conversation.id));
        }
        let mut seen = HashSet::new();
        for msg in &conversation.messages {
            if !seen.insert(msg.id.as_str()) {
                return Err(Error::DuplicateMessage {
                    conversation_id: conversation.id.clone(),
                    message_id: msg.id.clone(),
                });
            }
        }
        debug!(
            "Caching conversation {} ({} messages)",
            conversation.id,
            conversation.messages.len()
        );
        self.conversations.push(conversation);
        Ok(())
    }

    pub fn list(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn get(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    fn conversation_mut(&mut self, id: &str) -> Result<&mut Conversation> {
        self.conversations
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::ConversationNotFound(id.to_string()))
    }

    fn message_mut(&mut self, conversation_id: &str, message_id: &str) -> Result<&mut Message> {
        self.conversation_mut(conversation_id)?
            .messages
            .iter_mut()
            .find(|m| m.id == message_id)
            .ok_or_else(|| Error::MessageNotFound {
                conversation_id: conversation_id.to_string(),
                message_id: message_id.to_string(),
            })
    }

    /// Appends a message stamped with the current local time. Returns
    /// `Ok(None)` when the body is blank; nothing is appended then.
    pub fn send_message(
        &mut self,
        conversation_id: &str,
        sender_id: &str,
        body: &str,
    ) -> Result<Option<&Message>> {
        let timestamp = chrono::Local::now().format("%H:%M").to_string();
        self.send_message_at(conversation_id, sender_id, body, timestamp)
    }

    pub fn send_message_at(
        &mut self,
        conversation_id: &str,
        sender_id: &str,
        body: &str,
        timestamp: String,
    ) -> Result<Option<&Message>> {
        let conv = self.conversation_mut(conversation_id)?;
        if body.trim().is_empty() {
            warn!("Ignoring blank message for {conversation_id}");
            return Ok(None);
        }
        let message = Message {
            id: Uuid::new_v4().to_string(),
            text: body.to_string(),
            sender_id: sender_id.to_string(),
            timestamp: timestamp.clone(),
            reactions: Vec::new(),
            is_favorite: false,
        };
        debug!("Appending message {} to {conversation_id}", message.id);
        conv.last_activity = timestamp;
        conv.messages.push(message);
        Ok(conv.messages.last())
    }

    /// Bumps the tally for `emoji`, creating it at 1 on first use.
    /// Returns the updated count.
    pub fn add_reaction(
        &mut self,
        conversation_id: &str,
        message_id: &str,
        emoji: &str,
    ) -> Result<u32> {
        let msg = self.message_mut(conversation_id, message_id)?;
        let count = match msg.reactions.iter_mut().find(|r| r.emoji == emoji) {
            Some(tally) => {
                tally.count += 1;
                tally.count
            }
            None => {
                msg.reactions.push(Reaction {
                    emoji: emoji.to_string(),
                    count: 1,
                });
                1
            }
        };
        debug!("Reaction {emoji} on {conversation_id}/{message_id} now {count}");
        Ok(count)
    }

    /// Flips the favorite flag and returns the new value.
    pub fn toggle_favorite(&mut self, conversation_id: &str, message_id: &str) -> Result<bool> {
        let msg = self.message_mut(conversation_id, message_id)?;
        msg.is_favorite = !msg.is_favorite;
        debug!(
            "Favorite on {conversation_id}/{message_id} set to {}",
            msg.is_favorite
        );
        Ok(msg.is_favorite)
    }

    pub fn favorites(&self) -> Vec<FavoriteEntry> {
        self.conversations
            .iter()
            .flat_map(|conv| {
                conv.messages
                    .iter()
                    .filter(|m| m.is_favorite)
                    .map(move |m| FavoriteEntry {
                        conversation_id: conv.id.clone(),
                        conversation_name: conv.name.clone(),
                        avatar: conv.avatar.clone(),
                        message_id: m.id.clone(),
                        text: m.text.clone(),
                        timestamp: m.timestamp.clone(),
                    })
            })
            .collect()
    }
}
