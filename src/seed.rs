use serde::Deserialize;

use crate::api::models::{Contact, Conversation, Group};
use crate::error::Result;
use crate::storage::ConversationStore;

const SEED_JSON: &str = include_str!("../data/seed.json");

/// Mock data the prototype starts with.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub conversations: Vec<Conversation>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl SeedData {
    pub fn builtin() -> Result<Self> {
        Self::from_json(SEED_JSON)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn into_parts(self) -> Result<(ConversationStore, Vec<Contact>, Vec<Group>)> {
        let store = ConversationStore::from_conversations(self.conversations)?;
        Ok((store, self.contacts, self.groups))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn builtin_seed_is_consistent() {
        let (store, contacts, groups) = SeedData::builtin().unwrap().into_parts().unwrap();
        assert_eq!(store.list().len(), 4);
        assert_eq!(store.get("1").unwrap().messages.len(), 3);
        assert_eq!(contacts.len(), 5);
        assert_eq!(groups.len(), 4);
    }

    #[test]
    fn duplicate_ids_in_seed_fail() {
        let json = r#"{"conversations": [
            {"id": "a", "name": "A", "avatar": "x"},
            {"id": "a", "name": "B", "avatar": "y"}
        ]}"#;
        let err = SeedData::from_json(json).unwrap().into_parts().unwrap_err();
        assert!(matches!(err, Error::DuplicateConversation(id) if id == "a"));
    }

    #[test]
    fn malformed_seed_is_reported() {
        assert!(matches!(
            SeedData::from_json("{\"conversations\": 3}"),
            Err(Error::Seed(_))
        ));
    }
}
