use log::{info, warn};

use crate::api::events::Action;
use crate::api::models::{Contact, Conversation, FavoriteEntry, Group, Message, User};
use crate::auth;
use crate::error::Result;
use crate::profile::ProfileDraft;
use crate::router::ViewRouter;
use crate::search::filter_by_search_text;
use crate::seed::SeedData;
use crate::storage::ConversationStore;

/// Local stand-in for a messenger backend: every call is synchronous and
/// works on process memory only.
#[derive(Debug, Clone)]
pub struct MessengerClient {
    store: ConversationStore,
    contacts: Vec<Contact>,
    groups: Vec<Group>,
    router: ViewRouter,
}

impl MessengerClient {
    pub fn new(store: ConversationStore, contacts: Vec<Contact>, groups: Vec<Group>) -> Self {
        Self {
            store,
            contacts,
            groups,
            router: ViewRouter::new(),
        }
    }

    pub fn from_seed(seed: SeedData) -> Result<Self> {
        let (store, contacts, groups) = seed.into_parts()?;
        Ok(Self::new(store, contacts, groups))
    }

    pub fn with_builtin_seed() -> Result<Self> {
        Self::from_seed(SeedData::builtin()?)
    }

    pub fn router(&self) -> &ViewRouter {
        &self.router
    }

    pub fn current_user(&self) -> Option<&User> {
        self.router.current_user()
    }

    /// Signs in without any check beyond the address shape. Returns `None`
    /// for an implausible address.
    pub fn authenticate(&mut self, address: &str) -> Option<User> {
        if !auth::is_plausible_address(address) {
            warn!("Refusing to sign in with {address:?}");
            return None;
        }
        let user = auth::user_for(address);
        info!("Signed in as {}", user.address);
        self.router.apply(Action::Login(user.clone()));
        Some(user)
    }

    pub fn logout(&mut self) {
        info!("Signed out");
        self.router.apply(Action::Logout);
    }

    pub fn dispatch(&mut self, action: Action) {
        self.router.apply(action);
    }

    pub fn list_conversations(&self) -> &[Conversation] {
        self.store.list()
    }

    pub fn conversation(&self, id: &str) -> Option<&Conversation> {
        self.store.get(id)
    }

    pub fn selected_conversation(&self) -> Option<&Conversation> {
        self.router
            .selected_conversation()
            .and_then(|id| self.store.get(id))
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn search_conversations(&self, query: &str) -> Vec<&Conversation> {
        filter_by_search_text(self.store.list(), query)
    }

    pub fn search_contacts(&self, query: &str) -> Vec<&Contact> {
        filter_by_search_text(&self.contacts, query)
    }

    pub fn search_groups(&self, query: &str) -> Vec<&Group> {
        filter_by_search_text(&self.groups, query)
    }

    pub fn favorites(&self) -> Vec<FavoriteEntry> {
        self.store.favorites()
    }

    /// Sends as the signed-in user. `Ok(None)` when nobody is signed in or
    /// the body is blank.
    pub fn send_message(&mut self, conversation_id: &str, body: &str) -> Result<Option<&Message>> {
        let Some(user) = self.router.current_user() else {
            warn!("Dropping message for {conversation_id}: not signed in");
            return Ok(None);
        };
        let sender = user.id.clone();
        self.store.send_message(conversation_id, &sender, body)
    }

    /// Returns the new tally, or `Ok(None)` when nobody is signed in.
    pub fn add_reaction(
        &mut self,
        conversation_id: &str,
        message_id: &str,
        emoji: &str,
    ) -> Result<Option<u32>> {
        if !self.router.is_authenticated() {
            warn!("Dropping reaction on {conversation_id}/{message_id}: not signed in");
            return Ok(None);
        }
        self.store
            .add_reaction(conversation_id, message_id, emoji)
            .map(Some)
    }

    /// Returns the new flag, or `Ok(None)` when nobody is signed in.
    pub fn toggle_favorite(
        &mut self,
        conversation_id: &str,
        message_id: &str,
    ) -> Result<Option<bool>> {
        if !self.router.is_authenticated() {
            warn!("Dropping favorite toggle on {conversation_id}/{message_id}: not signed in");
            return Ok(None);
        }
        self.store
            .toggle_favorite(conversation_id, message_id)
            .map(Some)
    }

    pub fn profile_draft(&self) -> Option<ProfileDraft> {
        self.current_user().map(ProfileDraft::from_user)
    }

    pub fn save_profile(&mut self, draft: &ProfileDraft) {
        if let Some(user) = self.router.current_user_mut() {
            draft.apply_to(user);
            info!("Profile updated: {} {}", user.name, user.avatar_or_default());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_requires_session() {
        let mut client = MessengerClient::with_builtin_seed().unwrap();
        assert!(client.send_message("1", "hi").unwrap().is_none());
        assert_eq!(client.conversation("1").unwrap().messages.len(), 3);

        client.authenticate("me@example.com").unwrap();
        let sent = client.send_message("1", "hi").unwrap().cloned().unwrap();
        assert_eq!(sent.sender_id, "1");
        assert_eq!(sent.text, "hi");
    }

    #[test]
    fn reactions_and_favorites_require_session() {
        let mut client = MessengerClient::with_builtin_seed().unwrap();
        assert_eq!(client.add_reaction("1", "1", "🔥").unwrap(), None);
        assert_eq!(client.toggle_favorite("1", "1").unwrap(), None);
        let msg = client.conversation("1").unwrap().message("1").unwrap();
        assert!(msg.reactions.is_empty());
        assert!(!msg.is_favorite);

        client.authenticate("me@example.com").unwrap();
        assert_eq!(client.add_reaction("1", "1", "🔥").unwrap(), Some(1));
        assert_eq!(client.toggle_favorite("1", "1").unwrap(), Some(true));
    }

    #[test]
    fn implausible_address_does_not_sign_in() {
        let mut client = MessengerClient::with_builtin_seed().unwrap();
        assert!(client.authenticate("not-an-address").is_none());
        assert!(!client.router().is_authenticated());
    }

    #[test]
    fn saved_profile_updates_session_user() {
        let mut client = MessengerClient::with_builtin_seed().unwrap();
        client.authenticate("me@example.com");
        let mut draft = client.profile_draft().unwrap();
        draft.name = "Brie".into();
        draft.select_avatar("🌟");
        client.save_profile(&draft);
        let user = client.current_user().unwrap();
        assert_eq!(user.name, "Brie");
        assert_eq!(user.avatar_or_default(), "🌟");
    }
}
