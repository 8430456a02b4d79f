use cheesehome::MessengerClient;
use cheesehome::api::events::Action;
use cheesehome::auth::{AuthFlow, CodeOutcome, user_for};
use cheesehome::config::Config;
use cheesehome::router::{CallKind, Screen, SidePane, Tab};

fn signed_in_client() -> MessengerClient {
    let mut client = MessengerClient::with_builtin_seed().expect("builtin seed loads");
    client
        .authenticate("me@example.com")
        .expect("plausible address signs in");
    client
}

#[test]
fn test_seeded_conversation_scenario() {
    let mut client = signed_in_client();
    assert_eq!(client.conversation("1").unwrap().messages.len(), 3);

    client.send_message("1", "hi").unwrap();
    let conv = client.conversation("1").unwrap();
    assert_eq!(conv.messages.len(), 4);
    assert_eq!(conv.last_message().unwrap().text, "hi");

    // Message 2 already carries one 👍 in the seed, so start from a fresh emoji too.
    client.add_reaction("1", "3", "👍").unwrap();
    client.add_reaction("1", "3", "👍").unwrap();
    let msg = client.conversation("1").unwrap().message("3").unwrap();
    assert_eq!(msg.reactions.len(), 1);
    assert_eq!(msg.reaction("👍").unwrap().count, 2);
}

#[test]
fn test_reaction_on_seeded_tally_accumulates() {
    let mut client = signed_in_client();
    assert_eq!(client.add_reaction("1", "2", "👍").unwrap(), Some(2));
    let msg = client.conversation("1").unwrap().message("2").unwrap();
    assert_eq!(msg.reactions.len(), 1);
    assert_eq!(msg.reaction("👍").unwrap().count, 2);
}

#[test]
fn test_distinct_emojis_make_distinct_tallies() {
    let mut client = signed_in_client();
    client.add_reaction("4", "1", "❤️").unwrap();
    client.add_reaction("4", "1", "🔥").unwrap();
    let msg = client.conversation("4").unwrap().message("1").unwrap();
    assert_eq!(msg.reactions.len(), 2);
    assert!(msg.reactions.iter().all(|r| r.count == 1));
}

#[test]
fn test_whitespace_message_is_dropped() {
    let mut client = signed_in_client();
    let before = client.conversation("2").unwrap().messages.len();
    assert!(client.send_message("2", "   ").unwrap().is_none());
    assert!(client.send_message("2", "").unwrap().is_none());
    assert_eq!(client.conversation("2").unwrap().messages.len(), before);
}

#[test]
fn test_toggle_favorite_twice_restores_flag() {
    let mut client = signed_in_client();
    for (conv, msg) in [("1", "1"), ("1", "3")] {
        let original = client.conversation(conv).unwrap().message(msg).unwrap().is_favorite;
        client.toggle_favorite(conv, msg).unwrap();
        client.toggle_favorite(conv, msg).unwrap();
        let after = client.conversation(conv).unwrap().message(msg).unwrap().is_favorite;
        assert_eq!(original, after);
    }
}

#[test]
fn test_favorites_reflect_store() {
    let mut client = signed_in_client();
    let seeded: Vec<_> = client.favorites().into_iter().map(|f| f.text).collect();
    assert_eq!(
        seeded,
        [
            "Fine too, thanks 😊",
            "Great idea! 🎉",
            "Don't forget about tomorrow's meeting!"
        ]
    );

    client.toggle_favorite("4", "1").unwrap();
    let last = client.favorites().pop().unwrap();
    assert_eq!(last.conversation_name, "Olga Parmesan");
}

#[test]
fn test_search_views() {
    let client = signed_in_client();
    assert_eq!(client.list_conversations().len(), 4);
    assert_eq!(client.search_conversations("").len(), 4);
    assert_eq!(client.search_contacts("").len(), client.contacts().len());
    assert_eq!(client.search_groups("").len(), client.groups().len());
    let hits: Vec<_> = client
        .search_conversations("mozz")
        .into_iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(hits, ["3"]);
    assert!(client.search_groups("nothing like this").is_empty());
    assert_eq!(client.search_contacts("+7 999 5").len(), 1);
}

#[test]
fn test_auth_flow_to_messenger() {
    let config = Config::default();
    let mut flow = AuthFlow::new(config.code_length);
    flow.set_address("cheese@example.org");
    assert!(flow.request_code());
    let CodeOutcome::Accepted { address } = flow.enter_code("000000") else {
        panic!("six characters should complete the code");
    };

    let mut client = MessengerClient::with_builtin_seed().unwrap();
    assert_eq!(client.router().screen(), Screen::Auth);
    let user = client.authenticate(&address).expect("address already validated");
    assert_eq!(user, user_for("cheese@example.org"));
    assert_eq!(client.router().screen(), Screen::Messenger);
    assert_eq!(client.router().side_pane(), SidePane::Tab(Tab::Chats));
}

#[test]
fn test_logout_resets_navigation() {
    let mut client = signed_in_client();
    client.dispatch(Action::SelectTab(Tab::Groups));
    client.dispatch(Action::SelectConversation("3".into()));
    client.dispatch(Action::OpenCall(CallKind::Audio));
    assert_eq!(client.selected_conversation().unwrap().name, "Maxim Mozzarella");

    client.logout();
    let router = client.router();
    assert_eq!(router.screen(), Screen::Auth);
    assert!(router.selected_conversation().is_none());
    assert!(!router.is_call_open(CallKind::Audio));
    assert_eq!(router.active_tab(), Tab::Chats);
}
