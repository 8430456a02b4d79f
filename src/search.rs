use crate::api::models::{Contact, Conversation, Group};

/// Something a search box can filter.
pub trait Searchable {
    fn display_name(&self) -> &str;

    /// `needle` is the query already lowercased; `raw` is the query as typed.
    fn matches(&self, needle: &str, _raw: &str) -> bool {
        self.display_name().to_lowercase().contains(needle)
    }
}

impl Searchable for Conversation {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Searchable for Group {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Searchable for Contact {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn matches(&self, needle: &str, raw: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.phone.contains(raw)
    }
}

/// Case-insensitive substring filter on display name, keeping the input
/// order. An empty query matches everything.
pub fn filter_by_search_text<'a, T: Searchable>(entities: &'a [T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return entities.iter().collect();
    }
    let needle = query.to_lowercase();
    entities
        .iter()
        .filter(|e| e.matches(&needle, query))
        .collect()
}

/// Splits contacts into those already in the messenger and those to invite.
pub fn partition_contacts<'a>(contacts: &[&'a Contact]) -> (Vec<&'a Contact>, Vec<&'a Contact>) {
    contacts.iter().copied().partition(|c| c.in_messenger)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, phone: &str, in_messenger: bool) -> Contact {
        Contact {
            id: name.to_lowercase(),
            name: name.into(),
            phone: phone.into(),
            avatar: "🧀".into(),
            is_online: false,
            in_messenger,
        }
    }

    fn group(name: &str) -> Group {
        Group {
            id: name.to_lowercase(),
            name: name.into(),
            avatar: "🎉".into(),
            members: 3,
            last_message: None,
            unread: None,
        }
    }

    #[test]
    fn empty_query_keeps_everything_in_order() {
        let groups = vec![group("Work"), group("Family"), group("Friends")];
        let names: Vec<_> = filter_by_search_text(&groups, "")
            .into_iter()
            .map(|g| g.name.as_str())
            .collect();
        assert_eq!(names, ["Work", "Family", "Friends"]);
    }

    #[test]
    fn match_ignores_case() {
        let groups = vec![group("Work"), group("Family"), group("Friends")];
        let names: Vec<_> = filter_by_search_text(&groups, "FR")
            .into_iter()
            .map(|g| g.name.as_str())
            .collect();
        assert_eq!(names, ["Friends"]);
        assert!(filter_by_search_text(&groups, "zzz").is_empty());
    }

    #[test]
    fn contacts_match_on_phone() {
        let contacts = vec![
            contact("Anna", "+7 999 123 45 67", true),
            contact("Dmitry", "+7 999 456 78 90", false),
        ];
        let hits = filter_by_search_text(&contacts, "456");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Dmitry");
    }

    #[test]
    fn partition_keeps_order() {
        let contacts = vec![
            contact("Anna", "1", true),
            contact("Dmitry", "2", false),
            contact("Elena", "3", true),
        ];
        let refs: Vec<&Contact> = contacts.iter().collect();
        let (members, others) = partition_contacts(&refs);
        assert_eq!(
            members.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            ["Anna", "Elena"]
        );
        assert_eq!(others.len(), 1);
        assert_eq!(others[0].name, "Dmitry");
    }
}
