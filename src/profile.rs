use crate::api::models::User;

pub const AVATAR_EMOJIS: [&str; 10] = ["🧀", "🧈", "🤠", "👤", "😊", "🎉", "🌟", "🔥", "💫", "🎨"];

/// Editable copy of the profile panel's fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    avatar: String,
    pub notifications: bool,
    pub dark_mode: bool,
}

impl ProfileDraft {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            avatar: user.avatar.clone().unwrap_or_else(|| AVATAR_EMOJIS[0].to_string()),
            notifications: true,
            dark_mode: false,
        }
    }

    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    /// Only palette emoji are accepted.
    pub fn select_avatar(&mut self, emoji: &str) -> bool {
        if AVATAR_EMOJIS.contains(&emoji) {
            self.avatar = emoji.to_string();
            true
        } else {
            false
        }
    }

    /// Copies name and avatar onto `user`. A blank name leaves the old one.
    pub fn apply_to(&self, user: &mut User) {
        let name = self.name.trim();
        if !name.is_empty() {
            user.name = name.to_string();
        }
        user.avatar = Some(self.avatar.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::user_for;

    #[test]
    fn defaults_follow_user() {
        let draft = ProfileDraft::from_user(&user_for("me@example.com"));
        assert_eq!(draft.name, "User");
        assert_eq!(draft.avatar(), "🧀");
        assert!(draft.notifications);
        assert!(!draft.dark_mode);
    }

    #[test]
    fn avatar_outside_palette_is_ignored() {
        let mut draft = ProfileDraft::from_user(&user_for("me@example.com"));
        assert!(!draft.select_avatar("🐍"));
        assert_eq!(draft.avatar(), "🧀");
        assert!(draft.select_avatar("🎨"));
        assert_eq!(draft.avatar(), "🎨");
    }

    #[test]
    fn blank_name_keeps_previous() {
        let mut user = user_for("me@example.com");
        let mut draft = ProfileDraft::from_user(&user);
        draft.name = "   ".into();
        draft.select_avatar("🔥");
        draft.apply_to(&mut user);
        assert_eq!(user.name, "User");
        assert_eq!(user.avatar.as_deref(), Some("🔥"));
    }
}
