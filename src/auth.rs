use log::{debug, info};

use crate::api::models::{LOCAL_USER_ID, User};

pub const DEFAULT_CODE_LENGTH: usize = 6;
pub const MAX_CODE_LENGTH: usize = 32;

/// Minimal shape check; it only gates the "get code" button.
pub fn is_plausible_address(address: &str) -> bool {
    address.contains('@') && address.contains('.')
}

/// The user every successful sign-in produces.
pub fn user_for(address: &str) -> User {
    User {
        id: LOCAL_USER_ID.to_string(),
        name: "User".to_string(),
        address: address.to_string(),
        avatar: Some("🧀".to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStep {
    Address,
    Code { address: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeOutcome {
    /// Keep collecting characters.
    Incomplete,
    /// The code reached full length; the flow is done for `address`.
    Accepted { address: String },
    /// A code arrived before an address was submitted.
    Ignored,
}

/// Two-step sign-in: address, then a fixed-length code. Any code of the
/// right length is accepted.
#[derive(Debug, Clone)]
pub struct AuthFlow {
    step: AuthStep,
    address: String,
    code: String,
    code_length: usize,
}

impl Default for AuthFlow {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl AuthFlow {
    /// `code_length` is clamped to `1..=MAX_CODE_LENGTH`.
    pub fn new(code_length: usize) -> Self {
        Self {
            step: AuthStep::Address,
            address: String::new(),
            code: String::new(),
            code_length: code_length.clamp(1, MAX_CODE_LENGTH),
        }
    }

    pub fn step(&self) -> &AuthStep {
        &self.step
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn code_length(&self) -> usize {
        self.code_length
    }

    pub fn set_address(&mut self, address: &str) {
        self.address = address.to_string();
    }

    pub fn can_request_code(&self) -> bool {
        is_plausible_address(&self.address)
    }

    /// Moves to the code step. Returns false, leaving the flow untouched,
    /// when the address fails the shape check.
    pub fn request_code(&mut self) -> bool {
        if !self.can_request_code() {
            return false;
        }
        info!("Verification code requested for {}", self.address);
        self.code.clear();
        self.step = AuthStep::Code {
            address: self.address.clone(),
        };
        true
    }

    /// Replaces the typed code. Input longer than the code length is cut.
    pub fn enter_code(&mut self, code: &str) -> CodeOutcome {
        let AuthStep::Code { address } = &self.step else {
            debug!("Code entered before address; ignoring");
            return CodeOutcome::Ignored;
        };
        self.code = code.chars().take(self.code_length).collect();
        if self.code.chars().count() == self.code_length {
            CodeOutcome::Accepted {
                address: address.clone(),
            }
        } else {
            CodeOutcome::Incomplete
        }
    }

    /// Back to the address step, keeping the typed address.
    pub fn change_address(&mut self) {
        self.code.clear();
        self.step = AuthStep::Address;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_shape() {
        assert!(is_plausible_address("me@example.com"));
        assert!(!is_plausible_address("me@example"));
        assert!(!is_plausible_address("me.example.com"));
        assert!(!is_plausible_address(""));
    }

    #[test]
    fn bad_address_does_not_advance() {
        let mut flow = AuthFlow::default();
        flow.set_address("nobody");
        assert!(!flow.request_code());
        assert_eq!(flow.step(), &AuthStep::Address);
    }

    #[test]
    fn any_full_length_code_is_accepted() {
        let mut flow = AuthFlow::default();
        flow.set_address("me@example.com");
        assert!(flow.request_code());
        assert_eq!(flow.enter_code("12"), CodeOutcome::Incomplete);
        assert_eq!(
            flow.enter_code("zzzzzz"),
            CodeOutcome::Accepted {
                address: "me@example.com".into()
            }
        );
    }

    #[test]
    fn long_code_is_truncated() {
        let mut flow = AuthFlow::new(4);
        flow.set_address("me@example.com");
        flow.request_code();
        assert!(matches!(
            flow.enter_code("123456"),
            CodeOutcome::Accepted { .. }
        ));
        assert_eq!(flow.code(), "1234");
    }

    #[test]
    fn code_length_is_clamped() {
        assert_eq!(AuthFlow::new(0).code_length(), 1);
        assert_eq!(AuthFlow::new(usize::MAX).code_length(), MAX_CODE_LENGTH);
        assert_eq!(AuthFlow::new(4).code_length(), 4);
    }

    #[test]
    fn code_before_address_is_ignored() {
        let mut flow = AuthFlow::default();
        assert_eq!(flow.enter_code("123456"), CodeOutcome::Ignored);
        assert!(flow.code().is_empty());
    }

    #[test]
    fn change_address_clears_code() {
        let mut flow = AuthFlow::default();
        flow.set_address("me@example.com");
        flow.request_code();
        flow.enter_code("123");
        flow.change_address();
        assert_eq!(flow.step(), &AuthStep::Address);
        assert!(flow.code().is_empty());
        assert_eq!(flow.address(), "me@example.com");
    }

    #[test]
    fn fabricated_user_carries_address() {
        let user = user_for("me@example.com");
        assert_eq!(user.id, LOCAL_USER_ID);
        assert_eq!(user.address, "me@example.com");
        assert_eq!(user.avatar.as_deref(), Some("🧀"));
    }
}
