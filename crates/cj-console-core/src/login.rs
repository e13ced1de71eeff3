//! Login flow state machine
//!
//! Two sequential steps: a credential check against the user store, then a
//! security-question confirmation. The confirmation step accepts any answer;
//! that is a flagged behavior of this console (a placeholder pending a real
//! verification backend), preserved deliberately rather than fixed here.

use crate::error::{AuthError, Result};
use crate::state::Action;
use crate::store::UserStore;
use crate::user::User;

/// Where the login flow currently stands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoginFlow {
    /// Step 1: email + password entry
    #[default]
    Credentials,
    /// Step 2: security question, carrying the credential-checked identity
    Security {
        /// User matched in step 1; becomes the session user on submit
        pending: User,
    },
}

impl LoginFlow {
    /// Submit the credential step.
    ///
    /// On success the flow advances to [`LoginFlow::Security`] carrying the
    /// matched user. Password comparison is exact and case-sensitive.
    pub fn submit_credentials(
        &mut self,
        store: &UserStore,
        email: &str,
        password: &str,
    ) -> Result<()> {
        let user = store.find_by_email(email).ok_or(AuthError::UserNotFound)?;

        if user.password != password {
            return Err(AuthError::InvalidPassword);
        }

        *self = LoginFlow::Security {
            pending: user.clone(),
        };
        Ok(())
    }

    /// Submit the security step.
    ///
    /// Accepts any answer: the returned action authenticates the pending
    /// user unconditionally. Returns `None` if the flow is still on the
    /// credential step (nothing to confirm yet).
    pub fn submit_security(&self, _answer: &str) -> Option<Action> {
        match self {
            LoginFlow::Security { pending } => Some(Action::LoginSucceeded(pending.clone())),
            LoginFlow::Credentials => None,
        }
    }

    /// Manual "Back" from the security step to the credential step.
    ///
    /// Entered email/password are form-local and survive this; only the
    /// pending identity is dropped.
    pub fn back(&mut self) {
        *self = LoginFlow::Credentials;
    }

    /// Whether the flow is on the security step
    pub fn on_security_step(&self) -> bool {
        matches!(self, LoginFlow::Security { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AuthState, Page};

    #[test]
    fn test_unknown_email_rejected() {
        let store = UserStore::seeded();
        let mut flow = LoginFlow::default();

        let err = flow
            .submit_credentials(&store, "nobody@example.com", "admin123")
            .unwrap_err();
        assert_eq!(err, AuthError::UserNotFound);
        assert_eq!(flow, LoginFlow::Credentials);
    }

    #[test]
    fn test_wrong_password_rejected() {
        let store = UserStore::seeded();
        let mut flow = LoginFlow::default();

        let err = flow
            .submit_credentials(&store, "admin@cloudjunction.com", "ADMIN123")
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidPassword);
    }

    #[test]
    fn test_correct_credentials_advance() {
        let store = UserStore::seeded();
        let mut flow = LoginFlow::default();

        flow.submit_credentials(&store, "Admin@CloudJunction.com", "admin123")
            .unwrap();
        assert!(flow.on_security_step());
    }

    #[test]
    fn test_security_step_accepts_any_answer() {
        let store = UserStore::seeded();
        let mut flow = LoginFlow::default();
        flow.submit_credentials(&store, "admin@cloudjunction.com", "admin123")
            .unwrap();

        let action = flow.submit_security("wrong-on-purpose").unwrap();
        let state = AuthState::default().apply(action);

        assert!(state.is_authenticated);
        assert_eq!(state.current_page, Page::Dashboard);
    }

    #[test]
    fn test_security_submit_requires_credentials_first() {
        let flow = LoginFlow::default();
        assert!(flow.submit_security("anything").is_none());
    }

    #[test]
    fn test_back_drops_pending_identity() {
        let store = UserStore::seeded();
        let mut flow = LoginFlow::default();
        flow.submit_credentials(&store, "admin@cloudjunction.com", "admin123")
            .unwrap();

        flow.back();
        assert_eq!(flow, LoginFlow::Credentials);
    }
}
