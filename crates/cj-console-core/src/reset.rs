//! Password-reset flow state machine
//!
//! Step 1 verifies identity (email + security answer), step 2 replaces the
//! password. The verified identity travels inside the `Replace` variant, so
//! "step 2 without a verified user" is unrepresentable.

use crate::error::{AuthError, Result};
use crate::state::Action;
use crate::store::UserStore;
use crate::user::User;

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Where the reset flow currently stands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResetFlow {
    /// Step 1: email + security answer
    #[default]
    Verify,
    /// Step 2: old/new password entry for the verified user
    Replace {
        /// Identity verified in step 1
        temp_user: User,
    },
}

impl ResetFlow {
    /// Submit step 1.
    ///
    /// The security answer is compared case-insensitively against the
    /// stored one. On success the flow advances and the returned action
    /// records the verified identity in the shared state.
    pub fn verify(&mut self, store: &UserStore, email: &str, answer: &str) -> Result<Action> {
        let user = store.find_by_email(email).ok_or(AuthError::UserNotFound)?;

        if user.security_answer.to_lowercase() != answer.to_lowercase() {
            return Err(AuthError::WrongAnswer);
        }

        let user = user.clone();
        *self = ResetFlow::Replace {
            temp_user: user.clone(),
        };
        Ok(Action::IdentityVerified(user))
    }

    /// Submit step 2. Checks short-circuit in order: old password (exact),
    /// new/confirm equality, then minimum length. On success the store is
    /// updated immediately; the caller shows the success message and
    /// schedules the redirect back to login.
    pub fn replace(
        &self,
        store: &mut UserStore,
        old_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<()> {
        let ResetFlow::Replace { temp_user } = self else {
            // Step 2 submitted without a verified identity; treat as a
            // failed lookup rather than panicking.
            return Err(AuthError::UserNotFound);
        };

        if temp_user.password != old_password {
            return Err(AuthError::WrongOldPassword);
        }

        if new_password != confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        if new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::PasswordTooShort);
        }

        store.update_password(&temp_user.email, new_password);
        tracing::info!(email = %temp_user.email, "password reset completed");
        Ok(())
    }

    /// "Back to step 1": drop the verified identity without persisting
    /// any partial edits.
    pub fn back_to_verify(&mut self) {
        *self = ResetFlow::Verify;
    }

    /// Whether the flow is on the replacement step
    pub fn on_replace_step(&self) -> bool {
        matches!(self, ResetFlow::Replace { .. })
    }

    /// The verified identity, if step 1 has passed
    pub fn temp_user(&self) -> Option<&User> {
        match self {
            ResetFlow::Replace { temp_user } => Some(temp_user),
            ResetFlow::Verify => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const ADMIN: &str = "admin@cloudjunction.com";

    #[rstest]
    #[case("buddy")]
    #[case("BUDDY")]
    #[case("Buddy")]
    fn test_verify_answer_is_case_insensitive(#[case] answer: &str) {
        let store = UserStore::seeded();
        let mut flow = ResetFlow::default();

        flow.verify(&store, ADMIN, answer).unwrap();
        assert!(flow.on_replace_step());
    }

    #[test]
    fn test_verify_wrong_answer() {
        let store = UserStore::seeded();
        let mut flow = ResetFlow::default();

        let err = flow.verify(&store, ADMIN, "wrong").unwrap_err();
        assert_eq!(err, AuthError::WrongAnswer);
        assert!(!flow.on_replace_step());
    }

    #[test]
    fn test_verify_unknown_email() {
        let store = UserStore::seeded();
        let mut flow = ResetFlow::default();

        let err = flow.verify(&store, "ghost@example.com", "buddy").unwrap_err();
        assert_eq!(err, AuthError::UserNotFound);
    }

    fn verified_flow(store: &UserStore) -> ResetFlow {
        let mut flow = ResetFlow::default();
        flow.verify(store, ADMIN, "buddy").unwrap();
        flow
    }

    #[test]
    fn test_replace_wrong_old_password() {
        let mut store = UserStore::seeded();
        let flow = verified_flow(&store);

        let err = flow
            .replace(&mut store, "nope", "longenough", "longenough")
            .unwrap_err();
        assert_eq!(err, AuthError::WrongOldPassword);
    }

    #[test]
    fn test_replace_mismatched_confirmation() {
        let mut store = UserStore::seeded();
        let flow = verified_flow(&store);

        let err = flow
            .replace(&mut store, "admin123", "longenough", "different")
            .unwrap_err();
        assert_eq!(err, AuthError::PasswordMismatch);
    }

    #[test]
    fn test_replace_too_short() {
        let mut store = UserStore::seeded();
        let flow = verified_flow(&store);

        let err = flow
            .replace(&mut store, "admin123", "short", "short")
            .unwrap_err();
        assert_eq!(err, AuthError::PasswordTooShort);
    }

    #[test]
    fn test_mismatch_wins_over_length() {
        // Both checks would fail; confirmation mismatch is reported first.
        let mut store = UserStore::seeded();
        let flow = verified_flow(&store);

        let err = flow.replace(&mut store, "admin123", "abc", "xyz").unwrap_err();
        assert_eq!(err, AuthError::PasswordMismatch);
    }

    #[test]
    fn test_replace_updates_store() {
        let mut store = UserStore::seeded();
        let flow = verified_flow(&store);

        flow.replace(&mut store, "admin123", "longenough", "longenough")
            .unwrap();
        assert_eq!(store.find_by_email(ADMIN).unwrap().password, "longenough");
    }

    #[test]
    fn test_back_to_verify_drops_identity() {
        let store = UserStore::seeded();
        let mut flow = verified_flow(&store);

        flow.back_to_verify();
        assert_eq!(flow, ResetFlow::Verify);
        assert!(flow.temp_user().is_none());
    }
}
