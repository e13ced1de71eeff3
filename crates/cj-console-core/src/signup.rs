//! Sign-up form validation
//!
//! Single-step, stateless. Validation passing shows a success message and
//! redirects to login; the new account is never inserted into the user
//! store. That stub behavior comes from the product and is preserved here
//! until persistence is an explicit goal.

use crate::error::{AuthError, Result};
use crate::reset::MIN_PASSWORD_LENGTH;

/// Raw sign-up form input
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub retype_password: String,
    /// Selected question, `None` until the user picks one
    pub security_question: Option<String>,
    pub security_answer: String,
}

impl SignupForm {
    /// Validate the form. Checks short-circuit in order: password
    /// confirmation, minimum length, question selected, answer non-empty
    /// (after trimming).
    pub fn validate(&self) -> Result<()> {
        if self.password != self.retype_password {
            return Err(AuthError::PasswordMismatch);
        }

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::PasswordTooShort);
        }

        if self
            .security_question
            .as_deref()
            .map_or(true, |question| question.is_empty())
        {
            return Err(AuthError::NoQuestionSelected);
        }

        if self.security_answer.trim().is_empty() {
            return Err(AuthError::NoAnswerProvided);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SignupForm {
        SignupForm {
            email: "new.user@example.com".to_string(),
            password: "secret99".to_string(),
            retype_password: "secret99".to_string(),
            security_question: Some("What is your favorite movie?".to_string()),
            security_answer: "blade runner".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_password_mismatch_checked_first() {
        let form = SignupForm {
            password: "abc".to_string(),
            retype_password: "xyz".to_string(),
            ..valid_form()
        };
        // Also too short, but the mismatch is reported first.
        assert_eq!(form.validate().unwrap_err(), AuthError::PasswordMismatch);
    }

    #[test]
    fn test_short_password_rejected() {
        let form = SignupForm {
            password: "five5".to_string(),
            retype_password: "five5".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate().unwrap_err(), AuthError::PasswordTooShort);
    }

    #[test]
    fn test_missing_question_rejected() {
        let form = SignupForm {
            security_question: None,
            ..valid_form()
        };
        assert_eq!(form.validate().unwrap_err(), AuthError::NoQuestionSelected);
    }

    #[test]
    fn test_blank_answer_rejected() {
        let form = SignupForm {
            security_answer: "   ".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate().unwrap_err(), AuthError::NoAnswerProvided);
    }
}
