//! User records and seed data
//!
//! Credentials and security answers are held in plaintext. This console has
//! no real authentication backend; the seed list below is the only
//! configuration-like artifact in the system and resets on every restart.

use serde::{Deserialize, Serialize};

/// A user account record.
///
/// `email` is the unique key; lookups compare it case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique account email (case-insensitive key)
    pub email: String,
    /// Plaintext password (exact, case-sensitive compare at login)
    pub password: String,
    /// The question this user chose at enrollment
    pub security_question: String,
    /// Plaintext answer (case-insensitive compare during reset)
    pub security_answer: String,
}

impl User {
    /// Create a user record
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        security_question: impl Into<String>,
        security_answer: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            security_question: security_question.into(),
            security_answer: security_answer.into(),
        }
    }
}

/// Questions offered on the login verification step
pub const LOGIN_SECURITY_QUESTIONS: [&str; 3] = [
    "What is your mother's maiden name?",
    "What was your first pet's name?",
    "What city were you born in?",
];

/// Questions offered on the sign-up form
pub const SIGNUP_SECURITY_QUESTIONS: [&str; 6] = [
    "What was the name of your first pet?",
    "What city were you born in?",
    "What was your high school mascot?",
    "What is your mother's maiden name?",
    "What was the name of your first school?",
    "What is your favorite movie?",
];

/// The fixed accounts the store is seeded with at startup
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(
            "admin@cloudjunction.com",
            "admin123",
            "What was the name of your first pet?",
            "buddy",
        ),
        User::new(
            "john.doe@salesforce.com",
            "john123",
            "What city were you born in?",
            "newyork",
        ),
        User::new(
            "jane.smith@salesforce.com",
            "jane123",
            "What was your high school mascot?",
            "eagles",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_emails_are_unique() {
        let users = seed_users();
        let mut emails: Vec<String> = users.iter().map(|u| u.email.to_lowercase()).collect();
        emails.sort();
        emails.dedup();
        assert_eq!(emails.len(), users.len());
    }

    #[test]
    fn test_seed_count() {
        assert_eq!(seed_users().len(), 3);
    }
}
