//! In-memory user registry
//!
//! Single-writer, process-local. Mutated in place only by password updates;
//! records are never deleted and nothing is persisted.

use crate::user::{seed_users, User};

/// Registry of all user accounts
#[derive(Debug, Clone)]
pub struct UserStore {
    users: Vec<User>,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl UserStore {
    /// Create a store holding the fixed seed accounts
    pub fn seeded() -> Self {
        Self::with_users(seed_users())
    }

    /// Create a store from an explicit user list (test seam)
    pub fn with_users(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Look up a user by email, case-insensitively.
    ///
    /// Linear scan; the registry holds a handful of records.
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        let needle = email.to_lowercase();
        self.users
            .iter()
            .find(|user| user.email.to_lowercase() == needle)
    }

    /// Replace a user's password, locating the record case-insensitively.
    ///
    /// Returns whether a record was found. No strength validation happens
    /// here; callers validate before updating.
    pub fn update_password(&mut self, email: &str, new_password: &str) -> bool {
        let needle = email.to_lowercase();
        match self
            .users
            .iter_mut()
            .find(|user| user.email.to_lowercase() == needle)
        {
            Some(user) => {
                user.password = new_password.to_string();
                tracing::debug!(email = %user.email, "password updated");
                true
            }
            None => false,
        }
    }

    /// All records, in seed order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("admin@cloudjunction.com")]
    #[case("john.doe@salesforce.com")]
    #[case("jane.smith@salesforce.com")]
    fn test_find_is_case_insensitive(#[case] email: &str) {
        let store = UserStore::seeded();

        let lower = store.find_by_email(email).expect("seeded user");
        let upper = store
            .find_by_email(&email.to_uppercase())
            .expect("uppercased lookup");
        assert_eq!(lower, upper);
        assert_eq!(lower.email, email);
    }

    #[test]
    fn test_find_unknown_email() {
        let store = UserStore::seeded();
        assert!(store.find_by_email("nobody@example.com").is_none());
    }

    #[test]
    fn test_update_password_in_place() {
        let mut store = UserStore::seeded();

        assert!(store.update_password("ADMIN@CLOUDJUNCTION.COM", "newsecret"));
        let user = store.find_by_email("admin@cloudjunction.com").unwrap();
        assert_eq!(user.password, "newsecret");
    }

    #[test]
    fn test_update_password_unknown_user() {
        let mut store = UserStore::seeded();
        assert!(!store.update_password("nobody@example.com", "whatever"));
    }
}
