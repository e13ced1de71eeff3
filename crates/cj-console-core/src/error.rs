//! Error types for the console core

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Validation failures surfaced to the user.
///
/// Every variant is recoverable: the UI renders the display string inline
/// next to the form that produced it and waits for re-submission. Display
/// strings are the exact messages shown in the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No user record matches the entered email
    #[error("User not found")]
    UserNotFound,

    /// Password does not match the stored one (exact compare)
    #[error("Invalid password")]
    InvalidPassword,

    /// Security answer does not match (case-insensitive compare)
    #[error("Incorrect security answer")]
    WrongAnswer,

    /// Current password entered during reset is wrong
    #[error("Current password is incorrect")]
    WrongOldPassword,

    /// New password and its confirmation differ
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// New password is shorter than the minimum
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,

    /// No security question was selected during sign-up
    #[error("Please select a security question")]
    NoQuestionSelected,

    /// Security answer was empty (after trimming) during sign-up
    #[error("Please provide an answer to the security question")]
    NoAnswerProvided,
}
