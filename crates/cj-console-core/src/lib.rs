//! Core state machines and stores for the CloudJunction admin console
//!
//! This crate has no UI dependencies. It owns:
//! - the in-memory [`UserStore`](store::UserStore) and its seed accounts,
//! - the shared [`AuthState`](state::AuthState) record and its reducer,
//! - the pure page [`router`](router::route),
//! - the login, password-reset and sign-up flows,
//! - the screen-local [`ServerRegistry`](servers::ServerRegistry) backing
//!   the resource tables.
//!
//! The terminal front-end (`cj-console-tui`) renders whatever these decide.

pub mod error;
pub mod login;
pub mod reset;
pub mod router;
pub mod servers;
pub mod signup;
pub mod state;
pub mod store;
pub mod user;

pub use error::{AuthError, Result};
pub use login::LoginFlow;
pub use reset::{ResetFlow, MIN_PASSWORD_LENGTH};
pub use router::route;
pub use servers::{ServerRecord, ServerRegistry, ServerStatus};
pub use signup::SignupForm;
pub use state::{Action, AuthState, Page, ResetStep};
pub use store::UserStore;
pub use user::{seed_users, User, LOGIN_SECURITY_QUESTIONS, SIGNUP_SECURITY_QUESTIONS};
