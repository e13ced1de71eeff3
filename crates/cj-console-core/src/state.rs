//! Shared authentication/navigation state
//!
//! `AuthState` is the single record the whole console shares. It is updated
//! exclusively through [`AuthState::apply`]: every transition builds a whole
//! new value from the previous one, so state changes are auditable and no
//! handler can leave the record half-updated across a delayed effect.

use serde::{Deserialize, Serialize};

use crate::user::User;

/// Current page identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    /// Sign-in (credentials + security question)
    #[default]
    Login,
    /// Account creation form
    Signup,
    /// Two-step password reset
    ForgotPassword,
    /// Main dashboard with the three management cards
    Dashboard,
    /// User management landing page
    UserManagement,
    /// User list
    Users,
    /// User groups list
    UserGroups,
    /// MCP server list
    McpServers,
    /// Add a new MCP server
    AddMcpServer,
    /// ConnectJunction environment list
    EnvList,
    /// Add a new ConnectJunction environment
    AddEnv,
}

impl Page {
    /// Whether this page is only reachable while authenticated
    pub fn is_protected(self) -> bool {
        !matches!(self, Page::Login | Page::Signup | Page::ForgotPassword)
    }
}

/// Sub-step of the password-reset flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResetStep {
    /// Step 1: identity verification (email + security answer)
    #[default]
    Verify,
    /// Step 2: old/new password replacement
    Replace,
}

/// State transitions accepted by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Security step passed; the carried user becomes the session user
    LoginSucceeded(User),
    /// Clear the session and return to the login page
    Logout,
    /// Explicit navigation to a page
    Navigate(Page),
    /// "Forgot password" link: enter the reset flow at step 1
    StartPasswordReset,
    /// Reset step 1 passed for this user; advance to step 2
    IdentityVerified(User),
    /// Reset finished (redirect fired): back to login, flow cleared
    ResetCompleted,
    /// Step 2 -> step 1 without keeping the verified identity
    ResetBackToVerify,
    /// Sign-up success redirect fired: back to login
    SignupCompleted,
}

/// The single shared authentication/navigation record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    /// Whether a session user is established
    pub is_authenticated: bool,
    /// Session user; `Some` exactly when `is_authenticated`
    pub current_user: Option<User>,
    /// Page the user asked for (the router decides what actually renders)
    pub current_page: Page,
    /// Password-reset sub-step; meaningful only on `Page::ForgotPassword`
    pub reset_step: ResetStep,
    /// Identity-verified user held between reset steps 1 and 2
    pub temp_user: Option<User>,
}

impl AuthState {
    /// Apply a transition, producing the next state.
    ///
    /// The previous value is never mutated; callers replace their copy
    /// wholesale.
    #[must_use]
    pub fn apply(&self, action: Action) -> AuthState {
        tracing::debug!(?action, page = ?self.current_page, "auth transition");
        match action {
            Action::LoginSucceeded(user) => AuthState {
                is_authenticated: true,
                current_user: Some(user),
                current_page: Page::Dashboard,
                ..self.clone()
            },
            Action::Logout => AuthState::default(),
            Action::Navigate(page) => AuthState {
                current_page: page,
                ..self.clone()
            },
            Action::StartPasswordReset => AuthState {
                current_page: Page::ForgotPassword,
                reset_step: ResetStep::Verify,
                temp_user: None,
                ..self.clone()
            },
            Action::IdentityVerified(user) => AuthState {
                reset_step: ResetStep::Replace,
                temp_user: Some(user),
                ..self.clone()
            },
            Action::ResetCompleted => AuthState {
                current_page: Page::Login,
                reset_step: ResetStep::Verify,
                temp_user: None,
                ..self.clone()
            },
            Action::ResetBackToVerify => AuthState {
                reset_step: ResetStep::Verify,
                temp_user: None,
                ..self.clone()
            },
            Action::SignupCompleted => AuthState {
                current_page: Page::Login,
                ..self.clone()
            },
        }
    }
}
