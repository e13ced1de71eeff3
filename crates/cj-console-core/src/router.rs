//! Page router
//!
//! Pure mapping from [`AuthState`] to the page that actually renders. There
//! is no history stack and no URL: "back" is an explicit state transition.

use crate::state::{AuthState, Page};

/// Decide which page to render for the given state.
///
/// Precedence matters: the authenticated + protected check comes first, so a
/// protected page can never leak to an unauthenticated session, while an
/// authenticated user can still explicitly sit on Login or Signup (logout
/// does exactly that). Anything unrecognized for an unauthenticated session
/// falls through to Login.
pub fn route(state: &AuthState) -> Page {
    if state.is_authenticated && state.current_page.is_protected() {
        return state.current_page;
    }

    match state.current_page {
        Page::Signup => Page::Signup,
        Page::ForgotPassword => Page::ForgotPassword,
        _ => Page::Login,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ResetStep;
    use crate::user::seed_users;
    use rstest::rstest;

    fn authed(page: Page) -> AuthState {
        AuthState {
            is_authenticated: true,
            current_user: Some(seed_users().remove(0)),
            current_page: page,
            reset_step: ResetStep::Verify,
            temp_user: None,
        }
    }

    fn anon(page: Page) -> AuthState {
        AuthState {
            current_page: page,
            ..AuthState::default()
        }
    }

    #[rstest]
    #[case(Page::Dashboard)]
    #[case(Page::UserManagement)]
    #[case(Page::Users)]
    #[case(Page::UserGroups)]
    #[case(Page::McpServers)]
    #[case(Page::AddMcpServer)]
    #[case(Page::EnvList)]
    #[case(Page::AddEnv)]
    fn test_authenticated_reaches_protected_pages(#[case] page: Page) {
        assert_eq!(route(&authed(page)), page);
    }

    #[rstest]
    #[case(Page::Dashboard)]
    #[case(Page::McpServers)]
    #[case(Page::AddEnv)]
    fn test_protected_pages_never_leak_unauthenticated(#[case] page: Page) {
        assert_eq!(route(&anon(page)), Page::Login);
    }

    #[test]
    fn test_public_pages_dispatch() {
        assert_eq!(route(&anon(Page::Login)), Page::Login);
        assert_eq!(route(&anon(Page::Signup)), Page::Signup);
        assert_eq!(route(&anon(Page::ForgotPassword)), Page::ForgotPassword);
    }

    #[test]
    fn test_authenticated_can_sit_on_public_pages() {
        // Logout-style navigation: an authenticated state pointed at a
        // public page renders that public page, not a protected one.
        assert_eq!(route(&authed(Page::Login)), Page::Login);
        assert_eq!(route(&authed(Page::Signup)), Page::Signup);
    }
}
