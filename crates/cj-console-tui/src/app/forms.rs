//! Form-local screen state
//!
//! Each screen owns its input buffers, focus position and inline messages.
//! None of this is shared state: it exists only while its screen does, and
//! the auth screens clear it when their flow exits.

use cj_console_core::{AuthError, LoginFlow, ResetFlow, ServerRegistry, SignupForm};

/// Focusable fields on the login screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
    Question,
    Answer,
}

/// Login screen state (both sub-steps)
#[derive(Debug, Default)]
pub struct LoginScreen {
    pub flow: LoginFlow,
    pub email: String,
    pub password: String,
    /// Index into [`cj_console_core::LOGIN_SECURITY_QUESTIONS`]
    pub question_index: usize,
    pub answer: String,
    pub focus: LoginField,
    pub error: Option<AuthError>,
    /// A credential check is in flight (simulated latency)
    pub checking: bool,
}

impl LoginScreen {
    /// Reset to a blank credentials step
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Buffer currently receiving typed characters
    pub fn focused_buffer(&mut self) -> Option<&mut String> {
        match self.focus {
            LoginField::Email => Some(&mut self.email),
            LoginField::Password => Some(&mut self.password),
            LoginField::Answer => Some(&mut self.answer),
            LoginField::Question => None,
        }
    }
}

/// Focusable fields on the sign-up screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupField {
    #[default]
    Email,
    Password,
    RetypePassword,
    Question,
    Answer,
}

impl SignupField {
    pub fn next(self) -> Self {
        match self {
            SignupField::Email => SignupField::Password,
            SignupField::Password => SignupField::RetypePassword,
            SignupField::RetypePassword => SignupField::Question,
            SignupField::Question => SignupField::Answer,
            SignupField::Answer => SignupField::Email,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SignupField::Email => SignupField::Answer,
            SignupField::Password => SignupField::Email,
            SignupField::RetypePassword => SignupField::Password,
            SignupField::Question => SignupField::RetypePassword,
            SignupField::Answer => SignupField::Question,
        }
    }
}

/// Sign-up screen state
#[derive(Debug, Default)]
pub struct SignupScreen {
    pub email: String,
    pub password: String,
    pub retype_password: String,
    /// Index into [`cj_console_core::SIGNUP_SECURITY_QUESTIONS`];
    /// `None` until the user picks one
    pub question_index: Option<usize>,
    pub answer: String,
    pub focus: SignupField,
    pub error: Option<AuthError>,
    pub success: Option<String>,
}

impl SignupScreen {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Assemble the validation input from the buffers
    pub fn to_form(&self) -> SignupForm {
        SignupForm {
            email: self.email.clone(),
            password: self.password.clone(),
            retype_password: self.retype_password.clone(),
            security_question: self
                .question_index
                .map(|i| cj_console_core::SIGNUP_SECURITY_QUESTIONS[i].to_string()),
            security_answer: self.answer.clone(),
        }
    }

    pub fn focused_buffer(&mut self) -> Option<&mut String> {
        match self.focus {
            SignupField::Email => Some(&mut self.email),
            SignupField::Password => Some(&mut self.password),
            SignupField::RetypePassword => Some(&mut self.retype_password),
            SignupField::Answer => Some(&mut self.answer),
            SignupField::Question => None,
        }
    }
}

/// Focusable fields on the reset screen (both steps)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetField {
    #[default]
    Email,
    Answer,
    OldPassword,
    NewPassword,
    ConfirmPassword,
}

/// Forgot-password screen state
#[derive(Debug, Default)]
pub struct ResetScreen {
    pub flow: ResetFlow,
    pub email: String,
    pub answer: String,
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
    pub focus: ResetField,
    pub error: Option<AuthError>,
    pub success: Option<String>,
    /// An identity check is in flight (simulated latency)
    pub checking: bool,
}

impl ResetScreen {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn focused_buffer(&mut self) -> Option<&mut String> {
        match self.focus {
            ResetField::Email => Some(&mut self.email),
            ResetField::Answer => Some(&mut self.answer),
            ResetField::OldPassword => Some(&mut self.old_password),
            ResetField::NewPassword => Some(&mut self.new_password),
            ResetField::ConfirmPassword => Some(&mut self.confirm_password),
        }
    }
}

/// Interaction mode of a resource list screen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListMode {
    /// Keys act as commands (clone/edit/delete)
    #[default]
    Browse,
    /// Typed characters edit the selected record's name
    Renaming { buffer: String },
}

/// State for the MCP server and environment list screens
#[derive(Debug, Default)]
pub struct ResourceScreen {
    pub registry: ServerRegistry,
    pub selected: usize,
    pub mode: ListMode,
    pub status: Option<String>,
}

impl ResourceScreen {
    /// Replace the registry with fresh seeds (screen mount)
    pub fn mount(&mut self, registry: ServerRegistry) {
        self.registry = registry;
        self.selected = 0;
        self.mode = ListMode::Browse;
        self.status = None;
    }

    /// Id of the currently selected record
    pub fn selected_id(&self) -> Option<u32> {
        self.registry.list().get(self.selected).map(|record| record.id)
    }

    /// Keep the selection inside the list after a removal
    pub fn clamp_selection(&mut self) {
        if self.selected >= self.registry.len() {
            self.selected = self.registry.len().saturating_sub(1);
        }
    }
}

/// State for the add-server / add-environment forms
#[derive(Debug, Default)]
pub struct AddScreen {
    pub name: String,
    pub error: Option<String>,
}

impl AddScreen {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// All form-local state, one slot per screen
#[derive(Debug, Default)]
pub struct UiState {
    pub login: LoginScreen,
    pub signup: SignupScreen,
    pub reset: ResetScreen,
    /// Dashboard menu selection index
    pub menu_index: usize,
    pub mcp: ResourceScreen,
    pub envs: ResourceScreen,
    pub add_mcp: AddScreen,
    pub add_env: AddScreen,
    /// User list selection index
    pub user_index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use cj_console_core::ServerRegistry;

    #[test]
    fn test_signup_focus_cycle_roundtrip() {
        let mut field = SignupField::Email;
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, SignupField::Email);
        assert_eq!(SignupField::Email.prev(), SignupField::Answer);
    }

    #[test]
    fn test_resource_screen_mount_resets_everything() {
        let mut screen = ResourceScreen::default();
        screen.mount(ServerRegistry::seed_mcp_servers());
        screen.selected = 4;
        screen.mode = ListMode::Renaming {
            buffer: "x".to_string(),
        };
        screen.status = Some("Cloned".to_string());

        screen.mount(ServerRegistry::seed_mcp_servers());
        assert_eq!(screen.selected, 0);
        assert_eq!(screen.mode, ListMode::Browse);
        assert!(screen.status.is_none());
        assert_eq!(screen.registry.len(), 5);
    }

    #[test]
    fn test_clamp_selection_after_removal() {
        let mut screen = ResourceScreen::default();
        screen.mount(ServerRegistry::seed_mcp_servers());
        screen.selected = 4;

        screen.registry.remove(5);
        screen.clamp_selection();
        assert_eq!(screen.selected, 3);
    }

    #[test]
    fn test_signup_form_assembly() {
        let mut screen = SignupScreen::default();
        screen.question_index = Some(0);
        let form = screen.to_form();
        assert_eq!(
            form.security_question.as_deref(),
            Some("What was the name of your first pet?")
        );
    }
}
