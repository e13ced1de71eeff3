//! Application state and event handling

pub mod forms;
pub mod timer;

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;

use cj_console_core::{
    route, Action, AuthState, Page, ResetStep, ServerRegistry, ServerStatus, UserStore,
    LOGIN_SECURITY_QUESTIONS, SIGNUP_SECURITY_QUESTIONS,
};

use crate::ui;
use forms::{ListMode, LoginField, ResetField, UiState};
use timer::{Delayed, Guard, Scheduler, LOGIN_DELAY, REDIRECT_DELAY, RESET_REQUEST_DELAY};

/// Dashboard menu entries
pub const DASHBOARD_MENU: [&str; 7] = [
    "View MCP Servers   - Manage registered MCP servers",
    "Add MCP Server     - Register a new MCP server",
    "Env List           - Manage ConnectJunction environments",
    "Add Env            - Register a new environment",
    "User Management    - Users and user groups",
    "Logout             - End this session",
    "Quit               - Exit application",
];

/// Which resource list a shared handler operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResourceKind {
    Mcp,
    Env,
}

impl ResourceKind {
    fn list_page(self) -> Page {
        match self {
            ResourceKind::Mcp => Page::McpServers,
            ResourceKind::Env => Page::EnvList,
        }
    }

    fn add_page(self) -> Page {
        match self {
            ResourceKind::Mcp => Page::AddMcpServer,
            ResourceKind::Env => Page::AddEnv,
        }
    }

    fn seeds(self) -> ServerRegistry {
        match self {
            ResourceKind::Mcp => ServerRegistry::seed_mcp_servers(),
            ResourceKind::Env => ServerRegistry::seed_environments(),
        }
    }
}

/// Main application struct
pub struct App {
    /// Shared authentication/navigation state (reducer-updated)
    pub auth: AuthState,
    /// In-memory user registry
    pub store: UserStore,
    /// Form-local screen state
    pub ui: UiState,
    /// Pending delayed actions (latency simulation, redirects)
    pub scheduler: Scheduler,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application instance with the seeded user store
    pub fn new() -> Self {
        Self {
            auth: AuthState::default(),
            store: UserStore::seeded(),
            ui: UiState::default(),
            scheduler: Scheduler::new(),
            should_quit: false,
        }
    }

    /// Run the application main loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let tick_rate = Duration::from_millis(100);

        while !self.should_quit {
            self.process_due_actions(Instant::now());

            terminal.draw(|frame| ui::render(frame, self))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Fire every delayed action that has come due and still guards true
    pub fn process_due_actions(&mut self, now: Instant) {
        let page = route(&self.auth);
        let fired = self.scheduler.take_due(now, page, self.auth.reset_step);
        for kind in fired {
            self.run_delayed(kind);
        }
    }

    /// Apply a state transition and handle screen mounting.
    ///
    /// Explicit navigation cancels whatever delayed actions were pending:
    /// a redirect belonging to a screen the user just left must never fire.
    fn navigate(&mut self, action: Action) {
        let from = route(&self.auth);
        self.scheduler.cancel_all();
        self.auth = self.auth.apply(action);
        let to = route(&self.auth);
        self.on_mount(from, to);
    }

    /// Re-seed and clear screen-local state on page changes.
    ///
    /// Resource registries live per screen pair (list + add form): entering
    /// the pair from outside mounts fresh seeds, so edits are lost on
    /// navigation away. Known limitation carried over from the product.
    fn on_mount(&mut self, from: Page, to: Page) {
        let in_mcp = |p: Page| matches!(p, Page::McpServers | Page::AddMcpServer);
        let in_env = |p: Page| matches!(p, Page::EnvList | Page::AddEnv);

        if in_mcp(to) && !in_mcp(from) {
            self.ui.mcp.mount(ServerRegistry::seed_mcp_servers());
        }
        if in_env(to) && !in_env(from) {
            self.ui.envs.mount(ServerRegistry::seed_environments());
        }

        if from == to {
            return;
        }
        if to == Page::AddMcpServer {
            self.ui.add_mcp.clear();
        }
        if to == Page::AddEnv {
            self.ui.add_env.clear();
        }
        if from == Page::ForgotPassword {
            self.ui.reset.clear();
        }
        if from == Page::Signup {
            self.ui.signup.clear();
        }
        if from == Page::Login && to != Page::Login {
            self.ui.login.clear();
        }
        match to {
            Page::Dashboard => self.ui.menu_index = 0,
            Page::Users => self.ui.user_index = 0,
            _ => {}
        }
    }

    /// Handle key press events, dispatching on the routed page
    fn handle_key(&mut self, key: KeyCode) {
        match route(&self.auth) {
            Page::Login => self.handle_login_key(key),
            Page::Signup => self.handle_signup_key(key),
            Page::ForgotPassword => self.handle_reset_key(key),
            Page::Dashboard => self.handle_dashboard_key(key),
            Page::UserManagement => self.handle_user_management_key(key),
            Page::Users => self.handle_users_key(key),
            Page::UserGroups => self.handle_user_groups_key(key),
            Page::McpServers => self.handle_resource_list_key(key, ResourceKind::Mcp),
            Page::AddMcpServer => self.handle_add_resource_key(key, ResourceKind::Mcp),
            Page::EnvList => self.handle_resource_list_key(key, ResourceKind::Env),
            Page::AddEnv => self.handle_add_resource_key(key, ResourceKind::Env),
        }
    }

    // ----- login -----

    fn handle_login_key(&mut self, key: KeyCode) {
        if self.ui.login.flow.on_security_step() {
            self.handle_security_step_key(key);
            return;
        }

        match key {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.ui.login.focus = match self.ui.login.focus {
                    LoginField::Email => LoginField::Password,
                    _ => LoginField::Email,
                };
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.ui.login.focus = match self.ui.login.focus {
                    LoginField::Password => LoginField::Email,
                    _ => LoginField::Password,
                };
            }
            KeyCode::Enter => {
                // Simulated request latency: the check runs when the timer
                // fires, and the form stays interactive meanwhile.
                self.ui.login.error = None;
                self.ui.login.checking = true;
                self.scheduler.schedule(
                    LOGIN_DELAY,
                    Guard::page(Page::Login),
                    Delayed::CompleteCredentialCheck,
                );
            }
            KeyCode::F(1) => {
                self.navigate(Action::StartPasswordReset);
            }
            KeyCode::F(2) => {
                self.navigate(Action::Navigate(Page::Signup));
            }
            KeyCode::Backspace => {
                if let Some(buffer) = self.ui.login.focused_buffer() {
                    buffer.pop();
                }
                self.ui.login.error = None;
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = self.ui.login.focused_buffer() {
                    buffer.push(c);
                }
                self.ui.login.error = None;
            }
            _ => {}
        }
    }

    fn handle_security_step_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                // Back to credentials; typed email/password survive.
                self.ui.login.flow.back();
                self.ui.login.focus = LoginField::Email;
                self.ui.login.answer.clear();
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.ui.login.focus = match self.ui.login.focus {
                    LoginField::Question => LoginField::Answer,
                    _ => LoginField::Question,
                };
            }
            KeyCode::Up if self.ui.login.focus == LoginField::Question => {
                let len = LOGIN_SECURITY_QUESTIONS.len();
                self.ui.login.question_index = (self.ui.login.question_index + len - 1) % len;
            }
            KeyCode::Down if self.ui.login.focus == LoginField::Question => {
                self.ui.login.question_index =
                    (self.ui.login.question_index + 1) % LOGIN_SECURITY_QUESTIONS.len();
            }
            KeyCode::Enter => {
                // Any answer passes; the flow carries the verified identity.
                if let Some(action) = self.ui.login.flow.submit_security(&self.ui.login.answer) {
                    self.navigate(action);
                    self.ui.login.clear();
                }
            }
            KeyCode::Backspace => {
                if let Some(buffer) = self.ui.login.focused_buffer() {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = self.ui.login.focused_buffer() {
                    buffer.push(c);
                }
            }
            _ => {}
        }
    }

    // ----- sign-up -----

    fn handle_signup_key(&mut self, key: KeyCode) {
        // The success message is terminal for this form; only the redirect
        // timer (or Esc) leaves the screen.
        if self.ui.signup.success.is_some() {
            if key == KeyCode::Esc {
                self.navigate(Action::SignupCompleted);
            }
            return;
        }

        match key {
            KeyCode::Esc => {
                self.navigate(Action::Navigate(Page::Login));
            }
            KeyCode::Tab => {
                self.ui.signup.focus = self.ui.signup.focus.next();
            }
            KeyCode::BackTab => {
                self.ui.signup.focus = self.ui.signup.focus.prev();
            }
            KeyCode::Up if self.ui.signup.focus == forms::SignupField::Question => {
                let len = SIGNUP_SECURITY_QUESTIONS.len();
                self.ui.signup.question_index = Some(match self.ui.signup.question_index {
                    Some(i) => (i + len - 1) % len,
                    None => 0,
                });
                self.ui.signup.error = None;
            }
            KeyCode::Down if self.ui.signup.focus == forms::SignupField::Question => {
                let len = SIGNUP_SECURITY_QUESTIONS.len();
                self.ui.signup.question_index = Some(match self.ui.signup.question_index {
                    Some(i) => (i + 1) % len,
                    None => 0,
                });
                self.ui.signup.error = None;
            }
            KeyCode::Enter => match self.ui.signup.to_form().validate() {
                Ok(()) => {
                    // No account is actually created; the form only
                    // redirects back to login. Product stub, preserved.
                    self.ui.signup.error = None;
                    self.ui.signup.success =
                        Some("Account created successfully! Redirecting to login...".to_string());
                    self.scheduler.schedule(
                        REDIRECT_DELAY,
                        Guard::page(Page::Signup),
                        Delayed::RedirectAfterSignup,
                    );
                }
                Err(e) => {
                    self.ui.signup.error = Some(e);
                }
            },
            KeyCode::Backspace => {
                if let Some(buffer) = self.ui.signup.focused_buffer() {
                    buffer.pop();
                }
                self.ui.signup.error = None;
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = self.ui.signup.focused_buffer() {
                    buffer.push(c);
                }
                self.ui.signup.error = None;
            }
            _ => {}
        }
    }

    // ----- password reset -----

    fn handle_reset_key(&mut self, key: KeyCode) {
        match self.auth.reset_step {
            ResetStep::Verify => self.handle_reset_verify_key(key),
            ResetStep::Replace => self.handle_reset_replace_key(key),
        }
    }

    fn handle_reset_verify_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                // Back to login, discarding the whole flow.
                self.navigate(Action::ResetCompleted);
            }
            KeyCode::Tab | KeyCode::BackTab => {
                // The answer field only exists once the email matches a user
                // (the stored question is revealed then).
                if self.store.find_by_email(&self.ui.reset.email).is_some() {
                    self.ui.reset.focus = match self.ui.reset.focus {
                        ResetField::Email => ResetField::Answer,
                        _ => ResetField::Email,
                    };
                }
            }
            KeyCode::Enter => {
                self.ui.reset.error = None;
                self.ui.reset.checking = true;
                self.scheduler.schedule(
                    RESET_REQUEST_DELAY,
                    Guard::reset_step(ResetStep::Verify),
                    Delayed::CompleteIdentityCheck,
                );
            }
            KeyCode::Backspace => {
                if let Some(buffer) = self.ui.reset.focused_buffer() {
                    buffer.pop();
                }
                self.ui.reset.error = None;
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = self.ui.reset.focused_buffer() {
                    buffer.push(c);
                }
                self.ui.reset.error = None;
            }
            _ => {}
        }
    }

    fn handle_reset_replace_key(&mut self, key: KeyCode) {
        // After success only the redirect timer leaves the screen.
        if self.ui.reset.success.is_some() {
            return;
        }

        match key {
            KeyCode::Esc => {
                // Back to step 1; the verified identity is dropped.
                self.ui.reset.flow.back_to_verify();
                self.ui.reset.focus = ResetField::Email;
                self.navigate(Action::ResetBackToVerify);
            }
            KeyCode::Tab => {
                self.ui.reset.focus = match self.ui.reset.focus {
                    ResetField::OldPassword => ResetField::NewPassword,
                    ResetField::NewPassword => ResetField::ConfirmPassword,
                    _ => ResetField::OldPassword,
                };
            }
            KeyCode::BackTab => {
                self.ui.reset.focus = match self.ui.reset.focus {
                    ResetField::ConfirmPassword => ResetField::NewPassword,
                    ResetField::NewPassword => ResetField::OldPassword,
                    _ => ResetField::ConfirmPassword,
                };
            }
            KeyCode::Enter => {
                let result = self.ui.reset.flow.replace(
                    &mut self.store,
                    &self.ui.reset.old_password,
                    &self.ui.reset.new_password,
                    &self.ui.reset.confirm_password,
                );
                match result {
                    Ok(()) => {
                        self.ui.reset.error = None;
                        self.ui.reset.success = Some(
                            "Password updated successfully! Redirecting to login...".to_string(),
                        );
                        self.scheduler.schedule(
                            REDIRECT_DELAY,
                            Guard::reset_step(ResetStep::Replace),
                            Delayed::RedirectAfterReset,
                        );
                    }
                    Err(e) => {
                        self.ui.reset.error = Some(e);
                    }
                }
            }
            KeyCode::Backspace => {
                if let Some(buffer) = self.ui.reset.focused_buffer() {
                    buffer.pop();
                }
                self.ui.reset.error = None;
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = self.ui.reset.focused_buffer() {
                    buffer.push(c);
                }
                self.ui.reset.error = None;
            }
            _ => {}
        }
    }

    // ----- authenticated screens -----

    fn handle_dashboard_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.ui.menu_index > 0 {
                    self.ui.menu_index -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.ui.menu_index < DASHBOARD_MENU.len() - 1 {
                    self.ui.menu_index += 1;
                }
            }
            KeyCode::Enter => match self.ui.menu_index {
                0 => self.navigate(Action::Navigate(Page::McpServers)),
                1 => self.navigate(Action::Navigate(Page::AddMcpServer)),
                2 => self.navigate(Action::Navigate(Page::EnvList)),
                3 => self.navigate(Action::Navigate(Page::AddEnv)),
                4 => self.navigate(Action::Navigate(Page::UserManagement)),
                5 => self.navigate(Action::Logout),
                6 => self.should_quit = true,
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_user_management_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('b') => {
                self.navigate(Action::Navigate(Page::Dashboard));
            }
            KeyCode::Char('u') => {
                self.navigate(Action::Navigate(Page::Users));
            }
            KeyCode::Char('g') => {
                self.navigate(Action::Navigate(Page::UserGroups));
            }
            _ => {}
        }
    }

    fn handle_users_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('b') => {
                self.navigate(Action::Navigate(Page::UserManagement));
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.ui.user_index > 0 {
                    self.ui.user_index -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.ui.user_index < self.store.len().saturating_sub(1) {
                    self.ui.user_index += 1;
                }
            }
            _ => {}
        }
    }

    fn handle_user_groups_key(&mut self, key: KeyCode) {
        if matches!(key, KeyCode::Esc | KeyCode::Char('b')) {
            self.navigate(Action::Navigate(Page::UserManagement));
        }
    }

    fn resource_screen_mut(&mut self, kind: ResourceKind) -> &mut forms::ResourceScreen {
        match kind {
            ResourceKind::Mcp => &mut self.ui.mcp,
            ResourceKind::Env => &mut self.ui.envs,
        }
    }

    fn handle_resource_list_key(&mut self, key: KeyCode, kind: ResourceKind) {
        // Rename mode captures all typing until committed or cancelled.
        if let ListMode::Renaming { .. } = self.resource_screen_mut(kind).mode {
            self.handle_rename_key(key, kind);
            return;
        }

        match key {
            KeyCode::Esc | KeyCode::Char('b') => {
                self.navigate(Action::Navigate(Page::Dashboard));
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let screen = self.resource_screen_mut(kind);
                if screen.selected > 0 {
                    screen.selected -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let screen = self.resource_screen_mut(kind);
                if screen.selected < screen.registry.len().saturating_sub(1) {
                    screen.selected += 1;
                }
            }
            KeyCode::Char('c') => {
                let screen = self.resource_screen_mut(kind);
                if let Some(id) = screen.selected_id() {
                    if let Some(new_id) = screen.registry.clone_record(id) {
                        let name = screen.registry.get(new_id).map(|r| r.name.clone());
                        screen.status = name.map(|n| format!("Cloned as {n}"));
                    }
                }
            }
            KeyCode::Char('e') => {
                let screen = self.resource_screen_mut(kind);
                if let Some(id) = screen.selected_id() {
                    let current = screen
                        .registry
                        .get(id)
                        .map(|record| record.name.clone())
                        .unwrap_or_default();
                    screen.mode = ListMode::Renaming { buffer: current };
                    screen.status = None;
                }
            }
            KeyCode::Char('d') => {
                let screen = self.resource_screen_mut(kind);
                if let Some(id) = screen.selected_id() {
                    screen.registry.remove(id);
                    screen.clamp_selection();
                    screen.status = Some(format!("Deleted #{id}"));
                }
            }
            KeyCode::Char('n') | KeyCode::Char('a') => {
                self.navigate(Action::Navigate(kind.add_page()));
            }
            _ => {}
        }
    }

    fn handle_rename_key(&mut self, key: KeyCode, kind: ResourceKind) {
        let screen = self.resource_screen_mut(kind);
        let ListMode::Renaming { buffer } = &mut screen.mode else {
            return;
        };

        match key {
            KeyCode::Esc => {
                screen.mode = ListMode::Browse;
            }
            KeyCode::Enter => {
                let name = buffer.clone();
                if !name.is_empty() {
                    if let Some(id) = screen.selected_id() {
                        screen.registry.rename(id, name);
                    }
                }
                screen.mode = ListMode::Browse;
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(c) => {
                buffer.push(c);
            }
            _ => {}
        }
    }

    fn handle_add_resource_key(&mut self, key: KeyCode, kind: ResourceKind) {
        match key {
            KeyCode::Esc => {
                self.navigate(Action::Navigate(kind.list_page()));
            }
            KeyCode::Enter => {
                let name = match kind {
                    ResourceKind::Mcp => self.ui.add_mcp.name.clone(),
                    ResourceKind::Env => self.ui.add_env.name.clone(),
                };
                if name.trim().is_empty() {
                    let add = match kind {
                        ResourceKind::Mcp => &mut self.ui.add_mcp,
                        ResourceKind::Env => &mut self.ui.add_env,
                    };
                    add.error = Some("Please enter a name".to_string());
                    return;
                }
                // New entries come up as Running; the list screen is in the
                // same mount group, so the addition survives this hop.
                {
                    let screen = self.resource_screen_mut(kind);
                    let id = screen.registry.add(name.trim(), ServerStatus::Up);
                    screen.status = Some(format!("Added #{id}"));
                }
                self.navigate(Action::Navigate(kind.list_page()));
            }
            KeyCode::Backspace => {
                let add = match kind {
                    ResourceKind::Mcp => &mut self.ui.add_mcp,
                    ResourceKind::Env => &mut self.ui.add_env,
                };
                add.name.pop();
                add.error = None;
            }
            KeyCode::Char(c) => {
                let add = match kind {
                    ResourceKind::Mcp => &mut self.ui.add_mcp,
                    ResourceKind::Env => &mut self.ui.add_env,
                };
                add.name.push(c);
                add.error = None;
            }
            _ => {}
        }
    }

    // ----- delayed actions -----

    fn run_delayed(&mut self, kind: Delayed) {
        match kind {
            Delayed::CompleteCredentialCheck => {
                self.ui.login.checking = false;
                // Re-entrant submits re-run the same check over the same
                // buffers; a second success is a no-op on the flow.
                let email = self.ui.login.email.clone();
                let password = self.ui.login.password.clone();
                match self
                    .ui
                    .login
                    .flow
                    .submit_credentials(&self.store, &email, &password)
                {
                    Ok(()) => {
                        self.ui.login.error = None;
                        self.ui.login.focus = LoginField::Question;
                    }
                    Err(e) => {
                        self.ui.login.error = Some(e);
                    }
                }
            }
            Delayed::CompleteIdentityCheck => {
                self.ui.reset.checking = false;
                let email = self.ui.reset.email.clone();
                let answer = self.ui.reset.answer.clone();
                match self.ui.reset.flow.verify(&self.store, &email, &answer) {
                    Ok(action) => {
                        self.auth = self.auth.apply(action);
                        self.ui.reset.error = None;
                        self.ui.reset.focus = ResetField::OldPassword;
                    }
                    Err(e) => {
                        self.ui.reset.error = Some(e);
                    }
                }
            }
            Delayed::RedirectAfterReset => {
                self.navigate(Action::ResetCompleted);
            }
            Delayed::RedirectAfterSignup => {
                self.navigate(Action::SignupCompleted);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// A moment past every scheduled delay
    fn later() -> Instant {
        Instant::now() + Duration::from_secs(5)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    /// Drive the full login journey through key events
    fn sign_in(app: &mut App) {
        type_str(app, "admin@cloudjunction.com");
        app.handle_key(KeyCode::Tab);
        type_str(app, "admin123");
        app.handle_key(KeyCode::Enter);
        app.process_due_actions(later());
        assert!(app.ui.login.flow.on_security_step());
        app.handle_key(KeyCode::Enter);
    }

    #[test]
    fn test_keyboard_login_reaches_dashboard() {
        let mut app = App::new();
        sign_in(&mut app);

        assert_eq!(route(&app.auth), Page::Dashboard);
        assert!(app.auth.is_authenticated);
        assert_eq!(
            app.auth.current_user.as_ref().map(|u| u.email.as_str()),
            Some("admin@cloudjunction.com")
        );
        // Form buffers are wiped once the session starts.
        assert!(app.ui.login.email.is_empty());
    }

    #[rstest]
    #[case("admin@cloudjunction.com", "wrong")]
    #[case("ghost@example.com", "admin123")]
    fn test_failed_login_shows_error_and_stays(#[case] email: &str, #[case] password: &str) {
        let mut app = App::new();
        type_str(&mut app, email);
        app.handle_key(KeyCode::Tab);
        type_str(&mut app, password);
        app.handle_key(KeyCode::Enter);
        app.process_due_actions(later());

        assert_eq!(route(&app.auth), Page::Login);
        assert!(app.ui.login.error.is_some());
        assert!(!app.ui.login.flow.on_security_step());
    }

    #[test]
    fn test_credential_check_waits_for_its_delay() {
        let mut app = App::new();
        type_str(&mut app, "admin@cloudjunction.com");
        app.handle_key(KeyCode::Tab);
        type_str(&mut app, "admin123");
        app.handle_key(KeyCode::Enter);

        app.process_due_actions(Instant::now());
        assert!(!app.ui.login.flow.on_security_step());
        assert!(app.ui.login.checking);
    }

    #[test]
    fn test_navigation_cancels_pending_check() {
        let mut app = App::new();
        type_str(&mut app, "admin@cloudjunction.com");
        app.handle_key(KeyCode::Tab);
        type_str(&mut app, "admin123");
        app.handle_key(KeyCode::Enter);

        // Jumping to sign-up before the check fires drops it entirely.
        app.handle_key(KeyCode::F(2));
        app.process_due_actions(later());

        assert_eq!(route(&app.auth), Page::Signup);
        assert!(!app.ui.login.flow.on_security_step());
    }

    #[test]
    fn test_keyboard_reset_flow_end_to_end() {
        let mut app = App::new();
        app.handle_key(KeyCode::F(1));
        assert_eq!(route(&app.auth), Page::ForgotPassword);

        type_str(&mut app, "john.doe@salesforce.com");
        app.handle_key(KeyCode::Tab);
        type_str(&mut app, "NEWYORK");
        app.handle_key(KeyCode::Enter);
        app.process_due_actions(later());
        assert_eq!(app.auth.reset_step, ResetStep::Replace);

        type_str(&mut app, "john123");
        app.handle_key(KeyCode::Tab);
        type_str(&mut app, "brandnew1");
        app.handle_key(KeyCode::Tab);
        type_str(&mut app, "brandnew1");
        app.handle_key(KeyCode::Enter);
        assert!(app.ui.reset.success.is_some());

        app.process_due_actions(later());
        assert_eq!(route(&app.auth), Page::Login);
        assert_eq!(
            app.store
                .find_by_email("john.doe@salesforce.com")
                .map(|u| u.password.as_str()),
            Some("brandnew1")
        );
    }

    #[test]
    fn test_reset_replace_error_keeps_screen() {
        let mut app = App::new();
        app.handle_key(KeyCode::F(1));
        type_str(&mut app, "jane.smith@salesforce.com");
        app.handle_key(KeyCode::Tab);
        type_str(&mut app, "eagles");
        app.handle_key(KeyCode::Enter);
        app.process_due_actions(later());

        type_str(&mut app, "not-her-password");
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.auth.reset_step, ResetStep::Replace);
        assert_eq!(app.ui.reset.error, Some(cj_console_core::AuthError::WrongOldPassword));
    }

    #[test]
    fn test_signup_success_redirects_to_login() {
        let mut app = App::new();
        app.handle_key(KeyCode::F(2));
        assert_eq!(route(&app.auth), Page::Signup);

        type_str(&mut app, "new@example.com");
        app.handle_key(KeyCode::Tab);
        type_str(&mut app, "secret1");
        app.handle_key(KeyCode::Tab);
        type_str(&mut app, "secret1");
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Tab);
        type_str(&mut app, "an answer");
        app.handle_key(KeyCode::Enter);
        assert!(app.ui.signup.success.is_some());

        app.process_due_actions(later());
        assert_eq!(route(&app.auth), Page::Login);
        // Sign-up never registers the account.
        assert!(app.store.find_by_email("new@example.com").is_none());
    }

    #[test]
    fn test_resource_clone_and_delete_by_key() {
        let mut app = App::new();
        sign_in(&mut app);

        // First menu entry opens the MCP server list.
        app.handle_key(KeyCode::Enter);
        assert_eq!(route(&app.auth), Page::McpServers);
        assert_eq!(app.ui.mcp.registry.len(), 5);

        app.handle_key(KeyCode::Char('c'));
        assert_eq!(app.ui.mcp.registry.len(), 6);
        assert_eq!(
            app.ui.mcp.registry.get(6).map(|r| r.name.as_str()),
            Some("MCP-Server-1-Copy")
        );

        app.handle_key(KeyCode::Char('d'));
        assert_eq!(app.ui.mcp.registry.len(), 5);
        assert!(app.ui.mcp.registry.get(1).is_none());
    }

    #[test]
    fn test_rename_by_key() {
        let mut app = App::new();
        sign_in(&mut app);
        app.handle_key(KeyCode::Enter);

        app.handle_key(KeyCode::Char('e'));
        assert!(matches!(app.ui.mcp.mode, ListMode::Renaming { .. }));

        // Renaming captures letters that double as commands when browsing.
        for _ in 0.."MCP-Server-1".len() {
            app.handle_key(KeyCode::Backspace);
        }
        type_str(&mut app, "edge");
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.ui.mcp.mode, ListMode::Browse);
        assert_eq!(app.ui.mcp.registry.get(1).map(|r| r.name.as_str()), Some("edge"));
    }

    #[test]
    fn test_add_environment_survives_return_to_list() {
        let mut app = App::new();
        sign_in(&mut app);

        for _ in 0..3 {
            app.handle_key(KeyCode::Down);
        }
        app.handle_key(KeyCode::Enter);
        assert_eq!(route(&app.auth), Page::AddEnv);

        type_str(&mut app, "Staging");
        app.handle_key(KeyCode::Enter);

        assert_eq!(route(&app.auth), Page::EnvList);
        assert_eq!(app.ui.envs.registry.len(), 4);
        assert_eq!(app.ui.envs.registry.get(4).map(|r| r.name.as_str()), Some("Staging"));
    }

    #[test]
    fn test_list_edits_reset_when_screen_reopens() {
        let mut app = App::new();
        sign_in(&mut app);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('d'));
        assert_eq!(app.ui.mcp.registry.len(), 4);

        // Leave and come back: the list reseeds.
        app.handle_key(KeyCode::Esc);
        assert_eq!(route(&app.auth), Page::Dashboard);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.ui.mcp.registry.len(), 5);
    }

    #[test]
    fn test_logout_from_menu() {
        let mut app = App::new();
        sign_in(&mut app);

        for _ in 0..5 {
            app.handle_key(KeyCode::Down);
        }
        app.handle_key(KeyCode::Enter);

        assert_eq!(route(&app.auth), Page::Login);
        assert!(!app.auth.is_authenticated);
        assert!(app.auth.current_user.is_none());
    }
}
