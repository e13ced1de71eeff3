//! UI rendering

pub mod components;
pub mod layout;
pub mod screens;
mod theme;

pub use theme::Theme;

use ratatui::prelude::*;

use cj_console_core::{route, Page};

use crate::app::App;
use screens::resources::ResourceView;

/// Main render function - delegates to the routed screen
pub fn render(frame: &mut Frame, app: &App) {
    let theme = Theme::default();

    match route(&app.auth) {
        Page::Login => screens::login::render(frame, app, &theme),
        Page::Signup => screens::signup::render(frame, app, &theme),
        Page::ForgotPassword => screens::forgot_password::render(frame, app, &theme),
        Page::Dashboard => screens::dashboard::render(frame, app, &theme),
        Page::UserManagement => screens::users::menu::render(frame, app, &theme),
        Page::Users => screens::users::list::render(frame, app, &theme),
        Page::UserGroups => screens::users::groups::render(frame, app, &theme),
        Page::McpServers => screens::resources::list::render(frame, app, ResourceView::Mcp, &theme),
        Page::AddMcpServer => screens::resources::add::render(frame, app, ResourceView::Mcp, &theme),
        Page::EnvList => screens::resources::list::render(frame, app, ResourceView::Env, &theme),
        Page::AddEnv => screens::resources::add::render(frame, app, ResourceView::Env, &theme),
    }
}
