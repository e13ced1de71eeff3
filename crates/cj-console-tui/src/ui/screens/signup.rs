//! Sign-up screen

use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem};

use cj_console_core::SIGNUP_SECURITY_QUESTIONS;

use crate::app::forms::SignupField;
use crate::app::App;
use crate::ui::components::{header, status_bar};
use crate::ui::layout::{
    centered_rect, render_input, section_block, section_block_focused, ScreenLayout,
};
use crate::ui::Theme;

/// Render the sign-up screen
pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    let layout = ScreenLayout::new(frame.area());

    header::render(frame, layout.header, "Create Account", None, theme);

    let form_area = centered_rect(70, 90, layout.content);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
            Constraint::Length(3), // Retype
            Constraint::Length(8), // Question picker
            Constraint::Length(3), // Answer
            Constraint::Length(1), // Message
            Constraint::Min(0),
        ])
        .split(form_area);

    let signup = &app.ui.signup;

    render_input(
        frame,
        chunks[0],
        "Email",
        &signup.email,
        signup.focus == SignupField::Email,
        false,
        theme,
    );
    render_input(
        frame,
        chunks[1],
        "Password",
        &signup.password,
        signup.focus == SignupField::Password,
        true,
        theme,
    );
    render_input(
        frame,
        chunks[2],
        "Retype Password",
        &signup.retype_password,
        signup.focus == SignupField::RetypePassword,
        true,
        theme,
    );

    let items: Vec<ListItem> = SIGNUP_SECURITY_QUESTIONS
        .iter()
        .enumerate()
        .map(|(i, question)| {
            ListItem::new(format!("  {}  ", question))
                .style(theme.menu_item(signup.question_index == Some(i)))
        })
        .collect();

    let question_block = if signup.focus == SignupField::Question {
        section_block_focused("Security Question", theme)
    } else {
        section_block("Security Question", theme)
    };
    frame.render_widget(List::new(items).block(question_block), chunks[3]);

    render_input(
        frame,
        chunks[4],
        "Security Answer",
        &signup.answer,
        signup.focus == SignupField::Answer,
        false,
        theme,
    );

    let error = signup.error.as_ref().map(|e| e.to_string());
    status_bar::render_message(
        frame,
        chunks[5],
        error.as_deref(),
        signup.success.as_deref(),
        None,
        theme,
    );

    status_bar::render_help_footer(
        frame,
        layout.footer,
        &[
            ("Enter", "Create account"),
            ("Tab", "Next field"),
            ("\u{2191}\u{2193}", "Pick question"),
            ("Esc", "Back to login"),
        ],
        theme,
    );
}
