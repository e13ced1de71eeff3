//! Login screen - credentials and security question steps

use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, Paragraph};

use cj_console_core::LOGIN_SECURITY_QUESTIONS;

use crate::app::forms::LoginField;
use crate::app::App;
use crate::ui::components::{header, progress, status_bar};
use crate::ui::layout::{centered_rect, render_input, section_block, ScreenLayout};
use crate::ui::Theme;

/// Render the login screen
pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    let layout = ScreenLayout::new(frame.area());

    header::render(frame, layout.header, "Sign In", None, theme);

    if app.ui.login.flow.on_security_step() {
        render_security_step(frame, app, layout.content, theme);
        status_bar::render_help_footer(
            frame,
            layout.footer,
            &[
                ("Enter", "Verify"),
                ("Tab", "Next field"),
                ("\u{2191}\u{2193}", "Pick question"),
                ("Esc", "Back"),
            ],
            theme,
        );
    } else {
        render_credentials_step(frame, app, layout.content, theme);
        status_bar::render_help_footer(
            frame,
            layout.footer,
            &[
                ("Enter", "Sign in"),
                ("Tab", "Next field"),
                ("F1", "Forgot password"),
                ("F2", "Sign up"),
                ("Esc", "Quit"),
            ],
            theme,
        );
    }
}

fn render_credentials_step(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let form_area = centered_rect(60, 70, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Step indicator
            Constraint::Length(1),
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
            Constraint::Length(1),
            Constraint::Length(1), // Message
            Constraint::Min(0),
        ])
        .split(form_area);

    progress::render_steps(frame, chunks[0], &["Credentials", "Security"], 0, theme);

    let login = &app.ui.login;
    render_input(
        frame,
        chunks[2],
        "Email",
        &login.email,
        login.focus == LoginField::Email,
        false,
        theme,
    );
    render_input(
        frame,
        chunks[3],
        "Password",
        &login.password,
        login.focus == LoginField::Password,
        true,
        theme,
    );

    let error = login.error.as_ref().map(|e| e.to_string());
    let checking = login.checking.then_some("Signing in...");
    status_bar::render_message(frame, chunks[5], error.as_deref(), None, checking, theme);
}

fn render_security_step(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let form_area = centered_rect(70, 80, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Step indicator
            Constraint::Length(1),
            Constraint::Length(5), // Question picker
            Constraint::Length(3), // Answer
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(form_area);

    progress::render_steps(frame, chunks[0], &["Credentials", "Security"], 1, theme);

    let login = &app.ui.login;

    let items: Vec<ListItem> = LOGIN_SECURITY_QUESTIONS
        .iter()
        .enumerate()
        .map(|(i, question)| {
            ListItem::new(format!("  {}  ", question))
                .style(theme.menu_item(i == login.question_index))
        })
        .collect();

    let question_block = if login.focus == LoginField::Question {
        crate::ui::layout::section_block_focused("Security Question", theme)
    } else {
        section_block("Security Question", theme)
    };
    let questions = List::new(items).block(question_block);
    frame.render_widget(questions, chunks[2]);

    render_input(
        frame,
        chunks[3],
        "Answer",
        &login.answer,
        login.focus == LoginField::Answer,
        false,
        theme,
    );

    let hint = Paragraph::new("Answer the security question to finish signing in")
        .style(theme.text_muted())
        .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[4]);
}
