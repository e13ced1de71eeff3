//! Forgot-password screen - identity verification and password replacement

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use cj_console_core::ResetStep;

use crate::app::forms::ResetField;
use crate::app::App;
use crate::ui::components::{header, progress, status_bar};
use crate::ui::layout::{centered_rect, render_input, section_block, ScreenLayout};
use crate::ui::Theme;

/// Render the forgot-password screen
pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    let layout = ScreenLayout::new(frame.area());

    header::render(frame, layout.header, "Reset Password", None, theme);

    match app.auth.reset_step {
        ResetStep::Verify => {
            render_verify_step(frame, app, layout.content, theme);
            status_bar::render_help_footer(
                frame,
                layout.footer,
                &[
                    ("Enter", "Verify identity"),
                    ("Tab", "Next field"),
                    ("Esc", "Back to login"),
                ],
                theme,
            );
        }
        ResetStep::Replace => {
            render_replace_step(frame, app, layout.content, theme);
            status_bar::render_help_footer(
                frame,
                layout.footer,
                &[
                    ("Enter", "Update password"),
                    ("Tab", "Next field"),
                    ("Esc", "Back to verification"),
                ],
                theme,
            );
        }
    }
}

fn render_verify_step(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let form_area = centered_rect(60, 70, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Step indicator
            Constraint::Length(1),
            Constraint::Length(3), // Email
            Constraint::Length(3), // Question (revealed)
            Constraint::Length(3), // Answer
            Constraint::Length(1), // Message
            Constraint::Min(0),
        ])
        .split(form_area);

    progress::render_steps(frame, chunks[0], &["Verify", "Reset"], 0, theme);

    let reset = &app.ui.reset;
    render_input(
        frame,
        chunks[2],
        "Email",
        &reset.email,
        reset.focus == ResetField::Email,
        false,
        theme,
    );

    // The stored security question only shows once the email matches a
    // known account; until then the answer field stays hidden.
    if let Some(user) = app.store.find_by_email(&reset.email) {
        let question = Paragraph::new(format!(" {}", user.security_question))
            .style(theme.text())
            .block(section_block("Security Question", theme));
        frame.render_widget(question, chunks[3]);

        render_input(
            frame,
            chunks[4],
            "Answer",
            &reset.answer,
            reset.focus == ResetField::Answer,
            false,
            theme,
        );
    }

    let error = reset.error.as_ref().map(|e| e.to_string());
    let checking = reset.checking.then_some("Verifying identity...");
    status_bar::render_message(frame, chunks[5], error.as_deref(), None, checking, theme);
}

fn render_replace_step(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let form_area = centered_rect(60, 80, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Step indicator
            Constraint::Length(1),
            Constraint::Length(3), // Old password
            Constraint::Length(3), // New password
            Constraint::Length(3), // Confirm password
            Constraint::Length(1), // Message
            Constraint::Min(0),
        ])
        .split(form_area);

    progress::render_steps(frame, chunks[0], &["Verify", "Reset"], 1, theme);

    let reset = &app.ui.reset;
    render_input(
        frame,
        chunks[2],
        "Current Password",
        &reset.old_password,
        reset.focus == ResetField::OldPassword,
        true,
        theme,
    );
    render_input(
        frame,
        chunks[3],
        "New Password",
        &reset.new_password,
        reset.focus == ResetField::NewPassword,
        true,
        theme,
    );
    render_input(
        frame,
        chunks[4],
        "Confirm New Password",
        &reset.confirm_password,
        reset.focus == ResetField::ConfirmPassword,
        true,
        theme,
    );

    let error = reset.error.as_ref().map(|e| e.to_string());
    status_bar::render_message(
        frame,
        chunks[5],
        error.as_deref(),
        reset.success.as_deref(),
        None,
        theme,
    );
}
