//! Shared UI components (status bar, error panel, not-found message).

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::{AppState, InputMode};
use crate::error::ErrorInfo;
use crate::store::Status;

/// Rect of the given size centered inside `area`, clipped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

/// Error panel with the normalized message and the retry affordance.
pub fn render_error_panel(f: &mut Frame, area: Rect, app: &AppState, error: &ErrorInfo) {
    let rect = centered_rect(60, 8, area);
    let body = format!("{}\n\nPress 'r' to retry.", error.message);
    let p = Paragraph::new(body)
        .style(Style::default().fg(app.theme.error_fg).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title("Request failed")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.error_fg)),
        );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}

/// "No users found" message echoing the query term.
pub fn render_not_found(f: &mut Frame, area: Rect, app: &AppState, query: &str) {
    let rect = centered_rect(60, 5, area);
    let body = if query.is_empty() {
        "No users found.".to_string()
    } else {
        format!("No users found for \"{query}\".")
    };
    let p = Paragraph::new(body)
        .style(Style::default().fg(app.theme.text))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(p, rect);
}

/// Bottom status bar with mode, request status and counts.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let mode = match app.input_mode {
        InputMode::Normal => "NORMAL",
        InputMode::Search => "SEARCH",
    };
    let status = match app.store.state().status {
        Status::Idle => "idle",
        Status::Loading => "loading",
        Status::Succeeded => "succeeded",
        Status::Failed => "failed",
    };
    let query = if app.query.is_empty() { "(default listing)" } else { app.query.as_str() };
    let msg = format!(
        "mode: {mode}  status: {status}  users:{}  query: {query}",
        app.store.state().users.len()
    );
    let p = Paragraph::new(msg).style(
        Style::default()
            .fg(app.theme.status_fg)
            .bg(app.theme.status_bg),
    );
    f.render_widget(p, area);
}
