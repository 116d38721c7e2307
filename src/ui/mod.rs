//! UI rendering: header, content area, status bar.
//!
//! The content area is chosen by [`crate::view::select_view`]; this module
//! only draws whatever outcome the selector picked.

pub mod cards;
pub mod components;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, InputMode};
use crate::view::{self, ViewKind};

pub fn render(f: &mut Frame, app: &mut AppState) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(1)].as_ref())
        .split(f.area());

    render_header(f, root[0], app);

    // Clone the small state snapshot so the selector result does not hold a
    // borrow while the grid renderers adjust selection/paging fields.
    let state = app.store.state().clone();
    let query = app.query.clone();
    match view::select_view(&state, &query) {
        ViewKind::Skeleton => cards::render_skeleton_grid(f, root[1], app),
        ViewKind::Error(error) => components::render_error_panel(f, root[1], app, error),
        ViewKind::List(users) => cards::render_user_grid(f, root[1], app, users),
        ViewKind::NotFound { query } => components::render_not_found(f, root[1], app, query),
    }

    components::render_status_bar(f, root[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &AppState) {
    let prompt = match app.input_mode {
        InputMode::Normal if app.input.is_empty() => String::new(),
        InputMode::Normal => format!("  search: {}", app.input),
        InputMode::Search => format!("  search: {}▏", app.input),
    };
    let p = Paragraph::new(format!(
        "GitHub users{prompt}  — /: search; Enter: apply; Esc: clear; j/k: move; r: retry; t: theme; q: quit"
    ))
    .block(
        Block::default()
            .title("ghuser-search")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    )
    .style(Style::default().fg(app.theme.header_fg).bg(app.theme.header_bg));
    f.render_widget(p, area);
}
