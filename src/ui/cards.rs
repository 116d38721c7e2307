//! User card grid and its loading skeleton.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::AppState;
use crate::github::User;
use crate::view::SKELETON_COUNT;

const CARD_HEIGHT: u16 = 5;
const CARD_MIN_WIDTH: u16 = 30;

/// Columns and rows that fit the area; at least one of each.
fn grid_dims(area: Rect) -> (usize, usize) {
    let cols = (area.width / CARD_MIN_WIDTH).clamp(1, 4) as usize;
    let rows = (area.height / CARD_HEIGHT).max(1) as usize;
    (cols, rows)
}

fn cell_rect(area: Rect, cols: usize, slot: usize) -> Rect {
    let cell_width = area.width / cols as u16;
    let col = (slot % cols) as u16;
    let row = (slot / cols) as u16;
    let cell = Rect {
        x: area.x + col * cell_width,
        y: area.y + row * CARD_HEIGHT,
        width: cell_width,
        height: CARD_HEIGHT,
    };
    // Never draw outside the content area on tiny terminals.
    cell.intersection(area)
}

/// Render one card per user; the selected card is highlighted and the grid
/// pages to keep the selection visible.
pub fn render_user_grid(f: &mut Frame, area: Rect, app: &mut AppState, users: &[User]) {
    let (cols, rows) = grid_dims(area);
    let per_page = cols * rows;
    app.cards_per_page = per_page;
    if app.selected_index >= users.len() {
        app.selected_index = users.len().saturating_sub(1);
    }

    let start = (app.selected_index / per_page) * per_page;
    let end = (start + per_page).min(users.len());
    let slice = &users[start..end];

    for (i, user) in slice.iter().enumerate() {
        let absolute_index = start + i;
        let rect = cell_rect(area, cols, i);
        let border_style = if absolute_index == app.selected_index {
            Style::default().fg(app.theme.highlight_fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.border)
        };
        let block = Block::default()
            .title(user.login.clone())
            .title_style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(border_style);
        let body = format!("id: {}\n{}\n{}", user.id, user.html_url, user.avatar_url);
        let p = Paragraph::new(body).style(Style::default().fg(app.theme.text)).block(block);
        f.render_widget(p, rect);
    }
}

/// Fixed-size stand-in grid shown while a request is idle or in flight.
pub fn render_skeleton_grid(f: &mut Frame, area: Rect, app: &mut AppState) {
    let (cols, rows) = grid_dims(area);
    let per_page = cols * rows;
    app.cards_per_page = per_page;

    let muted = Style::default().fg(app.theme.muted);
    for slot in 0..SKELETON_COUNT.min(per_page) {
        let rect = cell_rect(area, cols, slot);
        let width = rect.width.saturating_sub(4) as usize;
        let body = format!("{}\n{}", "░".repeat(width), "░".repeat(width / 2));
        let p = Paragraph::new(body)
            .style(muted)
            .block(Block::default().borders(Borders::ALL).border_style(muted));
        f.render_widget(p, rect);
    }
}
