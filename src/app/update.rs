//! Application event loop.
//!
//! Single-threaded tick loop: draw, drain request completions, poll the
//! debouncer, handle keys. HTTP requests run on the background tokio
//! runtime and post their outcome back over a channel. Completions are
//! applied in arrival order without cancellation or sequencing: a slow
//! stale response can overwrite a fresher one (last write wins).

use std::cell::Cell;
use std::rc::Rc;
use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::runtime::Handle;
use tracing::{debug, warn};

use crate::app::{AppOptions, AppState, InputMode};
use crate::error::ErrorInfo;
use crate::github::{GithubClient, User};
use crate::store::{Status, Store};
use crate::ui;

/// Completion of one request, posted back to the event loop.
#[derive(Debug)]
pub enum FetchOutcome {
    Success { query: String, users: Vec<User> },
    Failure { query: String, error: ErrorInfo },
}

/// Apply a completion to the store. Public so the state machine can be
/// driven end-to-end in tests without a network.
pub fn apply_outcome(store: &mut Store, outcome: FetchOutcome) {
    match outcome {
        FetchOutcome::Success { query, users } => {
            debug!(%query, count = users.len(), "applying completion");
            store.finish_success(users);
        }
        FetchOutcome::Failure { query, error } => {
            warn!(%query, message = %error.message, "applying failure");
            store.finish_failure(error);
        }
    }
}

/// Mark the store loading and spawn the request on the runtime.
fn issue_fetch(
    store: &mut Store,
    client: &GithubClient,
    handle: &Handle,
    tx: &Sender<FetchOutcome>,
    query: &str,
) {
    store.begin_request();
    let client = client.clone();
    let query = query.to_string();
    let tx = tx.clone();
    handle.spawn(async move {
        let outcome = match client.fetch_users(&query).await {
            Ok(users) => FetchOutcome::Success { query, users },
            Err(e) => FetchOutcome::Failure { query, error: e.to_error_info() },
        };
        // The loop may have exited already; a closed channel is fine.
        let _ = tx.send(outcome);
    });
}

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    client: &GithubClient,
    handle: &Handle,
    options: &AppOptions,
) -> Result<()> {
    let (tx, rx): (Sender<FetchOutcome>, Receiver<FetchOutcome>) = std::sync::mpsc::channel();
    let mut app = AppState::new(options);

    // Explicit subscription contract: the store tells the loop when a
    // mutation happened, the loop decides to redraw.
    let store_changed = Rc::new(Cell::new(false));
    {
        let flag = store_changed.clone();
        app.store.subscribe(move |_| flag.set(true));
    }

    // Initial default listing, issued once while the store is still idle.
    issue_fetch(&mut app.store, client, handle, &tx, &app.query);

    let mut dirty = true;
    loop {
        while let Ok(outcome) = rx.try_recv() {
            apply_outcome(&mut app.store, outcome);
        }

        if let Some(term) = app.debouncer.poll(Instant::now()) {
            if term != app.query {
                debug!(%term, "debounced term committed");
                app.query = term;
                app.selected_index = 0;
                issue_fetch(&mut app.store, client, handle, &tx, &app.query);
            }
        }

        if dirty || store_changed.replace(false) {
            terminal.draw(|f| ui::render(f, &mut app))?;
            dirty = false;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    dirty = true;
                    match app.input_mode {
                        InputMode::Normal => match key.code {
                            KeyCode::Char('q') => break,
                            KeyCode::Char('/') => {
                                app.input_mode = InputMode::Search;
                            }
                            KeyCode::Char('r') => {
                                if app.store.state().status == Status::Failed {
                                    issue_fetch(&mut app.store, client, handle, &tx, &app.query);
                                }
                            }
                            KeyCode::Char('t') => {
                                app.toggle_theme();
                            }
                            KeyCode::Up | KeyCode::Char('k') => {
                                if app.selected_index > 0 {
                                    app.selected_index -= 1;
                                }
                            }
                            KeyCode::Down | KeyCode::Char('j') => {
                                if app.selected_index + 1 < app.store.state().users.len() {
                                    app.selected_index += 1;
                                }
                            }
                            KeyCode::PageUp => {
                                let step = app.cards_per_page.max(1);
                                app.selected_index = app.selected_index.saturating_sub(step);
                            }
                            KeyCode::PageDown => {
                                let step = app.cards_per_page.max(1);
                                let last = app.store.state().users.len().saturating_sub(1);
                                app.selected_index = (app.selected_index + step).min(last);
                            }
                            _ => {}
                        },
                        InputMode::Search => match key.code {
                            KeyCode::Enter => {
                                app.input_mode = InputMode::Normal;
                            }
                            KeyCode::Esc => {
                                app.input_mode = InputMode::Normal;
                                app.input.clear();
                                app.debouncer.update(String::new(), Instant::now());
                            }
                            KeyCode::Backspace => {
                                app.input.pop();
                                app.debouncer.update(app.input.clone(), Instant::now());
                            }
                            KeyCode::Char(c) => {
                                app.input.push(c);
                                app.debouncer.update(app.input.clone(), Instant::now());
                            }
                            _ => {}
                        },
                    }
                }
            }
        }
    }

    Ok(())
}
