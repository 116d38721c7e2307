//! View selection: maps the search state to one of four render outcomes.
//!
//! Pure so the whole render decision can be tested without a terminal.
//! The rendering code in `ui` consumes the returned [`ViewKind`] verbatim.

use crate::error::ErrorInfo;
use crate::github::User;
use crate::store::{SearchState, Status};

/// Number of placeholder cards in the loading skeleton.
pub const SKELETON_COUNT: usize = 10;

/// The four render outcomes.
#[derive(Debug, PartialEq)]
pub enum ViewKind<'a> {
    /// A request is idle or in flight: fixed-size stand-in grid.
    Skeleton,
    /// The request failed; the panel offers a retry.
    Error(&'a ErrorInfo),
    /// Users to show, one card per entry, keyed by id.
    List(&'a [User]),
    /// Nothing matched; echoes the query term.
    NotFound { query: &'a str },
}

/// Evaluate the transition rule for the current state and query.
///
/// HTTP 403 (rate limit) renders as not-found rather than as an error:
/// rate-limited searches read as an empty result set, not a failure.
pub fn select_view<'a>(state: &'a SearchState, query: &'a str) -> ViewKind<'a> {
    match state.status {
        Status::Idle | Status::Loading => ViewKind::Skeleton,
        Status::Failed => match &state.error {
            Some(error) if error.http_status == Some(403) => ViewKind::NotFound { query },
            Some(error) => ViewKind::Error(error),
            None => ViewKind::Error(&FALLBACK_ERROR),
        },
        Status::Succeeded if !state.users.is_empty() => ViewKind::List(&state.users),
        Status::Succeeded => ViewKind::NotFound { query },
    }
}

// Failed without an error record cannot be produced by the store; keep the
// selector total anyway.
static FALLBACK_ERROR: ErrorInfo = ErrorInfo { message: String::new(), http_status: None };
