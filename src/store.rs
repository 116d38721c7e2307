//! State container for the current user request.
//!
//! One [`Store`] is created per session and mutated in place by each
//! request's lifecycle (begin → success | failure). Views never observe it
//! implicitly: interested parties register a subscriber and are notified on
//! every mutation, and the store itself is passed into the render path.

use crate::error::ErrorInfo;
use crate::github::User;

/// Lifecycle of the current request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Latest request status, result list and last error. Exactly one status
/// holds at a time; `error` is only set while `status` is [`Status::Failed`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub status: Status,
    pub users: Vec<User>,
    pub error: Option<ErrorInfo>,
}

impl SearchState {
    fn new() -> Self {
        Self { status: Status::Idle, users: Vec::new(), error: None }
    }
}

type Subscriber = Box<dyn FnMut(&SearchState)>;

/// Container owning the [`SearchState`] and its subscribers.
pub struct Store {
    state: SearchState,
    subscribers: Vec<Subscriber>,
}

impl Store {
    pub fn new() -> Self {
        Self { state: SearchState::new(), subscribers: Vec::new() }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Register a subscriber invoked after every mutation.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&SearchState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// A request was issued: status becomes loading and any previous error
    /// is cleared.
    pub fn begin_request(&mut self) {
        self.state.status = Status::Loading;
        self.state.error = None;
        self.notify();
    }

    /// A request completed: store the user list as-is.
    pub fn finish_success(&mut self, users: Vec<User>) {
        self.state.status = Status::Succeeded;
        self.state.users = users;
        self.notify();
    }

    /// A request failed: keep the previous list, record the error.
    pub fn finish_failure(&mut self, error: ErrorInfo) {
        self.state.status = Status::Failed;
        self.state.error = Some(error);
        self.notify();
    }

    fn notify(&mut self) {
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn user(id: u64, login: &str) -> User {
        User {
            id,
            login: login.to_string(),
            avatar_url: format!("https://avatars.githubusercontent.com/u/{id}"),
            html_url: format!("https://github.com/{login}"),
        }
    }

    #[test]
    fn starts_idle_with_no_users_and_no_error() {
        let store = Store::new();
        assert_eq!(store.state().status, Status::Idle);
        assert!(store.state().users.is_empty());
        assert_eq!(store.state().error, None);
    }

    #[test]
    fn begin_request_clears_a_previous_error() {
        let mut store = Store::new();
        store.finish_failure(ErrorInfo { message: "boom".into(), http_status: Some(500) });
        assert_eq!(store.state().status, Status::Failed);

        store.begin_request();
        assert_eq!(store.state().status, Status::Loading);
        assert_eq!(store.state().error, None);
    }

    #[test]
    fn success_stores_the_list() {
        let mut store = Store::new();
        store.begin_request();
        store.finish_success(vec![user(1, "mojombo"), user(2, "defunkt")]);
        assert_eq!(store.state().status, Status::Succeeded);
        assert_eq!(store.state().users.len(), 2);
    }

    #[test]
    fn subscribers_see_every_lifecycle_mutation() {
        let seen: Rc<RefCell<Vec<Status>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();

        let mut store = Store::new();
        store.subscribe(move |state| sink.borrow_mut().push(state.status));

        store.begin_request();
        store.finish_success(vec![user(1, "mojombo")]);
        store.begin_request();
        store.finish_failure(ErrorInfo { message: "boom".into(), http_status: None });

        assert_eq!(
            *seen.borrow(),
            vec![Status::Loading, Status::Succeeded, Status::Loading, Status::Failed]
        );
    }

    #[test]
    fn last_mutation_wins_for_overlapping_completions() {
        // Two in-flight requests resolving out of order: the store applies
        // completions in arrival order, so the later arrival overwrites the
        // earlier one even if its request was issued first.
        let mut store = Store::new();
        store.begin_request();
        store.begin_request();
        store.finish_success(vec![user(2, "defunkt")]); // newer request, faster
        store.finish_success(vec![user(1, "mojombo")]); // older request, slower
        assert_eq!(store.state().users[0].login, "mojombo");
    }
}
