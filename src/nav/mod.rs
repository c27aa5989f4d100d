//! Navigation contract and back-stack implementation.
//!
//! The sign-up flow only needs two operations from its navigation
//! collaborator: replace the auth flow with a new destination, and go
//! back. [`HistoryRouter`] provides the reference back-stack semantics.

use std::sync::Mutex;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Navigation destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Authentication flow (the sign-up screen lives here)
    Auth,
    /// Authenticated home destination
    Home,
}

/// Router trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait Router: Send + Sync {
    /// Navigate to `to`, removing every history entry up to and
    /// including `pop_up_to`.
    fn navigate_replacing(&self, to: Route, pop_up_to: Route);

    /// Pop the current destination off the history.
    fn go_back(&self);
}

/// Back-stack router.
pub struct HistoryRouter {
    stack: Mutex<Vec<Route>>,
}

impl HistoryRouter {
    /// Create a router with an initial destination
    pub fn new(initial: Route) -> Self {
        Self {
            stack: Mutex::new(vec![initial]),
        }
    }

    /// The destination currently on top of the stack
    pub fn current(&self) -> Option<Route> {
        self.stack
            .lock()
            .expect("router lock poisoned")
            .last()
            .copied()
    }

    /// Push a destination onto the stack
    pub fn navigate(&self, to: Route) {
        self.stack.lock().expect("router lock poisoned").push(to);
    }
}

impl Router for HistoryRouter {
    fn navigate_replacing(&self, to: Route, pop_up_to: Route) {
        let mut stack = self.stack.lock().expect("router lock poisoned");
        // Inclusive pop: the matched entry is removed as well
        if let Some(pos) = stack.iter().rposition(|route| *route == pop_up_to) {
            stack.truncate(pos);
        }
        stack.push(to);
    }

    fn go_back(&self) {
        self.stack.lock().expect("router lock poisoned").pop();
    }
}
