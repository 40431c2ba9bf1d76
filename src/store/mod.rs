//! Owned state container for the profiles screen.
//!
//! Handlers never touch the user list directly: they turn a request into an
//! [`Action`] and [`Store::dispatch`] it. The state itself is a plain
//! [`ProfilesState`] value and [`update`] is an ordinary function over it, so
//! the whole screen's behaviour can be exercised without a server.

mod action;
mod state;
mod update;
mod validation;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub use action::{Action, Effect};
pub use state::{Editor, ProfilesState};
pub use update::{merge_edit, remove_user, update};
pub use validation::validate;

#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<Mutex<ProfilesState>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&self, action: Action) -> Effect {
        tracing::debug!(action = action.name(), "dispatch");
        update(&mut self.lock(), action)
    }

    pub fn snapshot(&self) -> ProfilesState {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, ProfilesState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
