//! Reactive mirror of the session held by `AuthContext`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthContext` is not reactive. Views read this mirror for rendering and
//! route-guard tracking; `util::auth::sync` refreshes it after every operation
//! so the two never drift for longer than one task.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use veritas::context::AuthSnapshot;
use veritas::{Role, Session};

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// An auth operation is in flight; forms disable their submit controls.
    pub loading: bool,
}

impl From<AuthSnapshot> for AuthState {
    fn from(snapshot: AuthSnapshot) -> Self {
        Self {
            session: snapshot.session,
            loading: snapshot.pending,
        }
    }
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        self.session
            .as_ref()
            .map_or_else(String::new, |s| s.display_name.clone())
    }
}
