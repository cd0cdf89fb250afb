//! Route guard: the access decision run before a protected view renders.
//!
//! DESIGN
//! ======
//! A pure function of `(session, required role)`. It keeps no state; the
//! originally requested location is remembered by `AuthContext`, which is the
//! guard's only memory.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::route::{Access, Route, landing_for};
use crate::session::{Role, Session};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested content unchanged.
    Allow,
    /// Not signed in: go to sign-in and remember where the user was headed.
    SignIn,
    /// Signed in with the wrong role: go to that role's landing.
    Redirect(Route),
}

impl GuardDecision {
    /// Where the decision sends the user, if anywhere.
    #[must_use]
    pub const fn target(self) -> Option<Route> {
        match self {
            GuardDecision::Allow => None,
            GuardDecision::SignIn => Some(Route::SignIn),
            GuardDecision::Redirect(route) => Some(route),
        }
    }
}

/// Decide access for a protected view requiring an authenticated session and,
/// optionally, a specific role.
#[must_use]
pub fn evaluate(session: Option<&Session>, required_role: Option<Role>) -> GuardDecision {
    let Some(session) = session else {
        return GuardDecision::SignIn;
    };
    match required_role {
        Some(required) if required != session.role => GuardDecision::Redirect(landing_for(session.role)),
        _ => GuardDecision::Allow,
    }
}

/// Decide access for a concrete route using its access rule.
#[must_use]
pub fn check(session: Option<&Session>, route: Route) -> GuardDecision {
    let decision = match route.access() {
        Access::Public => GuardDecision::Allow,
        access => evaluate(session, access.required_role()),
    };
    if decision != GuardDecision::Allow {
        tracing::debug!(path = route.path(), ?decision, "navigation redirected");
    }
    decision
}
