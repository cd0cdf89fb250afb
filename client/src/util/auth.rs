//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page that starts an auth call follows the same shape: mark the
//! mirror as loading, run the call with a view-scoped cancel token, re-sync
//! the mirror, then navigate or notify. `spawn_auth` is that shape.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use leptos::prelude::*;
use veritas::guard::{GuardDecision, check};
use veritas::{AuthContext, AuthError, CancelToken, Route};

use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::notify::notify_error;
use crate::util::storage::BrowserStorage;

/// The auth context type provided to every view.
pub type Auth = AuthContext<BrowserStorage>;

/// Refresh the reactive mirror from the context.
pub fn sync(auth: RwSignal<AuthState>, ctx: &Auth) {
    auth.set(AuthState::from(ctx.snapshot()));
}

/// A cancel token that fires when the current reactive owner is cleaned up,
/// i.e. when the view that created it unmounts.
pub fn view_scope() -> CancelToken {
    let token = CancelToken::new();
    let on_unmount = token.clone();
    on_cleanup(move || on_unmount.cancel());
    token
}

/// Clears `loading` on drop, so the flag resets on every exit path.
struct LoadingGuard {
    auth: RwSignal<AuthState>,
}

impl LoadingGuard {
    fn engage(auth: RwSignal<AuthState>) -> Self {
        auth.update(|s| s.loading = true);
        Self { auth }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let _ = self.auth.try_update(|s| s.loading = false);
    }
}

/// Run an auth call in the background.
///
/// `op` receives a clone of the context. On success `on_ok` runs with the
/// result; on failure a toast is raised. Cancelled calls do neither.
pub fn spawn_auth<T, F, Fut, K>(
    ctx: Auth,
    auth: RwSignal<AuthState>,
    toasts: RwSignal<ToastState>,
    op: F,
    on_ok: K,
) where
    T: 'static,
    F: FnOnce(Auth) -> Fut + 'static,
    Fut: Future<Output = Result<T, AuthError>> + 'static,
    K: FnOnce(T) + 'static,
{
    if auth.with_untracked(|s| s.loading) {
        return;
    }
    let loading = LoadingGuard::engage(auth);
    leptos::task::spawn_local(async move {
        let _loading = loading;
        let result = op(ctx.clone()).await;
        sync(auth, &ctx);
        match result {
            Ok(value) => on_ok(value),
            Err(err) => notify_error(toasts, &err),
        }
    });
}

/// Entry check for a guarded page, run once when it mounts.
///
/// Returns the redirect target for the session as it stands, recording
/// `requested` for post-login return when the visitor must sign in first.
pub fn entry_redirect(ctx: &Auth, route: Route, requested: &str) -> Option<Route> {
    let decision = check(ctx.current_session().as_ref(), route);
    if decision == GuardDecision::SignIn {
        ctx.remember(requested);
    }
    decision.target()
}

/// Join a router pathname and search string into one location.
#[must_use]
pub fn location_string(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{search}")
    }
}
