//! Auth context: the single shared access point for session state.
//!
//! ARCHITECTURE
//! ============
//! `AuthContext` owns the `SessionStore` and is the only code path that
//! mutates it. Views hold a cheap clone of the handle (the Leptos shell
//! provides one through reactive context) and call the operations here; they
//! never reach the store directly.
//!
//! CONCURRENCY
//! ===========
//! Locks are taken only around synchronous store access and never across an
//! `.await`. A result that resolves after its `CancelToken` fired is dropped
//! without touching the store. Uncancelled results that arrive late still go
//! through `establish`, so the worst case is an ordinary overwrite of the
//! current session.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::cancel::CancelToken;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::guard::{GuardDecision, check};
use crate::ops;
use crate::route::{Route, landing_for};
use crate::session::{Role, Session};
use crate::storage::SessionStorage;
use crate::store::SessionStore;

/// Point-in-time copy of the context for UI mirrors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub session: Option<Session>,
    pub pending: bool,
}

impl AuthSnapshot {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }
}

struct Inner<S> {
    config: AuthConfig,
    store: Mutex<SessionStore<S>>,
    return_to: Mutex<Option<String>>,
    pending: AtomicUsize,
}

/// Cloneable handle to the process-wide session state.
pub struct AuthContext<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for AuthContext<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Decrements the pending counter when dropped, whichever way the call exits.
struct PendingGuard<'a> {
    pending: &'a AtomicUsize,
}

impl<'a> PendingGuard<'a> {
    fn enter(pending: &'a AtomicUsize) -> Self {
        pending.fetch_add(1, Ordering::AcqRel);
        Self { pending }
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.pending.fetch_sub(1, Ordering::AcqRel);
    }
}

impl<S: SessionStorage> AuthContext<S> {
    /// Build the context, loading any persisted session from `storage`.
    pub fn new(storage: S, config: AuthConfig) -> Self {
        let store = SessionStore::open(storage, config.storage_key.clone());
        if let Some(session) = store.current() {
            tracing::info!(user_id = %session.id, role = %session.role, "restored session");
        }
        Self {
            inner: Arc::new(Inner {
                config,
                store: Mutex::new(store),
                return_to: Mutex::new(None),
                pending: AtomicUsize::new(0),
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.inner.config
    }

    fn store(&self) -> MutexGuard<'_, SessionStore<S>> {
        self.inner.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn return_slot(&self) -> MutexGuard<'_, Option<String>> {
        self.inner.return_to.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn current_session(&self) -> Option<Session> {
        self.store().current().cloned()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.store().current().is_some()
    }

    /// Whether any operation is awaiting its simulated call.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.pending.load(Ordering::Acquire) > 0
    }

    #[must_use]
    pub fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot {
            session: self.current_session(),
            pending: self.is_pending(),
        }
    }

    // =========================================================================
    // GUARD
    // =========================================================================

    /// Run the guard for `location` against the current session, recording the
    /// location for post-login return when the guard sends the user to sign-in.
    ///
    /// Unknown locations are allowed; the router renders its fallback.
    pub fn guard(&self, location: &str) -> GuardDecision {
        let Some(route) = Route::from_path(location) else {
            return GuardDecision::Allow;
        };
        let decision = check(self.current_session().as_ref(), route);
        if decision == GuardDecision::SignIn {
            self.remember(location);
        }
        decision
    }

    /// Remember where an unauthenticated user was headed. Only protected
    /// routes are kept; public pages never replace the role landing.
    pub fn remember(&self, location: &str) {
        if !Route::from_path(location).is_some_and(Route::is_protected) {
            return;
        }
        *self.return_slot() = Some(location.to_owned());
    }

    #[must_use]
    pub fn return_to(&self) -> Option<String> {
        self.return_slot().clone()
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// Sign in and return the location to navigate to.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` for empty fields, `Cancelled` if `cancel` fired
    /// before the call resolved.
    pub async fn sign_in(&self, email: &str, password: &str, role: Role, cancel: &CancelToken) -> Result<String, AuthError> {
        let session = self
            .run(cancel, ops::sign_in(&self.inner.config, email, password, role))
            .await?;
        Ok(self.establish(session, "sign_in"))
    }

    /// Register and sign in, returning the location to navigate to.
    ///
    /// # Errors
    ///
    /// As [`ops::sign_up`], plus `Cancelled`.
    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
        cancel: &CancelToken,
    ) -> Result<String, AuthError> {
        let session = self
            .run(cancel, ops::sign_up(&self.inner.config, name, email, password, role))
            .await?;
        Ok(self.establish(session, "sign_up"))
    }

    /// Sign in with the placeholder social identity.
    ///
    /// # Errors
    ///
    /// `Cancelled` only.
    pub async fn social_sign_in(&self, role: Role, cancel: &CancelToken) -> Result<String, AuthError> {
        let session = self
            .run(cancel, ops::social_sign_in(&self.inner.config, role))
            .await?;
        Ok(self.establish(session, "social_sign_in"))
    }

    /// Request a reset link; the acknowledgement never reveals account existence.
    ///
    /// # Errors
    ///
    /// `Validation` for an address without `@`, plus `Cancelled`.
    pub async fn reset_password(&self, email: &str, cancel: &CancelToken) -> Result<&'static str, AuthError> {
        self.run(cancel, ops::reset_password(&self.inner.config, email))
            .await
    }

    /// Validate a password change. The current password is not verified.
    ///
    /// # Errors
    ///
    /// `Validation` for a short or mismatched new password, plus `Cancelled`.
    pub async fn change_password(&self, current: &str, new: &str, confirm: &str, cancel: &CancelToken) -> Result<(), AuthError> {
        self.run(cancel, ops::change_password(&self.inner.config, current, new, confirm))
            .await?;
        if let Some(session) = self.current_session() {
            tracing::info!(user_id = %session.id, "password changed");
        }
        Ok(())
    }

    /// Clear the session and return the public landing route. Safe to call
    /// when already signed out.
    ///
    /// # Errors
    ///
    /// `OperationFailure` if the persisted copy could not be removed; the
    /// in-memory session is gone regardless.
    pub fn sign_out(&self) -> Result<Route, AuthError> {
        let previous = self.current_session();
        let cleared = self.store().clear();
        self.return_slot().take();

        if let Some(session) = previous {
            tracing::info!(user_id = %session.id, role = %session.role, "signed out");
        }
        cleared.map_err(|e| {
            tracing::warn!(error = %e, "failed to remove persisted session");
            AuthError::OperationFailure(e.to_string())
        })?;
        Ok(Route::Landing)
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    async fn run<T, F>(&self, cancel: &CancelToken, op: F) -> Result<T, AuthError>
    where
        F: Future<Output = Result<T, AuthError>>,
    {
        let _pending = PendingGuard::enter(&self.inner.pending);
        let result = op.await;
        if cancel.is_cancelled() {
            tracing::debug!("discarding auth result for cancelled view");
            return Err(AuthError::Cancelled);
        }
        result
    }

    /// Make `session` current and pick the post-login destination.
    fn establish(&self, session: Session, via: &'static str) -> String {
        tracing::info!(user_id = %session.id, role = %session.role, via, "signed in");
        let destination = self.destination_for(&session);

        if let Err(e) = self.store().save(session) {
            tracing::warn!(error = %e, "session not persisted; it will not survive a reload");
        }
        destination
    }

    /// The remembered location when the new session may open it, otherwise
    /// the role landing. The memory is consumed either way.
    fn destination_for(&self, session: &Session) -> String {
        let remembered = self.return_slot().take();
        remembered
            .filter(|loc| Route::from_path(loc).is_some_and(|r| check(Some(session), r) == GuardDecision::Allow))
            .unwrap_or_else(|| landing_for(session.role).path().to_owned())
    }
}
