//! Push toasts and schedule their dismissal.

use std::time::Duration;

use leptos::prelude::*;
use veritas::AuthError;

use crate::state::toast::{ToastKind, ToastState};

/// How long a toast stays on screen in the browser.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// Show a toast; it dismisses itself after [`TOAST_TTL`].
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let mut id = 0;
    let message = message.into();
    toasts.update(|t| id = t.push(kind, message));
    schedule_dismiss(toasts, id);
}

/// Show an error toast for `err` unless it is a silent cancellation.
pub fn notify_error(toasts: RwSignal<ToastState>, err: &AuthError) {
    let mut id = None;
    toasts.update(|t| id = t.push_error(err));
    if let Some(id) = id {
        schedule_dismiss(toasts, id);
    }
}

fn schedule_dismiss(toasts: RwSignal<ToastState>, id: u64) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(TOAST_TTL).await;
        let _ = toasts.try_update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (toasts, id);
    }
}
