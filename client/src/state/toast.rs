//! Transient notification queue.
//!
//! DESIGN
//! ======
//! Auth failures are never retried; they surface here instead. The queue is
//! bounded so a burst of failures cannot grow the stack without limit, and
//! ids are monotonic so a delayed dismissal never removes a newer toast.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use veritas::AuthError;

/// Most toasts shown at once; older ones are dropped first.
pub const MAX_TOASTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast toast--info",
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        if self.items.len() > MAX_TOASTS {
            let excess = self.items.len() - MAX_TOASTS;
            self.items.drain(..excess);
        }
        id
    }

    /// Queue an error toast for `err`, unless it is not meant for the user.
    pub fn push_error(&mut self, err: &AuthError) -> Option<u64> {
        err.is_user_visible()
            .then(|| self.push(ToastKind::Error, err.to_string()))
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}
