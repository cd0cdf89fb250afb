use super::*;

// =============================================================
// push / dismiss
// =============================================================

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "a");
    let b = state.push(ToastKind::Success, "b");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn push_drops_oldest_beyond_cap() {
    let mut state = ToastState::default();
    for i in 0..(MAX_TOASTS + 2) {
        state.push(ToastKind::Info, format!("t{i}"));
    }
    assert_eq!(state.items.len(), MAX_TOASTS);
    assert_eq!(state.items[0].message, "t2");
}

#[test]
fn dismiss_removes_only_matching_id() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "a");
    let b = state.push(ToastKind::Info, "b");
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push(ToastKind::Info, "a");
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

// =============================================================
// push_error
// =============================================================

#[test]
fn push_error_uses_error_display() {
    let mut state = ToastState::default();
    let id = state.push_error(&AuthError::InvalidCredentials);
    assert!(id.is_some());
    assert_eq!(state.items[0].kind, ToastKind::Error);
    assert_eq!(state.items[0].message, AuthError::InvalidCredentials.to_string());
}

#[test]
fn push_error_skips_cancelled() {
    let mut state = ToastState::default();
    assert_eq!(state.push_error(&AuthError::Cancelled), None);
    assert!(state.items.is_empty());
}

#[test]
fn css_class_per_kind() {
    assert_eq!(ToastKind::Error.css_class(), "toast toast--error");
    assert_eq!(ToastKind::Success.css_class(), "toast toast--success");
}
