//! Account settings: profile summary and password change.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::{Auth, spawn_auth, view_scope};
use crate::util::notify::notify;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = expect_context::<Auth>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let scope = view_scope();

    let current = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let old = current.get_untracked();
        let new = new_password.get_untracked();
        let again = confirm.get_untracked();
        let scope = scope.clone();
        spawn_auth(
            ctx.clone(),
            auth,
            toasts,
            move |ctx: Auth| async move { ctx.change_password(&old, &new, &again, &scope).await },
            move |()| {
                current.set(String::new());
                new_password.set(String::new());
                confirm.set(String::new());
                notify(toasts, ToastKind::Success, "Password updated.");
            },
        );
    };

    let busy = move || auth.with(|s| s.loading);
    let email = move || auth.with(|s| s.session.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let role = move || auth.with(|s| s.role().map(|r| r.to_string()).unwrap_or_default());

    view! {
        <div class="settings-page">
            <h1>"Settings"</h1>
            <section class="settings-page__section">
                <h2>"Profile"</h2>
                <dl class="settings-page__profile">
                    <dt>"Name"</dt>
                    <dd>{move || auth.with(AuthState::display_name)}</dd>
                    <dt>"Email"</dt>
                    <dd>{email}</dd>
                    <dt>"Role"</dt>
                    <dd>{role}</dd>
                </dl>
            </section>
            <section class="settings-page__section">
                <h2>"Change password"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Current password"
                        autocomplete="current-password"
                        prop:value=move || current.get()
                        on:input=move |ev| current.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="New password (8+ characters)"
                        autocomplete="new-password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm new password"
                        autocomplete="new-password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=busy>
                        {move || if busy() { "Saving..." } else { "Update password" }}
                    </button>
                </form>
            </section>
        </div>
    }
}
