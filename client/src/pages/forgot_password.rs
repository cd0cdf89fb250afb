//! Password reset request page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::{Auth, spawn_auth, view_scope};
use crate::util::notify::notify;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let ctx = expect_context::<Auth>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let scope = view_scope();

    let email = RwSignal::new(String::new());
    let sent = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email = email.get_untracked();
        let scope = scope.clone();
        spawn_auth(
            ctx.clone(),
            auth,
            toasts,
            move |ctx: Auth| async move { ctx.reset_password(&email, &scope).await },
            move |ack: &'static str| {
                sent.set(Some(ack));
                notify(toasts, ToastKind::Success, ack);
            },
        );
    };

    let busy = move || auth.with(|s| s.loading);

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset your password"</h1>
                <p class="auth-card__subtitle">"We'll email you a link to choose a new one."</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@school.edu"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=busy>
                        {move || if busy() { "Sending..." } else { "Send reset link" }}
                    </button>
                </form>
                <Show when=move || sent.get().is_some()>
                    <p class="auth-message">{move || sent.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__links">
                    <A href="/signin">"Back to sign in"</A>
                </p>
            </div>
        </div>
    }
}
