//! Sign-up page: name, email, password and role.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use veritas::Role;

use crate::components::role_picker::RolePicker;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::auth::{Auth, spawn_auth, view_scope};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let ctx = expect_context::<Auth>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let scope = view_scope();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Student);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = name.get_untracked();
        let email = email.get_untracked();
        let password = password.get_untracked();
        let role = role.get_untracked();
        let scope = scope.clone();
        let navigate = navigate.clone();
        spawn_auth(
            ctx.clone(),
            auth,
            toasts,
            move |ctx: Auth| async move { ctx.sign_up(&name, &email, &password, role, &scope).await },
            move |destination: String| navigate(&destination, NavigateOptions::default()),
        );
    };

    let busy = move || auth.with(|s| s.loading);

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <RolePicker role=role/>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full name"
                        autocomplete="name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@school.edu"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=busy>
                        {move || if busy() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <p class="auth-card__links">
                    "Already registered? "
                    <A href="/signin">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
