//! Sign-in page: email + password, or the social provider button.

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
pub fn SignInPage() -> impl IntoView {
    let ctx = expect_context::<Auth>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let scope = view_scope();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Student);

    let on_submit = {
        let ctx = ctx.clone();
        let navigate = navigate.clone();
        let scope = scope.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let email = email.get_untracked();
            let password = password.get_untracked();
            let role = role.get_untracked();
            let scope = scope.clone();
            let navigate = navigate.clone();
            spawn_auth(
                ctx.clone(),
                auth,
                toasts,
                move |ctx: Auth| async move { ctx.sign_in(&email, &password, role, &scope).await },
                move |destination: String| navigate(&destination, NavigateOptions::default()),
            );
        }
    };

    let on_social = move |_| {
        let role = role.get_untracked();
        let scope = scope.clone();
        let navigate = navigate.clone();
        spawn_auth(
            ctx.clone(),
            auth,
            toasts,
            move |ctx: Auth| async move { ctx.social_sign_in(role, &scope).await },
            move |destination: String| navigate(&destination, NavigateOptions::default()),
        );
    };

    let busy = move || auth.with(|s| s.loading);

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <p class="auth-card__subtitle">"Welcome back to Veritas"</p>
                <RolePicker role=role/>
                <form class="auth-form" on:submit=on_submit>
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
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <div class="auth-divider"></div>
                <button class="btn auth-social" type="button" disabled=busy on:click=on_social>
                    "Continue with Google"
                </button>
                <p class="auth-card__links">
                    <A href="/forgot-password">"Forgot password?"</A>
                    " \u{00b7} "
                    <A href="/signup">"Create an account"</A>
                </p>
            </div>
        </div>
    }
}
