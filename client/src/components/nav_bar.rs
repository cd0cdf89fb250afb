//! Top navigation bar with role-specific links and sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use veritas::Route;
use veritas::nav::nav_items;

use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::auth::{Auth, sync};
use crate::util::notify::notify_error;

/// Shows the links the current viewer may open, plus the signed-in user's
/// name and a sign-out button.
#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = expect_context::<Auth>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    // Leave the page before clearing the session; the in-memory session is
    // gone even when removing the stored copy fails.
    let on_sign_out = move |_| {
        navigate(Route::Landing.path(), NavigateOptions::default());
        let result = ctx.sign_out();
        sync(auth, &ctx);
        if let Err(err) = result {
            notify_error(toasts, &err);
        }
    };

    view! {
        <nav class="nav-bar">
            <A href="/" attr:class="nav-bar__brand">"Veritas"</A>
            <ul class="nav-bar__links">
                {move || {
                    nav_items(auth.with(AuthState::role))
                        .iter()
                        .map(|item| {
                            view! {
                                <li>
                                    <A href={item.route.path()} attr:class="nav-bar__link">{item.label}</A>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            <div class="nav-bar__account" hidden=move || !auth.with(AuthState::is_authenticated)>
                <span class="nav-bar__user">{move || auth.with(AuthState::display_name)}</span>
                <button class="btn nav-bar__sign-out" on:click=on_sign_out>
                    "Sign out"
                </button>
            </div>
        </nav>
    }
}
