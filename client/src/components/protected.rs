//! Route guard wrapper for protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a routed view. The entry check runs once on mount: a visitor who
//! may not open the page is sent on (recording the location when the target
//! is sign-in). Afterwards children render only while the guard still
//! allows the session, so signing out hides them without a second redirect.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use veritas::guard::{GuardDecision, check};
use veritas::route::Route;

use crate::state::auth::AuthState;
use crate::util::auth::{Auth, entry_redirect, location_string};

#[component]
pub fn Protected(route: Route, children: ChildrenFn) -> impl IntoView {
    let ctx = expect_context::<Auth>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let location = use_location();

    let requested = location_string(&location.pathname.get_untracked(), &location.search.get_untracked());
    let redirect = entry_redirect(&ctx, route, &requested);

    Effect::new(move || {
        if let Some(target) = redirect {
            navigate(
                target.path(),
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    let allowed = Memo::new(move |_| auth.with(|state| check(state.session.as_ref(), route)) == GuardDecision::Allow);

    view! {
        <Show when=move || allowed.get()>
            {children()}
        </Show>
    }
}
