//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;
use veritas::route::landing_for;

use crate::state::auth::AuthState;

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let home = move || auth.with(AuthState::role).map(|role| landing_for(role).path());

    view! {
        <div class="landing-page">
            <h1>"Veritas"</h1>
            <p class="landing-page__tagline">
                "Course management, submissions and plagiarism checks in one place."
            </p>
            <div class="landing-page__actions">
                <Show
                    when=move || home().is_some()
                    fallback=|| {
                        view! {
                            <A href="/signin" attr:class="btn btn--primary">"Sign in"</A>
                            <A href="/signup" attr:class="btn">"Create an account"</A>
                        }
                    }
                >
                    <A href=move || home().unwrap_or("/").to_owned() attr:class="btn btn--primary">"Continue"</A>
                </Show>
            </div>
        </div>
    }
}
