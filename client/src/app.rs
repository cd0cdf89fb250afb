//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use veritas::route::Route as Target;
use veritas::{AuthConfig, AuthContext};

use crate::components::nav_bar::NavBar;
use crate::components::protected::Protected;
use crate::components::toast_stack::ToastStack;
use crate::pages::{
    classroom::ClassroomPage, dashboard::DashboardPage, forgot_password::ForgotPasswordPage, landing::LandingPage,
    settings::SettingsPage, sign_in::SignInPage, sign_up::SignUpPage,
};
use crate::state::{auth::AuthState, toast::ToastState};
use crate::util::auth::Auth;
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Builds the one `AuthContext` for the page (loading any stored session) and
/// provides it alongside the reactive mirrors every view reads.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ctx: Auth = AuthContext::new(BrowserStorage, AuthConfig::default());
    let auth = RwSignal::new(AuthState::from(ctx.snapshot()));
    let toasts = RwSignal::new(ToastState::default());

    provide_context(ctx);
    provide_context(auth);
    provide_context(toasts);

    view! {
        <Title text="Veritas"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("signin") view=SignInPage/>
                    <Route path=StaticSegment("signup") view=SignUpPage/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <Route
                        path=StaticSegment("classroom")
                        view=|| view! { <Protected route=Target::Classroom><ClassroomPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <Protected route=Target::Dashboard><DashboardPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("settings")
                        view=|| view! { <Protected route=Target::Settings><SettingsPage/></Protected> }
                    />
                </Routes>
            </main>
            <ToastStack/>
        </Router>
    }
}
