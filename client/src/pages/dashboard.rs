//! Student landing surface.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <p>"Welcome, " {move || auth.with(AuthState::display_name)}</p>
            </header>
            <section class="dashboard-page__panel">
                <h2>"Assignments"</h2>
                <p>"Assignments and exams from your courses will show up here."</p>
            </section>
            <section class="dashboard-page__panel">
                <h2>"Submissions"</h2>
                <p>"Nothing submitted yet."</p>
            </section>
        </div>
    }
}
