//! Teacher landing surface.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn ClassroomPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="classroom-page">
            <header class="classroom-page__header">
                <h1>"Classroom"</h1>
                <p>"Signed in as " {move || auth.with(AuthState::display_name)}</p>
            </header>
            <section class="classroom-page__panel">
                <h2>"Your courses"</h2>
                <p>"Create a course to start collecting assignments and exams."</p>
            </section>
            <section class="classroom-page__panel">
                <h2>"Plagiarism checks"</h2>
                <p>"Submissions you send for checking will appear here with their similarity reports."</p>
            </section>
        </div>
    }
}
