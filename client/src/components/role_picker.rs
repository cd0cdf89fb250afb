//! Teacher/student selector shared by the sign-in and sign-up forms.

use leptos::prelude::*;
use veritas::Role;

#[component]
pub fn RolePicker(role: RwSignal<Role>) -> impl IntoView {
    view! {
        <div class="role-picker" role="radiogroup" aria-label="I am a">
            {Role::ALL
                .into_iter()
                .map(|option| {
                    let label = match option {
                        Role::Teacher => "Teacher",
                        Role::Student => "Student",
                    };
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if role.get() == option {
                                    "role-picker__option role-picker__option--active"
                                } else {
                                    "role-picker__option"
                                }
                            }
                            aria-pressed=move || (role.get() == option).to_string()
                            on:click=move |_| role.set(option)
                        >
                            {label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
