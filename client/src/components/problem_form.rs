//! Entry form for new problems.
//!
//! DESIGN
//! ======
//! The form is controlled: the page owns the input signals so submit can
//! read and clear them. Validation and persistence live in the page
//! callbacks, keeping this component purely presentational.

use leptos::prelude::*;

/// Problem entry form with a success toggle, submit, and delete actions.
#[component]
pub fn ProblemForm(
    title: RwSignal<String>,
    description: RwSignal<String>,
    success: RwSignal<bool>,
    on_submit: Callback<()>,
    on_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="problem-form">
            <input
                class="problem-form__input"
                type="text"
                placeholder="Your problem here..."
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <input
                class="problem-form__input"
                type="text"
                placeholder="Your description here..."
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            />
            <button
                class="btn problem-form__success"
                class:btn--pressed=move || success.get()
                on:click=move |_| success.update(|flag| *flag = !*flag)
            >
                "Success"
            </button>
            <button class="btn btn--primary" on:click=move |_| on_submit.run(())>
                "Submit Problem"
            </button>
            <button class="btn btn--danger" on:click=move |_| on_delete.run(())>
                "Delete Problem"
            </button>
        </div>
    }
}
