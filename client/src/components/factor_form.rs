//! Entry form for new factors.
//!
//! DESIGN
//! ======
//! One toggle switches the value input between a binary True/False select
//! and a digits-only scale field. Both value signals persist across the
//! toggle so flipping back restores the previous entry.

#[cfg(test)]
#[path = "factor_form_test.rs"]
mod factor_form_test;

use leptos::prelude::*;

/// Keep only ASCII digits from a scale field edit.
pub(crate) fn sanitize_scale_input(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Parse a scale field into its stored value. Empty or overflowing input
/// falls back to zero.
pub(crate) fn parse_scale_input(raw: &str) -> i64 {
    sanitize_scale_input(raw).parse().unwrap_or(0)
}

/// Factor entry form with a binary/scale toggle.
#[component]
pub fn FactorForm(
    name: RwSignal<String>,
    is_scale: RwSignal<bool>,
    binary_value: RwSignal<bool>,
    scale_value: RwSignal<String>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="factor-form">
            <input
                class="factor-form__input"
                type="text"
                placeholder="Input factor here..."
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <Show
                when=move || is_scale.get()
                fallback=move || {
                    view! {
                        <select
                            class="factor-form__select"
                            prop:value=move || binary_value.get().to_string()
                            on:change=move |ev| binary_value.set(event_target_value(&ev) == "true")
                        >
                            <option value="true">"True"</option>
                            <option value="false">"False"</option>
                        </select>
                    }
                }
            >
                <input
                    class="factor-form__input"
                    type="text"
                    placeholder="Input number here..."
                    prop:value=move || scale_value.get()
                    on:input=move |ev| scale_value.set(sanitize_scale_input(&event_target_value(&ev)))
                />
            </Show>
            <button
                class="btn factor-form__toggle"
                on:click=move |_| is_scale.update(|flag| *flag = !*flag)
            >
                {move || if is_scale.get() { "Scale" } else { "Binary" }}
            </button>
            <button class="btn btn--primary" on:click=move |_| on_submit.run(())>
                "Submit Factor"
            </button>
        </div>
    }
}
