//! Home page with problem entry, factor entry, and the problem history.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It fetches both tables once on load, owns the
//! form input signals, and funnels every mutation through a write-then-
//! refetch cycle so the lists always mirror the stored rows.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures (empty title, missing selection) block with an alert
//! before any request is sent. Failed table calls surface as an inline error
//! line; inputs are only cleared after a successful write.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use records::{FactorValue, NewFactor, NewProblem, validate_problem_name};

use crate::components::factor_form::{FactorForm, parse_scale_input};
use crate::components::problem_form::ProblemForm;
use crate::components::problem_list::ProblemList;
use crate::net::api;
use crate::state::factors::FactorsState;
use crate::state::problems::ProblemsState;
use crate::util::alert::alert;

pub(crate) const PROMPT_EMPTY_TITLE: &str = "Enter a problem title!";
pub(crate) const PROMPT_NO_SELECTION_FACTOR: &str = "Select a problem for your factor!";
pub(crate) const PROMPT_NO_SELECTION_DELETE: &str = "Select a problem to delete!";

/// The factor value the form would submit for the current toggle state.
pub(crate) fn pending_factor_value(is_scale: bool, binary_value: bool, scale_value: &str) -> FactorValue {
    if is_scale {
        FactorValue::Scale(parse_scale_input(scale_value))
    } else {
        FactorValue::Binary(binary_value)
    }
}

async fn refresh_problems(problems: RwSignal<ProblemsState>) {
    match api::fetch_problems().await {
        Ok(items) => problems.update(|s| s.replace(items)),
        Err(message) => problems.update(|s| {
            s.loading = false;
            s.error = Some(message);
        }),
    }
}

async fn refresh_factors(factors: RwSignal<FactorsState>) {
    match api::fetch_factors().await {
        Ok(items) => factors.update(|s| s.replace(items)),
        Err(message) => factors.update(|s| {
            s.loading = false;
            s.error = Some(message);
        }),
    }
}

/// Home page — entry forms on top, the problem history below.
#[component]
pub fn HomePage() -> impl IntoView {
    let problems = expect_context::<RwSignal<ProblemsState>>();
    let factors = expect_context::<RwSignal<FactorsState>>();

    // Problem form state.
    let problem_title = RwSignal::new(String::new());
    let problem_description = RwSignal::new(String::new());
    let problem_success = RwSignal::new(false);

    // Factor form state.
    let factor_name = RwSignal::new(String::new());
    let factor_is_scale = RwSignal::new(false);
    let factor_binary_value = RwSignal::new(true);
    let factor_scale_value = RwSignal::new("0".to_owned());

    // Fetch both tables once after hydration; the two fetches are unordered.
    let loaded = RwSignal::new(false);
    Effect::new(move || {
        if loaded.get() {
            return;
        }
        loaded.set(true);
        problems.update(|s| s.loading = true);
        factors.update(|s| s.loading = true);
        leptos::task::spawn_local(async move { refresh_problems(problems).await });
        leptos::task::spawn_local(async move { refresh_factors(factors).await });
    });

    let on_problem_submit = Callback::new(move |()| {
        if validate_problem_name(&problem_title.get_untracked()).is_err() {
            alert(PROMPT_EMPTY_TITLE);
            return;
        }
        leptos::task::spawn_local(async move {
            let new = NewProblem {
                name: problem_title.get_untracked(),
                description: problem_description.get_untracked(),
                success: problem_success.get_untracked(),
            };
            match api::create_problem(&new).await {
                Ok(()) => {
                    refresh_problems(problems).await;
                    problem_title.set(String::new());
                    problem_description.set(String::new());
                }
                Err(message) => problems.update(|s| s.error = Some(message)),
            }
        });
    });

    let on_problem_delete = Callback::new(move |()| {
        let Some(selected_id) = problems.get_untracked().selected_id else {
            alert(PROMPT_NO_SELECTION_DELETE);
            return;
        };
        leptos::task::spawn_local(async move {
            match api::delete_problem(selected_id).await {
                Ok(()) => refresh_problems(problems).await,
                Err(message) => problems.update(|s| s.error = Some(message)),
            }
        });
    });

    let on_factor_submit = Callback::new(move |()| {
        let Some(selected_id) = problems.get_untracked().selected_id else {
            alert(PROMPT_NO_SELECTION_FACTOR);
            return;
        };
        leptos::task::spawn_local(async move {
            let new = NewFactor {
                problem_id: selected_id,
                name: factor_name.get_untracked(),
                value: pending_factor_value(
                    factor_is_scale.get_untracked(),
                    factor_binary_value.get_untracked(),
                    &factor_scale_value.get_untracked(),
                ),
            };
            match api::create_factor(&new).await {
                Ok(()) => {
                    refresh_factors(factors).await;
                    factor_name.set(String::new());
                    factor_scale_value.set("0".to_owned());
                }
                Err(message) => factors.update(|s| s.error = Some(message)),
            }
        });
    });

    view! {
        <div class="home-page">
            <h1>"Welcome to Trial & Error!"</h1>
            <p>"Enter your problem below:"</p>
            <ProblemForm
                title=problem_title
                description=problem_description
                success=problem_success
                on_submit=on_problem_submit
                on_delete=on_problem_delete
            />
            <FactorForm
                name=factor_name
                is_scale=factor_is_scale
                binary_value=factor_binary_value
                scale_value=factor_scale_value
                on_submit=on_factor_submit
            />
            <Show when=move || problems.get().error.is_some()>
                <p class="home-page__error">
                    {move || problems.get().error.unwrap_or_default()}
                </p>
            </Show>
            <Show when=move || factors.get().error.is_some()>
                <p class="home-page__error">
                    {move || factors.get().error.unwrap_or_default()}
                </p>
            </Show>
            <Show
                when=move || !problems.get().loading
                fallback=move || view! { <p>"Loading problems..."</p> }
            >
                <ProblemList problems=problems factors=factors/>
            </Show>
        </div>
    }
}
