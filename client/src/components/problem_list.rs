//! Problem history list with per-row selection.
//!
//! DESIGN
//! ======
//! Clicking a row toggles its selection. The selected row expands to show
//! its description and the factors whose `problem_id` matches; factor rows
//! for unselected problems are never rendered.

#[cfg(test)]
#[path = "problem_list_test.rs"]
mod problem_list_test;

use leptos::prelude::*;

use records::{Factor, Problem};

use crate::state::factors::FactorsState;
use crate::state::problems::ProblemsState;
use crate::util::format_time::format_created_at;

/// One-line summary for a problem row.
pub(crate) fn problem_row_label(problem: &Problem) -> String {
    format!(
        "{} (created on {}) ({})",
        problem.name,
        format_created_at(problem.created_at),
        problem.outcome_label()
    )
}

/// One-line summary for a factor row under its selected problem.
pub(crate) fn factor_row_label(factor: &Factor) -> String {
    format!(
        "{}: {} (created on {})",
        factor.name,
        factor.value(),
        format_created_at(factor.created_at)
    )
}

/// Scrollable history of problems, oldest first.
#[component]
pub fn ProblemList(problems: RwSignal<ProblemsState>, factors: RwSignal<FactorsState>) -> impl IntoView {
    view! {
        <div class="problem-list">
            {move || {
                let state = problems.get();
                let selected_id = state.selected_id;
                state
                    .items
                    .into_iter()
                    .map(|problem| {
                        let is_selected = selected_id == Some(problem.id);
                        let problem_id = problem.id;
                        let row_label = problem_row_label(&problem);
                        let detail = is_selected.then(|| {
                            let factor_rows: Vec<Factor> = factors
                                .get()
                                .for_problem(problem_id)
                                .into_iter()
                                .cloned()
                                .collect();
                            view! {
                                <div class="problem-list__description">
                                    {format!("Description: {}", problem.description)}
                                </div>
                                <div class="problem-list__factors">
                                    {factor_rows
                                        .into_iter()
                                        .map(|factor| {
                                            view! {
                                                <div class="problem-list__factor">
                                                    {factor_row_label(&factor)}
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        });
                        view! {
                            <div
                                class="problem-list__row"
                                class:problem-list__row--selected=is_selected
                                on:click=move |_| problems.update(|s| s.toggle_selected(problem_id))
                            >
                                {row_label}
                                {detail}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
