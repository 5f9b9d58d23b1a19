//! Wizard progress indicator.

use configurator_common::WizardStep;
use leptos::prelude::*;

/// Row of numbered step indicators.
///
/// A step is lit once `current_step` reaches it. Steps numbered below
/// `highlight_from` stay grey regardless; the configure page never lights
/// the use-case step.
#[component]
pub fn ProgressSteps(
    #[prop(into)] current_step: Signal<i32>,
    #[prop(default = 1)] highlight_from: i32,
) -> impl IntoView {
    let steps = WizardStep::all();
    let last = steps.len() - 1;

    view! {
        <div class="flex justify-center mb-12">
            <div class="flex items-center space-x-4">
                {steps.into_iter().enumerate().map(move |(i, step)| {
                    let lit = move || step.is_lit(current_step.get(), highlight_from);
                    view! {
                        <div class="flex items-center">
                            <div class=move || if lit() {
                                "w-8 h-8 bg-blue-600 text-white rounded-full flex items-center justify-center"
                            } else {
                                "w-8 h-8 bg-gray-200 text-gray-500 rounded-full flex items-center justify-center"
                            }>
                                {step.number()}
                            </div>
                            <span class=move || if lit() {
                                "ml-2 text-blue-600 font-medium"
                            } else {
                                "ml-2 text-gray-500"
                            }>
                                {step.title()}
                            </span>
                        </div>
                        {(i < last).then(|| view! { <div class="w-16 h-[2px] bg-gray-200"></div> })}
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
