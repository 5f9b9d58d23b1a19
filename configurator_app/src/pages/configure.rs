//! Components step of the wizard.
//!
//! Only renders once the use-case step has left its results in local
//! storage; otherwise the step guard sends the user back to the landing page.

use leptos::prelude::*;

use crate::components::{
    AnalysisResults, DisplayCapability, NavigationButtons, ProcessingStatus, ProgressSteps,
    SuggestedComponents, VisualizationPanel,
};
use crate::guard_hook::use_step_guard;
use crate::WizardContext;

#[component]
pub fn ConfigurePage() -> impl IntoView {
    let ctx = use_context::<WizardContext>().expect("WizardContext not found");
    let next_route = ctx.config.next_route.clone();
    let outcome = use_step_guard(ctx.config);
    let capability = DisplayCapability::detect();

    view! {
        <div class="max-w-7xl mx-auto px-4 py-8">
            {move || outcome.get().and_then(|o| o.step()).map(|step| {
                let next_route = next_route.clone();
                view! {
                    <ProgressSteps current_step=step highlight_from=2 />

                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                        <div class="space-y-6">
                            <AnalysisResults/>
                            <ProcessingStatus/>
                            <SuggestedComponents/>
                        </div>
                        <VisualizationPanel capability=capability />
                    </div>

                    <NavigationButtons next_route=next_route />
                }
            })}
        </div>
    }
}
