use configurator_common::{RequirementAnalysis, WizardConfig};
use leptos::prelude::*;

use crate::components::{NavigationButtons, ProgressSteps};
use crate::guard_hook::use_step_guard;
use crate::WizardContext;

/// Review step: read-only echo of what was captured so far.
#[component]
pub fn ReviewPage() -> impl IntoView {
    let ctx = use_context::<WizardContext>().expect("WizardContext not found");
    let back_route = ctx.config.configure_href(ctx.config.default_step);
    let outcome = use_step_guard(WizardConfig { default_step: 3, ..ctx.config });

    view! {
        <div class="max-w-3xl mx-auto px-4 py-8">
            {move || outcome.get().and_then(|o| Some((o.step()?, o.session()?))).map(|(step, session)| {
                let analysis = RequirementAnalysis::from_stored(&session.requirement_analysis);
                let use_case = analysis
                    .as_ref()
                    .and_then(|a| a.use_case)
                    .map(|kind| kind.example().title)
                    .unwrap_or("Custom");
                let components = analysis
                    .map(|a| a.suggested_components.join(", "))
                    .unwrap_or_default();
                let back_route = back_route.clone();

                view! {
                    <ProgressSteps current_step=step highlight_from=2 />

                    <div class="bg-white rounded-lg shadow-sm p-6 space-y-4">
                        <h2 class="text-xl font-bold text-gray-900">"Review"</h2>
                        <div>
                            <span class="text-sm text-gray-500">"Use case"</span>
                            <p class="text-gray-900">{use_case}</p>
                        </div>
                        <div>
                            <span class="text-sm text-gray-500">"Your request"</span>
                            <p class="text-gray-900 whitespace-pre-wrap">{session.user_input}</p>
                        </div>
                        {(!components.is_empty()).then(|| view! {
                            <div>
                                <span class="text-sm text-gray-500">"Components"</span>
                                <p class="text-gray-900">{components}</p>
                            </div>
                        })}
                    </div>

                    <NavigationButtons next_route=back_route continue_label="Back to Components" />
                }
            })}
        </div>
    }
}
