use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::WizardContext;

/// Start Over / Continue buttons at the bottom of a wizard page.
#[component]
pub fn NavigationButtons(
    /// Route the Continue button leads to
    #[prop(into)] next_route: String,
    #[prop(default = "Continue")] continue_label: &'static str,
) -> impl IntoView {
    let ctx = use_context::<WizardContext>().expect("WizardContext not found");
    let landing = ctx.config.landing_route.clone();
    let navigate = use_navigate();
    let navigate_next = navigate.clone();

    view! {
        <div class="flex justify-end space-x-4 mt-8">
            <button
                class="px-6 py-3 border border-gray-300 rounded-lg text-gray-700 hover:bg-gray-50"
                on:click=move |_| {
                    log::info!("Start over, returning to {}", landing);
                    navigate(landing.as_str(), Default::default());
                }
            >
                "Start Over"
            </button>
            <button
                class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700"
                on:click=move |_| {
                    log::info!("Continue to {}", next_route);
                    navigate_next(next_route.as_str(), Default::default());
                }
            >
                {continue_label}
            </button>
        </div>
    }
}
