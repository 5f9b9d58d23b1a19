//! Use-case step: collects the request the later steps are built from.

use configurator_common::{RequirementAnalysis, SessionStoreMut, UseCaseKind, USE_CASE_EXAMPLES};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::ProgressSteps;
use crate::storage::LocalStorage;
use crate::WizardContext;

#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = use_context::<WizardContext>().expect("WizardContext not found");
    let navigate = use_navigate();

    let (request, set_request) = signal(String::new());
    let (use_case, set_use_case) = signal::<Option<UseCaseKind>>(None);
    let (validation_error, set_validation_error) = signal::<Option<String>>(None);

    let submit = move || {
        let text = request.get();
        if text.trim().is_empty() {
            set_validation_error.set(Some("Describe what the robot should do".to_string()));
            return;
        }
        set_validation_error.set(None);

        let analysis = RequirementAnalysis::for_request(&text, use_case.get());
        let summary = match analysis.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to encode requirement analysis: {}", e);
                set_validation_error.set(Some("Could not save your request".to_string()));
                return;
            }
        };

        let mut store = LocalStorage::new();
        store.set(&ctx.config.requirement_analysis_key, &summary);
        store.set(&ctx.config.user_input_key, &text);

        let href = ctx.config.configure_href(ctx.config.default_step);
        log::info!("Request captured, continuing to {}", href);
        navigate(href.as_str(), Default::default());
    };

    view! {
        <div class="max-w-3xl mx-auto px-4 py-8">
            <ProgressSteps current_step=1 />

            <div class="bg-white rounded-lg shadow-sm p-6 space-y-6">
                <h1 class="text-2xl font-bold text-gray-900">"What should your robot do?"</h1>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    {USE_CASE_EXAMPLES.iter().map(move |example| {
                        let kind = example.kind;
                        let text = example.example;
                        view! {
                            <button
                                class=move || if use_case.get() == Some(kind) {
                                    "text-left p-4 rounded-lg border border-blue-600 bg-blue-50"
                                } else {
                                    "text-left p-4 rounded-lg border border-gray-200 hover:border-blue-300"
                                }
                                on:click=move |_| {
                                    set_use_case.set(Some(kind));
                                    set_request.set(text.to_string());
                                }
                            >
                                <div class="text-2xl mb-2">{example.icon}</div>
                                <h3 class="font-medium text-gray-900">{example.title}</h3>
                                <p class="text-sm text-gray-500">{example.example}</p>
                            </button>
                        }
                    }).collect_view()}
                </div>

                <textarea
                    class="w-full h-32 p-3 border border-gray-300 rounded-lg text-gray-900"
                    placeholder="e.g. I need a robot to palletize boxes at the end of a conveyor"
                    prop:value=move || request.get()
                    on:input=move |ev| {
                        set_use_case.set(None);
                        set_request.set(event_target_value(&ev));
                    }
                />

                <Show when=move || validation_error.get().is_some()>
                    <p class="text-sm text-red-600">{move || validation_error.get().unwrap_or_default()}</p>
                </Show>

                <div class="flex justify-end">
                    <button
                        class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700"
                        on:click=move |_| submit()
                    >
                        "Analyze Requirements"
                    </button>
                </div>
            </div>
        </div>
    }
}
