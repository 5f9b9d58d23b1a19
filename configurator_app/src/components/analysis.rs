//! Analysis cards for the configure step.

use configurator_common::{ANALYSIS_METRICS, PROCESSING_ITEMS, SUGGESTED_COMPONENTS};
use leptos::prelude::*;

use super::MetricBar;

/// Capacity, reach, speed and precision bars.
#[component]
pub fn AnalysisResults() -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-sm p-6">
            <h2 class="text-xl font-bold text-gray-900 mb-6">"AI Analysis Results"</h2>
            <div class="space-y-4">
                {ANALYSIS_METRICS.iter().map(|metric| view! {
                    <MetricBar label=metric.label value=metric.value percent=metric.percent />
                }).collect_view()}
            </div>
        </div>
    }
}

/// Processing checklist. Pending items show a spinner.
#[component]
pub fn ProcessingStatus() -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-sm p-6">
            <h2 class="text-xl font-bold text-gray-900 mb-6">"Real-time Processing"</h2>
            <div class="space-y-4">
                {PROCESSING_ITEMS.iter().map(|item| view! {
                    <div class="flex items-center space-x-3">
                        {if item.done {
                            view! {
                                <svg class="h-5 w-5 text-green-500" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7"/>
                                </svg>
                            }.into_any()
                        } else {
                            view! {
                                <div class="animate-spin rounded-full h-4 w-4 border-2 border-blue-600 border-t-transparent"></div>
                            }.into_any()
                        }}
                        <span class="text-gray-700">{item.label}</span>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn SuggestedComponents() -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-sm p-6">
            <h2 class="text-xl font-bold text-gray-900 mb-6">"Suggested Components"</h2>
            <div class="space-y-4">
                {SUGGESTED_COMPONENTS.iter().map(|component| view! {
                    <div class="flex items-start space-x-4">
                        <div class="flex-shrink-0">
                            <div class="w-10 h-10 bg-gray-100 rounded-lg flex items-center justify-center">
                                {component.icon}
                            </div>
                        </div>
                        <div>
                            <h3 class="font-medium text-gray-900">{component.name}</h3>
                            <p class="text-sm text-gray-500">{component.description}</p>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
