//! Metric Bar Widget
//!
//! A labelled horizontal bar for one analysis metric.

use leptos::prelude::*;

/// Bar component for a single analysis metric.
#[component]
pub fn MetricBar(
    /// Metric name shown on the left
    #[prop(into)] label: String,
    /// Display value shown on the right (e.g., "150kg")
    #[prop(into)] value: String,
    /// Fill percentage
    percent: u8,
) -> impl IntoView {
    let width = percent.min(100);

    view! {
        <div class="space-y-2">
            <div class="flex justify-between items-center">
                <span class="text-gray-700">{label}</span>
                <span class="text-gray-900">{value}</span>
            </div>
            <div class="w-full bg-gray-100 rounded-full h-2">
                <div
                    class="bg-blue-600 h-2 rounded-full transition-all duration-200"
                    style=format!("width: {}%;", width)
                />
            </div>
        </div>
    }
}
