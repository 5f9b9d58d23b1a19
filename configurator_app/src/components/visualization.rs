//! 3D visualization panel.
//!
//! The scene itself is an opaque collaborator. It may only be created when an
//! interactive display is available, so the panel takes that as a capability
//! instead of probing the environment itself.

use leptos::prelude::*;
use leptos_use::use_supported;

/// Whether the current environment can host the interactive scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayCapability {
    /// A browser window with a document is present.
    Interactive,
    /// Pre-render or non-browser host; show a static placeholder.
    Unavailable,
}

impl DisplayCapability {
    /// Reactive probe. Reads `Unavailable` until the component is mounted in a browser.
    pub fn detect() -> Signal<DisplayCapability> {
        let supported = use_supported(|| {
            web_sys::window().and_then(|win| win.document()).is_some()
        });
        Signal::derive(move || {
            if supported.get() {
                DisplayCapability::Interactive
            } else {
                DisplayCapability::Unavailable
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Solid,
    Wireframe,
}

/// Right-hand panel with the scene and its viewer buttons.
#[component]
pub fn VisualizationPanel(#[prop(into)] capability: Signal<DisplayCapability>) -> impl IntoView {
    let view_mode = RwSignal::new(ViewMode::Solid);
    let expanded = RwSignal::new(false);
    let interactive = move || capability.get() == DisplayCapability::Interactive;

    view! {
        <div class="bg-gray-50 rounded-lg p-6">
            <div class=move || if expanded.get() {
                "fixed inset-4 z-50 bg-gray-700 rounded-lg overflow-hidden"
            } else {
                "aspect-square w-full bg-gray-700 rounded-lg overflow-hidden"
            }>
                <Show
                    when=interactive
                    fallback=|| view! {
                        <div class="w-full h-full flex items-center justify-center text-sm text-gray-400">
                            "3D preview loads in the browser"
                        </div>
                    }
                >
                    <Scene3D wireframe=Signal::derive(move || view_mode.get() == ViewMode::Wireframe) />
                </Show>
            </div>
            <div class="mt-4 flex justify-center space-x-4">
                <button
                    class="p-2 text-gray-500 hover:text-gray-700"
                    title="Reset view"
                    on:click=move |_| {
                        view_mode.set(ViewMode::Solid);
                        expanded.set(false);
                    }
                >
                    <svg class="w-6 h-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15"/>
                    </svg>
                </button>
                <button
                    class="p-2 text-gray-500 hover:text-gray-700"
                    title="Expand"
                    on:click=move |_| expanded.update(|v| *v = !*v)
                >
                    <svg class="w-6 h-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 8V4m0 0h4M4 4l5 5m11-1V4m0 0h-4m4 0l-5 5M4 16v4m0 0h4m-4 0l5-5m11 5l-5-5m5 5v-4m0 4h-4"/>
                    </svg>
                </button>
                <button
                    class="p-2 text-gray-500 hover:text-gray-700"
                    title="Toggle wireframe"
                    on:click=move |_| view_mode.update(|mode| {
                        *mode = match *mode {
                            ViewMode::Solid => ViewMode::Wireframe,
                            ViewMode::Wireframe => ViewMode::Solid,
                        }
                    })
                >
                    <svg class="w-6 h-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 12a3 3 0 11-6 0 3 3 0 016 0z"/>
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M2.458 12C3.732 7.943 7.523 5 12 5c4.478 0 8.268 2.943 9.542 7-1.274 4.057-5.064 7-9.542 7-4.477 0-8.268-2.943-9.542-7z"/>
                    </svg>
                </button>
            </div>
            <p class="text-center text-sm text-gray-500 mt-2">"Use mouse to rotate and zoom"</p>
        </div>
    }
}

/// Scene mount point. Rendering is delegated to the host page's viewer script,
/// which attaches to `#robot-scene`.
#[component]
fn Scene3D(#[prop(into)] wireframe: Signal<bool>) -> impl IntoView {
    view! {
        <div
            id="robot-scene"
            class="w-full h-full"
            data-mode=move || if wireframe.get() { "wireframe" } else { "solid" }
        ></div>
    }
}
