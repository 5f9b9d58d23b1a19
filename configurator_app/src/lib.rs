use leptos::prelude::*;
use leptos::mount::mount_to_body;
use leptos_router::components::{Router, Routes, Route};
use leptos_router::path;
use wasm_bindgen::prelude::*;

mod components;
mod guard_hook;
mod pages;
mod storage;

use configurator_common::WizardConfig;
use pages::{ConfigurePage, LandingPage, ReviewPage};

pub use storage::LocalStorage;

/// Route and store-key overrides bundled with the app.
const EMBEDDED_CONFIG: &str = include_str!("../configurator.json");

/// App-wide wizard settings, provided as context.
#[derive(Clone, Debug)]
pub struct WizardContext {
    pub config: WizardConfig,
}

impl WizardContext {
    pub fn load() -> Self {
        let config = match WizardConfig::from_json(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring bundled configurator.json: {}", e);
                WizardConfig::default()
            }
        };
        Self { config }
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    let ctx = WizardContext::load();
    log::info!("Configurator started, next route {}", ctx.config.next_route);
    provide_context(ctx);

    view! {
        <Router>
            <Routes fallback=|| view! { <LandingPage/> }>
                <Route path=path!("/") view=LandingPage />
                <Route path=path!("/configure") view=ConfigurePage />
                <Route path=path!("/review") view=ReviewPage />
            </Routes>
        </Router>
    }
}
