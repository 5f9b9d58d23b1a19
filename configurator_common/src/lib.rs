//! Shared wizard types for the robot configurator web application.
//!
//! This crate holds everything the configure step needs that does not touch
//! the browser, so it can be tested natively. All types are WASM-compatible.
//!
//! # Architecture
//!
//! - `configurator_common` - Step guard, session store abstraction, wizard steps, static catalog
//! - `configurator_app` - Leptos client that renders the wizard and owns browser storage
//!
//! # Usage
//!
//! ```rust
//! use configurator_common::{GuardOutcome, MemoryStore, QueryParams, StepGuardController};
//!
//! let mut store = MemoryStore::new();
//! store.insert("requirementAnalysis", "pick-and-pack");
//! store.insert("userInput", "warehouse robot");
//!
//! let guard = StepGuardController::default();
//! let outcome = guard.initialize(&QueryParams::parse("?step=3"), &store);
//! assert!(matches!(outcome, GuardOutcome::Ready { step: 3, .. }));
//! ```

mod catalog;
mod config;
mod error;
mod guard;
mod navigation;
mod steps;
mod store;

pub use catalog::*;
pub use config::*;
pub use error::*;
pub use guard::*;
pub use navigation::*;
pub use steps::*;
pub use store::*;
