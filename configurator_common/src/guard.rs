//! Step guard for the configure view.
//!
//! The configure step only makes sense after the use-case step has stored
//! its results. [`StepGuardController`] checks for those values on every
//! navigation and either hands them to the view or sends the user back to
//! the landing route.

use serde::{Deserialize, Serialize};

use crate::{GuardError, NavigationState, QueryParams, SessionStore, WizardConfig};

/// Snapshot of the values written by the use-case step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub requirement_analysis: String,
    pub user_input: String,
}

/// Terminal result of one guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuardOutcome {
    /// Session data is present; the view may render.
    Ready {
        step: i32,
        requirement_analysis: String,
        user_input: String,
    },
    /// Session data is missing; navigate to `target`.
    RedirectRequired { target: String },
}

impl GuardOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, GuardOutcome::Ready { .. })
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            GuardOutcome::RedirectRequired { target } => Some(target),
            GuardOutcome::Ready { .. } => None,
        }
    }

    /// Step to highlight, if the view may render.
    pub fn step(&self) -> Option<i32> {
        match self {
            GuardOutcome::Ready { step, .. } => Some(*step),
            GuardOutcome::RedirectRequired { .. } => None,
        }
    }

    pub fn session(&self) -> Option<SessionContext> {
        match self {
            GuardOutcome::Ready { requirement_analysis, user_input, .. } => Some(SessionContext {
                requirement_analysis: requirement_analysis.clone(),
                user_input: user_input.clone(),
            }),
            GuardOutcome::RedirectRequired { .. } => None,
        }
    }
}

type Listener = Box<dyn Fn(&GuardOutcome)>;

/// Gates the configure view on prior-step session data.
pub struct StepGuardController {
    config: WizardConfig,
    listeners: Vec<Listener>,
}

impl Default for StepGuardController {
    fn default() -> Self {
        Self::new(WizardConfig::default())
    }
}

impl std::fmt::Debug for StepGuardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepGuardController")
            .field("config", &self.config)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl StepGuardController {
    pub fn new(config: WizardConfig) -> Self {
        Self { config, listeners: Vec::new() }
    }

    /// Evaluate the guard for one activation.
    ///
    /// Never writes to `store`.
    pub fn initialize<S: SessionStore + ?Sized>(&self, query: &QueryParams, store: &S) -> GuardOutcome {
        match self.evaluate(query, store) {
            Ok((nav, session)) => GuardOutcome::Ready {
                step: nav.step,
                requirement_analysis: session.requirement_analysis,
                user_input: session.user_input,
            },
            Err(GuardError::MissingSessionData { .. }) => GuardOutcome::RedirectRequired {
                target: self.config.landing_route.clone(),
            },
        }
    }

    /// Like [`initialize`](Self::initialize), but reports which value is missing.
    pub fn evaluate<S: SessionStore + ?Sized>(
        &self,
        query: &QueryParams,
        store: &S,
    ) -> Result<(NavigationState, SessionContext), GuardError> {
        let nav = NavigationState::from_query_or(query, self.config.default_step);
        let requirement_analysis = read_required(store, &self.config.requirement_analysis_key)?;
        let user_input = read_required(store, &self.config.user_input_key)?;
        Ok((nav, SessionContext { requirement_analysis, user_input }))
    }

    /// Register a callback run with every outcome produced by [`navigate`](Self::navigate).
    pub fn subscribe(&mut self, listener: impl Fn(&GuardOutcome) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Re-run the guard after a navigation change and notify subscribers.
    pub fn navigate<S: SessionStore + ?Sized>(&self, query: &QueryParams, store: &S) -> GuardOutcome {
        let outcome = self.initialize(query, store);
        for listener in &self.listeners {
            listener(&outcome);
        }
        outcome
    }
}

fn read_required<S: SessionStore + ?Sized>(store: &S, key: &str) -> Result<String, GuardError> {
    match store.get(key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(GuardError::MissingSessionData { key: key.to_string() }),
    }
}
