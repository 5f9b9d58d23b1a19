//! Reactive wrapper around [`StepGuardController`].

use configurator_common::{GuardOutcome, QueryParams, StepGuardController, WizardConfig, STEP_PARAM};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::storage::LocalStorage;

/// Run the step guard now and again whenever the query parameters change.
///
/// Redirects are performed here. The returned signal holds the last outcome,
/// or `None` before the first evaluation.
pub fn use_step_guard(config: WizardConfig) -> ReadSignal<Option<GuardOutcome>> {
    let query = use_query_map();
    let navigate = use_navigate();
    let (outcome, set_outcome) = signal::<Option<GuardOutcome>>(None);

    let mut guard = StepGuardController::new(config);
    guard.subscribe(move |result| {
        match result {
            GuardOutcome::RedirectRequired { target } => {
                navigate(target.as_str(), Default::default());
            }
            GuardOutcome::Ready { step, .. } => {
                log::debug!("Step guard ready at step {}", step);
            }
        }
        set_outcome.set(Some(result.clone()));
    });

    Effect::new(move |_| {
        let params: QueryParams = query
            .get()
            .get(STEP_PARAM)
            .map(|step| (STEP_PARAM, step))
            .into_iter()
            .collect();
        guard.navigate(&params, &LocalStorage::new());
    });

    outcome
}
