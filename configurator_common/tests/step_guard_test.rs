use std::cell::RefCell;
use std::rc::Rc;

use configurator_common::*;

fn populated_store() -> MemoryStore {
    [
        ("requirementAnalysis", "pick-and-pack"),
        ("userInput", "warehouse robot"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_ready_with_explicit_step() {
    let guard = StepGuardController::default();
    let outcome = guard.initialize(&QueryParams::parse("?step=3"), &populated_store());

    assert_eq!(
        outcome,
        GuardOutcome::Ready {
            step: 3,
            requirement_analysis: "pick-and-pack".to_string(),
            user_input: "warehouse robot".to_string(),
        }
    );
}

#[test]
fn test_redirect_when_store_empty() {
    let guard = StepGuardController::default();
    let outcome = guard.initialize(&QueryParams::parse("?step=2"), &MemoryStore::new());

    assert_eq!(outcome, GuardOutcome::RedirectRequired { target: "/".to_string() });
}

#[test]
fn test_default_step_without_params() {
    let guard = StepGuardController::default();
    let outcome = guard.initialize(&QueryParams::parse(""), &populated_store());

    assert_eq!(outcome.step(), Some(2));
    assert!(outcome.is_ready());
}

#[test]
fn test_redirect_when_either_value_missing() {
    let guard = StepGuardController::default();

    for missing in ["requirementAnalysis", "userInput"] {
        let mut store = populated_store();
        store.remove(missing);

        for query in ["", "?step=1", "?step=3", "?step=4", "?step=oops"] {
            let outcome = guard.initialize(&QueryParams::parse(query), &store);
            assert_eq!(outcome.redirect_target(), Some("/"), "missing {missing}, query {query:?}");
        }
    }
}

#[test]
fn test_empty_value_counts_as_missing() {
    let guard = StepGuardController::default();
    let mut store = populated_store();
    store.insert("userInput", "");

    let outcome = guard.initialize(&QueryParams::new(), &store);
    assert_eq!(outcome.redirect_target(), Some("/"));
    assert!(outcome.session().is_none());
}

#[test]
fn test_evaluate_names_missing_key() {
    let guard = StepGuardController::default();
    let mut store = populated_store();
    store.remove("requirementAnalysis");

    let err = guard.evaluate(&QueryParams::new(), &store).unwrap_err();
    assert_eq!(
        err,
        GuardError::MissingSessionData { key: "requirementAnalysis".to_string() }
    );
    assert_eq!(err.to_string(), "session value `requirementAnalysis` is missing");
}

#[test]
fn test_values_pass_through_unchanged() {
    let guard = StepGuardController::default();
    let analysis = r#"{"useCase":"quality","request":"inspect  welds\n"}"#;
    let input = "  Need ±0.1mm inspection 🔍  ";

    let mut store = MemoryStore::new();
    store.set("requirementAnalysis", analysis);
    store.set("userInput", input);

    let session = guard.initialize(&QueryParams::new(), &store).session().unwrap();
    assert_eq!(session.requirement_analysis, analysis);
    assert_eq!(session.user_input, input);
}

#[test]
fn test_guard_does_not_write_store() {
    let guard = StepGuardController::default();
    let store = populated_store();
    let before = store.clone();

    guard.initialize(&QueryParams::parse("?step=4"), &store);
    guard.initialize(&QueryParams::parse("?step=4"), &MemoryStore::new());

    assert_eq!(store, before);
}

#[test]
fn test_custom_config_keys_and_landing_route() {
    let config = WizardConfig::from_json(
        r#"{ "userInputKey": "request", "landingRoute": "/start", "defaultStep": 1 }"#,
    )
    .unwrap();
    let guard = StepGuardController::new(config);

    let mut store = populated_store();
    assert_eq!(guard.initialize(&QueryParams::new(), &store).redirect_target(), Some("/start"));

    store.insert("request", "palletizing");
    let outcome = guard.initialize(&QueryParams::new(), &store);
    assert_eq!(outcome.step(), Some(1));
    assert_eq!(outcome.session().unwrap().user_input, "palletizing");
}

#[test]
fn test_navigate_notifies_subscribers_in_order() {
    let seen: Rc<RefCell<Vec<GuardOutcome>>> = Rc::new(RefCell::new(Vec::new()));
    let mut guard = StepGuardController::default();
    let sink = seen.clone();
    guard.subscribe(move |outcome| sink.borrow_mut().push(outcome.clone()));

    let mut store = populated_store();
    guard.navigate(&QueryParams::parse("?step=2"), &store);
    guard.navigate(&QueryParams::parse("?step=3"), &store);
    store.remove("userInput");
    guard.navigate(&QueryParams::parse("?step=4"), &store);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0].step(), Some(2));
    assert_eq!(seen[1].step(), Some(3));
    assert_eq!(seen[2].redirect_target(), Some("/"));
}

#[test]
fn test_initialize_does_not_notify() {
    let count = Rc::new(RefCell::new(0));
    let mut guard = StepGuardController::default();
    let c = count.clone();
    guard.subscribe(move |_| *c.borrow_mut() += 1);

    guard.initialize(&QueryParams::new(), &populated_store());
    assert_eq!(*count.borrow(), 0);

    guard.navigate(&QueryParams::new(), &populated_store());
    assert_eq!(*count.borrow(), 1);
}
