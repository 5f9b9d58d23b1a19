use configurator_common::{NavigationState, QueryParams, WizardStep};

#[test]
fn test_valid_integer_steps_are_kept() {
    for step in [1, 2, 3, 4, 7, -1, 42] {
        let params = QueryParams::parse(&format!("step={step}"));
        assert_eq!(NavigationState::from_query(&params).step, step);
    }
}

#[test]
fn test_numeric_steps_are_truncated() {
    let cases = [("4.0", 4), ("3.5", 3), ("1e1", 10), ("99999999999", i32::MAX)];
    for (raw, expected) in cases {
        let params = QueryParams::parse(&format!("step={raw}"));
        let nav = NavigationState::from_query(&params);
        assert_eq!(nav.step, expected, "step={raw}");
        assert!(WizardStep::Review.is_active(nav.step), "step={raw}");
    }
}

#[test]
fn test_unusable_steps_fall_back_to_two() {
    for query in ["", "?", "step=", "step=abc", "step=NaN", "step=0", "step=0.0", "other=3"] {
        let params = QueryParams::parse(query);
        assert_eq!(NavigationState::from_query(&params).step, 2, "query {query:?}");
    }
}

#[test]
fn test_step_survives_other_params() {
    let params = QueryParams::parse("?ref=landing&step=4&utm=x%20y");
    assert_eq!(NavigationState::from_query(&params).step, 4);
    assert_eq!(params.get("utm"), Some("x y"));
}

#[test]
fn test_params_from_pairs() {
    let params: QueryParams = [("step", "3")].into_iter().collect();
    assert_eq!(NavigationState::from_query(&params), NavigationState { step: 3 });
}

#[test]
fn test_step_indicator_activation() {
    let lit: Vec<&str> = WizardStep::all()
        .iter()
        .filter(|s| s.is_active(3))
        .map(|s| s.title())
        .collect();
    assert_eq!(lit, vec!["Use Case", "Components", "Review"]);

    assert!(WizardStep::all().iter().all(|s| s.is_active(9)));
    assert!(!WizardStep::UseCase.is_active(-1));
}

#[test]
fn test_use_case_step_stays_unlit_past_configure() {
    let lit = |current| -> Vec<i32> {
        WizardStep::all()
            .iter()
            .filter(|s| s.is_lit(current, 2))
            .map(|s| s.number())
            .collect()
    };

    assert_eq!(lit(2), vec![2]);
    assert_eq!(lit(3), vec![2, 3]);
    assert_eq!(lit(4), vec![2, 3, 4]);
    assert!(lit(1).is_empty());

    assert!(WizardStep::UseCase.is_lit(1, 1));
    assert!(!WizardStep::Review.is_lit(2, 1));
}

#[test]
fn test_step_lookup_by_number() {
    assert_eq!(WizardStep::from_number(2), Some(WizardStep::Components));
    assert_eq!(WizardStep::from_number(4).map(|s| s.title()), Some("Quote"));
    assert_eq!(WizardStep::from_number(5), None);
}
