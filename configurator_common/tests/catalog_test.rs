use configurator_common::*;

#[test]
fn test_metric_bars_match_display_values() {
    let bars: Vec<(&str, &str, u8)> = ANALYSIS_METRICS
        .iter()
        .map(|m| (m.label, m.value, m.percent))
        .collect();

    assert_eq!(
        bars,
        vec![
            ("Weight Capacity", "150kg", 80),
            ("Reach Distance", "2.5m", 70),
            ("Speed", "1.2m/s", 60),
            ("Precision", "±0.1mm", 90),
        ]
    );
}

#[test]
fn test_only_first_processing_item_is_pending() {
    let pending: Vec<_> = PROCESSING_ITEMS.iter().filter(|i| !i.done).collect();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].label, "Analyzing workspace requirements...");
}

#[test]
fn test_use_case_lookup() {
    let example = UseCaseKind::Assembly.example();
    assert_eq!(example.title, "Assembly Line");
    assert_eq!(example.icon, "⚙️");
}

#[test]
fn test_requirement_analysis_json_shape() {
    let analysis = RequirementAnalysis::for_request("  pick and pack  ", Some(UseCaseKind::Warehouse));
    let json = analysis.to_json().unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["useCase"], "warehouse");
    assert_eq!(value["request"], "pick and pack");
    assert_eq!(value["suggestedComponents"][0], "RT-2000 Arm");

    assert_eq!(RequirementAnalysis::from_stored(&json), Some(analysis));
    assert_eq!(RequirementAnalysis::from_stored("pick-and-pack"), None);
}
