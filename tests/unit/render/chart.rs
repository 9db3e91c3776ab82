use super::*;
use crate::DecklineError;

#[test]
fn known_kinds_parse_with_whitespace_and_case_slack() {
    assert_eq!(parse_chart_kind("bar").unwrap(), ChartKind::Bar);
    assert_eq!(parse_chart_kind(" Line ").unwrap(), ChartKind::Line);
    assert_eq!(parse_chart_kind("PIE").unwrap(), ChartKind::Pie);
}

#[test]
fn unknown_kind_is_a_render_error_naming_the_kind() {
    let err = parse_chart_kind("scatter").unwrap_err();
    match err {
        DecklineError::Render(msg) => assert!(msg.contains("scatter"), "got: {msg}"),
        other => panic!("expected render error, got {other:?}"),
    }
}

#[test]
fn lenient_parse_defaults_to_bar() {
    assert_eq!(chart_kind_or_default("scatter"), ChartKind::Bar);
    assert_eq!(chart_kind_or_default("pie"), ChartKind::Pie);
}

#[test]
fn labels_are_stable() {
    assert_eq!(ChartKind::Bar.label(), "bar chart");
    assert_eq!(ChartKind::Line.label(), "line chart");
    assert_eq!(ChartKind::Pie.label(), "pie chart");
}

#[test]
fn kind_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&ChartKind::Line).unwrap(), "\"line\"");
    let kind: ChartKind = serde_json::from_str("\"pie\"").unwrap();
    assert_eq!(kind, ChartKind::Pie);
}
