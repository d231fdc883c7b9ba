use chart_resolve::{
    ChartKind, ChartSpec, ResultScales, ScaleHistories, ScaleResult, StyleProfile, resolve_chart,
};
use serde_json::{Value, json};

fn resolve(template: Value, scales: &ResultScales, ids: &[&str]) -> Value {
    let spec = ChartSpec::new(ChartKind::MultiSingleBar, template).with_scales(ids.iter().copied());
    resolve_chart(&spec, scales, &ScaleHistories::new(), &StyleProfile::default())
        .expect("resolvable chart")
        .config
}

#[test]
fn identifiers_map_backward_onto_the_data_array() {
    let template = json!({
        "series": [
            { "type": "bar", "data": [{ "value": 0 }, { "value": 0 }, { "value": 0 }] }
        ]
    });

    let mut scales = ResultScales::new();
    scales.insert("a", ScaleResult::with_value(5.0));
    scales.insert("b", ScaleResult::with_value(9.0));

    let config = resolve(template, &scales, &["a", "b"]);

    // First identifier lands on the last bar, second on the one before it.
    assert_eq!(config["series"][0]["data"][2]["value"], json!(5.0));
    assert_eq!(config["series"][0]["data"][1]["value"], json!(9.0));
    assert_eq!(config["series"][0]["data"][0]["value"], json!(0));
}

#[test]
fn missing_scale_leaves_its_bar_untouched() {
    let template = json!({
        "series": [
            { "type": "bar", "data": [{ "value": 1 }, { "value": 2 }] }
        ]
    });

    let mut scales = ResultScales::new();
    scales.insert("b", ScaleResult::with_value(7.0));

    let config = resolve(template, &scales, &["a", "b"]);

    // "a" has no result, so the last bar keeps its template value.
    assert_eq!(config["series"][0]["data"][1]["value"], json!(2));
    assert_eq!(config["series"][0]["data"][0]["value"], json!(7.0));
}

#[test]
fn bare_number_entries_are_replaced() {
    let template = json!({
        "series": [
            { "type": "bar", "data": [1, 2, 3] }
        ]
    });

    let mut scales = ResultScales::new();
    scales.insert("a", ScaleResult::with_value(11.0));

    let config = resolve(template, &scales, &["a"]);

    assert_eq!(config["series"][0]["data"], json!([1, 2, 11.0]));
}

#[test]
fn surplus_identifiers_beyond_the_data_are_ignored() {
    let template = json!({
        "series": [
            { "type": "bar", "data": [{ "value": 0 }] }
        ]
    });

    let mut scales = ResultScales::new();
    scales.insert("a", ScaleResult::with_value(4.0));
    scales.insert("b", ScaleResult::with_value(6.0));

    let config = resolve(template, &scales, &["a", "b"]);

    assert_eq!(config["series"][0]["data"], json!([{ "value": 4.0 }]));
}

#[test]
fn template_without_bar_data_is_a_no_op() {
    let template = json!({ "series": [] });
    let mut scales = ResultScales::new();
    scales.insert("a", ScaleResult::with_value(4.0));

    let config = resolve(template.clone(), &scales, &["a"]);

    assert_eq!(config, template);
}
