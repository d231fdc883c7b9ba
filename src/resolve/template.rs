//! Role-based accessors into the generic chart configuration tree.
//!
//! Strategies never index into nested paths directly. Each accessor names
//! the substructure it expects ("the overlay-line series", "the scatter
//! series") and returns `None` when the template does not carry it, so a
//! malformed template degrades to a partial or full no-op instead of a
//! failure.

use serde_json::{Map, Value, json};

pub(crate) const AXIS_MIN_DEFAULT: f64 = 0.0;
pub(crate) const AXIS_MAX_DEFAULT: f64 = 100.0;

/// The template's series list.
pub(crate) fn series_mut(config: &mut Value) -> Option<&mut Vec<Value>> {
    config.get_mut("series")?.as_array_mut()
}

/// Declared kind of one series entry (`"bar"`, `"line"`, `"scatter"`, ...).
pub(crate) fn series_kind(series: &Value) -> Option<&str> {
    series.get("type")?.as_str()
}

/// First series exposing an indicator-line data point, regardless of its
/// declared kind or position in the list.
pub(crate) fn indicator_line_series_mut(series: &mut [Value]) -> Option<&mut Value> {
    series.iter_mut().find(|entry| has_indicator_point(entry))
}

/// First line-kind series carrying an overlay-line substructure. Stacked-bar
/// templates insert the overlay at varying positions in the series list.
pub(crate) fn overlay_line_series_mut(series: &mut [Value]) -> Option<&mut Value> {
    series
        .iter_mut()
        .find(|entry| series_kind(entry) == Some("line") && entry.get("markLine").is_some())
}

/// Indices of all scatter-kind series, in declared order. Each one is an
/// indicator marker for one scale.
pub(crate) fn scatter_indices(series: &[Value]) -> Vec<usize> {
    series
        .iter()
        .enumerate()
        .filter(|(_, entry)| series_kind(entry) == Some("scatter"))
        .map(|(index, _)| index)
        .collect()
}

/// `markLine.data[0]` as a mutable object, when present.
pub(crate) fn indicator_point_mut(series: &mut Value) -> Option<&mut Map<String, Value>> {
    series
        .get_mut("markLine")?
        .get_mut("data")?
        .get_mut(0)?
        .as_object_mut()
}

/// `markLine.label` as a mutable object, when present.
pub(crate) fn indicator_label_mut(series: &mut Value) -> Option<&mut Map<String, Value>> {
    series.get_mut("markLine")?.get_mut("label")?.as_object_mut()
}

/// A scatter marker's first data point as a mutable coordinate array.
pub(crate) fn marker_point_mut(series: &mut Value) -> Option<&mut Vec<Value>> {
    series.get_mut("data")?.get_mut(0)?.as_array_mut()
}

/// A series' `label` block as a mutable object, when present.
pub(crate) fn label_object_mut(series: &mut Value) -> Option<&mut Map<String, Value>> {
    series.get_mut("label")?.as_object_mut()
}

/// The data array of the first series.
pub(crate) fn first_series_data_mut(config: &mut Value) -> Option<&mut Vec<Value>> {
    series_mut(config)?.get_mut(0)?.get_mut("data")?.as_array_mut()
}

/// Numeric range of an axis, with the grammar's 0..100 defaults.
///
/// Accepts both the object form (`"xAxis": {...}`) and the array form
/// (`"xAxis": [{...}]`, first entry).
pub(crate) fn axis_range(config: &Value, axis_key: &str) -> (f64, f64) {
    let axis: Option<&Value> = match config.get(axis_key) {
        Some(Value::Array(entries)) => entries.first(),
        other => other,
    };

    let min = axis
        .and_then(|entry| entry.get("min"))
        .and_then(Value::as_f64)
        .unwrap_or(AXIS_MIN_DEFAULT);
    let max = axis
        .and_then(|entry| entry.get("max"))
        .and_then(Value::as_f64)
        .unwrap_or(AXIS_MAX_DEFAULT);

    (min, max)
}

/// Removes the inter-bar gap on every bar-kind series so stacked members
/// read as one continuous bar.
pub(crate) fn flatten_bar_gaps(series: &mut [Value]) {
    for entry in series.iter_mut() {
        if series_kind(entry) != Some("bar") {
            continue;
        }
        if let Some(object) = entry.as_object_mut() {
            object.insert("barGap".to_owned(), json!("0%"));
        }
    }
}

fn has_indicator_point(series: &Value) -> bool {
    series
        .get("markLine")
        .and_then(|mark_line| mark_line.get("data"))
        .and_then(|data| data.get(0))
        .is_some_and(Value::is_object)
}
