use serde_json::{Value, json};
use tracing::{debug, trace};

use crate::model::{HistoryPoint, ResultScales};

use super::{StyleProfile, history, label, template};

/// Resolves a time-series chart from history, falling back to the current
/// result.
///
/// With usable history the sole data series is replaced by the normalized
/// point list. Without it, only the latest existing point is refreshed with
/// the current computed value, keeping its original x-coordinate.
pub(crate) fn apply(
    config: &mut Value,
    scales: &ResultScales,
    identifier: Option<&str>,
    points: &[HistoryPoint],
    style: &StyleProfile,
) {
    let samples = history::normalize_history(points);
    if !samples.is_empty() {
        let Some(data) = template::first_series_data_mut(config) else {
            debug!("template has no line series data");
            return;
        };

        *data = samples
            .iter()
            .map(|sample| {
                labeled_point(
                    Value::String(sample.date.clone()),
                    sample.value,
                    &sample.label,
                    style,
                )
            })
            .collect();
        debug!(points = samples.len(), "replaced line series with history");
        return;
    }

    let Some(identifier) = identifier else {
        trace!("line chart without scale identifier");
        return;
    };
    let Some(reading) = scales.lookup_value(identifier) else {
        debug!(scale = identifier, "scale not found, leaving line chart unchanged");
        return;
    };

    let Some(data) = template::first_series_data_mut(config) else {
        debug!("template has no line series data");
        return;
    };
    let Some(last) = data.last_mut() else {
        trace!("line series has no data points");
        return;
    };
    let Some(x) = point_x(last) else {
        debug!("latest point exposes no x coordinate");
        return;
    };

    let text = label::point_label(reading.value, reading.band.as_deref());
    *last = labeled_point(x, reading.value, &text, style);
    trace!(scale = identifier, value = reading.value, "refreshed latest line point");
}

// Existing points come either as `{ "value": [x, y], ... }` or as a bare
// `[x, y]` pair.
fn point_x(point: &Value) -> Option<Value> {
    if let Some(pair) = point.get("value").and_then(Value::as_array) {
        return pair.first().cloned();
    }
    point.as_array().and_then(|pair| pair.first().cloned())
}

fn labeled_point(x: Value, value: f64, text: &str, style: &StyleProfile) -> Value {
    json!({
        "value": [x, value],
        "label": {
            "show": true,
            "formatter": text,
            "position": "top",
            "fontSize": style.label_font_size,
            "color": style.label_color,
            "fontFamily": style.label_font_family,
        }
    })
}
