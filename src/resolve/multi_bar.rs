use serde_json::Value;
use tracing::{debug, trace};

use crate::model::ResultScales;

use super::{StyleProfile, label, placement, template};

/// Injects several computed values into a multi-bar chart with scatter
/// markers.
///
/// Scatter series pair with scale identifiers in declared order; entries past
/// the identifier list are skipped. Each found value moves its marker to
/// `(value, row)`, where the row index keeps the marker aligned with its
/// bar group, and places the label on whichever side avoids clipping.
pub(crate) fn apply(
    config: &mut Value,
    scales: &ResultScales,
    identifiers: &[String],
    style: &StyleProfile,
) {
    let (axis_min, axis_max) = template::axis_range(config, "xAxis");

    let Some(series) = template::series_mut(config) else {
        debug!("template has no series list");
        return;
    };

    let scatter = template::scatter_indices(series);
    if scatter.is_empty() {
        debug!("template has no scatter series");
        return;
    }

    let mut injected = 0usize;
    for (row, series_index) in scatter.into_iter().enumerate() {
        let Some(identifier) = identifiers.get(row) else {
            trace!(row, "scatter series without matching scale identifier");
            continue;
        };
        let Some(reading) = scales.lookup_value(identifier) else {
            debug!(scale = %identifier, "scale not found, leaving marker unchanged");
            continue;
        };

        let entry = &mut series[series_index];

        if let Some(point) = template::marker_point_mut(entry) {
            set_marker_coordinate(point, reading.value, row);
            trace!(scale = %identifier, value = reading.value, row, "set marker position");
        }

        if let Some(annotation) = template::label_object_mut(entry) {
            let side = placement::side_placement(reading.value, axis_min, axis_max);
            annotation.insert(
                "formatter".to_owned(),
                Value::String(label::band_label(reading.value, reading.band.as_deref())),
            );
            annotation.insert("position".to_owned(), Value::String(side.as_str().to_owned()));
            annotation.insert(
                "offset".to_owned(),
                serde_json::json!(side.offset(style.label_offset_px)),
            );
        }

        injected += 1;
    }

    if injected > 0 {
        template::flatten_bar_gaps(series);
    }
}

fn set_marker_coordinate(point: &mut Vec<Value>, value: f64, row: usize) {
    while point.len() < 2 {
        point.push(Value::Null);
    }
    point[0] = value.into();
    point[1] = (row as u64).into();
}
