use serde_json::Value;
use tracing::{debug, trace};

use crate::model::ResultScales;

use super::{label, template};

/// Injects a single computed value as the indicator line on a gradient bar.
///
/// The indicator is the first series exposing an indicator-line data point;
/// its axis coordinate becomes the looked-up value and its annotation gets
/// the `Wert:`-prefixed label. Missing structure or a missing value leaves
/// the template unchanged.
pub(crate) fn apply(config: &mut Value, scales: &ResultScales, identifier: Option<&str>) {
    let Some(identifier) = identifier else {
        trace!("gradient bar without scale identifier");
        return;
    };
    let Some(reading) = scales.lookup_value(identifier) else {
        debug!(scale = identifier, "scale not found, leaving gradient bar unchanged");
        return;
    };

    let Some(series) = template::series_mut(config) else {
        debug!("template has no series list");
        return;
    };
    let Some(line) = template::indicator_line_series_mut(series) else {
        debug!("template has no indicator line series");
        return;
    };

    if let Some(point) = template::indicator_point_mut(line) {
        point.insert("xAxis".to_owned(), reading.value.into());
        trace!(scale = identifier, value = reading.value, "set indicator line position");
    }

    if let Some(annotation) = template::indicator_label_mut(line) {
        annotation.insert(
            "formatter".to_owned(),
            Value::String(label::indicator_label(reading.value, reading.band.as_deref())),
        );
    }
}
