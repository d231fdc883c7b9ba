use serde_json::Value;
use tracing::{debug, trace};

use crate::model::ResultScales;

use super::{label, template};

/// Injects a computed value into a single stacked bar with a line overlay.
///
/// The overlay may sit anywhere in the series list, so it is located by role:
/// the first line-kind series carrying an overlay-line substructure. The
/// stack's inter-bar gaps are flattened so the members read as one bar.
pub(crate) fn apply(config: &mut Value, scales: &ResultScales, identifier: Option<&str>) {
    let Some(identifier) = identifier else {
        trace!("stacked bar without scale identifier");
        return;
    };
    let Some(reading) = scales.lookup_value(identifier) else {
        debug!(scale = identifier, "scale not found, leaving stacked bar unchanged");
        return;
    };

    let Some(series) = template::series_mut(config) else {
        debug!("template has no series list");
        return;
    };
    template::flatten_bar_gaps(series);

    let Some(line) = template::overlay_line_series_mut(series) else {
        debug!("template has no line series with an overlay line");
        return;
    };

    if let Some(point) = template::indicator_point_mut(line) {
        point.insert("xAxis".to_owned(), reading.value.into());
        trace!(scale = identifier, value = reading.value, "set overlay line position");
    }

    if let Some(annotation) = template::indicator_label_mut(line) {
        annotation.insert(
            "formatter".to_owned(),
            Value::String(label::band_label(reading.value, reading.band.as_deref())),
        );
    }
}
