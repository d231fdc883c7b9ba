use serde_json::Value;
use tracing::{debug, trace};

use crate::model::ResultScales;

use super::template;

/// Injects several independent bar heights sharing one series.
///
/// Identifier index `i` writes to `data[len - 1 - i]`: injection walks the
/// data array backward so the first declared scale lands on the last bar.
/// Downstream report layouts depend on this ordering; keep it.
pub(crate) fn apply(config: &mut Value, scales: &ResultScales, identifiers: &[String]) {
    let Some(data) = template::first_series_data_mut(config) else {
        debug!("template has no bar data in its first series");
        return;
    };

    let count = identifiers.len().min(data.len());
    for (index, identifier) in identifiers.iter().take(count).enumerate() {
        let Some(reading) = scales.lookup_value(identifier) else {
            debug!(scale = %identifier, "scale not found, leaving bar unchanged");
            continue;
        };

        let target = data.len() - 1 - index;
        match &mut data[target] {
            Value::Object(entry) => {
                entry.insert("value".to_owned(), reading.value.into());
            }
            slot @ Value::Number(_) => {
                *slot = reading.value.into();
            }
            _ => {
                trace!(index = target, "bar entry shape is not writable");
                continue;
            }
        }
        trace!(scale = %identifier, value = reading.value, index = target, "set bar value");
    }
}
