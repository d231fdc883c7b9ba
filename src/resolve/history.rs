use chrono::NaiveDate;
use serde::Serialize;
use tracing::trace;

use crate::model::HistoryPoint;

use super::label;

/// Date convention used by report history entries.
pub const HISTORY_DATE_FORMAT: &str = "%d.%m.%Y";

/// Parses a `DD.MM.YYYY` history date into a comparable calendar date.
#[must_use]
pub fn parse_report_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), HISTORY_DATE_FORMAT).ok()
}

/// Render-ready sample produced from one usable history point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistorySample {
    pub date: String,
    pub value: f64,
    pub label: String,
}

/// Converts a history series into the chronologically ordered point list a
/// time-series segment expects.
///
/// Points without a value and points with unparsable dates are dropped at
/// the point level; the ascending sort is stable for equal dates. Labels are
/// the value fixed to one decimal plus the optional band suffix.
#[must_use]
pub fn normalize_history(points: &[HistoryPoint]) -> Vec<HistorySample> {
    let mut dated: Vec<(NaiveDate, HistorySample)> = Vec::with_capacity(points.len());

    for point in points {
        let Some(value) = point.value else {
            trace!(date = %point.date, "dropping history point without value");
            continue;
        };
        let Some(parsed) = parse_report_date(&point.date) else {
            trace!(date = %point.date, "dropping history point with unparsable date");
            continue;
        };

        dated.push((
            parsed,
            HistorySample {
                date: point.date.clone(),
                value,
                label: label::point_label(value, point.cut_off_area.as_deref()),
            },
        ));
    }

    dated.sort_by_key(|(parsed, _)| *parsed);
    dated.into_iter().map(|(_, sample)| sample).collect()
}
