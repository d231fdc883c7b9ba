use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One prior measurement of a scale, as exported by the report pipeline.
///
/// `date` uses the `DD.MM.YYYY` report convention. A `None` value marks a
/// session where the scale was not computed; such points are dropped during
/// normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPoint {
    pub date: String,

    #[serde(default)]
    pub value: Option<f64>,

    #[serde(default)]
    pub cut_off_area: Option<String>,
}

impl HistoryPoint {
    #[must_use]
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: date.into(),
            value: Some(value),
            cut_off_area: None,
        }
    }

    #[must_use]
    pub fn with_band(mut self, band: impl Into<String>) -> Self {
        self.cut_off_area = Some(band.into());
        self
    }
}

/// Historical measurements keyed by lower-cased scale identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScaleHistories(IndexMap<String, Vec<HistoryPoint>>);

impl ScaleHistories {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a history series. The key is lower-cased on insert so
    /// lookups match the identifier casing charts declare.
    pub fn insert(&mut self, identifier: impl AsRef<str>, points: Vec<HistoryPoint>) {
        self.0.insert(identifier.as_ref().to_lowercase(), points);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// History for one scale; empty when none was recorded.
    #[must_use]
    pub fn for_scale(&self, identifier: &str) -> &[HistoryPoint] {
        self.0
            .get(identifier.to_lowercase().as_str())
            .map_or(&[], Vec::as_slice)
    }
}
