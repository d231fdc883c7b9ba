use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One computed scale result from the evaluation pipeline.
///
/// `value: None` means "no computed result yet"; charts referencing the scale
/// stay visually unchanged in that case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleResult {
    #[serde(default)]
    pub value: Option<f64>,

    #[serde(default)]
    pub cut_off_area: Option<String>,

    #[serde(default)]
    pub percentile_rank: Option<f64>,

    #[serde(default)]
    pub t_score: Option<f64>,
}

impl ScaleResult {
    #[must_use]
    pub fn with_value(value: f64) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_band(value: f64, band: impl Into<String>) -> Self {
        Self {
            value: Some(value),
            cut_off_area: Some(band.into()),
            ..Self::default()
        }
    }
}

/// A scale result that is ready to inject: the computed value plus the
/// optional qualitative band.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleReading {
    pub value: f64,
    pub band: Option<String>,
}

/// Computed results keyed by scale identifier.
///
/// Insertion order is preserved so batch resolution stays deterministic for
/// identical inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultScales(IndexMap<String, ScaleResult>);

impl ResultScales {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, identifier: impl Into<String>, result: ScaleResult) {
        self.0.insert(identifier.into(), result);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up a scale record: exact key first, then the lower-cased key.
    #[must_use]
    pub fn lookup(&self, identifier: &str) -> Option<&ScaleResult> {
        self.0
            .get(identifier)
            .or_else(|| self.0.get(identifier.to_lowercase().as_str()))
    }

    /// Looks up a scale and returns its injectable reading.
    ///
    /// `None` covers both "identifier unknown" and "record without a computed
    /// value"; the two cases are policy-equivalent for the strategies.
    #[must_use]
    pub fn lookup_value(&self, identifier: &str) -> Option<ScaleReading> {
        let result = self.lookup(identifier)?;
        Some(ScaleReading {
            value: result.value?,
            band: result.cut_off_area.clone(),
        })
    }

    /// True when any scale carries a cut-off band worth showing.
    #[must_use]
    pub fn has_any_cut_off(&self) -> bool {
        self.0
            .values()
            .any(|scale| scale.cut_off_area.as_deref().is_some_and(is_meaningful))
    }

    #[must_use]
    pub fn has_any_percentile_rank(&self) -> bool {
        self.0.values().any(|scale| scale.percentile_rank.is_some())
    }

    #[must_use]
    pub fn has_any_t_score(&self) -> bool {
        self.0.values().any(|scale| scale.t_score.is_some())
    }
}

impl<S: Into<String>> FromIterator<(S, ScaleResult)> for ResultScales {
    fn from_iter<T: IntoIterator<Item = (S, ScaleResult)>>(entries: T) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(identifier, result)| (identifier.into(), result))
                .collect(),
        )
    }
}

// Upstream exports use literal "null" / "n.a." placeholders for absent bands.
fn is_meaningful(text: &str) -> bool {
    !matches!(text.trim(), "" | "null" | "n.a.")
}
