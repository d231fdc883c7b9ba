use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::SmallVec;

use crate::error::{ResolveError, ResolveResult};

/// Display height used when a chart spec does not declare one.
pub const DEFAULT_CHART_HEIGHT: u32 = 400;

/// Chart families this crate knows how to resolve.
///
/// Upstream configuration may carry chart types introduced after this crate
/// was built; those deserialize as [`ChartKind::Unknown`] and resolve as
/// passthrough no-ops instead of failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartKind {
    GradientBar,
    Bar,
    MultiBar,
    Line,
    MultiSingleBar,
    Unknown,
}

impl ChartKind {
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "gradient-bar" => Self::GradientBar,
            "bar" => Self::Bar,
            "multi-bar" => Self::MultiBar,
            "line" => Self::Line,
            "multi-single-bar" => Self::MultiSingleBar,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::GradientBar => "gradient-bar",
            Self::Bar => "bar",
            Self::MultiBar => "multi-bar",
            Self::Line => "line",
            Self::MultiSingleBar => "multi-single-bar",
            Self::Unknown => "unknown",
        }
    }
}

impl From<String> for ChartKind {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<ChartKind> for String {
    fn from(kind: ChartKind) -> Self {
        kind.as_tag().to_owned()
    }
}

/// Scale identifiers as they arrive on the wire: either one comma-delimited
/// string or an explicit list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScaleIdentifierSpec {
    Delimited(String),
    List(Vec<String>),
}

impl ScaleIdentifierSpec {
    /// Normalizes to an ordered identifier list.
    ///
    /// Order is significant for multi-series charts. Surrounding whitespace is
    /// stripped and empty segments are skipped.
    #[must_use]
    pub fn to_list(&self) -> SmallVec<[String; 4]> {
        match self {
            Self::Delimited(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_owned)
                .collect(),
            Self::List(ids) => ids
                .iter()
                .map(|id| id.trim())
                .filter(|id| !id.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }
}

/// A chart template, arriving either pre-parsed or as serialized text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplateSource {
    Text(String),
    Tree(Value),
}

/// One chart to resolve, as submitted by the report pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,

    #[serde(rename = "scale_identifier", alias = "scale_identifiers", default)]
    pub scale_identifiers: Option<ScaleIdentifierSpec>,

    #[serde(rename = "chart_json")]
    pub template: TemplateSource,

    #[serde(default)]
    pub height: Option<u32>,

    /// Opaque passthrough metadata for the document assembler. Never
    /// interpreted here.
    #[serde(rename = "extra_info", default)]
    pub extra_info: Option<Value>,
}

impl ChartSpec {
    #[must_use]
    pub fn new(kind: ChartKind, template: Value) -> Self {
        Self {
            kind,
            scale_identifiers: None,
            template: TemplateSource::Tree(template),
            height: None,
            extra_info: None,
        }
    }

    #[must_use]
    pub fn with_scales<I, S>(mut self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scale_identifiers = Some(ScaleIdentifierSpec::List(
            identifiers.into_iter().map(Into::into).collect(),
        ));
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_extra_info(mut self, extra_info: Value) -> Self {
        self.extra_info = Some(extra_info);
        self
    }

    /// Ordered scale identifiers feeding this chart; empty when none declared.
    #[must_use]
    pub fn scale_identifiers(&self) -> SmallVec<[String; 4]> {
        self.scale_identifiers
            .as_ref()
            .map_or_else(SmallVec::new, ScaleIdentifierSpec::to_list)
    }

    /// Display height in device-independent units.
    #[must_use]
    pub fn display_height(&self) -> u32 {
        self.height.unwrap_or(DEFAULT_CHART_HEIGHT)
    }

    /// Returns the template as a structured tree, parsing serialized text
    /// when needed.
    ///
    /// This is the single hard per-chart failure: text that is not valid json
    /// cannot be resolved at all.
    pub fn normalized_template(&self) -> ResolveResult<Value> {
        match &self.template {
            TemplateSource::Text(raw) => serde_json::from_str(raw)
                .map_err(|err| ResolveError::TemplateParse(err.to_string())),
            TemplateSource::Tree(tree) => Ok(tree.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartKind, ChartSpec};
    use serde_json::json;

    #[test]
    fn kind_tags_round_trip() {
        for tag in ["gradient-bar", "bar", "multi-bar", "line", "multi-single-bar"] {
            assert_eq!(ChartKind::from_tag(tag).as_tag(), tag);
        }
    }

    #[test]
    fn unknown_kind_is_tolerated() {
        assert_eq!(ChartKind::from_tag("sankey"), ChartKind::Unknown);
    }

    #[test]
    fn delimited_identifiers_split_in_order() {
        let spec: ChartSpec = serde_json::from_value(json!({
            "type": "multi-bar",
            "scale_identifier": "GAD, PHQ ,BDI",
            "chart_json": {}
        }))
        .expect("valid spec");

        let ids = spec.scale_identifiers();
        let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
        assert_eq!(ids, ["GAD", "PHQ", "BDI"]);
    }

    #[test]
    fn serialized_template_text_is_parsed() {
        let spec: ChartSpec = serde_json::from_value(json!({
            "type": "bar",
            "chart_json": "{\"series\":[]}"
        }))
        .expect("valid spec");

        let template = spec.normalized_template().expect("parseable template");
        assert_eq!(template, json!({"series": []}));
    }

    #[test]
    fn broken_template_text_is_a_hard_error() {
        let spec: ChartSpec = serde_json::from_value(json!({
            "type": "bar",
            "chart_json": "{not json"
        }))
        .expect("valid spec");

        assert!(spec.normalized_template().is_err());
    }
}
