//! Chart resolution: strategies that inject computed results into
//! declarative chart templates.
//!
//! The dispatcher routes each chart spec to the strategy matching its
//! declared kind. Strategies mutate only the substructures their chart
//! family owns and degrade to no-ops when data or structure is missing;
//! the single hard per-chart failure is a template that cannot be parsed.

pub mod history;
pub mod label;
pub mod placement;
pub mod style;

mod gradient_bar;
mod multi_bar;
mod multi_single_bar;
mod stacked_bar;
mod template;
mod time_line;

pub use history::{HISTORY_DATE_FORMAT, HistorySample, normalize_history, parse_report_date};
pub use placement::{LabelSide, side_placement};
pub use style::StyleProfile;

#[cfg(feature = "parallel-batch")]
use rayon::prelude::*;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ResolveError, ResolveResult};
use crate::model::{ChartKind, ChartSpec, ResultScales, ScaleHistories, TemplateSource};

/// One resolved chart, ready for the external rendering engine.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ResolvedChart {
    /// The template tree with this chart family's mutations applied.
    pub config: Value,
    pub height: u32,
    pub extra_info: Option<Value>,
}

/// Failure descriptor for one chart in a batch. Carries the original,
/// unmodified template so callers can substitute a placeholder.
#[derive(Debug)]
pub struct ChartFailure {
    pub template: TemplateSource,
    pub error: ResolveError,
    pub extra_info: Option<Value>,
}

/// Per-chart outcome of [`resolve_batch`], in input order.
#[derive(Debug)]
pub enum BatchOutcome {
    Resolved(ResolvedChart),
    Failed(ChartFailure),
}

impl BatchOutcome {
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    #[must_use]
    pub fn resolved(&self) -> Option<&ResolvedChart> {
        match self {
            Self::Resolved(chart) => Some(chart),
            Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&ChartFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            Self::Resolved(_) => None,
        }
    }
}

/// Resolves one chart spec against the computed results and history.
///
/// Resolution is a pure function of its inputs: identical inputs produce an
/// identical configuration tree. An unrecognized chart kind passes the
/// normalized template through untouched.
pub fn resolve_chart(
    spec: &ChartSpec,
    scales: &ResultScales,
    histories: &ScaleHistories,
    style: &StyleProfile,
) -> ResolveResult<ResolvedChart> {
    style.validate()?;

    let mut config = spec.normalized_template()?;
    let identifiers = spec.scale_identifiers();
    let first = identifiers.first().map(String::as_str);
    debug!(
        kind = spec.kind.as_tag(),
        scales = identifiers.len(),
        "resolve chart"
    );

    match spec.kind {
        ChartKind::GradientBar => gradient_bar::apply(&mut config, scales, first),
        ChartKind::Bar => stacked_bar::apply(&mut config, scales, first),
        ChartKind::MultiBar => multi_bar::apply(&mut config, scales, &identifiers, style),
        ChartKind::MultiSingleBar => multi_single_bar::apply(&mut config, scales, &identifiers),
        ChartKind::Line => {
            let points = first.map_or(&[][..], |identifier| histories.for_scale(identifier));
            time_line::apply(&mut config, scales, first, points, style);
        }
        ChartKind::Unknown => {
            warn!("unknown chart kind, passing template through");
        }
    }

    Ok(ResolvedChart {
        config,
        height: spec.display_height(),
        extra_info: spec.extra_info.clone(),
    })
}

/// Resolves a batch of chart specs, one outcome per spec in input order.
///
/// A failing chart never aborts its siblings: it degrades to a
/// [`BatchOutcome::Failed`] carrying the original template payload. With the
/// `parallel-batch` feature the specs resolve on the rayon pool; output
/// order and content are identical to the sequential path.
#[must_use]
pub fn resolve_batch(
    specs: &[ChartSpec],
    scales: &ResultScales,
    histories: &ScaleHistories,
    style: &StyleProfile,
) -> Vec<BatchOutcome> {
    #[cfg(feature = "parallel-batch")]
    {
        specs
            .par_iter()
            .map(|spec| resolve_one(spec, scales, histories, style))
            .collect()
    }

    #[cfg(not(feature = "parallel-batch"))]
    {
        specs
            .iter()
            .map(|spec| resolve_one(spec, scales, histories, style))
            .collect()
    }
}

fn resolve_one(
    spec: &ChartSpec,
    scales: &ResultScales,
    histories: &ScaleHistories,
    style: &StyleProfile,
) -> BatchOutcome {
    match resolve_chart(spec, scales, histories, style) {
        Ok(resolved) => BatchOutcome::Resolved(resolved),
        Err(error) => {
            warn!(
                kind = spec.kind.as_tag(),
                error = %error,
                "chart failed to resolve, passing original template through"
            );
            BatchOutcome::Failed(ChartFailure {
                template: spec.template.clone(),
                error,
                extra_info: spec.extra_info.clone(),
            })
        }
    }
}
