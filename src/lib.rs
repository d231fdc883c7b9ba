//! chart-resolve: resolves declarative chart templates against computed
//! test results.
//!
//! The crate takes a generic chart specification plus a set of computed
//! scale values (and optionally their history), locates the mutable
//! series inside the nested configuration tree, and injects values,
//! labels, and layout hints. Rendering the resolved configuration is an
//! external collaborator's job.

pub mod error;
pub mod model;
pub mod resolve;
pub mod telemetry;

pub use error::{ResolveError, ResolveResult};
pub use model::{
    ChartKind, ChartSpec, DEFAULT_CHART_HEIGHT, HistoryPoint, ResultScales, ScaleHistories,
    ScaleResult,
};
pub use resolve::{
    BatchOutcome, ChartFailure, ResolvedChart, StyleProfile, resolve_batch, resolve_chart,
};
