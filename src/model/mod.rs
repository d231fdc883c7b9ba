pub mod chart_spec;
pub mod history;
pub mod scales;

pub use chart_spec::{
    ChartKind, ChartSpec, DEFAULT_CHART_HEIGHT, ScaleIdentifierSpec, TemplateSource,
};
pub use history::{HistoryPoint, ScaleHistories};
pub use scales::{ResultScales, ScaleReading, ScaleResult};
