use serde::{Deserialize, Serialize};

/// Share of the axis range above which labels flip to the left of their
/// marker to stay clear of the chart's right edge.
const HIGH_END_RATIO: f64 = 0.7;

/// Which side of a marker an injected label is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelSide {
    Left,
    Right,
}

impl LabelSide {
    /// Renderer-facing position keyword.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Signed `[x, y]` pixel offset pushing the label away from its marker.
    #[must_use]
    pub fn offset(self, magnitude: f64) -> [f64; 2] {
        match self {
            Self::Left => [-magnitude, 0.0],
            Self::Right => [magnitude, 0.0],
        }
    }
}

/// Decides which side of a marker its label goes on.
///
/// Values strictly above 70% of the axis range place the label on the left;
/// everything else stays on the right. A degenerate axis range defaults to
/// the right.
#[must_use]
pub fn side_placement(value: f64, axis_min: f64, axis_max: f64) -> LabelSide {
    if axis_max == axis_min {
        return LabelSide::Right;
    }

    let relative = (value - axis_min) / (axis_max - axis_min);
    if relative > HIGH_END_RATIO {
        LabelSide::Left
    } else {
        LabelSide::Right
    }
}
