use serde::{Deserialize, Serialize};

use crate::error::{ResolveError, ResolveResult};

/// Per-output-target styling for injected labels.
///
/// One canonical strategy set serves every rendering backend; the caller
/// supplies the profile matching its target (print, preview, ...). The
/// defaults mirror the report service's print output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleProfile {
    pub label_font_size: u32,
    pub label_color: String,
    pub label_font_family: String,
    /// Horizontal distance between a marker and its label, in pixels.
    pub label_offset_px: f64,
}

impl Default for StyleProfile {
    fn default() -> Self {
        Self {
            label_font_size: 10,
            label_color: "#333".to_owned(),
            label_font_family: "Arial".to_owned(),
            label_offset_px: 15.0,
        }
    }
}

impl StyleProfile {
    pub fn validate(&self) -> ResolveResult<()> {
        if self.label_font_size == 0 {
            return Err(ResolveError::InvalidStyle(
                "label font size must be > 0".to_owned(),
            ));
        }

        if !self.label_offset_px.is_finite() || self.label_offset_px < 0.0 {
            return Err(ResolveError::InvalidStyle(
                "label offset must be finite and >= 0".to_owned(),
            ));
        }

        if self.label_color.trim().is_empty() || self.label_font_family.trim().is_empty() {
            return Err(ResolveError::InvalidStyle(
                "label color and font family must be non-empty".to_owned(),
            ));
        }

        Ok(())
    }
}
