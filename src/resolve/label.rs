//! Annotation text for injected values.
//!
//! Three formats exist across the chart families: the `Wert:`-prefixed
//! indicator annotation on gradient bars, the `<band> (<value>)` marker
//! annotation on stacked bars, and the one-decimal point annotation on
//! time series.

/// Renders a value the way report templates print numbers: integral values
/// without a trailing `.0`, everything else in its shortest form.
#[must_use]
pub fn format_value(value: f64) -> String {
    value.to_string()
}

/// Indicator-line annotation, e.g. `Wert: 17 (auffällig)`.
#[must_use]
pub fn indicator_label(value: f64, band: Option<&str>) -> String {
    match band {
        Some(band) => format!("Wert: {} ({band})", format_value(value)),
        None => format!("Wert: {}", format_value(value)),
    }
}

/// Marker annotation `<band> (<value>)`; the bare value when no band is
/// attached.
#[must_use]
pub fn band_label(value: f64, band: Option<&str>) -> String {
    match band {
        Some(band) => format!("{band} ({})", format_value(value)),
        None => format_value(value),
    }
}

/// Time-series point annotation, value fixed to one decimal place, e.g.
/// `4.5 (unauffällig)`.
#[must_use]
pub fn point_label(value: f64, band: Option<&str>) -> String {
    match band {
        Some(band) => format!("{value:.1} ({band})"),
        None => format!("{value:.1}"),
    }
}
