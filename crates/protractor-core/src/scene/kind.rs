//! Angle classification and readout text.

use crate::shapes::DEGREES;
use serde::{Deserialize, Serialize};

/// Kind of an angle by its size in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleKind {
    /// Exactly 0°.
    Zero,
    /// Between 0° and 90°.
    Acute,
    /// Exactly 90°.
    Right,
    /// Between 90° and 180°.
    Obtuse,
    /// Exactly 180°.
    Straight,
    /// Between 180° and 360°.
    Reflex,
    /// Exactly 360°.
    Full,
    /// Negative, above a full turn, or NaN.
    Undetermined,
}

impl AngleKind {
    /// Classify an angle given in degrees. Boundaries are exact comparisons.
    pub fn classify(degrees: f64) -> Self {
        if degrees > 0.0 && degrees < 90.0 {
            AngleKind::Acute
        } else if degrees == 90.0 {
            AngleKind::Right
        } else if degrees > 90.0 && degrees < 180.0 {
            AngleKind::Obtuse
        } else if degrees == 180.0 {
            AngleKind::Straight
        } else if degrees > 180.0 && degrees < 360.0 {
            AngleKind::Reflex
        } else if degrees == 360.0 {
            AngleKind::Full
        } else if degrees == 0.0 {
            AngleKind::Zero
        } else {
            AngleKind::Undetermined
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AngleKind::Zero => "zero",
            AngleKind::Acute => "acute",
            AngleKind::Right => "right",
            AngleKind::Obtuse => "obtuse",
            AngleKind::Straight => "straight",
            AngleKind::Reflex => "reflex",
            AngleKind::Full => "full",
            AngleKind::Undetermined => "undetermined",
        }
    }
}

/// Whole degrees shown for an angle, truncated toward zero.
///
/// A nudge absorbs the rounding of a degrees → radians → degrees round trip,
/// so a sweep that ends on 163° reads 163 rather than 162.
pub fn whole_degrees(radians: f64) -> i64 {
    let degrees = radians / DEGREES;
    (degrees + 1e-9 * degrees.signum()).trunc() as i64
}

/// Live readout text for an angle in radians, e.g. `θ=163°`.
pub fn readout_text(radians: f64) -> String {
    format!("θ={}°", whole_degrees(radians))
}

/// Summary line for a finished angle, e.g. `a) obtuse angle (163°)`.
pub fn describe(marker: &str, degrees: f64) -> String {
    format!(
        "{marker} {} angle ({}°)",
        AngleKind::classify(degrees).name(),
        degrees.trunc() as i64
    )
}
