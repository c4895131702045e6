//! Cover focus point.

use serde::{Deserialize, Serialize};

/// Focus point applied to the cover item, as percentages of width and height.
///
/// Values are kept as entered; [`FocusPoint::normalized`] produces the form
/// that is submitted.
///
/// # Examples
///
/// ```
/// use atelier_core::FocusPoint;
///
/// let focus = FocusPoint::new(33.333, 120.0).normalized();
/// assert_eq!(focus.x, 33.3);
/// assert_eq!(focus.y, 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusPoint {
    /// Horizontal position, 0 (left) to 100 (right)
    pub x: f64,
    /// Vertical position, 0 (top) to 100 (bottom)
    pub y: f64,
}

impl Default for FocusPoint {
    fn default() -> Self {
        Self { x: 50.0, y: 50.0 }
    }
}

impl FocusPoint {
    /// Create a focus point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clamp both axes to [0, 100] and round to one decimal place.
    ///
    /// Non-finite input falls back to the centre.
    pub fn normalized(&self) -> Self {
        Self {
            x: normalize_axis(self.x),
            y: normalize_axis(self.y),
        }
    }
}

fn normalize_axis(value: f64) -> f64 {
    if !value.is_finite() {
        return 50.0;
    }
    (value.clamp(0.0, 100.0) * 10.0).round() / 10.0
}
