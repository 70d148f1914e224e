use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in data coordinates using a top-left-origin
/// convention.
///
/// `top` holds the data value of the visually-higher edge, so `height()` is
/// stored signed (`bottom - top`) even though data Y usually grows upward.
/// Width and height may be negative transiently while a drag is in flight;
/// extents handed to callbacks are always normalized first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extents {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Extents {
    #[must_use]
    pub const fn from_corners(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    /// Signed height; negative when `top` is the larger data value.
    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    /// Returns a copy with `left <= right` and `top` holding the larger of
    /// the two Y values.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            left: self.left.min(self.right),
            right: self.left.max(self.right),
            top: self.top.max(self.bottom),
            bottom: self.top.min(self.bottom),
        }
    }
}
