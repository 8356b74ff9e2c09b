//! Core value types shared by size selection and transform computation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::rotation::Rotation;

/// Error types for preview geometry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A caller-supplied argument violates the operation's contract
    /// (empty candidate list, malformed candidate, non-right-angle rotation).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A size with a zero dimension, or a matrix that cannot be inverted.
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),
}

/// Result alias for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Pixel dimensions of a capture frame or a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if either dimension is zero.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width divided by height.
    #[inline]
    pub fn aspect_ratio(self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Total pixel count.
    #[inline]
    pub fn area(self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Swap width and height.
    #[inline]
    pub fn transposed(self) -> Self {
        Self::new(self.height, self.width)
    }

    /// Dimensions after rotating by `rotation`.
    ///
    /// Quarter turns (90° and 270°) swap width and height; 0° and 180° keep them.
    #[inline]
    pub fn rotated(self, rotation: Rotation) -> Self {
        if rotation.swaps_dimensions() {
            self.transposed()
        } else {
            self
        }
    }

    /// Center point in pixel coordinates (origin at top-left).
    #[inline]
    pub fn center(self) -> Point {
        Point::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    /// Fail with [`GeometryError::DegenerateGeometry`] if either dimension is zero.
    ///
    /// `what` names the size in the error message (e.g. "viewport").
    pub fn ensure_non_degenerate(self, what: &str) -> Result<Self> {
        if self.is_degenerate() {
            return Err(GeometryError::DegenerateGeometry(format!(
                "{} {} has a zero dimension",
                what, self
            )));
        }
        Ok(self)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

/// A 2-D point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// How a capture frame is mapped onto a viewport of a possibly different
/// aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScalePolicy {
    /// Ignore aspect ratio and fill the viewport exactly.
    StretchFill,
    /// No scaling; show the frame at its native resolution, centered.
    NativeSize,
    /// Preserve aspect ratio and cover the whole viewport (may crop).
    #[default]
    CropFill,
    /// Preserve aspect ratio and fit entirely inside the viewport (may letterbox).
    FitInside,
}

impl ScalePolicy {
    /// All policies, in declaration order.
    pub const ALL: [ScalePolicy; 4] = [
        ScalePolicy::StretchFill,
        ScalePolicy::NativeSize,
        ScalePolicy::CropFill,
        ScalePolicy::FitInside,
    ];

    /// Per-axis scale taking rotated capture content to its on-screen size in
    /// `viewport`.
    ///
    /// `CropFill` takes the larger axis ratio so the content covers the viewport;
    /// `FitInside` takes the smaller so it stays contained.
    pub fn display_scale(self, rotated: Size, viewport: Size) -> (f64, f64) {
        let scale_w = viewport.width as f64 / rotated.width as f64;
        let scale_h = viewport.height as f64 / rotated.height as f64;
        match self {
            ScalePolicy::StretchFill => (scale_w, scale_h),
            ScalePolicy::NativeSize => (1.0, 1.0),
            ScalePolicy::CropFill => {
                let common = scale_w.max(scale_h);
                (common, common)
            }
            ScalePolicy::FitInside => {
                let common = scale_w.min(scale_h);
                (common, common)
            }
        }
    }
}
