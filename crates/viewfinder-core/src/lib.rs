//! Viewfinder Core - Camera preview geometry
//!
//! This crate provides the pure geometry behind a camera preview: choosing a
//! capture resolution for a viewport and computing the affine transform that
//! makes a default-stretched preview surface show the sensor image upright,
//! with the right aspect ratio, crop or letterbox, and optional mirroring.
//!
//! Every function is a pure computation over sizes, rotations and matrices.
//! Camera sessions, permissions and rendering stay with the caller, which
//! passes plain numbers in and applies the returned size and matrix.

pub mod plan;
pub mod rotation;
pub mod select;
pub mod transform;
pub mod types;

pub use plan::{plan_preview, CameraDescriptor, PreviewPlan};
pub use rotation::{effective_rotation, Rotation};
pub use select::select_optimal_size;
pub use transform::{
    compute_preview_transform, compute_preview_transform_via_inverse, map_overlay_point,
    overlay_matrix, AffineTransform,
};
pub use types::{GeometryError, Point, Result, ScalePolicy, Size};

/// Preview configuration chosen by the host application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreviewConfig {
    /// How the capture frame maps onto the viewport
    pub scale_policy: ScalePolicy,
    /// Flip the preview horizontally. Front cameras are already mirrored by
    /// the sensor; setting this on one un-mirrors it.
    pub mirror: bool,
    /// Rotation the capture platform already applies to the stream before it
    /// reaches the surface, removed from the transform's rotation
    pub platform_pre_rotation: Rotation,
}

impl PreviewConfig {
    /// Create a new PreviewConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
