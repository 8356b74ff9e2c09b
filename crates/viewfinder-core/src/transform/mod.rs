//! Preview and overlay transforms.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, y grows downward
//! - Rotation angles are clockwise right angles (see [`crate::rotation`])
//! - Matrices compose with `post_*` semantics: earlier calls apply first
//!
//! # Transforms
//!
//! - [`compute_preview_transform`] - matrix for a default-stretched preview surface
//! - [`compute_preview_transform_via_inverse`] - same matrix, derived as
//!   `frame_to_display * stretch⁻¹`
//! - [`frame_to_display_matrix`] - raw frame coordinates to final screen position
//! - [`overlay_matrix`] / [`map_overlay_point`] - detector points into the
//!   surface's unrotated stretch space

mod matrix;
mod overlay;
mod preview;

pub use matrix::AffineTransform;
pub use overlay::{map_overlay_point, overlay_matrix};
pub use preview::{
    compute_preview_transform, compute_preview_transform_via_inverse, default_stretch_matrix,
    frame_to_display_matrix,
};
