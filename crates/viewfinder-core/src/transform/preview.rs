//! Preview surface transforms.
//!
//! A preview surface stretches whatever frame it receives to exactly fill its
//! viewport, ignoring rotation and aspect ratio. The matrices here are applied
//! on top of that default stretch, so every scale factor is relative to the
//! already-stretched content rather than to raw capture pixels.
//!
//! Two derivations of the same transform are provided:
//!
//! - [`compute_preview_transform`] compensates the stretch directly: rotate
//!   about the viewport center, then scale about the same center.
//! - [`compute_preview_transform_via_inverse`] builds the ideal
//!   frame-to-display matrix from raw capture coordinates and cancels the
//!   default stretch with its inverse:
//!   `preview = frame_to_display * stretch⁻¹`.
//!
//! Both agree to floating-point tolerance.

use tracing::trace;

use super::matrix::AffineTransform;
use crate::rotation::Rotation;
use crate::types::{Result, ScalePolicy, Size};

/// Scale factors applied after rotation by [`compute_preview_transform`],
/// expressed in the stretched coordinate space.
///
/// `rotated` is the capture size after rotation and `viewport_rotated` is the
/// viewport as seen from the rotated content (the stretch-compensation
/// denominator).
fn compensated_scale(
    policy: ScalePolicy,
    rotated: Size,
    viewport: Size,
    viewport_rotated: Size,
) -> (f64, f64) {
    let (sx, sy) = policy.display_scale(rotated, viewport);
    (
        sx * rotated.width as f64 / viewport_rotated.width as f64,
        sy * rotated.height as f64 / viewport_rotated.height as f64,
    )
}

fn validate(capture_size: Size, viewport: Size) -> Result<()> {
    capture_size.ensure_non_degenerate("capture size")?;
    viewport.ensure_non_degenerate("viewport")?;
    Ok(())
}

/// Compute the transform to apply to a default-stretched preview surface.
///
/// The capture frame is rotated clockwise by `effective_rotation` about the
/// viewport center, then scaled about the same center so the result honors
/// `policy`. With `mirror` set the horizontal scale is negated, flipping the
/// content about the vertical center line.
///
/// Rotation must come first: the center-relative scale acts on the
/// post-rotation bounding box.
///
/// # Arguments
///
/// * `effective_rotation` - Clockwise rotation the frame needs (see
///   [`crate::rotation::effective_rotation`]); callers fold in any platform
///   pre-rotation before calling
/// * `capture_size` - Raw capture size, before rotation
/// * `viewport` - Size of the preview surface
/// * `policy` - How the frame maps onto the viewport
/// * `mirror` - Flip horizontally
///
/// # Errors
///
/// [`crate::GeometryError::DegenerateGeometry`] if `capture_size` or `viewport`
/// has a zero dimension.
///
/// # Example
///
/// ```
/// use viewfinder_core::{compute_preview_transform, Rotation, ScalePolicy, Size};
///
/// // The surface squashes a landscape 1920x1080 frame into a portrait
/// // 1080x1920 view; after the quarter turn the scale undoes the squash.
/// let m = compute_preview_transform(
///     Rotation::Deg90,
///     Size::new(1920, 1080),
///     Size::new(1080, 1920),
///     ScalePolicy::CropFill,
///     false,
/// )
/// .unwrap();
/// let (sx, sy) = m.axis_scales();
/// assert!((sx - 1080.0 / 1920.0).abs() < 1e-12);
/// assert!((sy - 1920.0 / 1080.0).abs() < 1e-12);
/// ```
pub fn compute_preview_transform(
    effective_rotation: Rotation,
    capture_size: Size,
    viewport: Size,
    policy: ScalePolicy,
    mirror: bool,
) -> Result<AffineTransform> {
    validate(capture_size, viewport)?;

    let rotated = capture_size.rotated(effective_rotation);
    let viewport_rotated = viewport.rotated(effective_rotation);
    let (scale_x, scale_y) = compensated_scale(policy, rotated, viewport, viewport_rotated);
    let scale_x = if mirror { -scale_x } else { scale_x };

    let center = viewport.center();
    let matrix = AffineTransform::identity()
        .post_rotate(effective_rotation, center.x, center.y)
        .post_scale(scale_x, scale_y, center.x, center.y);

    trace!(
        rotation = effective_rotation.degrees(),
        capture = %capture_size,
        viewport = %viewport,
        ?policy,
        mirror,
        scale_x,
        scale_y,
        "computed preview transform"
    );

    Ok(matrix)
}

/// The surface's built-in stretch: raw capture coordinates scaled straight to
/// the viewport, ignoring rotation.
///
/// # Errors
///
/// [`crate::GeometryError::DegenerateGeometry`] on a zero dimension.
pub fn default_stretch_matrix(capture_size: Size, viewport: Size) -> Result<AffineTransform> {
    validate(capture_size, viewport)?;

    Ok(AffineTransform::scale(
        viewport.width as f64 / capture_size.width as f64,
        viewport.height as f64 / capture_size.height as f64,
    ))
}

/// Map raw capture-frame coordinates to their final on-screen position.
///
/// This is the ideal display matrix: it moves the frame center to the origin,
/// rotates clockwise by `effective_rotation`, optionally mirrors, scales per
/// `policy` and moves the result to the viewport center. Points detected in a
/// raw frame mapped through it land where the preview (built with the same
/// arguments) shows them.
///
/// # Errors
///
/// [`crate::GeometryError::DegenerateGeometry`] on a zero dimension.
pub fn frame_to_display_matrix(
    effective_rotation: Rotation,
    capture_size: Size,
    viewport: Size,
    policy: ScalePolicy,
    mirror: bool,
) -> Result<AffineTransform> {
    validate(capture_size, viewport)?;

    let rotated = capture_size.rotated(effective_rotation);
    let (scale_x, scale_y) = policy.display_scale(rotated, viewport);
    let frame_center = capture_size.center();
    let viewport_center = viewport.center();

    let mut matrix = AffineTransform::translation(-frame_center.x, -frame_center.y)
        .post_rotate(effective_rotation, 0.0, 0.0);
    if mirror {
        matrix = matrix.post_scale(-1.0, 1.0, 0.0, 0.0);
    }

    Ok(matrix
        .post_scale(scale_x, scale_y, 0.0, 0.0)
        .post_translate(viewport_center.x, viewport_center.y))
}

/// Compute the preview transform as `frame_to_display * stretch⁻¹`.
///
/// Produces the same matrix as [`compute_preview_transform`] through an
/// independent derivation; useful as a cross-check and for pipelines that
/// already hold the display matrix.
///
/// # Errors
///
/// [`crate::GeometryError::DegenerateGeometry`] on a zero dimension.
pub fn compute_preview_transform_via_inverse(
    effective_rotation: Rotation,
    capture_size: Size,
    viewport: Size,
    policy: ScalePolicy,
    mirror: bool,
) -> Result<AffineTransform> {
    let stretch = default_stretch_matrix(capture_size, viewport)?;
    let display =
        frame_to_display_matrix(effective_rotation, capture_size, viewport, policy, mirror)?;

    Ok(display * stretch.invert()?)
}
