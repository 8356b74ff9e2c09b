//! WASM bindings for preview and overlay transforms.
//!
//! The returned `JsAffineTransform` is meant to be applied to a preview
//! surface whose content is already stretched to the viewport.

use crate::types::{policy_from_u8, rotation_from_degrees, to_js_error, JsAffineTransform};
use viewfinder_core::{GeometryError, Point, Size};
use wasm_bindgen::prelude::*;

/// Compute the preview surface transform.
///
/// # Arguments
///
/// * `rotation` - Effective rotation in degrees (0, 90, 180, 270)
/// * `capture_width` / `capture_height` - Selected capture size
/// * `viewport_width` / `viewport_height` - Preview surface size
/// * `scale_policy` - 0 = stretch, 1 = native size, 2 = crop fill, 3 = fit inside
/// * `mirror` - Flip the preview horizontally
///
/// # Errors
///
/// Returns an error if either size has a zero dimension or the rotation is
/// not a multiple of 90.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const m = compute_preview_transform(90, 1920, 1080, 1080, 1920, 2, false);
/// const [a, b, c, d, e, f] = m.values();
/// ctx.setTransform(a, d, b, e, c, f);
/// m.free();
/// ```
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn compute_preview_transform(
    rotation: i32,
    capture_width: u32,
    capture_height: u32,
    viewport_width: u32,
    viewport_height: u32,
    scale_policy: u8,
    mirror: bool,
) -> Result<JsAffineTransform, JsValue> {
    preview_transform(
        viewfinder_core::compute_preview_transform,
        rotation,
        Size::new(capture_width, capture_height),
        Size::new(viewport_width, viewport_height),
        scale_policy,
        mirror,
    )
    .map_err(to_js_error)
}

/// Compute the same transform as [`compute_preview_transform`], derived from
/// the inverse of the default stretch.
///
/// Useful as a cross-check; both results agree to within rounding.
///
/// # Errors
///
/// Same as [`compute_preview_transform`].
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn compute_preview_transform_via_inverse(
    rotation: i32,
    capture_width: u32,
    capture_height: u32,
    viewport_width: u32,
    viewport_height: u32,
    scale_policy: u8,
    mirror: bool,
) -> Result<JsAffineTransform, JsValue> {
    preview_transform(
        viewfinder_core::compute_preview_transform_via_inverse,
        rotation,
        Size::new(capture_width, capture_height),
        Size::new(viewport_width, viewport_height),
        scale_policy,
        mirror,
    )
    .map_err(to_js_error)
}

type PreviewFn = fn(
    viewfinder_core::Rotation,
    Size,
    Size,
    viewfinder_core::ScalePolicy,
    bool,
) -> viewfinder_core::Result<viewfinder_core::AffineTransform>;

fn preview_transform(
    compute: PreviewFn,
    rotation: i32,
    capture_size: Size,
    viewport: Size,
    scale_policy: u8,
    mirror: bool,
) -> Result<JsAffineTransform, GeometryError> {
    let rotation = rotation_from_degrees(rotation)?;
    let policy = policy_from_u8(scale_policy);
    compute(rotation, capture_size, viewport, policy, mirror).map(JsAffineTransform::from_core)
}

/// Map a raw capture-buffer point (e.g. a detected face) into the preview
/// surface's stretch space.
///
/// # Returns
///
/// `[x, y]` of the mapped point.
///
/// # Errors
///
/// Returns an error if either size has a zero dimension or the sensor
/// orientation is not a multiple of 90.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn map_overlay_point(
    x: f64,
    y: f64,
    sensor_orientation: i32,
    is_front_facing: bool,
    capture_width: u32,
    capture_height: u32,
    viewport_width: u32,
    viewport_height: u32,
) -> Result<Vec<f64>, JsValue> {
    overlay_point(
        Point::new(x, y),
        sensor_orientation,
        is_front_facing,
        Size::new(capture_width, capture_height),
        Size::new(viewport_width, viewport_height),
    )
    .map_err(to_js_error)
}

fn overlay_point(
    point: Point,
    sensor_orientation: i32,
    is_front_facing: bool,
    capture_size: Size,
    viewport: Size,
) -> Result<Vec<f64>, GeometryError> {
    let sensor = rotation_from_degrees(sensor_orientation)?;
    let mapped =
        viewfinder_core::map_overlay_point(point, sensor, is_front_facing, capture_size, viewport)?;
    Ok(vec![mapped.x, mapped.y])
}
