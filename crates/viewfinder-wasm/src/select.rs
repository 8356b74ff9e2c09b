//! WASM bindings for capture size selection and rotation.

use crate::types::{rotation_from_degrees, to_js_error, JsSize};
use viewfinder_core::{GeometryError, Rotation, Size};
use wasm_bindgen::prelude::*;

/// Deserialize a JS array of `{width, height}` objects.
pub(crate) fn parse_sizes(value: JsValue) -> Result<Vec<Size>, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid size list: {}", e)))
}

/// Compute the clockwise rotation between the sensor and the display.
///
/// # Arguments
///
/// * `is_front_facing` - True for a selfie camera
/// * `sensor_orientation` - Sensor orientation in degrees (0, 90, 180, 270)
/// * `display_rotation` - Display rotation in degrees (0, 90, 180, 270)
///
/// # Returns
///
/// The effective rotation in degrees, always one of 0, 90, 180, 270.
///
/// # Errors
///
/// Returns an error if either angle is not a multiple of 90.
#[wasm_bindgen]
pub fn effective_rotation(
    is_front_facing: bool,
    sensor_orientation: i32,
    display_rotation: i32,
) -> Result<i32, JsValue> {
    effective_rotation_degrees(is_front_facing, sensor_orientation, display_rotation)
        .map_err(to_js_error)
}

fn effective_rotation_degrees(
    is_front_facing: bool,
    sensor_orientation: i32,
    display_rotation: i32,
) -> Result<i32, GeometryError> {
    let sensor = rotation_from_degrees(sensor_orientation)?;
    let display = rotation_from_degrees(display_rotation)?;
    Ok(viewfinder_core::effective_rotation(is_front_facing, sensor, display).degrees())
}

/// Pick the capture size that best fits a viewport.
///
/// # Arguments
///
/// * `candidates` - Array of `{width: number, height: number}` objects
/// * `rotation` - Effective rotation in degrees
/// * `viewport_width` / `viewport_height` - Preview surface size in pixels
///
/// # Errors
///
/// Returns an error if the array cannot be parsed, is empty, contains a
/// zero-sized entry, or the viewport has zero area.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const rotation = effective_rotation(false, 90, 0);
/// const size = select_optimal_size(
///   [{ width: 1920, height: 1080 }, { width: 1280, height: 720 }],
///   rotation, 1080, 1920,
/// );
/// console.log(`${size.width}x${size.height}`);
/// size.free();
/// ```
#[wasm_bindgen]
pub fn select_optimal_size(
    candidates: JsValue,
    rotation: i32,
    viewport_width: u32,
    viewport_height: u32,
) -> Result<JsSize, JsValue> {
    let candidates = parse_sizes(candidates)?;
    select_from(&candidates, rotation, viewport_width, viewport_height).map_err(to_js_error)
}

fn select_from(
    candidates: &[Size],
    rotation: i32,
    viewport_width: u32,
    viewport_height: u32,
) -> Result<JsSize, GeometryError> {
    let rotation: Rotation = rotation_from_degrees(rotation)?;
    let viewport = Size::new(viewport_width, viewport_height);
    viewfinder_core::select_optimal_size(candidates, rotation, viewport).map(JsSize::from)
}
