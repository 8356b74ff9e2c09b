//! End-to-end preview planning.
//!
//! Runs the full sequence a capture pipeline performs when a camera opens or
//! the viewport changes:
//!
//! 1. Effective rotation from facing, sensor orientation and display rotation
//! 2. Capture size selection against the viewport
//! 3. Preview transform for the selected size
//!
//! The plan is computed once per device or viewport change, not per frame.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rotation::{effective_rotation, Rotation};
use crate::select::select_optimal_size;
use crate::transform::{compute_preview_transform, AffineTransform};
use crate::types::{Result, Size};
use crate::PreviewConfig;

/// Static properties of a camera device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraDescriptor {
    /// True for a front-facing (selfie) camera.
    pub is_front_facing: bool,
    /// Clockwise angle the sensor's frames must be rotated to match the
    /// device's natural orientation.
    pub sensor_orientation: Rotation,
}

impl CameraDescriptor {
    pub fn new(is_front_facing: bool, sensor_orientation: Rotation) -> Self {
        Self {
            is_front_facing,
            sensor_orientation,
        }
    }

    /// A back-facing camera.
    pub fn back(sensor_orientation: Rotation) -> Self {
        Self::new(false, sensor_orientation)
    }

    /// A front-facing camera.
    pub fn front(sensor_orientation: Rotation) -> Self {
        Self::new(true, sensor_orientation)
    }
}

/// Everything a capture pipeline needs to configure a preview.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewPlan {
    /// Effective rotation of the capture frame.
    pub rotation: Rotation,
    /// Rotation the transform applies, after removing the platform
    /// pre-rotation.
    pub transform_rotation: Rotation,
    /// Size to configure on the capture device.
    pub capture_size: Size,
    /// Matrix for the preview surface.
    pub transform: AffineTransform,
}

/// Plan a preview for `camera` on a `viewport`.
///
/// # Arguments
///
/// * `camera` - Facing and sensor orientation of the camera
/// * `display_rotation` - Current display rotation
/// * `candidates` - Capture sizes the device supports
/// * `viewport` - Size of the preview surface
/// * `config` - Scale policy, mirroring and platform pre-rotation
///
/// # Errors
///
/// Propagates [`select_optimal_size`] and [`compute_preview_transform`]
/// errors: an empty or malformed candidate list, or a zero-area viewport.
pub fn plan_preview(
    camera: &CameraDescriptor,
    display_rotation: Rotation,
    candidates: &[Size],
    viewport: Size,
    config: &PreviewConfig,
) -> Result<PreviewPlan> {
    let rotation = effective_rotation(
        camera.is_front_facing,
        camera.sensor_orientation,
        display_rotation,
    );
    debug!(
        front = camera.is_front_facing,
        sensor = camera.sensor_orientation.degrees(),
        display = display_rotation.degrees(),
        rotation = rotation.degrees(),
        "effective rotation"
    );

    let capture_size = select_optimal_size(candidates, rotation, viewport)?;

    let transform_rotation = rotation - config.platform_pre_rotation;
    let transform = compute_preview_transform(
        transform_rotation,
        capture_size,
        viewport,
        config.scale_policy,
        config.mirror,
    )?;

    Ok(PreviewPlan {
        rotation,
        transform_rotation,
        capture_size,
        transform,
    })
}
