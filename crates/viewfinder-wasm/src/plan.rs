//! Preview planning WASM bindings.
//!
//! `PreviewConfig` mirrors the core configuration with JS getters and setters;
//! `plan_preview` runs rotation, size selection and transform in one call.

use crate::select::parse_sizes;
use crate::types::{
    policy_from_u8, rotation_from_degrees, to_js_error, JsAffineTransform, JsSize,
};
use viewfinder_core::{CameraDescriptor, GeometryError, ScalePolicy, Size};
use wasm_bindgen::prelude::*;

/// Preview configuration wrapper for JavaScript
#[wasm_bindgen]
pub struct PreviewConfig {
    inner: viewfinder_core::PreviewConfig,
}

#[wasm_bindgen]
impl PreviewConfig {
    /// Create a configuration with default values (crop fill, no mirror)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: viewfinder_core::PreviewConfig::new(),
        }
    }

    /// Get the scale policy as a u8 (0 stretch, 1 native, 2 crop fill, 3 fit inside)
    #[wasm_bindgen(getter)]
    pub fn scale_policy(&self) -> u8 {
        policy_to_u8(self.inner.scale_policy)
    }

    /// Set the scale policy; unknown values select crop fill
    #[wasm_bindgen(setter)]
    pub fn set_scale_policy(&mut self, value: u8) {
        self.inner.scale_policy = policy_from_u8(value);
    }

    /// Get mirror flag
    #[wasm_bindgen(getter)]
    pub fn mirror(&self) -> bool {
        self.inner.mirror
    }

    /// Set mirror flag
    #[wasm_bindgen(setter)]
    pub fn set_mirror(&mut self, value: bool) {
        self.inner.mirror = value;
    }

    /// Get the platform pre-rotation in degrees
    #[wasm_bindgen(getter)]
    pub fn platform_pre_rotation(&self) -> i32 {
        self.inner.platform_pre_rotation.degrees()
    }

    /// Set the platform pre-rotation in degrees.
    ///
    /// # Errors
    ///
    /// Returns an error if `degrees` is not a multiple of 90.
    pub fn set_platform_pre_rotation(&mut self, degrees: i32) -> Result<(), JsValue> {
        self.inner.platform_pre_rotation = rotation_from_degrees(degrees).map_err(to_js_error)?;
        Ok(())
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        self.inner.is_default()
    }

    /// Serialize to a JS object. `scalePolicy` is written by name (see
    /// [`PreviewConfig::from_json`]), not as the u8 code of the getter.
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Deserialize from a JS object such as
    /// `{ scalePolicy: "fitInside", mirror: true, platformPreRotation: 90 }`.
    /// Missing fields keep their defaults.
    ///
    /// In this object form `scalePolicy` is a name, while the `scale_policy`
    /// property and the transform functions take the u8 code:
    ///
    /// | name            | code |
    /// |-----------------|------|
    /// | `"stretchFill"` | 0    |
    /// | `"nativeSize"`  | 1    |
    /// | `"cropFill"`    | 2    |
    /// | `"fitInside"`   | 3    |
    pub fn from_json(value: JsValue) -> Result<PreviewConfig, JsValue> {
        let inner: viewfinder_core::PreviewConfig =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewConfig {
    pub(crate) fn inner(&self) -> &viewfinder_core::PreviewConfig {
        &self.inner
    }
}

fn policy_to_u8(policy: ScalePolicy) -> u8 {
    match policy {
        ScalePolicy::StretchFill => 0,
        ScalePolicy::NativeSize => 1,
        ScalePolicy::CropFill => 2,
        ScalePolicy::FitInside => 3,
    }
}

/// Result of [`plan_preview`].
#[wasm_bindgen]
pub struct JsPreviewPlan {
    inner: viewfinder_core::PreviewPlan,
}

#[wasm_bindgen]
impl JsPreviewPlan {
    /// Effective rotation in degrees
    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> i32 {
        self.inner.rotation.degrees()
    }

    /// Rotation applied by the transform, in degrees
    #[wasm_bindgen(getter)]
    pub fn transform_rotation(&self) -> i32 {
        self.inner.transform_rotation.degrees()
    }

    /// Capture size to configure on the camera
    #[wasm_bindgen(getter)]
    pub fn capture_size(&self) -> JsSize {
        self.inner.capture_size.into()
    }

    /// Preview surface transform
    #[wasm_bindgen(getter)]
    pub fn transform(&self) -> JsAffineTransform {
        JsAffineTransform::from_core(self.inner.transform)
    }

    /// Serialize the whole plan to a JS object
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Plan a camera preview in one call.
///
/// # Arguments
///
/// * `is_front_facing` - True for a selfie camera
/// * `sensor_orientation` - Sensor orientation in degrees
/// * `display_rotation` - Display rotation in degrees
/// * `candidates` - Array of `{width, height}` objects the camera supports
/// * `viewport_width` / `viewport_height` - Preview surface size
/// * `config` - Scale policy, mirror and platform pre-rotation
///
/// # Example (TypeScript)
///
/// ```typescript
/// const config = PreviewConfig.from_json({ scalePolicy: "cropFill" });
/// const plan = plan_preview(false, 90, 0, sizes, 1080, 2400, config);
/// camera.configure(plan.capture_size.width, plan.capture_size.height);
/// surface.setTransform(plan.transform.values());
/// plan.free();
/// ```
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn plan_preview(
    is_front_facing: bool,
    sensor_orientation: i32,
    display_rotation: i32,
    candidates: JsValue,
    viewport_width: u32,
    viewport_height: u32,
    config: &PreviewConfig,
) -> Result<JsPreviewPlan, JsValue> {
    let candidates = parse_sizes(candidates)?;
    plan_from(
        is_front_facing,
        sensor_orientation,
        display_rotation,
        &candidates,
        Size::new(viewport_width, viewport_height),
        config.inner(),
    )
    .map_err(to_js_error)
}

fn plan_from(
    is_front_facing: bool,
    sensor_orientation: i32,
    display_rotation: i32,
    candidates: &[Size],
    viewport: Size,
    config: &viewfinder_core::PreviewConfig,
) -> Result<JsPreviewPlan, GeometryError> {
    let camera = CameraDescriptor::new(is_front_facing, rotation_from_degrees(sensor_orientation)?);
    let display = rotation_from_degrees(display_rotation)?;
    let inner = viewfinder_core::plan_preview(&camera, display, candidates, viewport, config)?;
    Ok(JsPreviewPlan { inner })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes() -> Vec<Size> {
        vec![
            Size::new(1920, 1080),
            Size::new(1280, 720),
            Size::new(640, 480),
        ]
    }

    #[test]
    fn test_config_defaults() {
        let config = PreviewConfig::new();
        assert!(config.is_default());
        assert_eq!(config.scale_policy(), 2);
        assert!(!config.mirror());
        assert_eq!(config.platform_pre_rotation(), 0);
    }

    #[test]
    fn test_config_setters() {
        let mut config = PreviewConfig::default();
        config.set_scale_policy(3);
        config.set_mirror(true);
        config.set_platform_pre_rotation(270).unwrap();

        assert_eq!(config.scale_policy(), 3);
        assert!(config.mirror());
        assert_eq!(config.platform_pre_rotation(), 270);
        assert!(!config.is_default());

        config.set_scale_policy(42);
        assert_eq!(config.scale_policy(), 2);
    }

    #[test]
    fn test_policy_u8_mapping_is_consistent() {
        for value in 0..4u8 {
            assert_eq!(policy_to_u8(policy_from_u8(value)), value);
        }
    }

    #[test]
    fn test_plan_portrait_back_camera() {
        let config = PreviewConfig::new();
        let plan = plan_from(false, 90, 0, &sizes(), Size::new(1080, 1920), config.inner()).unwrap();

        assert_eq!(plan.rotation(), 90);
        assert_eq!(plan.transform_rotation(), 90);
        assert_eq!(plan.capture_size(), JsSize::new(1920, 1080));
        assert!(!plan.transform().is_mirrored());
    }

    #[test]
    fn test_plan_applies_config() {
        let mut config = PreviewConfig::new();
        config.set_mirror(true);
        config.set_platform_pre_rotation(90).unwrap();

        let plan = plan_from(true, 270, 0, &sizes(), Size::new(1080, 1920), config.inner()).unwrap();
        assert_eq!(plan.rotation(), 90);
        assert_eq!(plan.transform_rotation(), 0);
        assert!(plan.transform().is_mirrored());
    }

    #[test]
    fn test_plan_errors() {
        let config = PreviewConfig::new();
        assert!(matches!(
            plan_from(false, 90, 0, &[], Size::new(1080, 1920), config.inner()),
            Err(GeometryError::InvalidArgument(_))
        ));
        assert!(matches!(
            plan_from(false, 91, 0, &sizes(), Size::new(1080, 1920), config.inner()),
            Err(GeometryError::InvalidArgument(_))
        ));
    }
}
