//! WASM-compatible wrapper types for preview geometry.
//!
//! This module provides JavaScript-friendly types that wrap the core Viewfinder
//! types, handling the conversion between Rust and JavaScript representations.

use viewfinder_core::{AffineTransform, GeometryError, Point, Rotation, ScalePolicy, Size};
use wasm_bindgen::prelude::*;

/// Pixel dimensions for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsSize {
    width: u32,
    height: u32,
}

#[wasm_bindgen]
impl JsSize {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> JsSize {
        JsSize { width, height }
    }

    /// Width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl From<Size> for JsSize {
    fn from(size: Size) -> Self {
        JsSize::new(size.width, size.height)
    }
}

impl From<JsSize> for Size {
    fn from(size: JsSize) -> Self {
        Size::new(size.width, size.height)
    }
}

/// An affine transform for JavaScript.
///
/// `values()` returns the 3x3 matrix in row-major order, the layout surface
/// transform setters and `DOMMatrix`-style helpers expect.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct JsAffineTransform {
    inner: AffineTransform,
}

#[wasm_bindgen]
impl JsAffineTransform {
    /// The identity transform.
    pub fn identity() -> JsAffineTransform {
        JsAffineTransform {
            inner: AffineTransform::identity(),
        }
    }

    /// Get the 3x3 matrix as 9 floats in row-major order.
    pub fn values(&self) -> Vec<f32> {
        self.inner.to_row_major().to_vec()
    }

    /// Get the horizontal scale entry
    #[wasm_bindgen(getter)]
    pub fn scale_x(&self) -> f64 {
        self.inner.scale_x()
    }

    /// Get the vertical scale entry
    #[wasm_bindgen(getter)]
    pub fn scale_y(&self) -> f64 {
        self.inner.scale_y()
    }

    /// Get the horizontal skew entry
    #[wasm_bindgen(getter)]
    pub fn skew_x(&self) -> f64 {
        self.inner.skew_x()
    }

    /// Get the vertical skew entry
    #[wasm_bindgen(getter)]
    pub fn skew_y(&self) -> f64 {
        self.inner.skew_y()
    }

    /// Get the horizontal translation
    #[wasm_bindgen(getter)]
    pub fn trans_x(&self) -> f64 {
        self.inner.trans_x()
    }

    /// Get the vertical translation
    #[wasm_bindgen(getter)]
    pub fn trans_y(&self) -> f64 {
        self.inner.trans_y()
    }

    /// Map a point; returns `[x, y]`.
    pub fn map_point(&self, x: f64, y: f64) -> Vec<f64> {
        let p = self.inner.map_point(Point::new(x, y));
        vec![p.x, p.y]
    }

    /// Check whether the transform flips orientation.
    pub fn is_mirrored(&self) -> bool {
        self.inner.is_mirrored()
    }
}

impl JsAffineTransform {
    pub(crate) fn from_core(inner: AffineTransform) -> Self {
        Self { inner }
    }

    pub(crate) fn inner(&self) -> &AffineTransform {
        &self.inner
    }
}

/// Convert a u8 scale policy value to the core ScalePolicy enum.
///
/// Values:
/// - 0 = StretchFill (ignore aspect ratio)
/// - 1 = NativeSize (no scaling)
/// - 2 = CropFill (cover, may crop)
/// - 3 = FitInside (contain, may letterbox)
///
/// Any other value defaults to CropFill.
pub(crate) fn policy_from_u8(value: u8) -> ScalePolicy {
    match value {
        0 => ScalePolicy::StretchFill,
        1 => ScalePolicy::NativeSize,
        3 => ScalePolicy::FitInside,
        _ => ScalePolicy::CropFill, // Default
    }
}

/// Parse a rotation in degrees, keeping the core error for reporting.
pub(crate) fn rotation_from_degrees(degrees: i32) -> Result<Rotation, GeometryError> {
    Rotation::from_degrees(degrees)
}

/// Convert a core error into a JavaScript error value.
pub(crate) fn to_js_error(err: GeometryError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_size_conversion() {
        let js = JsSize::new(1920, 1080);
        assert_eq!(js.width(), 1920);
        assert_eq!(js.height(), 1080);

        let core: Size = js.into();
        assert_eq!(core, Size::new(1920, 1080));
        assert_eq!(JsSize::from(core), js);
    }

    #[test]
    fn test_identity_values() {
        let m = JsAffineTransform::identity();
        assert_eq!(m.values(), vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        assert!(!m.is_mirrored());
    }

    #[test]
    fn test_map_point() {
        let m = JsAffineTransform::from_core(AffineTransform::translation(3.0, -4.0));
        assert_eq!(m.map_point(1.0, 1.0), vec![4.0, -3.0]);
        assert_eq!(m.trans_x(), 3.0);
        assert_eq!(m.trans_y(), -4.0);
        assert_eq!(m.inner(), &AffineTransform::translation(3.0, -4.0));
    }

    #[test]
    fn test_policy_from_u8() {
        assert_eq!(policy_from_u8(0), ScalePolicy::StretchFill);
        assert_eq!(policy_from_u8(1), ScalePolicy::NativeSize);
        assert_eq!(policy_from_u8(2), ScalePolicy::CropFill);
        assert_eq!(policy_from_u8(3), ScalePolicy::FitInside);
        // Unknown values default to CropFill
        assert_eq!(policy_from_u8(4), ScalePolicy::CropFill);
        assert_eq!(policy_from_u8(255), ScalePolicy::CropFill);
    }

    #[test]
    fn test_rotation_from_degrees() {
        assert_eq!(rotation_from_degrees(270).unwrap(), Rotation::Deg270);
        assert_eq!(rotation_from_degrees(-90).unwrap(), Rotation::Deg270);
        assert!(rotation_from_degrees(45).is_err());
    }
}
