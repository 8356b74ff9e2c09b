//! 2-D affine matrix used for preview and overlay transforms.
//!
//! The layout follows the 3x3 matrices UI toolkits hand to their surfaces:
//!
//! ```text
//! | scale_x  skew_x   trans_x |   | x |
//! | skew_y   scale_y  trans_y | * | y |
//! |   0        0        1     |   | 1 |
//! ```
//!
//! Composition uses `post_*` semantics: `m.post_rotate(..)` returns a matrix
//! that applies `m` first and the rotation second.

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use std::ops::Mul;

use crate::rotation::Rotation;
use crate::types::{GeometryError, Point, Result};

/// A 2-D affine transform (rotation, non-uniform scale, skew, translation).
///
/// Backed by a homogeneous `Matrix3<f64>` whose bottom row is always
/// `[0, 0, 1]`. Serializes as its six affine entries in camelCase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "AffineEntries", into = "AffineEntries")]
pub struct AffineTransform {
    matrix: Matrix3<f64>,
}

/// Field view used on the serde boundary.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AffineEntries {
    scale_x: f64,
    skew_x: f64,
    trans_x: f64,
    skew_y: f64,
    scale_y: f64,
    trans_y: f64,
}

impl From<AffineEntries> for AffineTransform {
    fn from(e: AffineEntries) -> Self {
        AffineTransform::new(e.scale_x, e.skew_x, e.trans_x, e.skew_y, e.scale_y, e.trans_y)
    }
}

impl From<AffineTransform> for AffineEntries {
    fn from(m: AffineTransform) -> Self {
        let [scale_x, skew_x, trans_x, skew_y, scale_y, trans_y] = m.entries();
        AffineEntries {
            scale_x,
            skew_x,
            trans_x,
            skew_y,
            scale_y,
            trans_y,
        }
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// Build a matrix from its six affine entries in row-major order.
    pub fn new(
        scale_x: f64,
        skew_x: f64,
        trans_x: f64,
        skew_y: f64,
        scale_y: f64,
        trans_y: f64,
    ) -> Self {
        Self {
            matrix: Matrix3::new(
                scale_x, skew_x, trans_x, //
                skew_y, scale_y, trans_y, //
                0.0, 0.0, 1.0,
            ),
        }
    }

    /// Wrap a homogeneous matrix, forcing the bottom row back to `[0, 0, 1]`.
    fn from_matrix(mut matrix: Matrix3<f64>) -> Self {
        matrix[(2, 0)] = 0.0;
        matrix[(2, 1)] = 0.0;
        matrix[(2, 2)] = 1.0;
        Self { matrix }
    }

    /// Scale about the origin.
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, 0.0, sy, 0.0)
    }

    /// Translation by `(dx, dy)`.
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self::new(1.0, 0.0, dx, 0.0, 1.0, dy)
    }

    /// Clockwise rotation (screen space, y down) about the origin.
    pub fn rotation(rotation: Rotation) -> Self {
        let (sin, cos) = rotation.sin_cos();
        Self::new(cos, -sin, 0.0, sin, cos, 0.0)
    }

    /// Clockwise rotation about the pivot `(px, py)`.
    pub fn rotation_about(rotation: Rotation, px: f64, py: f64) -> Self {
        Self::translation(-px, -py)
            .then(&Self::rotation(rotation))
            .then(&Self::translation(px, py))
    }

    /// Scale about the pivot `(px, py)`.
    pub fn scale_about(sx: f64, sy: f64, px: f64, py: f64) -> Self {
        Self::new(sx, 0.0, px - sx * px, 0.0, sy, py - sy * py)
    }

    #[inline]
    pub fn scale_x(&self) -> f64 {
        self.matrix[(0, 0)]
    }

    #[inline]
    pub fn skew_x(&self) -> f64 {
        self.matrix[(0, 1)]
    }

    #[inline]
    pub fn trans_x(&self) -> f64 {
        self.matrix[(0, 2)]
    }

    #[inline]
    pub fn skew_y(&self) -> f64 {
        self.matrix[(1, 0)]
    }

    #[inline]
    pub fn scale_y(&self) -> f64 {
        self.matrix[(1, 1)]
    }

    #[inline]
    pub fn trans_y(&self) -> f64 {
        self.matrix[(1, 2)]
    }

    /// Matrix product `a * b`: applies `b` first, then `a`.
    pub fn concat(a: &AffineTransform, b: &AffineTransform) -> Self {
        Self::from_matrix(a.matrix * b.matrix)
    }

    /// Apply `self`, then `next`.
    #[inline]
    pub fn then(&self, next: &AffineTransform) -> Self {
        Self::concat(next, self)
    }

    /// Append a clockwise rotation about `(px, py)`.
    pub fn post_rotate(&self, rotation: Rotation, px: f64, py: f64) -> Self {
        self.then(&Self::rotation_about(rotation, px, py))
    }

    /// Append a scale about `(px, py)`.
    pub fn post_scale(&self, sx: f64, sy: f64, px: f64, py: f64) -> Self {
        self.then(&Self::scale_about(sx, sy, px, py))
    }

    /// Append a translation.
    pub fn post_translate(&self, dx: f64, dy: f64) -> Self {
        self.then(&Self::translation(dx, dy))
    }

    /// Determinant of the linear part (equal to the full 3x3 determinant
    /// since the bottom row is `[0, 0, 1]`).
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.matrix.determinant()
    }

    /// Inverse transform.
    ///
    /// Any finite, non-zero determinant is accepted, however small: a huge
    /// capture frame shown on a tiny viewport is still a valid stretch.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegenerateGeometry`] if the determinant is zero or not
    /// finite.
    pub fn invert(&self) -> Result<Self> {
        let det = self.determinant();
        let singular = || {
            GeometryError::DegenerateGeometry(format!(
                "transform is not invertible (determinant {:e})",
                det
            ))
        };
        if !det.is_finite() {
            return Err(singular());
        }

        self.matrix
            .try_inverse()
            .map(Self::from_matrix)
            .ok_or_else(singular)
    }

    /// Transform a point.
    #[inline]
    pub fn map_point(&self, p: Point) -> Point {
        let v = self.matrix * Vector3::new(p.x, p.y, 1.0);
        Point::new(v.x, v.y)
    }

    /// Magnitudes of the per-axis scale, for a matrix of the form
    /// `scale * rotation` (row norms of the linear part).
    pub fn axis_scales(&self) -> (f64, f64) {
        (
            self.scale_x().hypot(self.skew_x()),
            self.skew_y().hypot(self.scale_y()),
        )
    }

    /// Clockwise rotation angle in degrees (`-180..=180`) for a matrix of the
    /// form `scale * rotation` with a positive horizontal scale.
    pub fn rotation_degrees(&self) -> f64 {
        (-self.skew_x()).atan2(self.scale_x()).to_degrees()
    }

    /// True if the linear part reverses orientation (contains a mirror).
    pub fn is_mirrored(&self) -> bool {
        self.determinant() < 0.0
    }

    /// True if every entry is within `tolerance` of the identity.
    pub fn is_identity(&self, tolerance: f64) -> bool {
        self.approx_eq(&Self::identity(), tolerance)
    }

    /// Compare entry by entry with a relative tolerance.
    ///
    /// Each entry may differ by `tolerance * max(1, |a|, |b|)`, so large
    /// translations are compared relatively and small scale entries
    /// absolutely.
    pub fn approx_eq(&self, other: &AffineTransform, tolerance: f64) -> bool {
        self.entries()
            .iter()
            .zip(other.entries().iter())
            .all(|(a, b)| (a - b).abs() <= tolerance * 1f64.max(a.abs()).max(b.abs()))
    }

    /// The six affine entries in row-major order.
    pub fn entries(&self) -> [f64; 6] {
        [
            self.scale_x(),
            self.skew_x(),
            self.trans_x(),
            self.skew_y(),
            self.scale_y(),
            self.trans_y(),
        ]
    }

    /// Full 3x3 matrix in row-major order, as `f32` values ready for a
    /// surface transform setter.
    pub fn to_row_major(&self) -> [f32; 9] {
        let mut out = [0.0f32; 9];
        for (i, value) in out.iter_mut().enumerate() {
            *value = self.matrix[(i / 3, i % 3)] as f32;
        }
        out
    }
}

impl Mul for AffineTransform {
    type Output = AffineTransform;

    /// `a * b` applies `b` first, then `a`.
    fn mul(self, rhs: AffineTransform) -> AffineTransform {
        AffineTransform::concat(&self, &rhs)
    }
}
