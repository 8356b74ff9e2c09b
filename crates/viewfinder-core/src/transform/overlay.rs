//! Overlay coordinate mapping.
//!
//! Detectors (faces, barcodes) report points in raw, unrotated capture-buffer
//! coordinates. The functions here move such points into the coordinate space
//! of the surface's default, unrotated stretch so overlays can be drawn with
//! the same transform the preview uses.
//!
//! This maps points only; it is not a surface transform and is keyed on the
//! raw sensor orientation rather than the effective rotation.

use super::matrix::AffineTransform;
use crate::rotation::Rotation;
use crate::types::{Point, Result, Size};

/// Build the matrix that maps raw capture-buffer points into the default
/// stretch space of the preview surface.
///
/// Steps, in order:
/// 1. Move the capture-frame center to the origin
/// 2. Rotate clockwise by `360 - sensor_orientation`
/// 3. Move the origin to the rotated frame's center (top-left relative)
/// 4. Mirror horizontally about that center if `is_front_facing`
/// 5. Scale by `viewport / capture_size`
///
/// # Errors
///
/// [`crate::GeometryError::DegenerateGeometry`] if `capture_size` or `viewport`
/// has a zero dimension.
pub fn overlay_matrix(
    sensor_orientation: Rotation,
    is_front_facing: bool,
    capture_size: Size,
    viewport: Size,
) -> Result<AffineTransform> {
    capture_size.ensure_non_degenerate("capture size")?;
    viewport.ensure_non_degenerate("viewport")?;

    let rotation = -sensor_orientation;
    let frame_center = capture_size.center();
    let rotated_center = capture_size.rotated(rotation).center();

    let mut matrix = AffineTransform::translation(-frame_center.x, -frame_center.y)
        .post_rotate(rotation, 0.0, 0.0)
        .post_translate(rotated_center.x, rotated_center.y);
    if is_front_facing {
        matrix = matrix.post_scale(-1.0, 1.0, rotated_center.x, rotated_center.y);
    }

    Ok(matrix.post_scale(
        viewport.width as f64 / capture_size.width as f64,
        viewport.height as f64 / capture_size.height as f64,
        0.0,
        0.0,
    ))
}

/// Map a single raw capture-buffer point with [`overlay_matrix`].
///
/// # Errors
///
/// [`crate::GeometryError::DegenerateGeometry`] on a zero dimension.
pub fn map_overlay_point(
    point: Point,
    sensor_orientation: Rotation,
    is_front_facing: bool,
    capture_size: Size,
    viewport: Size,
) -> Result<Point> {
    overlay_matrix(sensor_orientation, is_front_facing, capture_size, viewport)
        .map(|m| m.map_point(point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GeometryError;

    fn assert_point_eq(actual: Point, expected: Point) {
        assert!(
            actual.distance_to(&expected) < 1e-9,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_unrotated_back_camera_is_plain_stretch() {
        let capture = Size::new(640, 480);
        let viewport = Size::new(1280, 960);
        let m = overlay_matrix(Rotation::Deg0, false, capture, viewport).unwrap();

        assert_point_eq(m.map_point(Point::new(0.0, 0.0)), Point::new(0.0, 0.0));
        assert_point_eq(m.map_point(Point::new(320.0, 240.0)), Point::new(640.0, 480.0));
        assert_point_eq(m.map_point(Point::new(640.0, 480.0)), Point::new(1280.0, 960.0));
    }

    #[test]
    fn test_sensor_90_rotates_counter_clockwise() {
        // 360 - 90 = 270° clockwise: the top-left corner moves to the
        // bottom-left of the 480x640 rotated frame.
        let capture = Size::new(640, 480);
        let viewport = Size::new(640, 480);
        let p = map_overlay_point(Point::new(0.0, 0.0), Rotation::Deg90, false, capture, viewport)
            .unwrap();
        assert_point_eq(p, Point::new(0.0, 640.0));

        let p = map_overlay_point(Point::new(640.0, 0.0), Rotation::Deg90, false, capture, viewport)
            .unwrap();
        assert_point_eq(p, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_front_facing_mirrors() {
        let capture = Size::new(640, 480);
        let viewport = Size::new(640, 480);
        let back = map_overlay_point(Point::new(100.0, 50.0), Rotation::Deg0, false, capture, viewport)
            .unwrap();
        let front = map_overlay_point(Point::new(100.0, 50.0), Rotation::Deg0, true, capture, viewport)
            .unwrap();

        assert_point_eq(back, Point::new(100.0, 50.0));
        assert_point_eq(front, Point::new(540.0, 50.0));
    }

    #[test]
    fn test_front_facing_rotates_before_mirroring() {
        // Sensor 90: rotate 270° clockwise into the 480x640 frame, mirror about
        // its center line x = 240, then scale by (320/640, 480/480). Mirroring
        // the raw frame first would land (100, 50) at (25, 100) instead.
        let capture = Size::new(640, 480);
        let viewport = Size::new(320, 480);

        let p = map_overlay_point(Point::new(100.0, 50.0), Rotation::Deg90, true, capture, viewport)
            .unwrap();
        assert_point_eq(p, Point::new(215.0, 540.0));

        let p = map_overlay_point(Point::new(600.0, 400.0), Rotation::Deg90, true, capture, viewport)
            .unwrap();
        assert_point_eq(p, Point::new(40.0, 40.0));
    }

    #[test]
    fn test_front_facing_sensor_270() {
        // 360 - 270 = 90° clockwise: (x, y) -> (480 - y, x) in the rotated
        // frame, then mirror x -> 480 - x and scale by (0.5, 1).
        let capture = Size::new(640, 480);
        let viewport = Size::new(320, 480);
        let p = map_overlay_point(Point::new(100.0, 50.0), Rotation::Deg270, true, capture, viewport)
            .unwrap();
        assert_point_eq(p, Point::new(25.0, 100.0));
    }

    #[test]
    fn test_sensor_180_flips_both_axes() {
        let capture = Size::new(400, 300);
        let p = map_overlay_point(Point::new(10.0, 20.0), Rotation::Deg180, false, capture, capture)
            .unwrap();
        assert_point_eq(p, Point::new(390.0, 280.0));
    }

    #[test]
    fn test_frame_center_maps_to_scaled_rotated_center() {
        let capture = Size::new(1920, 1080);
        let viewport = Size::new(1080, 2400);
        for orientation in Rotation::ALL {
            for front in [false, true] {
                let rotated = capture.rotated(-orientation);
                let expected = Point::new(
                    rotated.width as f64 / 2.0 * 1080.0 / 1920.0,
                    rotated.height as f64 / 2.0 * 2400.0 / 1080.0,
                );
                let p = map_overlay_point(capture.center(), orientation, front, capture, viewport)
                    .unwrap();
                assert_point_eq(p, expected);
            }
        }
    }

    #[test]
    fn test_degenerate_sizes_fail() {
        let err = overlay_matrix(Rotation::Deg90, false, Size::new(0, 480), Size::new(640, 480))
            .unwrap_err();
        assert!(matches!(err, GeometryError::DegenerateGeometry(_)));

        assert!(map_overlay_point(
            Point::new(0.0, 0.0),
            Rotation::Deg0,
            true,
            Size::new(640, 480),
            Size::new(640, 0),
        )
        .is_err());
    }
}
