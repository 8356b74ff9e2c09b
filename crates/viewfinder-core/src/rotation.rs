//! Right-angle rotations and the effective preview rotation.
//!
//! # Conventions
//!
//! - Angles are clockwise in screen space (y axis pointing down)
//! - Only quarter turns exist; every value is normalized into `0..360`
//! - Sensor orientation is the clockwise angle a raw frame must be rotated to
//!   match the device's natural orientation
//! - Display rotation is how far the display is rotated from its natural
//!   orientation, as reported by the OS

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::types::{GeometryError, Result};

/// A clockwise right-angle rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// All rotations in ascending order.
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    /// Build a rotation from an angle in degrees.
    ///
    /// Any multiple of 90 is accepted, including negative values and values
    /// beyond a full turn; the result is normalized modulo 360.
    ///
    /// # Errors
    ///
    /// [`GeometryError::InvalidArgument`] if `degrees` is not a multiple of 90.
    pub fn from_degrees(degrees: i32) -> Result<Self> {
        if degrees % 90 != 0 {
            return Err(GeometryError::InvalidArgument(format!(
                "rotation must be a multiple of 90 degrees, got {}",
                degrees
            )));
        }
        Ok(Self::from_quarter_turns(degrees.rem_euclid(360) / 90))
    }

    /// Build a rotation from a count of clockwise quarter turns, wrapping
    /// modulo 4.
    ///
    /// Display rotation indices reported by the OS (0 to 3) map directly onto
    /// this.
    pub fn from_quarter_turns(turns: i32) -> Self {
        match turns.rem_euclid(4) {
            0 => Rotation::Deg0,
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            _ => Rotation::Deg270,
        }
    }

    /// Number of clockwise quarter turns (0 to 3).
    #[inline]
    pub fn quarter_turns(self) -> i32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }

    /// Angle in degrees (0, 90, 180 or 270).
    #[inline]
    pub fn degrees(self) -> i32 {
        self.quarter_turns() * 90
    }

    /// True for 90° and 270°, which swap a frame's width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }

    /// Exact `(sin, cos)` of the angle, with no trigonometric round-off.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        match self {
            Rotation::Deg0 => (0.0, 1.0),
            Rotation::Deg90 => (1.0, 0.0),
            Rotation::Deg180 => (0.0, -1.0),
            Rotation::Deg270 => (-1.0, 0.0),
        }
    }
}

impl Add for Rotation {
    type Output = Rotation;

    fn add(self, rhs: Rotation) -> Rotation {
        Rotation::from_quarter_turns(self.quarter_turns() + rhs.quarter_turns())
    }
}

impl Sub for Rotation {
    type Output = Rotation;

    fn sub(self, rhs: Rotation) -> Rotation {
        Rotation::from_quarter_turns(self.quarter_turns() - rhs.quarter_turns())
    }
}

impl Neg for Rotation {
    type Output = Rotation;

    /// The rotation that undoes this one (`360 - degrees`, normalized).
    fn neg(self) -> Rotation {
        Rotation::from_quarter_turns(-self.quarter_turns())
    }
}

impl TryFrom<i32> for Rotation {
    type Error = GeometryError;

    fn try_from(degrees: i32) -> Result<Self> {
        Rotation::from_degrees(degrees)
    }
}

impl From<Rotation> for i32 {
    fn from(rotation: Rotation) -> i32 {
        rotation.degrees()
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Compute the clockwise rotation a captured frame needs to appear upright on
/// the current display.
///
/// For back-facing cameras this is `(sensor - display + 360) % 360`.
///
/// Front-facing cameras mirror the image physically, so the display rotation
/// adds to the sensor angle and the sum is reflected
/// (`(360 - (sensor + display) % 360) % 360`). That puts the content, and not
/// only its bounding box, right-side-up.
///
/// # Example
///
/// ```
/// use viewfinder_core::rotation::{effective_rotation, Rotation};
///
/// // Typical back camera held in portrait
/// let r = effective_rotation(false, Rotation::Deg90, Rotation::Deg0);
/// assert_eq!(r, Rotation::Deg90);
///
/// // Typical front camera held in portrait
/// let r = effective_rotation(true, Rotation::Deg270, Rotation::Deg0);
/// assert_eq!(r, Rotation::Deg90);
/// ```
pub fn effective_rotation(
    is_front_facing: bool,
    sensor_orientation: Rotation,
    display_rotation: Rotation,
) -> Rotation {
    if is_front_facing {
        -(sensor_orientation + display_rotation)
    } else {
        sensor_orientation - display_rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_degrees_normalizes() {
        assert_eq!(Rotation::from_degrees(0).unwrap(), Rotation::Deg0);
        assert_eq!(Rotation::from_degrees(90).unwrap(), Rotation::Deg90);
        assert_eq!(Rotation::from_degrees(360).unwrap(), Rotation::Deg0);
        assert_eq!(Rotation::from_degrees(450).unwrap(), Rotation::Deg90);
        assert_eq!(Rotation::from_degrees(-90).unwrap(), Rotation::Deg270);
        assert_eq!(Rotation::from_degrees(-540).unwrap(), Rotation::Deg180);
    }

    #[test]
    fn test_from_degrees_rejects_non_right_angles() {
        let err = Rotation::from_degrees(45).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidArgument(_)));
        assert!(Rotation::from_degrees(-1).is_err());
        assert!(Rotation::from_degrees(359).is_err());
    }

    #[test]
    fn test_from_quarter_turns_wraps() {
        assert_eq!(Rotation::from_quarter_turns(0), Rotation::Deg0);
        assert_eq!(Rotation::from_quarter_turns(3), Rotation::Deg270);
        assert_eq!(Rotation::from_quarter_turns(4), Rotation::Deg0);
        assert_eq!(Rotation::from_quarter_turns(-1), Rotation::Deg270);
    }

    #[test]
    fn test_degrees_round_trip() {
        for rotation in Rotation::ALL {
            assert_eq!(Rotation::from_degrees(rotation.degrees()).unwrap(), rotation);
        }
    }

    #[test]
    fn test_swaps_dimensions() {
        assert!(!Rotation::Deg0.swaps_dimensions());
        assert!(Rotation::Deg90.swaps_dimensions());
        assert!(!Rotation::Deg180.swaps_dimensions());
        assert!(Rotation::Deg270.swaps_dimensions());
    }

    #[test]
    fn test_sin_cos_matches_trig() {
        for rotation in Rotation::ALL {
            let (sin, cos) = rotation.sin_cos();
            let rad = (rotation.degrees() as f64).to_radians();
            assert!((sin - rad.sin()).abs() < 1e-12);
            assert!((cos - rad.cos()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(Rotation::Deg270 + Rotation::Deg180, Rotation::Deg90);
        assert_eq!(Rotation::Deg90 - Rotation::Deg180, Rotation::Deg270);
        assert_eq!(-Rotation::Deg90, Rotation::Deg270);
        assert_eq!(-Rotation::Deg0, Rotation::Deg0);
        assert_eq!(-Rotation::Deg180, Rotation::Deg180);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rotation::Deg270.to_string(), "270°");
    }

    #[test]
    fn test_back_facing_matches_formula() {
        for sensor in Rotation::ALL {
            for display in Rotation::ALL {
                let expected = (sensor.degrees() - display.degrees() + 360) % 360;
                let actual = effective_rotation(false, sensor, display);
                assert_eq!(
                    actual.degrees(),
                    expected,
                    "sensor={} display={}",
                    sensor,
                    display
                );
            }
        }
    }

    #[test]
    fn test_front_facing_matches_formula() {
        for sensor in Rotation::ALL {
            for display in Rotation::ALL {
                let sum = (sensor.degrees() + display.degrees()) % 360;
                let expected = (360 - sum) % 360;
                let actual = effective_rotation(true, sensor, display);
                assert_eq!(
                    actual.degrees(),
                    expected,
                    "sensor={} display={}",
                    sensor,
                    display
                );
            }
        }
    }

    #[test]
    fn test_effective_rotation_is_total() {
        let mut count = 0;
        for front in [false, true] {
            for sensor in Rotation::ALL {
                for display in Rotation::ALL {
                    let r = effective_rotation(front, sensor, display);
                    assert!(Rotation::ALL.contains(&r));
                    count += 1;
                }
            }
        }
        assert_eq!(count, 32);
    }

    #[test]
    fn test_common_device_configurations() {
        // Back camera mounted at 90°, device turned to landscape (display 90°)
        assert_eq!(
            effective_rotation(false, Rotation::Deg90, Rotation::Deg90),
            Rotation::Deg0
        );
        // Front camera mounted at 270°, device in reverse landscape
        assert_eq!(
            effective_rotation(true, Rotation::Deg270, Rotation::Deg270),
            Rotation::Deg180
        );
    }

    #[test]
    fn test_serde_uses_degrees() {
        assert_eq!(deserialize_degrees(270).unwrap(), Rotation::Deg270);
        assert_eq!(deserialize_degrees(-90).unwrap(), Rotation::Deg270);
        assert!(deserialize_degrees(30).is_err());
    }

    fn deserialize_degrees(value: i32) -> std::result::Result<Rotation, serde::de::value::Error> {
        use serde::de::value::{Error, I32Deserializer};
        use serde::de::IntoDeserializer;

        let de: I32Deserializer<Error> = value.into_deserializer();
        Rotation::deserialize(de)
    }
}
