//! Capture size selection.
//!
//! Picks the capture resolution best suited to a viewport from the list a
//! camera device reports.
//!
//! # Algorithm
//!
//! 1. The target is the viewport, with width and height swapped when the frame
//!    will be turned a quarter turn before display
//! 2. **Aspect pass**: keep candidates whose ratio is within
//!    [`ASPECT_TOLERANCE`] of the target ratio (absolute difference on the
//!    ratio scale). Among them prefer those covering the target on both axes,
//!    then take the closest area
//! 3. **Fallback pass**: if nothing matches the aspect ratio, minimize
//!    [`fallback_score`], a weighted blend of ratio and area differences
//!
//! Ties always go to the earliest candidate in the input list, and the result
//! is always one of the candidates.

use tracing::debug;

use crate::rotation::Rotation;
use crate::types::{GeometryError, Result, Size};

/// Maximum absolute difference between a candidate's width/height ratio and
/// the target ratio for the aspect pass.
pub const ASPECT_TOLERANCE: f64 = 0.15;

/// Weight of the normalized ratio difference in [`fallback_score`].
pub const RATIO_WEIGHT: f64 = 0.7;

/// Weight of the normalized area difference in [`fallback_score`].
pub const AREA_WEIGHT: f64 = 0.3;

/// The viewport as seen from the unrotated capture frame.
#[inline]
pub fn target_size(effective_rotation: Rotation, viewport: Size) -> Size {
    viewport.rotated(effective_rotation)
}

/// Score a candidate for the fallback pass (lower is better).
///
/// `0.7 * |ratio - target_ratio| / target_ratio + 0.3 * |area - target_area| / target_area`
pub fn fallback_score(candidate: Size, target: Size) -> f64 {
    let target_ratio = target.aspect_ratio();
    let target_area = target.area() as f64;

    let ratio_diff = (candidate.aspect_ratio() - target_ratio).abs() / target_ratio;
    let area_diff = candidate.area().abs_diff(target.area()) as f64 / target_area;

    RATIO_WEIGHT * ratio_diff + AREA_WEIGHT * area_diff
}

/// Return the first element minimizing `key`.
fn first_min_by<'a, I, F>(items: I, mut key: F) -> Option<Size>
where
    I: IntoIterator<Item = &'a Size>,
    F: FnMut(Size) -> f64,
{
    let mut best: Option<(Size, f64)> = None;
    for &item in items {
        let score = key(item);
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((item, score)),
        }
    }
    best.map(|(size, _)| size)
}

/// Select the best capture size for a viewport.
///
/// # Arguments
///
/// * `candidates` - Sizes the capture device supports, in device order
/// * `effective_rotation` - Clockwise rotation the frame needs before display
/// * `viewport` - Size of the preview surface
///
/// # Returns
///
/// One of `candidates`, never a synthesized size.
///
/// # Errors
///
/// - [`GeometryError::InvalidArgument`] if `candidates` is empty or contains a
///   size with a zero dimension
/// - [`GeometryError::DegenerateGeometry`] if `viewport` has a zero dimension
///
/// # Example
///
/// ```
/// use viewfinder_core::{select_optimal_size, Rotation, Size};
///
/// let candidates = [Size::new(640, 480), Size::new(1280, 720), Size::new(1920, 1080)];
/// // Portrait phone, back camera mounted at 90°
/// let chosen = select_optimal_size(&candidates, Rotation::Deg90, Size::new(1080, 1920)).unwrap();
/// assert_eq!(chosen, Size::new(1920, 1080));
/// ```
pub fn select_optimal_size(
    candidates: &[Size],
    effective_rotation: Rotation,
    viewport: Size,
) -> Result<Size> {
    if candidates.is_empty() {
        return Err(GeometryError::InvalidArgument(
            "candidate size list is empty".to_string(),
        ));
    }
    if let Some(bad) = candidates.iter().find(|s| s.is_degenerate()) {
        return Err(GeometryError::InvalidArgument(format!(
            "candidate size {} has a zero dimension",
            bad
        )));
    }
    viewport.ensure_non_degenerate("viewport")?;

    let target = target_size(effective_rotation, viewport);
    let target_ratio = target.aspect_ratio();
    let area_distance = |size: Size| size.area().abs_diff(target.area()) as f64;

    let aspect_matches: Vec<Size> = candidates
        .iter()
        .copied()
        .filter(|size| (size.aspect_ratio() - target_ratio).abs() <= ASPECT_TOLERANCE)
        .collect();

    let chosen = if aspect_matches.is_empty() {
        debug!(wanted = %target, "no aspect match, using weighted fallback score");
        first_min_by(candidates, |size| fallback_score(size, target))
    } else {
        let covering: Vec<Size> = aspect_matches
            .iter()
            .copied()
            .filter(|size| size.width >= target.width && size.height >= target.height)
            .collect();
        debug!(
            wanted = %target,
            aspect_matches = aspect_matches.len(),
            covering = covering.len(),
            "aspect pass"
        );

        if covering.is_empty() {
            first_min_by(&aspect_matches, area_distance)
        } else {
            first_min_by(&covering, area_distance)
        }
    };

    // Non-empty input always yields a candidate.
    let chosen = chosen.ok_or_else(|| {
        GeometryError::InvalidArgument("candidate size list is empty".to_string())
    })?;

    debug!(
        viewport = %viewport,
        rotation = effective_rotation.degrees(),
        chosen = %chosen,
        "selected capture size"
    );
    Ok(chosen)
}
