//! Angle utilities shared by the scoring stages.
//!
//! All angles are in degrees. Directions are normalized into [0, 360);
//! angular distances are folded into [0, 180].

/// Direction of the vector from `a` to `b`, in degrees normalized to
/// [0, 360).
///
/// Uses the two-argument arctangent so the quadrant of the vector is
/// preserved before normalization. Coincident points degenerate to 0 by
/// the `atan2(0, 0)` convention.
#[inline]
#[must_use]
pub fn segment_direction(a: [f64; 2], b: [f64; 2]) -> f64 {
    (b[1] - a[1]).atan2(b[0] - a[0]).to_degrees().rem_euclid(360.0)
}

/// Smallest angular distance between two headings, in [0, 180].
///
/// Correct under wraparound for inputs of any sign or magnitude:
/// `circular_diff(350.0, 10.0)` is 20, not 340.
#[inline]
#[must_use]
pub fn circular_diff(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs().rem_euclid(360.0);
    diff.min(360.0 - diff)
}
