//! Per-step state supplied by the host simulator.

use anyhow::Result;
use serde::Deserialize;

/// Vehicle and track state for a single simulation step.
///
/// The host constructs one record per step; it is consumed once and
/// discarded, and no invariant spans calls. `speed` and `steering_angle`
/// are part of the host contract but do not participate in the current
/// scoring computation.
#[derive(Debug, Clone, Deserialize)]
pub struct StepState {
    /// Track centerline points, ordered along the direction of travel.
    pub waypoints: Vec<[f64; 2]>,
    /// Indices of the waypoints immediately behind and ahead of the
    /// vehicle, in that order.
    pub closest_waypoints: [usize; 2],
    /// Vehicle heading in degrees. Any value is accepted; headings are
    /// compared modulo 360.
    pub heading: f64,
    /// Perpendicular distance from the track centerline, non-negative.
    pub distance_from_center: f64,
    /// Total drivable width of the track.
    pub track_width: f64,
    /// Vehicle speed. Unused by the scoring computation.
    #[serde(default)]
    pub speed: f64,
    /// Steering angle in degrees. Unused by the scoring computation.
    #[serde(default)]
    pub steering_angle: f64,
}

impl StepState {
    /// Parses a step record from the JSON object shape the host delivers.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a required field is
    /// missing.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
