use thiserror::Error;

/// Validation failures for a malformed [`StepState`](crate::StepState).
///
/// The scoring arithmetic itself cannot fail; every variant corresponds to
/// a violation of the host's input contract.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RewardError {
    #[error("track needs at least 2 waypoints, got {0}")]
    TooFewWaypoints(usize),
    #[error("closest waypoint index {index} out of bounds for {len} waypoints")]
    WaypointOutOfBounds { index: usize, len: usize },
    #[error("closest waypoint pair is degenerate (both indices are {0})")]
    DegenerateClosestPair(usize),
    #[error("track width must be positive and finite, got {0}")]
    InvalidTrackWidth(f64),
}
