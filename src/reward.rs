//! # Racing-line reward
//!
//! This module scores a single simulation step. The score combines three
//! independent terms, each in [0, 1]: how closely the vehicle's heading
//! matches the local track direction, how close the vehicle sits to the
//! centerline, and whether a corner is coming up in the next few waypoints.
//! Leaving the drivable surface floors the reward to a small constant so
//! the agent always prefers staying on track.

use crate::angles::{circular_diff, segment_direction};
use crate::error::RewardError;
use crate::types::StepState;

/// Tuning constants for [`RewardEvaluator`], with the defaults the scoring
/// function ships with.
#[derive(Debug, Clone, Copy)]
pub struct RewardConfig {
    /// Heading error, in degrees, at which the direction term reaches
    /// zero. Default 50.
    pub heading_tolerance_deg: f64,
    /// Cumulative look-ahead turn, in degrees, beyond which the window
    /// counts as a corner. Default 30.
    pub turn_threshold_deg: f64,
    /// Divisor applied to the cumulative turn when computing the steering
    /// term of a corner. Default 1.5.
    pub turn_sensitivity: f64,
    /// Multiplier applied to the reward when a corner is ahead. Default
    /// 0.5.
    pub corner_speed_factor: f64,
    /// Number of upcoming waypoints considered by the curvature
    /// look-ahead. Default 5.
    pub look_ahead: usize,
    /// Reward returned once the vehicle leaves the drivable surface.
    /// Default 1e-3.
    pub off_track_reward: f64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            heading_tolerance_deg: 50.0,
            turn_threshold_deg: 30.0,
            turn_sensitivity: 1.5,
            corner_speed_factor: 0.5,
            look_ahead: 5,
            off_track_reward: 1e-3,
        }
    }
}

/// Scores how well a vehicle is following the racing line.
///
/// Stateless across calls: every evaluation is a function solely of its
/// input, so a single evaluator can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct RewardEvaluator {
    config: RewardConfig,
}

impl RewardEvaluator {
    /// Creates an evaluator with the default tuning constants.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RewardConfig::default())
    }

    /// Creates an evaluator with explicit tuning constants.
    #[must_use]
    pub const fn with_config(config: RewardConfig) -> Self {
        Self { config }
    }

    /// Returns the tuning constants in use.
    #[must_use]
    pub const fn config(&self) -> &RewardConfig {
        &self.config
    }

    /// Scores one simulation step.
    ///
    /// The reward is non-negative, and at most 1.0 whenever the vehicle is
    /// on the drivable surface.
    ///
    /// # Errors
    ///
    /// Returns a [`RewardError`] if the record violates the host contract:
    /// fewer than two waypoints, a closest-waypoint index out of bounds, a
    /// degenerate closest pair, or a non-positive track width.
    pub fn evaluate(&self, state: &StepState) -> Result<f64, RewardError> {
        validate(state)?;
        let cfg = &self.config;
        let [prev_idx, next_idx] = state.closest_waypoints;

        // 1. Heading alignment against the local track direction
        let track_direction =
            segment_direction(state.waypoints[prev_idx], state.waypoints[next_idx]);
        let direction_diff = circular_diff(track_direction, state.heading);
        let direction_penalty = (1.0 - direction_diff / cfg.heading_tolerance_deg).max(0.0);

        // 2. Lateral offset from the centerline
        let half_width = state.track_width / 2.0;
        let distance_penalty = (1.0 - state.distance_from_center / half_width).max(0.0);

        // 3. Curvature look-ahead over the upcoming segments
        let cumulative_turn = self.look_ahead_turn(&state.waypoints, next_idx);
        let (steering_adjustment, speed_adjustment) = if cumulative_turn > cfg.turn_threshold_deg {
            (
                (cumulative_turn / cfg.turn_sensitivity).min(1.0),
                cfg.corner_speed_factor,
            )
        } else {
            (1.0, 1.0)
        };

        // 4. Compose, then floor the reward once the vehicle has left the surface
        let mut reward =
            direction_penalty * distance_penalty * steering_adjustment * speed_adjustment;
        if state.distance_from_center >= half_width {
            reward = cfg.off_track_reward;
        }

        tracing::trace!(
            "step reward {reward:.4} (direction {direction_penalty:.3}, distance {distance_penalty:.3}, turn ahead {cumulative_turn:.1} deg)"
        );

        Ok(reward)
    }

    /// Total angular change, in degrees, across the look-ahead window
    /// starting at waypoint `start`.
    ///
    /// The window is truncated at the end of the track without wrapping; a
    /// window of two points or fewer measures no turn.
    fn look_ahead_turn(&self, waypoints: &[[f64; 2]], start: usize) -> f64 {
        let end = (start + self.config.look_ahead).min(waypoints.len());
        let window = &waypoints[start..end];

        let mut cumulative_turn = 0.0;
        let mut previous_direction = None;
        for pair in window.windows(2) {
            let direction = segment_direction(pair[0], pair[1]);
            // The first segment only seeds the comparison.
            if let Some(previous) = previous_direction {
                cumulative_turn += circular_diff(direction, previous);
            }
            previous_direction = Some(direction);
        }
        cumulative_turn
    }
}

fn validate(state: &StepState) -> Result<(), RewardError> {
    let len = state.waypoints.len();
    if len < 2 {
        return Err(RewardError::TooFewWaypoints(len));
    }
    for index in state.closest_waypoints {
        if index >= len {
            return Err(RewardError::WaypointOutOfBounds { index, len });
        }
    }
    if state.closest_waypoints[0] == state.closest_waypoints[1] {
        return Err(RewardError::DegenerateClosestPair(state.closest_waypoints[0]));
    }
    if !state.track_width.is_finite() || state.track_width <= 0.0 {
        return Err(RewardError::InvalidTrackWidth(state.track_width));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_track() -> Vec<[f64; 2]> {
        (0..6).map(|i| [f64::from(i), 0.0]).collect()
    }

    #[test]
    fn straight_window_measures_no_turn() {
        let evaluator = RewardEvaluator::new();
        assert!(evaluator.look_ahead_turn(&straight_track(), 2).abs() < f64::EPSILON);
    }

    #[test]
    fn window_truncates_at_track_end() {
        let evaluator = RewardEvaluator::new();
        // A window holding a single waypoint has no segments at all.
        assert!(evaluator.look_ahead_turn(&straight_track(), 5).abs() < f64::EPSILON);
        // Two points give one segment, which only seeds the comparison.
        assert!(evaluator.look_ahead_turn(&straight_track(), 4).abs() < f64::EPSILON);
    }

    #[test]
    fn right_angle_window_measures_ninety_degrees() {
        let evaluator = RewardEvaluator::new();
        let corner = [[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [2.0, 1.0], [2.0, 2.0]];
        let turn = evaluator.look_ahead_turn(&corner, 0);
        assert!((turn - 90.0).abs() < 1e-9, "turn={turn}");
    }

    #[test]
    fn coincident_window_points_measure_no_turn() {
        let evaluator = RewardEvaluator::new();
        // Repeated points degenerate every segment direction to 0 deg.
        let stalled = [[1.0, 1.0]; 5];
        assert!(evaluator.look_ahead_turn(&stalled, 0).abs() < f64::EPSILON);
    }
}
