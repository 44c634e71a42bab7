#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Raceline
//!
//! Deterministic racing-line scoring for a reinforcement-learning driving
//! simulator.
//!
//! The host simulator calls [`RewardEvaluator::evaluate`] once per
//! simulation step with the vehicle's instantaneous state relative to the
//! track, and receives a single non-negative scalar reward for the learning
//! agent to maximize. Every evaluation is a pure function of its input:
//! nothing is retained between calls, so one evaluator can be shared freely
//! across threads.
//!
//! ## Key Components
//!
//! -   **State:** [`StepState`] is the per-step record the host supplies —
//!     the track waypoints, the pair of closest waypoint indices, and the
//!     vehicle's heading, lateral offset, speed, and steering angle. It is
//!     defined in the [`types`] module and deserializes from the JSON
//!     object shape the host delivers.
//! -   **Scoring:** [`RewardEvaluator`] in the [`reward`] module combines
//!     heading alignment, lateral position, and a short curvature
//!     look-ahead into the final reward, with tuning constants collected
//!     in [`RewardConfig`].
//! -   **Angles:** the [`angles`] module holds the degree-based direction
//!     and circular-distance helpers the scoring stages share.
//!
//! ## Usage
//!
//! ```
//! use raceline::{RewardEvaluator, StepState};
//!
//! let state = StepState {
//!     waypoints: vec![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0]],
//!     closest_waypoints: [0, 1],
//!     heading: 0.0,
//!     distance_from_center: 0.0,
//!     track_width: 1.0,
//!     speed: 2.0,
//!     steering_angle: 0.0,
//! };
//!
//! let reward = RewardEvaluator::new().evaluate(&state).unwrap();
//! assert!((reward - 1.0).abs() < f64::EPSILON);
//! ```

pub mod angles;
pub mod error;
pub mod reward;
pub mod types;

pub use angles::{circular_diff, segment_direction};
pub use error::RewardError;
pub use reward::{RewardConfig, RewardEvaluator};
pub use types::StepState;
