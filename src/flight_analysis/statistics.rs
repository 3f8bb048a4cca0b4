use crate::trajectory_system::trajectory::Trajectory;

use super::landing::estimate_landing;

/// Scalar summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlightStats {
    pub range: f64,       // m
    pub flight_time: f64, // s
    pub max_height: f64,  // m
    pub max_speed: f64,   // m/s
}

impl FlightStats {
    pub fn from_trajectory(trajectory: &Trajectory) -> Self {
        if trajectory.is_empty() {
            return FlightStats::default();
        }

        let landing = estimate_landing(trajectory);

        let max_height = trajectory
            .iter()
            .map(|sample| sample.position.y)
            .fold(f64::NEG_INFINITY, f64::max);

        let max_speed = trajectory
            .speeds()
            .into_iter()
            .fold(f64::NEG_INFINITY, f64::max);

        FlightStats {
            range: landing.x,
            flight_time: landing.t,
            max_height,
            max_speed,
        }
    }
}
