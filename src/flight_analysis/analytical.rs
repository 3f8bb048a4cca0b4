//! Closed-form reference solutions for drag-free motion, and error series
//! of simulated trajectories against them.

use crate::trajectory_system::trajectory::{State, Trajectory};
use crate::utils::vector2d::Vector2D;

/// Launch from ground level (or `height`) at `speed` and `angle_deg` above
/// the horizontal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchConditions {
    pub speed: f64,     // m/s
    pub angle_deg: f64, // degrees
    pub height: f64,    // m
}

impl LaunchConditions {
    pub fn new(speed: f64, angle_deg: f64) -> Self {
        LaunchConditions {
            speed,
            angle_deg,
            height: 0.0,
        }
    }

    pub fn initial_state(&self) -> State {
        State::new(
            Vector2D::new(0.0, self.height),
            Vector2D::from_polar(self.speed, self.angle_deg),
        )
    }
}

/// `x(t) = x0 + v0·t − ½·g·t²`
pub fn free_fall_position(x0: f64, v0: f64, gravity: f64, t: f64) -> f64 {
    x0 + v0 * t - 0.5 * gravity * t * t
}

/// Exact drag-free projectile launched from the ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileSolution {
    pub angle_deg: f64,
    pub initial_velocity: Vector2D,
    pub gravity: f64,
    pub flight_time: f64,
    pub range: f64,
    pub max_height: f64,
}

impl ProjectileSolution {
    pub fn new(speed: f64, angle_deg: f64, gravity: f64) -> Self {
        let theta = angle_deg.to_radians();
        let initial_velocity = Vector2D::from_polar(speed, angle_deg);

        let flight_time = 2.0 * speed * theta.sin() / gravity;
        let range = initial_velocity.x * flight_time;
        let max_height = (speed * theta.sin()).powi(2) / (2.0 * gravity);

        ProjectileSolution {
            angle_deg,
            initial_velocity,
            gravity,
            flight_time,
            range,
            max_height,
        }
    }

    /// One solution per launch angle, same speed.
    pub fn sweep(speed: f64, angles_deg: &[f64], gravity: f64) -> Vec<ProjectileSolution> {
        angles_deg
            .iter()
            .map(|&angle| ProjectileSolution::new(speed, angle, gravity))
            .collect()
    }

    pub fn position_at(&self, t: f64) -> Vector2D {
        Vector2D::new(
            self.initial_velocity.x * t,
            free_fall_position(0.0, self.initial_velocity.y, self.gravity, t),
        )
    }

    /// `points` evenly spaced `(t, position)` pairs covering the whole flight.
    pub fn sample(&self, points: usize) -> Vec<(f64, Vector2D)> {
        let points = points.max(2);
        let last = (points - 1) as f64;

        (0..points)
            .map(|i| {
                let t = self.flight_time * i as f64 / last;
                (t, self.position_at(t))
            })
            .collect()
    }
}

/// `|y_i − y_exact(t_i)|` for every sample, where `y_exact` is free fall
/// from `y0` with initial vertical velocity `vy0`.
pub fn vertical_error_series(trajectory: &Trajectory, y0: f64, vy0: f64, gravity: f64) -> Vec<f64> {
    trajectory
        .iter()
        .map(|sample| (sample.position.y - free_fall_position(y0, vy0, gravity, sample.time)).abs())
        .collect()
}

pub fn max_abs_error(errors: &[f64]) -> f64 {
    errors.iter().copied().fold(0.0, f64::max)
}
