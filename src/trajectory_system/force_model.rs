use crate::{config::SimulationConfig, utils::vector2d::Vector2D};

/// Acceleration law acting on the point mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceModel {
    /// Constant downward gravity, independent of velocity.
    Gravity,
    /// Gravity plus drag of magnitude `k·|v|²` directed against the velocity.
    QuadraticDrag,
}

impl ForceModel {
    pub fn acceleration(&self, velocity: Vector2D, config: &SimulationConfig) -> Vector2D {
        let gravity = Self::calculate_gravity(config);

        match self {
            ForceModel::Gravity => gravity,
            ForceModel::QuadraticDrag => {
                gravity + Self::calculate_drag(velocity, config.drag_coefficient)
            }
        }
    }

    fn calculate_gravity(config: &SimulationConfig) -> Vector2D {
        Vector2D::new(0.0, -config.gravity)
    }

    fn calculate_drag(velocity: Vector2D, drag_coefficient: f64) -> Vector2D {
        let speed = velocity.magnitude();
        -velocity * (drag_coefficient * speed)
    }
}
