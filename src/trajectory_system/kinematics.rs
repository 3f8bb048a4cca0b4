use crate::{config::SimulationConfig, utils::vector2d::Vector2D};

use super::{force_model::ForceModel, trajectory::State, trajectory::VelocitySource};

/// Fixed-step update rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Integrator {
    /// Symplectic ordering: velocity first, then position with the updated
    /// velocity. First order.
    ExplicitEuler,
    /// Position advanced with the velocity from before the update. First
    /// order, drifts the opposite way from [`Integrator::ExplicitEuler`].
    ForwardEuler,
    /// Two-point position recurrence without velocity state. Second order.
    Verlet,
}

impl Integrator {
    pub fn velocity_source(&self) -> VelocitySource {
        match self {
            Integrator::ExplicitEuler | Integrator::ForwardEuler => VelocitySource::Integrated,
            Integrator::Verlet => VelocitySource::Reconstructed,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Integrator::ExplicitEuler => "explicit Euler",
            Integrator::ForwardEuler => "forward Euler",
            Integrator::Verlet => "Verlet",
        }
    }
}

/// Mutable stepping state of one run.
#[derive(Debug)]
pub struct Kinematics {
    integrator: Integrator,
    state: State,
    // Verlet only: the sample before `state`.
    previous_position: Option<Vector2D>,
}

impl Kinematics {
    pub fn new(initial: State, integrator: Integrator) -> Self {
        Kinematics {
            integrator,
            state: initial,
            previous_position: None,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Advances by one step of `config.time_step` and returns the new state.
    pub fn update(&mut self, force_model: &ForceModel, config: &SimulationConfig) -> State {
        let delta_time = config.time_step;
        let acceleration = force_model.acceleration(self.state.velocity, config);

        let (position, velocity) = match self.integrator {
            Integrator::ExplicitEuler => {
                let velocity = self.state.velocity + acceleration * delta_time;
                let position = self.state.position + velocity * delta_time;
                (position, velocity)
            }
            Integrator::ForwardEuler => {
                let position = self.state.position + self.state.velocity * delta_time;
                let velocity = self.state.velocity + acceleration * delta_time;
                (position, velocity)
            }
            Integrator::Verlet => self.verlet_step(acceleration, delta_time),
        };

        self.state = State {
            position,
            velocity,
            time: self.state.time + delta_time,
        };
        self.state
    }

    fn verlet_step(&mut self, acceleration: Vector2D, delta_time: f64) -> (Vector2D, Vector2D) {
        let current = self.state.position;
        let dt_squared = delta_time * delta_time;

        let next = match self.previous_position {
            // Second-order Taylor start
            None => current + self.state.velocity * delta_time + 0.5 * acceleration * dt_squared,
            Some(previous) => 2.0 * current - previous + acceleration * dt_squared,
        };
        self.previous_position = Some(current);

        // Estimate at `next`, only used to evaluate the force model.
        let velocity = (next - current) / delta_time + 0.5 * acceleration * delta_time;
        (next, velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-12;

    fn config(dt: f64) -> SimulationConfig {
        SimulationConfig::new(9.81, dt, 10.0).expect("valid configuration")
    }

    #[test]
    fn test_explicit_euler_uses_updated_velocity() {
        let mut kinematics = Kinematics::new(State::vertical(0.0, 10.0), Integrator::ExplicitEuler);
        let next = kinematics.update(&ForceModel::Gravity, &config(0.1));

        let expected_velocity = 10.0 - 9.81 * 0.1;
        assert_relative_eq!(next.velocity.y, expected_velocity, epsilon = EPSILON);
        assert_relative_eq!(next.position.y, expected_velocity * 0.1, epsilon = EPSILON);
        assert_relative_eq!(next.time, 0.1, epsilon = EPSILON);
    }

    #[test]
    fn test_forward_euler_uses_previous_velocity() {
        let mut kinematics = Kinematics::new(State::vertical(0.0, 10.0), Integrator::ForwardEuler);
        let next = kinematics.update(&ForceModel::Gravity, &config(0.1));

        assert_relative_eq!(next.position.y, 1.0, epsilon = EPSILON);
        assert_relative_eq!(next.velocity.y, 10.0 - 0.981, epsilon = EPSILON);
    }

    #[test]
    fn test_verlet_bootstrap_is_taylor_step() {
        let mut kinematics = Kinematics::new(State::vertical(0.0, 10.0), Integrator::Verlet);
        let first = kinematics.update(&ForceModel::Gravity, &config(0.1));

        assert_relative_eq!(
            first.position.y,
            10.0 * 0.1 - 0.5 * 9.81 * 0.01,
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_verlet_recurrence() {
        let dt = 0.1;
        let mut kinematics = Kinematics::new(State::vertical(2.0, 10.0), Integrator::Verlet);
        let x0 = kinematics.state().position.y;
        let x1 = kinematics.update(&ForceModel::Gravity, &config(dt)).position.y;
        let x2 = kinematics.update(&ForceModel::Gravity, &config(dt)).position.y;

        assert_relative_eq!(x2, 2.0 * x1 - x0 - 9.81 * dt * dt, epsilon = EPSILON);
    }

    #[test]
    fn test_verlet_is_exact_for_constant_gravity() {
        let dt = 0.05;
        let mut kinematics = Kinematics::new(
            State::new(Vector2D::ZERO, Vector2D::new(4.0, 10.0)),
            Integrator::Verlet,
        );

        let mut state = *kinematics.state();
        for _ in 0..40 {
            state = kinematics.update(&ForceModel::Gravity, &config(dt));
        }

        let t = state.time;
        assert_relative_eq!(state.position.x, 4.0 * t, epsilon = 1e-9);
        assert_relative_eq!(state.position.y, 10.0 * t - 0.5 * 9.81 * t * t, epsilon = 1e-9);
        assert_relative_eq!(state.velocity.y, 10.0 - 9.81 * t, epsilon = 1e-9);
    }

    #[test]
    fn test_time_is_accumulated() {
        let mut kinematics = Kinematics::new(State::vertical(0.0, 0.0), Integrator::ExplicitEuler);
        let mut accumulated: f64 = 0.0;
        for _ in 0..10 {
            accumulated += 0.1;
            let state = kinematics.update(&ForceModel::Gravity, &config(0.1));
            assert_eq!(state.time.to_bits(), accumulated.to_bits());
        }
    }

    #[test]
    fn test_euler_energy_drift_directions() {
        // Over a full free-fall both orderings bracket the exact solution.
        let dt = 0.01;
        let mut symplectic =
            Kinematics::new(State::vertical(0.0, 10.0), Integrator::ExplicitEuler);
        let mut forward = Kinematics::new(State::vertical(0.0, 10.0), Integrator::ForwardEuler);

        for _ in 0..100 {
            symplectic.update(&ForceModel::Gravity, &config(dt));
            forward.update(&ForceModel::Gravity, &config(dt));
        }

        let t = symplectic.state().time;
        let exact = 10.0 * t - 0.5 * 9.81 * t * t;
        assert!(symplectic.state().position.y < exact);
        assert!(forward.state().position.y > exact);
    }

    #[test]
    fn test_velocity_sources() {
        assert_eq!(
            Integrator::ExplicitEuler.velocity_source(),
            VelocitySource::Integrated
        );
        assert_eq!(
            Integrator::Verlet.velocity_source(),
            VelocitySource::Reconstructed
        );
    }
}
