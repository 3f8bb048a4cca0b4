use crate::{
    config::SimulationConfig,
    errors::SimulationError,
    flight_analysis::analytical::{max_abs_error, vertical_error_series},
    trajectory_system::{force_model::ForceModel, kinematics::Integrator, trajectory::State},
};

use super::simulator::{SimulationRun, StopCondition, Simulator};

/// Vertical free fall run for a fixed duration and compared against the
/// closed-form solution.
#[derive(Debug, Clone, Copy)]
pub struct FreeFallStudy {
    pub initial_position: f64,
    pub initial_velocity: f64,
    pub gravity: f64,
    pub duration: f64,
}

#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub integrator: Integrator,
    pub time_step: f64,
    pub run: SimulationRun,
    pub errors: Vec<f64>,
    pub max_error: f64,
}

impl FreeFallStudy {
    pub fn run(&self, integrator: Integrator, time_step: f64) -> Result<ErrorReport, SimulationError> {
        let config = SimulationConfig::new(self.gravity, time_step, self.duration)?;
        let run = Simulator::new(config, ForceModel::Gravity, integrator)?
            .with_stop_condition(StopCondition::HardCapOnly)
            .run(State::vertical(self.initial_position, self.initial_velocity));

        let errors = vertical_error_series(
            &run.trajectory,
            self.initial_position,
            self.initial_velocity,
            self.gravity,
        );
        let max_error = max_abs_error(&errors);

        Ok(ErrorReport {
            integrator,
            time_step,
            run,
            errors,
            max_error,
        })
    }

    /// One report per time step, in the order given.
    pub fn sweep(
        &self,
        integrator: Integrator,
        time_steps: &[f64],
    ) -> Result<Vec<ErrorReport>, SimulationError> {
        time_steps
            .iter()
            .map(|&dt| self.run(integrator, dt))
            .collect()
    }
}
