use crate::{
    config::SimulationConfig,
    errors::SimulationError,
    trajectory_system::{
        force_model::ForceModel,
        kinematics::{Integrator, Kinematics},
        trajectory::{State, Trajectory},
    },
};

/// Which condition ended a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    HardCap,
    GroundCrossing,
}

/// Stopping predicate applied after the hard cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopCondition {
    /// Stop on the first sample below `y = 0`, skipping the first step.
    #[default]
    GroundCrossing,
    /// Run until `t_max`.
    HardCapOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    Running,
    Terminated(StopReason),
}

/// Outcome of one run: the samples and why sampling stopped.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRun {
    pub trajectory: Trajectory,
    pub stop_reason: StopReason,
    pub steps: usize,
}

#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimulationConfig,
    force_model: ForceModel,
    integrator: Integrator,
    stop_condition: StopCondition,
}

impl Simulator {
    pub fn new(
        config: SimulationConfig,
        force_model: ForceModel,
        integrator: Integrator,
    ) -> Result<Self, SimulationError> {
        config.validate()?;

        Ok(Simulator {
            config,
            force_model,
            integrator,
            stop_condition: StopCondition::default(),
        })
    }

    pub fn with_stop_condition(mut self, stop_condition: StopCondition) -> Self {
        self.stop_condition = stop_condition;
        self
    }

    /// Integrates from `initial` until a stop condition fires.
    ///
    /// The initial state's time is reset to zero. The step that trips a stop
    /// condition is recorded, so a ground-crossing run always ends with one
    /// sample at or below the ground plane.
    pub fn run(&self, initial: State) -> SimulationRun {
        let initial = State::new(initial.position, initial.velocity);
        let mut kinematics = Kinematics::new(initial, self.integrator);
        let mut trajectory = Trajectory::new(initial, self.integrator.velocity_source());
        let mut steps = 0;

        let stop_reason = loop {
            let state = kinematics.update(&self.force_model, &self.config);
            steps += 1;
            trajectory.push(state);

            if let SimulationState::Terminated(reason) = self.evaluate(&state) {
                break reason;
            }
        };

        SimulationRun {
            trajectory,
            stop_reason,
            steps,
        }
    }

    fn evaluate(&self, state: &State) -> SimulationState {
        if state.time >= self.config.max_time {
            return SimulationState::Terminated(StopReason::HardCap);
        }

        match self.stop_condition {
            // `time > dt` only masks the very first step; a start below
            // ground that takes longer to rise is still reported.
            StopCondition::GroundCrossing
                if state.position.y < 0.0 && state.time > self.config.time_step =>
            {
                SimulationState::Terminated(StopReason::GroundCrossing)
            }
            _ => SimulationState::Running,
        }
    }
}
