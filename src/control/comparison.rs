use crate::{
    config::SimulationConfig,
    errors::SimulationError,
    flight_analysis::statistics::FlightStats,
    trajectory_system::{force_model::ForceModel, kinematics::Integrator, trajectory::State},
};

use super::simulator::{SimulationRun, Simulator};

/// One labelled configuration of a comparison.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub label: String,
    pub integrator: Integrator,
    pub force_model: ForceModel,
    pub config: SimulationConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonEntry {
    pub label: String,
    pub run: SimulationRun,
    pub stats: FlightStats,
}

/// Runs several configurations from the same initial state.
#[derive(Debug, Clone)]
pub struct ComparisonHarness {
    initial_state: State,
    scenarios: Vec<Scenario>,
}

impl ComparisonHarness {
    pub fn new(initial_state: State) -> Self {
        ComparisonHarness {
            initial_state,
            scenarios: Vec::new(),
        }
    }

    pub fn add_scenario(
        mut self,
        label: impl Into<String>,
        integrator: Integrator,
        force_model: ForceModel,
        config: SimulationConfig,
    ) -> Self {
        self.scenarios.push(Scenario {
            label: label.into(),
            integrator,
            force_model,
            config,
        });
        self
    }

    /// Runs every scenario in insertion order. All configurations are
    /// validated before the first run starts.
    pub fn run(&self) -> Result<Comparison, SimulationError> {
        if self.scenarios.len() < 2 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "a comparison needs at least two scenarios, got {}",
                self.scenarios.len()
            )));
        }

        let mut simulators = Vec::with_capacity(self.scenarios.len());
        for (index, scenario) in self.scenarios.iter().enumerate() {
            if self.scenarios[..index]
                .iter()
                .any(|earlier| earlier.label == scenario.label)
            {
                return Err(SimulationError::DuplicateLabel(scenario.label.clone()));
            }
            simulators.push(Simulator::new(
                scenario.config,
                scenario.force_model,
                scenario.integrator,
            )?);
        }

        let entries = self
            .scenarios
            .iter()
            .zip(simulators)
            .map(|(scenario, simulator)| {
                let run = simulator.run(self.initial_state);
                let stats = FlightStats::from_trajectory(&run.trajectory);
                ComparisonEntry {
                    label: scenario.label.clone(),
                    run,
                    stats,
                }
            })
            .collect();

        Ok(Comparison { entries })
    }
}

/// Results keyed by scenario label, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    entries: Vec<ComparisonEntry>,
}

impl Comparison {
    pub fn get(&self, label: &str) -> Option<&ComparisonEntry> {
        self.entries.iter().find(|entry| entry.label == label)
    }

    pub fn entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
