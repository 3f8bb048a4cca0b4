pub mod config;
pub mod constants;
pub mod control;
pub mod errors;
pub mod flight_analysis;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use config::SimulationConfig;
pub use constants::*;
pub use control::comparison::{Comparison, ComparisonEntry, ComparisonHarness};
pub use control::error_study::{ErrorReport, FreeFallStudy};
pub use control::simulator::{SimulationRun, Simulator, StopCondition, StopReason};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::force_model::ForceModel;
pub use trajectory_system::kinematics::Integrator;
pub use trajectory_system::trajectory::{State, Trajectory, VelocitySource};

// Re-export commonly used items from flight_analysis
pub use flight_analysis::analytical::{LaunchConditions, ProjectileSolution};
pub use flight_analysis::landing::{estimate_landing, LandingEstimate};
pub use flight_analysis::statistics::FlightStats;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Telemetry;

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;
