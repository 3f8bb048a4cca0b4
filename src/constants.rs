// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²

// Aerodynamic Constants
pub const NO_DRAG: f64 = 0.0; // 1/m
pub const QUADRATIC_DRAG_COEFFICIENT: f64 = 0.020; // 1/m

// Simulation Parameters
pub const TIME_STEP: f64 = 0.002; // s
pub const MAX_SIMULATION_TIME: f64 = 20.0; // s (safety cap)

// Launch Defaults
pub const LAUNCH_SPEED: f64 = 25.0; // m/s
pub const LAUNCH_ANGLE: f64 = 45.0; // degrees

// Free-fall study
pub const FREE_FALL_INITIAL_POSITION: f64 = 0.0; // m
pub const FREE_FALL_INITIAL_VELOCITY: f64 = 10.0; // m/s
pub const FREE_FALL_TIME_STEP: f64 = 0.01; // s
pub const FREE_FALL_DURATION: f64 = 2.0; // s
