use crate::constants::{GRAVITY, MAX_SIMULATION_TIME, NO_DRAG, TIME_STEP};
use crate::errors::SimulationError;

/// Per-run constants. Checked by [`validate`](Self::validate) before a
/// [`Simulator`](crate::Simulator) is built from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub gravity: f64,          // m/s², downward
    pub drag_coefficient: f64, // 1/m
    pub time_step: f64,        // s
    pub max_time: f64,         // s
}

impl SimulationConfig {
    /// Drag-free configuration.
    pub fn new(gravity: f64, time_step: f64, max_time: f64) -> Result<Self, SimulationError> {
        let config = SimulationConfig {
            gravity,
            drag_coefficient: NO_DRAG,
            time_step,
            max_time,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_drag(self, drag_coefficient: f64) -> Result<Self, SimulationError> {
        let config = SimulationConfig {
            drag_coefficient,
            ..self
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_time_step(self, time_step: f64) -> Result<Self, SimulationError> {
        let config = SimulationConfig { time_step, ..self };
        config.validate()?;
        Ok(config)
    }

    pub fn with_max_time(self, max_time: f64) -> Result<Self, SimulationError> {
        let config = SimulationConfig { max_time, ..self };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "gravity must be positive and finite, got {}",
                self.gravity
            )));
        }
        if !self.drag_coefficient.is_finite() || self.drag_coefficient < 0.0 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "drag coefficient must be non-negative and finite, got {}",
                self.drag_coefficient
            )));
        }
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "time step must be positive and finite, got {}",
                self.time_step
            )));
        }
        if !self.max_time.is_finite() || self.max_time <= 0.0 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "maximum simulation time must be positive and finite, got {}",
                self.max_time
            )));
        }

        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            gravity: GRAVITY,
            drag_coefficient: NO_DRAG,
            time_step: TIME_STEP,
            max_time: MAX_SIMULATION_TIME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.gravity, GRAVITY);
        assert_eq!(config.drag_coefficient, 0.0);
    }

    #[test]
    fn test_rejects_non_positive_time_step() {
        for dt in [0.0, -0.01, f64::NAN, f64::INFINITY] {
            let result = SimulationConfig::new(GRAVITY, dt, 2.0);
            assert!(
                matches!(result, Err(SimulationError::InvalidConfiguration(_))),
                "time step {} should be rejected",
                dt
            );
        }
    }

    #[test]
    fn test_rejects_non_positive_max_time() {
        assert!(matches!(
            SimulationConfig::new(GRAVITY, 0.01, 0.0),
            Err(SimulationError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            SimulationConfig::default().with_max_time(-1.0),
            Err(SimulationError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_rejects_negative_drag() {
        let result = SimulationConfig::default().with_drag(-0.01);
        match result {
            Err(SimulationError::InvalidConfiguration(message)) => {
                assert!(message.contains("drag coefficient"), "message: {}", message);
            }
            other => panic!("Expected invalid configuration, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_non_positive_gravity() {
        assert!(SimulationConfig::new(0.0, 0.01, 2.0).is_err());
        assert!(SimulationConfig::new(-9.81, 0.01, 2.0).is_err());
    }

    #[test]
    fn test_rejects_non_finite_values() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(SimulationConfig::new(value, 0.01, 2.0).is_err(), "gravity {}", value);
            assert!(SimulationConfig::new(GRAVITY, 0.01, value).is_err(), "max time {}", value);
            assert!(SimulationConfig::default().with_drag(value).is_err(), "drag {}", value);
        }
    }

    #[test]
    fn test_struct_literal_is_checked_by_validate() {
        let config = SimulationConfig {
            time_step: -0.001,
            ..SimulationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builders_keep_other_fields() {
        let config = SimulationConfig::new(9.81, 0.01, 5.0)
            .and_then(|c| c.with_drag(0.02))
            .and_then(|c| c.with_time_step(0.001))
            .expect("valid configuration");
        assert_eq!(config.gravity, 9.81);
        assert_eq!(config.drag_coefficient, 0.02);
        assert_eq!(config.time_step, 0.001);
        assert_eq!(config.max_time, 5.0);
    }
}
