use crate::control::comparison::Comparison;
use crate::control::simulator::{SimulationRun, StopReason};
use crate::flight_analysis::statistics::FlightStats;

/// Collects human-readable records of simulation runs and prints them.
#[derive(Debug, Default)]
pub struct Telemetry {
    pub log: Vec<String>,
    summaries: Vec<(String, FlightStats)>,
    error_studies: Vec<String>,
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry::default()
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_distance(distance: f64) -> String {
        if distance.abs() >= 1000.0 {
            format!("{:.2} km", distance / 1000.0)
        } else {
            format!("{:.2} m", distance)
        }
    }

    fn format_stop_reason(reason: StopReason) -> &'static str {
        match reason {
            StopReason::HardCap => "hard cap",
            StopReason::GroundCrossing => "ground crossing",
        }
    }

    /// `range=… m, flight time=…s, max height=… m`
    pub fn summary_line(stats: &FlightStats) -> String {
        format!(
            "range={}, flight time={}, max height={}",
            Self::format_distance(stats.range),
            Self::format_time(stats.flight_time),
            Self::format_distance(stats.max_height)
        )
    }

    pub fn collect_run(&mut self, label: &str, run: &SimulationRun, stats: &FlightStats) {
        let data = format!(
            "Run: {}\n\
                 Stopped by: {} after {} steps ({} samples)\n\
                 Range: {}\n\
                 Flight Time: {}\n\
                 Max Height: {}\n\
                 Max Speed: {:.2} m/s\n",
            label,
            Self::format_stop_reason(run.stop_reason),
            run.steps,
            run.trajectory.len(),
            Self::format_distance(stats.range),
            Self::format_time(stats.flight_time),
            Self::format_distance(stats.max_height),
            stats.max_speed
        );
        self.log.push(data);
        self.summaries.push((label.to_string(), *stats));
    }

    pub fn collect_comparison(&mut self, comparison: &Comparison) {
        for entry in comparison.entries() {
            self.collect_run(&entry.label, &entry.run, &entry.stats);
        }
    }

    /// Records the maximum absolute error of one scheme at one time step.
    pub fn collect_error_study(&mut self, scheme: &str, time_step: f64, max_error: f64) {
        self.error_studies.push(format!(
            "{:<16} dt={:<8} max |error| = {:.3e} m",
            scheme, time_step, max_error
        ));
    }

    pub fn display_data(&self) {
        println!("--- Telemetry Data ---");
        for entry in &self.log {
            println!("{}", entry);
        }
        println!("--- End of Telemetry ---");

        println!("\n=== RESULTS ===");
        for (label, stats) in &self.summaries {
            println!("{:<24} {}", format!("{}:", label), Self::summary_line(stats));
        }

        if !self.error_studies.is_empty() {
            println!("\n--- Integration Error ---");
            for line in &self.error_studies {
                println!("{}", line);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::control::simulator::Simulator;
    use crate::trajectory_system::{
        force_model::ForceModel, kinematics::Integrator, trajectory::State,
    };
    use crate::utils::vector2d::Vector2D;

    #[test]
    fn test_summary_line_uses_two_decimals() {
        let stats = FlightStats {
            range: 40.7747,
            flight_time: 2.88321,
            max_height: 10.1937,
            max_speed: 20.0,
        };

        assert_eq!(
            Telemetry::summary_line(&stats),
            "range=40.77 m, flight time=2.88s, max height=10.19 m"
        );
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(Telemetry::format_time(75.5), "1m 15.50s");
        assert_eq!(Telemetry::format_time(2.5), "2.50s");
        assert_eq!(Telemetry::format_distance(1500.0), "1.50 km");
        assert_eq!(Telemetry::format_stop_reason(StopReason::HardCap), "hard cap");
    }

    #[test]
    fn test_collect_run_logs_stop_reason() {
        let config = SimulationConfig::new(9.81, 0.01, 20.0).expect("valid configuration");
        let run = Simulator::new(config, ForceModel::Gravity, Integrator::ExplicitEuler)
            .expect("valid simulator")
            .run(State::new(Vector2D::ZERO, Vector2D::from_polar(20.0, 45.0)));
        let stats = FlightStats::from_trajectory(&run.trajectory);

        let mut telemetry = Telemetry::new();
        telemetry.collect_run("no drag", &run, &stats);
        telemetry.collect_error_study("Euler", 0.01, 0.0981);

        assert_eq!(telemetry.log.len(), 1);
        assert!(telemetry.log[0].contains("Run: no drag"));
        assert!(telemetry.log[0].contains("Stopped by: ground crossing"));
        assert_eq!(telemetry.summaries.len(), 1);
        assert_eq!(telemetry.error_studies.len(), 1);
    }
}
