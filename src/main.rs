use projectile_simulation::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let launch = LaunchConditions::new(LAUNCH_SPEED, LAUNCH_ANGLE);
    let no_drag = SimulationConfig::new(GRAVITY, TIME_STEP, MAX_SIMULATION_TIME)?;
    let quadratic_drag = no_drag.with_drag(QUADRATIC_DRAG_COEFFICIENT)?;

    let comparison = ComparisonHarness::new(launch.initial_state())
        .add_scenario(
            "No drag",
            Integrator::ExplicitEuler,
            ForceModel::Gravity,
            no_drag,
        )
        .add_scenario(
            format!("Quad drag k={:.3}", QUADRATIC_DRAG_COEFFICIENT),
            Integrator::ExplicitEuler,
            ForceModel::QuadraticDrag,
            quadratic_drag,
        )
        .run()?;

    let mut telemetry = Telemetry::new();
    telemetry.collect_comparison(&comparison);

    let reference = ProjectileSolution::new(LAUNCH_SPEED, LAUNCH_ANGLE, GRAVITY);
    println!(
        "Analytical (no drag): range={:.2} m, flight time={:.2}s, max height={:.2} m",
        reference.range, reference.flight_time, reference.max_height
    );

    let study = FreeFallStudy {
        initial_position: FREE_FALL_INITIAL_POSITION,
        initial_velocity: FREE_FALL_INITIAL_VELOCITY,
        gravity: GRAVITY,
        duration: FREE_FALL_DURATION,
    };
    let time_steps = [FREE_FALL_TIME_STEP * 10.0, FREE_FALL_TIME_STEP, FREE_FALL_TIME_STEP / 10.0];
    for integrator in [Integrator::ExplicitEuler, Integrator::Verlet] {
        for report in study.sweep(integrator, &time_steps)? {
            telemetry.collect_error_study(integrator.name(), report.time_step, report.max_error);
        }
    }

    telemetry.display_data();

    Ok(())
}
