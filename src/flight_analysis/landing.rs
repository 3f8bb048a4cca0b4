use crate::trajectory_system::trajectory::{State, Trajectory};

/// Interpolated touchdown point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LandingEstimate {
    pub x: f64,
    pub t: f64,
}

/// Linear interpolation of the ground crossing between the last two samples.
///
/// Motion between the two samples is treated as a straight line, so the
/// estimate loses accuracy as the time step grows. A trajectory with fewer
/// than two samples yields `(0, 0)`; callers that need to tell "no landing
/// observed" apart from a zero-range flight must check the sample count.
pub fn estimate_landing(trajectory: &Trajectory) -> LandingEstimate {
    match trajectory.samples() {
        [.., before, after] => interpolate_crossing(before, after),
        _ => LandingEstimate::default(),
    }
}

pub fn interpolate_crossing(before: &State, after: &State) -> LandingEstimate {
    let (t1, x1, y1) = (before.time, before.position.x, before.position.y);
    let (t2, x2, y2) = (after.time, after.position.x, after.position.y);

    if y1 == y2 {
        return LandingEstimate { x: x2, t: t2 };
    }

    // Clamped so same-signed samples never extrapolate outside the window.
    let alpha = crossing_fraction(y1, y2);

    LandingEstimate {
        x: x1 + alpha * (x2 - x1),
        t: t1 + alpha * (t2 - t1),
    }
}

/// Fraction of the way from `y1` to `y2` at which `y = 0`, clamped to `[0, 1]`.
pub fn crossing_fraction(y1: f64, y2: f64) -> f64 {
    ((0.0 - y1) / (y2 - y1)).clamp(0.0, 1.0)
}
