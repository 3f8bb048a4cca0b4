use crate::utils::vector2d::Vector2D;

/// Snapshot of the point mass at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub time: f64,
}

impl State {
    /// State at `t = 0`.
    pub fn new(position: Vector2D, velocity: Vector2D) -> Self {
        State {
            position,
            velocity,
            time: 0.0,
        }
    }

    /// 1D motion along the vertical axis.
    pub fn vertical(position: f64, velocity: f64) -> Self {
        State::new(Vector2D::new(0.0, position), Vector2D::new(0.0, velocity))
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }
}

/// How the per-sample velocities of a trajectory were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VelocitySource {
    /// Velocity is part of the integrated state.
    Integrated,
    /// Velocity is only an estimate; interior samples are read back as
    /// central differences of the stored positions.
    Reconstructed,
}

/// Ordered samples of a single run, indexed by step number.
///
/// Samples are only appended by the simulator that owns the run; once it is
/// handed out the trajectory is read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    samples: Vec<State>,
    velocity_source: VelocitySource,
}

impl Trajectory {
    pub(crate) fn new(initial: State, velocity_source: VelocitySource) -> Self {
        Trajectory {
            samples: vec![initial],
            velocity_source,
        }
    }

    /// Builds a trajectory from already computed samples.
    #[cfg(test)]
    pub(crate) fn from_samples(samples: Vec<State>, velocity_source: VelocitySource) -> Self {
        Trajectory {
            samples,
            velocity_source,
        }
    }

    pub(crate) fn push(&mut self, state: State) {
        self.samples.push(state);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[State] {
        &self.samples
    }

    pub fn get(&self, index: usize) -> Option<&State> {
        self.samples.get(index)
    }

    pub fn first(&self) -> Option<&State> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&State> {
        self.samples.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, State> {
        self.samples.iter()
    }

    pub fn velocity_source(&self) -> VelocitySource {
        self.velocity_source
    }

    /// Velocity at sample `index`.
    ///
    /// For reconstructed trajectories interior samples use the central
    /// difference `(x[i+1] - x[i-1]) / (t[i+1] - t[i-1])`; the end points
    /// fall back to the stored estimate.
    pub fn velocity_at(&self, index: usize) -> Option<Vector2D> {
        let sample = self.samples.get(index)?;

        match self.velocity_source {
            VelocitySource::Integrated => Some(sample.velocity),
            VelocitySource::Reconstructed => {
                if index == 0 || index + 1 >= self.samples.len() {
                    return Some(sample.velocity);
                }
                let before = &self.samples[index - 1];
                let after = &self.samples[index + 1];
                let span = after.time - before.time;
                Some((after.position - before.position) / span)
            }
        }
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time).collect()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.position.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.position.y).collect()
    }

    pub fn speeds(&self) -> Vec<f64> {
        (0..self.samples.len())
            .filter_map(|i| self.velocity_at(i))
            .map(|v| v.magnitude())
            .collect()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a State;
    type IntoIter = std::slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
