use std::fmt;

// ---------------------------------------------------------------------------
// Observation – one (independent variable, mean reaction time) pair
// ---------------------------------------------------------------------------

/// A single measurement: the experimental condition and the mean reaction
/// time recorded for it. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    independent_var: f64,
    mean: f64,
}

impl Observation {
    /// Build an observation from integer or decimal literals; both fields
    /// are widened to `f64`.
    pub fn new(independent_var: impl Into<f64>, mean: impl Into<f64>) -> Self {
        Self {
            independent_var: independent_var.into(),
            mean: mean.into(),
        }
    }

    pub fn independent_var(&self) -> f64 {
        self.independent_var
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// `[x, y]` as consumed by the plot and the fitter.
    pub fn as_point(&self) -> [f64; 2] {
        [self.independent_var(), self.mean()]
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:.2})", self.independent_var, self.mean)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the combined, ordered observation table
// ---------------------------------------------------------------------------

/// Ordered sequence of observations. Order is the concatenation order of
/// the source tables and is never changed afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    observations: Vec<Observation>,
}

impl Dataset {
    pub fn from_observations(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn get(&self, idx: usize) -> Option<&Observation> {
        self.observations.get(idx)
    }

    pub fn points(&self) -> Vec<[f64; 2]> {
        self.observations.iter().map(Observation::as_point).collect()
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_literals_widen_to_f64() {
        let obs = Observation::new(-30, 475.75);
        assert_eq!(obs.independent_var(), -30.0);
        assert_eq!(obs.mean(), 475.75);

        let from_ints = Observation::new(15i16, 400i32);
        assert_eq!(from_ints.as_point(), [15.0, 400.0]);
    }

    #[test]
    fn display_rounds_mean() {
        assert_eq!(Observation::new(0, 428.333).to_string(), "(0, 428.33)");
    }

    #[test]
    fn empty_dataset() {
        let ds = Dataset::default();
        assert!(ds.is_empty());
        assert_eq!(ds.len(), 0);
        assert!(ds.get(0).is_none());
    }
}
