use super::model::{Dataset, Observation};

// ---------------------------------------------------------------------------
// Literal source tables
// ---------------------------------------------------------------------------

/// First session: eccentricity (degrees) → mean reaction time (ms).
pub const SESSION_A: [(i32, f64); 5] = [
    (-30, 475.75),
    (-15, 410.15),
    (0, 428.33),
    (15, 359.82),
    (30, 396.25),
];

/// Second session, sampled on a finer eccentricity grid.
pub const SESSION_B: [(i32, f64); 7] = [
    (-30, 494.50),
    (-20, 463.29),
    (-10, 429.29),
    (0, 433.56),
    (10, 370.50),
    (20, 421.83),
    (30, 505.38),
];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Concatenate two literal tables into one dataset: `first` then `second`,
/// each in listing order. Rows are neither merged nor reordered.
pub fn assemble<X, Y>(first: &[(X, Y)], second: &[(X, Y)]) -> Dataset
where
    X: Copy + Into<f64>,
    Y: Copy + Into<f64>,
{
    let observations = first
        .iter()
        .chain(second.iter())
        .map(|&(x, y)| Observation::new(x, y))
        .collect();
    Dataset::from_observations(observations)
}

/// The fixed dataset shown by the viewer.
pub fn reaction_time_dataset() -> Dataset {
    assemble(&SESSION_A, &SESSION_B)
}
