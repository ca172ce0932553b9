use std::fmt;

use super::model::{Dataset, Observation};

/// Boundary between the two regression groups.
pub const BOUNDARY_THRESHOLD: f64 = 0.0;

// ---------------------------------------------------------------------------
// Side of the boundary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// `x <= threshold`
    AtOrBelow,
    /// `x > threshold`
    Above,
}

impl Side {
    pub fn of(x: f64, threshold: f64) -> Self {
        if x <= threshold {
            Side::AtOrBelow
        } else {
            Side::Above
        }
    }

    /// Legend label for the fit drawn on this side.
    pub fn fit_label(self) -> &'static str {
        match self {
            Side::AtOrBelow => "Fit: <= 0",
            Side::Above => "Fit: > 0",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::AtOrBelow => write!(f, "≤ 0"),
            Side::Above => write!(f, "> 0"),
        }
    }
}

// ---------------------------------------------------------------------------
// Segment – an index view into the dataset
// ---------------------------------------------------------------------------

/// Observations on one side of the boundary, stored as indices into the
/// dataset so the segment stays a read-only view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    side: Side,
    indices: Vec<usize>,
}

impl Segment {
    pub fn side(&self) -> Side {
        self.side
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Observations of this segment in dataset order.
    pub fn observations<'a>(
        &'a self,
        dataset: &'a Dataset,
    ) -> impl Iterator<Item = &'a Observation> + 'a {
        self.indices.iter().filter_map(|&i| dataset.get(i))
    }

    pub fn points(&self, dataset: &Dataset) -> Vec<[f64; 2]> {
        self.observations(dataset).map(Observation::as_point).collect()
    }
}

/// The two segments produced from one dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    pub le: Segment,
    pub gt: Segment,
}

/// Split `dataset` at `threshold`, keeping dataset order within each side.
/// Every observation lands in exactly one segment.
pub fn segment(dataset: &Dataset, threshold: f64) -> Segments {
    let (le, gt): (Vec<usize>, Vec<usize>) = (0..dataset.len()).partition(|&i| {
        Side::of(dataset.observations()[i].independent_var(), threshold) == Side::AtOrBelow
    });
    Segments {
        le: Segment {
            side: Side::AtOrBelow,
            indices: le,
        },
        gt: Segment {
            side: Side::Above,
            indices: gt,
        },
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::data::assemble::reaction_time_dataset;

    #[test]
    fn fixed_dataset_splits_seven_five() {
        let ds = reaction_time_dataset();
        let segs = segment(&ds, BOUNDARY_THRESHOLD);
        assert_eq!(segs.le.len(), 7);
        assert_eq!(segs.gt.len(), 5);
        assert_eq!(segs.le.len() + segs.gt.len(), ds.len());
    }

    #[test]
    fn both_zero_rows_go_left() {
        let ds = reaction_time_dataset();
        let segs = segment(&ds, BOUNDARY_THRESHOLD);
        let left: Vec<Observation> = segs.le.observations(&ds).copied().collect();
        assert!(left.contains(&Observation::new(0, 428.33)));
        assert!(left.contains(&Observation::new(0, 433.56)));
        assert!(segs.gt.observations(&ds).all(|o| o.independent_var() != 0.0));
    }

    #[test]
    fn segments_keep_dataset_order() {
        let ds = reaction_time_dataset();
        let segs = segment(&ds, BOUNDARY_THRESHOLD);
        assert_eq!(segs.le.indices, vec![0, 1, 2, 5, 6, 7, 8]);
        assert_eq!(segs.gt.indices, vec![3, 4, 9, 10, 11]);
    }

    #[test]
    fn segmentation_is_deterministic() {
        let ds = reaction_time_dataset();
        assert_eq!(
            segment(&ds, BOUNDARY_THRESHOLD),
            segment(&reaction_time_dataset(), BOUNDARY_THRESHOLD)
        );
    }

    #[rstest]
    #[case(-30.0, Side::AtOrBelow)]
    #[case(0.0, Side::AtOrBelow)]
    #[case(-0.0, Side::AtOrBelow)]
    #[case(f64::MIN_POSITIVE, Side::Above)]
    #[case(30.0, Side::Above)]
    fn side_of_boundary(#[case] x: f64, #[case] expected: Side) {
        assert_eq!(Side::of(x, BOUNDARY_THRESHOLD), expected);
    }

    #[test]
    fn labels() {
        assert_eq!(Side::AtOrBelow.fit_label(), "Fit: <= 0");
        assert_eq!(Side::Above.fit_label(), "Fit: > 0");
    }

    proptest! {
        #[test]
        fn segments_partition_any_dataset(
            rows in prop::collection::vec((-100.0f64..100.0, 0.0f64..1000.0), 0..40)
        ) {
            let ds = Dataset::from_observations(
                rows.iter().map(|&(x, y)| Observation::new(x, y)).collect(),
            );
            let segs = segment(&ds, BOUNDARY_THRESHOLD);

            prop_assert_eq!(segs.le.len() + segs.gt.len(), ds.len());
            prop_assert!(segs.le.observations(&ds).all(|o| o.independent_var() <= 0.0));
            prop_assert!(segs.gt.observations(&ds).all(|o| o.independent_var() > 0.0));

            let mut all: Vec<usize> = segs
                .le
                .indices
                .iter()
                .chain(&segs.gt.indices)
                .copied()
                .collect();
            all.sort_unstable();
            prop_assert_eq!(all, (0..ds.len()).collect::<Vec<_>>());

            prop_assert!(segs.le.indices.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(segs.gt.indices.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
