use anyhow::{ensure, Context, Result};

use crate::data::model::Dataset;
use crate::data::segment::{segment, Segment, Segments, BOUNDARY_THRESHOLD};
use crate::fit::LinearFit;

// ---------------------------------------------------------------------------
// Fitted segment
// ---------------------------------------------------------------------------

/// A segment together with the line fitted through it.
#[derive(Debug, Clone)]
pub struct FittedSegment {
    pub segment: Segment,
    pub fit: LinearFit,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Everything the window draws, computed once before it opens.
pub struct AppState {
    pub dataset: Dataset,

    /// `≤ 0` first, then `> 0`.
    pub fitted: Vec<FittedSegment>,

    /// Whether the 95 % confidence bands are drawn.
    pub show_confidence_band: bool,
}

impl AppState {
    /// Segment `dataset` at the boundary and fit a line on each side.
    pub fn build(dataset: Dataset) -> Result<Self> {
        ensure!(!dataset.is_empty(), "no observations to plot");

        let Segments { le, gt } = segment(&dataset, BOUNDARY_THRESHOLD);
        log::info!(
            "Segmented {} observations: {} at or below {BOUNDARY_THRESHOLD}, {} above",
            dataset.len(),
            le.len(),
            gt.len()
        );

        let fitted = [le, gt]
            .into_iter()
            .map(|segment| fit_segment(&dataset, segment))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            dataset,
            fitted,
            show_confidence_band: true,
        })
    }

    pub fn toggle_confidence_band(&mut self) {
        self.show_confidence_band = !self.show_confidence_band;
    }
}

fn fit_segment(dataset: &Dataset, segment: Segment) -> Result<FittedSegment> {
    for obs in segment.observations(dataset) {
        log::debug!("{}: {obs}", segment.side());
    }

    let fit = LinearFit::from_points(&segment.points(dataset))
        .with_context(|| format!("fitting segment x {}", segment.side()))?;

    log::info!(
        "{}: slope {:.4}, intercept {:.4}, r² {:.4} (n = {})",
        segment.side().fit_label(),
        fit.slope,
        fit.intercept,
        fit.r_squared,
        fit.n
    );

    Ok(FittedSegment { segment, fit })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::assemble::reaction_time_dataset;
    use crate::data::model::Observation;
    use crate::data::segment::Side;

    #[test]
    fn builds_both_fits() {
        let state = AppState::build(reaction_time_dataset()).unwrap();
        assert_eq!(state.dataset.len(), 12);
        assert_eq!(state.fitted.len(), 2);
        assert_eq!(state.fitted[0].segment.side(), Side::AtOrBelow);
        assert_eq!(state.fitted[0].fit.n, 7);
        assert_eq!(state.fitted[1].segment.side(), Side::Above);
        assert_eq!(state.fitted[1].fit.n, 5);
        assert!(state.show_confidence_band);
    }

    #[test]
    fn toggle_band() {
        let mut state = AppState::build(reaction_time_dataset()).unwrap();
        state.toggle_confidence_band();
        assert!(!state.show_confidence_band);
        state.toggle_confidence_band();
        assert!(state.show_confidence_band);
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let err = AppState::build(Dataset::default()).err().unwrap();
        assert_eq!(err.to_string(), "no observations to plot");
    }

    #[test]
    fn one_sided_dataset_fails_with_context() {
        let ds = Dataset::from_observations(vec![
            Observation::new(-10, 400.0),
            Observation::new(-5, 410.0),
        ]);
        let err = AppState::build(ds).err().unwrap();
        let chain = format!("{err:#}");
        assert!(chain.contains("fitting segment x > 0"), "{chain}");
        assert!(chain.contains("found 0"), "{chain}");
    }
}
