//! Ordinary least-squares line fit with a confidence band for the mean
//! response.
//!
//! The band at `x` is `ŷ(x) ± t · s · sqrt(1/n + (x − x̄)² / Sxx)` where `s`
//! is the residual standard error and `t` the two-sided 95 % Student-t
//! critical value for `n − 2` degrees of freedom.

use thiserror::Error;

/// Two-sided 95 % Student-t critical values, indexed by `df - 1`.
const T_975: [f64; 30] = [
    12.706, 4.303, 3.182, 2.776, 2.571, 2.447, 2.365, 2.306, 2.262, 2.228, //
    2.201, 2.179, 2.160, 2.145, 2.131, 2.120, 2.110, 2.101, 2.093, 2.086, //
    2.080, 2.074, 2.069, 2.064, 2.060, 2.056, 2.052, 2.048, 2.045, 2.042,
];

/// Normal approximation once the table runs out.
const Z_975: f64 = 1.96;

#[derive(Debug, Error, PartialEq)]
pub enum FitError {
    #[error("need at least 2 points for a line fit, found {found}")]
    TooFewPoints { found: usize },
    #[error("all x values are equal ({x}); slope is undefined")]
    DegenerateX { x: f64 },
    #[error("point {index} is not finite: [{x}, {y}]")]
    NonFinite { index: usize, x: f64, y: f64 },
}

/// Critical value `t(0.975, df)`. `df == 0` has no spread estimate.
pub fn t_critical_95(df: usize) -> f64 {
    match df {
        0 => 0.0,
        d if d <= T_975.len() => T_975[d - 1],
        _ => Z_975,
    }
}

// ---------------------------------------------------------------------------
// LinearFit
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Number of points fitted.
    pub n: usize,
    pub x_mean: f64,
    /// Σ (x − x̄)²
    pub sxx: f64,
    /// Residual sum of squares.
    pub ssr: f64,
    /// Coefficient of determination. NaN when all y are equal.
    pub r_squared: f64,
    pub x_min: f64,
    pub x_max: f64,
}

impl LinearFit {
    pub fn from_points(points: &[[f64; 2]]) -> Result<Self, FitError> {
        if points.len() < 2 {
            return Err(FitError::TooFewPoints {
                found: points.len(),
            });
        }
        if let Some((index, &[x, y])) = points
            .iter()
            .enumerate()
            .find(|(_, p)| !p[0].is_finite() || !p[1].is_finite())
        {
            return Err(FitError::NonFinite { index, x, y });
        }

        let n = points.len();
        let nf = n as f64;
        let x_mean = points.iter().map(|p| p[0]).sum::<f64>() / nf;
        let y_mean = points.iter().map(|p| p[1]).sum::<f64>() / nf;

        let (sxx, sxy, syy) = points.iter().fold((0.0, 0.0, 0.0), |(sxx, sxy, syy), p| {
            let dx = p[0] - x_mean;
            let dy = p[1] - y_mean;
            (sxx + dx * dx, sxy + dx * dy, syy + dy * dy)
        });

        if sxx == 0.0 {
            return Err(FitError::DegenerateX { x: x_mean });
        }

        let slope = sxy / sxx;
        let intercept = y_mean - slope * x_mean;
        let ssr: f64 = points
            .iter()
            .map(|p| (p[1] - (intercept + slope * p[0])).powi(2))
            .sum();
        let r_squared = if syy == 0.0 { f64::NAN } else { 1.0 - ssr / syy };

        let x_min = points.iter().map(|p| p[0]).fold(f64::INFINITY, f64::min);
        let x_max = points.iter().map(|p| p[0]).fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            slope,
            intercept,
            n,
            x_mean,
            sxx,
            ssr,
            r_squared,
            x_min,
            x_max,
        })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    pub fn degrees_of_freedom(&self) -> usize {
        self.n.saturating_sub(2)
    }

    /// Residual standard error. Zero when the line passes through every
    /// point or there are no spare degrees of freedom.
    pub fn residual_std_error(&self) -> f64 {
        match self.degrees_of_freedom() {
            0 => 0.0,
            df => (self.ssr / df as f64).sqrt(),
        }
    }

    /// Half width of the 95 % confidence interval of the mean response at `x`.
    pub fn confidence_half_width(&self, x: f64) -> f64 {
        let leverage = 1.0 / self.n as f64 + (x - self.x_mean).powi(2) / self.sxx;
        t_critical_95(self.degrees_of_freedom()) * self.residual_std_error() * leverage.sqrt()
    }

    /// Evenly spaced x positions across the fitted range.
    fn sample_xs(&self, samples: usize) -> impl Iterator<Item = f64> + '_ {
        let samples = samples.max(2);
        let step = (self.x_max - self.x_min) / (samples - 1) as f64;
        (0..samples).map(move |i| self.x_min + step * i as f64)
    }

    /// Fitted line sampled over the range of the fitted x values.
    pub fn line_points(&self, samples: usize) -> Vec<[f64; 2]> {
        self.sample_xs(samples)
            .map(|x| [x, self.predict(x)])
            .collect()
    }

    /// Confidence band split into one quad per pair of neighbouring
    /// samples: `(xᵢ, upperᵢ) → (xᵢ₊₁, upperᵢ₊₁) → (xᵢ₊₁, lowerᵢ₊₁) → (xᵢ, lowerᵢ)`.
    /// Each quad is convex; the band as a whole pinches in at x̄ and is not.
    pub fn band_quads(&self, samples: usize) -> Vec<[[f64; 2]; 4]> {
        let edges: Vec<(f64, f64, f64)> = self
            .sample_xs(samples)
            .map(|x| {
                let y = self.predict(x);
                let h = self.confidence_half_width(x);
                (x, y + h, y - h)
            })
            .collect();

        edges
            .windows(2)
            .map(|w| {
                let (x0, upper0, lower0) = w[0];
                let (x1, upper1, lower1) = w[1];
                [[x0, upper0], [x1, upper1], [x1, lower1], [x0, lower0]]
            })
            .collect()
    }
}
