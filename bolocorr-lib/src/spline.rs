use crate::error::{BcError, Result};

/// Natural cubic spline over strictly increasing abscissas.
///
/// Fitting solves the standard tridiagonal system for the second derivative
/// at each knot, with the second derivative pinned to zero at both endpoints.
/// The knots and second derivatives are kept so evaluation is a binary search
/// plus one cubic form per query point.
#[derive(Debug, Clone)]
pub struct NaturalSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    y2: Vec<f64>,
}

impl NaturalSpline {
    /// Fits a natural cubic spline through `(xs[i], ys[i])`.
    ///
    /// `xs` must be strictly increasing and at least three knots are needed
    /// for the interior system to exist.
    pub fn fit(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(BcError::DataIntegrity(format!(
                "axis length mismatch: {} x values vs {} y values",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 3 {
            return Err(BcError::DataIntegrity(format!(
                "cubic spline needs at least 3 samples, got {}",
                xs.len()
            )));
        }
        for i in 1..xs.len() {
            if xs[i] <= xs[i - 1] {
                return Err(BcError::DataIntegrity(format!(
                    "abscissas must be strictly increasing: x[{}] = {} after x[{}] = {}",
                    i,
                    xs[i],
                    i - 1,
                    xs[i - 1]
                )));
            }
        }

        let n = xs.len();
        let mut y2 = vec![0.0; n];
        let mut u = vec![0.0; n];

        // Forward sweep. The natural boundary keeps y2[0] = y2[n-1] = 0.
        for i in 1..n - 1 {
            let sig = (xs[i] - xs[i - 1]) / (xs[i + 1] - xs[i - 1]);
            let p = sig * y2[i - 1] + 2.0;
            y2[i] = (sig - 1.0) / p;
            u[i] = (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i])
                - (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]);
            u[i] = (6.0 * u[i] / (xs[i + 1] - xs[i - 1]) - sig * u[i - 1]) / p;
        }

        // Back substitution.
        for k in (0..n - 1).rev() {
            y2[k] = y2[k] * y2[k + 1] + u[k];
        }

        Ok(NaturalSpline { xs, ys, y2 })
    }

    /// Evaluates the spline at `x`.
    ///
    /// An `x` outside the knot range evaluates the boundary segment's
    /// polynomial; domain validation is the caller's concern.
    pub fn eval(&self, x: f64) -> f64 {
        // Bracket indices via binary search.
        let hi = match self.xs.partition_point(|&v| v < x) {
            i if i >= self.xs.len() => self.xs.len() - 1,
            0 => 1,
            i => i,
        };
        let lo = hi - 1;

        let h = self.xs[hi] - self.xs[lo];
        let a = (self.xs[hi] - x) / h;
        let b = (x - self.xs[lo]) / h;

        a * self.ys[lo]
            + b * self.ys[hi]
            + (h * h / 6.0) * ((a * a - 1.0) * a * self.y2[lo] + (b * b - 1.0) * b * self.y2[hi])
    }

    /// Evaluates the spline at each point of `xs`.
    pub fn eval_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }

    /// Number of knots.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}
