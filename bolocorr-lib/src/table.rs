use bolocorr_data::BcCalibration;

use crate::error::{BcError, Result};
use crate::query::QueryKind;
use crate::spline::NaturalSpline;

/// Closed inclusive bounds of one lookup axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    fn scan(values: &[f64]) -> Bounds {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in values {
            min = min.min(v);
            max = max.max(v);
        }
        Bounds { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Supported range of every axis plus the table size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainInfo {
    pub temperature: Bounds,
    pub log_temperature: Bounds,
    pub bv: Bounds,
    pub bolometric_correction: Bounds,
    pub samples: usize,
}

/// Behavior for query values outside an axis's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainPolicy {
    /// Fail the whole call on the first out-of-domain value.
    #[default]
    Reject,
    /// Clamp to the nearest bound and report a [`DomainWarning`] per value.
    Clamp,
}

/// One clamped input, reported when looking up under [`DomainPolicy::Clamp`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainWarning {
    pub kind: QueryKind,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

/// Lookup output under an explicit domain policy.
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup {
    /// Interpolated values, in input order.
    pub values: Vec<f64>,
    /// Empty under [`DomainPolicy::Reject`].
    pub warnings: Vec<DomainWarning>,
}

/// A fitted bolometric-correction table.
///
/// Owns the calibration samples and one natural cubic spline per lookup
/// axis, all fitted once at construction. Immutable afterwards, so shared
/// references are safe from any number of threads.
#[derive(Debug, Clone)]
pub struct BcTable {
    calibration: BcCalibration,
    t_axis: NaturalSpline,
    log_t_axis: NaturalSpline,
    bv_axis: NaturalSpline,
    bv_to_t: NaturalSpline,
    domain: DomainInfo,
}

impl BcTable {
    /// Fits the per-axis splines for a calibration.
    ///
    /// The calibration must be ordered by ascending temperature with
    /// strictly monotonic axes ([`crate::loader`] guarantees this); a
    /// duplicate abscissa on any axis is a [`BcError::DataIntegrity`].
    pub fn fit(calibration: BcCalibration) -> Result<BcTable> {
        let samples = &calibration.samples;

        let t: Vec<f64> = samples.iter().map(|s| s.temperature).collect();
        let log_t: Vec<f64> = samples.iter().map(|s| s.log_temperature).collect();
        let bc: Vec<f64> = samples.iter().map(|s| s.bolometric_correction).collect();
        // B-V decreases as temperature increases, so the color axes are
        // fitted over the table reversed into ascending B-V order.
        let bv_rev: Vec<f64> = samples.iter().rev().map(|s| s.bv).collect();
        let bc_rev: Vec<f64> = samples.iter().rev().map(|s| s.bolometric_correction).collect();
        let t_rev: Vec<f64> = samples.iter().rev().map(|s| s.temperature).collect();

        let domain = DomainInfo {
            temperature: Bounds::scan(&t),
            log_temperature: Bounds::scan(&log_t),
            bv: Bounds::scan(&bv_rev),
            bolometric_correction: Bounds::scan(&bc),
            samples: samples.len(),
        };

        let t_axis = NaturalSpline::fit(t, bc.clone())?;
        let log_t_axis = NaturalSpline::fit(log_t, bc)?;
        let bv_axis = NaturalSpline::fit(bv_rev.clone(), bc_rev)?;
        let bv_to_t = NaturalSpline::fit(bv_rev, t_rev)?;

        Ok(BcTable {
            calibration,
            t_axis,
            log_t_axis,
            bv_axis,
            bv_to_t,
            domain,
        })
    }

    /// Access the underlying calibration samples.
    pub fn calibration(&self) -> &BcCalibration {
        &self.calibration
    }

    /// Supported ranges of all four axes and the sample count.
    pub fn domain_info(&self) -> DomainInfo {
        self.domain
    }

    fn axis(&self, kind: QueryKind) -> (&NaturalSpline, Bounds) {
        match kind {
            QueryKind::Temperature => (&self.t_axis, self.domain.temperature),
            QueryKind::LogTemperature => (&self.log_t_axis, self.domain.log_temperature),
            QueryKind::BvColor => (&self.bv_axis, self.domain.bv),
        }
    }

    /// Looks up bolometric corrections for `values` on the axis named by
    /// `kind`, under an explicit out-of-domain policy.
    ///
    /// Output order mirrors input order. Under [`DomainPolicy::Reject`] the
    /// whole call fails on the first out-of-domain value; under
    /// [`DomainPolicy::Clamp`] offending values are clamped to the nearest
    /// bound and each clamp is reported in [`Lookup::warnings`].
    pub fn lookup(&self, kind: QueryKind, values: &[f64], policy: DomainPolicy) -> Result<Lookup> {
        let (spline, bounds) = self.axis(kind);
        let (checked, warnings) = check_domain(kind, bounds, values, policy)?;
        Ok(Lookup {
            values: spline.eval_many(&checked),
            warnings,
        })
    }

    /// Reverse mapping: temperatures for B-V colors, same bounds contract
    /// as [`BcTable::lookup`] on the B-V axis.
    pub fn inverse_lookup(&self, colors: &[f64], policy: DomainPolicy) -> Result<Lookup> {
        let (checked, warnings) = check_domain(QueryKind::BvColor, self.domain.bv, colors, policy)?;
        Ok(Lookup {
            values: self.bv_to_t.eval_many(&checked),
            warnings,
        })
    }

    /// Bolometric correction for one temperature in Kelvin.
    pub fn bc_from_temperature(&self, temperature: f64) -> Result<f64> {
        self.lookup(
            QueryKind::Temperature,
            std::slice::from_ref(&temperature),
            DomainPolicy::Reject,
        )
        .map(|l| l.values[0])
    }

    /// Bolometric corrections for a sequence of temperatures in Kelvin.
    pub fn bc_from_temperatures(&self, temperatures: &[f64]) -> Result<Vec<f64>> {
        self.lookup(QueryKind::Temperature, temperatures, DomainPolicy::Reject)
            .map(|l| l.values)
    }

    /// Bolometric correction for one log10 temperature.
    pub fn bc_from_log_temperature(&self, log_temperature: f64) -> Result<f64> {
        self.lookup(
            QueryKind::LogTemperature,
            std::slice::from_ref(&log_temperature),
            DomainPolicy::Reject,
        )
        .map(|l| l.values[0])
    }

    /// Bolometric corrections for a sequence of log10 temperatures.
    pub fn bc_from_log_temperatures(&self, log_temperatures: &[f64]) -> Result<Vec<f64>> {
        self.lookup(QueryKind::LogTemperature, log_temperatures, DomainPolicy::Reject)
            .map(|l| l.values)
    }

    /// Bolometric correction for one B-V color index.
    pub fn bc_from_bv_color(&self, bv: f64) -> Result<f64> {
        self.lookup(
            QueryKind::BvColor,
            std::slice::from_ref(&bv),
            DomainPolicy::Reject,
        )
        .map(|l| l.values[0])
    }

    /// Bolometric corrections for a sequence of B-V color indices.
    pub fn bc_from_bv_colors(&self, colors: &[f64]) -> Result<Vec<f64>> {
        self.lookup(QueryKind::BvColor, colors, DomainPolicy::Reject)
            .map(|l| l.values)
    }

    /// Temperature estimate in Kelvin for one B-V color index.
    pub fn temperature_from_bv(&self, bv: f64) -> Result<f64> {
        self.inverse_lookup(std::slice::from_ref(&bv), DomainPolicy::Reject)
            .map(|l| l.values[0])
    }

    /// Temperature estimates for a sequence of B-V color indices.
    pub fn temperatures_from_bv(&self, colors: &[f64]) -> Result<Vec<f64>> {
        self.inverse_lookup(colors, DomainPolicy::Reject)
            .map(|l| l.values)
    }

    /// Applies the correction for a star of the given temperature to its
    /// V-band absolute magnitude: `M_bol = M_V + BC_V`.
    pub fn bolometric_magnitude(&self, m_v: f64, temperature: f64) -> Result<f64> {
        Ok(m_v + self.bc_from_temperature(temperature)?)
    }

    /// Samples the correction curve for `kind` at `samples` evenly spaced
    /// points spanning the axis's full domain, as parallel `(x, y)` arrays
    /// for plotting. `samples` is raised to 2 if smaller.
    pub fn curve(&self, kind: QueryKind, samples: usize) -> (Vec<f64>, Vec<f64>) {
        let (spline, bounds) = self.axis(kind);
        sample_curve(spline, bounds, samples)
    }

    /// B-V to temperature counterpart of [`BcTable::curve`].
    pub fn temperature_curve(&self, samples: usize) -> (Vec<f64>, Vec<f64>) {
        sample_curve(&self.bv_to_t, self.domain.bv, samples)
    }
}

fn check_domain(
    kind: QueryKind,
    bounds: Bounds,
    values: &[f64],
    policy: DomainPolicy,
) -> Result<(Vec<f64>, Vec<DomainWarning>)> {
    let mut checked = Vec::with_capacity(values.len());
    let mut warnings = Vec::new();
    for &v in values {
        if bounds.contains(v) {
            checked.push(v);
        } else if policy == DomainPolicy::Clamp && v.is_finite() {
            warnings.push(DomainWarning {
                kind,
                value: v,
                min: bounds.min,
                max: bounds.max,
            });
            checked.push(v.clamp(bounds.min, bounds.max));
        } else {
            // Non-finite values are rejected under either policy.
            return Err(BcError::OutOfDomain {
                kind,
                value: v,
                min: bounds.min,
                max: bounds.max,
            });
        }
    }
    Ok((checked, warnings))
}

fn sample_curve(spline: &NaturalSpline, bounds: Bounds, samples: usize) -> (Vec<f64>, Vec<f64>) {
    let n = samples.max(2);
    let step = (bounds.max - bounds.min) / (n - 1) as f64;
    let xs: Vec<f64> = (0..n).map(|i| bounds.min + step * i as f64).collect();
    let ys = spline.eval_many(&xs);
    (xs, ys)
}
