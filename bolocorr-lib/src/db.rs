use std::sync::OnceLock;

use crate::error::Result;
use crate::loader;
use crate::query::{Query, QueryKind, QueryResult};
use crate::table::{BcTable, DomainInfo, DomainPolicy, Lookup};

static TABLE: OnceLock<BcTable> = OnceLock::new();

fn table() -> &'static BcTable {
    TABLE.get_or_init(|| {
        let calibration =
            loader::builtin_calibration().expect("embedded calibration is well-formed");
        BcTable::fit(calibration).expect("embedded calibration axes are monotonic")
    })
}

/// The main interface to the builtin V-band calibration.
///
/// Cheap to create: holds a reference to the process-wide table that is
/// fitted on first use.
pub struct BcDb {
    table: &'static BcTable,
}

impl BcDb {
    pub fn new() -> Self {
        BcDb { table: table() }
    }

    /// Access the fitted table.
    pub fn table(&self) -> &BcTable {
        self.table
    }

    /// Supported ranges of all four axes and the sample count.
    pub fn domain_info(&self) -> DomainInfo {
        self.table.domain_info()
    }

    /// Bolometric correction for one temperature in Kelvin.
    pub fn bc_from_temperature(&self, temperature: f64) -> Result<f64> {
        self.table.bc_from_temperature(temperature)
    }

    /// Bolometric corrections for a sequence of temperatures in Kelvin.
    pub fn bc_from_temperatures(&self, temperatures: &[f64]) -> Result<Vec<f64>> {
        self.table.bc_from_temperatures(temperatures)
    }

    /// Bolometric correction for one log10 temperature.
    pub fn bc_from_log_temperature(&self, log_temperature: f64) -> Result<f64> {
        self.table.bc_from_log_temperature(log_temperature)
    }

    /// Bolometric corrections for a sequence of log10 temperatures.
    pub fn bc_from_log_temperatures(&self, log_temperatures: &[f64]) -> Result<Vec<f64>> {
        self.table.bc_from_log_temperatures(log_temperatures)
    }

    /// Bolometric correction for one B-V color index.
    pub fn bc_from_bv_color(&self, bv: f64) -> Result<f64> {
        self.table.bc_from_bv_color(bv)
    }

    /// Bolometric corrections for a sequence of B-V color indices.
    pub fn bc_from_bv_colors(&self, colors: &[f64]) -> Result<Vec<f64>> {
        self.table.bc_from_bv_colors(colors)
    }

    /// Temperature estimate in Kelvin for one B-V color index.
    pub fn temperature_from_bv(&self, bv: f64) -> Result<f64> {
        self.table.temperature_from_bv(bv)
    }

    /// Temperature estimates for a sequence of B-V color indices.
    pub fn temperatures_from_bv(&self, colors: &[f64]) -> Result<Vec<f64>> {
        self.table.temperatures_from_bv(colors)
    }

    /// Lookup on any axis under an explicit domain policy.
    pub fn lookup(&self, kind: QueryKind, values: &[f64], policy: DomainPolicy) -> Result<Lookup> {
        self.table.lookup(kind, values, policy)
    }

    /// Reverse (B-V to temperature) lookup under an explicit domain policy.
    pub fn inverse_lookup(&self, colors: &[f64], policy: DomainPolicy) -> Result<Lookup> {
        self.table.inverse_lookup(colors, policy)
    }

    /// Evaluates a collaborator-submitted query, preserving payload shape.
    pub fn evaluate(&self, query: &Query) -> Result<QueryResult> {
        self.table.evaluate(query)
    }

    /// `M_bol = M_V + BC_V` for a star of the given temperature.
    pub fn bolometric_magnitude(&self, m_v: f64, temperature: f64) -> Result<f64> {
        self.table.bolometric_magnitude(m_v, temperature)
    }

    /// `(x, y)` samples of the correction curve for `kind`, for plotting.
    pub fn curve(&self, kind: QueryKind, samples: usize) -> (Vec<f64>, Vec<f64>) {
        self.table.curve(kind, samples)
    }

    /// `(B-V, temperature)` samples of the reverse mapping, for plotting.
    pub fn temperature_curve(&self, samples: usize) -> (Vec<f64>, Vec<f64>) {
        self.table.temperature_curve(samples)
    }
}

impl Default for BcDb {
    fn default() -> Self {
        Self::new()
    }
}
