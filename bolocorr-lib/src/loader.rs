//! Materializes raw calibration rows into a validated [`BcCalibration`].

use bolocorr_data::{BcCalibration, BcSample, CALIBRATION_V};

use crate::error::{BcError, Result};

/// Maximum tolerated drift between a row's tabulated log10(T) and the
/// logarithm of its tabulated temperature. The published table rounds the
/// two columns independently (four decimals in log T, whole kelvin in T).
const LOG_T_ROUNDING: f64 = 5e-4;

/// Builds the builtin V-band calibration.
///
/// Idempotent: every call re-derives a structurally identical table from
/// the same embedded rows.
pub fn builtin_calibration() -> Result<BcCalibration> {
    calibration_from_rows(CALIBRATION_V)
}

/// Builds a calibration from raw `(B-V, log10 T, BC, T)` rows.
///
/// Rows may arrive in any order; they are sorted by ascending temperature
/// before validation. A malformed table (non-finite entries, non-positive
/// or duplicate temperatures, a log column inconsistent with the
/// temperature column, or a B-V column that does not strictly decrease
/// with temperature) is a [`BcError::DataIntegrity`].
pub fn calibration_from_rows(rows: &[(f64, f64, f64, f64)]) -> Result<BcCalibration> {
    if rows.is_empty() {
        return Err(BcError::DataIntegrity("calibration table is empty".into()));
    }

    let mut samples: Vec<BcSample> = rows
        .iter()
        .map(
            |&(bv, log_temperature, bolometric_correction, temperature)| BcSample {
                bv,
                log_temperature,
                bolometric_correction,
                temperature,
            },
        )
        .collect();

    for (i, s) in samples.iter().enumerate() {
        if !(s.bv.is_finite()
            && s.log_temperature.is_finite()
            && s.bolometric_correction.is_finite()
            && s.temperature.is_finite())
        {
            return Err(BcError::DataIntegrity(format!("row {i}: non-finite entry")));
        }
        if s.temperature <= 0.0 {
            return Err(BcError::DataIntegrity(format!(
                "row {i}: temperature {} K is not positive",
                s.temperature
            )));
        }
        if (s.temperature.log10() - s.log_temperature).abs() > LOG_T_ROUNDING {
            return Err(BcError::DataIntegrity(format!(
                "row {i}: log temperature {} does not match temperature {} K",
                s.log_temperature, s.temperature
            )));
        }
    }

    samples.sort_by(|a, b| a.temperature.total_cmp(&b.temperature));

    for (i, w) in samples.windows(2).enumerate() {
        if w[1].temperature <= w[0].temperature {
            return Err(BcError::DataIntegrity(format!(
                "duplicate temperature {} K",
                w[1].temperature
            )));
        }
        if w[1].log_temperature <= w[0].log_temperature {
            return Err(BcError::DataIntegrity(format!(
                "log temperature not strictly increasing at row {}",
                i + 1
            )));
        }
        // Strict monotonicity here is what makes the B-V -> T reverse
        // mapping unambiguous over the whole table.
        if w[1].bv >= w[0].bv {
            return Err(BcError::DataIntegrity(format!(
                "B-V must strictly decrease with temperature, violated at {} K",
                w[1].temperature
            )));
        }
    }

    Ok(BcCalibration { samples })
}
