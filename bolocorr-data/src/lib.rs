#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

mod calibration;

pub use calibration::{CALIBRATION_SOURCE, CALIBRATION_V};

/// One row of the V-band calibration table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BcSample {
    /// B-V color index (mag). Decreases as temperature increases.
    pub bv: f64,
    /// log10 of the effective temperature.
    pub log_temperature: f64,
    /// V-band bolometric correction (mag).
    pub bolometric_correction: f64,
    /// Effective temperature (K).
    pub temperature: f64,
}

/// A loaded calibration, ordered by ascending temperature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BcCalibration {
    pub samples: Vec<BcSample>,
}
