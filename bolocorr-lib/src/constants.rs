/// Nominal solar effective temperature (K), IAU 2015 resolution B3.
pub const SOLAR_TEFF: f64 = 5772.0;

/// Absolute bolometric magnitude of the Sun (IAU 2015 zero point).
pub const SOLAR_M_BOL: f64 = 4.74;

/// V-band absolute magnitude of the Sun.
pub const SOLAR_M_V: f64 = 4.81;

/// B-V color index of the Sun.
pub const SOLAR_BV: f64 = 0.653;
