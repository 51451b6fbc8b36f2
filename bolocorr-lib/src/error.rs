use std::fmt;

use crate::query::QueryKind;

#[derive(Debug)]
pub enum BcError {
    OutOfDomain {
        kind: QueryKind,
        value: f64,
        min: f64,
        max: f64,
    },
    DataIntegrity(String),
}

pub type Result<T> = std::result::Result<T, BcError>;

impl fmt::Display for BcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfDomain {
                kind,
                value,
                min,
                max,
            } => {
                write!(f, "{kind} {value} out of supported range [{min}, {max}]")
            }
            Self::DataIntegrity(msg) => write!(f, "calibration data error: {msg}"),
        }
    }
}

impl std::error::Error for BcError {}
