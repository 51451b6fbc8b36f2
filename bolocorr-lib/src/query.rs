use std::fmt;

use crate::error::Result;
use crate::table::{BcTable, DomainPolicy};

/// Input axis of a bolometric-correction query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// Effective temperature in Kelvin.
    Temperature,
    /// log10 of the effective temperature.
    LogTemperature,
    /// B-V color index.
    BvColor,
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "temperature"),
            Self::LogTemperature => write!(f, "log10(T)"),
            Self::BvColor => write!(f, "B-V color"),
        }
    }
}

/// A scalar or an ordered sequence of input values.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Scalar(f64),
    Sequence(Vec<f64>),
}

/// A lookup request as submitted by a collaborator (CLI, REPL, batch file).
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub kind: QueryKind,
    pub value: QueryValue,
}

/// Interpolated corrections, mirroring the shape of the query payload.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    Scalar(f64),
    Sequence(Vec<f64>),
}

impl BcTable {
    /// Evaluates a query, preserving the scalar/sequence shape of its
    /// payload. Out-of-domain values are rejected; callers that want
    /// clamping use [`BcTable::lookup`] directly.
    pub fn evaluate(&self, query: &Query) -> Result<QueryResult> {
        match &query.value {
            QueryValue::Scalar(x) => {
                let out = self.lookup(query.kind, std::slice::from_ref(x), DomainPolicy::Reject)?;
                Ok(QueryResult::Scalar(out.values[0]))
            }
            QueryValue::Sequence(xs) => {
                let out = self.lookup(query.kind, xs, DomainPolicy::Reject)?;
                Ok(QueryResult::Sequence(out.values))
            }
        }
    }
}
