pub mod constants;
pub mod db;
pub mod error;
pub mod loader;
pub mod query;
pub mod spline;
pub mod table;

pub use db::BcDb;
pub use error::{BcError, Result};
pub use query::{Query, QueryKind, QueryResult, QueryValue};
pub use table::{BcTable, Bounds, DomainInfo, DomainPolicy, DomainWarning, Lookup};
pub use bolocorr_data;
