//! Per-request logic: parameter binding and query execution.

pub mod binder;
pub mod coerce;
pub mod query;

pub use binder::{bind, ParsedParameters, RawQuery};
pub use coerce::coerce;
pub use query::{QueryService, ResultRow};
