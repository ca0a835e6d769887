//! HTTP handlers for configured query endpoints, migrations and the endpoint listing.

pub mod query;
pub mod migrate;
pub use query::*;
pub use migrate::*;
