//! Safe SQL handling: statement text from config only, values as parameters.

mod compile;
pub mod params;
pub use compile::*;
pub use params::*;
