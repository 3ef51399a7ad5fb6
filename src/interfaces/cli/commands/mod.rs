//! CLI command implementations

mod config_gen;
mod query;

pub use config_gen::*;
pub use query::*;
