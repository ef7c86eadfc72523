//! CLI domain: parse, route, and output only.
//! Report generation lives in the `report` module; routes stay thin.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, GenerateArgs};
pub use route::RunContext;
