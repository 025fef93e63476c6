//! CLI domain: parse, route, help, output, and presentation only.
//! Format decisions live in `policy` and `selector`; the route table dispatches to them.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use route::RunContext;
