pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod programs;
pub mod reader;
pub mod timer;
pub mod writer;

pub use cli::{Cli, Command};
pub use commands::execute_command;
pub use config::{LabConfig, Limits};
pub use error::LabError;
pub use programs::{run_program, KthSource, Program};
pub use timer::{Clock, MonotonicClock};
