use std::io::{Read, Write};
use tracing::debug;

use algorithms::computation_map::ALGORITHMS_COMPUTATION_MAP;

use crate::cli::Cli;
use crate::config::LabConfig;
use crate::error::LabError;
use crate::programs::run_program;
use crate::timer::Clock;

/// Config file first, then command-line overrides.
pub fn resolve_config(cli: &Cli) -> Result<LabConfig, LabError> {
    let mut config = match &cli.config {
        Some(path) => LabConfig::load(path)?,
        None => LabConfig::default(),
    };
    if let Some(max) = cli.max_elements {
        config.limits.max_elements = max;
    }
    if let Some(max) = cli.max_capacity {
        config.limits.max_capacity = max;
    }
    if let Some(max) = cli.max_string_len {
        config.limits.max_string_len = max;
    }
    config.verify |= cli.verify;
    debug!(?config, "resolved configuration");
    Ok(config)
}

pub fn execute_command<C: Clock + ?Sized>(
    cli: &Cli,
    input: &mut dyn Read,
    output: &mut dyn Write,
    clock: &C,
) -> Result<(), LabError> {
    let config = resolve_config(cli)?;
    match cli.command.program() {
        Some(program) => {
            let mut text = String::new();
            input.read_to_string(&mut text)?;
            let rendered = run_program(&program, &text, &config, clock)?;
            output.write_all(rendered.as_bytes())?;
        }
        None => {
            for (program, module, kind, determinism) in ALGORITHMS_COMPUTATION_MAP.iter() {
                writeln!(
                    output,
                    "{:<22} | {:<40} | {:<22} | {}",
                    program, module, kind, determinism
                )?;
            }
        }
    }
    output.flush()?;
    Ok(())
}
