use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use labexam::{execute_command, Cli, MonotonicClock};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    execute_command(&cli, &mut stdin.lock(), &mut stdout.lock(), &MonotonicClock::new())
        .context("labexam failed")
}
