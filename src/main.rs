use anyhow::{Context, Result};
use clap::Parser;
use sc_genscript::cli::output::{print_error, write_report};
use sc_genscript::{Config, Generator};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Print the header and binding path variables for the bindgen script.
///
/// Paste the output into the script, or pipe it in.
#[derive(Parser, Debug)]
#[command(name = "sc-genscript")]
#[command(version, about, long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    // Diagnostics go to stderr so stdout stays pipeable
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::default();
    let generator = Generator::new(&config).context("Invalid naming configuration")?;
    let items = generator
        .derive_items()
        .context("Failed to derive variable names")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &items, generator.config()).context("Failed to write report")?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}
