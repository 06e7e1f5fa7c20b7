//! Staff Compare - Console demo of employee validation and ID-based comparison.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use staff_compare as app;

use app::config::{self, RosterFile, RosterLoadResult};
use app::demo;

/// Console demo of employee record validation and ID-based comparison.
#[derive(Parser)]
#[command(name = "staff-compare")]
struct Cli {
    /// Run the comparisons over a TOML roster file instead of the fixed script
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Write a sample roster file to the given path and exit
    #[arg(long, value_name = "PATH")]
    write_sample: Option<PathBuf>,

    /// Wait for Enter before exiting
    #[arg(long)]
    wait: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; demo output goes to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Staff Compare starting...");

    if let Some(path) = cli.write_sample.as_deref() {
        config::write_sample(path)?;
        tracing::info!("Sample roster written to {:?}", path);
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.roster {
        Some(path) => match RosterFile::try_load(&path) {
            RosterLoadResult::Loaded(employees) => {
                tracing::info!("Roster loaded: {} employees", employees.len());
                demo::run_roster(&employees, &mut out)?;
            }
            RosterLoadResult::Missing => {
                tracing::warn!("Roster {:?} not found, running fixed demonstration", path);
                demo::run_fixed(&mut out)?;
            }
            RosterLoadResult::Invalid(e) => {
                anyhow::bail!("Invalid roster {:?}: {}", path, e);
            }
        },
        None => demo::run_fixed(&mut out)?,
    }

    if cli.wait {
        writeln!(out)?;
        writeln!(out, "Press Enter to exit...")?;
        out.flush()?;
        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
    }

    Ok(())
}
