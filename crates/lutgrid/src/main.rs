// File: crates/lutgrid/src/main.rs
// Summary: CLI entry: `lutgrid <table.csv> <grid-name>`.

use anyhow::Result;
use lutgrid_render::{OverlayOptions, OverlaySink};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut sink = OverlaySink::new(OverlayOptions::from_env());
    let stdout = std::io::stdout();
    lutgrid::run(&args, &mut stdout.lock(), &mut sink)?;

    if let Some(out) = &sink.last_output {
        eprintln!("Wrote {}", out.display());
    }
    Ok(())
}
