use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use vitellary_layout::LayoutReport;

#[derive(Parser)]
#[command(name = "vitellary-layout")]
#[command(version)]
#[command(about = "Print VVVVVV game mode values and game object layout")]
struct Args {}

fn main() -> Result<()> {
    // stdout carries the report, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("vitellary=info".parse()?))
        .with_writer(io::stderr)
        .init();

    let _args = Args::parse();

    let report = LayoutReport::compiled();
    if let Err(e) = report.layout.validate() {
        warn!("Compiled layout looks wrong: {}", e);
    }

    report.write_to(&mut io::stdout().lock())?;
    debug!("Report written");

    Ok(())
}
