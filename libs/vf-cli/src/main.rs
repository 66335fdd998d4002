//! `genmesh`: generates vocal-fold meshes with gmsh.
//!
//! ```text
//! genmesh --geometry-name M5 --medial-angle 2 --z-extrude 1.5 --n-extrude 10 \
//!         --gmsh-args "-clscale 0.5"
//! ```

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if cli.describe {
        commands::describe::execute(&cli)
    } else {
        commands::run::execute(&cli)
    }
}
