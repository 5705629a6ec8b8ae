use anyhow::Result;
use clap::Parser;
use pikcard_core::EditorConfig;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("pikcard={}", level).parse()?)
                .add_directive(format!("pikcard_core={}", level).parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = EditorConfig::load_or_default(cli.config.as_deref());

    match cli.command {
        Command::Scan { file } => commands::scan::run(&file),
        Command::Decode {
            file,
            levels,
            format,
            output,
        } => commands::decode::run(&file, &config, levels, format, output.as_deref()),
        Command::Render {
            file,
            output,
            level,
            camera,
            tiles,
        } => commands::render::run(
            &file,
            &config,
            &output,
            level,
            camera.as_deref(),
            tiles.as_deref(),
        ),
        Command::Hexdump {
            file,
            offset,
            size,
            ascii,
        } => commands::hexdump::run(&file, &offset, size, ascii),
        Command::Patch {
            file,
            level,
            row,
            col,
            terrain,
            overlay,
            output,
        } => commands::patch::run(
            &file,
            level,
            (row, col),
            terrain.as_deref(),
            overlay.as_deref(),
            output.as_deref(),
        ),
    }
}
