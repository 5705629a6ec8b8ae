use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use eframe::egui;
use pikcard_core::EditorConfig;
use tracing_subscriber::EnvFilter;

mod app;
mod palette;
mod tabs;

#[derive(Parser)]
#[command(name = "pikcard-gui")]
#[command(about = "Pikmin E+ level editor", version)]
struct Args {
    /// Editor config (TOML); defaults to the user config directory
    #[arg(short, long, env = "PIKCARD_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("pikcard_gui={}", level).parse()?)
                .add_directive(format!("pikcard_core={}", level).parse()?),
        )
        .init();

    let config = EditorConfig::load_or_default(args.config.as_deref());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([700.0, 520.0])
            .with_title("Pikmin E+ Level Editor"),
        ..Default::default()
    };
    eframe::run_native(
        "Pikmin E+ Level Editor",
        options,
        Box::new(|_cc| Box::new(app::EditorApp::new(config))),
    )
    .map_err(|e| anyhow!("Editor window failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args() {
        let args = Args::try_parse_from(["pikcard-gui", "-v", "--config", "editor.toml"]).unwrap();
        assert!(args.verbose);
        assert_eq!(args.config, Some(PathBuf::from("editor.toml")));

        let args = Args::try_parse_from(["pikcard-gui", "-c", "other.toml"]).unwrap();
        assert!(!args.verbose);
        assert_eq!(args.config, Some(PathBuf::from("other.toml")));

        assert!(Args::try_parse_from(["pikcard-gui", "--level", "2"]).is_err());
    }
}
