//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "pikcard")]
#[command(about = "Pikmin e+ card level tool", version)]
pub struct Cli {
    /// Editor config (TOML); defaults to the user config directory
    #[arg(short, long, global = true, env = "PIKCARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List level signatures found in a card file
    Scan {
        file: PathBuf,
    },

    /// Decode level grids
    Decode {
        file: PathBuf,

        /// Number of levels to decode (1-3), overrides the config
        #[arg(short, long)]
        levels: Option<usize>,

        #[arg(short, long, value_enum, default_value_t = DumpFormat::Text)]
        format: DumpFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a level to a PNG image
    Render {
        file: PathBuf,

        #[arg(short, long)]
        output: PathBuf,

        /// Level slot (1-3)
        #[arg(short, long, default_value_t = 1)]
        level: u8,

        /// Camera frame to outline, e.g. "11x8"
        #[arg(long)]
        camera: Option<String>,

        /// Tile folder, overrides the config
        #[arg(short, long)]
        tiles: Option<PathBuf>,
    },

    /// Hexdump a region of a card file
    Hexdump {
        file: PathBuf,

        /// Start offset (hex, e.g. 0x1A0)
        #[arg(long, default_value = "0")]
        offset: String,

        /// Number of bytes
        #[arg(long, default_value_t = 256)]
        size: usize,

        /// Show ASCII column
        #[arg(long)]
        ascii: bool,
    },

    /// Change one cell of a level and save the card
    Patch {
        file: PathBuf,

        /// Level slot (1-3)
        #[arg(short, long, default_value_t = 1)]
        level: u8,

        #[arg(long)]
        row: usize,

        #[arg(long)]
        col: usize,

        /// New terrain byte (hex)
        #[arg(long, conflicts_with = "overlay", required_unless_present = "overlay")]
        terrain: Option<String>,

        /// New overlay byte (hex)
        #[arg(long)]
        overlay: Option<String>,

        /// Write to this path instead of overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_patch() {
        let cli = Cli::try_parse_from([
            "pikcard", "patch", "card.bin", "--row", "2", "--col", "3", "--overlay", "04",
        ])
        .unwrap();
        match cli.command {
            Command::Patch {
                level,
                row,
                col,
                terrain,
                overlay,
                ..
            } => {
                assert_eq!((level, row, col), (1, 2, 3));
                assert!(terrain.is_none());
                assert_eq!(overlay.as_deref(), Some("04"));
            }
            _ => panic!("expected patch"),
        }
    }

    #[test]
    fn test_patch_requires_a_value() {
        assert!(
            Cli::try_parse_from(["pikcard", "patch", "card.bin", "--row", "0", "--col", "0"])
                .is_err()
        );
    }
}
