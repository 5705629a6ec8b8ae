//! # pikcard-core
//!
//! Core library for the Pikmin e+ card level editor.
//!
//! This crate provides:
//! - Level signature scanning over raw card files
//! - Level block decoding/encoding (terrain + overlay grids)
//! - Tile lookup with an in-memory image cache
//! - Level and palette rendering
//! - Text and JSON level dumps
//! - Editor configuration

pub mod card;
pub mod config;
pub mod error;
pub mod export;
pub mod level;
pub mod render;
pub mod tiles;

pub use card::{
    CardFile, LevelLoad, LevelSignature, LoadedLevel, Occurrence, builtin_signatures, find_all,
    format_pattern, parse_pattern, scan_card,
};
pub use config::{EditorConfig, EditorConfigBuilder};
pub use error::{Error, Result};
pub use export::{ExportFormat, JsonExporter, TextExporter};
pub use level::{GameType, LevelGrid, ViewSettings};
pub use render::{RenderLayout, draw_camera, render_level, render_palette};
pub use tiles::TileCache;
