//! CLI command implementations

pub mod list;
pub mod show;

use anyhow::{Context, Result};
use pixfmt_core::AlphaMode;
use pixfmt_formats::KnownFormat;

/// Looks up a catalog family by name.
pub fn lookup(name: &str) -> Result<KnownFormat> {
    KnownFormat::from_name(name)
        .with_context(|| format!("Unknown format '{}' (run `pixfmt list`)", name))
}

/// Alpha mode selected by the `--premultiplied` flag.
pub fn alpha_mode(premultiplied: bool) -> AlphaMode {
    if premultiplied {
        AlphaMode::Premultiplied
    } else {
        AlphaMode::Straight
    }
}
