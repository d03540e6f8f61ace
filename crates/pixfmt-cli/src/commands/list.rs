//! List command: every catalog family with its default descriptor.

use crate::ListArgs;
use anyhow::{Context, Result};
use pixfmt_core::AlphaMode;
use pixfmt_formats::KnownFormat;

/// Runs the list command.
pub fn run(args: ListArgs, verbose: bool) -> Result<()> {
    for known in KnownFormat::ALL {
        let format = known
            .build(args.bits, AlphaMode::Straight)
            .with_context(|| format!("Failed to build {}", known))?;
        if verbose {
            let fixed = if known.is_fixed_depth() { " (fixed depth)" } else { "" };
            println!("{:<14} {}{}", known.name(), format, fixed);
        } else {
            println!("{:<14} {}", known.name(), format);
        }
    }
    Ok(())
}
