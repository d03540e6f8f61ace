//! pixfmt - inspect pixel format descriptors
//!
//! Builds a format from the known-format catalog, applies derivations and
//! prints the resulting descriptor.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use pixfmt_core::DataLayout;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pixfmt")]
#[command(author, version, about = "Inspect and derive pixel format descriptors")]
#[command(long_about = "
Builds pixel format descriptors from the known-format catalog and applies
derivations (alpha, sub-sampling, layout, byte order) to them.

Examples:
  pixfmt list                               # List known formats
  pixfmt show argb                          # 8-bit ARGB
  pixfmt show rgba -b 16 --premultiplied    # 16-bit premultiplied RGBA
  pixfmt show yuv --subsample 0,1,1 --layout semi-planar --planes 1920x1080
  pixfmt show rgb --trailing-alpha 8 --big-endian --json
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List known formats
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Build a format and print its descriptor
    #[command(visible_alias = "s")]
    Show(ShowArgs),
}

#[derive(Args)]
struct ListArgs {
    /// Bit depth used to build each listed format
    #[arg(short, long, default_value = "8")]
    bits: u32,
}

#[derive(Args)]
struct ShowArgs {
    /// Known format name (see `pixfmt list`)
    name: String,

    /// Bits per component (ignored by fixed-depth formats)
    #[arg(short, long, default_value = "8")]
    bits: u32,

    /// Use premultiplied alpha
    #[arg(long)]
    premultiplied: bool,

    /// Remove straight alpha
    #[arg(long)]
    no_alpha: bool,

    /// Insert a straight alpha component of this depth first
    #[arg(long, value_name = "BITS", conflicts_with = "trailing_alpha")]
    leading_alpha: Option<u32>,

    /// Insert a straight alpha component of this depth last
    #[arg(long, value_name = "BITS")]
    trailing_alpha: Option<u32>,

    /// Sub-sampling shift per component, e.g. 0,1,1 (both directions)
    #[arg(long, value_delimiter = ',', value_name = "F,F,..")]
    subsample: Option<Vec<u8>>,

    /// Vertical sub-sampling shift per component (overrides --subsample vertically)
    #[arg(long, value_delimiter = ',', value_name = "F,F,..")]
    vsubsample: Option<Vec<u8>>,

    /// Data layout: packed, planar, semi-planar
    #[arg(short, long, value_parser = parse_layout)]
    layout: Option<DataLayout>,

    /// Big-endian samples
    #[arg(long)]
    big_endian: bool,

    /// Print plane dimensions for an image of this size, e.g. 1920x1080
    #[arg(long, value_name = "WxH", value_parser = parse_size)]
    planes: Option<(u32, u32)>,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

fn parse_layout(s: &str) -> std::result::Result<DataLayout, String> {
    DataLayout::from_name(s)
        .ok_or_else(|| format!("unknown layout '{s}' (expected packed, planar, semi-planar)"))
}

fn parse_size(s: &str) -> std::result::Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w = w.trim().parse().map_err(|e| format!("invalid width '{w}': {e}"))?;
    let h = h.trim().parse().map_err(|e| format!("invalid height '{h}': {e}"))?;
    Ok((w, h))
}

/// Filter used when `RUST_LOG` is not set.
fn default_filter(verbose: bool) -> &'static str {
    if verbose { "info" } else { "warn" }
}

fn init_logging(verbose: bool) {
    let default = default_filter(verbose);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::List(args) => commands::list::run(args, cli.verbose),
        Commands::Show(args) => commands::show::run(args, cli.verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from([
            "pixfmt", "show", "yuv", "-b", "10", "--subsample", "0,1,1", "--layout", "semi-planar",
            "--planes", "1920x1080",
        ])
        .unwrap();
        let Commands::Show(args) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(args.name, "yuv");
        assert_eq!(args.bits, 10);
        assert_eq!(args.subsample, Some(vec![0, 1, 1]));
        assert_eq!(args.layout, Some(DataLayout::SemiPlanar));
        assert_eq!(args.planes, Some((1920, 1080)));
    }

    #[test]
    fn test_alpha_flags_conflict() {
        let res = Cli::try_parse_from([
            "pixfmt", "show", "rgb", "--leading-alpha", "8", "--trailing-alpha", "8",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_layout("Planar"), Ok(DataLayout::Planar));
        assert!(parse_layout("tiled").is_err());
        assert_eq!(parse_size("640X480"), Ok((640, 480)));
        assert!(parse_size("640").is_err());
        assert!(parse_size("axb").is_err());
    }

    #[test]
    fn test_global_verbose() {
        let cli = Cli::try_parse_from(["pixfmt", "list", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(true), "info");
        assert_eq!(default_filter(false), "warn");
    }
}
