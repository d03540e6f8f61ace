//! Show command: build a format, apply derivations, print the result.

use crate::ShowArgs;
use anyhow::{Context, Result};
use pixfmt_core::{ByteOrder, DataLayout, ImageFormat};
use serde_json::json;
use tracing::debug;

/// Runs the show command.
pub fn run(args: ShowArgs, verbose: bool) -> Result<()> {
    let format = derive(&args)?;
    if args.json {
        print_json(&args, &format)?;
    } else {
        print_text(&args, &format, verbose);
    }
    Ok(())
}

/// Builds the catalog format and applies the requested derivations in
/// order: alpha removal, alpha insertion, sub-sampling, layout, byte order.
fn derive(args: &ShowArgs) -> Result<ImageFormat> {
    let known = super::lookup(&args.name)?;
    let mut format = known
        .build(args.bits, super::alpha_mode(args.premultiplied))
        .with_context(|| format!("Failed to build {}", known))?;
    debug!(%format, "built");

    if args.no_alpha {
        format = format
            .without_alpha_component()
            .context("Cannot remove alpha")?;
    }
    if let Some(bits) = args.leading_alpha {
        format = format
            .with_leading_alpha_component(bits)
            .context("Cannot insert leading alpha")?;
    }
    if let Some(bits) = args.trailing_alpha {
        format = format
            .with_trailing_alpha_component(bits)
            .context("Cannot insert trailing alpha")?;
    }

    if args.subsample.is_some() || args.vsubsample.is_some() {
        let zeros = vec![0u8; format.component_count()];
        let horizontal = args.subsample.as_deref().unwrap_or(zeros.as_slice());
        let vertical = args.vsubsample.as_deref().unwrap_or(horizontal);
        format = format
            .with_sub_sampling_xy(horizontal, vertical)
            .context("Invalid sub-sampling factors")?;
    }

    if let Some(layout) = args.layout {
        format = match layout {
            DataLayout::Packed => format.to_packed(),
            DataLayout::Planar => format.to_planar(),
            DataLayout::SemiPlanar => format.to_semi_planar(),
        };
    }
    if args.big_endian {
        format = format.with_byte_order(ByteOrder::Big);
    }

    debug!(%format, "derived");
    Ok(format)
}

/// Prints the descriptor in human-readable text format.
fn print_text(args: &ShowArgs, format: &ImageFormat, verbose: bool) {
    println!("{}", args.name);
    println!("  Format:      {}", format.format_string());
    println!("  Layout:      {}", format.data_layout());
    println!("  Byte order:  {}", format.byte_order());
    println!("  Bits/pixel:  {}", format.bits_per_pixel());
    println!("  Alpha:       {}", alpha_summary(format));
    println!("  Sub-sampled: {}", format.is_sub_sampled());
    println!("  Components:");
    for (i, c) in format.components().iter().enumerate() {
        print!(
            "    [{}] {:<20} {:>2} bits",
            i,
            c.id().to_string(),
            c.bits()
        );
        if verbose || format.is_sub_sampled() {
            print!(
                "  h>>{} v>>{}",
                format.horizontal_sampling_factors()[i],
                format.vertical_sampling_factors()[i]
            );
        }
        if let Some((w, h)) = args.planes.and_then(|(w, h)| format.plane_dimensions(i, w, h)) {
            print!("  {}x{}", w, h);
        }
        println!();
    }
}

/// Prints the descriptor as JSON.
fn print_json(args: &ShowArgs, format: &ImageFormat) -> Result<()> {
    let planes: Option<Vec<_>> = args.planes.map(|(w, h)| {
        (0..format.component_count())
            .filter_map(|i| format.plane_dimensions(i, w, h))
            .map(|(pw, ph)| json!({ "width": pw, "height": ph }))
            .collect()
    });
    let value = json!({
        "name": args.name,
        "format_string": format.format_string(),
        "bits_per_pixel": format.bits_per_pixel(),
        "has_alpha": format.has_alpha_component(),
        "premultiplied": format.is_premultiplied_with_alpha(),
        "sub_sampled": format.is_sub_sampled(),
        "descriptor": format,
        "planes": planes,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn alpha_summary(format: &ImageFormat) -> &'static str {
    match (format.has_alpha_component(), format.is_premultiplied_with_alpha()) {
        (false, _) => "none",
        (true, false) => "straight",
        (true, true) => "premultiplied",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cli;
    use clap::Parser;
    use pixfmt_core::ComponentId;

    fn show_args(argv: &[&str]) -> ShowArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            crate::Commands::Show(args) => args,
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn test_derive_nv12() {
        let args = show_args(&[
            "pixfmt", "show", "yuv", "--subsample", "0,1,1", "--layout", "semi-planar",
        ]);
        let f = derive(&args).unwrap();
        assert_eq!(f.data_layout(), DataLayout::SemiPlanar);
        assert_eq!(f.horizontal_sampling_factors(), &[0, 1, 1]);
        assert_eq!(f.vertical_sampling_factors(), &[0, 1, 1]);
    }

    #[test]
    fn test_derive_vertical_only() {
        let args = show_args(&["pixfmt", "show", "yuv", "--vsubsample", "0,1,1"]);
        let f = derive(&args).unwrap();
        assert_eq!(f.horizontal_sampling_factors(), &[0, 0, 0]);
        assert_eq!(f.vertical_sampling_factors(), &[0, 1, 1]);
    }

    #[test]
    fn test_derive_alpha() {
        let args = show_args(&["pixfmt", "show", "rgb_565", "--trailing-alpha", "1", "--big-endian"]);
        let f = derive(&args).unwrap();
        assert_eq!(f.format_string(), "rgba");
        assert_eq!(f.byte_order(), ByteOrder::Big);
        assert_eq!(f.bits_per_pixel(), 17);

        let args = show_args(&["pixfmt", "show", "argb", "--no-alpha"]);
        assert!(!derive(&args).unwrap().has_alpha_component());
    }

    #[test]
    fn test_alpha_summary() {
        let args = show_args(&["pixfmt", "show", "abgr", "--premultiplied"]);
        let f = derive(&args).unwrap();
        assert_eq!(f.components()[0].id(), ComponentId::PREMULTIPLIED_ALPHA);
        assert_eq!(alpha_summary(&f), "premultiplied");
    }

    #[test]
    fn test_derive_errors() {
        let args = show_args(&["pixfmt", "show", "hsv"]);
        assert!(derive(&args).is_err());

        let args = show_args(&["pixfmt", "show", "rgb", "--subsample", "1,1"]);
        let err = derive(&args).unwrap_err();
        assert!(err.to_string().contains("sub-sampling"));
    }
}
