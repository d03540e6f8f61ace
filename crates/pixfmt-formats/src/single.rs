//! Single-component formats: binary, bayer, monochrome and palette.

use crate::build;
use pixfmt_core::{ComponentId, DataLayout, ImageFormat, MediaComponent, Result};

/// One-bit delta samples.
pub fn binary() -> Result<ImageFormat> {
    bayer(1)
}

/// Raw bayer mosaic: one delta component.
pub fn bayer(bits: u32) -> Result<ImageFormat> {
    build(DataLayout::Packed, &[MediaComponent::new(ComponentId::DELTA, bits)])
}

/// Luma only.
pub fn monochrome(bits: u32) -> Result<ImageFormat> {
    build(DataLayout::Packed, &[MediaComponent::new(ComponentId::LUMA, bits)])
}

/// Palette indices.
pub fn palette(bits: u32) -> Result<ImageFormat> {
    build(DataLayout::Packed, &[MediaComponent::new(ComponentId::PALETTE, bits)])
}
