//! RGB family.
//!
//! Every constructor here is packed, little-endian. Component order
//! follows the name: [`bgra`] stores blue first and alpha last.

use crate::{build, three_bit_depths};
use pixfmt_core::{AlphaMode, ComponentId, DataLayout, ImageFormat, MediaComponent, Result};

const RED: ComponentId = ComponentId::RED;
const GREEN: ComponentId = ComponentId::GREEN;
const BLUE: ComponentId = ComponentId::BLUE;

fn packed(ids: &[ComponentId], bits: u32) -> Result<ImageFormat> {
    let components: Vec<MediaComponent> =
        ids.iter().map(|&id| MediaComponent::new(id, bits)).collect();
    build(DataLayout::Packed, &components)
}

/// Red, green, blue.
pub fn rgb(bits: u32) -> Result<ImageFormat> {
    packed(&[RED, GREEN, BLUE], bits)
}

/// Blue, green, red.
pub fn bgr(bits: u32) -> Result<ImageFormat> {
    packed(&[BLUE, GREEN, RED], bits)
}

/// Alpha, red, green, blue.
pub fn argb(bits: u32, alpha: AlphaMode) -> Result<ImageFormat> {
    packed(&[alpha.component_id(), RED, GREEN, BLUE], bits)
}

/// Red, green, blue, alpha.
pub fn rgba(bits: u32, alpha: AlphaMode) -> Result<ImageFormat> {
    packed(&[RED, GREEN, BLUE, alpha.component_id()], bits)
}

/// Blue, green, red, alpha.
pub fn bgra(bits: u32, alpha: AlphaMode) -> Result<ImageFormat> {
    packed(&[BLUE, GREEN, RED, alpha.component_id()], bits)
}

/// Alpha, blue, green, red.
pub fn abgr(bits: u32, alpha: AlphaMode) -> Result<ImageFormat> {
    packed(&[alpha.component_id(), BLUE, GREEN, RED], bits)
}

/// RGB with an explicit depth per component, in red, green, blue order.
///
/// # Errors
///
/// [`pixfmt_core::Error::ArgumentOutOfRange`] unless exactly three depths
/// are given.
///
/// # Example
///
/// ```rust
/// let f = pixfmt_formats::rgb_with_bits(&[5, 6, 5])?;
/// assert_eq!(f.bits_per_pixel(), 16);
/// # Ok::<(), pixfmt_core::Error>(())
/// ```
pub fn rgb_with_bits(bits: &[u32]) -> Result<ImageFormat> {
    let [r, g, b] = three_bit_depths(bits)?;
    build(
        DataLayout::Packed,
        &[
            MediaComponent::new(RED, r),
            MediaComponent::new(GREEN, g),
            MediaComponent::new(BLUE, b),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixfmt_core::{ByteOrder, Error};

    #[test]
    fn test_orders() {
        let cases = [
            (rgb(8).unwrap(), "rgb"),
            (bgr(8).unwrap(), "bgr"),
            (argb(8, AlphaMode::Straight).unwrap(), "argb"),
            (rgba(8, AlphaMode::Straight).unwrap(), "rgba"),
            (bgra(8, AlphaMode::Straight).unwrap(), "bgra"),
            (abgr(8, AlphaMode::Straight).unwrap(), "abgr"),
            (argb(8, AlphaMode::Premultiplied).unwrap(), "prgb"),
            (bgra(8, AlphaMode::Premultiplied).unwrap(), "bgrp"),
        ];
        for (format, expected) in cases {
            assert_eq!(format.format_string(), expected);
            assert_eq!(format.data_layout(), DataLayout::Packed);
            assert_eq!(format.byte_order(), ByteOrder::Little);
        }
    }

    #[test]
    fn test_premultiplied() {
        let p = rgba(16, AlphaMode::Premultiplied).unwrap();
        assert!(p.is_premultiplied_with_alpha());
        assert_eq!(p.alpha_component().map(|a| a.bits()), Some(16));
        assert!(!rgba(16, AlphaMode::Straight).unwrap().is_premultiplied_with_alpha());
    }

    #[test]
    fn test_rgb_with_bits() {
        let f = rgb_with_bits(&[10, 12, 10]).unwrap();
        let bits: Vec<u32> = f.components().iter().map(|c| c.bits()).collect();
        assert_eq!(bits, [10, 12, 10]);

        assert_eq!(rgb_with_bits(&[8, 8]).unwrap_err(), Error::out_of_range("bits", 3, 2));
        assert!(rgb_with_bits(&[8, 8, 8, 8]).is_err());
        assert!(rgb_with_bits(&[8, 0, 8]).is_err());
    }
}
