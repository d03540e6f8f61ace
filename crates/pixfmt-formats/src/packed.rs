//! Fixed bit-packed layouts from display hardware and video capture.
//!
//! ```text
//! rgb_565       rrrrrggg gggbbbbb                       16 bits
//! argb_2101010  aarrrrrr rrrrgggg ggggggbb bbbbbbbb     32 bits
//! yuv_565       yyyyyuuu uuuvvvvv                       16 bits
//! ```

use crate::{build, rgb_with_bits};
use pixfmt_core::{ComponentId, DataLayout, ImageFormat, MediaComponent, Result};

/// 5-6-5 RGB.
pub fn rgb_565() -> Result<ImageFormat> {
    rgb_with_bits(&[5, 6, 5])
}

/// 2-bit alpha with 10-bit RGB.
pub fn argb_2101010() -> Result<ImageFormat> {
    rgb_with_bits(&[10, 10, 10])?.with_leading_alpha_component(2)
}

/// 5-6-5 YUV, packed.
pub fn yuv_565() -> Result<ImageFormat> {
    build(
        DataLayout::Packed,
        &[
            MediaComponent::new(ComponentId::LUMA, 5),
            MediaComponent::new(ComponentId::CHROMA_MAJOR, 6),
            MediaComponent::new(ComponentId::CHROMA_MINOR, 5),
        ],
    )
}
