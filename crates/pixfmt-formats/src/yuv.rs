//! YUV family.
//!
//! Planar by default, full resolution. Use
//! [`ImageFormat::with_sub_sampling`] for 4:2:2 / 4:2:0 variants and
//! [`ImageFormat::to_semi_planar`] for NV12-style layouts:
//!
//! ```rust
//! use pixfmt_formats::yuv;
//!
//! let nv12 = yuv(8)?.with_sub_sampling(&[0, 1, 1])?.to_semi_planar();
//! assert!(nv12.is_sub_sampled());
//! # Ok::<(), pixfmt_core::Error>(())
//! ```

use crate::{build, three_bit_depths};
use pixfmt_core::{AlphaMode, ComponentId, DataLayout, ImageFormat, MediaComponent, Result};

const Y: ComponentId = ComponentId::LUMA;
const U: ComponentId = ComponentId::CHROMA_MAJOR;
const V: ComponentId = ComponentId::CHROMA_MINOR;

fn planar(ids: &[ComponentId], bits: u32) -> Result<ImageFormat> {
    let components: Vec<MediaComponent> =
        ids.iter().map(|&id| MediaComponent::new(id, bits)).collect();
    build(DataLayout::Planar, &components)
}

/// Luma, blue-difference, red-difference.
pub fn yuv(bits: u32) -> Result<ImageFormat> {
    planar(&[Y, U, V], bits)
}

/// Red-difference, blue-difference, luma.
pub fn vuy(bits: u32) -> Result<ImageFormat> {
    planar(&[V, U, Y], bits)
}

/// YUV followed by alpha.
pub fn yuva(bits: u32, alpha: AlphaMode) -> Result<ImageFormat> {
    planar(&[Y, U, V, alpha.component_id()], bits)
}

/// Alpha followed by YUV.
pub fn ayuv(bits: u32, alpha: AlphaMode) -> Result<ImageFormat> {
    planar(&[alpha.component_id(), Y, U, V], bits)
}

/// VUY followed by alpha.
pub fn vuya(bits: u32, alpha: AlphaMode) -> Result<ImageFormat> {
    planar(&[V, U, Y, alpha.component_id()], bits)
}

/// Alpha followed by VUY.
pub fn avuy(bits: u32, alpha: AlphaMode) -> Result<ImageFormat> {
    planar(&[alpha.component_id(), V, U, Y], bits)
}

/// YUV with an explicit depth per component, in Y, U, V order.
pub fn yuv_with_bits(bits: &[u32]) -> Result<ImageFormat> {
    let [y, u, v] = three_bit_depths(bits)?;
    build(
        DataLayout::Planar,
        &[
            MediaComponent::new(Y, y),
            MediaComponent::new(U, u),
            MediaComponent::new(V, v),
        ],
    )
}
