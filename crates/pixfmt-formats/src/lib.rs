//! # pixfmt-formats
//!
//! Named constructors for common pixel formats.
//!
//! Each constructor is a pure function of its arguments that assembles an
//! [`ImageFormat`] from a literal component sequence. Byte order is always
//! little-endian; layouts default per family:
//!
//! | Family | Constructors | Layout |
//! |--------|--------------|--------|
//! | Single component | [`binary`], [`bayer`], [`monochrome`], [`palette`] | Packed |
//! | RGB | [`rgb`], [`bgr`], [`argb`], [`rgba`], [`bgra`], [`abgr`], [`rgb_with_bits`] | Packed |
//! | YUV | [`yuv`], [`vuy`], [`yuva`], [`ayuv`], [`vuya`], [`avuy`], [`yuv_with_bits`] | Planar |
//! | CMYK | [`cmyk`], [`cmyka`] | Planar |
//! | CIE | [`xyz`], [`lab`] | Packed |
//! | Bit-packed | [`rgb_565`], [`argb_2101010`], [`yuv_565`] | Packed |
//!
//! Other byte orders and layouts are reached through the derivation
//! operations on [`ImageFormat`].
//!
//! # Usage
//!
//! ```rust
//! use pixfmt_core::AlphaMode;
//! use pixfmt_formats::{argb, cmyk, KnownFormat};
//!
//! let premul = argb(8, AlphaMode::Premultiplied)?;
//! assert!(premul.is_premultiplied_with_alpha());
//!
//! let print = cmyk(8)?;
//! assert_eq!(print.format_string(), "cmyk");
//!
//! let by_name = KnownFormat::from_name("ARGB").unwrap().build(8, AlphaMode::Straight)?;
//! assert_eq!(by_name, argb(8, AlphaMode::Straight)?);
//! # Ok::<(), pixfmt_core::Error>(())
//! ```
//!
//! # Dependencies
//!
//! - [`pixfmt_core`] - Descriptor types
//! - [`tracing`] - Construction events

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cie;
pub mod cmyk;
pub mod packed;
pub mod rgb;
pub mod single;
pub mod yuv;

pub use cie::{lab, xyz};
pub use cmyk::{cmyk, cmyka};
pub use packed::{argb_2101010, rgb_565, yuv_565};
pub use rgb::{abgr, argb, bgr, bgra, rgb, rgb_with_bits, rgba};
pub use single::{bayer, binary, monochrome, palette};
pub use yuv::{avuy, ayuv, vuy, vuya, yuv, yuv_with_bits, yuva};

use pixfmt_core::{AlphaMode, ByteOrder, DataLayout, Error, ImageFormat, MediaComponent, Result};
use std::fmt;
use tracing::trace;

fn build(layout: DataLayout, components: &[MediaComponent]) -> Result<ImageFormat> {
    let format = ImageFormat::new(ByteOrder::Little, layout, components)?;
    trace!(format = %format, "catalog format");
    Ok(format)
}

fn three_bit_depths(bits: &[u32]) -> Result<[u32; 3]> {
    <[u32; 3]>::try_from(bits).map_err(|_| Error::out_of_range("bits", 3, bits.len()))
}

/// Named format families of the catalog, for lookup by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownFormat {
    /// [`binary`]
    Binary,
    /// [`bayer`]
    Bayer,
    /// [`monochrome`]
    Monochrome,
    /// [`palette`]
    Palette,
    /// [`rgb`]
    Rgb,
    /// [`bgr`]
    Bgr,
    /// [`argb`]
    Argb,
    /// [`rgba`]
    Rgba,
    /// [`bgra`]
    Bgra,
    /// [`abgr`]
    Abgr,
    /// [`yuv`]
    Yuv,
    /// [`vuy`]
    Vuy,
    /// [`yuva`]
    Yuva,
    /// [`ayuv`]
    Ayuv,
    /// [`vuya`]
    Vuya,
    /// [`avuy`]
    Avuy,
    /// [`cmyk`]
    Cmyk,
    /// [`cmyka`]
    Cmyka,
    /// [`xyz`]
    Xyz,
    /// [`lab`]
    Lab,
    /// [`rgb_565`]
    Rgb565,
    /// [`argb_2101010`]
    Argb2101010,
    /// [`yuv_565`]
    Yuv565,
}

impl KnownFormat {
    /// Every family, in catalog order.
    pub const ALL: [Self; 23] = [
        Self::Binary,
        Self::Bayer,
        Self::Monochrome,
        Self::Palette,
        Self::Rgb,
        Self::Bgr,
        Self::Argb,
        Self::Rgba,
        Self::Bgra,
        Self::Abgr,
        Self::Yuv,
        Self::Vuy,
        Self::Yuva,
        Self::Ayuv,
        Self::Vuya,
        Self::Avuy,
        Self::Cmyk,
        Self::Cmyka,
        Self::Xyz,
        Self::Lab,
        Self::Rgb565,
        Self::Argb2101010,
        Self::Yuv565,
    ];

    /// Lowercase name, matching the constructor.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Bayer => "bayer",
            Self::Monochrome => "monochrome",
            Self::Palette => "palette",
            Self::Rgb => "rgb",
            Self::Bgr => "bgr",
            Self::Argb => "argb",
            Self::Rgba => "rgba",
            Self::Bgra => "bgra",
            Self::Abgr => "abgr",
            Self::Yuv => "yuv",
            Self::Vuy => "vuy",
            Self::Yuva => "yuva",
            Self::Ayuv => "ayuv",
            Self::Vuya => "vuya",
            Self::Avuy => "avuy",
            Self::Cmyk => "cmyk",
            Self::Cmyka => "cmyka",
            Self::Xyz => "xyz",
            Self::Lab => "lab",
            Self::Rgb565 => "rgb_565",
            Self::Argb2101010 => "argb_2101010",
            Self::Yuv565 => "yuv_565",
        }
    }

    /// Case-insensitive lookup; `-` and `_` are interchangeable.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim().to_ascii_lowercase().replace('-', "_");
        let wanted = match wanted.as_str() {
            "mono" | "gray" | "grey" => "monochrome",
            "rgb565" => "rgb_565",
            "argb2101010" => "argb_2101010",
            "yuv565" => "yuv_565",
            other => other,
        };
        Self::ALL.into_iter().find(|f| f.name() == wanted)
    }

    /// Whether the family includes an alpha component.
    pub const fn has_alpha(&self) -> bool {
        matches!(
            self,
            Self::Argb
                | Self::Rgba
                | Self::Bgra
                | Self::Abgr
                | Self::Yuva
                | Self::Ayuv
                | Self::Vuya
                | Self::Avuy
                | Self::Cmyka
                | Self::Argb2101010
        )
    }

    /// Whether the bit depth is fixed by the family.
    pub const fn is_fixed_depth(&self) -> bool {
        matches!(
            self,
            Self::Binary | Self::Rgb565 | Self::Argb2101010 | Self::Yuv565
        )
    }

    /// Builds the family's format.
    ///
    /// `bits` is ignored by fixed-depth families; `alpha` is ignored by
    /// families without alpha and by [`KnownFormat::Argb2101010`].
    pub fn build(&self, bits: u32, alpha: AlphaMode) -> Result<ImageFormat> {
        trace!(name = self.name(), bits, ?alpha, "building known format");
        match self {
            Self::Binary => binary(),
            Self::Bayer => bayer(bits),
            Self::Monochrome => monochrome(bits),
            Self::Palette => palette(bits),
            Self::Rgb => rgb(bits),
            Self::Bgr => bgr(bits),
            Self::Argb => argb(bits, alpha),
            Self::Rgba => rgba(bits, alpha),
            Self::Bgra => bgra(bits, alpha),
            Self::Abgr => abgr(bits, alpha),
            Self::Yuv => yuv(bits),
            Self::Vuy => vuy(bits),
            Self::Yuva => yuva(bits, alpha),
            Self::Ayuv => ayuv(bits, alpha),
            Self::Vuya => vuya(bits, alpha),
            Self::Avuy => avuy(bits, alpha),
            Self::Cmyk => cmyk(bits),
            Self::Cmyka => cmyka(bits, alpha),
            Self::Xyz => xyz(bits),
            Self::Lab => lab(bits),
            Self::Rgb565 => rgb_565(),
            Self::Argb2101010 => argb_2101010(),
            Self::Yuv565 => yuv_565(),
        }
    }
}

impl fmt::Display for KnownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
