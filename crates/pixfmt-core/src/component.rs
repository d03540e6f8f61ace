//! Component identifiers and the component value type.
//!
//! A component is one sample channel of a pixel: an identifier tag naming
//! what the channel carries plus the number of bits each sample occupies.
//!
//! # Well-known identifiers
//!
//! | Constant | Symbol | Meaning |
//! |----------|--------|---------|
//! | [`ComponentId::ALPHA`] | `a` | Straight (non-premultiplied) alpha |
//! | [`ComponentId::PREMULTIPLIED_ALPHA`] | `p` | Alpha premultiplied into color |
//! | [`ComponentId::DELTA`] | `d` | Binary / bayer sample |
//! | [`ComponentId::LUMA`] | `y` | Luma (Y) |
//! | [`ComponentId::CHROMA_MAJOR`] | `u` | Blue-difference chroma (U / Cb) |
//! | [`ComponentId::CHROMA_MINOR`] | `v` | Red-difference chroma (V / Cr) |
//! | [`ComponentId::RED`] .. [`ComponentId::BLUE`] | `r` `g` `b` | RGB primaries |
//! | [`ComponentId::PALETTE`] | `i` | Palette index |
//! | [`ComponentId::CYAN`] .. [`ComponentId::KEY`] | `c` `m` `y` `k` | CMYK inks |
//! | [`ComponentId::CIE_L`] .. [`ComponentId::CIE_B`] | `L` `A` `B` | CIE L*a*b* |
//! | [`ComponentId::CIE_X`] .. [`ComponentId::CIE_Z`] | `X` `Y` `Z` | CIE XYZ |
//!
//! Symbols are a display aid only; `y` is shared by luma and yellow.
//!
//! # Example
//!
//! ```rust
//! use pixfmt_core::{ComponentId, MediaComponent};
//!
//! let alpha = MediaComponent::new(ComponentId::ALPHA, 8);
//! assert!(alpha.id().is_alpha());
//! assert_eq!(alpha.bits(), 8);
//! ```

use std::fmt;

/// Byte-sized tag identifying what a component carries.
///
/// The associated constants form the well-known catalog. Custom tags can be
/// built with [`ComponentId::new`]; they render as `?` in format strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ComponentId(u8);

impl ComponentId {
    /// Straight alpha.
    pub const ALPHA: Self = Self(1);
    /// Alpha already multiplied into the color components.
    pub const PREMULTIPLIED_ALPHA: Self = Self(2);
    /// Binary or bayer mosaic sample.
    pub const DELTA: Self = Self(3);
    /// Luma.
    pub const LUMA: Self = Self(4);
    /// Blue-difference chroma (U, Cb).
    pub const CHROMA_MAJOR: Self = Self(5);
    /// Red-difference chroma (V, Cr).
    pub const CHROMA_MINOR: Self = Self(6);
    /// Red.
    pub const RED: Self = Self(7);
    /// Green.
    pub const GREEN: Self = Self(8);
    /// Blue.
    pub const BLUE: Self = Self(9);
    /// Palette index.
    pub const PALETTE: Self = Self(10);
    /// Cyan ink.
    pub const CYAN: Self = Self(11);
    /// Magenta ink.
    pub const MAGENTA: Self = Self(12);
    /// Yellow ink.
    pub const YELLOW: Self = Self(13);
    /// Key (black) ink.
    pub const KEY: Self = Self(14);
    /// CIE lightness L*.
    pub const CIE_L: Self = Self(15);
    /// CIE a* (green-red).
    pub const CIE_A: Self = Self(16);
    /// CIE b* (blue-yellow).
    pub const CIE_B: Self = Self(17);
    /// CIE X tristimulus.
    pub const CIE_X: Self = Self(18);
    /// CIE Y tristimulus.
    pub const CIE_Y: Self = Self(19);
    /// CIE Z tristimulus.
    pub const CIE_Z: Self = Self(20);

    /// Every well-known identifier, in catalog order.
    pub const ALL: [Self; 20] = [
        Self::ALPHA,
        Self::PREMULTIPLIED_ALPHA,
        Self::DELTA,
        Self::LUMA,
        Self::CHROMA_MAJOR,
        Self::CHROMA_MINOR,
        Self::RED,
        Self::GREEN,
        Self::BLUE,
        Self::PALETTE,
        Self::CYAN,
        Self::MAGENTA,
        Self::YELLOW,
        Self::KEY,
        Self::CIE_L,
        Self::CIE_A,
        Self::CIE_B,
        Self::CIE_X,
        Self::CIE_Y,
        Self::CIE_Z,
    ];

    /// Creates an identifier from its raw tag value.
    #[inline]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Raw tag value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether this is either alpha tag.
    #[inline]
    pub const fn is_alpha(self) -> bool {
        self.0 == Self::ALPHA.0 || self.0 == Self::PREMULTIPLIED_ALPHA.0
    }

    /// Whether this tag belongs to the well-known catalog.
    #[inline]
    pub const fn is_well_known(self) -> bool {
        self.0 >= Self::ALPHA.0 && self.0 <= Self::CIE_Z.0
    }

    /// One-character symbol used by format strings.
    pub const fn symbol(self) -> char {
        match self {
            Self::ALPHA => 'a',
            Self::PREMULTIPLIED_ALPHA => 'p',
            Self::DELTA => 'd',
            Self::LUMA => 'y',
            Self::CHROMA_MAJOR => 'u',
            Self::CHROMA_MINOR => 'v',
            Self::RED => 'r',
            Self::GREEN => 'g',
            Self::BLUE => 'b',
            Self::PALETTE => 'i',
            Self::CYAN => 'c',
            Self::MAGENTA => 'm',
            Self::YELLOW => 'y',
            Self::KEY => 'k',
            Self::CIE_L => 'L',
            Self::CIE_A => 'A',
            Self::CIE_B => 'B',
            Self::CIE_X => 'X',
            Self::CIE_Y => 'Y',
            Self::CIE_Z => 'Z',
            _ => '?',
        }
    }

    /// Readable name, or `None` for a custom tag.
    pub const fn name(self) -> Option<&'static str> {
        Some(match self {
            Self::ALPHA => "alpha",
            Self::PREMULTIPLIED_ALPHA => "premultiplied alpha",
            Self::DELTA => "delta",
            Self::LUMA => "luma",
            Self::CHROMA_MAJOR => "chroma major",
            Self::CHROMA_MINOR => "chroma minor",
            Self::RED => "red",
            Self::GREEN => "green",
            Self::BLUE => "blue",
            Self::PALETTE => "palette",
            Self::CYAN => "cyan",
            Self::MAGENTA => "magenta",
            Self::YELLOW => "yellow",
            Self::KEY => "key",
            Self::CIE_L => "CIE L",
            Self::CIE_A => "CIE a",
            Self::CIE_B => "CIE b",
            Self::CIE_X => "CIE X",
            Self::CIE_Y => "CIE Y",
            Self::CIE_Z => "CIE Z",
            _ => return None,
        })
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "custom({})", self.0),
        }
    }
}

impl From<u8> for ComponentId {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<ComponentId> for u8 {
    fn from(id: ComponentId) -> Self {
        id.0
    }
}

/// One sample channel: identifier plus bits per sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaComponent {
    id: ComponentId,
    bits: u32,
}

impl MediaComponent {
    /// Creates a component. A bit depth of zero is rejected later, by the
    /// format that receives the component.
    #[inline]
    pub const fn new(id: ComponentId, bits: u32) -> Self {
        Self { id, bits }
    }

    /// Component identifier.
    #[inline]
    pub const fn id(&self) -> ComponentId {
        self.id
    }

    /// Bits per sample.
    #[inline]
    pub const fn bits(&self) -> u32 {
        self.bits
    }
}

impl fmt::Display for MediaComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.bits)
    }
}

/// How an alpha component relates to the color components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlphaMode {
    /// Color is stored independently of alpha.
    #[default]
    Straight,
    /// Color has already been multiplied by alpha.
    Premultiplied,
}

impl AlphaMode {
    /// Identifier used for an alpha component in this mode.
    #[inline]
    pub const fn component_id(self) -> ComponentId {
        match self {
            Self::Straight => ComponentId::ALPHA,
            Self::Premultiplied => ComponentId::PREMULTIPLIED_ALPHA,
        }
    }

    /// Alpha component of the given depth in this mode.
    #[inline]
    pub const fn component(self, bits: u32) -> MediaComponent {
        MediaComponent::new(self.component_id(), bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_values_distinct() {
        let values: HashSet<u8> = ComponentId::ALL.iter().map(|id| id.value()).collect();
        assert_eq!(values.len(), ComponentId::ALL.len());
        assert_ne!(ComponentId::PALETTE, ComponentId::ALPHA);
    }

    #[test]
    fn test_alpha_tags() {
        assert!(ComponentId::ALPHA.is_alpha());
        assert!(ComponentId::PREMULTIPLIED_ALPHA.is_alpha());
        assert!(!ComponentId::PALETTE.is_alpha());
        assert!(!ComponentId::LUMA.is_alpha());
    }

    #[test]
    fn test_symbols_and_names() {
        assert_eq!(ComponentId::RED.symbol(), 'r');
        assert_eq!(ComponentId::CIE_X.symbol(), 'X');
        assert_eq!(ComponentId::new(200).symbol(), '?');
        assert_eq!(ComponentId::KEY.name(), Some("key"));
        assert_eq!(ComponentId::new(200).name(), None);
        assert_eq!(ComponentId::new(200).to_string(), "custom(200)");
        assert!(ComponentId::ALL.iter().all(|id| id.is_well_known()));
        assert!(!ComponentId::new(0).is_well_known());
    }

    #[test]
    fn test_component_equality() {
        let a = MediaComponent::new(ComponentId::RED, 8);
        assert_eq!(a, MediaComponent::new(ComponentId::RED, 8));
        assert_ne!(a, MediaComponent::new(ComponentId::RED, 10));
        assert_ne!(a, MediaComponent::new(ComponentId::GREEN, 8));
        assert_eq!(a.to_string(), "red:8");
    }

    #[test]
    fn test_alpha_mode() {
        assert_eq!(AlphaMode::default(), AlphaMode::Straight);
        assert_eq!(AlphaMode::Straight.component_id(), ComponentId::ALPHA);
        let p = AlphaMode::Premultiplied.component(16);
        assert_eq!(p.id(), ComponentId::PREMULTIPLIED_ALPHA);
        assert_eq!(p.bits(), 16);
    }
}
