//! Image format descriptor.
//!
//! [`ImageFormat`] is the metadata contract for an image buffer: which
//! components it carries and in what order, their bit depths, the byte order,
//! the memory layout, and how far each component is sub-sampled.
//!
//! # Sub-sampling factors
//!
//! Each component has one horizontal and one vertical factor. A factor `f`
//! is a right shift applied to the parent image dimension, so the component
//! grid is `width >> h` by `height >> v`. Zero means full resolution.
//!
//! ```text
//! YUV 4:2:0, 1920x1080      h = [0, 1, 1]   v = [0, 1, 1]
//!
//!   Y  1920x1080
//!   U   960x540
//!   V   960x540
//! ```
//!
//! # Usage
//!
//! ```rust
//! use pixfmt_core::{ByteOrder, ComponentId, DataLayout, ImageFormat, MediaComponent};
//!
//! let components = [
//!     MediaComponent::new(ComponentId::LUMA, 8),
//!     MediaComponent::new(ComponentId::CHROMA_MAJOR, 8),
//!     MediaComponent::new(ComponentId::CHROMA_MINOR, 8),
//! ];
//! let i420 = ImageFormat::with_sampling(
//!     ByteOrder::Little,
//!     DataLayout::Planar,
//!     &components,
//!     &[0, 1, 1],
//! )?;
//!
//! assert!(i420.is_sub_sampled());
//! assert_eq!(i420.format_string(), "yuv");
//! assert_eq!(i420.plane_dimensions(1, 1920, 1080), Some((960, 540)));
//! # Ok::<(), pixfmt_core::Error>(())
//! ```
//!
//! # Used By
//!
//! - [`crate::derive`] - Derivation operations
//! - `pixfmt-formats` - Known-format constructors

use crate::component::{ComponentId, MediaComponent};
use crate::error::{Error, Result};
use crate::media::{ByteOrder, DataLayout, MediaFormat, MediaType};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Immutable pixel format descriptor.
///
/// Equality and hashing cover the component sequence and both
/// sampling-factor sequences. Byte order and data layout are not compared,
/// so a packed and a planar descriptor of the same components are equal.
///
/// # Invariants
///
/// - at least one component, every bit depth non-zero
/// - component identifiers are unique
/// - exactly one horizontal and one vertical factor per component
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "RawImageFormat", try_from = "RawImageFormat")
)]
pub struct ImageFormat {
    base: MediaFormat,
    horizontal: Box<[u8]>,
    vertical: Box<[u8]>,
}

impl ImageFormat {
    /// Creates a descriptor with every component at full resolution.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] for an empty sequence or a zero bit depth
    /// - [`Error::DuplicateComponent`] for a repeated identifier
    pub fn new(
        byte_order: ByteOrder,
        data_layout: DataLayout,
        components: &[MediaComponent],
    ) -> Result<Self> {
        let base = MediaFormat::new(MediaType::Image, byte_order, data_layout, components)?;
        let zeros: Box<[u8]> = vec![0; components.len()].into();
        Ok(Self {
            base,
            horizontal: zeros.clone(),
            vertical: zeros,
        })
    }

    /// Creates a descriptor using `factors` for both directions.
    ///
    /// # Errors
    ///
    /// As [`ImageFormat::new`], plus [`Error::ArgumentOutOfRange`] when
    /// `factors` does not have one entry per component.
    pub fn with_sampling(
        byte_order: ByteOrder,
        data_layout: DataLayout,
        components: &[MediaComponent],
        factors: &[u8],
    ) -> Result<Self> {
        Self::with_sampling_xy(byte_order, data_layout, components, factors, factors)
    }

    /// Creates a descriptor with independent horizontal and vertical factors.
    ///
    /// # Errors
    ///
    /// As [`ImageFormat::new`], plus [`Error::ArgumentOutOfRange`] naming
    /// whichever factor sequence does not have one entry per component.
    pub fn with_sampling_xy(
        byte_order: ByteOrder,
        data_layout: DataLayout,
        components: &[MediaComponent],
        horizontal: &[u8],
        vertical: &[u8],
    ) -> Result<Self> {
        let base = MediaFormat::new(MediaType::Image, byte_order, data_layout, components)?;
        Self::from_parts(base, horizontal, vertical)
    }

    /// Creates a descriptor that takes byte order, layout and sampling from
    /// `source` and replaces its components.
    ///
    /// Factors follow component identifiers: a component also present in
    /// `source` keeps the factors it had there, a new one is full
    /// resolution.
    pub fn derive_from(source: &ImageFormat, components: &[MediaComponent]) -> Result<Self> {
        let (horizontal, vertical): (Vec<u8>, Vec<u8>) = components
            .iter()
            .map(|c| match source.component_index(c.id()) {
                Some(i) => (source.horizontal[i], source.vertical[i]),
                None => (0, 0),
            })
            .unzip();
        let base = MediaFormat::new(
            MediaType::Image,
            source.byte_order(),
            source.data_layout(),
            components,
        )?;
        Ok(Self {
            base,
            horizontal: horizontal.into(),
            vertical: vertical.into(),
        })
    }

    pub(crate) fn from_parts(base: MediaFormat, horizontal: &[u8], vertical: &[u8]) -> Result<Self> {
        let count = base.components().len();
        if horizontal.len() != count {
            return Err(Error::out_of_range("horizontal", count, horizontal.len()));
        }
        if vertical.len() != count {
            return Err(Error::out_of_range("vertical", count, vertical.len()));
        }
        Ok(Self {
            base,
            horizontal: horizontal.into(),
            vertical: vertical.into(),
        })
    }

    pub(crate) fn replace_base(&self, base: MediaFormat) -> Self {
        Self {
            base,
            horizontal: self.horizontal.clone(),
            vertical: self.vertical.clone(),
        }
    }

    /// The embedded generic base.
    #[inline]
    pub fn as_media_format(&self) -> &MediaFormat {
        &self.base
    }

    /// Always [`MediaType::Image`].
    #[inline]
    pub fn media_type(&self) -> MediaType {
        self.base.media_type()
    }

    /// Byte order of multi-byte samples.
    #[inline]
    pub fn byte_order(&self) -> ByteOrder {
        self.base.byte_order()
    }

    /// Memory arrangement of the components.
    #[inline]
    pub fn data_layout(&self) -> DataLayout {
        self.base.data_layout()
    }

    /// Components in packing/plane order.
    #[inline]
    pub fn components(&self) -> &[MediaComponent] {
        self.base.components()
    }

    /// Number of components.
    #[inline]
    pub fn component_count(&self) -> usize {
        self.base.components().len()
    }

    /// Horizontal sub-sampling shift per component.
    #[inline]
    pub fn horizontal_sampling_factors(&self) -> &[u8] {
        &self.horizontal
    }

    /// Vertical sub-sampling shift per component.
    #[inline]
    pub fn vertical_sampling_factors(&self) -> &[u8] {
        &self.vertical
    }

    /// First component with the given identifier, or `None`.
    #[inline]
    pub fn component_by_id(&self, id: ComponentId) -> Option<&MediaComponent> {
        self.base.component_by_id(id)
    }

    /// Position of the component with the given identifier, or `None`.
    #[inline]
    pub fn component_index(&self, id: ComponentId) -> Option<usize> {
        self.base.component_index(id)
    }

    /// Whether a straight or premultiplied alpha component is present.
    pub fn has_alpha_component(&self) -> bool {
        self.alpha_component().is_some()
    }

    /// The first alpha component of either kind.
    pub fn alpha_component(&self) -> Option<&MediaComponent> {
        self.components().iter().find(|c| c.id().is_alpha())
    }

    /// Whether the color components are premultiplied by alpha.
    pub fn is_premultiplied_with_alpha(&self) -> bool {
        self.component_by_id(ComponentId::PREMULTIPLIED_ALPHA).is_some()
    }

    /// Whether any component is stored below full resolution.
    pub fn is_sub_sampled(&self) -> bool {
        self.horizontal.iter().chain(self.vertical.iter()).any(|&f| f > 0)
    }

    /// Component symbols in order, e.g. `"argb"`.
    ///
    /// A display fingerprint: formats differing only in bit depth, sampling
    /// or layout share the same string.
    pub fn format_string(&self) -> String {
        self.components().iter().map(|c| c.id().symbol()).collect()
    }

    /// Sum of all component bit depths.
    pub fn bits_per_pixel(&self) -> u32 {
        self.components().iter().map(|c| c.bits()).sum()
    }

    /// Sample grid of component `index` for a `width` x `height` image.
    ///
    /// Returns `None` if `index` is not a component position.
    pub fn plane_dimensions(&self, index: usize, width: u32, height: u32) -> Option<(u32, u32)> {
        let h = u32::from(*self.horizontal.get(index)?);
        let v = u32::from(*self.vertical.get(index)?);
        Some((
            width.checked_shr(h).unwrap_or(0),
            height.checked_shr(v).unwrap_or(0),
        ))
    }
}

impl PartialEq for ImageFormat {
    fn eq(&self, other: &Self) -> bool {
        self.components() == other.components()
            && self.horizontal == other.horizontal
            && self.vertical == other.vertical
    }
}

impl Eq for ImageFormat {}

impl Hash for ImageFormat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.components().hash(state);
        self.horizontal.hash(state);
        self.vertical.hash(state);
    }
}

impl TryFrom<MediaFormat> for ImageFormat {
    type Error = Error;

    /// Wraps a generic base with full-resolution sampling.
    fn try_from(base: MediaFormat) -> Result<Self> {
        if !base.is_image() {
            return Err(Error::not_image_format(base.media_type()));
        }
        let zeros = vec![0; base.components().len()];
        Self::from_parts(base, &zeros, &zeros)
    }
}

impl From<ImageFormat> for MediaFormat {
    fn from(format: ImageFormat) -> Self {
        format.base
    }
}

impl AsRef<MediaFormat> for ImageFormat {
    fn as_ref(&self) -> &MediaFormat {
        &self.base
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.format_string())?;
        for (i, c) in self.components().iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{}", c.bits())?;
        }
        write!(f, " {} {}", self.data_layout(), self.byte_order())?;
        if self.is_sub_sampled() {
            write!(f, " h{:?} v{:?}", self.horizontal, self.vertical)?;
        }
        Ok(())
    }
}

/// Flat serde representation, validated on the way back in.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawImageFormat {
    byte_order: ByteOrder,
    data_layout: DataLayout,
    components: Vec<MediaComponent>,
    horizontal_sampling: Vec<u8>,
    vertical_sampling: Vec<u8>,
}

#[cfg(feature = "serde")]
impl From<ImageFormat> for RawImageFormat {
    fn from(format: ImageFormat) -> Self {
        Self {
            byte_order: format.byte_order(),
            data_layout: format.data_layout(),
            components: format.components().to_vec(),
            horizontal_sampling: format.horizontal.to_vec(),
            vertical_sampling: format.vertical.to_vec(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawImageFormat> for ImageFormat {
    type Error = Error;

    fn try_from(raw: RawImageFormat) -> Result<Self> {
        Self::with_sampling_xy(
            raw.byte_order,
            raw.data_layout,
            &raw.components,
            &raw.horizontal_sampling,
            &raw.vertical_sampling,
        )
    }
}
