//! Generic media format base.
//!
//! [`MediaFormat`] holds the storage shared by every kind of media format:
//! the media type tag, the byte order, the data layout and the ordered
//! component sequence. [`crate::ImageFormat`] embeds one and adds
//! sub-sampling on top.
//!
//! # Usage
//!
//! ```rust
//! use pixfmt_core::{ByteOrder, ComponentId, DataLayout, MediaComponent, MediaFormat, MediaType};
//!
//! let mono = [MediaComponent::new(ComponentId::LUMA, 16)];
//! let base = MediaFormat::new(MediaType::Image, ByteOrder::Big, DataLayout::Packed, &mono)?;
//! assert!(base.is_image());
//! assert_eq!(base.components().len(), 1);
//! # Ok::<(), pixfmt_core::Error>(())
//! ```

use crate::component::{ComponentId, MediaComponent};
use crate::error::{Error, Result};
use std::fmt;

/// Encoding order of multi-byte samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ByteOrder {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

impl ByteOrder {
    /// Byte order of the running target.
    #[inline]
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Little
        }
    }

    /// Short name for display.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Little => "LE",
            Self::Big => "BE",
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How component samples are arranged in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataLayout {
    /// All components of a pixel interleaved in one region.
    #[default]
    Packed,
    /// Each component in its own plane.
    Planar,
    /// First component in one plane, the remaining components interleaved
    /// in a second shared plane (e.g. NV12 luma + paired chroma).
    SemiPlanar,
}

impl DataLayout {
    /// Short name for display.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Packed => "packed",
            Self::Planar => "planar",
            Self::SemiPlanar => "semi-planar",
        }
    }

    /// Parses a layout name as printed by [`DataLayout::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "packed" | "interleaved" => Some(Self::Packed),
            "planar" => Some(Self::Planar),
            "semi-planar" | "semiplanar" | "semi_planar" => Some(Self::SemiPlanar),
            _ => None,
        }
    }
}

impl fmt::Display for DataLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of media a format describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MediaType {
    /// Still or moving image samples.
    Image,
    /// Audio samples.
    Audio,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => f.write_str("image"),
            Self::Audio => f.write_str("audio"),
        }
    }
}

/// Shared base of every media format.
///
/// Immutable once built: the component sequence is copied into an owned
/// slice and only handed out by shared reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MediaFormat {
    media_type: MediaType,
    byte_order: ByteOrder,
    data_layout: DataLayout,
    components: Box<[MediaComponent]>,
}

impl MediaFormat {
    /// Creates a base format.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `components` is empty or a component
    ///   has a zero bit depth.
    /// - [`Error::DuplicateComponent`] if an identifier repeats.
    pub fn new(
        media_type: MediaType,
        byte_order: ByteOrder,
        data_layout: DataLayout,
        components: &[MediaComponent],
    ) -> Result<Self> {
        validate_components(components)?;
        Ok(Self {
            media_type,
            byte_order,
            data_layout,
            components: components.into(),
        })
    }

    /// Media type tag.
    #[inline]
    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    /// Whether this base describes an image.
    #[inline]
    pub fn is_image(&self) -> bool {
        self.media_type == MediaType::Image
    }

    /// Byte order of multi-byte samples.
    #[inline]
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Memory arrangement of the components.
    #[inline]
    pub fn data_layout(&self) -> DataLayout {
        self.data_layout
    }

    /// Components in packing/plane order.
    #[inline]
    pub fn components(&self) -> &[MediaComponent] {
        &self.components
    }

    /// First component with the given identifier.
    pub fn component_by_id(&self, id: ComponentId) -> Option<&MediaComponent> {
        self.components.iter().find(|c| c.id() == id)
    }

    /// Position of the first component with the given identifier.
    pub fn component_index(&self, id: ComponentId) -> Option<usize> {
        self.components.iter().position(|c| c.id() == id)
    }

    pub(crate) fn with_layout(&self, data_layout: DataLayout) -> Self {
        Self {
            data_layout,
            ..self.clone()
        }
    }

    pub(crate) fn with_byte_order(&self, byte_order: ByteOrder) -> Self {
        Self {
            byte_order,
            ..self.clone()
        }
    }
}

/// Checks the component invariants shared by every format.
fn validate_components(components: &[MediaComponent]) -> Result<()> {
    if components.is_empty() {
        return Err(Error::invalid_argument(
            "components",
            "format must contain at least one component",
        ));
    }
    for (i, component) in components.iter().enumerate() {
        if component.bits() == 0 {
            return Err(Error::invalid_argument(
                "components",
                format!("component {} ({}) has a bit depth of 0", i, component.id()),
            ));
        }
        if components[..i].iter().any(|c| c.id() == component.id()) {
            return Err(Error::duplicate_component(component.id()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb() -> [MediaComponent; 3] {
        [
            MediaComponent::new(ComponentId::RED, 8),
            MediaComponent::new(ComponentId::GREEN, 8),
            MediaComponent::new(ComponentId::BLUE, 8),
        ]
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ByteOrder::default(), ByteOrder::Little);
        assert_eq!(DataLayout::default(), DataLayout::Packed);
    }

    #[test]
    fn test_layout_names() {
        for layout in [DataLayout::Packed, DataLayout::Planar, DataLayout::SemiPlanar] {
            assert_eq!(DataLayout::from_name(layout.name()), Some(layout));
        }
        assert_eq!(DataLayout::from_name("NV12"), None);
    }

    #[test]
    fn test_new_validates() {
        let err = MediaFormat::new(MediaType::Image, ByteOrder::Little, DataLayout::Packed, &[])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));

        let zero = [MediaComponent::new(ComponentId::LUMA, 0)];
        let err =
            MediaFormat::new(MediaType::Image, ByteOrder::Little, DataLayout::Packed, &zero)
                .unwrap_err();
        assert!(err.to_string().contains("bit depth of 0"));

        let dup = [
            MediaComponent::new(ComponentId::RED, 8),
            MediaComponent::new(ComponentId::RED, 8),
        ];
        let err = MediaFormat::new(MediaType::Image, ByteOrder::Little, DataLayout::Packed, &dup)
            .unwrap_err();
        assert_eq!(err, Error::duplicate_component(ComponentId::RED));
    }

    #[test]
    fn test_lookup() {
        let base =
            MediaFormat::new(MediaType::Image, ByteOrder::Little, DataLayout::Packed, &rgb())
                .unwrap();
        assert!(base.is_image());
        assert_eq!(base.component_index(ComponentId::BLUE), Some(2));
        assert_eq!(base.component_by_id(ComponentId::GREEN).map(|c| c.bits()), Some(8));
        assert!(base.component_by_id(ComponentId::ALPHA).is_none());
    }

    #[test]
    fn test_audio_is_not_image() {
        let pcm = [MediaComponent::new(ComponentId::new(100), 16)];
        let base =
            MediaFormat::new(MediaType::Audio, ByteOrder::Little, DataLayout::Packed, &pcm)
                .unwrap();
        assert!(!base.is_image());
    }
}
