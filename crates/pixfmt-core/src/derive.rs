//! Derivation operations.
//!
//! Every operation here borrows an [`ImageFormat`] and returns a new one;
//! the input is never changed. Alpha insertion and removal adjust the
//! component count, every other operation preserves it.
//!
//! | Operation | Components | Sampling | Layout |
//! |-----------|------------|----------|--------|
//! | [`without_alpha_component`](ImageFormat::without_alpha_component) | alpha removed | kept per component | kept |
//! | [`with_leading_alpha_component`](ImageFormat::with_leading_alpha_component) | alpha first | new alpha full-res | kept |
//! | [`with_trailing_alpha_component`](ImageFormat::with_trailing_alpha_component) | alpha last | new alpha full-res | kept |
//! | [`with_sub_sampling`](ImageFormat::with_sub_sampling) | kept | replaced | kept |
//! | [`to_packed`](ImageFormat::to_packed) and friends | kept | kept | replaced |
//!
//! # Example
//!
//! ```rust
//! use pixfmt_core::{ByteOrder, ComponentId, DataLayout, ImageFormat, MediaComponent};
//!
//! let rgb = ImageFormat::new(
//!     ByteOrder::Little,
//!     DataLayout::Packed,
//!     &[
//!         MediaComponent::new(ComponentId::RED, 8),
//!         MediaComponent::new(ComponentId::GREEN, 8),
//!         MediaComponent::new(ComponentId::BLUE, 8),
//!     ],
//! )?;
//!
//! let rgba = rgb.with_trailing_alpha_component(8)?;
//! assert_eq!(rgba.format_string(), "rgba");
//! assert_eq!(rgba.without_alpha_component()?, rgb);
//! # Ok::<(), pixfmt_core::Error>(())
//! ```

use crate::component::{ComponentId, MediaComponent};
use crate::error::Result;
use crate::image::ImageFormat;
use crate::media::{ByteOrder, DataLayout, MediaFormat, MediaType};
use tracing::trace;

#[derive(Clone, Copy)]
enum AlphaPosition {
    Leading,
    Trailing,
}

impl ImageFormat {
    /// Removes every component tagged [`ComponentId::ALPHA`].
    ///
    /// Premultiplied alpha is kept. Removing from a format without alpha
    /// returns an equal format, so the operation is idempotent.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidArgument`] if alpha is the only component.
    pub fn without_alpha_component(&self) -> Result<Self> {
        let kept = self.components_without(ComponentId::ALPHA);
        trace!(
            format = %self.format_string(),
            removed = self.component_count() - kept.len(),
            "without_alpha_component"
        );
        Self::derive_from(self, &kept)
    }

    /// Replaces any straight alpha with a new one at the front.
    ///
    /// The new alpha is full resolution; the other components keep their
    /// factors.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidArgument`] if `bits` is zero.
    pub fn with_leading_alpha_component(&self, bits: u32) -> Result<Self> {
        trace!(format = %self.format_string(), bits, "with_leading_alpha_component");
        self.with_alpha_at(bits, AlphaPosition::Leading)
    }

    /// Replaces any straight alpha with a new one at the back.
    ///
    /// The new alpha is full resolution; the other components keep their
    /// factors.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidArgument`] if `bits` is zero.
    pub fn with_trailing_alpha_component(&self, bits: u32) -> Result<Self> {
        trace!(format = %self.format_string(), bits, "with_trailing_alpha_component");
        self.with_alpha_at(bits, AlphaPosition::Trailing)
    }

    /// Replaces the sampling factors, using `factors` in both directions.
    ///
    /// # Errors
    ///
    /// [`crate::Error::ArgumentOutOfRange`] unless `factors` has one entry
    /// per component.
    pub fn with_sub_sampling(&self, factors: &[u8]) -> Result<Self> {
        self.with_sub_sampling_xy(factors, factors)
    }

    /// Replaces the horizontal and vertical sampling factors.
    ///
    /// # Errors
    ///
    /// [`crate::Error::ArgumentOutOfRange`] naming `horizontal` or `vertical`
    /// when that sequence does not have one entry per component.
    pub fn with_sub_sampling_xy(&self, horizontal: &[u8], vertical: &[u8]) -> Result<Self> {
        trace!(
            format = %self.format_string(),
            ?horizontal,
            ?vertical,
            "with_sub_sampling"
        );
        Self::from_parts(self.as_media_format().clone(), horizontal, vertical)
    }

    /// Same components and sampling, interleaved in one region.
    pub fn to_packed(&self) -> Self {
        self.to_layout(DataLayout::Packed)
    }

    /// Same components and sampling, one plane per component.
    pub fn to_planar(&self) -> Self {
        self.to_layout(DataLayout::Planar)
    }

    /// Same components and sampling, first component in its own plane and
    /// the rest sharing a second.
    pub fn to_semi_planar(&self) -> Self {
        self.to_layout(DataLayout::SemiPlanar)
    }

    /// Same components, sampling and layout with a different byte order.
    pub fn with_byte_order(&self, byte_order: ByteOrder) -> Self {
        self.replace_base(self.as_media_format().with_byte_order(byte_order))
    }

    fn to_layout(&self, data_layout: DataLayout) -> Self {
        trace!(
            format = %self.format_string(),
            from = %self.data_layout(),
            to = %data_layout,
            "change layout"
        );
        self.replace_base(self.as_media_format().with_layout(data_layout))
    }

    fn with_alpha_at(&self, bits: u32, position: AlphaPosition) -> Result<Self> {
        let mut components = Vec::with_capacity(self.component_count() + 1);
        let mut horizontal = Vec::with_capacity(self.component_count() + 1);
        let mut vertical = Vec::with_capacity(self.component_count() + 1);
        let kept = self
            .components()
            .iter()
            .zip(self.horizontal_sampling_factors())
            .zip(self.vertical_sampling_factors())
            .filter(|((c, _), _)| c.id() != ComponentId::ALPHA);
        for ((c, &h), &v) in kept {
            components.push(*c);
            horizontal.push(h);
            vertical.push(v);
        }

        let alpha = MediaComponent::new(ComponentId::ALPHA, bits);
        match position {
            AlphaPosition::Leading => {
                components.insert(0, alpha);
                horizontal.insert(0, 0);
                vertical.insert(0, 0);
            }
            AlphaPosition::Trailing => {
                components.push(alpha);
                horizontal.push(0);
                vertical.push(0);
            }
        }

        let base = MediaFormat::new(
            MediaType::Image,
            self.byte_order(),
            self.data_layout(),
            &components,
        )?;
        Self::from_parts(base, &horizontal, &vertical)
    }

    fn components_without(&self, id: ComponentId) -> Vec<MediaComponent> {
        self.components()
            .iter()
            .filter(|c| c.id() != id)
            .copied()
            .collect()
    }
}
