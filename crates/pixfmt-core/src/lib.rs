//! # pixfmt-core
//!
//! Core types describing how pixel samples are laid out in memory.
//!
//! This crate provides the metadata contract shared by pixel-buffer readers,
//! writers and converters across the pixfmt-rs workspace:
//!
//! - [`ComponentId`], [`MediaComponent`] - Channel identifiers and bit depths
//! - [`MediaFormat`] - Generic media format base (byte order, layout, components)
//! - [`ImageFormat`] - Image format descriptor with per-component sub-sampling
//! - [`Error`] - Construction and derivation failures
//!
//! ## Design Philosophy
//!
//! Descriptors are immutable values. Constructors copy their inputs and check
//! every invariant up front; derivation operations such as
//! [`ImageFormat::with_trailing_alpha_component`] or
//! [`ImageFormat::to_planar`] return new descriptors.
//!
//! ```
//! use pixfmt_core::prelude::*;
//!
//! let rgb = ImageFormat::new(
//!     ByteOrder::Little,
//!     DataLayout::Packed,
//!     &[
//!         MediaComponent::new(ComponentId::RED, 5),
//!         MediaComponent::new(ComponentId::GREEN, 6),
//!         MediaComponent::new(ComponentId::BLUE, 5),
//!     ],
//! )?;
//! assert_eq!(rgb.bits_per_pixel(), 16);
//! assert_eq!(rgb.to_string(), "rgb 5:6:5 packed LE");
//! # Ok::<(), pixfmt_core::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! pixfmt-core (this crate)
//!    ^
//!    |
//!    +-- pixfmt-formats (known-format catalog)
//!    +-- pixfmt-cli (inspection tool)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for descriptor types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod component;
pub mod derive;
pub mod error;
pub mod image;
pub mod media;

// Re-exports for convenience
pub use component::{AlphaMode, ComponentId, MediaComponent};
pub use error::{Error, Result};
pub use image::ImageFormat;
pub use media::{ByteOrder, DataLayout, MediaFormat, MediaType};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use pixfmt_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::component::{AlphaMode, ComponentId, MediaComponent};
    pub use crate::error::{Error, Result};
    pub use crate::image::ImageFormat;
    pub use crate::media::{ByteOrder, DataLayout, MediaFormat, MediaType};
}
