//! Error types for pixfmt-core operations.
//!
//! Every constructor and derivation in this crate validates its arguments
//! eagerly and either returns a complete descriptor or one of the [`Error`]
//! variants below. Nothing is partially built.
//!
//! # Usage
//!
//! ```rust
//! use pixfmt_core::{ByteOrder, DataLayout, Error, ImageFormat};
//!
//! let err = ImageFormat::new(ByteOrder::Little, DataLayout::Packed, &[]).unwrap_err();
//! assert!(matches!(err, Error::InvalidArgument { name: "components", .. }));
//! assert!(err.is_argument_error());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::media::MediaFormat`] - Base validation
//! - [`crate::image::ImageFormat`] - Descriptor invariants
//! - `pixfmt-formats` - Bit-depth array checks

use crate::component::ComponentId;
use crate::media::MediaType;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing or deriving format descriptors.
///
/// # Categories
///
/// - **Argument errors**: [`InvalidArgument`](Error::InvalidArgument),
///   [`ArgumentOutOfRange`](Error::ArgumentOutOfRange)
/// - **Invariant errors**: [`DuplicateComponent`](Error::DuplicateComponent)
/// - **Type errors**: [`NotImageFormat`](Error::NotImageFormat)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument has a value the operation cannot accept.
    ///
    /// Returned for an empty component sequence, a zero bit depth, or a
    /// derivation that would leave a descriptor without components.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        name: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// A sequence argument does not have one entry per component.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixfmt_core::Error;
    ///
    /// let err = Error::out_of_range("factors", 3, 2);
    /// assert_eq!(
    ///     err.to_string(),
    ///     "argument `factors` out of range: expected 3 entries, got 2"
    /// );
    /// ```
    #[error("argument `{name}` out of range: expected {expected} entries, got {got}")]
    ArgumentOutOfRange {
        /// Name of the offending argument
        name: &'static str,
        /// Required length
        expected: usize,
        /// Supplied length
        got: usize,
    },

    /// The same component identifier appears more than once.
    #[error("duplicate component `{id}` in format")]
    DuplicateComponent {
        /// Repeated identifier
        id: ComponentId,
    },

    /// A generic media format was expected to describe an image.
    #[error("format argument is not an image format (media type: {found})")]
    NotImageFormat {
        /// Media type that was found instead
        found: MediaType,
    },
}

impl Error {
    /// Creates an [`Error::InvalidArgument`] error.
    #[inline]
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::ArgumentOutOfRange`] error.
    #[inline]
    pub fn out_of_range(name: &'static str, expected: usize, got: usize) -> Self {
        Self::ArgumentOutOfRange {
            name,
            expected,
            got,
        }
    }

    /// Creates an [`Error::DuplicateComponent`] error.
    #[inline]
    pub fn duplicate_component(id: ComponentId) -> Self {
        Self::DuplicateComponent { id }
    }

    /// Creates an [`Error::NotImageFormat`] error.
    #[inline]
    pub fn not_image_format(found: MediaType) -> Self {
        Self::NotImageFormat { found }
    }

    /// Returns `true` if the error names a rejected argument.
    #[inline]
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::ArgumentOutOfRange { .. }
        )
    }

    /// Returns the name of the offending argument, if the error carries one.
    pub fn argument_name(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { name, .. } | Self::ArgumentOutOfRange { name, .. } => {
                Some(*name)
            }
            Self::DuplicateComponent { .. } => Some("components"),
            Self::NotImageFormat { .. } => Some("format"),
        }
    }
}
