//! CIE device-independent formats.

use crate::build;
use pixfmt_core::{ComponentId, DataLayout, ImageFormat, MediaComponent, Result};

/// CIE XYZ tristimulus.
pub fn xyz(bits: u32) -> Result<ImageFormat> {
    build(
        DataLayout::Packed,
        &[
            MediaComponent::new(ComponentId::CIE_X, bits),
            MediaComponent::new(ComponentId::CIE_Y, bits),
            MediaComponent::new(ComponentId::CIE_Z, bits),
        ],
    )
}

/// CIE L*a*b*.
pub fn lab(bits: u32) -> Result<ImageFormat> {
    build(
        DataLayout::Packed,
        &[
            MediaComponent::new(ComponentId::CIE_L, bits),
            MediaComponent::new(ComponentId::CIE_A, bits),
            MediaComponent::new(ComponentId::CIE_B, bits),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cie() {
        assert_eq!(xyz(32).unwrap().format_string(), "XYZ");
        assert_eq!(lab(8).unwrap().format_string(), "LAB");
        // CIE a* is not alpha
        assert!(!lab(8).unwrap().has_alpha_component());
    }
}
