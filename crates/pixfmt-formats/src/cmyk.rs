//! Print formats: CMYK with optional alpha. Planar, one plane per ink.

use crate::build;
use pixfmt_core::{AlphaMode, ComponentId, DataLayout, ImageFormat, MediaComponent, Result};

const INKS: [ComponentId; 4] = [
    ComponentId::CYAN,
    ComponentId::MAGENTA,
    ComponentId::YELLOW,
    ComponentId::KEY,
];

/// Cyan, magenta, yellow, key.
pub fn cmyk(bits: u32) -> Result<ImageFormat> {
    let components = INKS.map(|id| MediaComponent::new(id, bits));
    build(DataLayout::Planar, &components)
}

/// CMYK followed by alpha.
pub fn cmyka(bits: u32, alpha: AlphaMode) -> Result<ImageFormat> {
    let [c, m, y, k] = INKS.map(|id| MediaComponent::new(id, bits));
    build(DataLayout::Planar, &[c, m, y, k, alpha.component(bits)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmyk() {
        let f = cmyk(8).unwrap();
        assert_eq!(f.format_string(), "cmyk");
        assert_eq!(f.data_layout(), DataLayout::Planar);
        assert!(f.components().iter().all(|c| c.bits() == 8));
    }

    #[test]
    fn test_cmyka() {
        let f = cmyka(16, AlphaMode::Straight).unwrap();
        assert_eq!(f.format_string(), "cmyka");
        assert_eq!(f.component_count(), 5);
        assert!(f.has_alpha_component());
        assert_eq!(f.without_alpha_component().unwrap(), cmyk(16).unwrap());
    }
}
