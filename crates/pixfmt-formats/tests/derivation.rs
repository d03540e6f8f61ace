//! Derivation properties checked across the whole catalog.
//!
//! Every known format is pushed through the derivation operations and the
//! results are compared against the structural rules descriptors follow:
//! alpha removal is idempotent, layout changes keep everything else, and
//! only alpha insertion/removal changes the component count.

use pixfmt_core::{AlphaMode, ByteOrder, ComponentId, DataLayout, ImageFormat};
use pixfmt_formats::*;

fn catalog() -> Vec<ImageFormat> {
    let mut formats = Vec::new();
    for known in KnownFormat::ALL {
        for alpha in [AlphaMode::Straight, AlphaMode::Premultiplied] {
            for bits in [8, 16] {
                let format = known.build(bits, alpha).unwrap();
                if !formats.contains(&format) {
                    formats.push(format);
                }
            }
        }
    }
    formats
}

// ============================================================================
// Alpha
// ============================================================================

#[test]
fn without_alpha_is_idempotent() {
    for d in catalog() {
        let once = d.without_alpha_component().unwrap();
        let twice = once.without_alpha_component().unwrap();
        assert!(once.component_by_id(ComponentId::ALPHA).is_none(), "{d}");
        assert_eq!(once, twice, "{d}");
    }
}

#[test]
fn alpha_removal_drops_at_most_one() {
    for d in catalog() {
        let stripped = d.without_alpha_component().unwrap();
        let removed = d.component_count() - stripped.component_count();
        let expected = usize::from(d.component_by_id(ComponentId::ALPHA).is_some());
        assert_eq!(removed, expected, "{d}");
    }
}

#[test]
fn alpha_insertion_position() {
    let base = rgb(8).unwrap();
    let leading = base.with_leading_alpha_component(8).unwrap();
    let trailing = base.with_trailing_alpha_component(8).unwrap();
    assert_eq!(leading.components().first().map(|c| c.id()), Some(ComponentId::ALPHA));
    assert_eq!(trailing.components().last().map(|c| c.id()), Some(ComponentId::ALPHA));
}

#[test]
fn alpha_insertion_adds_exactly_one() {
    for d in catalog().iter().filter_map(|d| d.without_alpha_component().ok()) {
        let leading = d.with_leading_alpha_component(8).unwrap();
        let trailing = d.with_trailing_alpha_component(8).unwrap();
        assert_eq!(leading.component_count(), d.component_count() + 1, "{d}");
        assert_eq!(trailing.component_count(), d.component_count() + 1, "{d}");
    }
}

#[test]
fn alpha_insertion_matches_catalog() {
    assert_eq!(
        rgb(8).unwrap().with_leading_alpha_component(8).unwrap(),
        argb(8, AlphaMode::Straight).unwrap()
    );
    assert_eq!(
        bgr(16).unwrap().with_trailing_alpha_component(16).unwrap(),
        bgra(16, AlphaMode::Straight).unwrap()
    );
    assert_eq!(
        yuv(8).unwrap().with_trailing_alpha_component(8).unwrap(),
        yuva(8, AlphaMode::Straight).unwrap()
    );
    assert_eq!(
        rgba(8, AlphaMode::Straight).unwrap().with_leading_alpha_component(8).unwrap(),
        argb(8, AlphaMode::Straight).unwrap()
    );
}

#[test]
fn inserted_alpha_ignores_old_alpha_sampling() {
    let sub = yuva(8, AlphaMode::Straight)
        .unwrap()
        .with_sub_sampling(&[0, 1, 1, 1])
        .unwrap();
    let leading = sub.with_leading_alpha_component(8).unwrap();
    assert_eq!(leading.horizontal_sampling_factors(), &[0, 0, 1, 1]);
    assert_eq!(leading.vertical_sampling_factors(), &[0, 0, 1, 1]);
    assert_eq!(leading.plane_dimensions(0, 1920, 1080), Some((1920, 1080)));
}

// ============================================================================
// Sub-sampling and layout
// ============================================================================

#[test]
fn sub_sampling_flag() {
    for d in catalog() {
        assert!(!d.is_sub_sampled(), "{d}");
        let mut factors = vec![0u8; d.component_count()];
        *factors.last_mut().unwrap() = 1;
        let sub = d.with_sub_sampling(&factors).unwrap();
        assert!(sub.is_sub_sampled(), "{d}");
        assert_eq!(sub.component_count(), d.component_count());
    }
}

#[test]
fn sub_sampling_requires_one_factor_per_component() {
    for d in catalog() {
        let short = vec![1u8; d.component_count() - 1];
        assert!(d.with_sub_sampling(&short).is_err(), "{d}");
    }
}

#[test]
fn layout_changes_are_idempotent() {
    for d in catalog() {
        assert_eq!(d.to_packed().to_packed(), d.to_packed());
        assert_eq!(d.to_planar().to_planar(), d.to_planar());
        assert_eq!(d.to_semi_planar().to_semi_planar(), d.to_semi_planar());
    }
}

#[test]
fn layout_changes_preserve_components() {
    for d in catalog() {
        for changed in [d.to_packed(), d.to_planar(), d.to_semi_planar()] {
            assert_eq!(changed.components(), d.components());
            assert_eq!(changed.byte_order(), d.byte_order());
        }
    }
}

#[test]
fn nv12_from_yuv() {
    let nv12 = yuv(8)
        .unwrap()
        .with_sub_sampling(&[0, 1, 1])
        .unwrap()
        .to_semi_planar();
    assert_eq!(nv12.data_layout(), DataLayout::SemiPlanar);
    assert_eq!(nv12.plane_dimensions(0, 1280, 720), Some((1280, 720)));
    assert_eq!(nv12.plane_dimensions(2, 1280, 720), Some((640, 360)));
}

#[test]
fn big_endian_variant() {
    let be = rgb(16).unwrap().with_byte_order(ByteOrder::Big);
    assert_eq!(be.byte_order(), ByteOrder::Big);
    assert_eq!(be.format_string(), "rgb");
    assert_eq!(be, rgb(16).unwrap());
}

#[test]
fn equality_ignores_layout() {
    for d in catalog() {
        assert_eq!(d, d.to_planar(), "{d}");
        assert_eq!(d.to_packed(), d.to_semi_planar(), "{d}");
    }
}
