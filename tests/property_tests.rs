//! Property tests for the geometry and unit conversions.
//!
//! 1. Bars span exactly their operating years
//! 2. Log-axis bars are a symmetric multiplicative band around the energy
//! 3. The Livingston transform is E^2 / (2 m_p) and strictly increasing
//! 4. "center" always lands on the box centroid

use collider_timeline::geometry::{bar_geometry, AxisScale};
use collider_timeline::label_placement::{
    place_label, BoundingBox, HorizontalAlign, LabelLocation, VerticalAlign,
};
use collider_timeline::units::LivingstonTransform;
use proptest::prelude::*;

const PROTON_MASS_GEV: f64 = 0.938;

// ── Strategies ───────────────────────────────────────────────────────

fn arb_years() -> impl Strategy<Value = (i32, i32)> {
    (1900..2100_i32, 0..60_i32).prop_map(|(start, len)| (start, start + len))
}

fn arb_energy() -> impl Strategy<Value = f64> {
    1e-3..1e6_f64
}

fn arb_log_height() -> impl Strategy<Value = f64> {
    0.0..2.0_f64
}

proptest! {
    #[test]
    fn bar_spans_operating_years((start, end) in arb_years(), energy in arb_energy(), h in arb_log_height()) {
        for scale in [AxisScale::Log { height: h }, AxisScale::Linear { height: h * 100.0 }] {
            let bar = bar_geometry(start, end, energy, &scale);
            prop_assert_eq!(bar.x_left, start as f64);
            prop_assert_eq!(bar.width, (end - start) as f64);
        }
    }

    #[test]
    fn log_band_product_is_energy_squared(energy in arb_energy(), h in arb_log_height()) {
        let bar = bar_geometry(2000, 2010, energy, &AxisScale::Log { height: h });
        let product = bar.y_bottom * bar.y_top();
        prop_assert!(((product - energy * energy) / (energy * energy)).abs() < 1e-9);
    }

    #[test]
    fn linear_band_is_centered(energy in arb_energy(), h in 0.1..1000.0_f64) {
        let bar = bar_geometry(2000, 2010, energy, &AxisScale::Linear { height: h });
        prop_assert!((bar.height - h).abs() < 1e-9 * h.max(1.0));
        prop_assert!(((bar.y_bottom + bar.y_top()) / 2.0 - energy).abs() < 1e-9 * energy.max(h));
    }

    #[test]
    fn livingston_formula_and_monotonic(a in arb_energy(), b in arb_energy()) {
        let t = LivingstonTransform::new(PROTON_MASS_GEV);
        let expected = a * a / (2.0 * PROTON_MASS_GEV);
        prop_assert!(((t.apply(a) - expected) / expected).abs() < 1e-12);
        if a < b {
            prop_assert!(t.apply(a) <= t.apply(b));
        }
        if b > a * (1.0 + 1e-9) {
            prop_assert!(t.apply(a) < t.apply(b));
        }
    }

    #[test]
    fn center_label_is_centroid(
        left in -1e4..1e4_f64,
        width in 0.0..1e3_f64,
        bottom in -1e4..1e4_f64,
        height in 0.0..1e3_f64,
    ) {
        let bbox = BoundingBox::new(left, left + width, bottom, bottom + height);
        let placement = place_label(&bbox, LabelLocation::CENTER);
        prop_assert_eq!(placement.anchor, ((bbox.left + bbox.right) / 2.0, (bbox.bottom + bbox.top) / 2.0));
        prop_assert_eq!(placement.vertical_align, VerticalAlign::Center);
        prop_assert_eq!(placement.horizontal_align, HorizontalAlign::Center);
    }
}
