use chart_nav::core::Extents;
use chart_nav::core::selection_bounds;
use proptest::prelude::*;

proptest! {
    #[test]
    fn extents_round_trip_through_rectangle_convention(
        left in -1_000_000.0f64..1_000_000.0,
        width in 1e-6f64..1_000_000.0,
        bottom in -1_000_000.0f64..1_000_000.0,
        rise in 1e-6f64..1_000_000.0
    ) {
        let right = left + width;
        let top = bottom + rise;
        let extents = Extents::from_corners(left, top, right, bottom);

        prop_assert!(extents.width() >= 0.0);
        prop_assert!((extents.left + extents.width() - extents.right).abs() <= 1e-9 * width.max(1.0));
        // Signed height reconstructs the bottom edge.
        prop_assert!((extents.top + extents.height() - extents.bottom).abs() <= 1e-9);
        prop_assert_eq!(extents.normalized(), extents);
    }

    #[test]
    fn normalization_orders_any_corner_pair(
        a in -1_000.0f64..1_000.0,
        b in -1_000.0f64..1_000.0,
        c in -1_000.0f64..1_000.0,
        d in -1_000.0f64..1_000.0
    ) {
        let normalized = Extents::from_corners(a, b, c, d).normalized();
        prop_assert!(normalized.left <= normalized.right);
        prop_assert!(normalized.top >= normalized.bottom);
        prop_assert!(normalized.width() >= 0.0);
        prop_assert!(normalized.height() <= 0.0);
    }

    #[test]
    fn selection_presence_respects_the_epsilon(
        start in -1_000.0f64..1_000.0,
        magnitude in 1e-7f64..1_000.0
    ) {
        // Above the 1e-8 epsilon in either direction: present and ordered.
        let (min, max) = selection_bounds(start, start + magnitude).expect("present");
        prop_assert!(min <= max);
        let (min, max) = selection_bounds(start + magnitude, start).expect("present");
        prop_assert!(min <= max);

        // A collapsed selection is always absent.
        prop_assert!(selection_bounds(start, start).is_none());
    }
}
