#![forbid(unsafe_code)]

//! Property-based invariants for the geometry primitives.
//!
//! Invariants covered:
//!
//! 1. Saturating edges: `right() >= x` and `bottom() >= y` for every rect.
//! 2. `inset` never escapes the original rect and never grows it.
//! 3. `union` contains both operands and is commutative.
//! 4. `intersects` is symmetric; empty rects overlap nothing.
//! 5. `contains` is consistent with `union` (containment absorbs).
//! 6. Inset sums saturate instead of wrapping.
//! 7. Full-range values never panic.

use loft_core::geometry::{Insets, Rect, Size};
use proptest::prelude::*;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn rect_any() -> impl Strategy<Value = Rect> {
    (any::<u16>(), any::<u16>(), any::<u16>(), any::<u16>())
        .prop_map(|(x, y, width, height)| Rect::new(x, y, width, height))
}

fn rect_small() -> impl Strategy<Value = Rect> {
    (0u16..200, 0u16..200, 0u16..100, 0u16..100)
        .prop_map(|(x, y, width, height)| Rect::new(x, y, width, height))
}

fn insets_any() -> impl Strategy<Value = Insets> {
    (any::<u16>(), any::<u16>(), any::<u16>(), any::<u16>())
        .prop_map(|(top, right, bottom, left)| Insets::new(top, right, bottom, left))
}

// ═══════════════════════════════════════════════════════════════════════════
// Invariant 1: saturating edges
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn edges_never_precede_origin(r in rect_any()) {
        prop_assert!(r.right() >= r.x, "right {} < x {}", r.right(), r.x);
        prop_assert!(r.bottom() >= r.y, "bottom {} < y {}", r.bottom(), r.y);
    }

    #[test]
    fn area_matches_size(r in rect_any()) {
        prop_assert_eq!(r.area(), r.size().area());
        prop_assert_eq!(r.is_empty(), r.size().is_empty());
        prop_assert_eq!(r.area(), r.width as u32 * r.height as u32);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Invariant 2: inset stays inside
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn inset_never_grows(r in rect_any(), i in insets_any()) {
        let inner = r.inset(i);
        prop_assert!(inner.width <= r.width, "inset width grew: {} > {}", inner.width, r.width);
        prop_assert!(inner.height <= r.height, "inset height grew: {} > {}", inner.height, r.height);
    }

    #[test]
    fn inset_stays_inside_when_it_fits(r in rect_small(), i in insets_any()) {
        // Restrict to rects far from u16::MAX so edge saturation cannot fire.
        let inner = r.inset(i);
        if !inner.is_empty() {
            prop_assert!(
                r.contains(inner),
                "content box {:?} escapes {:?} under {:?}",
                inner, r, i
            );
        }
    }

    #[test]
    fn oversized_insets_collapse(r in rect_any(), i in insets_any()) {
        let inner = r.inset(i);
        if i.horizontal() >= r.width {
            prop_assert_eq!(inner.width, 0);
        }
        if i.vertical() >= r.height {
            prop_assert_eq!(inner.height, 0);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Invariant 3: union bounds its operands
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn union_contains_both(a in rect_small(), b in rect_small()) {
        let u = a.union(b);
        prop_assert!(u.contains(a), "union {:?} misses {:?}", u, a);
        prop_assert!(u.contains(b), "union {:?} misses {:?}", u, b);
    }

    #[test]
    fn union_is_commutative(a in rect_any(), b in rect_any()) {
        prop_assert_eq!(a.union(b), b.union(a));
    }

    #[test]
    fn union_with_self_is_identity(a in rect_small()) {
        // Within rect_small no edge saturates, so the bounds reconstruct exactly.
        prop_assert_eq!(a.union(a), a);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Invariant 4: intersects
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn intersects_is_symmetric(a in rect_any(), b in rect_any()) {
        prop_assert_eq!(a.intersects(b), b.intersects(a));
    }

    #[test]
    fn self_overlap_iff_nonempty(a in rect_small()) {
        prop_assert_eq!(a.intersects(a), !a.is_empty());
    }

    #[test]
    fn empty_rect_overlaps_nothing(a in rect_any(), b in rect_any()) {
        if a.is_empty() {
            prop_assert!(!a.intersects(b));
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Invariant 5: containment absorbs under union
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn containment_absorbs(a in rect_small(), b in rect_small()) {
        if a.contains(b) {
            prop_assert_eq!(a.union(b), a, "union must not grow past the container");
        }
    }

    #[test]
    fn rect_contains_itself(a in rect_any()) {
        prop_assert!(a.contains(a));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Invariant 6: inset sums saturate
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn inset_sums_saturate(i in insets_any()) {
        let wide = i.left as u32 + i.right as u32;
        let tall = i.top as u32 + i.bottom as u32;
        prop_assert_eq!(i.horizontal() as u32, wide.min(u16::MAX as u32));
        prop_assert_eq!(i.vertical() as u32, tall.min(u16::MAX as u32));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Invariant 7: no panics at the extremes
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn full_range_operations_never_panic(
        a in rect_any(),
        b in rect_any(),
        i in insets_any(),
        (w, h) in (any::<u16>(), any::<u16>()),
    ) {
        let _ = a.inset(i);
        let _ = a.union(b);
        let _ = a.intersects(b);
        let _ = a.contains(b);
        let _ = a.right();
        let _ = a.bottom();
        let _ = Size::new(w, h).area();
        let _ = Rect::from_size(Size::new(w, h)).area();
    }
}
