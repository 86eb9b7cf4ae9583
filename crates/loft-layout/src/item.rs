#![forbid(unsafe_code)]

//! The child seam: what the engine needs to know about each element it
//! arranges.

use loft_core::geometry::{Insets, Size};
use loft_core::gravity::ItemAlign;
use loft_core::measure::MeasureSpec;

/// A child element of a flow container.
///
/// The engine asks each item for its size under the constraints of the
/// current floor, and reads its margins and per-item alignment. Items are
/// never mutated; hosts keep ownership of their content.
///
/// Implementations should be monotone in the width constraint: offered more
/// room, an item must not report a narrower size than it reported for less
/// room. The engine replays its wrap rule over recorded sizes, and
/// non-monotone answers can make the recorded floor partition
/// unreproducible.
pub trait FlowItem {
    /// Measure the item under the given per-axis constraints.
    ///
    /// Called once per child per measure pass, and a second time with the
    /// full row width when the child opens a new floor. The reported size
    /// may exceed an `AtMost` bound; the engine treats the answer as
    /// authoritative and lets the host decide how to handle overflow.
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size;

    /// Outer margins reserved around the item on its floor.
    fn margins(&self) -> Insets {
        Insets::ZERO
    }

    /// The item's own vertical alignment within its floor.
    fn align(&self) -> ItemAlign {
        ItemAlign::Top
    }
}

/// Reflowing children can be plain closures over the measure constraints.
impl<F> FlowItem for F
where
    F: Fn(MeasureSpec, MeasureSpec) -> Size,
{
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size {
        self(width, height)
    }
}

/// A child with a fixed preferred size.
///
/// Honors an `Exactly` constraint and otherwise reports its preferred size
/// unchanged, like content that cannot reflow. Doubles as the plain-data
/// carrier for per-child attributes (margins, alignment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedItem {
    size: Size,
    margins: Insets,
    align: ItemAlign,
}

impl FixedItem {
    /// Create an item with the given preferred size and no margins.
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            size: Size::new(width, height),
            margins: Insets::ZERO,
            align: ItemAlign::Top,
        }
    }

    /// Set the outer margins.
    #[must_use]
    pub const fn with_margins(mut self, margins: Insets) -> Self {
        self.margins = margins;
        self
    }

    /// Set the vertical alignment within the floor.
    #[must_use]
    pub const fn with_align(mut self, align: ItemAlign) -> Self {
        self.align = align;
        self
    }

    /// The preferred size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }
}

impl FlowItem for FixedItem {
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size {
        Size::new(
            match width {
                MeasureSpec::Exactly(w) => w,
                _ => self.size.width,
            },
            match height {
                MeasureSpec::Exactly(h) => h,
                _ => self.size.height,
            },
        )
    }

    fn margins(&self) -> Insets {
        self.margins
    }

    fn align(&self) -> ItemAlign {
        self.align
    }
}
