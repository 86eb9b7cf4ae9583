#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All coordinates and sizes are `u16` layout cells with the origin at the
//! top-left. Operations that could underflow or overflow saturate instead of
//! wrapping; positions never go negative and sizes never exceed `u16::MAX`.

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Size {
    /// The zero size.
    pub const ZERO: Size = Size::new(0, 0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Area in cells.
    #[inline]
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Check if either dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Edge distances for padding and margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    /// Distance from the top edge.
    pub top: u16,
    /// Distance from the right edge.
    pub right: u16,
    /// Distance from the bottom edge.
    pub bottom: u16,
    /// Distance from the left edge.
    pub left: u16,
}

impl Insets {
    /// Zero on every edge.
    pub const ZERO: Insets = Insets::new(0, 0, 0, 0);

    /// Create insets with specific values.
    #[inline]
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same value on every edge.
    #[inline]
    pub const fn uniform(val: u16) -> Self {
        Self::new(val, val, val, val)
    }

    /// `horizontal` on left/right, `vertical` on top/bottom.
    #[inline]
    pub const fn symmetric(horizontal: u16, vertical: u16) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Sum of left and right.
    #[inline]
    pub const fn horizontal(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    /// Sum of top and bottom.
    #[inline]
    pub const fn vertical(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

/// A rectangle: position plus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Rect = Rect::new(0, 0, 0, 0);

    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// The size of the rectangle.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Area in cells.
    #[inline]
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if `other` lies entirely within this rectangle.
    #[inline]
    pub const fn contains(&self, other: Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Check if this rectangle overlaps `other` in at least one cell.
    ///
    /// Empty rectangles overlap nothing.
    #[inline]
    pub fn intersects(&self, other: Rect) -> bool {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        x < self.right().min(other.right()) && y < self.bottom().min(other.bottom())
    }

    /// The smallest rectangle containing both this one and `other`.
    pub fn union(&self, other: Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
    }

    /// Shrink the rectangle by the given insets.
    ///
    /// This is the content box of a padded container. Insets larger than the
    /// rectangle collapse the affected dimension to zero.
    pub fn inset(&self, insets: Insets) -> Rect {
        Rect::new(
            self.x.saturating_add(insets.left),
            self.y.saturating_add(insets.top),
            self.width.saturating_sub(insets.horizontal()),
            self.height.saturating_sub(insets.vertical()),
        )
    }
}
