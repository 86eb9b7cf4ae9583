#![forbid(unsafe_code)]

//! Gravity attributes and their decoded per-axis alignments.
//!
//! Hosts hand over a raw [`Gravity`] bitmask (the attribute surface, with
//! independently combinable horizontal and vertical bits); it is decoded once,
//! at configuration-build time, into [`HAlign`] and [`VAlign`]. Decoding is
//! total: an axis with no recognized bit, or with conflicting bits, falls back
//! to that axis's default (`Left` / `Top`) rather than failing.

use bitflags::bitflags;

bitflags! {
    /// Raw gravity mask as supplied by host attributes.
    ///
    /// Horizontal and vertical bits combine independently via bitwise OR,
    /// e.g. `Gravity::RIGHT | Gravity::CENTER_VERTICAL`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Gravity: u8 {
        /// Pack floor content against the left content edge.
        const LEFT              = 0b0000_0001;
        /// Center each floor's content horizontally.
        const CENTER_HORIZONTAL = 0b0000_0010;
        /// Pack floor content against the right content edge.
        const RIGHT             = 0b0000_0100;
        /// Distribute leftover floor width into the gaps between children.
        const FILL_HORIZONTAL   = 0b0000_1000;
        /// Pack the floor stack against the top content edge.
        const TOP               = 0b0001_0000;
        /// Center the floor stack vertically.
        const CENTER_VERTICAL   = 0b0010_0000;
        /// Push the floor stack against the bottom content edge.
        const BOTTOM            = 0b0100_0000;
        /// Distribute leftover height into the gaps between floors.
        const FILL_VERTICAL     = 0b1000_0000;
    }
}

impl Gravity {
    /// The documented default when no attribute is set.
    pub const DEFAULT: Gravity = Gravity::LEFT.union(Gravity::TOP);

    /// All horizontal-axis bits.
    pub const HORIZONTAL_MASK: Gravity = Gravity::LEFT
        .union(Gravity::CENTER_HORIZONTAL)
        .union(Gravity::RIGHT)
        .union(Gravity::FILL_HORIZONTAL);

    /// All vertical-axis bits.
    pub const VERTICAL_MASK: Gravity = Gravity::TOP
        .union(Gravity::CENTER_VERTICAL)
        .union(Gravity::BOTTOM)
        .union(Gravity::FILL_VERTICAL);

    /// Decode the horizontal axis.
    ///
    /// Exactly one recognized bit selects its alignment; an unset axis or a
    /// conflicting combination yields [`HAlign::Left`].
    #[must_use]
    pub const fn horizontal(self) -> HAlign {
        let bits = self.intersection(Self::HORIZONTAL_MASK).bits();
        if bits == Self::LEFT.bits() {
            HAlign::Left
        } else if bits == Self::CENTER_HORIZONTAL.bits() {
            HAlign::Center
        } else if bits == Self::RIGHT.bits() {
            HAlign::Right
        } else if bits == Self::FILL_HORIZONTAL.bits() {
            HAlign::Fill
        } else {
            HAlign::Left
        }
    }

    /// Decode the vertical axis.
    ///
    /// Exactly one recognized bit selects its alignment; an unset axis or a
    /// conflicting combination yields [`VAlign::Top`].
    #[must_use]
    pub const fn vertical(self) -> VAlign {
        let bits = self.intersection(Self::VERTICAL_MASK).bits();
        if bits == Self::TOP.bits() {
            VAlign::Top
        } else if bits == Self::CENTER_VERTICAL.bits() {
            VAlign::Center
        } else if bits == Self::BOTTOM.bits() {
            VAlign::Bottom
        } else if bits == Self::FILL_VERTICAL.bits() {
            VAlign::Fill
        } else {
            VAlign::Top
        }
    }

    /// Decode a per-child vertical override.
    ///
    /// Children recognize `TOP`, `CENTER_VERTICAL`, and `BOTTOM` only; any
    /// other value (including `FILL_VERTICAL`) yields [`ItemAlign::Top`].
    #[must_use]
    pub const fn item_align(self) -> ItemAlign {
        let bits = self.intersection(Self::VERTICAL_MASK).bits();
        if bits == Self::TOP.bits() {
            ItemAlign::Top
        } else if bits == Self::CENTER_VERTICAL.bits() {
            ItemAlign::Center
        } else if bits == Self::BOTTOM.bits() {
            ItemAlign::Bottom
        } else {
            ItemAlign::Top
        }
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Horizontal placement of a floor's content within the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HAlign {
    /// Pack against the left content edge.
    #[default]
    Left,
    /// Center within the content width.
    Center,
    /// Pack against the right content edge.
    Right,
    /// Spread leftover width into the gaps between children.
    Fill,
}

/// Vertical placement of the floor stack within the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VAlign {
    /// Pack against the top content edge.
    #[default]
    Top,
    /// Center within the content height.
    Center,
    /// Pack against the bottom content edge.
    Bottom,
    /// Spread leftover height into the gaps between floors.
    Fill,
}

/// A child's own vertical alignment within its floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ItemAlign {
    /// Top edge of the floor.
    #[default]
    Top,
    /// Centered within the floor height.
    Center,
    /// Bottom edge (see the engine's bottom-anchor policy).
    Bottom,
}
