#![forbid(unsafe_code)]

//! Measurement constraints.
//!
//! A [`MeasureSpec`] describes one axis of the question a container asks a
//! child: "how big do you want to be, given this much room?". The engine also
//! resolves its own computed requirements through the container's specs.

/// A size constraint for one axis of a measure pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MeasureSpec {
    /// The axis must be exactly this many cells.
    Exactly(u16),
    /// The axis may take any size up to this many cells.
    AtMost(u16),
    /// The axis is unconstrained.
    #[default]
    Unspecified,
}

impl MeasureSpec {
    /// The bound carried by this spec, if any.
    #[inline]
    #[must_use]
    pub const fn limit(self) -> Option<u16> {
        match self {
            MeasureSpec::Exactly(size) | MeasureSpec::AtMost(size) => Some(size),
            MeasureSpec::Unspecified => None,
        }
    }

    /// Whether this spec dictates the final size outright.
    #[inline]
    #[must_use]
    pub const fn is_exact(self) -> bool {
        matches!(self, MeasureSpec::Exactly(_))
    }

    /// Resolve a computed requirement against this spec.
    ///
    /// `Exactly` overrides with its own size. `AtMost` and `Unspecified`
    /// report `desired` unchanged: a requirement may exceed an `AtMost`
    /// bound, and whether to clamp or scroll is the host's decision.
    #[inline]
    #[must_use]
    pub const fn resolve(self, desired: u16) -> u16 {
        match self {
            MeasureSpec::Exactly(size) => size,
            MeasureSpec::AtMost(_) | MeasureSpec::Unspecified => desired,
        }
    }
}
