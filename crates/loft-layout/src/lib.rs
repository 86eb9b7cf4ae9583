#![forbid(unsafe_code)]

//! Flow layout: children run left to right and wrap onto new floors.
//!
//! This crate provides the flow container for cell-grid UIs:
//!
//! - [`Flow`] - the container configuration and the measure/layout engine
//! - [`FlowMeasurement`] - the recorded result of a measure pass
//! - [`FlowItem`] - the child protocol (measurement, margins, alignment)
//! - [`Gravity`] - packed alignment bits decoded into per-axis alignments
//!
//! Layout is a two-pass protocol. [`Flow::measure`] walks the children,
//! wraps them into floors against a width bound, and reports the size the
//! container wants. [`Flow::layout`] converts a measurement into one
//! rectangle per child inside a concrete area. [`Flow::split`] runs both
//! passes for hosts that have a fixed area and no negotiation to do:
//!
//! ```
//! use loft_layout::{FixedItem, Flow, Rect};
//!
//! let items = [
//!     FixedItem::new(40, 10),
//!     FixedItem::new(40, 10),
//!     FixedItem::new(40, 10),
//! ];
//! let refs: Vec<&FixedItem> = items.iter().collect();
//! let rects = Flow::new().split(Rect::new(0, 0, 100, 30), &refs);
//! assert_eq!(rects[2].y, 10); // third child wrapped onto the second floor
//! ```

pub mod item;

pub use item::{FixedItem, FlowItem};
pub use loft_core::geometry::{Insets, Rect, Size};
pub use loft_core::gravity::{Gravity, HAlign, ItemAlign, VAlign};
pub use loft_core::measure::MeasureSpec;

use std::ops::Range;

/// Inter-floor handling of leftover vertical space when the container's
/// vertical alignment is [`VAlign::Fill`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FloorFill {
    /// Insert no inter-floor spacing; `Fill` places floors like
    /// [`VAlign::Top`]. Compatibility default.
    #[default]
    None,
    /// Spread leftover vertical space across the gaps between floors,
    /// earliest gaps absorbing the remainder.
    Even,
}

/// Where bottom-aligned items anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BottomAnchor {
    /// Anchor to the container's bottom content edge, regardless of which
    /// floor the item is on. Compatibility default.
    #[default]
    Container,
    /// Anchor to the bottom edge of the item's own floor.
    Floor,
}

/// One child's snapshot from the measure pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasuredItem {
    size: Size,
    margins: Insets,
    align: ItemAlign,
}

impl MeasuredItem {
    /// The size the child settled on.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// The child's outer margins.
    #[must_use]
    pub const fn margins(&self) -> Insets {
        self.margins
    }

    /// The child's vertical alignment within its floor.
    #[must_use]
    pub const fn align(&self) -> ItemAlign {
        self.align
    }
}

/// The recorded result of a measure pass.
///
/// Holds the container's resolved size, the floor count, and a per-child
/// snapshot sufficient for [`Flow::layout`] to reproduce the floor
/// partition without consulting the children again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowMeasurement {
    size: Size,
    floors: usize,
    content_height: u16,
    wrap_width: Option<u16>,
    items: Vec<MeasuredItem>,
}

impl FlowMeasurement {
    /// The size the container resolved to under its constraints.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// How many floors the children wrapped into. Zero when there are no
    /// children.
    #[must_use]
    pub const fn floors(&self) -> usize {
        self.floors
    }

    /// Total height of the stacked floors, excluding padding.
    #[must_use]
    pub const fn content_height(&self) -> u16 {
        self.content_height
    }

    /// The width bound the wrap decisions were made against, if any.
    #[must_use]
    pub const fn wrap_width(&self) -> Option<u16> {
        self.wrap_width
    }

    /// The per-child snapshots, in child order.
    #[must_use]
    pub fn items(&self) -> &[MeasuredItem] {
        &self.items
    }
}

/// A flow layout container.
///
/// Children are placed left to right; a child that no longer fits the
/// remaining width starts a new floor below. Alignment applies at three
/// levels: the whole block of floors inside the container ([`VAlign`]),
/// each floor's run of children along the width ([`HAlign`]), and each
/// child within its floor's height ([`ItemAlign`], carried per child).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Flow {
    halign: HAlign,
    valign: VAlign,
    padding: Insets,
    min_size: Size,
    floor_fill: FloorFill,
    bottom_anchor: BottomAnchor,
}

impl Flow {
    /// Create a flow container with left/top alignment and no padding.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            halign: HAlign::Left,
            valign: VAlign::Top,
            padding: Insets::ZERO,
            min_size: Size::ZERO,
            floor_fill: FloorFill::None,
            bottom_anchor: BottomAnchor::Container,
        }
    }

    /// Set the horizontal alignment of each floor's content.
    pub fn halign(mut self, halign: HAlign) -> Self {
        self.halign = halign;
        self
    }

    /// Set the vertical alignment of the floor block.
    pub fn valign(mut self, valign: VAlign) -> Self {
        self.valign = valign;
        self
    }

    /// Set both alignments from a packed [`Gravity`] value.
    pub fn gravity(mut self, gravity: Gravity) -> Self {
        self.halign = gravity.horizontal();
        self.valign = gravity.vertical();
        self
    }

    /// Set the padding between the container edge and the content box.
    pub fn padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Set the minimum size the container reports from [`measure`](Self::measure).
    pub fn min_size(mut self, min_size: Size) -> Self {
        self.min_size = min_size;
        self
    }

    /// Set how leftover vertical space is handled under [`VAlign::Fill`].
    pub fn floor_fill(mut self, floor_fill: FloorFill) -> Self {
        self.floor_fill = floor_fill;
        self
    }

    /// Set the anchor edge for [`ItemAlign::Bottom`] items.
    pub fn bottom_anchor(mut self, bottom_anchor: BottomAnchor) -> Self {
        self.bottom_anchor = bottom_anchor;
        self
    }

    /// Measure the children and report the size the container requires.
    ///
    /// Children are offered the room remaining on their floor, in child
    /// order. A child whose measured width (plus margins) exceeds the
    /// remaining width closes the floor and re-measures at the full row
    /// width; the first child of a floor never wraps, however wide. The
    /// reported size honors `Exactly` constraints and otherwise states the
    /// true requirement, even where it exceeds an `AtMost` bound.
    pub fn measure<I>(
        &self,
        items: &[&I],
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> FlowMeasurement
    where
        I: FlowItem + ?Sized,
    {
        let wrap_width = width
            .limit()
            .map(|limit| limit.saturating_sub(self.padding.horizontal()));
        let height_limit = height
            .limit()
            .map(|limit| limit.saturating_sub(self.padding.vertical()));

        let mut measured = Vec::with_capacity(items.len());
        let mut floors = usize::from(!items.is_empty());
        let mut width_used = 0u32;
        let mut height_used = 0u32;
        let mut floor_height = 0u32;
        let mut max_extent = 0u32;
        let mut floor_occupied = false;

        for item in items {
            let margins = item.margins();
            let mut size = item.measure(
                child_spec(wrap_width, width_used),
                child_spec(height_limit, height_used),
            );

            if floor_occupied && overflows(size.width, margins.horizontal(), wrap_width, width_used)
            {
                // Close the floor. The child re-measures because both its
                // width and its remaining height just changed.
                height_used = height_used.saturating_add(floor_height);
                width_used = 0;
                floor_height = 0;
                floors += 1;
                size = item.measure(
                    child_spec(wrap_width, 0),
                    child_spec(height_limit, height_used),
                );
            }

            floor_occupied = true;
            width_used =
                width_used.saturating_add(size.width as u32 + margins.horizontal() as u32);
            max_extent = max_extent.max(width_used);
            floor_height = floor_height.max(size.height as u32 + margins.vertical() as u32);
            measured.push(MeasuredItem {
                size,
                margins,
                align: item.align(),
            });
        }

        let content_height = height_used.saturating_add(floor_height);
        let desired_width =
            max_extent.saturating_add(self.padding.horizontal() as u32).max(self.min_size.width as u32);
        let desired_height =
            content_height.saturating_add(self.padding.vertical() as u32).max(self.min_size.height as u32);
        let size = Size::new(
            width.resolve(clamp_cells(desired_width)),
            height.resolve(clamp_cells(desired_height)),
        );

        loft_core::trace!(
            floors,
            width = size.width,
            height = size.height,
            "flow measure"
        );

        FlowMeasurement {
            size,
            floors,
            content_height: clamp_cells(content_height),
            wrap_width,
            items: measured,
        }
    }

    /// Assign one rectangle per child inside `area`.
    ///
    /// Replays the wrap rule over the measurement's recorded sizes and the
    /// recorded wrap width, so the floor partition matches the measure pass
    /// even when `area` differs from the measured size. Rectangles are in
    /// child order and in the same coordinate space as `area`.
    pub fn layout(&self, area: Rect, measurement: &FlowMeasurement) -> Vec<Rect> {
        let items = measurement.items.as_slice();
        if items.is_empty() {
            return Vec::new();
        }

        let content = area.inset(self.padding);
        let leftover = content.height.saturating_sub(measurement.content_height);

        let start = match self.valign {
            VAlign::Top | VAlign::Fill => 0,
            VAlign::Center => leftover / 2,
            VAlign::Bottom => leftover,
        };
        let mut floor_top = content.y.saturating_add(start);

        // Gaps between floors exist only for vertical fill under the Even
        // policy; everywhere else the floors stack flush.
        let floor_gaps = if self.valign == VAlign::Fill
            && self.floor_fill == FloorFill::Even
            && measurement.floors > 1
        {
            (measurement.floors - 1) as u32
        } else {
            0
        };

        let mut rects = vec![Rect::ZERO; items.len()];
        let mut width_used = 0u32;
        let mut floor_height = 0u32;
        let mut floor_start = 0usize;
        let mut floor_index = 0u32;

        for (i, item) in items.iter().enumerate() {
            if i > floor_start
                && overflows(
                    item.size.width,
                    item.margins.horizontal(),
                    measurement.wrap_width,
                    width_used,
                )
            {
                let height = clamp_cells(floor_height);
                self.place_floor(&mut rects, items, floor_start..i, content, floor_top, height);
                floor_top = floor_top
                    .saturating_add(height)
                    .saturating_add(gap_share(leftover, floor_gaps, floor_index));
                floor_index += 1;
                floor_start = i;
                width_used = 0;
                floor_height = 0;
            }
            width_used =
                width_used.saturating_add(item.size.width as u32 + item.margins.horizontal() as u32);
            floor_height = floor_height.max(item.size.height as u32 + item.margins.vertical() as u32);
        }
        self.place_floor(
            &mut rects,
            items,
            floor_start..items.len(),
            content,
            floor_top,
            clamp_cells(floor_height),
        );

        loft_core::trace!(
            floors = measurement.floors,
            rects = rects.len(),
            "flow layout"
        );

        rects
    }

    /// Measure against `area` and lay the children out in it, in one call.
    ///
    /// Convenience for hosts with a fixed area and no size negotiation:
    /// both axes measure as `Exactly` the area's dimensions.
    pub fn split<I>(&self, area: Rect, items: &[&I]) -> Vec<Rect>
    where
        I: FlowItem + ?Sized,
    {
        let measurement = self.measure(
            items,
            MeasureSpec::Exactly(area.width),
            MeasureSpec::Exactly(area.height),
        );
        self.layout(area, &measurement)
    }

    /// Place one floor's run of children.
    fn place_floor(
        &self,
        rects: &mut [Rect],
        items: &[MeasuredItem],
        range: Range<usize>,
        content: Rect,
        floor_top: u16,
        floor_height: u16,
    ) {
        let floor = &items[range.clone()];
        if floor.is_empty() {
            return;
        }

        let floor_width = clamp_cells(floor.iter().fold(0u32, |acc, item| {
            acc.saturating_add(item.size.width as u32 + item.margins.horizontal() as u32)
        }));
        let leftover = content.width.saturating_sub(floor_width);

        let mut cursor = match self.halign {
            HAlign::Left | HAlign::Fill => content.x,
            HAlign::Center => content.x.saturating_add(leftover / 2),
            HAlign::Right => content.right().saturating_sub(floor_width),
        };
        let item_gaps = if self.halign == HAlign::Fill && floor.len() > 1 {
            (floor.len() - 1) as u32
        } else {
            0
        };

        for (offset, item) in floor.iter().enumerate() {
            let Size { width, height } = item.size;
            let y = match item.align {
                ItemAlign::Top => floor_top.saturating_add(item.margins.top),
                ItemAlign::Center => {
                    let slack = floor_height
                        .saturating_sub(height)
                        .saturating_sub(item.margins.vertical());
                    floor_top
                        .saturating_add(slack / 2)
                        .saturating_add(item.margins.top)
                }
                ItemAlign::Bottom => match self.bottom_anchor {
                    BottomAnchor::Container => content
                        .bottom()
                        .saturating_sub(height)
                        .saturating_sub(item.margins.bottom),
                    BottomAnchor::Floor => floor_top
                        .saturating_add(floor_height)
                        .saturating_sub(height)
                        .saturating_sub(item.margins.bottom),
                },
            };
            rects[range.start + offset] =
                Rect::new(cursor.saturating_add(item.margins.left), y, width, height);
            cursor = cursor
                .saturating_add(width)
                .saturating_add(item.margins.horizontal())
                .saturating_add(gap_share(leftover, item_gaps, offset as u32));
        }
    }
}

/// Constraint for the next child on an axis: the room remaining, or
/// unconstrained if the container itself has no bound there.
const fn child_spec(limit: Option<u16>, used: u32) -> MeasureSpec {
    match limit {
        Some(limit) => MeasureSpec::AtMost((limit as u32).saturating_sub(used) as u16),
        None => MeasureSpec::Unspecified,
    }
}

/// The wrap rule: does the child, margins included, exceed the remaining
/// width? Evaluated widened so narrow remainders cannot underflow. Without
/// a wrap bound nothing ever wraps.
const fn overflows(width: u16, margin_h: u16, wrap_width: Option<u16>, width_used: u32) -> bool {
    match wrap_width {
        Some(wrap) => width as u64 + margin_h as u64 + width_used as u64 > wrap as u64,
        None => false,
    }
}

/// The fill spacing inserted after slot `index` when distributing
/// `leftover` across `gaps` slots. Earlier slots absorb one extra cell each
/// until the remainder is spent, so the shares sum to exactly `leftover`.
const fn gap_share(leftover: u16, gaps: u32, index: u32) -> u16 {
    if gaps == 0 {
        return 0;
    }
    let base = leftover as u32 / gaps;
    let extra = if index < leftover as u32 % gaps { 1 } else { 0 };
    (base + extra) as u16
}

/// Clamp a widened cell count back to the cell grid.
const fn clamp_cells(value: u32) -> u16 {
    if value > u16::MAX as u32 {
        u16::MAX
    } else {
        value as u16
    }
}
