// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport-constrained placement of a tooltip container relative to its anchor.
//!
//! The default expansion direction is *above* the anchor: the bottom of the container
//! (where the arrow tip sits) is placed at the anchor, horizontally centered on it.
//! When that would overflow the top of the page the container is flipped under the
//! anchor, and when it would overflow the left or right edge of the viewport it is
//! shifted back in (and clamped if shifting is not enough).
//!
//! Bottom overflow is never corrected; only top overflow triggers a flip.

use kurbo::{Point, Rect, Size};

bitflags::bitflags! {
    /// Positional corrections applied by [`place`].
    ///
    /// [`Flip::LEFT`] and [`Flip::RIGHT`] are mutually exclusive. [`Flip::UNDER`] is
    /// independent of both. These only drive the arrow direction indicator; they are
    /// not used in further geometry.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flip: u8 {
        /// The container did not fit above the anchor and was placed under it.
        const UNDER = 0b0000_0001;
        /// The container overflowed the left edge and was shifted right.
        const LEFT  = 0b0000_0010;
        /// The container overflowed the right edge of the viewport and was shifted left.
        const RIGHT = 0b0000_0100;
    }
}

/// Cumulative page-relative offset and size of the triggering element.
///
/// An anchor with zero width/height is legal; placement then degenerates to a point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnchorPosition {
    /// Distance from the top of the page.
    pub top: f64,
    /// Distance from the left of the page.
    pub left: f64,
    /// Rendered width of the anchor.
    pub width: f64,
    /// Rendered height of the anchor.
    pub height: f64,
}

impl AnchorPosition {
    /// Create an anchor position from its page offset and size.
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Create an anchor position from a page origin and a size.
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.y, origin.x, size.width, size.height)
    }

    /// Page-space rectangle covered by the anchor.
    pub fn to_rect(self) -> Rect {
        Rect::from_origin_size((self.left, self.top), (self.width, self.height))
    }

    /// Point the arrow tip targets when the tooltip sits above the anchor.
    ///
    /// This is `(left + width / 2, top + arrow_padding + height / 2)`, i.e. steps 1–2 of
    /// the placement algorithm, before the container size is known.
    pub fn arrow_target(&self, arrow_padding: f64) -> Point {
        Point::new(
            self.left + self.width / 2.0,
            self.top + arrow_padding + self.height / 2.0,
        )
    }
}

impl From<Rect> for AnchorPosition {
    fn from(rect: Rect) -> Self {
        Self::from_origin_size(rect.origin(), rect.size())
    }
}

/// Visible area the tooltip must fit into. Only the width is checked.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Current visible width.
    pub width: f64,
}

impl Viewport {
    /// Create a viewport of the given width.
    pub const fn new(width: f64) -> Self {
        Self { width }
    }
}

/// Post-layout measurements required by [`place`].
///
/// These are only meaningful after the content has been inserted and the host has
/// completed a layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeasuredLayout {
    /// Rendered size of the outer container (arrow + content box).
    pub container: Size,
    /// Rendered width of the inner content box, used for right-edge overflow.
    pub content_width: f64,
    /// Current viewport.
    pub viewport: Viewport,
}

/// Computed position of the tooltip container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Placement {
    /// Page-relative top of the container.
    pub top: f64,
    /// Page-relative left of the container.
    pub left: f64,
    /// Corrections applied while fitting the container.
    pub flip: Flip,
}

impl Placement {
    /// Top-left corner of the container in page coordinates.
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Whether the container was flipped under the anchor.
    pub fn flip_under(&self) -> bool {
        self.flip.contains(Flip::UNDER)
    }

    /// Whether the container was shifted away from the left edge.
    pub fn flip_left(&self) -> bool {
        self.flip.contains(Flip::LEFT)
    }

    /// Whether the container was shifted away from the right edge.
    pub fn flip_right(&self) -> bool {
        self.flip.contains(Flip::RIGHT)
    }
}

/// Compute the container position for `anchor`.
///
/// `arrow_padding` is the fixed offset reserved for the decorative arrow (its border
/// width). No input is validated: NaN in any measurement propagates into the result.
#[must_use]
pub fn place(anchor: &AnchorPosition, arrow_padding: f64, layout: &MeasuredLayout) -> Placement {
    let target = anchor.arrow_target(arrow_padding);
    let container = layout.container;
    let content_width = layout.content_width;
    let viewport_width = layout.viewport.width;

    let mut top = target.y - container.height;
    let mut left = target.x - container.width / 2.0;
    let mut flip = Flip::empty();

    if top < 0.0 {
        top += anchor.height + container.height - 2.0 * arrow_padding;
        flip |= Flip::UNDER;
    }

    if left < 0.0 {
        // Back toward the anchor center, keeping the arrow on it if possible.
        left += container.width / 2.0 - arrow_padding;
        if left < 0.0 {
            left = 0.0;
        }
        flip |= Flip::LEFT;
    } else if left + content_width > viewport_width {
        left -= content_width / 2.0 - arrow_padding;
        if left + content_width > viewport_width {
            left = viewport_width - content_width;
        }
        flip |= Flip::RIGHT;
    }

    Placement { top, left, flip }
}
