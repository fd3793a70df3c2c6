// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tooltip --heading-base-level=0

//! Understory Tooltip: renderer-agnostic tooltip placement and lifecycle.
//!
//! This crate positions a single tooltip next to a triggering element (the *anchor*) and
//! drives its open → clear → close lifecycle. It does not create elements, apply styles,
//! or listen for events; the host supplies those through small traits.
//!
//! ## Pieces
//!
//! - [`place`]: a pure function computing the container's top/left and [`Flip`] corrections
//!   from an [`AnchorPosition`], the arrow padding, and a [`MeasuredLayout`].
//! - [`anchor_position`]: sums offsets along a host's offset-parent chain
//!   ([`OffsetParents`]) into a page-relative [`AnchorPosition`].
//! - [`Tooltip`]: a widget instance bound to a [`TooltipSurface`]. It owns its
//!   [`Templates`], [`TooltipConfig`], hooks, and [`TooltipState`].
//! - [`hover::HoverGate`]: host-clocked show/close delays for an anchor.
//!
//! ## Placement
//!
//! The container opens *above* the anchor, horizontally centered, with the arrow tip
//! `arrow_padding` below the anchor's vertical center. Then:
//!
//! - if its top is negative, it flips under the anchor ([`Flip::UNDER`]);
//! - if its left is negative, it is re-centered toward the anchor and clamped at `0`
//!   ([`Flip::LEFT`]);
//! - otherwise, if the content box overflows the viewport's right edge, it shifts left and
//!   is clamped at `viewport.width - content_width` ([`Flip::RIGHT`]).
//!
//! Bottom overflow is never corrected.
//!
//! ```rust
//! use kurbo::Size;
//! use understory_tooltip::{AnchorPosition, Flip, MeasuredLayout, Viewport, place};
//!
//! let anchor = AnchorPosition::new(10.0, 100.0, 20.0, 10.0);
//! let layout = MeasuredLayout {
//!     container: Size::new(60.0, 40.0),
//!     content_width: 44.0,
//!     viewport: Viewport::new(500.0),
//! };
//! let placement = place(&anchor, 8.0, &layout);
//! assert_eq!(placement.flip, Flip::UNDER);
//! assert_eq!((placement.top, placement.left), (17.0, 80.0));
//! ```
//!
//! ## Lifecycle
//!
//! [`Tooltip::open`] inserts content (text, a registered template, or a host node) and
//! fires `on_open`; after the host lays out the content, [`Tooltip::measure_and_place`]
//! positions the container. Opening while open first clears the previous content.
//! [`Tooltip::close`] is a no-op when closed.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `tracing`: emits `tracing` events for lifecycle transitions and placement.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod anchor;
mod config;
mod error;
pub mod hover;
mod placement;
mod template;
mod tooltip;

pub use anchor::{MAX_OFFSET_DEPTH, OffsetParents, anchor_position};
pub use config::TooltipConfig;
pub use error::Error;
pub use hover::{HoverAction, HoverGate};
pub use placement::{AnchorPosition, Flip, MeasuredLayout, Placement, Viewport, place};
pub use template::Templates;
pub use tooltip::{SurfaceClasses, Tooltip, TooltipContent, TooltipState, TooltipSurface};
