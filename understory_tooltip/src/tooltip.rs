// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tooltip widget: content insertion, two-phase placement, and lifecycle hooks.

use alloc::boxed::Box;
use alloc::string::String;

use kurbo::{Point, Size};

use crate::anchor::{OffsetParents, anchor_position};
use crate::config::TooltipConfig;
use crate::error::Error;
use crate::placement::{AnchorPosition, Flip, MeasuredLayout, Placement, Viewport, place};
use crate::template::Templates;

bitflags::bitflags! {
    /// Visual state classes applied to the tooltip container by the host.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SurfaceClasses: u8 {
        /// The tooltip is placed and visible.
        const SHOW  = 0b0000_0001;
        /// Arrow points up: the container sits under the anchor.
        const UNDER = 0b0000_0010;
        /// Arrow shifted for a left-edge correction.
        const LEFT  = 0b0000_0100;
        /// Arrow shifted for a right-edge correction.
        const RIGHT = 0b0000_1000;
    }
}

impl From<Flip> for SurfaceClasses {
    fn from(flip: Flip) -> Self {
        let mut classes = Self::empty();
        classes.set(Self::UNDER, flip.contains(Flip::UNDER));
        classes.set(Self::LEFT, flip.contains(Flip::LEFT));
        classes.set(Self::RIGHT, flip.contains(Flip::RIGHT));
        classes
    }
}

/// Rendering target of a [`Tooltip`]: the host's container/content pair.
///
/// The container is the outer box (arrow + content); the content box holds the inserted
/// nodes. Measurements are only read during [`Tooltip::measure_and_place`], after the host
/// has completed layout.
pub trait TooltipSurface {
    /// Host handle for an externally constructed node.
    type Node;

    /// Append a text run to the content box.
    fn append_text(&mut self, text: &str);

    /// Append `node` to the content box.
    fn append_node(&mut self, node: &Self::Node);

    /// Remove all text and nodes from the content box.
    fn clear_content(&mut self);

    /// Rendered size of the container.
    fn container_size(&self) -> Size;

    /// Rendered width of the content box.
    fn content_width(&self) -> f64;

    /// Current viewport.
    fn viewport(&self) -> Viewport;

    /// Move the container's top-left corner to `origin` (page coordinates).
    fn set_position(&mut self, origin: Point);

    /// Replace the container's visual state classes.
    fn set_classes(&mut self, classes: SurfaceClasses);
}

/// Content to show in a tooltip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TooltipContent<N> {
    /// A registered template key, or plain text when no template has that name.
    Text(String),
    /// An externally constructed node.
    Node(N),
}

impl<N> From<&str> for TooltipContent<N> {
    fn from(text: &str) -> Self {
        Self::Text(String::from(text))
    }
}

impl<N> From<String> for TooltipContent<N> {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Open/closed state of a [`Tooltip`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TooltipState {
    /// No content is shown.
    #[default]
    Closed,
    /// Content has been inserted.
    Open,
}

type Hook = Option<Box<dyn FnMut()>>;

/// A single tooltip instance bound to a rendering surface.
///
/// Opening is a two-phase protocol. [`Tooltip::open`] inserts content and records where the
/// arrow should point; once the host has laid out the new content, it calls
/// [`Tooltip::measure_and_place`] to measure the container and position it. The phases must
/// not be fused, since the container size is unknown until layout completes.
///
/// ```
/// use kurbo::{Point, Size};
/// use understory_tooltip::{
///     AnchorPosition, SurfaceClasses, Tooltip, TooltipConfig, TooltipSurface, Viewport,
/// };
///
/// #[derive(Default)]
/// struct Surface {
///     text: String,
///     origin: Point,
/// }
///
/// impl TooltipSurface for Surface {
///     type Node = ();
///     fn append_text(&mut self, text: &str) { self.text.push_str(text); }
///     fn append_node(&mut self, _: &()) {}
///     fn clear_content(&mut self) { self.text.clear(); }
///     fn container_size(&self) -> Size { Size::new(60.0, 40.0) }
///     fn content_width(&self) -> f64 { 44.0 }
///     fn viewport(&self) -> Viewport { Viewport::new(500.0) }
///     fn set_position(&mut self, origin: Point) { self.origin = origin; }
///     fn set_classes(&mut self, _: SurfaceClasses) {}
/// }
///
/// let config = TooltipConfig::new().with_arrow_padding(8.0);
/// let mut tooltip = Tooltip::with_config(Surface::default(), config);
/// tooltip.open(AnchorPosition::new(10.0, 100.0, 20.0, 10.0), "Hello".into());
/// // … host layout pass …
/// let placement = tooltip.measure_and_place().unwrap();
/// assert!(placement.flip_under());
/// assert_eq!(tooltip.surface().origin, Point::new(80.0, 17.0));
/// ```
pub struct Tooltip<S: TooltipSurface> {
    surface: S,
    templates: Templates<S::Node>,
    config: TooltipConfig,
    state: TooltipState,
    /// Anchor of an open still waiting for `measure_and_place`.
    pending: Option<AnchorPosition>,
    on_open: Hook,
    on_clear: Hook,
    on_close: Hook,
}

impl<S> core::fmt::Debug for Tooltip<S>
where
    S: TooltipSurface + core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tooltip")
            .field("surface", &self.surface)
            .field("templates", &self.templates.len())
            .field("config", &self.config)
            .field("state", &self.state)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl<S: TooltipSurface> Tooltip<S> {
    /// Create a closed tooltip with the default configuration.
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, TooltipConfig::default())
    }

    /// Create a closed tooltip with `config`.
    pub fn with_config(surface: S, config: TooltipConfig) -> Self {
        Self {
            surface,
            templates: Templates::new(),
            config,
            state: TooltipState::Closed,
            pending: None,
            on_open: None,
            on_clear: None,
            on_close: None,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect on the next placement.
    pub fn set_config(&mut self, config: TooltipConfig) {
        self.config = config;
    }

    /// Current state.
    pub fn state(&self) -> TooltipState {
        self.state
    }

    /// Whether the tooltip is open.
    pub fn is_open(&self) -> bool {
        self.state == TooltipState::Open
    }

    /// The rendering surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The rendering surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consume the tooltip, returning its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Registered templates.
    pub fn templates(&self) -> &Templates<S::Node> {
        &self.templates
    }

    /// Set the callback fired at the start of every open, before content is inserted.
    pub fn set_on_open(&mut self, hook: impl FnMut() + 'static) {
        self.on_open = Some(Box::new(hook));
    }

    /// Set the callback fired at the start of every clear.
    pub fn set_on_clear(&mut self, hook: impl FnMut() + 'static) {
        self.on_clear = Some(Box::new(hook));
    }

    /// Set the callback fired when an open tooltip closes.
    pub fn set_on_close(&mut self, hook: impl FnMut() + 'static) {
        self.on_close = Some(Box::new(hook));
    }

    /// Register a template from a host declaration.
    ///
    /// Fails with [`Error::InvalidArgument`] if the declaration has no name; nothing is
    /// registered in that case.
    pub fn register_template(&mut self, name: Option<&str>, node: S::Node) -> Result<(), Error> {
        self.templates.register(name, node)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(name = ?name, "registered tooltip template");
        Ok(())
    }

    /// Register a template under `name`, returning the node it replaced.
    pub fn insert_template(&mut self, name: &str, node: S::Node) -> Option<S::Node> {
        self.templates.insert(name, node)
    }

    /// Remove the template registered under `name`.
    pub fn remove_template(&mut self, name: &str) -> Option<S::Node> {
        self.templates.remove(name)
    }

    /// Look up the template registered under `name`.
    pub fn template(&self, name: &str) -> Option<&S::Node> {
        self.templates.get(name)
    }

    /// Open the tooltip next to `anchor` with `content`.
    ///
    /// If already open, the previous content and flip classes are cleared first. The
    /// `on_open` hook fires before content is inserted. Call
    /// [`measure_and_place`](Self::measure_and_place) after the host has laid out the new
    /// content.
    pub fn open(&mut self, anchor: AnchorPosition, content: TooltipContent<S::Node>) {
        if self.is_open() {
            self.surface.set_classes(SurfaceClasses::empty());
            self.clear();
        }

        fire(&mut self.on_open);

        match &content {
            TooltipContent::Text(text) => match self.templates.get(text) {
                Some(node) => self.surface.append_node(node),
                None => self.surface.append_text(text),
            },
            TooltipContent::Node(node) => self.surface.append_node(node),
        }

        self.state = TooltipState::Open;
        self.pending = Some(anchor);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            top = anchor.top,
            left = anchor.left,
            width = anchor.width,
            height = anchor.height,
            "tooltip opened"
        );
    }

    /// Resolve `anchor` through `lookup` and [`open`](Self::open) next to it.
    pub fn open_at<K, L>(&mut self, lookup: &L, anchor: &K, content: TooltipContent<S::Node>)
    where
        K: Clone,
        L: OffsetParents<K> + ?Sized,
    {
        let position = anchor_position(lookup, anchor);
        self.open(position, content);
    }

    /// Measure the laid-out container and position it for the pending open.
    ///
    /// Applies the position and the `SHOW` plus flip classes to the surface. Returns
    /// `None` if there is no pending open (the tooltip was closed, or already placed).
    pub fn measure_and_place(&mut self) -> Option<Placement> {
        let anchor = self.pending.take()?;
        let layout = MeasuredLayout {
            container: self.surface.container_size(),
            content_width: self.surface.content_width(),
            viewport: self.surface.viewport(),
        };
        let placement = place(&anchor, self.config.arrow_padding, &layout);

        self.surface.set_position(placement.origin());
        self.surface
            .set_classes(SurfaceClasses::SHOW | SurfaceClasses::from(placement.flip));

        #[cfg(feature = "tracing")]
        tracing::debug!(
            top = placement.top,
            left = placement.left,
            flip = ?placement.flip,
            "tooltip placed"
        );

        Some(placement)
    }

    /// Fire `on_clear` and remove all content.
    ///
    /// The state is not changed; use [`close`](Self::close) to hide the tooltip.
    pub fn clear(&mut self) {
        fire(&mut self.on_clear);
        self.surface.clear_content();
        #[cfg(feature = "tracing")]
        tracing::debug!("tooltip cleared");
    }

    /// Close the tooltip and clear its content. Does nothing if not open.
    pub fn close(&mut self) {
        if !self.is_open() {
            return;
        }
        fire(&mut self.on_close);
        self.surface.set_classes(SurfaceClasses::empty());
        self.state = TooltipState::Closed;
        self.pending = None;
        #[cfg(feature = "tracing")]
        tracing::debug!("tooltip closed");
        self.clear();
    }
}

fn fire(hook: &mut Hook) {
    if let Some(hook) = hook {
        hook();
    }
}
