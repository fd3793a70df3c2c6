// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover-driven tooltip over a toy page of offset-positioned elements.
//!
//! This example shows how to combine:
//! - an [`OffsetParents`] implementation over a small element table,
//! - [`HoverGate`] for show/close delays on a host clock,
//! - [`Tooltip`] with a template, hooks, and the two-phase open → measure protocol.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example tooltip_hover`

use std::collections::HashMap;

use kurbo::{Point, Size, Vec2};
use tracing_subscriber::EnvFilter;
use understory_tooltip::{
    HoverAction, HoverGate, OffsetParents, SurfaceClasses, Tooltip, TooltipConfig, TooltipContent,
    TooltipSurface, Viewport,
};

type Parent = Option<&'static str>;

/// Element table: offset relative to the offset parent, size, and the parent id.
struct Page {
    elements: HashMap<&'static str, (Vec2, Size, Parent)>,
}

impl Page {
    fn insert(&mut self, id: &'static str, offset: (f64, f64), size: (f64, f64), parent: Parent) {
        let entry = (Vec2::from(offset), Size::from(size), parent);
        self.elements.insert(id, entry);
    }
}

impl OffsetParents<&'static str> for Page {
    fn offset(&self, node: &&'static str) -> Vec2 {
        self.elements[node].0
    }

    fn size(&self, node: &&'static str) -> Size {
        self.elements[node].1
    }

    fn offset_parent(&self, node: &&'static str) -> Parent {
        self.elements[node].2
    }
}

/// A fake surface that "lays out" text at 7px per character.
#[derive(Debug, Default)]
struct TextSurface {
    content: String,
    origin: Point,
    classes: SurfaceClasses,
}

impl TooltipSurface for TextSurface {
    type Node = String;

    fn append_text(&mut self, text: &str) {
        self.content.push_str(text);
    }

    fn append_node(&mut self, node: &String) {
        self.content.push_str(node);
    }

    fn clear_content(&mut self) {
        self.content.clear();
    }

    fn container_size(&self) -> Size {
        Size::new(self.content_width() + 16.0, 32.0)
    }

    fn content_width(&self) -> f64 {
        self.content.chars().count() as f64 * 7.0
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(320.0)
    }

    fn set_position(&mut self, origin: Point) {
        self.origin = origin;
    }

    fn set_classes(&mut self, classes: SurfaceClasses) {
        self.classes = classes;
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut page = Page {
        elements: HashMap::new(),
    };
    page.insert("body", (0.0, 0.0), (320.0, 480.0), None);
    page.insert("toolbar", (0.0, 4.0), (320.0, 24.0), Some("body"));
    page.insert("save", (280.0, 2.0), (20.0, 20.0), Some("toolbar"));

    let config = TooltipConfig::new().with_arrow_padding(6.0);
    let mut tooltip = Tooltip::with_config(TextSurface::default(), config);
    tooltip.set_on_open(|| println!("  on_open"));
    tooltip.set_on_close(|| println!("  on_close"));
    let help = String::from("Save (Ctrl+S)");
    if let Err(err) = tooltip.register_template(Some("save-help"), help) {
        eprintln!("{err}");
        return;
    }
    if let Err(err) = tooltip.register_template(None, String::from("unnamed")) {
        println!("rejected declaration: {err}");
    }

    let mut gate = HoverGate::from_config(tooltip.config());

    // Host clock in milliseconds: hover briefly, hover long enough to open, then leave.
    let events: [(u64, bool); 4] = [(0, true), (300, false), (1_000, true), (2_000, false)];
    let mut now = 0;
    for (at, entered) in events {
        while let Some(deadline) = gate.next_deadline().filter(|&d| d <= at) {
            now = deadline;
            step(&mut gate, &mut tooltip, &page, now);
        }
        now = at;
        if entered {
            println!("{now:>5}ms enter save");
            gate.on_enter(now);
        } else {
            println!("{now:>5}ms leave save");
            gate.on_leave(now);
        }
    }
    while let Some(deadline) = gate.next_deadline() {
        now = deadline.max(now);
        step(&mut gate, &mut tooltip, &page, now);
    }
}

fn step(gate: &mut HoverGate, tooltip: &mut Tooltip<TextSurface>, page: &Page, now: u64) {
    match gate.poll(now) {
        Some(HoverAction::Open) => {
            tooltip.open_at(page, &"save", TooltipContent::from("save-help"));
            // The host would yield to its layout pass here.
            if let Some(placement) = tooltip.measure_and_place() {
                let content = &tooltip.surface().content;
                let origin = placement.origin();
                let flip = placement.flip;
                println!("{now:>5}ms open {content:?} at {origin:?} flip={flip:?}");
            }
        }
        Some(HoverAction::Close) => {
            println!("{now:>5}ms close");
            tooltip.close();
        }
        None => {}
    }
}
