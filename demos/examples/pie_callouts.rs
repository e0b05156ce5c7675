// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Callouts around a small pie chart, driven by a text-mode host.
//!
//! This example shows how a chart integrates `understory_pie_callout`:
//! - slices are plain `Wedge`s laid out from a list of values,
//! - the chart forwards its lifecycle hooks (end of slice animation, selection, reload),
//! - views that do not fit their slice are reported through the overflow handler.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example pie_callouts`

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use kurbo::{Point, Rect, Size};
use peniko::Color;
use understory_pie_callout::{
    CalloutHost, CalloutLayer, CalloutSettings, CalloutView, LeaderLine, PieSlice, Wedge,
};

/// A text label; its width grows with the text.
#[derive(Clone, Debug)]
struct Label {
    text: String,
    frame: Rect,
}

impl Label {
    fn new(text: String) -> Self {
        let size = Size::new(7.0 * text.len() as f64 + 8.0, 18.0);
        Self {
            text,
            frame: Rect::from_origin_size(Point::ORIGIN, size),
        }
    }
}

impl CalloutView for Label {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }
}

/// Host that prints what it is asked to display.
#[derive(Default)]
struct Console {
    shown: Vec<String>,
}

impl CalloutHost<Label> for Console {
    fn add_view(&mut self, view: &Label) {
        let f = view.frame;
        println!(
            "  + {:<10} at ({:.1}, {:.1}) .. ({:.1}, {:.1})",
            view.text, f.x0, f.y0, f.x1, f.y1
        );
        self.shown.push(view.text.clone());
    }

    fn remove_view(&mut self, view: &Label) {
        println!("  - {}", view.text);
        self.shown.retain(|t| t != &view.text);
    }

    fn add_line(&mut self, line: &LeaderLine) {
        let (a, b) = (line.start(), line.end());
        println!(
            "  ~ line ({:.1}, {:.1}) -> ({:.1}, {:.1}) width {}",
            a.x, a.y, b.x, b.y, line.width
        );
    }

    fn remove_line(&mut self, _line: &LeaderLine) {
        println!("  ~ line removed");
    }
}

fn main() {
    env_logger::init();

    let values = [
        ("rent", 45.0),
        ("food", 25.0),
        ("fun", 18.0),
        ("misc", 2.0),
        ("tax", 10.0),
    ];
    let total: f64 = values.iter().map(|(_, v)| v).sum();

    let center = Point::new(300.0, 300.0);
    let mut start = 0.0;
    let slices: Vec<Wedge> = values
        .iter()
        .enumerate()
        .map(|(i, (_, v))| {
            let sweep = v / total * TAU;
            let wedge = Wedge::new(i as u32, center, 120.0, start, start + sweep)
                .with_selected_offset(12.0);
            start += sweep;
            wedge
        })
        .collect();

    let console = Rc::new(RefCell::new(Console::default()));
    let settings = CalloutSettings::new()
        .with_target_radius(170.0)
        .with_line_color(Color::from_rgb8(0x44, 0x44, 0x44))
        .centered(false);
    let mut layer: CalloutLayer<Wedge, Label, Console> = CalloutLayer::new(settings);
    layer.set_host(&console);

    layer.set_view_factory(move |slice: &Wedge, _anchor| {
        let (name, value) = values[slice.id as usize];
        Label::new(format!("{name} {value:.0}%"))
    });
    layer.set_overflow_handler(|view: &Label, available| {
        println!(
            "  ! {} needs {:.1} but only {:.1} fits",
            view.text,
            view.frame.width(),
            available.width
        );
    });

    println!("== Slices finish animating ==");
    for slice in &slices {
        if let Err(err) = layer.on_end_animation(slice) {
            log::error!("placing slice {}: {err}", slice.id);
        }
    }

    println!("\n== Select slice 0 ==");
    layer
        .on_selected(&slices[0], true)
        .unwrap_or_else(|err| log::error!("{err}"));
    if let Some(view) = layer.view(slices[0].id()) {
        let c = view.center();
        println!("  {} moved to ({:.1}, {:.1})", view.text, c.x, c.y);
    }

    println!("\n== Reload ==");
    layer.clear();
    println!("  {} callouts left on screen", console.borrow().shown.len());
}
