// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small Trellis UI driven without a window.
//!
//! This example shows how to:
//! - define widgets as a payload enum with behavior slots,
//! - compose them with the dock, stack, and scroll panels from `trellis_layout`,
//! - paint through a [`Painter`] (here one that prints its calls),
//! - feed synthetic pointer input through `trellis_pointer`.
//!
//! Run:
//! - `cargo run -p trellis_demos --example headless`
//! - `RUST_LOG=trace cargo run -p trellis_demos --example headless` to also print
//!   dispatch and layout traces.

use kurbo::{Point, Rect, RoundedRect, Size};
use trellis_layout::{
    DockPanel, Orientation, Panel, PanelPayload, ScrollPanel, StackPanel, layout_tree,
};
use trellis_pointer::PointerState;
use trellis_view_tree::{
    CaptureFlags, Color, DockPosition, HorizontalAlignment, HoverPhase, Painter, PointerAction,
    PointerPhase, VerticalAlignment, View, ViewId, ViewTree, render,
};

/// Advance of one glyph; the demo uses a fixed-width font metric.
const GLYPH_WIDTH: f64 = 8.0;
const LINE_HEIGHT: f64 = 16.0;

const ROWS: [&str; 8] = [
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel",
];

#[derive(Debug)]
enum Widget {
    Panel(Panel),
    Label(&'static str),
    Button(Button),
}

#[derive(Debug)]
struct Button {
    label: &'static str,
    hovered: bool,
    pressed: bool,
    clicks: u32,
}

impl PanelPayload for Widget {
    fn from_panel(panel: Panel) -> Self {
        Self::Panel(panel)
    }

    fn panel(&self) -> Option<&Panel> {
        match self {
            Self::Panel(p) => Some(p),
            _ => None,
        }
    }

    fn panel_mut(&mut self) -> Option<&mut Panel> {
        match self {
            Self::Panel(p) => Some(p),
            _ => None,
        }
    }
}

fn text_size(text: &str) -> Size {
    #[allow(clippy::cast_precision_loss, reason = "labels are short")]
    Size::new(text.len() as f64 * GLYPH_WIDTH, LINE_HEIGHT)
}

fn label(text: &'static str) -> View<Widget> {
    let mut view = View::new("label", Widget::Label(text));
    view.size_request = text_size(text);
    view.horizontal_alignment = HorizontalAlignment::Left;
    view.behavior.draw = Some(draw_label);
    view
}

fn draw_label(tree: &mut ViewTree<Widget>, id: ViewId, painter: &mut dyn Painter) {
    if let Some(view) = tree.view(id)
        && let Widget::Label(text) = view.payload
    {
        painter.draw_text(text, view.frame.origin());
    }
}

fn button(text: &'static str) -> View<Widget> {
    let mut view = View::new(
        "button",
        Widget::Button(Button {
            label: text,
            hovered: false,
            pressed: false,
            clicks: 0,
        }),
    );
    view.margin = kurbo::Insets::uniform(4.0);
    view.vertical_alignment = VerticalAlignment::Middle;
    view.capture = CaptureFlags::HOVER | CaptureFlags::ACTION;
    view.behavior.measure = Some(measure_button);
    view.behavior.draw = Some(draw_button);
    view.behavior.hover = Some(hover_button);
    view.behavior.action = Some(press_button);
    view
}

fn button_state(tree: &mut ViewTree<Widget>, id: ViewId) -> Option<&mut Button> {
    match tree.payload_mut(id)? {
        Widget::Button(b) => Some(b),
        _ => None,
    }
}

fn measure_button(tree: &mut ViewTree<Widget>, id: ViewId) {
    let Some(text) = button_state(tree, id).map(|b| b.label) else {
        return;
    };
    if let Some(view) = tree.view_mut(id) {
        let text = text_size(text);
        view.size_request = Size::new(text.width + 16.0, text.height + 8.0);
    }
}

fn draw_button(tree: &mut ViewTree<Widget>, id: ViewId, painter: &mut dyn Painter) {
    let Some(view) = tree.view(id) else {
        return;
    };
    let Widget::Button(state) = &view.payload else {
        return;
    };
    let frame = view.frame;
    let base = if state.pressed {
        Color::DARK_GRAY
    } else {
        Color::rgb(0.3, 0.4, 0.8)
    };
    let top = if state.hovered { base.lighten(0.2) } else { base };
    painter.set_linear_gradient(
        Point::new(frame.x0, frame.y0),
        Point::new(frame.x0, frame.y1),
        top,
        base,
    );
    painter.fill_rounded_rect(RoundedRect::from_rect(frame, 4.0));
    painter.set_stroke(Color::BLACK, 1.0);
    painter.stroke_rounded_rect(RoundedRect::from_rect(frame, 4.0));
    let text = painter.measure_text(state.label);
    let origin = Point::new(
        frame.center().x - text.width / 2.0,
        frame.center().y - text.height / 2.0,
    );
    painter.draw_text(state.label, origin);
}

fn hover_button(tree: &mut ViewTree<Widget>, id: ViewId, phase: HoverPhase) {
    if let Some(state) = button_state(tree, id) {
        state.hovered = phase == HoverPhase::Begin;
    }
}

fn press_button(
    tree: &mut ViewTree<Widget>,
    id: ViewId,
    action: PointerAction,
    phase: PointerPhase,
    _: Point,
) {
    if action != PointerAction::Primary {
        return;
    }
    let Some(state) = button_state(tree, id) else {
        return;
    };
    match phase {
        PointerPhase::Begin => state.pressed = true,
        PointerPhase::End => {
            // A release counts as a click only while the pointer is still over the button.
            if state.pressed && state.hovered {
                state.clicks += 1;
                println!("clicked {:?} ({} total)", state.label, state.clicks);
            }
            state.pressed = false;
        }
        PointerPhase::Cancel => state.pressed = false,
        PointerPhase::Drag | PointerPhase::Double => {}
    }
}

/// Prints every call it receives.
#[derive(Debug, Default)]
struct PrintPainter {
    depth: usize,
    calls: usize,
}

impl PrintPainter {
    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        self.calls += 1;
        println!("{:indent$}{text}", "", indent = self.depth * 2);
    }
}

impl Painter for PrintPainter {
    fn set_fill_color(&mut self, color: Color) {
        self.line(format_args!("fill color {color:?}"));
    }

    fn set_stroke(&mut self, color: Color, width: f64) {
        self.line(format_args!("stroke {color:?} width {width}"));
    }

    fn set_linear_gradient(&mut self, start: Point, end: Point, from: Color, to: Color) {
        self.line(format_args!("gradient {start:?} -> {end:?} ({from:?} -> {to:?})"));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.line(format_args!("fill {rect:?}"));
    }

    fn fill_rounded_rect(&mut self, rect: RoundedRect) {
        self.line(format_args!("fill rounded {:?}", rect.rect()));
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.line(format_args!("stroke {rect:?}"));
    }

    fn stroke_rounded_rect(&mut self, rect: RoundedRect) {
        self.line(format_args!("stroke rounded {:?}", rect.rect()));
    }

    fn draw_text(&mut self, text: &str, origin: Point) {
        self.line(format_args!("text {text:?} at {origin:?}"));
    }

    fn measure_text(&mut self, text: &str) -> Size {
        text_size(text)
    }

    fn push_clip(&mut self, rect: Rect) {
        self.line(format_args!("push clip {rect:?}"));
        self.depth += 1;
    }

    fn pop_clip(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line(format_args!("pop clip"));
    }
}

fn main() {
    env_logger::init();

    // root (dock)
    // ├── toolbar (horizontal stack, top): Open, Save, Quit
    // ├── status (label, bottom)
    // └── list (scroll, fills the rest)
    //     └── rows (vertical stack): 40 labels
    let mut tree: ViewTree<Widget> = ViewTree::new();
    let root = tree.insert(DockPanel.into_view("root"));

    let mut toolbar = StackPanel::new(Orientation::Horizontal).into_view("toolbar");
    toolbar.dock = DockPosition::Top;
    toolbar.background = Color::rgb(0.9, 0.9, 0.9);
    let toolbar = tree.insert(toolbar);
    let buttons: Vec<ViewId> = ["Open", "Save", "Quit"]
        .into_iter()
        .map(|text| tree.insert(button(text)))
        .collect();
    for &b in &buttons {
        tree.add_child(toolbar, b);
    }

    let mut status = label("Ready");
    status.dock = DockPosition::Bottom;
    let status = tree.insert(status);

    let list = tree.insert(ScrollPanel::default().into_view("list"));
    let rows = tree.insert(StackPanel::new(Orientation::Vertical).into_view("rows"));
    for &text in ROWS.iter().cycle().take(40) {
        let row = tree.insert(label(text));
        tree.add_child(rows, row);
    }

    tree.add_child(root, toolbar);
    tree.add_child(root, status);
    tree.add_child(root, list);
    tree.add_child(list, rows);

    let viewport = Size::new(320.0, 240.0);
    layout_tree(&mut tree, root, viewport);
    log::info!("laid out {} views in {viewport:?}", tree.len());
    for id in tree.descendants(root) {
        if let Some(view) = tree.view(id) {
            let depth = tree.depth_of(id).unwrap_or(0);
            println!("{:indent$}{} {:?}", "", view.name, view.frame, indent = depth * 2);
        }
    }

    println!("\n-- first frame --");
    let mut painter = PrintPainter::default();
    render(&mut tree, root, &mut painter);

    println!("\n-- click Save --");
    let mut pointer = PointerState::new();
    let save = tree.view(buttons[1]).map(|v| v.frame.center()).unwrap_or_default();
    pointer.on_move(&mut tree, root, save);
    pointer.on_action(&mut tree, PointerAction::Primary, PointerPhase::Begin, save);
    pointer.on_action(&mut tree, PointerAction::Primary, PointerPhase::End, save);

    println!("\n-- press Quit, then drag off and release --");
    let quit = tree.view(buttons[2]).map(|v| v.frame.center()).unwrap_or_default();
    pointer.on_move(&mut tree, root, quit);
    pointer.on_action(&mut tree, PointerAction::Primary, PointerPhase::Begin, quit);
    let away = Point::new(160.0, 120.0);
    pointer.on_move(&mut tree, root, away);
    pointer.on_action(&mut tree, PointerAction::Primary, PointerPhase::End, away);

    println!("\n-- scroll the list --");
    for _ in 0..5 {
        pointer.on_scroll(&mut tree, -3.0);
    }
    if let Some(Widget::Panel(Panel::Scroll(state))) = tree.payload(list) {
        println!(
            "offset {:?}, re-arrange pending: {}",
            state.offset(),
            state.needs_layout()
        );
    }
    let first_row = tree.first_child(rows);
    let before = first_row.and_then(|r| tree.view(r)).map(|v| v.frame);

    println!("\n-- second frame --");
    let mut painter = PrintPainter::default();
    render(&mut tree, root, &mut painter);
    let after = first_row.and_then(|r| tree.view(r)).map(|v| v.frame);
    println!("\nfirst row moved from {before:?} to {after:?}");
    println!("{} paint calls", painter.calls);

    pointer.on_leave(&mut tree, Point::new(-1.0, -1.0));

    tree.destroy(root);
    assert!(tree.is_empty());
}
