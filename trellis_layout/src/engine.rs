// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measure and arrange passes, and the shared placement helper.

use kurbo::{Rect, Size};
use trellis_view_tree::{HorizontalAlignment, VerticalAlignment, ViewId, ViewTree};

/// Lay out the tree rooted at `root` inside `available`.
///
/// 1. Measure: every `measure` slot in the subtree runs, children before parents,
///    so a container always sees its children's final `size_request`.
/// 2. The root frame becomes `(0, 0)` with `available` grown to the root's
///    `size_request` on each axis where the request is larger.
/// 3. Arrange: every `arrange` slot runs in pre-order, so a container's frame is
///    resolved before its children are placed.
pub fn layout_tree<T>(tree: &mut ViewTree<T>, root: ViewId, available: Size) {
    if !tree.is_alive(root) {
        return;
    }
    log::trace!("layout_tree: {root:?} in {available:?}");
    measure_pass(tree, root);
    if let Some(view) = tree.view_mut(root) {
        let request = view.size_request;
        view.frame = Rect::new(
            0.0,
            0.0,
            available.width.max(request.width),
            available.height.max(request.height),
        );
    }
    arrange_pass(tree, root);
}

/// Measure and arrange the subtree rooted at `view`, keeping `view`'s current frame.
///
/// Used for local re-layout, for example after a scroll offset changes.
pub fn layout_subtree<T>(tree: &mut ViewTree<T>, view: ViewId) {
    if !tree.is_alive(view) {
        return;
    }
    log::trace!("layout_subtree: {view:?}");
    measure_pass(tree, view);
    arrange_pass(tree, view);
}

/// Walk backwards from the deepest descendant, running `measure` slots.
fn measure_pass<T>(tree: &mut ViewTree<T>, root: ViewId) {
    let mut current = tree.deepest_in_tree(root);
    while let Some(id) = current {
        if let Some(measure) = tree.view(id).and_then(|v| v.behavior.measure) {
            measure(tree, id);
        }
        if id == root {
            break;
        }
        current = tree.previous_in_tree(id);
    }
}

/// Walk the subtree in pre-order, running `arrange` slots.
fn arrange_pass<T>(tree: &mut ViewTree<T>, root: ViewId) {
    let mut current = Some(root);
    while let Some(id) = current {
        if let Some(arrange) = tree.view(id).and_then(|v| v.behavior.arrange) {
            arrange(tree, id);
        }
        current = tree.next_in_subtree(id, root);
    }
}

/// Resolve `view`'s frame inside `available` from its request, margins, and alignment.
///
/// Each axis is handled independently:
///
/// - `Stretch`/`Fill` take the available extent minus both margins.
/// - `Left`/`Top` take `min(request, available)` starting after the leading margin.
/// - `Center`/`Middle` take `min(request, available)` centered between the margins,
///   never starting before the leading margin.
/// - `Right`/`Bottom` take `min(request, available)` ending at the trailing margin.
///
/// Extents never go negative.
pub fn place_view<T>(tree: &mut ViewTree<T>, view: ViewId, available: Rect) {
    let Some(v) = tree.view_mut(view) else {
        return;
    };
    let horizontal = match v.horizontal_alignment {
        HorizontalAlignment::Stretch => Align::Fill,
        HorizontalAlignment::Left => Align::Start,
        HorizontalAlignment::Center => Align::Center,
        HorizontalAlignment::Right => Align::End,
    };
    let vertical = match v.vertical_alignment {
        VerticalAlignment::Fill => Align::Fill,
        VerticalAlignment::Top => Align::Start,
        VerticalAlignment::Middle => Align::Center,
        VerticalAlignment::Bottom => Align::End,
    };
    let (x, width) = place_axis(
        horizontal,
        available.x0,
        available.width(),
        v.size_request.width,
        v.margin.x0,
        v.margin.x1,
    );
    let (y, height) = place_axis(
        vertical,
        available.y0,
        available.height(),
        v.size_request.height,
        v.margin.y0,
        v.margin.y1,
    );
    v.frame = Rect::new(x, y, x + width, y + height);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Align {
    Fill,
    Start,
    Center,
    End,
}

/// Returns `(origin, extent)` along one axis.
fn place_axis(
    align: Align,
    start: f64,
    length: f64,
    request: f64,
    leading: f64,
    trailing: f64,
) -> (f64, f64) {
    let lead = start + leading;
    match align {
        Align::Fill => (lead, (length - leading - trailing).max(0.0)),
        Align::Start => (lead, request.min(length).max(0.0)),
        Align::Center => {
            let extent = request.min(length).max(0.0);
            let span = length - leading - trailing;
            ((lead + (span - extent) / 2.0).max(lead), extent)
        }
        Align::End => {
            let extent = request.min(length).max(0.0);
            (start + length - trailing - extent, extent)
        }
    }
}
