// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint order and the drawing service trait.

use kurbo::{Point, Rect, RoundedRect, Size};
use smallvec::SmallVec;

use crate::tree::ViewTree;
use crate::types::{Color, ViewId};

/// Drawing backend used by the render pass and by `draw` slots.
///
/// The tree only orders calls and supplies geometry and colors; rasterization,
/// text shaping, and clipping are up to the implementation. All coordinates are
/// in tree space.
pub trait Painter {
    /// Set the solid color used by subsequent fills.
    fn set_fill_color(&mut self, color: Color);

    /// Set the color and width used by subsequent strokes.
    fn set_stroke(&mut self, color: Color, width: f64);

    /// Use a linear gradient from `start` to `end` for subsequent fills.
    ///
    /// Backends without gradients fall back to a solid `from` fill.
    fn set_linear_gradient(&mut self, start: Point, end: Point, from: Color, to: Color) {
        let _ = (start, end, to);
        self.set_fill_color(from);
    }

    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect);

    /// Fill a rounded rectangle. Defaults to filling its bounding rectangle.
    fn fill_rounded_rect(&mut self, rect: RoundedRect) {
        self.fill_rect(rect.rect());
    }

    /// Stroke a rectangle outline.
    fn stroke_rect(&mut self, rect: Rect);

    /// Stroke a rounded rectangle outline. Defaults to its bounding rectangle.
    fn stroke_rounded_rect(&mut self, rect: RoundedRect) {
        self.stroke_rect(rect.rect());
    }

    /// Draw a single line of text with its top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point);

    /// Size `text` would occupy if drawn.
    fn measure_text(&mut self, text: &str) -> Size;

    /// Intersect the clip with `rect` until the matching [`pop_clip`](Self::pop_clip).
    fn push_clip(&mut self, rect: Rect) {
        let _ = rect;
    }

    /// Restore the clip active before the last [`push_clip`](Self::push_clip).
    fn pop_clip(&mut self) {}
}

/// Paint the subtree rooted at `root` in pre-order.
///
/// For each view the background is filled when visible, then the `draw` slot
/// runs. Parents paint before their children, so the topmost view is painted
/// last. A view with `clip_to_bounds` pushes its frame as a clip before its own
/// paint and pops it once the walk leaves its subtree.
///
/// `draw` slots get `&mut ViewTree` and may update state, but must not change
/// the structure of the subtree being painted.
pub fn render<T>(tree: &mut ViewTree<T>, root: ViewId, painter: &mut dyn Painter) {
    log::trace!("render: begin at {root:?}");
    let mut clips: SmallVec<[ViewId; 8]> = SmallVec::new();
    let mut current = tree.is_alive(root).then_some(root);
    while let Some(id) = current {
        while let Some(&owner) = clips.last() {
            if tree.is_in_subtree(id, owner) {
                break;
            }
            clips.pop();
            painter.pop_clip();
        }
        let Some(view) = tree.view(id) else {
            break;
        };
        let frame = view.frame;
        let background = view.background;
        let clip = view.clip_to_bounds;
        let draw = view.behavior.draw;

        if clip {
            painter.push_clip(frame);
            clips.push(id);
        }
        if background.is_visible() {
            painter.set_fill_color(background);
            painter.fill_rect(frame);
        }
        if let Some(draw) = draw {
            draw(tree, id, painter);
        }
        current = tree.next_in_subtree(id, root);
    }
    for _ in clips.drain(..) {
        painter.pop_clip();
    }
    log::trace!("render: end at {root:?}");
}
