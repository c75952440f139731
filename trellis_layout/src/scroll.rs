// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll panel: a clipped viewport over a single child, with draggable thumbs.

use kurbo::{Point, Rect, Vec2};
use trellis_view_tree::{
    CaptureFlags, Color, HoverPhase, Painter, PointerAction, PointerPhase, View, ViewId, ViewTree,
};

use crate::engine::{layout_subtree, place_view};
use crate::panel::{Orientation, Panel, PanelPayload, scroll_state, scroll_state_mut};

/// Viewport over its first child.
///
/// The child is laid out at its full margin-inflated request and shifted by
/// the scroll offset. Offsets are fractions of the child's extent, kept in
/// `[0, 1 - 1/ratio]` where `ratio` is child extent over viewport extent, so the
/// child's far edge never moves inside the viewport. Axes with `ratio <= 1`
/// do not scroll.
///
/// Wheel and drag input only update the offset and mark the panel dirty; the
/// child is re-arranged the next time the panel is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollPanel {
    /// Wheel delta multiplier, in tree units per wheel unit.
    pub wheel_step: f64,
    /// Thumb width (vertical) or height (horizontal).
    pub thumb_thickness: f64,
    /// Thumb fill.
    pub thumb_color: Color,
    /// Thumb fill while hovered or dragged.
    pub thumb_highlight: Color,
    offset: Vec2,
    ratio: Vec2,
    vertical_thumb: Rect,
    horizontal_thumb: Rect,
    highlighted: Option<Orientation>,
    pressed: Option<Orientation>,
    drag_origin: Point,
    drag_start_offset: Vec2,
    needs_layout: bool,
}

impl Default for ScrollPanel {
    fn default() -> Self {
        Self {
            wheel_step: 30.0,
            thumb_thickness: 10.0,
            thumb_color: Color::DARK_GRAY,
            thumb_highlight: Color::DARK_GRAY.lighten(0.25),
            offset: Vec2::ZERO,
            ratio: Vec2::new(1.0, 1.0),
            vertical_thumb: Rect::ZERO,
            horizontal_thumb: Rect::ZERO,
            highlighted: None,
            pressed: None,
            drag_origin: Point::ZERO,
            drag_start_offset: Vec2::ZERO,
            needs_layout: false,
        }
    }
}

impl ScrollPanel {
    /// Create a view running this panel.
    ///
    /// The view clips to its bounds and captures hover, movement, action, and
    /// scroll input.
    pub fn into_view<T: PanelPayload>(self, name: &'static str) -> View<T> {
        let mut view = View::new(name, T::from_panel(Panel::Scroll(self)));
        view.clip_to_bounds = true;
        view.capture = CaptureFlags::all();
        view.behavior.arrange = Some(arrange::<T>);
        view.behavior.draw = Some(draw::<T>);
        view.behavior.scroll = Some(scroll::<T>);
        view.behavior.hover = Some(hover::<T>);
        view.behavior.movement = Some(movement::<T>);
        view.behavior.action = Some(action::<T>);
        view
    }

    /// Current offset per axis, as a fraction of the child's extent.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Set the offset and schedule a re-arrange.
    ///
    /// The value is clamped against the ratios of the last arrange.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = Vec2::new(
            clamp_offset(offset.x, self.ratio.x),
            clamp_offset(offset.y, self.ratio.y),
        );
        self.needs_layout = true;
    }

    /// Child extent over viewport extent, per axis, as of the last arrange.
    pub fn ratio(&self) -> Vec2 {
        self.ratio
    }

    /// Vertical thumb rectangle, empty when the vertical axis does not scroll.
    pub fn vertical_thumb(&self) -> Rect {
        self.vertical_thumb
    }

    /// Horizontal thumb rectangle, empty when the horizontal axis does not scroll.
    pub fn horizontal_thumb(&self) -> Rect {
        self.horizontal_thumb
    }

    /// Thumb under the pointer, if any.
    pub fn highlighted(&self) -> Option<Orientation> {
        self.highlighted
    }

    /// Thumb being dragged, if any.
    pub fn pressed(&self) -> Option<Orientation> {
        self.pressed
    }

    /// Returns true if the child will be re-arranged on the next draw.
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    fn scrolls(&self, axis: Orientation) -> bool {
        match axis {
            Orientation::Horizontal => self.ratio.x > 1.0,
            Orientation::Vertical => self.ratio.y > 1.0,
        }
    }

    fn thumb_fill(&self, axis: Orientation) -> Color {
        if self.highlighted == Some(axis) || self.pressed == Some(axis) {
            self.thumb_highlight
        } else {
            self.thumb_color
        }
    }
}

/// Clamp into `[0, 1 - 1/ratio]`; zero when nothing overflows.
fn clamp_offset(offset: f64, ratio: f64) -> f64 {
    if ratio > 1.0 {
        offset.clamp(0.0, 1.0 - 1.0 / ratio)
    } else {
        0.0
    }
}

fn ratio_of(content: f64, viewport: f64) -> f64 {
    if viewport > 0.0 { content / viewport } else { 1.0 }
}

/// Position along the track for `offset`; the track is `viewport - length` long.
fn thumb_start(offset: f64, ratio: f64, viewport: f64, length: f64) -> f64 {
    let max_offset = 1.0 - 1.0 / ratio;
    offset / max_offset * (viewport - length)
}

fn arrange<T: PanelPayload>(tree: &mut ViewTree<T>, id: ViewId) {
    let Some(viewport) = tree.view(id).map(|v| v.frame) else {
        return;
    };
    let Some(child) = tree.first_child(id) else {
        return;
    };
    let Some(inflated) = tree.view(child).map(View::margin_request) else {
        return;
    };
    let Some(offset) = scroll_state(tree, id).map(ScrollPanel::offset) else {
        return;
    };
    let origin = Point::new(
        viewport.x0 - offset.x * inflated.width,
        viewport.y0 - offset.y * inflated.height,
    );
    place_view(tree, child, Rect::from_origin_size(origin, inflated));
    let Some(content) = tree.view(child).map(|v| v.frame) else {
        return;
    };
    let Some(state) = scroll_state_mut(tree, id) else {
        return;
    };

    state.ratio = Vec2::new(
        ratio_of(content.width(), viewport.width()),
        ratio_of(content.height(), viewport.height()),
    );
    state.offset = Vec2::new(
        clamp_offset(state.offset.x, state.ratio.x),
        clamp_offset(state.offset.y, state.ratio.y),
    );

    state.vertical_thumb = if state.scrolls(Orientation::Vertical) {
        let length = viewport.height() / state.ratio.y;
        let y = viewport.y0 + thumb_start(state.offset.y, state.ratio.y, viewport.height(), length);
        Rect::new(viewport.x1 - state.thumb_thickness, y, viewport.x1, y + length)
    } else {
        Rect::ZERO
    };
    state.horizontal_thumb = if state.scrolls(Orientation::Horizontal) {
        let length = viewport.width() / state.ratio.x;
        let x = viewport.x0 + thumb_start(state.offset.x, state.ratio.x, viewport.width(), length);
        Rect::new(x, viewport.y1 - state.thumb_thickness, x + length, viewport.y1)
    } else {
        Rect::ZERO
    };
}

fn draw<T: PanelPayload>(tree: &mut ViewTree<T>, id: ViewId, painter: &mut dyn Painter) {
    if scroll_state(tree, id).is_some_and(ScrollPanel::needs_layout) {
        if let Some(state) = scroll_state_mut(tree, id) {
            state.needs_layout = false;
        }
        log::trace!("scroll panel {id:?}: deferred re-arrange");
        layout_subtree(tree, id);
    }
    if tree.first_child(id).is_none() {
        return;
    }
    let Some(state) = scroll_state(tree, id) else {
        return;
    };
    for (axis, thumb) in [
        (Orientation::Vertical, state.vertical_thumb),
        (Orientation::Horizontal, state.horizontal_thumb),
    ] {
        if state.scrolls(axis) {
            painter.set_fill_color(state.thumb_fill(axis));
            painter.fill_rect(thumb);
        }
    }
}

fn scroll<T: PanelPayload>(tree: &mut ViewTree<T>, id: ViewId, delta: f64) {
    let Some(content) = tree.first_child(id).and_then(|c| tree.view(c)).map(|v| v.frame) else {
        return;
    };
    let Some(state) = scroll_state_mut(tree, id) else {
        return;
    };
    if state.scrolls(Orientation::Vertical) {
        let moved = state.offset.y - delta * state.wheel_step / content.height();
        state.offset.y = clamp_offset(moved, state.ratio.y);
        state.needs_layout = true;
    } else if state.scrolls(Orientation::Horizontal) {
        let moved = state.offset.x - delta * state.wheel_step / content.width();
        state.offset.x = clamp_offset(moved, state.ratio.x);
        state.needs_layout = true;
    }
}

fn hover<T: PanelPayload>(tree: &mut ViewTree<T>, id: ViewId, phase: HoverPhase) {
    if phase == HoverPhase::End
        && let Some(state) = scroll_state_mut(tree, id)
    {
        state.highlighted = None;
    }
}

fn movement<T: PanelPayload>(tree: &mut ViewTree<T>, id: ViewId, point: Point) {
    let Some(state) = scroll_state_mut(tree, id) else {
        return;
    };
    state.highlighted = if state.vertical_thumb.contains(point) {
        Some(Orientation::Vertical)
    } else if state.horizontal_thumb.contains(point) {
        Some(Orientation::Horizontal)
    } else {
        None
    };
}

fn action<T: PanelPayload>(
    tree: &mut ViewTree<T>,
    id: ViewId,
    _action: PointerAction,
    phase: PointerPhase,
    point: Point,
) {
    if tree.first_child(id).is_none() {
        return;
    }
    let Some(viewport) = tree.view(id).map(|v| v.frame) else {
        return;
    };
    let Some(state) = scroll_state_mut(tree, id) else {
        return;
    };
    match phase {
        PointerPhase::Begin => {
            state.pressed = if state.vertical_thumb.contains(point) {
                Some(Orientation::Vertical)
            } else if state.horizontal_thumb.contains(point) {
                Some(Orientation::Horizontal)
            } else {
                None
            };
            if state.pressed.is_some() {
                state.drag_origin = point;
                state.drag_start_offset = state.offset;
            }
        }
        PointerPhase::End | PointerPhase::Cancel => state.pressed = None,
        PointerPhase::Drag => {
            let delta = point - state.drag_origin;
            match state.pressed {
                Some(Orientation::Vertical) if viewport.height() > 0.0 => {
                    let moved =
                        state.drag_start_offset.y + delta.y / viewport.height() * state.ratio.y;
                    state.offset.y = clamp_offset(moved, state.ratio.y);
                    state.needs_layout = true;
                }
                Some(Orientation::Horizontal) if viewport.width() > 0.0 => {
                    let moved =
                        state.drag_start_offset.x + delta.x / viewport.width() * state.ratio.x;
                    state.offset.x = clamp_offset(moved, state.ratio.x);
                    state.needs_layout = true;
                }
                _ => {}
            }
        }
        PointerPhase::Double => {}
    }
}
