// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The view record and its behavior slots.

use core::fmt;

use kurbo::{Insets, Point, Rect, Size};

use crate::render::Painter;
use crate::tree::ViewTree;
use crate::types::{
    CaptureFlags, Color, DockPosition, GridLocation, HorizontalAlignment, HoverPhase,
    PointerAction, PointerPhase, VerticalAlignment, ViewId,
};

/// Computes the view's `size_request`, typically from its children's requests.
pub type MeasureFn<T> = fn(&mut ViewTree<T>, ViewId);
/// Assigns frames to the view's children from the view's own frame.
pub type ArrangeFn<T> = fn(&mut ViewTree<T>, ViewId);
/// Paints the view's content after its background.
pub type DrawFn<T> = fn(&mut ViewTree<T>, ViewId, &mut dyn Painter);
/// Releases widget resources when the view is destroyed.
pub type DestroyFn<T> = fn(&mut ViewTree<T>, ViewId);
/// Receives hover transitions.
pub type HoverFn<T> = fn(&mut ViewTree<T>, ViewId, HoverPhase);
/// Receives pointer movement while the view is hot. The point is in tree coordinates.
pub type MovementFn<T> = fn(&mut ViewTree<T>, ViewId, Point);
/// Receives press, release, drag, and cancel notifications.
pub type ActionFn<T> = fn(&mut ViewTree<T>, ViewId, PointerAction, PointerPhase, Point);
/// Receives scroll wheel deltas.
pub type ScrollFn<T> = fn(&mut ViewTree<T>, ViewId, f64);

/// Optional behavior slots.
///
/// A view's kind is the set of slots it fills plus the meaning of its payload.
/// Slots are plain function pointers so the tree can copy one out and call it
/// with `&mut ViewTree` without borrowing the view.
pub struct Behavior<T> {
    /// Measure pass slot.
    pub measure: Option<MeasureFn<T>>,
    /// Arrange pass slot.
    pub arrange: Option<ArrangeFn<T>>,
    /// Render pass slot.
    pub draw: Option<DrawFn<T>>,
    /// Called once when the view is destroyed.
    pub destroy: Option<DestroyFn<T>>,
    /// Hover slot, gated by [`CaptureFlags::HOVER`].
    pub hover: Option<HoverFn<T>>,
    /// Movement slot, gated by [`CaptureFlags::MOVEMENT`].
    pub movement: Option<MovementFn<T>>,
    /// Action slot, gated by [`CaptureFlags::ACTION`].
    pub action: Option<ActionFn<T>>,
    /// Scroll slot, gated by [`CaptureFlags::SCROLL`].
    pub scroll: Option<ScrollFn<T>>,
}

impl<T> Default for Behavior<T> {
    fn default() -> Self {
        Self {
            measure: None,
            arrange: None,
            draw: None,
            destroy: None,
            hover: None,
            movement: None,
            action: None,
            scroll: None,
        }
    }
}

impl<T> Clone for Behavior<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Behavior<T> {}

impl<T> fmt::Debug for Behavior<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Behavior")
            .field("measure", &self.measure.is_some())
            .field("arrange", &self.arrange.is_some())
            .field("draw", &self.draw.is_some())
            .field("destroy", &self.destroy.is_some())
            .field("hover", &self.hover.is_some())
            .field("movement", &self.movement.is_some())
            .field("action", &self.action.is_some())
            .field("scroll", &self.scroll.is_some())
            .finish()
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Links {
    pub(crate) parent: Option<ViewId>,
    pub(crate) first_child: Option<ViewId>,
    pub(crate) next_sibling: Option<ViewId>,
    pub(crate) previous_sibling: Option<ViewId>,
}

/// One node of the UI tree.
///
/// Geometry, layout requests, capture flags, and slots are plain fields. Tree
/// links are private and only change through [`ViewTree`] operations.
///
/// ```rust
/// use kurbo::{Insets, Size};
/// use trellis_view_tree::{CaptureFlags, View, ViewTree};
///
/// let mut tree: ViewTree<u32> = ViewTree::new();
/// let mut view = View::new("swatch", 7);
/// view.size_request = Size::new(40.0, 20.0);
/// view.margin = Insets::uniform(4.0);
/// view.capture = CaptureFlags::HOVER;
/// let id = tree.insert(view);
///
/// assert_eq!(tree.view(id).map(|v| v.payload), Some(7));
/// assert_eq!(tree.parent_of(id), None);
/// ```
pub struct View<T> {
    /// Debug name.
    pub name: &'static str,
    /// Resolved rectangle in tree coordinates; written by layout.
    pub frame: Rect,
    /// Desired size, excluding margins.
    pub size_request: Size,
    /// Space kept around the view: `x0` left, `y0` top, `x1` right, `y1` bottom.
    pub margin: Insets,
    /// Absolute position hint for canvas-style containers.
    pub canvas_rect: Rect,
    /// Clip the subtree to `frame` while rendering.
    pub clip_to_bounds: bool,
    /// Horizontal alignment request.
    pub horizontal_alignment: HorizontalAlignment,
    /// Vertical alignment request.
    pub vertical_alignment: VerticalAlignment,
    /// Edge request for dock panels.
    pub dock: DockPosition,
    /// Cell request for grid panels.
    pub grid: GridLocation,
    /// Input kinds this view opts into.
    pub capture: CaptureFlags,
    /// Behavior slots.
    pub behavior: Behavior<T>,
    /// Painted under the view's content when visible.
    pub background: Color,
    /// Widget state.
    pub payload: T,
    pub(crate) links: Links,
}

impl<T> View<T> {
    /// Create a detached view with default geometry, requests, and no slots.
    pub fn new(name: &'static str, payload: T) -> Self {
        Self {
            name,
            frame: Rect::ZERO,
            size_request: Size::ZERO,
            margin: Insets::ZERO,
            canvas_rect: Rect::ZERO,
            clip_to_bounds: false,
            horizontal_alignment: HorizontalAlignment::default(),
            vertical_alignment: VerticalAlignment::default(),
            dock: DockPosition::default(),
            grid: GridLocation::default(),
            capture: CaptureFlags::empty(),
            behavior: Behavior::default(),
            background: Color::TRANSPARENT,
            payload,
            links: Links::default(),
        }
    }

    /// `size_request` grown by the margins on both sides of each axis.
    pub fn margin_request(&self) -> Size {
        Size::new(
            self.size_request.width + self.margin.x_value(),
            self.size_request.height + self.margin.y_value(),
        )
    }

    /// Returns true if the view takes part in hit testing.
    pub fn is_hit_target(&self) -> bool {
        self.capture.intersects(CaptureFlags::POINTER)
    }
}

impl<T: fmt::Debug> fmt::Debug for View<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("name", &self.name)
            .field("frame", &self.frame)
            .field("size_request", &self.size_request)
            .field("margin", &self.margin)
            .field("capture", &self.capture)
            .field("behavior", &self.behavior)
            .field("payload", &self.payload)
            .finish_non_exhaustive()
    }
}
