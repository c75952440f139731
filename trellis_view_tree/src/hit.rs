// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point hit testing.

use kurbo::Point;

use crate::tree::ViewTree;
use crate::types::ViewId;

impl<T> ViewTree<T> {
    /// Find the topmost view under `point` in the subtree rooted at `view`.
    ///
    /// Returns `None` when `point` lies outside `view`'s frame. Otherwise the
    /// children are tested from last to first (reverse paint order) and the first
    /// hit wins. If no child is hit, `view` itself is returned when it captures
    /// hover, movement, or action input; views without such flags are
    /// transparent to the pointer.
    ///
    /// Frames are in tree coordinates, so no transform is applied on the way down.
    pub fn hit_test(&self, view: ViewId, point: Point) -> Option<ViewId> {
        let v = self.view(view)?;
        if !v.frame.contains(point) {
            return None;
        }
        let mut child = self.last_child(view);
        while let Some(c) = child {
            if let Some(hit) = self.hit_test(c, point) {
                return Some(hit);
            }
            child = self.previous_sibling(c);
        }
        v.is_hit_target().then_some(view)
    }
}
