// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack panel: children laid end to end along one axis.

use kurbo::{Rect, Size};
use trellis_view_tree::{View, ViewId, ViewTree};

use crate::engine::place_view;
use crate::panel::{Orientation, Panel, PanelPayload, stack_state};

/// Lays children out one after another along [`orientation`](Self::orientation).
///
/// Each child gets the full cross-axis extent of the panel and its
/// margin-inflated request along the main axis, clamped to the space left.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StackPanel {
    /// Main axis.
    pub orientation: Orientation,
}

impl StackPanel {
    /// Stack with the given main axis.
    pub fn new(orientation: Orientation) -> Self {
        Self { orientation }
    }

    /// Create a view running this panel.
    pub fn into_view<T: PanelPayload>(self, name: &'static str) -> View<T> {
        let mut view = View::new(name, T::from_panel(Panel::Stack(self)));
        view.behavior.measure = Some(measure::<T>);
        view.behavior.arrange = Some(arrange::<T>);
        view
    }
}

fn measure<T: PanelPayload>(tree: &mut ViewTree<T>, id: ViewId) {
    let Some(orientation) = stack_state(tree, id).map(|s| s.orientation) else {
        return;
    };
    let mut total = Size::ZERO;
    for request in tree
        .children(id)
        .filter_map(|c| tree.view(c).map(View::margin_request))
    {
        match orientation {
            Orientation::Horizontal => {
                total.width += request.width;
                total.height = total.height.max(request.height);
            }
            Orientation::Vertical => {
                total.width = total.width.max(request.width);
                total.height += request.height;
            }
        }
    }
    if let Some(view) = tree.view_mut(id) {
        view.size_request = total;
    }
}

fn arrange<T: PanelPayload>(tree: &mut ViewTree<T>, id: ViewId) {
    let Some(orientation) = stack_state(tree, id).map(|s| s.orientation) else {
        return;
    };
    let Some(mut client) = tree.view(id).map(|v| v.frame) else {
        return;
    };
    let mut child = tree.first_child(id);
    while let Some(c) = child {
        let Some(request) = tree.view(c).map(View::margin_request) else {
            break;
        };
        let slot = match orientation {
            Orientation::Horizontal => {
                let width = request.width.min(client.width());
                client.x0 += width;
                Rect::new(client.x0 - width, client.y0, client.x0, client.y1)
            }
            Orientation::Vertical => {
                let height = request.height.min(client.height());
                client.y0 += height;
                Rect::new(client.x0, client.y0 - height, client.x1, client.y0)
            }
        };
        place_view(tree, c, slot);
        child = tree.next_sibling(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout_tree;
    use alloc::vec;
    use alloc::vec::Vec;
    use kurbo::Insets;

    fn sized(tree: &mut ViewTree<Panel>, width: f64, height: f64) -> ViewId {
        let mut view = View::new("item", Panel::Stack(StackPanel::default()));
        view.size_request = Size::new(width, height);
        tree.insert(view)
    }

    #[test]
    fn horizontal_items_sit_end_to_end() {
        let mut tree: ViewTree<Panel> = ViewTree::new();
        let stack = tree.insert(StackPanel::default().into_view("stack"));
        let items = [50.0, 75.0, 25.0].map(|w| sized(&mut tree, w, 10.0));
        for item in items {
            tree.add_child(stack, item);
        }

        layout_tree(&mut tree, stack, Size::new(200.0, 40.0));
        let frames: Vec<Rect> = items.iter().map(|&i| tree.view(i).unwrap().frame).collect();
        assert_eq!(
            frames,
            vec![
                Rect::new(0.0, 0.0, 50.0, 40.0),
                Rect::new(50.0, 0.0, 125.0, 40.0),
                Rect::new(125.0, 0.0, 150.0, 40.0),
            ]
        );
    }

    #[test]
    fn vertical_measure_sums_heights_and_takes_widest() {
        let mut tree: ViewTree<Panel> = ViewTree::new();
        let stack = tree.insert(StackPanel::new(Orientation::Vertical).into_view("stack"));
        let a = sized(&mut tree, 30.0, 10.0);
        let b = sized(&mut tree, 60.0, 20.0);
        tree.add_child(stack, a);
        tree.add_child(stack, b);
        tree.view_mut(a).unwrap().margin = Insets::new(0.0, 2.0, 0.0, 3.0);

        layout_tree(&mut tree, stack, Size::ZERO);
        assert_eq!(tree.view(stack).unwrap().size_request, Size::new(60.0, 35.0));
        assert_eq!(tree.view(a).unwrap().frame, Rect::new(0.0, 2.0, 60.0, 12.0));
        assert_eq!(tree.view(b).unwrap().frame, Rect::new(0.0, 15.0, 60.0, 35.0));
    }

    #[test]
    fn overflowing_items_are_clamped() {
        let mut tree: ViewTree<Panel> = ViewTree::new();
        let stack = tree.insert(StackPanel::default().into_view("stack"));
        let a = sized(&mut tree, 80.0, 10.0);
        let b = sized(&mut tree, 80.0, 10.0);
        tree.add_child(stack, a);
        tree.add_child(stack, b);
        tree.view_mut(stack).unwrap().frame = Rect::new(0.0, 0.0, 100.0, 10.0);
        crate::layout_subtree(&mut tree, stack);

        assert_eq!(tree.view(a).unwrap().frame, Rect::new(0.0, 0.0, 80.0, 10.0));
        assert_eq!(tree.view(b).unwrap().frame, Rect::new(80.0, 0.0, 100.0, 10.0));
    }
}
