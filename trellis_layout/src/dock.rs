// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dock panel: children peel strips off the edges, the last child fills the rest.

use kurbo::{Rect, Size};
use trellis_view_tree::{DockPosition, View, ViewId, ViewTree};

use crate::engine::place_view;
use crate::panel::{Panel, PanelPayload};

/// Arranges children against the edges of its frame.
///
/// Each child except the last takes a strip from the edge named by its
/// [`View::dock`] request, sized by its margin-inflated request and clamped to
/// the space left. The last child always receives the whole remaining
/// rectangle, whatever its dock request.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DockPanel;

impl DockPanel {
    /// Create a view running this panel.
    pub fn into_view<T: PanelPayload>(self, name: &'static str) -> View<T> {
        let mut view = View::new(name, T::from_panel(Panel::Dock(self)));
        view.behavior.measure = Some(measure::<T>);
        view.behavior.arrange = Some(arrange::<T>);
        view
    }
}

fn measure<T>(tree: &mut ViewTree<T>, id: ViewId) {
    let mut total = Size::ZERO;
    for child in tree.children(id) {
        let Some(view) = tree.view(child) else {
            continue;
        };
        let request = view.margin_request();
        match view.dock {
            DockPosition::Left | DockPosition::Right => {
                total.width += request.width;
                total.height = total.height.max(request.height);
            }
            DockPosition::Top | DockPosition::Bottom => {
                total.height += request.height;
                total.width = total.width.max(request.width);
            }
        }
    }
    if let Some(view) = tree.view_mut(id) {
        view.size_request = total;
    }
}

fn arrange<T>(tree: &mut ViewTree<T>, id: ViewId) {
    let Some(mut client) = tree.view(id).map(|v| v.frame) else {
        return;
    };
    let mut child = tree.first_child(id);
    while let Some(c) = child {
        let next = tree.next_sibling(c);
        let Some(view) = tree.view_mut(c) else {
            break;
        };
        if next.is_none() {
            view.frame = client;
            break;
        }
        let request = view.margin_request();
        let strip = match view.dock {
            DockPosition::Left => {
                let width = request.width.min(client.width());
                let strip = Rect::new(client.x0, client.y0, client.x0 + width, client.y1);
                client.x0 += width;
                strip
            }
            DockPosition::Right => {
                let width = request.width.min(client.width());
                let strip = Rect::new(client.x1 - width, client.y0, client.x1, client.y1);
                client.x1 -= width;
                strip
            }
            DockPosition::Top => {
                let height = request.height.min(client.height());
                let strip = Rect::new(client.x0, client.y0, client.x1, client.y0 + height);
                client.y0 += height;
                strip
            }
            DockPosition::Bottom => {
                let height = request.height.min(client.height());
                let strip = Rect::new(client.x0, client.y1 - height, client.x1, client.y1);
                client.y1 -= height;
                strip
            }
        };
        place_view(tree, c, strip);
        child = next;
    }
}
