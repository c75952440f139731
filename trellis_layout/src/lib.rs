// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Layout: the measure/arrange protocol and stock panels for Trellis view trees.
//!
//! Layout runs in two passes over a [`ViewTree`](trellis_view_tree::ViewTree):
//!
//! - **Measure** walks children before parents and runs each view's `measure`
//!   slot, which writes the view's `size_request` from its children's requests.
//! - **Arrange** walks parents before children and runs each view's `arrange`
//!   slot, which assigns frames to the view's children from its own frame.
//!
//! [`layout_tree`] runs both passes over a whole tree and sizes the root to the
//! available space. [`layout_subtree`] re-runs them below a view whose frame is
//! already known. [`place_view`] is the shared alignment and margin rule every
//! container uses to turn a slot rectangle into a child frame.
//!
//! ## Panels
//!
//! - [`DockPanel`]: children peel strips off the panel's edges; the last child
//!   fills what is left.
//! - [`StackPanel`]: children laid end to end along an [`Orientation`].
//! - [`ScrollPanel`]: a clipped viewport over one child, with wheel scrolling and
//!   draggable thumbs. Input only updates the offset; the child is re-arranged
//!   lazily the next time the panel is rendered.
//!
//! Panels keep their state in the view payload. Payload types opt in by
//! implementing [`PanelPayload`]; [`Panel`] itself implements it for trees made
//! only of panels.
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use trellis_layout::{DockPanel, Orientation, Panel, StackPanel, layout_tree};
//! use trellis_view_tree::{DockPosition, View, ViewTree};
//!
//! let mut tree: ViewTree<Panel> = ViewTree::new();
//! let root = tree.insert(DockPanel.into_view("root"));
//! let mut sidebar = StackPanel::new(Orientation::Vertical).into_view("sidebar");
//! sidebar.dock = DockPosition::Left;
//! let sidebar = tree.insert(sidebar);
//! let mut logo = View::new("logo", Panel::from(StackPanel::default()));
//! logo.size_request = Size::new(80.0, 40.0);
//! let logo = tree.insert(logo);
//! let body = tree.insert(StackPanel::default().into_view("body"));
//! tree.add_child(root, sidebar);
//! tree.add_child(sidebar, logo);
//! tree.add_child(root, body);
//!
//! layout_tree(&mut tree, root, Size::new(320.0, 240.0));
//! assert_eq!(tree.view(sidebar).map(|v| v.frame), Some(Rect::new(0.0, 0.0, 80.0, 240.0)));
//! assert_eq!(tree.view(body).map(|v| v.frame), Some(Rect::new(80.0, 0.0, 320.0, 240.0)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod dock;
mod engine;
mod panel;
mod scroll;
mod stack;

pub use dock::DockPanel;
pub use engine::{layout_subtree, layout_tree, place_view};
pub use panel::{Orientation, Panel, PanelPayload};
pub use scroll::ScrollPanel;
pub use stack::StackPanel;
