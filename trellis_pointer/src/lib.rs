// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Pointer: routes pointer input to the views of a Trellis view tree.
//!
//! [`PointerState`] is a small caller-owned state machine. Feed it pointer
//! movement, button transitions, and wheel deltas in tree coordinates; it hit
//! tests the tree, tracks which view is *hot* (under the pointer) and which is
//! *active* (holding a press), and calls the views' input slots in a well
//! defined order:
//!
//! - Hover changes deliver `End` to the old view before `Begin` to the new one.
//! - A press is captured by the view it started on, which then sees every move
//!   as a drag until the press ends or is cancelled.
//! - Wheel input goes to the nearest scroll-capturing view at or above the hot view.
//!
//! ## Usage
//!
//! ```
//! use kurbo::{Point, Rect};
//! use trellis_pointer::PointerState;
//! use trellis_view_tree::{CaptureFlags, PointerAction, PointerPhase, View, ViewId, ViewTree};
//!
//! /// Counts completed clicks in the payload.
//! fn count(
//!     tree: &mut ViewTree<u32>,
//!     id: ViewId,
//!     _: PointerAction,
//!     phase: PointerPhase,
//!     _: Point,
//! ) {
//!     if phase == PointerPhase::End
//!         && let Some(clicks) = tree.payload_mut(id)
//!     {
//!         *clicks += 1;
//!     }
//! }
//!
//! let mut tree = ViewTree::new();
//! let mut button = View::new("button", 0_u32);
//! button.frame = Rect::new(0.0, 0.0, 80.0, 24.0);
//! button.capture = CaptureFlags::POINTER;
//! button.behavior.action = Some(count);
//! let button = tree.insert(button);
//!
//! let at = Point::new(10.0, 10.0);
//! let mut pointer = PointerState::new();
//! pointer.on_move(&mut tree, button, at);
//! pointer.on_action(&mut tree, PointerAction::Primary, PointerPhase::Begin, at);
//! pointer.on_action(&mut tree, PointerAction::Primary, PointerPhase::End, at);
//!
//! assert_eq!(tree.payload(button), Some(&1));
//! assert!(pointer.is_idle());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod dispatch;

pub use dispatch::PointerState;
