// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis View Tree: the retained view hierarchy of a Trellis UI.
//!
//! Every visible element of an interface is a [`View`] stored in a [`ViewTree`].
//! The tree owns the views, links them into parent/child/sibling chains, and
//! provides the structural edits and walks the rest of the stack is built on:
//!
//! - Structure: [`ViewTree::add_child`], [`ViewTree::remove_child`], [`ViewTree::remove`],
//!   [`ViewTree::insert_before`], [`ViewTree::replace`], [`ViewTree::destroy`].
//! - Traversal: [`ViewTree::next_in_tree`] walks in pre-order (paint order),
//!   [`ViewTree::previous_in_tree`] walks backwards so that every child comes before
//!   its parent (measure order). [`ViewTree::deepest_in_tree`] gives the starting
//!   point for the backward walk.
//! - Hit testing: [`ViewTree::hit_test`] finds the topmost view under a point that
//!   opts into pointer input through its [`CaptureFlags`].
//! - Painting: [`render`] walks a subtree in paint order and hands each view's
//!   background and `draw` slot a [`Painter`].
//!
//! ## Views and behavior
//!
//! A view is a plain record: a frame in tree coordinates, layout requests (size,
//! margins, alignment, dock edge), capture flags, and a [`Behavior`] table of
//! optional function slots. The widget state lives in a typed payload `T` chosen
//! by the application, so a tree of buttons and panels is usually a
//! `ViewTree<MyWidget>` where `MyWidget` is an enum.
//!
//! Slots receive `&mut ViewTree<T>` and the [`ViewId`] they are attached to, which
//! lets a panel's `arrange` slot read its children and write their frames without
//! aliasing.
//!
//! ## Handles
//!
//! [`ViewId`] is generational. Destroying a view makes its id stale; every
//! operation treats stale ids as absent and does nothing, and every query returns
//! `None`.
//!
//! ## Not a layout engine
//!
//! This crate stores frames and layout requests but does not compute them; the
//! measure and arrange passes and the stock panels live in `trellis_layout`, and
//! pointer dispatch lives in `trellis_pointer`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod hit;
mod render;
mod tree;
mod types;
mod view;

pub use render::{Painter, render};
pub use tree::{Ancestors, Children, Descendants, ViewTree};
pub use types::{
    CaptureFlags, Color, DockPosition, GridLocation, HorizontalAlignment, HoverPhase,
    PointerAction, PointerPhase, VerticalAlignment, ViewId,
};
pub use view::{
    ActionFn, ArrangeFn, Behavior, DestroyFn, DrawFn, HoverFn, MeasureFn, MovementFn, ScrollFn,
    View,
};
