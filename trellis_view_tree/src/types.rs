// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the view tree: identifiers, capture flags, layout requests, and input phases.

/// Identifier for a view in a [`ViewTree`](crate::ViewTree) (generational).
///
/// A `ViewId` stays valid until its view is destroyed. After that it is *stale*:
/// the slot may be reused by a new view, but with a higher generation, so stale
/// identifiers are never confused with live ones.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ViewId(pub(crate) u32, pub(crate) u32);

impl ViewId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Pointer capture opt-ins.
    ///
    /// A view only receives input callbacks of the kinds it captures. Hit testing
    /// treats a view without any of [`HOVER`](Self::HOVER), [`MOVEMENT`](Self::MOVEMENT)
    /// or [`ACTION`](Self::ACTION) as transparent.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct CaptureFlags: u8 {
        /// Receives hover begin/end notifications.
        const HOVER    = 0b0000_0001;
        /// Receives movement notifications while hot.
        const MOVEMENT = 0b0000_0010;
        /// Receives press/release/drag notifications.
        const ACTION   = 0b0000_0100;
        /// Receives scroll wheel deltas.
        const SCROLL   = 0b0000_1000;
    }
}

impl CaptureFlags {
    /// Flags that make a view a hit-test target.
    pub const POINTER: Self = Self::HOVER.union(Self::MOVEMENT).union(Self::ACTION);
}

/// Horizontal placement request made to the parent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    /// Fill the available width minus margins.
    #[default]
    Stretch,
    /// Anchor to the left edge.
    Left,
    /// Center in the available width.
    Center,
    /// Anchor to the right edge.
    Right,
}

/// Vertical placement request made to the parent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    /// Fill the available height minus margins.
    #[default]
    Fill,
    /// Anchor to the top edge.
    Top,
    /// Center in the available height.
    Middle,
    /// Anchor to the bottom edge.
    Bottom,
}

/// Edge a child of a dock panel attaches to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DockPosition {
    /// Strip along the top edge.
    #[default]
    Top,
    /// Strip along the bottom edge.
    Bottom,
    /// Strip along the left edge.
    Left,
    /// Strip along the right edge.
    Right,
}

/// Cell request for grid-style containers.
///
/// Carried on every view but not consumed by the panels in this workspace.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridLocation {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub column: usize,
    /// Number of rows spanned.
    pub row_span: usize,
    /// Number of columns spanned.
    pub column_span: usize,
}

impl Default for GridLocation {
    fn default() -> Self {
        Self {
            row: 0,
            column: 0,
            row_span: 1,
            column_span: 1,
        }
    }
}

/// Straight RGBA color with components in `0.0..=1.0`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Color {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque dark gray.
    pub const DARK_GRAY: Self = Self::rgb(0.25, 0.25, 0.25);

    /// Alpha at or below which a background is not painted.
    pub const VISIBLE_ALPHA: f32 = 0.001;

    /// Create an opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color with alpha.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns true if painting this color has a visible effect.
    pub fn is_visible(self) -> bool {
        self.a > Self::VISIBLE_ALPHA
    }

    /// Move each channel `amount` of the way towards white.
    pub fn lighten(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        Self {
            r: self.r + (1.0 - self.r) * amount,
            g: self.g + (1.0 - self.g) * amount,
            b: self.b + (1.0 - self.b) * amount,
            a: self.a,
        }
    }
}

/// Hover transition delivered to a view's hover slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HoverPhase {
    /// The pointer entered the view.
    Begin,
    /// The pointer left the view.
    End,
}

/// Phase of a pointer action delivered to a view's action slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Button pressed.
    Begin,
    /// Button released normally.
    End,
    /// Double press. Reserved; not generated by the dispatcher.
    Double,
    /// Pointer moved while the button is held.
    Drag,
    /// Press interrupted (for example the pointer left the surface).
    Cancel,
}

/// Logical pointer button.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerAction {
    /// Usually the left button.
    #[default]
    Primary,
    /// Usually the right button.
    Secondary,
    /// Usually the middle button.
    Tertiary,
    /// First extra button.
    Extended1,
    /// Second extra button.
    Extended2,
}
