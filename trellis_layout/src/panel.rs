// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panel state carried in view payloads.

use trellis_view_tree::{ViewId, ViewTree};

use crate::dock::DockPanel;
use crate::scroll::ScrollPanel;
use crate::stack::StackPanel;

/// Main axis of a stack panel, also used to name scroll axes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

/// State of one of the stock panels.
#[derive(Clone, Debug, PartialEq)]
pub enum Panel {
    /// See [`DockPanel`].
    Dock(DockPanel),
    /// See [`StackPanel`].
    Stack(StackPanel),
    /// See [`ScrollPanel`].
    Scroll(ScrollPanel),
}

impl From<DockPanel> for Panel {
    fn from(panel: DockPanel) -> Self {
        Self::Dock(panel)
    }
}

impl From<StackPanel> for Panel {
    fn from(panel: StackPanel) -> Self {
        Self::Stack(panel)
    }
}

impl From<ScrollPanel> for Panel {
    fn from(panel: ScrollPanel) -> Self {
        Self::Scroll(panel)
    }
}

/// Payloads that can hold panel state.
///
/// Panel slots are generic over the tree's payload type and find their state
/// through this trait. Applications usually implement it on their widget enum
/// with one variant wrapping a [`Panel`]:
///
/// ```rust
/// use trellis_layout::{Panel, PanelPayload};
///
/// enum Widget {
///     Label(&'static str),
///     Panel(Panel),
/// }
///
/// impl PanelPayload for Widget {
///     fn from_panel(panel: Panel) -> Self {
///         Self::Panel(panel)
///     }
///     fn panel(&self) -> Option<&Panel> {
///         match self {
///             Self::Panel(p) => Some(p),
///             _ => None,
///         }
///     }
///     fn panel_mut(&mut self) -> Option<&mut Panel> {
///         match self {
///             Self::Panel(p) => Some(p),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait PanelPayload {
    /// Wrap panel state into a payload.
    fn from_panel(panel: Panel) -> Self;
    /// Panel state held by this payload, if any.
    fn panel(&self) -> Option<&Panel>;
    /// Mutable panel state held by this payload, if any.
    fn panel_mut(&mut self) -> Option<&mut Panel>;
}

impl PanelPayload for Panel {
    fn from_panel(panel: Panel) -> Self {
        panel
    }

    fn panel(&self) -> Option<&Panel> {
        Some(self)
    }

    fn panel_mut(&mut self) -> Option<&mut Panel> {
        Some(self)
    }
}

pub(crate) fn stack_state<T: PanelPayload>(tree: &ViewTree<T>, id: ViewId) -> Option<&StackPanel> {
    match tree.payload(id)?.panel()? {
        Panel::Stack(s) => Some(s),
        _ => None,
    }
}

pub(crate) fn scroll_state<T: PanelPayload>(
    tree: &ViewTree<T>,
    id: ViewId,
) -> Option<&ScrollPanel> {
    match tree.payload(id)?.panel()? {
        Panel::Scroll(s) => Some(s),
        _ => None,
    }
}

pub(crate) fn scroll_state_mut<T: PanelPayload>(
    tree: &mut ViewTree<T>,
    id: ViewId,
) -> Option<&mut ScrollPanel> {
    match tree.payload_mut(id)?.panel_mut()? {
        Panel::Scroll(s) => Some(s),
        _ => None,
    }
}
