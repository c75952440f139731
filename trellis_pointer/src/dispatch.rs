// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hot/active pointer state machine.

use kurbo::Point;
use trellis_view_tree::{CaptureFlags, HoverPhase, PointerAction, PointerPhase, ViewId, ViewTree};

/// Pointer state persisted between input events.
///
/// - `hot` is the view under the pointer, independent of any press.
/// - `active` is the view that captured the press in progress, together with the
///   action that started it. While a view is active it keeps receiving
///   [`PointerPhase::Drag`] on every move, wherever the pointer is.
///
/// At most one view is active at a time. Every callback is gated by the
/// receiving view's [`CaptureFlags`]: a hot view without
/// [`HOVER`](CaptureFlags::HOVER) gets no hover notifications, and so on.
///
/// Views destroyed between events are forgotten before the next event is
/// processed and never receive anything.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PointerState {
    hot: Option<ViewId>,
    active: Option<ViewId>,
    active_action: PointerAction,
}

impl PointerState {
    /// Create an idle state with nothing hot.
    pub fn new() -> Self {
        Self::default()
    }

    /// View currently under the pointer.
    pub fn hot(&self) -> Option<ViewId> {
        self.hot
    }

    /// View holding the press in progress.
    pub fn active(&self) -> Option<ViewId> {
        self.active
    }

    /// Action of the press in progress; [`PointerAction::Primary`] when idle.
    pub fn active_action(&self) -> PointerAction {
        self.active_action
    }

    /// Returns true if no press is in progress.
    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    /// Process pointer movement to `point`, hit testing from `root`.
    ///
    /// If the view under the pointer changed, the old hot view receives
    /// [`HoverPhase::End`] before the new one receives [`HoverPhase::Begin`].
    /// Otherwise the hot view receives the movement. Then the active view, if
    /// any, receives [`PointerPhase::Drag`] with the active action.
    pub fn on_move<T>(&mut self, tree: &mut ViewTree<T>, root: ViewId, point: Point) {
        self.forget_stale(tree);
        let hit = tree.hit_test(root, point);
        if hit != self.hot {
            log::trace!("hot: {:?} -> {:?}", self.hot, hit);
            if let Some(old) = self.hot {
                send_hover(tree, old, HoverPhase::End);
            }
            if let Some(new) = hit {
                send_hover(tree, new, HoverPhase::Begin);
            }
            self.hot = hit;
        } else if let Some(hot) = self.hot {
            send_movement(tree, hot, point);
        }
        if let Some(active) = self.active {
            send_action(tree, active, self.active_action, PointerPhase::Drag, point);
        }
    }

    /// Process a button transition at `point`.
    ///
    /// - `Begin`: an active view other than the hot one first receives `End`.
    ///   The hot view then becomes active with `action` and receives `Begin`.
    ///   With nothing hot, the state becomes idle.
    /// - `End`/`Cancel`: the active view receives the phase with the action that
    ///   started the press, and the state becomes idle.
    /// - `Double` and `Drag` are ignored; drags are derived from movement.
    pub fn on_action<T>(
        &mut self,
        tree: &mut ViewTree<T>,
        action: PointerAction,
        phase: PointerPhase,
        point: Point,
    ) {
        self.forget_stale(tree);
        match phase {
            PointerPhase::Begin => {
                if let Some(active) = self.active
                    && self.hot != Some(active)
                {
                    log::trace!("capture released from {active:?} by a new press");
                    send_action(tree, active, self.active_action, PointerPhase::End, point);
                }
                self.active = self.hot;
                match self.hot {
                    Some(hot) => {
                        log::trace!("capture: {hot:?} with {action:?}");
                        self.active_action = action;
                        send_action(tree, hot, action, PointerPhase::Begin, point);
                    }
                    None => self.active_action = PointerAction::Primary,
                }
            }
            PointerPhase::End | PointerPhase::Cancel => {
                if let Some(active) = self.active.take() {
                    log::trace!("capture released from {active:?} ({phase:?})");
                    send_action(tree, active, self.active_action, phase, point);
                }
                self.active_action = PointerAction::Primary;
            }
            PointerPhase::Double | PointerPhase::Drag => {}
        }
    }

    /// Route a scroll wheel `delta` to the nearest view at or above the hot
    /// view that captures [`CaptureFlags::SCROLL`].
    pub fn on_scroll<T>(&mut self, tree: &mut ViewTree<T>, delta: f64) {
        self.forget_stale(tree);
        let Some(hot) = self.hot else {
            return;
        };
        let target = tree.ancestors(hot).find(|&v| {
            tree.view(v)
                .is_some_and(|view| view.capture.contains(CaptureFlags::SCROLL))
        });
        if let Some(target) = target
            && let Some(scroll) = tree.view(target).and_then(|v| v.behavior.scroll)
        {
            scroll(tree, target, delta);
        }
    }

    /// The pointer left the surface: cancel any press, then end hover.
    pub fn on_leave<T>(&mut self, tree: &mut ViewTree<T>, point: Point) {
        let action = self.active_action;
        self.on_action(tree, action, PointerPhase::Cancel, point);
        if let Some(hot) = self.hot.take() {
            log::trace!("hot: {hot:?} -> None (left surface)");
            send_hover(tree, hot, HoverPhase::End);
        }
    }

    fn forget_stale<T>(&mut self, tree: &ViewTree<T>) {
        if self.hot.is_some_and(|v| !tree.is_alive(v)) {
            self.hot = None;
        }
        if self.active.is_some_and(|v| !tree.is_alive(v)) {
            self.active = None;
            self.active_action = PointerAction::Primary;
        }
    }
}

fn send_hover<T>(tree: &mut ViewTree<T>, id: ViewId, phase: HoverPhase) {
    let Some(view) = tree.view(id) else {
        return;
    };
    if view.capture.contains(CaptureFlags::HOVER)
        && let Some(hover) = view.behavior.hover
    {
        hover(tree, id, phase);
    }
}

fn send_movement<T>(tree: &mut ViewTree<T>, id: ViewId, point: Point) {
    let Some(view) = tree.view(id) else {
        return;
    };
    if view.capture.contains(CaptureFlags::MOVEMENT)
        && let Some(movement) = view.behavior.movement
    {
        movement(tree, id, point);
    }
}

fn send_action<T>(
    tree: &mut ViewTree<T>,
    id: ViewId,
    action: PointerAction,
    phase: PointerPhase,
    point: Point,
) {
    let Some(view) = tree.view(id) else {
        return;
    };
    if view.capture.contains(CaptureFlags::ACTION)
        && let Some(slot) = view.behavior.action
    {
        slot(tree, id, action, phase, point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use kurbo::Rect;
    use trellis_view_tree::View;

    #[derive(Clone, Debug, PartialEq)]
    enum Event {
        Hover(&'static str, HoverPhase),
        Move(&'static str, Point),
        Action(&'static str, PointerAction, PointerPhase),
        Scroll(&'static str, f64),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    fn push(tree: &ViewTree<Log>, id: ViewId, event: impl FnOnce(&'static str) -> Event) {
        let view = tree.view(id).unwrap();
        view.payload.borrow_mut().push(event(view.name));
    }

    fn on_hover(tree: &mut ViewTree<Log>, id: ViewId, phase: HoverPhase) {
        push(tree, id, |n| Event::Hover(n, phase));
    }

    fn on_movement(tree: &mut ViewTree<Log>, id: ViewId, point: Point) {
        push(tree, id, |n| Event::Move(n, point));
    }

    fn on_action(
        tree: &mut ViewTree<Log>,
        id: ViewId,
        action: PointerAction,
        phase: PointerPhase,
        _: Point,
    ) {
        push(tree, id, |n| Event::Action(n, action, phase));
    }

    fn on_scroll(tree: &mut ViewTree<Log>, id: ViewId, delta: f64) {
        push(tree, id, |n| Event::Scroll(n, delta));
    }

    struct Scene {
        tree: ViewTree<Log>,
        log: Log,
        root: ViewId,
        a: ViewId,
        b: ViewId,
    }

    impl Scene {
        fn take(&self) -> Vec<Event> {
            core::mem::take(&mut *self.log.borrow_mut())
        }
    }

    fn widget(
        tree: &mut ViewTree<Log>,
        log: &Log,
        name: &'static str,
        [x0, y0, x1, y1]: [f64; 4],
        capture: CaptureFlags,
    ) -> ViewId {
        let mut view = View::new(name, log.clone());
        view.frame = Rect::new(x0, y0, x1, y1);
        view.capture = capture;
        view.behavior.hover = Some(on_hover);
        view.behavior.movement = Some(on_movement);
        view.behavior.action = Some(on_action);
        view.behavior.scroll = Some(on_scroll);
        tree.insert(view)
    }

    /// `root` (100x100, scroll only) holding `a` (left half) and `b` (right half).
    fn scene() -> Scene {
        let log = Log::default();
        let mut tree = ViewTree::new();
        let root = widget(&mut tree, &log, "root", [0.0, 0.0, 100.0, 100.0], CaptureFlags::SCROLL);
        let a = widget(&mut tree, &log, "a", [0.0, 0.0, 50.0, 100.0], CaptureFlags::POINTER);
        let b = widget(&mut tree, &log, "b", [50.0, 0.0, 100.0, 100.0], CaptureFlags::POINTER);
        tree.add_child(root, a);
        tree.add_child(root, b);
        Scene { tree, log, root, a, b }
    }

    const IN_A: Point = Point::new(10.0, 10.0);
    const IN_B: Point = Point::new(60.0, 10.0);
    const OUTSIDE: Point = Point::new(150.0, 150.0);

    #[test]
    fn hover_end_precedes_begin() {
        let mut s = scene();
        let mut state = PointerState::new();

        state.on_move(&mut s.tree, s.root, IN_A);
        assert_eq!(s.take(), vec![Event::Hover("a", HoverPhase::Begin)]);
        assert_eq!(state.hot(), Some(s.a));

        state.on_move(&mut s.tree, s.root, Point::new(20.0, 10.0));
        assert_eq!(s.take(), vec![Event::Move("a", Point::new(20.0, 10.0))]);

        state.on_move(&mut s.tree, s.root, IN_B);
        assert_eq!(
            s.take(),
            vec![Event::Hover("a", HoverPhase::End), Event::Hover("b", HoverPhase::Begin)]
        );

        state.on_move(&mut s.tree, s.root, OUTSIDE);
        assert_eq!(s.take(), vec![Event::Hover("b", HoverPhase::End)]);
        assert_eq!(state.hot(), None);

        state.on_move(&mut s.tree, s.root, OUTSIDE);
        assert!(s.take().is_empty());
    }

    #[test]
    fn press_follows_pointer_until_release() {
        let mut s = scene();
        let mut state = PointerState::new();
        state.on_move(&mut s.tree, s.root, IN_A);
        s.take();

        state.on_action(&mut s.tree, PointerAction::Secondary, PointerPhase::Begin, IN_A);
        assert_eq!(
            s.take(),
            vec![Event::Action("a", PointerAction::Secondary, PointerPhase::Begin)]
        );
        assert_eq!(state.active(), Some(s.a));

        state.on_move(&mut s.tree, s.root, IN_B);
        assert_eq!(
            s.take(),
            vec![
                Event::Hover("a", HoverPhase::End),
                Event::Hover("b", HoverPhase::Begin),
                Event::Action("a", PointerAction::Secondary, PointerPhase::Drag),
            ]
        );

        state.on_action(&mut s.tree, PointerAction::Secondary, PointerPhase::End, IN_B);
        assert_eq!(
            s.take(),
            vec![Event::Action("a", PointerAction::Secondary, PointerPhase::End)]
        );
        assert!(state.is_idle());
        assert_eq!(state.active_action(), PointerAction::Primary);
    }

    #[test]
    fn new_press_elsewhere_ends_previous_capture_first() {
        let mut s = scene();
        let mut state = PointerState::new();
        state.on_move(&mut s.tree, s.root, IN_A);
        state.on_action(&mut s.tree, PointerAction::Tertiary, PointerPhase::Begin, IN_A);
        state.on_move(&mut s.tree, s.root, IN_B);
        s.take();

        state.on_action(&mut s.tree, PointerAction::Primary, PointerPhase::Begin, IN_B);
        assert_eq!(
            s.take(),
            vec![
                Event::Action("a", PointerAction::Tertiary, PointerPhase::End),
                Event::Action("b", PointerAction::Primary, PointerPhase::Begin),
            ]
        );
        assert_eq!(state.active(), Some(s.b));
    }

    #[test]
    fn cancel_delivers_cancel_and_resets() {
        let mut s = scene();
        let mut state = PointerState::new();
        state.on_move(&mut s.tree, s.root, IN_A);
        state.on_action(&mut s.tree, PointerAction::Extended1, PointerPhase::Begin, IN_A);
        s.take();

        state.on_action(&mut s.tree, PointerAction::Primary, PointerPhase::Cancel, IN_A);
        assert_eq!(
            s.take(),
            vec![Event::Action("a", PointerAction::Extended1, PointerPhase::Cancel)]
        );
        assert!(state.is_idle());
        assert_eq!(state.active_action(), PointerAction::Primary);

        // Nothing to release.
        state.on_action(&mut s.tree, PointerAction::Primary, PointerPhase::End, IN_A);
        assert!(s.take().is_empty());
    }

    #[test]
    fn press_on_empty_space_is_idle() {
        let mut s = scene();
        let mut state = PointerState::new();
        state.on_move(&mut s.tree, s.root, OUTSIDE);
        state.on_action(&mut s.tree, PointerAction::Secondary, PointerPhase::Begin, OUTSIDE);
        assert!(state.is_idle());
        assert_eq!(state.active_action(), PointerAction::Primary);
        assert!(s.take().is_empty());
    }

    #[test]
    fn reserved_phases_are_ignored() {
        let mut s = scene();
        let mut state = PointerState::new();
        state.on_move(&mut s.tree, s.root, IN_A);
        s.take();
        state.on_action(&mut s.tree, PointerAction::Primary, PointerPhase::Double, IN_A);
        state.on_action(&mut s.tree, PointerAction::Primary, PointerPhase::Drag, IN_A);
        assert!(s.take().is_empty());
        assert!(state.is_idle());
    }

    #[test]
    fn callbacks_are_gated_by_capture_flags() {
        let mut s = scene();
        s.tree.view_mut(s.a).unwrap().capture = CaptureFlags::HOVER;
        let mut state = PointerState::new();

        state.on_move(&mut s.tree, s.root, IN_A);
        state.on_move(&mut s.tree, s.root, Point::new(20.0, 20.0));
        state.on_action(&mut s.tree, PointerAction::Primary, PointerPhase::Begin, IN_A);
        state.on_move(&mut s.tree, s.root, Point::new(30.0, 20.0));
        assert_eq!(s.take(), vec![Event::Hover("a", HoverPhase::Begin)]);
        // Still captures the press even though it does not hear about it.
        assert_eq!(state.active(), Some(s.a));
    }

    #[test]
    fn scroll_bubbles_to_nearest_scroll_capturing_ancestor() {
        let mut s = scene();
        let mut state = PointerState::new();

        state.on_scroll(&mut s.tree, 1.0);
        assert!(s.take().is_empty(), "nothing hot, nothing scrolls");

        state.on_move(&mut s.tree, s.root, IN_A);
        s.take();
        state.on_scroll(&mut s.tree, -2.0);
        assert_eq!(s.take(), vec![Event::Scroll("root", -2.0)]);

        s.tree.view_mut(s.a).unwrap().capture |= CaptureFlags::SCROLL;
        state.on_scroll(&mut s.tree, 3.0);
        assert_eq!(s.take(), vec![Event::Scroll("a", 3.0)]);
    }

    #[test]
    fn destroyed_views_are_forgotten() {
        let mut s = scene();
        let mut state = PointerState::new();
        state.on_move(&mut s.tree, s.root, IN_A);
        state.on_action(&mut s.tree, PointerAction::Primary, PointerPhase::Begin, IN_A);
        s.take();

        s.tree.destroy(s.a);
        state.on_move(&mut s.tree, s.root, IN_B);
        assert_eq!(s.take(), vec![Event::Hover("b", HoverPhase::Begin)]);
        assert_eq!(state.hot(), Some(s.b));
        assert!(state.is_idle());
    }

    #[test]
    fn leaving_cancels_then_ends_hover() {
        let mut s = scene();
        let mut state = PointerState::new();
        state.on_move(&mut s.tree, s.root, IN_B);
        state.on_action(&mut s.tree, PointerAction::Primary, PointerPhase::Begin, IN_B);
        s.take();

        state.on_leave(&mut s.tree, OUTSIDE);
        assert_eq!(
            s.take(),
            vec![
                Event::Action("b", PointerAction::Primary, PointerPhase::Cancel),
                Event::Hover("b", HoverPhase::End),
            ]
        );
        assert_eq!(state, PointerState::new());
    }
}
