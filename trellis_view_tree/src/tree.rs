// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: storage, structural edits, traversal.

use alloc::vec::Vec;
use core::fmt;

use smallvec::SmallVec;

use crate::types::ViewId;
use crate::view::{Links, View};

/// Arena of views linked into one or more trees.
///
/// Every view lives in a slot of the arena and is addressed by a generational
/// [`ViewId`]. Children form a doubly linked chain: `first_child` and
/// `next_sibling` walk forwards, `previous_sibling` walks backwards in O(1).
///
/// All operations are safe no-ops on stale identifiers, so callers can keep
/// handles across frames and mutations without validating them first.
///
/// ## Example
///
/// ```rust
/// use trellis_view_tree::{View, ViewTree};
///
/// let mut tree = ViewTree::new();
/// let root = tree.insert(View::new("root", ()));
/// let a = tree.insert(View::new("a", ()));
/// let b = tree.insert(View::new("b", ()));
/// tree.add_child(root, a);
/// tree.insert_before(root, b, Some(a));
///
/// // Pre-order walk: root, b, a.
/// let order: Vec<_> = tree.descendants(root).collect();
/// assert_eq!(order, vec![root, b, a]);
/// assert_eq!(tree.previous_in_tree(a), Some(b));
/// ```
pub struct ViewTree<T> {
    /// slots
    nodes: Vec<Option<View<T>>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl<T> fmt::Debug for ViewTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("ViewTree")
            .field("views_total", &total)
            .field("views_alive", &alive)
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl<T> Default for ViewTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ViewTree<T> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Store `view` as a detached root and return its identifier.
    ///
    /// Any links the value carried are discarded.
    pub fn insert(&mut self, mut view: View<T>) -> ViewId {
        view.links = Links::default();
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(view);
            (idx, generation)
        } else {
            self.nodes.push(Some(view));
            self.generations.push(1);
            (self.nodes.len() - 1, 1)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "ViewId uses 32-bit indices by design."
        )]
        ViewId::new(idx as u32, generation)
    }

    /// Destroy a view and its whole subtree.
    ///
    /// The view is detached from its parent, then every `destroy` slot in the
    /// subtree runs (children before parents), then the slots are released and
    /// all identifiers in the subtree become stale.
    pub fn destroy(&mut self, id: ViewId) {
        if !self.is_alive(id) {
            return;
        }
        self.remove(id);
        let doomed: SmallVec<[ViewId; 16]> = self.descendants(id).collect();
        for &v in doomed.iter().rev() {
            if let Some(destroy) = self.view(v).and_then(|view| view.behavior.destroy) {
                destroy(self, v);
            }
        }
        for &v in doomed.iter().rev() {
            if !self.is_alive(v) {
                continue;
            }
            self.remove(v);
            if let Some(view) = self.nodes[v.idx()].take() {
                log::trace!("destroyed view {v:?} ({})", view.name);
            }
            self.free_list.push(v.idx());
        }
    }

    /// Returns true if `id` refers to a live view.
    pub fn is_alive(&self, id: ViewId) -> bool {
        self.nodes.get(id.idx()).is_some_and(|n| n.is_some())
            && self.generations.get(id.idx()) == Some(&id.1)
    }

    /// Number of live views.
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    /// Returns true if the tree holds no live views.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shared access to a live view.
    pub fn view(&self, id: ViewId) -> Option<&View<T>> {
        if !self.is_alive(id) {
            return None;
        }
        self.nodes[id.idx()].as_ref()
    }

    /// Mutable access to a live view.
    ///
    /// Tree links are not reachable through this; use the structural operations.
    pub fn view_mut(&mut self, id: ViewId) -> Option<&mut View<T>> {
        if !self.is_alive(id) {
            return None;
        }
        self.nodes[id.idx()].as_mut()
    }

    /// Shared access to a live view's payload.
    pub fn payload(&self, id: ViewId) -> Option<&T> {
        self.view(id).map(|v| &v.payload)
    }

    /// Mutable access to a live view's payload.
    pub fn payload_mut(&mut self, id: ViewId) -> Option<&mut T> {
        self.view_mut(id).map(|v| &mut v.payload)
    }

    // --- structure ---

    /// Append `child` as the last child of `parent`.
    ///
    /// A child still attached elsewhere is detached first. Linking a view under
    /// itself or under one of its descendants is ignored.
    pub fn add_child(&mut self, parent: ViewId, child: ViewId) {
        if !self.is_alive(parent) || !self.is_alive(child) {
            return;
        }
        if self.is_in_subtree(parent, child) {
            log::debug!("add_child: {child:?} is {parent:?} or one of its ancestors");
            return;
        }
        self.remove(child);
        let last = self.last_child(parent);
        *self.links_mut(child) = Links {
            parent: Some(parent),
            first_child: self.links(child).first_child,
            next_sibling: None,
            previous_sibling: last,
        };
        match last {
            Some(last) => self.links_mut(last).next_sibling = Some(child),
            None => self.links_mut(parent).first_child = Some(child),
        }
    }

    /// Splice `child` out of `parent`'s child chain and isolate it.
    ///
    /// Ignored if `child` is not currently a child of `parent`.
    pub fn remove_child(&mut self, parent: ViewId, child: ViewId) {
        if !self.is_alive(parent) || !self.is_alive(child) {
            return;
        }
        let links = self.links(child);
        if links.parent != Some(parent) {
            return;
        }
        match links.previous_sibling {
            Some(prev) => self.links_mut(prev).next_sibling = links.next_sibling,
            None => self.links_mut(parent).first_child = links.next_sibling,
        }
        if let Some(next) = links.next_sibling {
            self.links_mut(next).previous_sibling = links.previous_sibling;
        }
        let l = self.links_mut(child);
        l.parent = None;
        l.next_sibling = None;
        l.previous_sibling = None;
    }

    /// Detach `view` from its parent. Roots are left untouched.
    pub fn remove(&mut self, view: ViewId) {
        if let Some(parent) = self.parent_of(view) {
            self.remove_child(parent, view);
        }
    }

    /// Insert `child` immediately before `before` in `parent`'s children.
    ///
    /// Falls back to [`add_child`](Self::add_child) when `before` is `None`,
    /// stale, or not a child of `parent`.
    pub fn insert_before(&mut self, parent: ViewId, child: ViewId, before: Option<ViewId>) {
        if !self.is_alive(parent) || !self.is_alive(child) || before == Some(child) {
            return;
        }
        let Some(before) = before.filter(|&b| self.parent_of(b) == Some(parent)) else {
            self.add_child(parent, child);
            return;
        };
        if self.is_in_subtree(parent, child) {
            log::debug!("insert_before: {child:?} is {parent:?} or one of its ancestors");
            return;
        }
        self.remove(child);
        let prev = self.links(before).previous_sibling;
        *self.links_mut(child) = Links {
            parent: Some(parent),
            first_child: self.links(child).first_child,
            next_sibling: Some(before),
            previous_sibling: prev,
        };
        self.links_mut(before).previous_sibling = Some(child);
        match prev {
            Some(prev) => self.links_mut(prev).next_sibling = Some(child),
            None => self.links_mut(parent).first_child = Some(child),
        }
    }

    /// Put `new` in `old`'s position (same parent and neighbors) and isolate `old`.
    ///
    /// Ignored if `old` is a root, `new` is stale, or `new` is an ancestor of `old`.
    pub fn replace(&mut self, old: ViewId, new: ViewId) {
        if old == new || !self.is_alive(new) {
            return;
        }
        let Some(parent) = self.parent_of(old) else {
            return;
        };
        if self.is_in_subtree(parent, new) {
            log::debug!("replace: {new:?} is an ancestor of {old:?}");
            return;
        }
        // Detaching `new` may rewire `old`'s neighbors when they are siblings.
        self.remove(new);
        let old_links = self.links(old);
        *self.links_mut(new) = Links {
            parent: Some(parent),
            first_child: self.links(new).first_child,
            next_sibling: old_links.next_sibling,
            previous_sibling: old_links.previous_sibling,
        };
        if let Some(next) = old_links.next_sibling {
            self.links_mut(next).previous_sibling = Some(new);
        }
        match old_links.previous_sibling {
            Some(prev) => self.links_mut(prev).next_sibling = Some(new),
            None => self.links_mut(parent).first_child = Some(new),
        }
        let l = self.links_mut(old);
        l.parent = None;
        l.next_sibling = None;
        l.previous_sibling = None;
    }

    // --- traversal ---

    /// Parent of a live view, or `None` for roots and stale ids.
    pub fn parent_of(&self, view: ViewId) -> Option<ViewId> {
        self.view(view)?.links.parent
    }

    /// First child of a live view.
    pub fn first_child(&self, view: ViewId) -> Option<ViewId> {
        self.view(view)?.links.first_child
    }

    /// Last child of a live view. Walks the sibling chain.
    pub fn last_child(&self, view: ViewId) -> Option<ViewId> {
        let mut last = self.first_child(view)?;
        while let Some(next) = self.next_sibling(last) {
            last = next;
        }
        Some(last)
    }

    /// Following sibling of a live view.
    pub fn next_sibling(&self, view: ViewId) -> Option<ViewId> {
        self.view(view)?.links.next_sibling
    }

    /// Preceding sibling of a live view.
    pub fn previous_sibling(&self, view: ViewId) -> Option<ViewId> {
        self.view(view)?.links.previous_sibling
    }

    /// Pre-order successor: the first child if any, otherwise the next sibling
    /// of the closest ancestor-or-self that has one.
    ///
    /// Returns `None` at the end of the tree. The walk is not bounded to a
    /// subtree; see [`next_in_subtree`](Self::next_in_subtree).
    pub fn next_in_tree(&self, view: ViewId) -> Option<ViewId> {
        if let Some(child) = self.first_child(view) {
            return Some(child);
        }
        let mut node = view;
        loop {
            if let Some(next) = self.next_sibling(node) {
                return Some(next);
            }
            node = self.parent_of(node)?;
        }
    }

    /// Pre-order successor restricted to the subtree rooted at `root`.
    pub fn next_in_subtree(&self, view: ViewId, root: ViewId) -> Option<ViewId> {
        if let Some(child) = self.first_child(view) {
            return Some(child);
        }
        let mut node = view;
        while node != root {
            if let Some(next) = self.next_sibling(node) {
                return Some(next);
            }
            node = self.parent_of(node)?;
        }
        None
    }

    /// Inverse of [`next_in_tree`](Self::next_in_tree): the deepest last
    /// descendant of the previous sibling, otherwise the parent.
    ///
    /// Walking backwards from [`deepest_in_tree`](Self::deepest_in_tree) of a root
    /// visits every child before its parent.
    pub fn previous_in_tree(&self, view: ViewId) -> Option<ViewId> {
        match self.previous_sibling(view) {
            Some(prev) => self.deepest_in_tree(prev),
            None => self.parent_of(view),
        }
    }

    /// Follow the last child repeatedly until reaching a leaf.
    ///
    /// Returns `view` itself when it has no children, `None` if it is stale.
    pub fn deepest_in_tree(&self, view: ViewId) -> Option<ViewId> {
        if !self.is_alive(view) {
            return None;
        }
        let mut node = view;
        while let Some(last) = self.last_child(node) {
            node = last;
        }
        Some(node)
    }

    /// Root of the tree containing `view`.
    pub fn root_of(&self, view: ViewId) -> Option<ViewId> {
        self.ancestors(view).last()
    }

    /// Number of ancestors above `view`; roots have depth 0.
    pub fn depth_of(&self, view: ViewId) -> Option<usize> {
        if !self.is_alive(view) {
            return None;
        }
        Some(self.ancestors(view).count() - 1)
    }

    /// Returns true if `view` is `root` or one of its descendants.
    pub fn is_in_subtree(&self, view: ViewId, root: ViewId) -> bool {
        self.ancestors(view).any(|a| a == root)
    }

    /// Iterate the children of `view` in order.
    pub fn children(&self, view: ViewId) -> Children<'_, T> {
        Children {
            tree: self,
            next: self.first_child(view),
        }
    }

    /// Iterate `view` and its ancestors, innermost first.
    pub fn ancestors(&self, view: ViewId) -> Ancestors<'_, T> {
        Ancestors {
            tree: self,
            next: self.is_alive(view).then_some(view),
        }
    }

    /// Iterate `root` and its descendants in pre-order (paint order).
    pub fn descendants(&self, root: ViewId) -> Descendants<'_, T> {
        Descendants {
            tree: self,
            root,
            next: self.is_alive(root).then_some(root),
        }
    }

    // --- internals ---

    /// Links of a live view; callers check liveness first.
    fn links(&self, id: ViewId) -> Links {
        self.nodes[id.idx()]
            .as_ref()
            .map(|n| n.links)
            .unwrap_or_default()
    }

    fn links_mut(&mut self, id: ViewId) -> &mut Links {
        &mut self.nodes[id.idx()]
            .as_mut()
            .expect("dangling ViewId")
            .links
    }
}

/// Iterator over the children of a view. See [`ViewTree::children`].
pub struct Children<'a, T> {
    tree: &'a ViewTree<T>,
    next: Option<ViewId>,
}

impl<T> Iterator for Children<'_, T> {
    type Item = ViewId;

    fn next(&mut self) -> Option<ViewId> {
        let current = self.next?;
        self.next = self.tree.next_sibling(current);
        Some(current)
    }
}

impl<T> fmt::Debug for Children<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Children")
            .field("next", &self.next)
            .finish_non_exhaustive()
    }
}

/// Iterator from a view up to its root. See [`ViewTree::ancestors`].
pub struct Ancestors<'a, T> {
    tree: &'a ViewTree<T>,
    next: Option<ViewId>,
}

impl<T> Iterator for Ancestors<'_, T> {
    type Item = ViewId;

    fn next(&mut self) -> Option<ViewId> {
        let current = self.next?;
        self.next = self.tree.parent_of(current);
        Some(current)
    }
}

impl<T> fmt::Debug for Ancestors<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ancestors")
            .field("next", &self.next)
            .finish_non_exhaustive()
    }
}

/// Pre-order iterator over a subtree. See [`ViewTree::descendants`].
pub struct Descendants<'a, T> {
    tree: &'a ViewTree<T>,
    root: ViewId,
    next: Option<ViewId>,
}

impl<T> Iterator for Descendants<'_, T> {
    type Item = ViewId;

    fn next(&mut self) -> Option<ViewId> {
        let current = self.next?;
        self.next = self.tree.next_in_subtree(current, self.root);
        Some(current)
    }
}

impl<T> fmt::Debug for Descendants<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descendants")
            .field("root", &self.root)
            .field("next", &self.next)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    fn leaf(tree: &mut ViewTree<()>, name: &'static str) -> ViewId {
        tree.insert(View::new(name, ()))
    }

    /// root
    /// ├── a
    /// │   ├── a1
    /// │   └── a2
    /// └── b
    ///     └── b1
    fn sample() -> (ViewTree<()>, [ViewId; 6]) {
        let mut tree = ViewTree::new();
        let root = leaf(&mut tree, "root");
        let a = leaf(&mut tree, "a");
        let a1 = leaf(&mut tree, "a1");
        let a2 = leaf(&mut tree, "a2");
        let b = leaf(&mut tree, "b");
        let b1 = leaf(&mut tree, "b1");
        tree.add_child(root, a);
        tree.add_child(a, a1);
        tree.add_child(a, a2);
        tree.add_child(root, b);
        tree.add_child(b, b1);
        (tree, [root, a, a1, a2, b, b1])
    }

    /// Walks forwards and backwards and checks both chains agree with `children`.
    fn assert_chain(tree: &ViewTree<()>, parent: ViewId, expected: &[ViewId]) {
        let forward: Vec<_> = tree.children(parent).collect();
        assert_eq!(forward, expected, "forward chain");
        let mut backward = Vec::new();
        let mut cur = tree.last_child(parent);
        while let Some(c) = cur {
            backward.push(c);
            cur = tree.previous_sibling(c);
        }
        backward.reverse();
        assert_eq!(backward, expected, "backward chain mirrors forward chain");
        for &c in expected {
            assert_eq!(tree.parent_of(c), Some(parent));
        }
    }

    fn assert_isolated(tree: &ViewTree<()>, v: ViewId) {
        assert_eq!(tree.parent_of(v), None);
        assert_eq!(tree.next_sibling(v), None);
        assert_eq!(tree.previous_sibling(v), None);
    }

    #[test]
    fn add_child_appends_in_order() {
        let (tree, [root, a, a1, a2, b, b1]) = sample();
        assert_chain(&tree, root, &[a, b]);
        assert_chain(&tree, a, &[a1, a2]);
        assert_chain(&tree, b, &[b1]);
        assert_eq!(tree.first_child(root), Some(a));
        assert_eq!(tree.last_child(root), Some(b));
        assert_eq!(tree.previous_sibling(root), None);
    }

    #[test]
    fn pre_order_traversal() {
        let (tree, [root, a, a1, a2, b, b1]) = sample();
        let mut order = vec![root];
        let mut cur = root;
        while let Some(next) = tree.next_in_tree(cur) {
            order.push(next);
            cur = next;
        }
        assert_eq!(order, vec![root, a, a1, a2, b, b1]);
        assert_eq!(tree.descendants(root).collect::<Vec<_>>(), order);
    }

    #[test]
    fn reverse_traversal_visits_children_before_parents() {
        let (tree, [root, a, a1, a2, b, b1]) = sample();
        assert_eq!(tree.deepest_in_tree(root), Some(b1));
        let mut order = vec![b1];
        let mut cur = b1;
        while let Some(prev) = tree.previous_in_tree(cur) {
            order.push(prev);
            cur = prev;
        }
        assert_eq!(order, vec![b1, b, a2, a1, a, root]);
    }

    #[test]
    fn traversal_round_trip() {
        let (tree, ids) = sample();
        for &v in &ids {
            if let Some(next) = tree.next_in_tree(v) {
                assert_eq!(tree.previous_in_tree(next), Some(v), "prev(next({v:?}))");
            }
            if let Some(prev) = tree.previous_in_tree(v) {
                assert_eq!(tree.next_in_tree(prev), Some(v), "next(prev({v:?}))");
            }
        }
    }

    #[test]
    fn subtree_walk_stops_at_subtree_root() {
        let (tree, [_root, a, a1, a2, b, _b1]) = sample();
        assert_eq!(tree.next_in_tree(a2), Some(b));
        assert_eq!(tree.next_in_subtree(a2, a), None);
        assert_eq!(tree.descendants(a).collect::<Vec<_>>(), vec![a, a1, a2]);
        // A leaf subtree is just the leaf.
        assert_eq!(tree.descendants(a1).collect::<Vec<_>>(), vec![a1]);
    }

    #[test]
    fn root_and_depth() {
        let (tree, [root, a, a1, _a2, b, b1]) = sample();
        assert_eq!(tree.root_of(b1), Some(root));
        assert_eq!(tree.root_of(root), Some(root));
        assert_eq!(tree.depth_of(root), Some(0));
        assert_eq!(tree.depth_of(a), Some(1));
        assert_eq!(tree.depth_of(a1), Some(2));
        assert!(tree.is_in_subtree(b1, b));
        assert!(!tree.is_in_subtree(b1, a));
    }

    #[test]
    fn remove_child_isolates_and_relinks() {
        let mut tree = ViewTree::new();
        let p = leaf(&mut tree, "p");
        let [c0, c1, c2] = ["c0", "c1", "c2"].map(|n| leaf(&mut tree, n));
        for c in [c0, c1, c2] {
            tree.add_child(p, c);
        }

        // Middle.
        tree.remove_child(p, c1);
        assert_isolated(&tree, c1);
        assert_chain(&tree, p, &[c0, c2]);

        // First.
        tree.remove_child(p, c0);
        assert_isolated(&tree, c0);
        assert_chain(&tree, p, &[c2]);

        // Last and only.
        tree.remove_child(p, c2);
        assert_isolated(&tree, c2);
        assert_eq!(tree.first_child(p), None);
    }

    #[test]
    fn remove_child_with_wrong_parent_is_ignored() {
        let (mut tree, [root, a, a1, _a2, b, _b1]) = sample();
        tree.remove_child(b, a1);
        assert_eq!(tree.parent_of(a1), Some(a));
        tree.remove(root);
        assert_chain(&tree, root, &[a, b]);
    }

    #[test]
    fn insert_before_links_both_directions() {
        let mut tree = ViewTree::new();
        let p = leaf(&mut tree, "p");
        let [x, y, z] = ["x", "y", "z"].map(|n| leaf(&mut tree, n));
        tree.add_child(p, x);
        tree.add_child(p, z);

        tree.insert_before(p, y, Some(z));
        assert_eq!(tree.next_sibling(y), Some(z));
        assert_eq!(tree.previous_sibling(z), Some(y));
        assert_chain(&tree, p, &[x, y, z]);

        // Before the first child updates `first_child`.
        let w = leaf(&mut tree, "w");
        tree.insert_before(p, w, Some(x));
        assert_eq!(tree.first_child(p), Some(w));
        assert_chain(&tree, p, &[w, x, y, z]);
    }

    #[test]
    fn insert_before_falls_back_to_append() {
        let (mut tree, [root, a, a1, _a2, b, _b1]) = sample();
        let n = leaf(&mut tree, "n");
        // `a1` belongs to `a`, not `root`.
        tree.insert_before(root, n, Some(a1));
        assert_chain(&tree, root, &[a, b, n]);

        let m = leaf(&mut tree, "m");
        tree.insert_before(root, m, None);
        assert_chain(&tree, root, &[a, b, n, m]);

        let empty = leaf(&mut tree, "empty");
        let k = leaf(&mut tree, "k");
        tree.insert_before(empty, k, Some(a));
        assert_chain(&tree, empty, &[k]);
    }

    #[test]
    fn insert_before_moves_existing_sibling() {
        let mut tree = ViewTree::new();
        let p = leaf(&mut tree, "p");
        let [x, y, z] = ["x", "y", "z"].map(|n| leaf(&mut tree, n));
        for c in [x, y, z] {
            tree.add_child(p, c);
        }
        tree.insert_before(p, z, Some(x));
        assert_chain(&tree, p, &[z, x, y]);
    }

    #[test]
    fn replace_takes_exact_position() {
        let (mut tree, [root, a, _a1, _a2, b, _b1]) = sample();
        let n = leaf(&mut tree, "n");
        tree.replace(a, n);
        assert_chain(&tree, root, &[n, b]);
        assert_isolated(&tree, a);
        // The old view keeps its own subtree.
        assert_eq!(tree.children(a).count(), 2);

        let m = leaf(&mut tree, "m");
        tree.replace(b, m);
        assert_chain(&tree, root, &[n, m]);
        assert_isolated(&tree, b);
    }

    #[test]
    fn replace_with_sibling() {
        let mut tree = ViewTree::new();
        let p = leaf(&mut tree, "p");
        let [x, y, z] = ["x", "y", "z"].map(|n| leaf(&mut tree, n));
        for c in [x, y, z] {
            tree.add_child(p, c);
        }
        tree.replace(x, z);
        assert_chain(&tree, p, &[z, y]);
        assert_isolated(&tree, x);
    }

    #[test]
    fn replace_ignores_roots_and_stale_ids() {
        let (mut tree, [root, a, _a1, _a2, b, _b1]) = sample();
        let n = leaf(&mut tree, "n");
        tree.replace(root, n);
        assert_isolated(&tree, n);

        tree.destroy(n);
        tree.replace(a, n);
        assert_chain(&tree, root, &[a, b]);
    }

    #[test]
    fn cycles_are_rejected() {
        let (mut tree, [root, a, a1, a2, b, _b1]) = sample();
        tree.add_child(a1, root);
        tree.add_child(a, a);
        tree.insert_before(a1, a, None);
        tree.replace(a1, a);
        assert_eq!(tree.parent_of(root), None);
        assert_chain(&tree, root, &[a, b]);
        assert_chain(&tree, a, &[a1, a2]);
    }

    #[test]
    fn add_child_reparents() {
        let (mut tree, [root, a, a1, a2, b, b1]) = sample();
        tree.add_child(b, a1);
        assert_chain(&tree, a, &[a2]);
        assert_chain(&tree, b, &[b1, a1]);
        assert_chain(&tree, root, &[a, b]);
    }

    #[test]
    fn destroy_runs_slots_children_first_and_frees_subtree() {
        let log: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
        let mut tree: ViewTree<Rc<RefCell<Vec<&'static str>>>> = ViewTree::new();
        fn record(tree: &mut ViewTree<Rc<RefCell<Vec<&'static str>>>>, id: ViewId) {
            let view = tree.view(id).unwrap();
            view.payload.borrow_mut().push(view.name);
        }
        let mut make = |name| {
            let mut v = View::new(name, log.clone());
            v.behavior.destroy = Some(record);
            tree.insert(v)
        };
        let root = make("root");
        let panel = make("panel");
        let left = make("left");
        let right = make("right");
        let other = make("other");
        tree.add_child(root, panel);
        tree.add_child(panel, left);
        tree.add_child(panel, right);
        tree.add_child(root, other);

        tree.destroy(panel);
        assert_eq!(*log.borrow(), vec!["right", "left", "panel"]);
        assert!(!tree.is_alive(panel));
        assert!(!tree.is_alive(left));
        assert!(!tree.is_alive(right));
        assert_eq!(tree.children(root).collect::<Vec<_>>(), vec![other]);
        assert_eq!(tree.len(), 2);

        // Stale ids stay inert, and reused slots get new generations.
        tree.destroy(panel);
        let fresh = tree.insert(View::new("fresh", log.clone()));
        assert!(!tree.is_alive(panel) && !tree.is_alive(right) && !tree.is_alive(left));
        assert!(tree.is_alive(fresh));
        assert_eq!(tree.first_child(panel), None);
        assert_eq!(tree.next_in_tree(left), None);
    }

    #[test]
    fn insert_discards_links() {
        let mut tree = ViewTree::new();
        let p = leaf(&mut tree, "p");
        let v = View::new("v", ());
        let v = tree.insert(v);
        tree.add_child(p, v);
        assert_eq!(tree.len(), 2);
        assert!(!tree.is_empty());
        assert_eq!(tree.payload(v), Some(&()));
    }
}
