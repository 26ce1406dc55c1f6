//! Dirty-tracked component arena.
//!
//! Components live in a [`SlotMap`] addressed by [`ComponentId`]. The ordered
//! child list of a node is the only ownership edge; parent links are plain ids.
//!
//! Each node carries two flags. `dirty_self` means the component itself must
//! redraw; `dirty_children` means some descendant must. Every mutation that
//! dirties a node raises `dirty_children` on all of its ancestors, so the
//! root alone tells whether a frame is needed.
//!
//! Drawing follows the painter's model: children paint over their parent and
//! later siblings over earlier ones. Under [`RedrawPolicy::DirtyOnly`] a pass
//! starts at the first dirty node in paint order and repaints everything
//! after it. Changes that can uncover pixels (removals, moves, resizes)
//! request a full repaint instead, see [`Tree::needs_repaint`].

use std::any::type_name;
use std::fmt;

use slotmap::{SlotMap, new_key_type};
use youi_engine::coords::{Bounds, PixelRect, PixelSize, Size};
use youi_engine::scene::DrawList;
use youi_engine::text::FontMetrics;

use crate::component::{Component, DrawCtx};
use crate::config::RedrawPolicy;
use crate::error::TreeError;

new_key_type! {
    /// Handle to a component stored in a [`Tree`].
    pub struct ComponentId;
}

#[derive(Debug)]
struct Node {
    component: Box<dyn Component>,
    parent: Option<ComponentId>,
    children: Vec<ComponentId>,
    bounds: Bounds,
    dirty_self: bool,
    dirty_children: bool,
}

impl Node {
    fn new(component: Box<dyn Component>) -> Self {
        Self {
            component,
            parent: None,
            children: Vec::new(),
            bounds: Bounds::default(),
            dirty_self: true,
            dirty_children: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct Tree {
    nodes: SlotMap<ComponentId, Node>,
    root: Option<ComponentId>,
    policy: RedrawPolicy,
    repaint: bool,
}

struct DrawPass<'a, 'f> {
    list: &'a mut DrawList,
    fonts: Option<&'f dyn FontMetrics>,
    root_size: Size,
    full: bool,
    painting: bool,
    drawn: usize,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: RedrawPolicy) -> Self {
        Self { policy, ..Self::default() }
    }

    pub fn policy(&self) -> RedrawPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: RedrawPolicy) {
        self.policy = policy;
    }

    // ── Nodes ─────────────────────────────────────────────────────────────

    /// Store a detached component.
    pub fn insert(&mut self, component: Box<dyn Component>) -> ComponentId {
        self.nodes.insert(Node::new(component))
    }

    pub fn insert_component<C: Component>(&mut self, component: C) -> ComponentId {
        self.insert(Box::new(component))
    }

    pub fn contains(&self, id: ComponentId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of components in the arena, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> Option<ComponentId> {
        self.root
    }

    /// Make `id` the root, detaching it from its parent first.
    pub fn set_root(&mut self, id: ComponentId) -> Result<(), TreeError> {
        self.detach(id)?;
        self.root = Some(id);
        Ok(())
    }

    pub fn component(&self, id: ComponentId) -> Result<&dyn Component, TreeError> {
        Ok(&*self.node(id)?.component)
    }

    /// Typed access to the component behind `id`.
    pub fn get<T: Component>(&self, id: ComponentId) -> Result<&T, TreeError> {
        (*self.node(id)?.component)
            .as_any()
            .downcast_ref::<T>()
            .ok_or(TreeError::TypeMismatch { expected: type_name::<T>() })
    }

    /// Mutate the component behind `id` as a `T`.
    ///
    /// The node is marked dirty and its subtree is laid out again, so changes
    /// to a container's geometry reach its children immediately.
    pub fn update<T: Component, R>(
        &mut self,
        id: ComponentId,
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<R, TreeError> {
        let node = self.node_mut(id)?;
        let component = (*node.component)
            .as_any_mut()
            .downcast_mut::<T>()
            .ok_or(TreeError::TypeMismatch { expected: type_name::<T>() })?;
        let out = f(component);
        self.mark_dirty(id)?;
        self.relayout(id)?;
        Ok(out)
    }

    /// Like [`update`](Self::update), without knowing the concrete type.
    pub fn update_dyn<R>(
        &mut self,
        id: ComponentId,
        f: impl FnOnce(&mut dyn Component) -> R,
    ) -> Result<R, TreeError> {
        let out = f(&mut *self.node_mut(id)?.component);
        self.mark_dirty(id)?;
        self.relayout(id)?;
        Ok(out)
    }

    // ── Navigation ────────────────────────────────────────────────────────

    pub fn parent(&self, id: ComponentId) -> Option<ComponentId> {
        self.nodes.get(id).and_then(|node| node.parent)
    }

    /// Ordered children of `id`; empty for leaves and stale ids.
    pub fn children(&self, id: ComponentId) -> &[ComponentId] {
        self.nodes.get(id).map_or(&[], |node| node.children.as_slice())
    }

    pub fn find_child_index(&self, parent: ComponentId, child: ComponentId) -> Option<usize> {
        self.children(parent).iter().position(|&c| c == child)
    }

    /// Topmost ancestor of `id`. A detached node is its own root.
    pub fn root_of(&self, id: ComponentId) -> ComponentId {
        let mut cur = id;
        while let Some(parent) = self.parent(cur) {
            cur = parent;
        }
        cur
    }

    /// `id` followed by its descendants, in paint order.
    pub fn descendants(&self, id: ComponentId) -> Vec<ComponentId> {
        let mut out = Vec::new();
        if !self.contains(id) {
            return out;
        }
        let mut stack = vec![id];
        while let Some(cur) = stack.pop() {
            out.push(cur);
            stack.extend(self.children(cur).iter().rev().copied());
        }
        out
    }

    fn is_ancestor_or_self(&self, ancestor: ComponentId, id: ComponentId) -> bool {
        let mut cur = Some(id);
        while let Some(c) = cur {
            if c == ancestor {
                return true;
            }
            cur = self.parent(c);
        }
        false
    }

    // ── Structure ─────────────────────────────────────────────────────────

    pub fn append_child(&mut self, parent: ComponentId, child: ComponentId) -> Result<(), TreeError> {
        self.attach(parent, child, None)
    }

    pub fn prepend_child(&mut self, parent: ComponentId, child: ComponentId) -> Result<(), TreeError> {
        self.attach(parent, child, Some(0))
    }

    /// Insert `child` before position `index`; `index == len` appends.
    pub fn insert_child(
        &mut self,
        parent: ComponentId,
        child: ComponentId,
        index: usize,
    ) -> Result<(), TreeError> {
        self.attach(parent, child, Some(index))
    }

    fn attach(
        &mut self,
        parent: ComponentId,
        child: ComponentId,
        index: Option<usize>,
    ) -> Result<(), TreeError> {
        let parent_node = self.node(parent)?;
        self.node(child)?;
        if !parent_node.component.is_container() {
            return Err(TreeError::NotAContainer { tag: parent_node.component.tag().to_string() });
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(TreeError::WouldCycle);
        }

        // Moving within the same parent shortens the list before insertion.
        let len = parent_node.children.len() - usize::from(self.parent(child) == Some(parent));
        let index = index.unwrap_or(len);
        if index > len {
            return Err(TreeError::IndexOutOfBounds { index, len });
        }

        self.detach(child)?;
        if self.root == Some(child) {
            self.root = None;
        }

        self.nodes[parent].children.insert(index, child);
        self.nodes[child].parent = Some(parent);
        self.nodes[child].dirty_self = true;
        self.raise_dirty_children(Some(parent));

        self.layout_child(parent, child);
        self.relayout_subtree(child);
        Ok(())
    }

    /// Detach `child` from `parent` without destroying it.
    pub fn remove_child(&mut self, parent: ComponentId, child: ComponentId) -> Result<(), TreeError> {
        self.node(parent)?;
        let index = self.find_child_index(parent, child).ok_or(TreeError::ComponentNotFound)?;
        self.remove_child_at(parent, index).map(|_| ())
    }

    /// Detach the child at `index` and return it.
    pub fn remove_child_at(&mut self, parent: ComponentId, index: usize) -> Result<ComponentId, TreeError> {
        let len = self.node(parent)?.children.len();
        if index >= len {
            return Err(TreeError::IndexOutOfBounds { index, len });
        }
        let child = self.nodes[parent].children.remove(index);
        self.nodes[child].parent = None;
        let grandparent = self.nodes[parent].parent;
        self.nodes[parent].dirty_self = true;
        self.raise_dirty_children(grandparent);
        self.repaint = true;
        Ok(child)
    }

    /// Unlink `id` from its parent, if it has one.
    pub fn detach(&mut self, id: ComponentId) -> Result<(), TreeError> {
        match self.node(id)?.parent {
            Some(parent) => self.remove_child(parent, id),
            None => Ok(()),
        }
    }

    /// Detach `id` and drop it together with its whole subtree.
    pub fn dispose(&mut self, id: ComponentId) -> Result<(), TreeError> {
        self.detach(id)?;
        let doomed = self.descendants(id);
        for &gone in &doomed {
            self.nodes.remove(gone);
        }
        if self.root.is_some_and(|root| doomed.contains(&root)) {
            self.root = None;
        }
        log::trace!("tree: disposed {} components", doomed.len());
        Ok(())
    }

    // ── Bounds & dirty flags ──────────────────────────────────────────────

    pub fn bounds(&self, id: ComponentId) -> Option<Bounds> {
        self.nodes.get(id).map(|node| node.bounds)
    }

    pub fn set_bounds(&mut self, id: ComponentId, bounds: Bounds) -> Result<(), TreeError> {
        let node = self.node_mut(id)?;
        if node.bounds != bounds {
            node.bounds = bounds;
            self.repaint = true;
        }
        self.mark_dirty(id)
    }

    /// Request a redraw of `id` on the next frame.
    pub fn mark_dirty(&mut self, id: ComponentId) -> Result<(), TreeError> {
        let node = self.node_mut(id)?;
        node.dirty_self = true;
        let parent = node.parent;
        self.raise_dirty_children(parent);
        Ok(())
    }

    /// Mark `id` and its whole subtree dirty and request a full repaint.
    pub fn invalidate(&mut self, id: ComponentId) -> Result<(), TreeError> {
        let parent = self.node(id)?.parent;
        for node in self.descendants(id) {
            self.nodes[node].dirty_self = true;
        }
        self.raise_dirty_children(parent);
        self.repaint = true;
        Ok(())
    }

    /// Ask the next [`draw`](Self::draw) to repaint every node regardless of
    /// policy.
    pub fn request_repaint(&mut self) {
        self.repaint = true;
    }

    /// Whether the next draw repaints everything: the policy is
    /// [`RedrawPolicy::Full`], or something uncovered pixels since the last
    /// draw. The caller should clear the surface before such a draw.
    pub fn needs_repaint(&self) -> bool {
        self.policy == RedrawPolicy::Full || self.repaint
    }

    pub fn is_dirty(&self, id: ComponentId) -> bool {
        self.nodes.get(id).is_some_and(|node| node.dirty_self)
    }

    pub fn has_dirty_children(&self, id: ComponentId) -> bool {
        self.nodes.get(id).is_some_and(|node| node.dirty_children)
    }

    pub fn should_redraw(&self, id: ComponentId) -> bool {
        self.nodes.get(id).is_some_and(|node| node.dirty_self || node.dirty_children)
    }

    fn raise_dirty_children(&mut self, mut cur: Option<ComponentId>) {
        while let Some(id) = cur {
            let node = &mut self.nodes[id];
            node.dirty_children = true;
            cur = node.parent;
        }
    }

    // ── Layout ────────────────────────────────────────────────────────────

    /// Store `rect` as the root's pixel bounds and lay out the whole tree.
    pub fn set_root_rect(&mut self, rect: PixelRect) -> Result<(), TreeError> {
        let root = self.root.ok_or(TreeError::NoRoot)?;
        self.set_bounds(root, Bounds::from(rect.normalized()))?;
        self.relayout_subtree(root);
        log::debug!(
            "tree: root resized to {}x{} at ({}, {})",
            rect.size().width,
            rect.size().height,
            rect.min.x,
            rect.min.y
        );
        Ok(())
    }

    /// Resize the root, keeping its origin.
    pub fn set_root_size(&mut self, size: PixelSize) -> Result<(), TreeError> {
        let root = self.root.ok_or(TreeError::NoRoot)?;
        let origin = self.nodes[root].bounds.position;
        let rect = PixelRect::new(origin.x as i32, origin.y as i32, size.width, size.height);
        self.set_root_rect(rect)
    }

    /// Recompute child bounds for every container in the subtree of `id`.
    pub fn relayout(&mut self, id: ComponentId) -> Result<(), TreeError> {
        self.node(id)?;
        self.relayout_subtree(id);
        Ok(())
    }

    fn relayout_subtree(&mut self, id: ComponentId) {
        for node in self.descendants(id) {
            self.apply_layout(node);
        }
    }

    fn root_size_of(&self, id: ComponentId) -> Size {
        self.nodes[self.root_of(id)].bounds.size
    }

    fn child_bounds(&self, parent: ComponentId) -> Option<Bounds> {
        let node = &self.nodes[parent];
        let layout = node.component.layout()?;
        Some(layout.child_bounds(node.bounds, self.root_size_of(parent)))
    }

    fn apply_layout(&mut self, id: ComponentId) {
        let Some(bounds) = self.child_bounds(id) else { return };
        let children = self.nodes[id].children.clone();
        for child in children {
            self.store_bounds(child, bounds);
        }
    }

    fn layout_child(&mut self, parent: ComponentId, child: ComponentId) {
        if let Some(bounds) = self.child_bounds(parent) {
            self.store_bounds(child, bounds);
        }
    }

    fn store_bounds(&mut self, id: ComponentId, bounds: Bounds) {
        let node = &mut self.nodes[id];
        if node.bounds != bounds {
            node.bounds = bounds;
            node.dirty_self = true;
            let parent = node.parent;
            self.raise_dirty_children(parent);
            self.repaint = true;
        }
    }

    // ── Drawing ───────────────────────────────────────────────────────────

    /// Draw from the root into `list`. Returns how many components drew.
    pub fn draw(&mut self, list: &mut DrawList, fonts: Option<&dyn FontMetrics>) -> usize {
        let full = self.needs_repaint();
        self.repaint = false;
        let Some(root) = self.root else { return 0 };
        let mut pass = DrawPass {
            list,
            fonts,
            root_size: self.nodes[root].bounds.size,
            full,
            painting: false,
            drawn: 0,
        };
        self.draw_node(root, &mut pass);
        log::trace!(
            "tree: {} components drew {} commands (full: {full})",
            pass.drawn,
            pass.list.len()
        );
        pass.drawn
    }

    fn draw_node(&mut self, id: ComponentId, pass: &mut DrawPass<'_, '_>) {
        let dirty = self.nodes[id].dirty_self;
        if dirty {
            self.apply_layout(id);
        }
        if dirty || pass.full || pass.painting {
            let node = &mut self.nodes[id];
            let mut ctx = DrawCtx {
                bounds: node.bounds,
                dirty,
                root_size: pass.root_size,
                list: &mut *pass.list,
                fonts: pass.fonts,
            };
            node.component.draw(&mut ctx);
            pass.drawn += 1;
            // Everything later in paint order overlaps what was just drawn.
            pass.painting = true;
        }
        self.nodes[id].dirty_self = false;

        let children = self.nodes[id].children.clone();
        for child in children {
            if pass.full || pass.painting || self.should_redraw(child) {
                self.draw_node(child, pass);
            }
        }
        self.nodes[id].dirty_children = false;
    }

    // ── Serialization ─────────────────────────────────────────────────────

    /// The subtree of `id` as indented YUML markup.
    pub fn to_markup(&self, id: ComponentId) -> Result<String, TreeError> {
        self.node(id)?;
        let mut out = String::new();
        self.write_markup(id, 0, &mut out);
        Ok(out)
    }

    fn write_markup(&self, id: ComponentId, depth: usize, out: &mut String) {
        let node = &self.nodes[id];
        let indent = "  ".repeat(depth);
        let tag = node.component.tag();
        let attrs: String = node
            .component
            .attributes()
            .iter()
            .map(|a| format!(" {}=\"{}\"", a.name(), escape(a.as_str())))
            .collect();

        if node.children.is_empty() {
            out.push_str(&format!("{indent}<{tag}{attrs} />\n"));
        } else {
            out.push_str(&format!("{indent}<{tag}{attrs}>\n"));
            for &child in &node.children {
                self.write_markup(child, depth + 1, out);
            }
            out.push_str(&format!("{indent}</{tag}>\n"));
        }
    }

    // ── Internal ──────────────────────────────────────────────────────────

    fn node(&self, id: ComponentId) -> Result<&Node, TreeError> {
        self.nodes.get(id).ok_or(TreeError::StaleComponent)
    }

    fn node_mut(&mut self, id: ComponentId) -> Result<&mut Node, TreeError> {
        self.nodes.get_mut(id).ok_or(TreeError::StaleComponent)
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(root) => {
                let mut out = String::new();
                self.write_markup(root, 0, &mut out);
                f.write_str(&out)
            }
            None => f.write_str("<empty tree>"),
        }
    }
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use youi_yuml::AttributeList;

    #[derive(Debug, Default)]
    struct Group;

    impl Component for Group {
        fn tag(&self) -> &str {
            "Group"
        }
        fn is_container(&self) -> bool {
            true
        }
    }

    #[derive(Debug, Default)]
    struct Leaf {
        name: String,
        draws: usize,
    }

    impl Leaf {
        fn named(name: &str) -> Self {
            Self { name: name.to_string(), draws: 0 }
        }
    }

    impl Component for Leaf {
        fn tag(&self) -> &str {
            "Leaf"
        }
        fn attributes(&self) -> AttributeList {
            [("Name", self.name.as_str())].into_iter().collect()
        }
        fn draw(&mut self, ctx: &mut DrawCtx<'_>) {
            if ctx.dirty {
                self.draws += 1;
            }
        }
    }

    fn draws(tree: &Tree, id: ComponentId) -> usize {
        tree.get::<Leaf>(id).unwrap().draws
    }

    /// root(Group) > [a(Leaf), b(Leaf), c(Leaf)]
    fn flat() -> (Tree, ComponentId, [ComponentId; 3]) {
        let mut tree = Tree::new();
        let root = tree.insert_component(Group);
        tree.set_root(root).unwrap();
        let kids = ["a", "b", "c"].map(|n| tree.insert_component(Leaf::named(n)));
        for kid in kids {
            tree.append_child(root, kid).unwrap();
        }
        (tree, root, kids)
    }

    #[test]
    fn append_preserves_order_and_links_parent() {
        let (tree, root, [a, b, c]) = flat();
        assert_eq!(tree.children(root), &[a, b, c]);
        assert_eq!(tree.parent(b), Some(root));
        assert_eq!(tree.find_child_index(root, c), Some(2));
    }

    #[test]
    fn prepend_and_insert() {
        let (mut tree, root, [a, b, c]) = flat();
        let d = tree.insert_component(Leaf::named("d"));
        let e = tree.insert_component(Leaf::named("e"));
        tree.prepend_child(root, d).unwrap();
        tree.insert_child(root, e, 2).unwrap();
        assert_eq!(tree.children(root), &[d, a, e, b, c]);
    }

    #[test]
    fn insert_at_len_appends() {
        let (mut tree, root, [a, b, c]) = flat();
        let d = tree.insert_component(Leaf::named("d"));
        tree.insert_child(root, d, 3).unwrap();
        assert_eq!(tree.children(root), &[a, b, c, d]);
    }

    #[test]
    fn insert_past_len_fails_without_side_effects() {
        let (mut tree, root, _) = flat();
        let d = tree.insert_component(Leaf::named("d"));
        assert_eq!(
            tree.insert_child(root, d, 4),
            Err(TreeError::IndexOutOfBounds { index: 4, len: 3 })
        );
        assert_eq!(tree.parent(d), None);
        assert_eq!(tree.children(root).len(), 3);
    }

    #[test]
    fn moving_within_parent_counts_without_the_child() {
        let (mut tree, root, [a, b, c]) = flat();
        assert_eq!(
            tree.insert_child(root, a, 3),
            Err(TreeError::IndexOutOfBounds { index: 3, len: 2 })
        );
        tree.insert_child(root, a, 2).unwrap();
        assert_eq!(tree.children(root), &[b, c, a]);
    }

    #[test]
    fn remove_child_at_len_fails() {
        let (mut tree, root, _) = flat();
        assert_eq!(
            tree.remove_child_at(root, 3),
            Err(TreeError::IndexOutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    fn remove_detaches_without_destroying() {
        let (mut tree, root, [a, b, c]) = flat();
        assert_eq!(tree.remove_child_at(root, 0), Ok(a));
        tree.remove_child(root, c).unwrap();
        assert_eq!(tree.children(root), &[b]);
        assert!(tree.contains(a));
        assert_eq!(tree.parent(a), None);
        assert_eq!(tree.remove_child(root, a), Err(TreeError::ComponentNotFound));
    }

    #[test]
    fn reattaching_moves_between_parents() {
        let (mut tree, root, [a, b, _]) = flat();
        let group = tree.insert_component(Group);
        tree.append_child(root, group).unwrap();
        tree.append_child(group, b).unwrap();
        assert_eq!(tree.parent(b), Some(group));
        assert_eq!(tree.find_child_index(root, b), None);
        assert_eq!(tree.children(group), &[b]);
        assert_eq!(tree.root_of(b), root);
        assert_eq!(tree.root_of(a), root);
    }

    #[test]
    fn leaves_refuse_children() {
        let (mut tree, _, [a, b, _]) = flat();
        assert_eq!(
            tree.append_child(a, b),
            Err(TreeError::NotAContainer { tag: "Leaf".into() })
        );
    }

    #[test]
    fn cycles_are_rejected() {
        let (mut tree, root, _) = flat();
        let inner = tree.insert_component(Group);
        tree.append_child(root, inner).unwrap();
        assert_eq!(tree.append_child(inner, root), Err(TreeError::WouldCycle));
        assert_eq!(tree.append_child(inner, inner), Err(TreeError::WouldCycle));
    }

    #[test]
    fn dirty_propagates_to_every_ancestor() {
        let mut tree = Tree::new();
        let root = tree.insert_component(Group);
        let mid = tree.insert_component(Group);
        let low = tree.insert_component(Group);
        tree.set_root(root).unwrap();
        tree.append_child(root, mid).unwrap();
        tree.append_child(mid, low).unwrap();
        tree.draw(&mut DrawList::new(), None);
        assert!(!tree.should_redraw(root));

        let leaf = tree.insert_component(Leaf::named("x"));
        tree.append_child(low, leaf).unwrap();
        for id in [root, mid, low] {
            assert!(tree.has_dirty_children(id));
            assert!(!tree.is_dirty(id));
        }
        assert!(tree.is_dirty(leaf));
    }

    #[test]
    fn full_draw_leaves_everything_clean() {
        for policy in [RedrawPolicy::Full, RedrawPolicy::DirtyOnly] {
            let (mut tree, root, kids) = flat();
            tree.set_policy(policy);
            tree.draw(&mut DrawList::new(), None);
            for id in std::iter::once(root).chain(kids) {
                assert!(!tree.should_redraw(id), "{policy:?}");
            }
        }
    }

    #[test]
    fn dirty_only_skips_earlier_siblings() {
        let (mut tree, root, [a, b, c]) = flat();
        tree.set_policy(RedrawPolicy::DirtyOnly);
        tree.draw(&mut DrawList::new(), None);

        tree.mark_dirty(b).unwrap();
        assert!(tree.has_dirty_children(root));
        assert!(!tree.needs_repaint());
        let drawn = tree.draw(&mut DrawList::new(), None);
        assert_eq!(drawn, 2);
        assert_eq!(draws(&tree, a), 1);
        assert_eq!(draws(&tree, b), 2);
        // repainted on top of b, but its own state did not change
        assert_eq!(draws(&tree, c), 1);
        assert!(!tree.should_redraw(root));
    }

    #[test]
    fn dirty_only_repaints_everything_painted_after() {
        let mut tree = Tree::with_policy(RedrawPolicy::DirtyOnly);
        let root = tree.insert_component(Group);
        tree.set_root(root).unwrap();
        let back = tree.insert_component(Group);
        let front = tree.insert_component(Group);
        tree.append_child(root, back).unwrap();
        tree.append_child(root, front).unwrap();
        let under = tree.insert_component(Leaf::named("under"));
        let over = tree.insert_component(Leaf::named("over"));
        tree.append_child(back, under).unwrap();
        tree.append_child(front, over).unwrap();
        tree.draw(&mut DrawList::new(), None);

        tree.mark_dirty(under).unwrap();
        // under, then front and over on top of it
        assert_eq!(tree.draw(&mut DrawList::new(), None), 3);
        assert_eq!(draws(&tree, under), 2);
        assert_eq!(draws(&tree, over), 1);

        tree.mark_dirty(over).unwrap();
        assert_eq!(tree.draw(&mut DrawList::new(), None), 1);
    }

    #[test]
    fn removal_requests_repaint() {
        let (mut tree, root, [a, b, c]) = flat();
        tree.set_policy(RedrawPolicy::DirtyOnly);
        tree.draw(&mut DrawList::new(), None);
        assert!(!tree.needs_repaint());

        tree.remove_child(root, b).unwrap();
        assert!(tree.needs_repaint());
        assert!(tree.is_dirty(root));
        assert_eq!(tree.draw(&mut DrawList::new(), None), 3);
        assert_eq!(draws(&tree, a), 1);
        assert_eq!(draws(&tree, c), 1);
        assert!(!tree.needs_repaint());
        assert!(!tree.should_redraw(root));
    }

    #[test]
    fn moved_bounds_request_repaint() {
        let (mut tree, _, [a, ..]) = flat();
        tree.set_policy(RedrawPolicy::DirtyOnly);
        tree.draw(&mut DrawList::new(), None);

        tree.set_bounds(a, Bounds::UNIT).unwrap();
        assert!(tree.needs_repaint());
        tree.draw(&mut DrawList::new(), None);

        tree.set_bounds(a, Bounds::UNIT).unwrap();
        assert!(!tree.needs_repaint());
        assert!(tree.is_dirty(a));
    }

    #[test]
    fn invalidate_dirties_whole_subtree() {
        let (mut tree, root, kids) = flat();
        tree.set_policy(RedrawPolicy::DirtyOnly);
        tree.draw(&mut DrawList::new(), None);

        tree.invalidate(root).unwrap();
        assert!(tree.needs_repaint());
        for id in std::iter::once(root).chain(kids) {
            assert!(tree.is_dirty(id));
        }
        tree.draw(&mut DrawList::new(), None);
        for kid in kids {
            assert_eq!(draws(&tree, kid), 2);
        }
    }

    #[test]
    fn full_policy_always_repaints() {
        let (mut tree, ..) = flat();
        tree.draw(&mut DrawList::new(), None);
        assert!(tree.needs_repaint());
    }

    #[test]
    fn full_policy_visits_every_node() {
        let (mut tree, _, [_, b, _]) = flat();
        tree.draw(&mut DrawList::new(), None);
        tree.mark_dirty(b).unwrap();
        assert_eq!(tree.draw(&mut DrawList::new(), None), 4);
        assert_eq!(draws(&tree, b), 2);
    }

    #[test]
    fn set_bounds_marks_dirty() {
        let (mut tree, root, [a, ..]) = flat();
        tree.draw(&mut DrawList::new(), None);
        tree.set_bounds(a, Bounds::new(0.0, 0.0, 0.5, 0.5)).unwrap();
        assert!(tree.is_dirty(a));
        assert!(tree.has_dirty_children(root));
        assert_eq!(tree.bounds(a), Some(Bounds::new(0.0, 0.0, 0.5, 0.5)));
    }

    #[test]
    fn update_marks_dirty_and_checks_type() {
        let (mut tree, root, [a, ..]) = flat();
        tree.draw(&mut DrawList::new(), None);
        tree.update::<Leaf, _>(a, |leaf| leaf.name = "renamed".into()).unwrap();
        assert!(tree.is_dirty(a));
        assert!(tree.has_dirty_children(root));
        assert!(matches!(tree.update::<Group, _>(a, |_| ()), Err(TreeError::TypeMismatch { .. })));
    }

    #[test]
    fn dispose_removes_subtree() {
        let (mut tree, root, [a, b, c]) = flat();
        let group = tree.insert_component(Group);
        tree.append_child(root, group).unwrap();
        tree.append_child(group, b).unwrap();
        tree.dispose(group).unwrap();
        assert!(!tree.contains(group));
        assert!(!tree.contains(b));
        assert_eq!(tree.children(root), &[a, c]);
        assert_eq!(tree.get::<Leaf>(b).map(|_| ()), Err(TreeError::StaleComponent));

        tree.dispose(root).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
    }

    #[test]
    fn markup_round_trips_structure() {
        let (mut tree, root, [a, ..]) = flat();
        let group = tree.insert_component(Group);
        tree.insert_child(root, group, 1).unwrap();
        let d = tree.insert_component(Leaf::named("<d & \"e\">"));
        tree.append_child(group, d).unwrap();
        tree.remove_child(root, a).unwrap();

        let expected = "\
<Group>
  <Group>
    <Leaf Name=\"&lt;d &amp; &quot;e&quot;>\" />
  </Group>
  <Leaf Name=\"b\" />
  <Leaf Name=\"c\" />
</Group>
";
        assert_eq!(tree.to_markup(root).unwrap(), expected);
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn root_resize_without_root_fails() {
        let mut tree = Tree::new();
        assert_eq!(tree.set_root_size(PixelSize::new(10, 10)), Err(TreeError::NoRoot));
    }
}
