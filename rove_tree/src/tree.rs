// Copyright 2026 the Rove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, ownership, queries, flattening.

use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::types::NodeProps;

/// Arena-backed focus tree.
///
/// Nodes are stored in a flat id → record arena; `parent`, `children`, and
/// the active child are plain id references into it, so membership and parent
/// lookups are O(1) and ownership never forms cycles. Sibling order is
/// insertion order and is semantically significant: flattened views emit
/// children in it, and nearest-index tie-breaks in `rove_nav` follow it.
///
/// The tree is the single owned structure. Queries borrow it immutably;
/// mutation (registering nodes, moving the active child) is the concern of
/// the navigation engine that owns the `Tree` value, and Rust's aliasing
/// rules serialize the two.
///
/// ## Example
///
/// ```rust
/// use rove_tree::{NodeProps, Tree};
///
/// let mut tree = Tree::new();
/// tree.insert(None, "root", NodeProps::default());
/// tree.insert(
///     Some("root"),
///     "menu",
///     NodeProps {
///         index: Some(0),
///         ..NodeProps::default()
///     },
/// );
///
/// assert!(tree.contains("menu"));
/// assert_eq!(tree.parent_of("menu"), Some("root"));
/// assert_eq!(tree.path_of("menu").as_deref(), Some("root.menu"));
/// ```
pub struct Tree {
    nodes: HashMap<String, Node>,
    /// Root ids in insertion order.
    roots: Vec<String>,
}

#[derive(Clone, Debug)]
struct Node {
    parent: Option<String>,
    children: SmallVec<[String; 4]>,
    active_child: Option<String>,
    props: NodeProps,
}

/// One record of a flattened tree view.
///
/// A shallow snapshot of a node: its resolved id and parent, the currently
/// active child, and a copy of its [`NodeProps`]. The child list is stripped;
/// adjacency is conveyed by the order of the containing sequence. Entries are
/// owned clones, so a caller may retain a snapshot while the live tree is
/// mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeEntry {
    /// The node's id (its arena key).
    pub id: String,
    /// Id of the structural parent, or `None` for roots.
    pub parent: Option<String>,
    /// Id of the currently focused descendant, if any.
    pub active_child: Option<String>,
    /// Copy of the node's navigation properties.
    pub props: NodeProps,
}

impl Tree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            roots: Vec::new(),
        }
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `id` names a live node anywhere in the tree.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Root ids in insertion order.
    #[must_use]
    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    /// Insert a new node as a child of `parent` (or as a root for `None`).
    ///
    /// The node is appended to its parent's sibling list, so sibling order is
    /// insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `id` is already present or `parent` names an unknown node.
    /// Id uniqueness is a construction-time contract; queries do not
    /// re-validate it.
    pub fn insert(&mut self, parent: Option<&str>, id: &str, props: NodeProps) {
        assert!(!self.nodes.contains_key(id), "duplicate node id {id:?}");
        let parent = match parent {
            Some(p) => {
                let node = self
                    .nodes
                    .get_mut(p)
                    .unwrap_or_else(|| panic!("unknown parent id {p:?}"));
                node.children.push(String::from(id));
                Some(String::from(p))
            }
            None => {
                self.roots.push(String::from(id));
                None
            }
        };
        self.nodes.insert(
            String::from(id),
            Node {
                parent,
                children: SmallVec::new(),
                active_child: None,
                props,
            },
        );
    }

    /// Remove a node and its whole subtree.
    ///
    /// The node is unlinked from its parent's sibling list, and a parent
    /// `active_child` pointing at it is cleared so the invariant that the
    /// active child is always a live child holds. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) {
        let Some(parent) = self.nodes.get(id).map(|n| n.parent.clone()) else {
            return;
        };
        match parent {
            Some(p) => {
                if let Some(parent_node) = self.nodes.get_mut(&p) {
                    parent_node.children.retain(|c| c.as_str() != id);
                    if parent_node.active_child.as_deref() == Some(id) {
                        parent_node.active_child = None;
                    }
                }
            }
            None => self.roots.retain(|r| r.as_str() != id),
        }
        self.remove_subtree(id);
    }

    fn remove_subtree(&mut self, id: &str) {
        let Some(node) = self.nodes.remove(id) else {
            return;
        };
        for child in node.children {
            self.remove_subtree(&child);
        }
    }

    /// Set the currently focused descendant of `id`.
    ///
    /// Refuses ids that are not children of `id` (including ids elsewhere in
    /// the tree), keeping the active child a member of the sibling list by
    /// construction. Returns whether the active child was set.
    pub fn set_active_child(&mut self, id: &str, child: &str) -> bool {
        let Some(node) = self.nodes.get_mut(id) else {
            return false;
        };
        if node.children.iter().any(|c| c.as_str() == child) {
            node.active_child = Some(String::from(child));
            true
        } else {
            false
        }
    }

    /// Clear the currently focused descendant of `id`, if any.
    pub fn clear_active_child(&mut self, id: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.active_child = None;
        }
    }

    /// Navigation properties of a live node.
    #[must_use]
    pub fn props(&self, id: &str) -> Option<&NodeProps> {
        self.nodes.get(id).map(|n| &n.props)
    }

    /// Mutable navigation properties of a live node.
    pub fn props_mut(&mut self, id: &str) -> Option<&mut NodeProps> {
        self.nodes.get_mut(id).map(|n| &mut n.props)
    }

    /// Parent id of a live node, or `None` for roots and unknown ids.
    #[must_use]
    pub fn parent_of(&self, id: &str) -> Option<&str> {
        self.nodes.get(id).and_then(|n| n.parent.as_deref())
    }

    /// Child ids of `id` in sibling (insertion) order.
    ///
    /// Unknown ids and leaves both yield an empty slice.
    #[must_use]
    pub fn children_of(&self, id: &str) -> &[String] {
        self.nodes.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Id of the currently focused descendant of `id`, if one is set.
    ///
    /// When present, the returned id is always one of
    /// [`Tree::children_of`]`(id)`; the setter and removal maintain this.
    #[must_use]
    pub fn active_child_of(&self, id: &str) -> Option<&str> {
        self.nodes.get(id).and_then(|n| n.active_child.as_deref())
    }

    /// Flatten the tree into a depth-first pre-order sequence of
    /// [`NodeEntry`] snapshots.
    ///
    /// Roots are visited in insertion order and each node's children follow
    /// it immediately, so parent/child adjacency in the output reflects walk
    /// order, not sorted index order.
    #[must_use]
    pub fn entries(&self) -> Vec<NodeEntry> {
        let mut out = Vec::with_capacity(self.nodes.len());
        for root in &self.roots {
            self.collect_entries(root, &mut out);
        }
        out
    }

    fn collect_entries(&self, id: &str, out: &mut Vec<NodeEntry>) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        out.push(NodeEntry {
            id: String::from(id),
            parent: node.parent.clone(),
            active_child: node.active_child.clone(),
            props: node.props.clone(),
        });
        for child in &node.children {
            self.collect_entries(child, out);
        }
    }

    /// Dot-joined ancestry path from the root down to `id`.
    ///
    /// This is the producer for the [`is_node_in_path`](crate::is_node_in_path)
    /// consumers; ids containing `'.'` make such paths ambiguous (see the
    /// module docs on path membership). Returns `None` for unknown ids.
    #[must_use]
    pub fn path_of(&self, id: &str) -> Option<String> {
        let mut node = self.nodes.get(id)?;
        let mut segments = Vec::new();
        segments.push(id);
        while let Some(parent) = node.parent.as_deref() {
            segments.push(parent);
            node = self.nodes.get(parent)?;
        }
        segments.reverse();
        Some(segments.join("."))
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tree")
            .field("nodes", &self.nodes.len())
            .field("roots", &self.roots)
            .finish_non_exhaustive()
    }
}
