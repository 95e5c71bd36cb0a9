// Copyright 2026 the Rove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index resolution: choosing which child of a container receives focus.
//!
//! These are pure policy functions over a read-only [`Tree`]. They return the
//! id of the chosen child, or `None` when there is no navigable child — the
//! caller treats `None` as "no move in this direction". Nothing here mutates
//! the tree or fires callbacks.

use alloc::string::String;
use alloc::vec::Vec;

use rove_tree::{IndexRange, Tree};

use crate::closest::closest;

/// First child of `id` whose `index` equals `index` exactly.
///
/// Scans the sibling list in order; `None` when `id` has no children or no
/// child carries that index.
#[must_use]
pub fn child_with_index<'t>(tree: &'t Tree, id: &str, index: i32) -> Option<&'t str> {
    tree.children_of(id)
        .iter()
        .map(String::as_str)
        .find(|&child| tree.props(child).and_then(|p| p.index) == Some(index))
}

/// First child of `id` whose `index_range` contains `index`.
///
/// Scans the sibling list in order; `None` when `id` has no children or no
/// child's span covers the index. Children without an `index_range` never
/// match, whatever their `index`.
#[must_use]
pub fn child_with_matching_index_range<'t>(tree: &'t Tree, id: &str, index: i32) -> Option<&'t str> {
    tree.children_of(id)
        .iter()
        .map(String::as_str)
        .find(|&child| {
            tree.props(child)
                .and_then(|p| p.index_range)
                .is_some_and(|range| range.contains(index))
        })
}

/// Child of `id` whose `index` is nearest to `index`, honoring the
/// index-aligned shortcut.
///
/// When `align_range` is supplied and the node's active child is focusable
/// with an `index` inside the span, that child is returned immediately, with
/// no candidate evaluation. This preserves the user's lateral position when
/// moving along an index-aligned axis — staying in the same grid column while
/// moving rows — instead of recomputing the nearest index.
///
/// Otherwise the candidate set is the index of every child that is focusable
/// or is itself a container (children without an index contribute nothing),
/// collected in sibling order, and the nearest candidate wins. Equal
/// distances resolve in favor of the earlier sibling — see
/// [`closest`](crate::closest).
///
/// `None` when `id` has no children or the candidate set is empty; callers
/// must treat that as "no navigable child".
#[must_use]
pub fn child_with_closest_index<'t>(
    tree: &'t Tree,
    id: &str,
    index: i32,
    align_range: Option<IndexRange>,
) -> Option<&'t str> {
    let children = tree.children_of(id);
    if children.is_empty() {
        return None;
    }

    if let Some(range) = align_range
        && let Some(active) = tree.active_child_of(id)
        && let Some(props) = tree.props(active)
        && props.index.is_some_and(|i| range.contains(i))
        && props.is_focusable()
    {
        return Some(active);
    }

    // Candidate order is sibling insertion order; `closest` resolves equal
    // distances in favor of the earlier entry.
    let candidates: Vec<i32> = children
        .iter()
        .filter_map(|child| {
            let props = tree.props(child)?;
            if props.is_focusable() || !tree.children_of(child).is_empty() {
                props.index
            } else {
                None
            }
        })
        .collect();
    if candidates.is_empty() {
        return None;
    }

    child_with_index(tree, id, closest(&candidates, index))
}

#[cfg(test)]
mod tests {
    use rove_tree::{ActionHandle, IndexRange, NodeProps, Tree};

    use super::{child_with_closest_index, child_with_index, child_with_matching_index_range};

    fn item(index: i32) -> NodeProps {
        NodeProps {
            index: Some(index),
            select_action: Some(ActionHandle(0)),
            ..NodeProps::default()
        }
    }

    fn spanning(low: i32, high: i32) -> NodeProps {
        NodeProps {
            index_range: Some(IndexRange::new(low, high)),
            select_action: Some(ActionHandle(0)),
            ..NodeProps::default()
        }
    }

    #[test]
    fn exact_index_lookup() {
        let mut tree = Tree::new();
        tree.insert(None, "row", NodeProps::default());
        tree.insert(Some("row"), "a", item(0));
        tree.insert(Some("row"), "b", item(2));

        assert_eq!(child_with_index(&tree, "row", 2), Some("b"));
        assert_eq!(child_with_index(&tree, "row", 1), None);
        assert_eq!(child_with_index(&tree, "a", 0), None);
    }

    #[test]
    fn range_match_takes_the_first_covering_child() {
        let mut tree = Tree::new();
        tree.insert(None, "grid", NodeProps::default());
        tree.insert(Some("grid"), "left", spanning(0, 1));
        tree.insert(Some("grid"), "wide", spanning(1, 3));
        tree.insert(Some("grid"), "plain", item(4));

        assert_eq!(child_with_matching_index_range(&tree, "grid", 0), Some("left"));
        assert_eq!(child_with_matching_index_range(&tree, "grid", 1), Some("left"));
        assert_eq!(child_with_matching_index_range(&tree, "grid", 3), Some("wide"));
        // An `index` alone never satisfies a range query.
        assert_eq!(child_with_matching_index_range(&tree, "grid", 4), None);
        assert_eq!(child_with_matching_index_range(&tree, "empty", 0), None);
    }

    #[test]
    fn nearest_index_wins() {
        let mut tree = Tree::new();
        tree.insert(None, "row", NodeProps::default());
        tree.insert(Some("row"), "x", item(1));
        tree.insert(Some("row"), "y", item(5));
        tree.insert(Some("row"), "z", item(10));

        assert_eq!(child_with_closest_index(&tree, "row", 4, None), Some("y"));
        assert_eq!(child_with_closest_index(&tree, "row", 10, None), Some("z"));
    }

    #[test]
    fn equal_distances_resolve_to_the_earlier_sibling() {
        let mut tree = Tree::new();
        tree.insert(None, "row", NodeProps::default());
        tree.insert(Some("row"), "x", item(0));
        tree.insert(Some("row"), "y", item(2));
        tree.insert(Some("row"), "z", item(4));

        // 2 and 4 are both distance 1 from 3; "y" was registered first.
        assert_eq!(child_with_closest_index(&tree, "row", 3, None), Some("y"));
    }

    #[test]
    fn aligned_active_child_short_circuits_candidate_evaluation() {
        let mut tree = Tree::new();
        tree.insert(None, "rows", NodeProps::default());
        tree.insert(Some("rows"), "near", item(0));
        tree.insert(Some("rows"), "far", item(2));
        tree.set_active_child("rows", "far");

        // Without the shortcut the nearest index to 0 is "near"; the aligned
        // range keeps the user's lateral position on "far".
        let range = IndexRange::new(2, 2);
        assert_eq!(child_with_closest_index(&tree, "rows", 0, Some(range)), Some("far"));
        assert_eq!(child_with_closest_index(&tree, "rows", 0, None), Some("near"));
    }

    #[test]
    fn aligned_shortcut_needs_the_active_index_inside_the_span() {
        let mut tree = Tree::new();
        tree.insert(None, "rows", NodeProps::default());
        tree.insert(Some("rows"), "near", item(0));
        tree.insert(Some("rows"), "far", item(5));
        tree.set_active_child("rows", "far");

        let range = IndexRange::new(1, 3);
        assert_eq!(child_with_closest_index(&tree, "rows", 0, Some(range)), Some("near"));
    }

    #[test]
    fn aligned_shortcut_needs_a_focusable_active_child() {
        let mut tree = Tree::new();
        tree.insert(None, "rows", NodeProps::default());
        tree.insert(Some("rows"), "near", item(0));
        tree.insert(
            Some("rows"),
            "husk",
            NodeProps {
                index: Some(2),
                ..NodeProps::default()
            },
        );
        tree.set_active_child("rows", "husk");

        // The active child sits inside the span but is not focusable, so the
        // nearest-index path runs; "husk" is no candidate either.
        let range = IndexRange::new(2, 2);
        assert_eq!(child_with_closest_index(&tree, "rows", 2, Some(range)), Some("near"));
    }

    #[test]
    fn containers_count_as_candidates_without_being_focusable() {
        let mut tree = Tree::new();
        tree.insert(None, "row", NodeProps::default());
        tree.insert(Some("row"), "leafless", item(0));
        tree.insert(
            Some("row"),
            "section",
            NodeProps {
                index: Some(3),
                ..NodeProps::default()
            },
        );
        tree.insert(Some("section"), "inner", item(0));

        // "leafless" is focusable, "section" qualifies through its child.
        assert_eq!(child_with_closest_index(&tree, "row", 3, None), Some("section"));
    }

    #[test]
    fn no_children_and_no_candidates_degrade_to_none() {
        let mut tree = Tree::new();
        tree.insert(None, "row", NodeProps::default());
        assert_eq!(child_with_closest_index(&tree, "row", 0, None), None);

        // A child that is neither focusable nor a container is no candidate,
        // and one without an index contributes nothing.
        tree.insert(
            Some("row"),
            "husk",
            NodeProps {
                index: Some(1),
                ..NodeProps::default()
            },
        );
        tree.insert(
            Some("row"),
            "unindexed",
            NodeProps {
                select_action: Some(ActionHandle(0)),
                ..NodeProps::default()
            },
        );
        assert_eq!(child_with_closest_index(&tree, "row", 0, None), None);
        assert_eq!(child_with_closest_index(&tree, "missing", 0, None), None);
    }
}
