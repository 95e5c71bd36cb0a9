// Copyright 2026 the Rove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ancestry-path membership: matching a node id against dot-joined paths.
//!
//! A path is a `'.'`-delimited string encoding an ancestry chain from a root
//! to a node, for example `"root.menu.item3"` (see
//! [`Tree::path_of`](crate::Tree::path_of)). Membership is decided by
//! delimiter scanning, not by parsing the path into segments, so a node id
//! that itself contains `'.'` can produce false positives or negatives. Ids
//! are expected to be dot-free; this module does not enforce that.

/// Whether `node_id` appears as a segment of the ancestry `path`.
///
/// True when the path starts with `"<id>."`, ends with `".<id>"`, or contains
/// `".<id>."`. A path equal to the bare id matches none of the three forms;
/// membership implies the path has at least two segments.
#[must_use]
pub fn is_node_in_path(path: &str, node_id: &str) -> bool {
    let leads = path
        .strip_prefix(node_id)
        .is_some_and(|rest| rest.starts_with('.'));
    let trails = path
        .strip_suffix(node_id)
        .is_some_and(|rest| rest.ends_with('.'));
    let interior = path.match_indices(node_id).any(|(at, hit)| {
        path[..at].ends_with('.') && path[at + hit.len()..].starts_with('.')
    });
    leads || trails || interior
}

/// Whether `node_id` appears as a segment of any of the given paths.
#[must_use]
pub fn is_node_in_paths<I, S>(paths: I, node_id: &str) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paths
        .into_iter()
        .any(|path| is_node_in_path(path.as_ref(), node_id))
}
