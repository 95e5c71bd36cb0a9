// Copyright 2026 the Rove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=rove_tree --heading-base-level=0

//! Rove Tree: an arena-backed focus tree for directional navigation.
//!
//! Rove Tree is the structural half of a focus-navigation core for
//! remote-control-driven interfaces. It models a hierarchy of focusable UI
//! regions and answers the structural questions a navigation engine asks:
//! membership, ancestry, flattening.
//!
//! - Represents nodes in a flat arena: a single id → record map in which
//!   `parent`, `children`, and the active child are plain id references, so
//!   membership and parent queries are O(1) and ownership never cycles.
//! - Carries per-node navigation data ([`NodeProps`]): sibling index, index
//!   spans ([`IndexRange`]), axis [`Orientation`], focusability, opaque host
//!   handles ([`ActionHandle`]) for select/enter/leave, and behavior
//!   [`NodeFlags`].
//! - Produces disposable flattened views ([`Tree::entries`] →
//!   [`NodeEntry`]) and dot-joined ancestry paths ([`Tree::path_of`]) with
//!   segment-membership tests ([`is_node_in_path`], [`is_node_in_paths`]).
//!
//! ## Where this fits
//!
//! A directional navigation stack splits in three: a stateful engine that
//! owns the live tree and focus state, this structural layer, and the pure
//! resolution algorithms in `rove_nav` that pick which child receives focus
//! for a direction. This crate never decides *where* focus goes and never
//! invokes host callbacks; it stores the data those layers read.
//!
//! ## Ordering matters
//!
//! Sibling order is insertion order, everywhere. Flattened views emit
//! children in it, and the nearest-index tie-break in `rove_nav` resolves
//! equal distances in favor of the earlier sibling, so the order nodes are
//! registered in is observable navigation behavior, not an implementation
//! detail.
//!
//! ## Example
//!
//! ```rust
//! use rove_tree::{is_node_in_path, NodeProps, Tree};
//!
//! let mut tree = Tree::new();
//! tree.insert(None, "root", NodeProps::default());
//! tree.insert(Some("root"), "menu", NodeProps::default());
//! tree.insert(Some("menu"), "item3", NodeProps::default());
//!
//! let path = tree.path_of("item3").unwrap();
//! assert_eq!(path, "root.menu.item3");
//! assert!(is_node_in_path(&path, "menu"));
//!
//! // Flattened views are depth-first pre-order snapshots.
//! let ids: Vec<_> = tree.entries().into_iter().map(|e| e.id).collect();
//! assert_eq!(ids, ["root", "menu", "item3"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod path;
mod tree;
mod types;

pub use path::{is_node_in_path, is_node_in_paths};
pub use tree::{NodeEntry, Tree};
pub use types::{ActionHandle, IndexRange, NodeFlags, NodeProps, Orientation};
