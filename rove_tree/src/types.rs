// Copyright 2026 the Rove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the focus tree: node properties, behavior flags, index spans.

/// Opaque handle to a host-side action or callback.
///
/// This is a small, copyable handle the host uses to attach select actions and
/// enter/leave callbacks to nodes without this crate knowing their shape. The
/// host is responsible for managing the meaning and lifecycle of individual
/// handles (for example via a slot map of closures or an enum-to-handle
/// mapping). The tree never invokes anything behind a handle; the navigation
/// engine that owns focus state does.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ActionHandle(pub u64);

/// Axis a container node navigates along.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Children are stacked top-to-bottom; `up`/`down` moves between them.
    Vertical,
    /// Children are laid out left-to-right; `left`/`right` moves between them.
    Horizontal,
}

impl Orientation {
    /// Parse a host-supplied axis label, case-insensitively.
    ///
    /// Unrecognized labels yield `None`, which downstream predicates treat as
    /// "matches no direction".
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("vertical") {
            Some(Self::Vertical)
        } else if name.eq_ignore_ascii_case("horizontal") {
            Some(Self::Horizontal)
        } else {
            None
        }
    }
}

/// Inclusive span of sibling indices a single node stands in for.
///
/// Lets one node represent several sibling positions, for example a grid row
/// spanning multiple column indices. Both bounds are inclusive and `low`
/// must not exceed `high`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct IndexRange {
    /// Lowest index covered by the span.
    pub low: i32,
    /// Highest index covered by the span (inclusive).
    pub high: i32,
}

impl IndexRange {
    /// Create a span covering `low..=high`.
    ///
    /// `low <= high` is a caller contract; it is checked in debug builds so
    /// misuse does not go unnoticed.
    #[must_use]
    pub fn new(low: i32, high: i32) -> Self {
        debug_assert!(
            low <= high,
            "IndexRange bounds must satisfy low <= high; got {low}..={high}"
        );
        Self { low, high }
    }

    /// Whether `index` falls inside the span, bounds included.
    #[must_use]
    pub fn contains(self, index: i32) -> bool {
        self.low <= index && index <= self.high
    }
}

bitflags::bitflags! {
    /// Node flags controlling navigation behavior.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Navigation past the last child wraps around to the first (and vice versa).
        const WRAPPING    = 0b0000_0001;
        /// Moves along the perpendicular axis keep the active descendant's
        /// index instead of recomputing the nearest one.
        const INDEX_ALIGN = 0b0000_0010;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Per-node navigation properties supplied by the host.
///
/// All fields are optional; a default `NodeProps` is a plain container that is
/// not itself focusable. Structural data (parent, children, active child)
/// lives in the [`Tree`](crate::Tree), not here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeProps {
    /// Position among siblings, used for directional distance comparisons.
    pub index: Option<i32>,
    /// Inclusive span of sibling indices this node stands in for.
    pub index_range: Option<IndexRange>,
    /// Axis this container navigates along.
    pub orientation: Option<Orientation>,
    /// Explicit focusability override. When set it is authoritative; an
    /// explicit `false` wins over a present [`NodeProps::select_action`].
    pub focusable: Option<bool>,
    /// Handle to the host action fired when this node is selected. Its mere
    /// presence marks the node as a selection target.
    pub select_action: Option<ActionHandle>,
    /// Handle to a host callback fired when focus enters this node.
    pub on_enter: Option<ActionHandle>,
    /// Handle to a host callback fired when focus leaves this node.
    pub on_leave: Option<ActionHandle>,
    /// Wrapping and index-alignment behavior flags.
    pub flags: NodeFlags,
}

impl NodeProps {
    /// Whether this node can be the target of focus.
    ///
    /// The explicit [`NodeProps::focusable`] override wins when present;
    /// otherwise a node is focusable exactly when it carries a
    /// [`NodeProps::select_action`].
    #[must_use]
    pub fn is_focusable(&self) -> bool {
        self.focusable.unwrap_or(self.select_action.is_some())
    }
}
