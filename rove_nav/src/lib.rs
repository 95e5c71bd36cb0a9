// Copyright 2026 the Rove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=rove_nav --heading-base-level=0

//! Rove Nav: directional focus navigation primitives.
//!
//! This crate is the resolution half of a focus-navigation core for
//! remote-control-driven interfaces: given a `rove_tree` focus tree and a
//! directional input, it decides *where* focus should move. It never decides
//! *when* — the stateful engine that owns the tree does — and it never
//! mutates anything.
//!
//! - **Direction model**: [`Direction`] navigation intents (arrows plus the
//!   `"*"` wildcard), parsed case-insensitively from host strings, and the
//!   [`direction_matches_orientation`] axis predicate.
//! - **Nearest-value resolver**: [`closest`], the order-sensitive numeric
//!   nearest-match primitive.
//! - **Index resolver**: [`child_with_index`],
//!   [`child_with_matching_index_range`], and [`child_with_closest_index`] —
//!   the algorithm that picks which indexed child of a container receives
//!   focus, including index spans for grid cells and the index-aligned
//!   shortcut that preserves the active descendant's lateral position.
//! - **Key lookup seam**: [`KeyMap`], the read-only key-code → direction
//!   table interface the host populates.
//!
//! ## Minimal example
//!
//! A horizontal rail of two items; moving toward index 1 lands on the
//! nearest indexed child, and the earlier sibling wins the tie:
//!
//! ```rust
//! use rove_nav::child_with_closest_index;
//! use rove_tree::{ActionHandle, NodeProps, Tree};
//!
//! let mut tree = Tree::new();
//! tree.insert(None, "rail", NodeProps::default());
//! tree.insert(
//!     Some("rail"),
//!     "home",
//!     NodeProps {
//!         index: Some(0),
//!         select_action: Some(ActionHandle(1)),
//!         ..NodeProps::default()
//!     },
//! );
//! tree.insert(
//!     Some("rail"),
//!     "search",
//!     NodeProps {
//!         index: Some(2),
//!         select_action: Some(ActionHandle(2)),
//!         ..NodeProps::default()
//!     },
//! );
//!
//! assert_eq!(child_with_closest_index(&tree, "rail", 1, None), Some("home"));
//! ```
//!
//! ## Degradation, not errors
//!
//! Expected "not found" conditions — no children, no candidates, unmapped key
//! codes, unparseable labels — degrade to `None`/`false` rather than raising.
//! The one exception is [`closest`] on an empty sequence, which is a caller
//! contract violation and panics; see its docs.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod closest;
mod keymap;
mod resolve;

pub use closest::closest;
pub use keymap::KeyMap;
pub use resolve::{child_with_closest_index, child_with_index, child_with_matching_index_range};

use rove_tree::Orientation;

/// Requested focus movement derived from input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Move focus upward.
    Up,
    /// Move focus downward.
    Down,
    /// Move focus to the left.
    Left,
    /// Move focus to the right.
    Right,
    /// The `"*"` wildcard: matches any orientation unconditionally. Hosts use
    /// it for inputs (for example select/enter) that should reach a container
    /// regardless of its axis.
    Any,
}

impl Direction {
    /// Parse a host-supplied direction name, case-insensitively.
    ///
    /// `"*"` parses to [`Direction::Any`]; unrecognized names (the empty
    /// string included) yield `None`, which
    /// [`direction_matches_orientation`] treats as "matches nothing".
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name == "*" {
            Some(Self::Any)
        } else if name.eq_ignore_ascii_case("up") {
            Some(Self::Up)
        } else if name.eq_ignore_ascii_case("down") {
            Some(Self::Down)
        } else if name.eq_ignore_ascii_case("left") {
            Some(Self::Left)
        } else if name.eq_ignore_ascii_case("right") {
            Some(Self::Right)
        } else {
            None
        }
    }

    /// Conventional upper-case wire name (`"UP"`, `"DOWN"`, `"LEFT"`,
    /// `"RIGHT"`, `"*"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Any => "*",
        }
    }
}

/// Whether a directional input travels along a container's axis.
///
/// `false` when either side is absent — an unlabeled container matches no
/// direction, and an unparseable direction matches no axis. Otherwise
/// [`Direction::Any`] matches unconditionally, `Vertical` matches
/// `Up`/`Down`, and `Horizontal` matches `Left`/`Right`.
#[must_use]
pub fn direction_matches_orientation(
    orientation: Option<Orientation>,
    direction: Option<Direction>,
) -> bool {
    let (Some(orientation), Some(direction)) = (orientation, direction) else {
        return false;
    };
    match direction {
        Direction::Any => true,
        Direction::Up | Direction::Down => orientation == Orientation::Vertical,
        Direction::Left | Direction::Right => orientation == Orientation::Horizontal,
    }
}

#[cfg(test)]
mod tests {
    use rove_tree::Orientation;

    use super::{Direction, direction_matches_orientation};

    #[test]
    fn direction_names_parse_case_insensitively() {
        assert_eq!(Direction::from_name("up"), Some(Direction::Up));
        assert_eq!(Direction::from_name("DOWN"), Some(Direction::Down));
        assert_eq!(Direction::from_name("Left"), Some(Direction::Left));
        assert_eq!(Direction::from_name("right"), Some(Direction::Right));
        assert_eq!(Direction::from_name("*"), Some(Direction::Any));
        assert_eq!(Direction::from_name("enter"), None);
        assert_eq!(Direction::from_name(""), None);
    }

    #[test]
    fn vertical_matches_up_and_down_only() {
        let vertical = Some(Orientation::Vertical);
        assert!(direction_matches_orientation(vertical, Some(Direction::Up)));
        assert!(direction_matches_orientation(vertical, Some(Direction::Down)));
        assert!(!direction_matches_orientation(vertical, Some(Direction::Left)));
        assert!(!direction_matches_orientation(vertical, Some(Direction::Right)));
    }

    #[test]
    fn horizontal_matches_left_and_right_only() {
        let horizontal = Some(Orientation::Horizontal);
        assert!(direction_matches_orientation(horizontal, Some(Direction::Left)));
        assert!(direction_matches_orientation(horizontal, Some(Direction::Right)));
        assert!(!direction_matches_orientation(horizontal, Some(Direction::Up)));
    }

    #[test]
    fn wildcard_matches_any_present_orientation() {
        assert!(direction_matches_orientation(Some(Orientation::Vertical), Some(Direction::Any)));
        assert!(direction_matches_orientation(Some(Orientation::Horizontal), Some(Direction::Any)));
    }

    #[test]
    fn absent_sides_match_nothing() {
        assert!(!direction_matches_orientation(None, Some(Direction::Up)));
        assert!(!direction_matches_orientation(Some(Orientation::Vertical), None));
        assert!(!direction_matches_orientation(None, Some(Direction::Any)));
        assert!(!direction_matches_orientation(None, None));
        // Unparseable host strings arrive here as `None`.
        assert!(!direction_matches_orientation(
            Orientation::from_name(""),
            Direction::from_name("up")
        ));
    }

    #[test]
    fn wire_names_round_trip() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
            Direction::Any,
        ] {
            assert_eq!(Direction::from_name(direction.as_str()), Some(direction));
        }
    }
}
