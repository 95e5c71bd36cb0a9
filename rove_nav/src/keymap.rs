// Copyright 2026 the Rove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key-code to direction lookup.

use hashbrown::HashMap;

use crate::Direction;

/// Host-populated mapping from input key codes to navigation directions.
///
/// The table contents are the host's concern — remote controls, set-top
/// boxes, and browsers disagree on codes — so this crate ships no default
/// bindings. Populate one at startup and consume it read-only per input:
///
/// ```rust
/// use rove_nav::{Direction, KeyMap};
///
/// let keys: KeyMap = [(38, Direction::Up), (40, Direction::Down)]
///     .into_iter()
///     .collect();
/// assert_eq!(keys.direction_for(38), Some(Direction::Up));
/// assert_eq!(keys.direction_for(13), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct KeyMap {
    bindings: HashMap<u32, Direction>,
}

impl KeyMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bound key codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no key codes are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bind `code` to `direction`, replacing any previous binding.
    pub fn bind(&mut self, code: u32, direction: Direction) {
        self.bindings.insert(code, direction);
    }

    /// Direction bound to `code`, or `None` for unmapped codes.
    ///
    /// [`Direction::as_str`] yields the conventional upper-case wire name
    /// when the host protocol wants one.
    #[must_use]
    pub fn direction_for(&self, code: u32) -> Option<Direction> {
        self.bindings.get(&code).copied()
    }
}

impl FromIterator<(u32, Direction)> for KeyMap {
    fn from_iter<I: IntoIterator<Item = (u32, Direction)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}
