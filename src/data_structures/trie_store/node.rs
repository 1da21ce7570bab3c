// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Node implementation for the trie store.
//!
//! Nodes live in an arena owned by [`super::TrieStore`] and refer to their
//! children by [`NodeId`]. Each node owns one slot per lowercase letter, so
//! walking the slots in order visits children alphabetically.

/// Number of symbols in the supported alphabet (`a..=z`).
pub const ALPHABET_SIZE: usize = 26;

/// Index of a node inside the store's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node, created with the store.
    pub const ROOT: NodeId = NodeId(0);

    /// Returns the arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Maps a character to its child slot, or `None` if it is outside the alphabet.
#[inline]
pub fn symbol_index(symbol: char) -> Option<usize> {
    if symbol.is_ascii_lowercase() {
        Some(symbol as usize - 'a' as usize)
    } else {
        None
    }
}

/// Maps a child slot back to its character.
#[inline]
pub fn index_symbol(index: usize) -> char {
    debug_assert!(index < ALPHABET_SIZE);
    (b'a' + index as u8) as char
}

/// A node in the trie store.
///
/// Each node represents a character in a word path. Terminal nodes mark
/// complete words and carry their accumulated frequency.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    /// Child slots indexed by symbol
    pub(crate) children: [Option<NodeId>; ALPHABET_SIZE],

    /// Whether this node represents the end of an inserted word
    pub is_terminal: bool,

    /// Accumulated insertion weight (zero unless terminal)
    pub frequency: u64,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the child reached through `index`, if any.
    #[inline]
    pub fn child(&self, index: usize) -> Option<NodeId> {
        self.children[index]
    }

    /// Iterates over existing children in ascending symbol order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (char, NodeId)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(i, child)| child.map(|id| (index_symbol(i), id)))
    }
}
