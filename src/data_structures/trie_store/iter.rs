// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Lazy prefix enumeration for the trie store.

use std::iter::FusedIterator;

use super::node::{NodeId, TrieNode};

/// A pending node on the traversal stack.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeId,
    /// Symbol on the edge leading into `node`; `None` for the prefix node.
    symbol: Option<char>,
    /// Distance from the prefix node.
    depth: usize,
}

/// An iterator over the stored words that start with a prefix.
///
/// Words are produced depth-first with children visited in ascending
/// alphabetical order, so the output is sorted. The iterator borrows the
/// store and is cheap to clone; a clone restarts from the clone point.
#[derive(Debug, Clone)]
pub struct WordsWithPrefix<'a> {
    nodes: &'a [TrieNode],
    prefix_len: usize,
    buffer: String,
    stack: Vec<Frame>,
}

impl<'a> WordsWithPrefix<'a> {
    pub(super) fn new(nodes: &'a [TrieNode], prefix: &str, start: Option<NodeId>) -> Self {
        let stack = match start {
            Some(node) => vec![Frame {
                node,
                symbol: None,
                depth: 0,
            }],
            None => Vec::new(),
        };

        Self {
            nodes,
            prefix_len: prefix.len(),
            buffer: prefix.to_string(),
            stack,
        }
    }

    /// Yields `(word, frequency)` pairs instead of bare words.
    pub fn with_frequency(self) -> WordFrequencies<'a> {
        WordFrequencies { inner: self }
    }

    fn next_terminal(&mut self) -> Option<(String, &'a TrieNode)> {
        let nodes = self.nodes;
        while let Some(frame) = self.stack.pop() {
            match frame.symbol {
                Some(symbol) => {
                    self.buffer.truncate(self.prefix_len + frame.depth - 1);
                    self.buffer.push(symbol);
                }
                None => self.buffer.truncate(self.prefix_len),
            }

            let node = &nodes[frame.node.index()];

            // Reversed so the smallest symbol is popped first.
            self.stack.extend(node.children().rev().map(|(symbol, child)| Frame {
                node: child,
                symbol: Some(symbol),
                depth: frame.depth + 1,
            }));

            if node.is_terminal {
                return Some((self.buffer.clone(), node));
            }
        }
        None
    }
}

impl Iterator for WordsWithPrefix<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_terminal().map(|(word, _)| word)
    }
}

impl FusedIterator for WordsWithPrefix<'_> {}

/// An iterator over `(word, frequency)` pairs sharing a prefix.
///
/// Created by [`WordsWithPrefix::with_frequency`].
#[derive(Debug, Clone)]
pub struct WordFrequencies<'a> {
    inner: WordsWithPrefix<'a>,
}

impl Iterator for WordFrequencies<'_> {
    type Item = (String, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next_terminal()
            .map(|(word, node)| (word, node.frequency))
    }
}

impl FusedIterator for WordFrequencies<'_> {}
