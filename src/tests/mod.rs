//! Test modules for the Lau trie.
//!
//! This module contains the crate-internal testing infrastructure:
//! - Property-based tests for the trie store using proptest
//! - Configuration loading and validation tests
//! - Error type and reporter tests
//! - Word-list loader tests
//! - Test fixtures and utilities

pub mod loader_tests;
