// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Integration tests for the trie store and bigram model public API.

use lau_trie_lib::data_structures::{BigramModel, SuggestOptions, TrieStore, TrieStoreError};
use lau_trie_lib::loader::{load_bigrams, load_words, LoadOptions};
use std::io::Cursor;
use test_case::test_case;

/// Setup a store holding the reference word set
fn setup_store() -> TrieStore {
    let mut store = TrieStore::new();
    for word in ["apple", "app", "apps", "battle", "bat"] {
        store.insert(word).unwrap();
    }
    store
}

#[test_case("app", true ; "inserted word")]
#[test_case("apple", true ; "longer inserted word")]
#[test_case("appl", false ; "prefix only path")]
#[test_case("bats", false ; "extends past a leaf")]
#[test_case("c", false ; "missing branch")]
#[test_case("", false ; "empty word not inserted")]
fn test_search(word: &str, expected: bool) {
    assert_eq!(setup_store().search(word).unwrap(), expected);
}

#[test_case("appl", true ; "path through longer word")]
#[test_case("app", true ; "prefix that is itself a word")]
#[test_case("battle", true ; "full word")]
#[test_case("batt", true ; "inner prefix")]
#[test_case("battles", false ; "past the end")]
#[test_case("c", false ; "missing branch")]
#[test_case("", true ; "empty prefix")]
fn test_starts_with(prefix: &str, expected: bool) {
    assert_eq!(setup_store().starts_with(prefix).unwrap(), expected);
}

#[test_case("ap", &["app", "apple", "apps"] ; "shared prefix")]
#[test_case("bat", &["bat", "battle"] ; "prefix is a word")]
#[test_case("apple", &["apple"] ; "leaf word")]
#[test_case("c", &[] ; "no matches")]
#[test_case("", &["app", "apple", "apps", "bat", "battle"] ; "everything")]
fn test_words_with_prefix(prefix: &str, expected: &[&str]) {
    let store = setup_store();
    let words: Vec<String> = store.words_with_prefix(prefix).unwrap().collect();
    assert_eq!(words, expected);
}

#[test_case("Apple", 'A', 0 ; "uppercase")]
#[test_case("ap1", '1', 2 ; "digit")]
#[test_case("a-b", '-', 1 ; "punctuation")]
#[test_case("café", 'é', 3 ; "non ascii")]
fn test_invalid_symbols(word: &str, symbol: char, position: usize) {
    let mut store = setup_store();
    let expected = TrieStoreError::InvalidSymbol {
        word: word.to_string(),
        symbol,
        position,
    };

    assert_eq!(store.insert(word).unwrap_err(), expected);
    assert_eq!(store.search(word).unwrap_err(), expected);
    assert_eq!(store.starts_with(word).unwrap_err(), expected);
    assert!(store.words_with_prefix(word).is_err());
    assert_eq!(store.len(), 5);
}

#[test]
fn test_autocomplete_from_word_list() {
    let mut store = TrieStore::new();
    load_words(
        &mut store,
        Cursor::new("the 500\nthen 120\nthey 300\nthem 150\nthere 200\nthis 50\n"),
        LoadOptions::new(),
    )
    .unwrap();

    let options = SuggestOptions::default().with_limit(3);
    assert_eq!(
        store.autocomplete("the", &options).unwrap(),
        vec!["the", "they", "there"]
    );

    // "thw" has no completions; the fuzzy pass finds "th"-words.
    let fuzzy = store.autocomplete("thw", &options).unwrap();
    assert_eq!(fuzzy, vec!["the", "they", "there"]);
}

const PAIRS: &str = "\
i am 30
i have 12
am going 8
going to 20
to be 15
the apple 5
the answer 9
an apple 4
";

fn setup_model() -> BigramModel {
    let mut model = BigramModel::new();
    load_bigrams(&mut model, Cursor::new(PAIRS), LoadOptions::new()).unwrap();
    model
}

#[test_case("", &[] ; "empty input")]
#[test_case("i", &["am", "have"] ; "followers of a known word")]
#[test_case("b", &["be"] ; "completion of an unknown word")]
#[test_case("to", &["be"] ; "followers win over completions")]
#[test_case("the a", &["answer", "apple", "am"] ; "followers then completions")]
#[test_case("going to b", &["be"] ; "repeats are dropped")]
fn test_hybrid_predict(input: &str, expected: &[&str]) {
    let model = setup_model();
    assert_eq!(model.hybrid_predict(input, 5).unwrap(), expected);
}

#[test]
fn test_hybrid_predict_truncates_blend() {
    let model = setup_model();
    assert_eq!(model.hybrid_predict("the a", 1).unwrap(), vec!["answer"]);
}
