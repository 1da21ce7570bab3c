//! Tests for word-list and pair-list loading.

use super::test_utils::TestFixture;
use crate::data_structures::{BigramModel, TrieStore, TrieStoreConfig, TrieStoreError};
use crate::error::load::LoadError;
use crate::error::MockErrorReporter;
use crate::loader::{
    load_bigrams, load_bigrams_from_path, load_bigrams_with_reporter, load_words,
    load_words_from_path, load_words_with_reporter, LoadOptions,
};
use std::io::Cursor;

const WORD_LIST: &str = "\
# fruit
apple 12
app 30

apps
Banana 4
bat 7 extra
";

const PAIR_LIST: &str = "\
# prev next count
i am 30
i have
going
i am 2
Going to 5
going to 20
";

/// Test lenient loading skips invalid entries and reports each one.
#[test]
fn test_lenient_load_reports_skipped_entries() {
    let mut reporter = MockErrorReporter::new();
    reporter
        .expect_report()
        .withf(|context| {
            context.component == "loader" && context.details.as_deref() == Some("line 6")
        })
        .times(1)
        .return_const(());

    let mut store = TrieStore::new();
    let summary = load_words_with_reporter(
        &mut store,
        Cursor::new(WORD_LIST),
        LoadOptions::new(),
        &reporter,
    )
    .unwrap();

    assert_eq!(summary.inserted, 4);
    assert_eq!(summary.new_words, 4);
    assert_eq!(summary.skipped, 1);

    assert_eq!(store.frequency("apple").unwrap(), Some(12));
    assert_eq!(store.frequency("app").unwrap(), Some(30));
    assert_eq!(store.frequency("apps").unwrap(), Some(1));
    assert_eq!(store.frequency("bat").unwrap(), Some(7));
    assert!(!store.search("banana").unwrap());
}

/// Test strict loading stops at the first invalid entry.
#[test]
fn test_strict_load_fails_on_invalid_entry() {
    let mut store = TrieStore::new();
    let err = load_words(
        &mut store,
        Cursor::new(WORD_LIST),
        LoadOptions::new().with_strict(true),
    )
    .unwrap_err();

    match err {
        LoadError::InvalidEntry { line, source } => {
            assert_eq!(line, 6);
            assert!(source.is_invalid_symbol());
        }
        other => panic!("unexpected error: {other}"),
    }

    // Entries before the invalid line stay inserted.
    assert_eq!(store.len(), 3);
    assert!(!store.search("bat").unwrap());
}

/// Test that repeated entries accumulate frequency without adding words.
#[test]
fn test_repeated_entries_accumulate() {
    let mut store = TrieStore::new();
    let summary = load_words(
        &mut store,
        Cursor::new("tea 2\ntea 3\ntea\n"),
        LoadOptions::new(),
    )
    .unwrap();

    assert_eq!(summary.inserted, 3);
    assert_eq!(summary.new_words, 1);
    assert_eq!(store.frequency("tea").unwrap(), Some(6));
}

/// Test that the store's word length limit applies while loading.
#[test]
fn test_load_respects_store_config() {
    let mut store = TrieStore::with_config(TrieStoreConfig::new().with_max_word_len(3));
    let err = load_words(
        &mut store,
        Cursor::new("cat\ncattle\n"),
        LoadOptions::new().with_strict(true),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        LoadError::InvalidEntry {
            line: 2,
            source: TrieStoreError::WordTooLong { len: 6, max_len: 3 },
        }
    ));
}

/// Test loading from a file on disk.
#[test]
fn test_load_from_path() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_file("words.txt", "bat\nbattle 3\n").unwrap();

    let mut store = TrieStore::new();
    let summary = load_words_from_path(&mut store, &path, LoadOptions::new()).unwrap();
    assert_eq!(summary.inserted, 2);

    let words: Vec<String> = store.words_with_prefix("bat").unwrap().collect();
    assert_eq!(words, vec!["bat", "battle"]);

    let missing = fixture.temp_dir.path().join("missing.txt");
    let err = load_words_from_path(&mut store, &missing, LoadOptions::new()).unwrap_err();
    assert!(matches!(err, LoadError::FileNotFound(path) if path == missing));
}

/// Test lenient pair loading records pairs and skips incomplete lines.
#[test]
fn test_lenient_bigram_load() {
    let mut reporter = MockErrorReporter::new();
    reporter
        .expect_report()
        .withf(|context| {
            context.component == "loader" && context.details.as_deref() == Some("line 6")
        })
        .times(1)
        .return_const(());

    let mut model = BigramModel::new();
    let summary = load_bigrams_with_reporter(
        &mut model,
        Cursor::new(PAIR_LIST),
        LoadOptions::new(),
        &reporter,
    )
    .unwrap();

    assert_eq!(summary.inserted, 4);
    assert_eq!(summary.new_words, 3);
    assert_eq!(summary.skipped, 1);

    assert_eq!(model.len(), 3);
    assert_eq!(model.pair_count("i", "am"), 32);
    assert_eq!(model.pair_count("i", "have"), 1);
    assert_eq!(model.pair_count("going", "to"), 20);
    assert_eq!(model.predict_next_word("i", 5), vec!["am", "have"]);
}

/// Test strict pair loading stops at the first invalid pair.
#[test]
fn test_strict_bigram_load_fails_on_invalid_pair() {
    let mut model = BigramModel::new();
    let err = load_bigrams(
        &mut model,
        Cursor::new(PAIR_LIST),
        LoadOptions::new().with_strict(true),
    )
    .unwrap_err();

    assert!(matches!(err, LoadError::InvalidEntry { line: 6, .. }));
    assert_eq!(model.pair_count("i", "am"), 32);
    assert_eq!(model.pair_count("going", "to"), 0);
}

/// Test loading pairs from a file and predicting from them.
#[test]
fn test_bigram_load_from_path() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("pairs.txt", "the answer 9\nthe apple 5\nan apple 4\n")
        .unwrap();

    let mut model = BigramModel::new();
    let summary = load_bigrams_from_path(&mut model, &path, LoadOptions::new()).unwrap();
    assert_eq!(summary.inserted, 3);
    assert_eq!(model.hybrid_predict("the a", 5).unwrap(), vec!["answer", "apple"]);

    let missing = fixture.temp_dir.path().join("missing.txt");
    let err = load_bigrams_from_path(&mut model, &missing, LoadOptions::new()).unwrap_err();
    assert!(matches!(err, LoadError::FileNotFound(path) if path == missing));
}
