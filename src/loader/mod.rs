//! Word-list and word-pair loading.
//!
//! Word lists are plain text with one entry per line: a word optionally
//! followed by whitespace and a frequency. Pair lists hold `prev next` with
//! an optional count. Blank lines and lines starting with `#` are ignored,
//! as are pair lines with fewer than two fields. A missing or non-numeric
//! frequency counts as 1.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::data_structures::{BigramModel, TrieStore, TrieStoreResult};
use crate::error::load::LoadError;
use crate::error::{error_reporter, ErrorContext, ErrorReporter};

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Options for loading a word list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Abort on the first invalid entry instead of skipping it
    pub strict: bool,
}

impl LoadOptions {
    /// Create options with lenient handling of invalid entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether invalid entries abort the load.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Outcome of a successful load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Entries inserted into the store, including repeats of stored words
    pub inserted: usize,

    /// Entries that were not stored before this load (new words or new pairs)
    pub new_words: usize,

    /// Invalid entries skipped in lenient mode
    pub skipped: usize,
}

/// A parsed word-list line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry<'a> {
    word: &'a str,
    frequency: u64,
}

/// A parsed pair-list line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PairEntry<'a> {
    prev: &'a str,
    next: &'a str,
    count: u64,
}

/// Splits a non-comment line into whitespace separated fields.
fn fields(line: &str) -> Option<std::str::SplitWhitespace<'_>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    Some(line.split_whitespace())
}

fn parse_count(field: Option<&str>) -> u64 {
    field.and_then(|count| count.parse::<u64>().ok()).unwrap_or(1)
}

fn parse_line(line: &str) -> Option<Entry<'_>> {
    let mut parts = fields(line)?;
    let word = parts.next()?;
    let frequency = parse_count(parts.next());

    Some(Entry { word, frequency })
}

fn parse_pair_line(line: &str) -> Option<PairEntry<'_>> {
    let mut parts = fields(line)?;
    let prev = parts.next()?;
    let next = parts.next()?;
    let count = parse_count(parts.next());

    Some(PairEntry { prev, next, count })
}

/// Feeds every line of `reader` to `insert`, applying the lenient or strict
/// policy to rejected entries. `insert` returns `None` for lines that hold
/// no entry.
fn load_lines<R, F>(
    reader: R,
    options: LoadOptions,
    reporter: &dyn ErrorReporter,
    mut insert: F,
) -> LoadResult<LoadSummary>
where
    R: BufRead,
    F: FnMut(&str) -> Option<TrieStoreResult<bool>>,
{
    let mut summary = LoadSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        let Some(outcome) = insert(&line) else {
            continue;
        };

        match outcome {
            Ok(is_new) => {
                summary.inserted += 1;
                if is_new {
                    summary.new_words += 1;
                }
            }
            Err(source) if options.strict => {
                return Err(LoadError::InvalidEntry {
                    line: line_number,
                    source,
                });
            }
            Err(source) => {
                tracing::warn!(line = line_number, error = %source, "Skipping list entry");
                reporter.report(
                    &ErrorContext::new(source, "loader").with_details(format!("line {line_number}")),
                );
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}

/// Loads a word list from `reader` into `store`, reporting skipped entries
/// through the global error reporter.
pub fn load_words<R: BufRead>(
    store: &mut TrieStore,
    reader: R,
    options: LoadOptions,
) -> LoadResult<LoadSummary> {
    load_words_with_reporter(store, reader, options, error_reporter())
}

/// Loads a word list from `reader` into `store`.
///
/// In lenient mode every rejected entry is passed to `reporter` and counted
/// as skipped. In strict mode the first rejected entry is returned as
/// [`LoadError::InvalidEntry`]; entries before it stay inserted.
pub fn load_words_with_reporter<R: BufRead>(
    store: &mut TrieStore,
    reader: R,
    options: LoadOptions,
    reporter: &dyn ErrorReporter,
) -> LoadResult<LoadSummary> {
    let summary = load_lines(reader, options, reporter, |line| {
        parse_line(line).map(|entry| store.insert_with_frequency(entry.word, entry.frequency))
    })?;

    tracing::info!(
        inserted = summary.inserted,
        new_words = summary.new_words,
        skipped = summary.skipped,
        "Word list loaded"
    );
    Ok(summary)
}

/// Loads a pair list from `reader` into `model`, reporting skipped entries
/// through the global error reporter.
pub fn load_bigrams<R: BufRead>(
    model: &mut BigramModel,
    reader: R,
    options: LoadOptions,
) -> LoadResult<LoadSummary> {
    load_bigrams_with_reporter(model, reader, options, error_reporter())
}

/// Loads a `prev next [count]` pair list from `reader` into `model`.
///
/// Rejected pairs follow the same lenient and strict rules as
/// [`load_words_with_reporter`].
pub fn load_bigrams_with_reporter<R: BufRead>(
    model: &mut BigramModel,
    reader: R,
    options: LoadOptions,
    reporter: &dyn ErrorReporter,
) -> LoadResult<LoadSummary> {
    let summary = load_lines(reader, options, reporter, |line| {
        parse_pair_line(line).map(|pair| model.record(pair.prev, pair.next, pair.count))
    })?;

    tracing::info!(
        inserted = summary.inserted,
        new_pairs = summary.new_words,
        skipped = summary.skipped,
        "Pair list loaded"
    );
    Ok(summary)
}

fn open_list(path: &Path, options: LoadOptions) -> LoadResult<BufReader<File>> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    tracing::debug!(?path, strict = options.strict, "Opening list file");
    Ok(BufReader::new(File::open(path)?))
}

/// Loads a word list file into `store`.
pub fn load_words_from_path<P: AsRef<Path>>(
    store: &mut TrieStore,
    path: P,
    options: LoadOptions,
) -> LoadResult<LoadSummary> {
    let reader = open_list(path.as_ref(), options)?;
    load_words(store, reader, options)
}

/// Loads a pair list file into `model`.
pub fn load_bigrams_from_path<P: AsRef<Path>>(
    model: &mut BigramModel,
    path: P,
    options: LoadOptions,
) -> LoadResult<LoadSummary> {
    let reader = open_list(path.as_ref(), options)?;
    load_bigrams(model, reader, options)
}
