//! Error module for the Lau trie.
//!
//! This module provides the error handling framework for the crate,
//! following Rust's idiomatic error handling patterns with explicit error types,
//! proper error propagation, and helpful context information.

use once_cell::sync::OnceCell;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use thiserror::Error;

pub use crate::data_structures::TrieStoreError;

pub mod config;
pub mod load;

/// Result type alias used throughout the crate.
pub type LauResult<T> = Result<T, LauError>;

/// Core error enum for the Lau trie.
#[derive(Error, Debug)]
pub enum LauError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by the trie store itself.
    #[error("Trie error: {0}")]
    Trie(#[from] TrieStoreError),

    /// Errors raised while loading word lists.
    #[error("Load error: {0}")]
    Load(#[from] load::LoadError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: LauError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<E, S>(error: E, component: S) -> Self
    where
        E: Into<LauError>,
        S: Into<String>,
    {
        Self {
            error: error.into(),
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
#[cfg_attr(test, mockall::automock)]
pub trait ErrorReporter {
    /// Report an error with context.
    fn report(&self, context: &ErrorContext);
}

/// A simple error reporter implementation that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: &ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Reporter used when no global reporter has been installed.
#[derive(Default, Debug)]
pub struct StderrErrorReporter;

impl ErrorReporter for StderrErrorReporter {
    fn report(&self, context: &ErrorContext) {
        eprintln!("Error: {context}");
    }
}

type SharedReporter = Arc<dyn ErrorReporter + Send + Sync>;

/// Global error reporter, set at most once.
static ERROR_REPORTER: OnceCell<SharedReporter> = OnceCell::new();

/// Set the global error reporter.
///
/// Returns `false` if a reporter was already installed; the existing one is kept.
pub fn set_error_reporter(reporter: SharedReporter) -> bool {
    let installed = ERROR_REPORTER.set(reporter).is_ok();
    if !installed {
        tracing::warn!("Error reporter was already initialized, ignoring new reporter");
    }
    installed
}

/// Get the global error reporter, falling back to standard error output.
pub fn error_reporter() -> &'static dyn ErrorReporter {
    static FALLBACK: StderrErrorReporter = StderrErrorReporter;
    match ERROR_REPORTER.get() {
        Some(reporter) => reporter.as_ref(),
        None => &FALLBACK,
    }
}

/// Report an error through the global error reporter.
pub fn report_error(context: ErrorContext) {
    error_reporter().report(&context);
}
