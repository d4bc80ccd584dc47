//! Error types for feedbrief operations.
//!
//! This module defines the main error type [`FeedbriefError`] which represents
//! everything that can go wrong while loading entries, fetching article pages,
//! and extracting their text.
//!
//! Most of the resolution pipeline is best-effort: [`crate::fetch_full_content`]
//! and [`crate::Resolver::resolve`] swallow these errors and fall back to the
//! content already at hand. The typed errors are still surfaced by the lower
//! level functions so callers can inspect what happened.
//!
//! # Example
//!
//! ```rust
//! use feedbrief_core::{FeedbriefError, extract_main_text, ExtractConfig};
//!
//! let html = "<html><body><article><p>Short</p></article></body></html>";
//! match extract_main_text(html, &ExtractConfig::default()) {
//!     Err(FeedbriefError::ContentTooShort { length, minimum }) => {
//!         assert!(length <= minimum);
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for entry resolution operations.
#[derive(Error, Debug)]
pub enum FeedbriefError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// The server answered with a non-success status code.
    #[error("HTTP status {status}")]
    HttpStatus { status: u16 },

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed or is not http(s).
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors, usually an invalid CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// No element of the page could serve as a content region.
    #[error("No content could be extracted from the document")]
    NoContent,

    /// A content region was found but its text is too short to be an article.
    #[error("Extracted content too short ({length} chars, need more than {minimum})")]
    ContentTooShort { length: usize, minimum: usize },

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File or stream I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Entry JSON could not be decoded.
    #[error("Invalid entries JSON: {0}")]
    InvalidEntries(#[from] serde_json::Error),
}

/// Result type alias for FeedbriefError.
pub type Result<T> = std::result::Result<T, FeedbriefError>;
