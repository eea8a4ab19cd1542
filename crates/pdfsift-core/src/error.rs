//! Error types for pdfsift.
//!
//! Uses [`thiserror`] for error derivation. [`Error`] covers every failure the
//! query and table layers can report; [`SourceError`] is what a content
//! extractor returns and is carried through unchanged.

use thiserror::Error;

/// Errors reported by the upstream content extractor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    /// The source could not be parsed as a PDF (or pre-extracted layout).
    #[error("parse error: {0}")]
    Parse(String),

    /// Error reading the source.
    #[error("I/O error: {0}")]
    Io(String),

    /// The document is encrypted and no password was supplied.
    #[error("a password is required to open this document")]
    PasswordRequired,

    /// The supplied password was rejected.
    #[error("invalid password")]
    InvalidPassword,

    /// The document forbids text extraction.
    #[error("text extraction is not allowed for this document")]
    ExtractionNotAllowed,
}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        SourceError::Io(err.to_string())
    }
}

/// Error type for document construction, querying and table extraction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A bounding box with inverted coordinates.
    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// Font mapping configuration error (duplicate key, bad pattern).
    #[error("font mapping error: {0}")]
    FontMapping(String),

    /// A custom ordering did not return a permutation of its input.
    #[error("invalid element ordering: {0}")]
    InvalidElementOrdering(String),

    #[error("no element found")]
    NoElementFound,

    #[error("multiple elements found ({0})")]
    MultipleElementsFound(usize),

    /// Sequence navigation stepped outside the list.
    #[error("requested element is out of range")]
    ElementOutOfRange,

    #[error("invalid section: {0}")]
    InvalidSection(String),

    #[error("could not find section with name {0}")]
    SectionNotFound(String),

    #[error("page {0} not found")]
    PageNotFound(usize),

    /// Set operation between lists of different documents.
    #[error("element lists belong to different documents")]
    IncompatibleDocuments,

    /// A table cell is empty and gaps are not allowed.
    #[error("table gap at row {row}, column {column}")]
    TableGap { row: usize, column: usize },

    /// The reference-derived grid did not place every input element exactly once.
    #[error(
        "table has {placed} placed cells but {expected} input elements; the reference element may not be in the first row and column"
    )]
    TableReferenceMismatch { placed: usize, expected: usize },

    /// An element spans more than one row (merged cell).
    #[error("element {0} is in multiple rows")]
    ElementInMultipleRows(usize),

    /// An element spans more than one column (merged cell).
    #[error("element {0} is in multiple columns")]
    ElementInMultipleColumns(usize),

    /// Generic table extraction failure, e.g. two elements in one cell.
    #[error("table extraction error: {0}")]
    TableExtraction(String),

    #[error("invalid table: {0}")]
    InvalidTable(String),

    #[error("invalid table header: {0}")]
    InvalidTableHeader(String),

    /// Error from the upstream extractor, unchanged.
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Result alias used throughout pdfsift.
pub type Result<T> = std::result::Result<T, Error>;
