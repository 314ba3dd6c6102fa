use crate::protocols::sdp::sdp_consts::error_consts::{
    CAPTURE_COUNT_ERROR, DUPLICATE_FIELD_ERROR, FIELD_TYPE_COUNT_ERROR, GRAMMAR_ERROR,
    INVALID_PATTERN_ERROR, UNNAMED_SCALAR_ERROR,
};
use thiserror::Error;

/// Contract violations in a grammar table. These are programming errors in
/// static configuration, detected once when the table is built.
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("{}: {} [{tag}={pattern}]: {source}", GRAMMAR_ERROR, INVALID_PATTERN_ERROR)]
    InvalidPattern {
        tag: char,
        pattern: &'static str,
        source: regex::Error,
    },
    #[error(
        "{}: {} [{tag}={pattern}] captures:{captures} fields:{fields}",
        GRAMMAR_ERROR,
        CAPTURE_COUNT_ERROR
    )]
    CaptureCountMismatch {
        tag: char,
        pattern: &'static str,
        captures: usize,
        fields: usize,
    },
    #[error(
        "{}: {} [{tag}={pattern}] types:{types} fields:{fields}",
        GRAMMAR_ERROR,
        FIELD_TYPE_COUNT_ERROR
    )]
    FieldTypeCountMismatch {
        tag: char,
        pattern: &'static str,
        types: usize,
        fields: usize,
    },
    #[error("{}: {} \"{field}\" [{tag}={pattern}]", GRAMMAR_ERROR, DUPLICATE_FIELD_ERROR)]
    DuplicateField {
        tag: char,
        pattern: &'static str,
        field: &'static str,
    },
    #[error("{}: {} [{tag}={pattern}]", GRAMMAR_ERROR, UNNAMED_SCALAR_ERROR)]
    UnnamedScalar { tag: char, pattern: &'static str },
}
