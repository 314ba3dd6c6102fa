//! Strings used in SDP grammar error messages.

pub const GRAMMAR_ERROR: &str = "GrammarError";
pub const INVALID_PATTERN_ERROR: &str = "pattern does not compile";
pub const CAPTURE_COUNT_ERROR: &str = "capture group count does not match field names";
pub const FIELD_TYPE_COUNT_ERROR: &str = "field type count does not match field names";
pub const DUPLICATE_FIELD_ERROR: &str = "duplicated field name";
pub const UNNAMED_SCALAR_ERROR: &str = "scalar rule without a name";
