pub const TEXT_PARAM: &str = "text";
pub const WORD_PARAM: &str = "word";
pub const N_PARAM: &str = "n";

pub const MISSING_REQUEST_PARAMETER_ERROR: &str = "Missing Request Parameter";
pub const CONSTRAINT_VIOLATION_ERROR: &str = "Constraint Violation";
pub const METHOD_ARGUMENT_TYPE_MISMATCH_ERROR: &str = "Method Argument Type Mismatch";
pub const NOT_FOUND_ERROR: &str = "Not Found";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Server-side failures never echo their cause back to the caller.
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "An unexpected error occurred";
