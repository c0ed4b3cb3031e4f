//! Stable error codes surfaced to callers and logs.

pub const INVALID_MASS_TRIPLE: &str = "invalid_mass_triple";
pub const MASS_FUNCTION_INVARIANT: &str = "mass_function_invariant";
pub const EMPTY_INPUT: &str = "empty_input";
pub const MISSING_ATTRIBUTE: &str = "missing_attribute";
pub const NO_CANDIDATES: &str = "no_candidates";
pub const DUPLICATE_CANDIDATE: &str = "duplicate_candidate";
pub const TOTAL_CONFLICT: &str = "total_conflict";
pub const CONFIG_ERROR: &str = "config_error";

/// Maps an error to its stable code.
pub trait GeomatchErrorCode {
    fn error_code(&self) -> &'static str;
}
