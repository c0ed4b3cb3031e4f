pub mod error_code;
pub mod match_error;

pub use match_error::MatchError;
