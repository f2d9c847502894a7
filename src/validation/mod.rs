mod errors;
mod filter;
mod validator;

pub use errors::ValidationError;
pub use filter::{amount_range, available_regions, validate_and_filter, FilterOptions, FilterSummary, ValidationOutcome};
pub use validator::validate;
