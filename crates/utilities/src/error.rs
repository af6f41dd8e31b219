use std::error::Error;

/// The error type used by the tools, any error can be converted into it with `?`.
pub type FaError = Box<dyn Error + Send + Sync>;
