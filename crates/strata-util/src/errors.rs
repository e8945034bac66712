use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all strata operations.
#[derive(Debug, Error, Diagnostic)]
pub enum StrataError {
    /// A caller supplied a malformed value (coordinate text, duration unit,
    /// out-of-range amount).
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A mutation was attempted after the owning configuration was frozen.
    #[error("Mutation not allowed: {message}")]
    #[diagnostic(help("Resolution strategies cannot be changed once the configuration has been resolved"))]
    MutationNotAllowed { message: String },

    /// Invalid or malformed declarative resolution configuration.
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check the [resolution] block for syntax errors"))]
    Config { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type StrataResult<T> = miette::Result<T>;
