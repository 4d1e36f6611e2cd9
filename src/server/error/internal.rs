use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A monetary computation left the range of `i64` cents.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Amount overflow while computing {0}")]
    AmountOverflow(&'static str),
}
