use thiserror::Error;

/// Failures surfaced by the sampling capability.
///
/// Running out of queue elements is not an error anywhere in this crate;
/// `remove` reports that with `None`.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// A contract-only trait method was invoked without an override.
    #[error("`{0}` is not implemented")]
    Unimplemented(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
