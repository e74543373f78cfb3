use thiserror::Error;

/// Errors produced while constructing zippers, boards and rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A zipper must hold at least one value, so zero-length axes are rejected.
    #[error("cannot build an empty zipper")]
    Empty,

    #[error("invalid rule string {rule:?}: {reason}")]
    InvalidRule { rule: String, reason: &'static str },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
