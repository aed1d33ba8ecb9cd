use thiserror::Error;

use super::TokenId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MineError {
    /// A tree path holds a token the label map does not know. Only possible if
    /// the tree was mined from a universe inconsistent with the labels.
    #[error("no label for token id {token}")]
    MissingLabel { token: TokenId },

    #[error("unknown strategy '{0}', expected 'intersection' or 'subtraction'")]
    UnknownStrategy(String),
}

pub type Result<T, E = MineError> = std::result::Result<T, E>;
