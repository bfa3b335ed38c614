use thiserror::Error;

use crate::types::Identity;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("{pair_count} pairs do not fill a {cells}-card grid")]
    PairCountMismatch { pair_count: usize, cells: usize },
    #[error("identity {0:?} does not appear exactly twice")]
    UnpairedIdentity(Identity),
}

pub type Result<T> = core::result::Result<T, BoardError>;
