use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MerkleError {
    #[error("leaf index {index} is out of range for a tree of {size} leaves")]
    IndexOutOfRange { index: usize, size: usize },
    #[error("a tree of {size} leaves has {expected} nodes, not {actual}")]
    Malformed {
        size: usize,
        expected: usize,
        actual: usize,
    },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitmentError {
    #[error("the number of scalars ({0}) doesn't match the number of generators ({1})")]
    LengthMismatch(usize, usize),
}
