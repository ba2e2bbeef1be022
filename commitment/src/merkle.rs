//! An append-only binary Merkle tree.
//!
//! All levels are stored in one flat vector, leaves first and the root last.
//! A level of odd length is completed with the null hash, which is
//! `C::Hash::default()`, before being compressed into its parent level.

use crate::error::MerkleError;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use core::{fmt, marker::PhantomData};
use kestrel_poseidon::CompressionFunction;
use kestrel_utils::serialization::SerdeAs;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

/// Decoding checks that the number of nodes matches the number of leaves,
/// the node values themselves are not recomputed.
#[serde_as]
#[derive(Serialize, Deserialize)]
#[serde(
    bound(
        serialize = "C::Hash: CanonicalSerialize",
        deserialize = "C::Hash: CanonicalDeserialize"
    ),
    try_from = "RawTree<C::Hash>"
)]
pub struct MerkleTree<C: CompressionFunction> {
    size: usize,
    #[serde_as(as = "Vec<SerdeAs>")]
    nodes: Vec<C::Hash>,
    #[serde(skip)]
    _compression: PhantomData<C>,
}

impl<C: CompressionFunction> MerkleTree<C> {
    pub fn new(leaves: &[C::Hash]) -> Self {
        let size = leaves.len();
        if size == 0 {
            return Self::default();
        }

        let mut nodes = Vec::with_capacity(2 * size + 1);
        nodes.extend_from_slice(leaves);
        let null = C::Hash::default();
        let mut start = 0;
        let mut len = size;
        while len > 1 {
            for i in (start..start + len).step_by(2) {
                let right = if i + 1 < start + len {
                    &nodes[i + 1]
                } else {
                    &null
                };
                let parent = C::compress(&nodes[i], right);
                nodes.push(parent);
            }
            start += len;
            len = len.div_ceil(2);
        }
        debug!("built a Merkle tree of {size} leaves and {} nodes", nodes.len());

        Self {
            size,
            nodes,
            _compression: PhantomData,
        }
    }

    /// The number of leaves
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn nodes(&self) -> &[C::Hash] {
        &self.nodes
    }

    pub fn root(&self) -> &C::Hash {
        // there is always at least the root
        &self.nodes[self.nodes.len() - 1]
    }

    /// The siblings on the path from leaf `index` to the root, bottom up.
    pub fn branch(&self, index: usize) -> Result<Vec<C::Hash>, MerkleError> {
        if index >= self.size {
            return Err(MerkleError::IndexOutOfRange {
                index,
                size: self.size,
            });
        }

        let mut branch = Vec::with_capacity(depth(self.size));
        let mut i = index;
        let mut start = 0;
        let mut len = self.size;
        while len > 1 {
            let sibling = i ^ 1;
            if sibling < len {
                branch.push(self.nodes[start + sibling].clone());
            } else {
                branch.push(C::Hash::default());
            }
            i >>= 1;
            start += len;
            len = len.div_ceil(2);
        }
        Ok(branch)
    }

    /// Recomputes the root from leaf `index` and its branch.
    pub fn root_of(index: usize, leaf: &C::Hash, branch: &[C::Hash]) -> C::Hash {
        let mut i = index;
        let mut hash = leaf.clone();
        for sibling in branch {
            hash = if i & 1 == 1 {
                C::compress(sibling, &hash)
            } else {
                C::compress(&hash, sibling)
            };
            i >>= 1;
        }
        hash
    }

    /// Checks that `leaf` is at `index` in this tree.
    pub fn verify(&self, index: usize, leaf: &C::Hash, branch: &[C::Hash]) -> bool {
        &Self::root_of(index, leaf, branch) == self.root()
    }
}

fn depth(size: usize) -> usize {
    (usize::BITS - size.leading_zeros()) as usize
}

/// The number of nodes of a tree with `size` leaves
fn node_count(size: usize) -> usize {
    let mut count = size;
    let mut len = size;
    while len > 1 {
        len = len.div_ceil(2);
        count += len;
    }
    count.max(1)
}

/// A tree as it is serialized, before its shape is checked
#[serde_as]
#[derive(Deserialize)]
#[serde(bound(deserialize = "H: CanonicalDeserialize"))]
struct RawTree<H> {
    size: usize,
    #[serde_as(as = "Vec<SerdeAs>")]
    nodes: Vec<H>,
}

impl<C: CompressionFunction> TryFrom<RawTree<C::Hash>> for MerkleTree<C> {
    type Error = MerkleError;

    fn try_from(raw: RawTree<C::Hash>) -> Result<Self, MerkleError> {
        let expected = node_count(raw.size);
        if raw.nodes.len() != expected {
            return Err(MerkleError::Malformed {
                size: raw.size,
                expected,
                actual: raw.nodes.len(),
            });
        }
        Ok(Self {
            size: raw.size,
            nodes: raw.nodes,
            _compression: PhantomData,
        })
    }
}

impl<C: CompressionFunction> Default for MerkleTree<C> {
    fn default() -> Self {
        Self {
            size: 0,
            nodes: vec![C::Hash::default()],
            _compression: PhantomData,
        }
    }
}

impl<C: CompressionFunction> Clone for MerkleTree<C> {
    fn clone(&self) -> Self {
        Self {
            size: self.size,
            nodes: self.nodes.clone(),
            _compression: PhantomData,
        }
    }
}

impl<C: CompressionFunction> fmt::Debug for MerkleTree<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerkleTree")
            .field("size", &self.size)
            .field("root", self.root())
            .finish()
    }
}

/// Trees are equal when their roots are.
impl<C: CompressionFunction> PartialEq for MerkleTree<C> {
    fn eq(&self, other: &Self) -> bool {
        self.root() == other.root()
    }
}
