use kestrel_commitment::{MerkleError, MerkleTree};
use kestrel_curves::fields::PervushinField;
use kestrel_poseidon::{pervushin::JivePervushin, CompressionFunction};
use proptest::prelude::*;

type Z = PervushinField;
type Hash = [Z; 4];
type Tree = MerkleTree<JivePervushin>;

fn leaves(n: usize, seed: u64) -> Vec<Hash> {
    (0..n as u64)
        .map(|i| core::array::from_fn(|j| Z::from(seed.wrapping_add(4 * i + j as u64))))
        .collect()
}

#[test]
fn test_empty_tree() {
    let _ = env_logger::builder().is_test(true).try_init();

    let tree = Tree::new(&[]);
    assert_eq!(tree.size(), 0);
    assert_eq!(tree.root(), &Hash::default());
    assert_eq!(tree, Tree::default());
    assert_eq!(
        tree.branch(0),
        Err(MerkleError::IndexOutOfRange { index: 0, size: 0 })
    );
}

#[test]
fn test_two_leaves() {
    let leaves = leaves(2, 100);
    let tree = Tree::new(&leaves);
    let root = JivePervushin::compress(&leaves[0], &leaves[1]);
    assert_eq!(tree.root(), &root);
    assert_eq!(tree.nodes(), &[leaves[0], leaves[1], root]);
    assert_eq!(tree.branch(1), Ok(vec![leaves[0]]));
}

#[test]
fn test_odd_level_is_padded_with_null() {
    let leaves = leaves(3, 7);
    let tree = Tree::new(&leaves);
    let left = JivePervushin::compress(&leaves[0], &leaves[1]);
    let right = JivePervushin::compress(&leaves[2], &Hash::default());
    assert_eq!(tree.root(), &JivePervushin::compress(&left, &right));
    assert_eq!(tree.nodes().len(), 6);
    assert_eq!(tree.branch(2), Ok(vec![Hash::default(), left]));
}

#[test]
fn test_branch_for_another_index_fails() {
    let leaves = leaves(6, 1);
    let tree = Tree::new(&leaves);
    let branch = tree.branch(3).unwrap();
    assert!(tree.verify(3, &leaves[3], &branch));
    assert!(!tree.verify(2, &leaves[3], &branch));
    assert!(!tree.verify(3, &leaves[2], &branch));
    assert_eq!(
        tree.branch(6),
        Err(MerkleError::IndexOutOfRange { index: 6, size: 6 })
    );
}

#[test]
fn test_serde_roundtrip() {
    let tree = Tree::new(&leaves(5, 42));
    let json = serde_json::to_string(&tree).unwrap();
    let decoded: Tree = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.size(), 5);
    assert_eq!(decoded.nodes(), tree.nodes());
}

#[test]
fn test_decoding_checks_the_shape() {
    let err = serde_json::from_str::<Tree>(r#"{"size":0,"nodes":[]}"#).unwrap_err();
    assert!(err.to_string().contains("a tree of 0 leaves has 1 nodes, not 0"));

    let tree = Tree::new(&leaves(2, 3));
    let json = serde_json::to_string(&tree).unwrap();
    assert!(json.starts_with(r#"{"size":2,"#));
    let resized = json.replacen(r#""size":2"#, r#""size":9"#, 1);
    let err = serde_json::from_str::<Tree>(&resized).unwrap_err();
    assert!(err.to_string().contains("a tree of 9 leaves has 20 nodes, not 3"));

    // a well-formed empty tree still decodes
    let empty = serde_json::to_string(&Tree::default()).unwrap();
    let decoded: Tree = serde_json::from_str(&empty).unwrap();
    assert_eq!(decoded.root(), &Hash::default());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn every_branch_recomputes_the_root(n in 1usize..20, seed in any::<u64>()) {
        let leaves = leaves(n, seed);
        let tree = Tree::new(&leaves);
        prop_assert_eq!(tree.size(), n);
        for (i, leaf) in leaves.iter().enumerate() {
            let branch = tree.branch(i).unwrap();
            prop_assert_eq!(&Tree::root_of(i, leaf, &branch), tree.root());
        }
    }

    #[test]
    fn changing_a_leaf_changes_the_root(n in 1usize..20, seed in any::<u64>(), i in any::<prop::sample::Index>()) {
        let mut leaves = leaves(n, seed);
        let tree = Tree::new(&leaves);
        let i = i.index(n);
        leaves[i][0] += Z::from(1u64);
        let other = Tree::new(&leaves);
        prop_assert_ne!(tree.root(), other.root());
        prop_assert!(tree != other);
    }
}
