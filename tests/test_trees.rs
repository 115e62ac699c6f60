mod common;

use common::{assert_strictly_increasing, check_avl, in_order};
use rand::{Rng, SeedableRng, XorShiftRng};
use std::collections::BTreeSet;
use visual_trees::avl_tree::AvlTree;
use visual_trees::bst::BinarySearchTree;
use visual_trees::splay_tree::SplayTree;
use visual_trees::BinaryNode;

const NUM_OF_OPERATIONS: usize = 20_000;
const KEY_RANGE: u32 = 1_000;

macro_rules! random_op_tests {
    ($($module_name:ident: $type_name:ident, $check:expr,)*) => {
        $(
            mod $module_name {
                use super::*;

                #[test]
                fn int_test_random_ops() {
                    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut tree = $type_name::new();
                    let mut expected = BTreeSet::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen_range(0, KEY_RANGE);
                        match rng.gen_range(0, 3) {
                            0 => {
                                let outcome = tree.insert(key);
                                assert_eq!(outcome.already_existed, !expected.insert(key));
                            },
                            1 => {
                                let outcome = tree.delete(&key);
                                assert_eq!(outcome.found, expected.remove(&key));
                            },
                            _ => {
                                assert_eq!(tree.search(&key), expected.contains(&key));
                            },
                        }

                        assert_eq!(tree.len(), expected.len());
                        let check: fn(&$type_name<u32>, u32) = $check;
                        check(&tree, key);
                    }

                    let keys = in_order(tree.root());
                    assert_strictly_increasing(&keys);
                    assert_eq!(keys, expected.iter().cloned().collect::<Vec<u32>>());
                    assert_eq!(tree.iter().cloned().collect::<Vec<u32>>(), keys);
                    assert_eq!(tree.min(), expected.iter().next());
                    assert_eq!(tree.max(), expected.iter().next_back());
                    assert_eq!(tree.into_iter().collect::<Vec<u32>>(), keys);
                }

                #[test]
                fn int_test_insert_then_delete_all() {
                    let mut rng: XorShiftRng = SeedableRng::from_seed([2, 3, 5, 7]);
                    let mut tree = $type_name::new();
                    let mut keys = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS / 10 {
                        let key = rng.next_u32();
                        if !tree.insert(key).already_existed {
                            keys.push(key);
                        }
                    }
                    rng.shuffle(&mut keys);

                    for key in &keys {
                        assert!(tree.contains(key));
                        assert!(tree.delete(key).found);
                        assert!(!tree.contains(key));
                    }
                    assert!(tree.is_empty());
                    assert!(tree.root().is_none());
                }
            }
        )*
    };
}

random_op_tests! {
    bst: BinarySearchTree, |tree, _| {
        assert_strictly_increasing(&in_order(tree.root()));
    },
    avl_tree: AvlTree, |tree, _| {
        assert_eq!(check_avl(tree.root()), tree.height());
        assert_strictly_increasing(&in_order(tree.root()));
    },
    splay_tree: SplayTree, |tree, key| {
        // whatever the last operation was, the accessed key is at the root when present
        if tree.contains(&key) {
            assert_eq!(tree.root().map(|node| *node.key()), Some(key));
        }
        assert_strictly_increasing(&in_order(tree.root()));
    },
}

#[test]
fn int_test_avl_sorted_inserts_stay_logarithmic() {
    let mut tree = AvlTree::new();
    for key in 0..4096u32 {
        tree.insert(key);
    }
    check_avl(tree.root());
    assert_eq!(tree.height(), 13);

    for key in (0..4096u32).filter(|key| key % 3 != 0) {
        assert!(tree.delete(&key).found);
    }
    check_avl(tree.root());
    assert_eq!(tree.len(), 1366);
}

#[test]
fn int_test_splay_deep_access_halves_path() {
    let mut tree = SplayTree::new();
    for key in 0..512u32 {
        tree.insert(key);
    }
    assert_eq!(tree.height(), 512);

    assert!(tree.search(&0));
    assert_eq!(tree.height(), 257);

    for key in 0..512u32 {
        assert!(tree.search(&key));
        assert_eq!(tree.root().map(|node| *node.key()), Some(key));
    }
    assert_eq!(in_order(tree.root()), (0..512).collect::<Vec<u32>>());
}
