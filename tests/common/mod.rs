#![allow(dead_code)]

use std::cmp;
use visual_trees::avl_tree;
use visual_trees::BinaryNode;

/// Collects the keys of a subtree in-order, following the node links directly.
pub fn in_order<N>(root: Option<&N>) -> Vec<u32>
where
    N: BinaryNode<Key = u32>,
{
    let mut keys = Vec::new();
    collect(root, &mut keys);
    keys
}

fn collect<N>(node: Option<&N>, keys: &mut Vec<u32>)
where
    N: BinaryNode<Key = u32>,
{
    if let Some(node) = node {
        collect(node.left(), keys);
        keys.push(*node.key());
        collect(node.right(), keys);
    }
}

pub fn assert_strictly_increasing(keys: &[u32]) {
    for pair in keys.windows(2) {
        assert!(pair[0] < pair[1], "{} is not smaller than {}", pair[0], pair[1]);
    }
}

/// Checks the stored heights and the balance invariant of every node and returns the recomputed
/// height.
pub fn check_avl(node: Option<&avl_tree::Node<u32>>) -> usize {
    match node {
        None => 0,
        Some(node) => {
            let left = check_avl(node.left());
            let right = check_avl(node.right());
            let balance = left as i32 - right as i32;
            assert_eq!(node.height(), 1 + cmp::max(left, right), "height of {}", node.key());
            assert_eq!(node.balance_factor(), balance, "balance of {}", node.key());
            assert!(balance.abs() <= 1, "{} is out of balance", node.key());
            node.height()
        },
    }
}
