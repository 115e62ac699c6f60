mod common;

use common::in_order;
use visual_trees::avl_tree::AvlTree;
use visual_trees::bst::BinarySearchTree;
use visual_trees::observer::{Direction, Event, Recorder, RotationCase};
use visual_trees::splay_tree::SplayTree;
use visual_trees::BinaryNode;

#[test]
fn int_test_avl_ascending_inserts_rotate_left() {
    let mut tree = AvlTree::with_observer(Recorder::new());
    tree.insert(10);
    tree.insert(20);
    tree.insert(30);

    let root = tree.root().unwrap();
    assert_eq!(*root.key(), 20);
    assert_eq!(root.height(), 2);
    assert_eq!(root.left().map(|node| (*node.key(), node.height())), Some((10, 1)));
    assert_eq!(root.right().map(|node| (*node.key(), node.height())), Some((30, 1)));

    let rotations = tree.observer().rotations();
    assert_eq!(rotations.len(), 1);
    assert_eq!(rotations[0].direction, Direction::Left);
    assert_eq!(rotations[0].case, RotationCase::RightRight);
    assert_eq!((rotations[0].old_root, rotations[0].new_root), (10, 20));
}

#[test]
fn int_test_avl_zig_zag_inserts_rotate_twice() {
    let mut tree = AvlTree::with_observer(Recorder::new());
    tree.insert(30);
    tree.insert(10);
    tree.insert(20);

    let mut ascending = AvlTree::new();
    for key in &[10, 20, 30] {
        ascending.insert(*key);
    }
    assert_eq!(tree.snapshot(), ascending.snapshot());

    let rotations = tree.observer().rotations();
    assert_eq!(rotations.len(), 2);
    assert_eq!(rotations[0].direction, Direction::Left);
    assert_eq!((rotations[0].old_root, rotations[0].new_root), (10, 20));
    assert_eq!(rotations[1].direction, Direction::Right);
    assert_eq!((rotations[1].old_root, rotations[1].new_root), (30, 20));
    assert!(rotations.iter().all(|rotation| rotation.case == RotationCase::LeftRight));
}

#[test]
fn int_test_bst_delete_with_two_children_uses_successor() {
    let mut tree = BinarySearchTree::with_observer(Recorder::new());
    for key in &[50u32, 30, 70, 20, 40] {
        tree.insert(*key);
    }
    tree.observer_mut().drain();

    assert!(tree.delete(&30).found);
    assert_eq!(in_order(tree.root()), vec![20, 40, 50, 70]);
    assert_eq!(tree.root().and_then(|node| node.left()).map(|node| *node.key()), Some(40));
    assert_eq!(
        tree.observer().events(),
        &[
            Event::Visit(50),
            Event::Visit(30),
            Event::Visit(40),
            Event::Replace {
                key: 30,
                successor: 40,
            },
            Event::Visit(40),
        ],
    );
}

#[test]
fn int_test_splay_duplicate_insert_moves_key_to_root() {
    let mut tree = SplayTree::new();
    for key in &[5u32, 3, 8] {
        tree.insert(*key);
    }

    assert!(tree.insert(3).already_existed);
    assert_eq!(tree.root().map(|node| *node.key()), Some(3));
    assert_eq!(in_order(tree.root()), vec![3, 5, 8]);
    assert_eq!(tree.len(), 3);
}

#[test]
fn int_test_delete_missing_key() {
    let keys = [50u32, 30, 70, 20, 40];

    let mut bst = BinarySearchTree::with_observer(Recorder::new());
    let mut avl = AvlTree::with_observer(Recorder::new());
    let mut splay = SplayTree::new();
    for key in &keys {
        bst.insert(*key);
        avl.insert(*key);
        splay.insert(*key);
    }
    bst.observer_mut().drain();
    avl.observer_mut().drain();

    let bst_before = bst.snapshot();
    let avl_before = avl.snapshot();

    assert!(!bst.delete(&60).found);
    assert!(!avl.delete(&60).found);
    assert!(!splay.delete(&60).found);

    assert_eq!(bst.snapshot(), bst_before);
    assert_eq!(avl.snapshot(), avl_before);
    assert_eq!(bst.observer().visits(), vec![&50, &70]);
    assert!(avl.observer().rotations().is_empty());
    assert!(!avl.observer().visits().is_empty());

    assert_eq!(in_order(splay.root()), vec![20, 30, 40, 50, 70]);
    assert_eq!(splay.len(), keys.len());
}
