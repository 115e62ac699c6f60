use crate::observer::{Direction, Observer, Rotation, RotationCase};
use crate::splay_tree::node::Node;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

fn rotate_left<T, O>(mut node: Box<Node<T>>, case: RotationCase, observer: &mut O) -> Box<Node<T>>
where
    T: Clone,
    O: Observer<T>,
{
    let mut child = node.right.take().expect("Expected right child node to be `Some`.");
    observer.rotate(&Rotation::new(
        Direction::Left,
        case,
        &node.key,
        &child.key,
        child.left.as_ref().map(|moved| &moved.key),
    ));
    node.right = child.left.take();
    child.left = Some(node);
    child
}

fn rotate_right<T, O>(mut node: Box<Node<T>>, case: RotationCase, observer: &mut O) -> Box<Node<T>>
where
    T: Clone,
    O: Observer<T>,
{
    let mut child = node.left.take().expect("Expected left child node to be `Some`.");
    observer.rotate(&Rotation::new(
        Direction::Right,
        case,
        &node.key,
        &child.key,
        child.right.as_ref().map(|moved| &moved.key),
    ));
    node.left = child.right.take();
    child.right = Some(node);
    child
}

/// Brings the node holding `key` to the root of the subtree. If `key` is absent, the last node on
/// its search path becomes the root instead.
///
/// Each level handles a node and its child. When the key lies below the child on the same side
/// the pair is a zig-zig and rotates at `node` first, when it lies on the opposite side the pair
/// is a zig-zag and rotates at the child first. A final rotation at `node` lifts the target one
/// more level.
pub fn splay<T, O>(mut node: Box<Node<T>>, key: &T, observer: &mut O) -> Box<Node<T>>
where
    T: Ord + Clone,
    O: Observer<T>,
{
    observer.visit(&node.key);
    match key.cmp(&node.key) {
        Ordering::Equal => node,
        Ordering::Less => {
            let mut child = match node.left.take() {
                Some(child) => child,
                None => return node,
            };
            observer.visit(&child.key);
            let case = match key.cmp(&child.key) {
                Ordering::Less => {
                    let case = if child.left.is_some() {
                        RotationCase::ZigZig
                    } else {
                        RotationCase::Zig
                    };
                    child.left = child
                        .left
                        .take()
                        .map(|grandchild| splay(grandchild, key, observer));
                    node.left = Some(child);
                    node = rotate_right(node, case, observer);
                    case
                },
                Ordering::Greater => {
                    let case = if child.right.is_some() {
                        RotationCase::ZigZag
                    } else {
                        RotationCase::Zig
                    };
                    child.right = child
                        .right
                        .take()
                        .map(|grandchild| splay(grandchild, key, observer));
                    if child.right.is_some() {
                        child = rotate_left(child, case, observer);
                    }
                    node.left = Some(child);
                    case
                },
                Ordering::Equal => {
                    node.left = Some(child);
                    RotationCase::Zig
                },
            };
            if node.left.is_some() {
                node = rotate_right(node, case, observer);
            }
            node
        },
        Ordering::Greater => {
            let mut child = match node.right.take() {
                Some(child) => child,
                None => return node,
            };
            observer.visit(&child.key);
            let case = match key.cmp(&child.key) {
                Ordering::Greater => {
                    let case = if child.right.is_some() {
                        RotationCase::ZigZig
                    } else {
                        RotationCase::Zig
                    };
                    child.right = child
                        .right
                        .take()
                        .map(|grandchild| splay(grandchild, key, observer));
                    node.right = Some(child);
                    node = rotate_left(node, case, observer);
                    case
                },
                Ordering::Less => {
                    let case = if child.left.is_some() {
                        RotationCase::ZigZag
                    } else {
                        RotationCase::Zig
                    };
                    child.left = child
                        .left
                        .take()
                        .map(|grandchild| splay(grandchild, key, observer));
                    if child.left.is_some() {
                        child = rotate_right(child, case, observer);
                    }
                    node.right = Some(child);
                    case
                },
                Ordering::Equal => {
                    node.right = Some(child);
                    RotationCase::Zig
                },
            };
            if node.right.is_some() {
                node = rotate_left(node, case, observer);
            }
            node
        },
    }
}

// Plain unbalanced descent; the caller splays afterwards.
fn insert_leaf<T, O>(tree: &mut Tree<T>, key: T, observer: &mut O) -> bool
where
    T: Ord,
    O: Observer<T>,
{
    match tree {
        Some(ref mut node) => {
            observer.visit(&node.key);
            match key.cmp(&node.key) {
                Ordering::Less => insert_leaf(&mut node.left, key, observer),
                Ordering::Greater => insert_leaf(&mut node.right, key, observer),
                Ordering::Equal => false,
            }
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            true
        },
    }
}

/// Inserts `key` as a leaf and splays it to the root. A duplicate key is splayed to the root as
/// well. Returns `false` if the key was already present.
pub fn insert<T, O>(tree: &mut Tree<T>, key: T, observer: &mut O) -> bool
where
    T: Ord + Clone,
    O: Observer<T>,
{
    let inserted = insert_leaf(tree, key.clone(), observer);
    *tree = tree.take().map(|node| splay(node, &key, observer));
    inserted
}

/// Splays `key` to the root and unlinks it. The tree keeps the shape produced by the splay even
/// if `key` turns out to be absent.
pub fn remove<T, O>(tree: &mut Tree<T>, key: &T, observer: &mut O) -> bool
where
    T: Ord + Clone,
    O: Observer<T>,
{
    let node = match tree.take() {
        Some(node) => splay(node, key, observer),
        None => return false,
    };

    if node.key != *key {
        *tree = Some(node);
        return false;
    }

    let Node { left, right, .. } = *node;
    *tree = match (left, right) {
        (None, right) => right,
        (left, None) => left,
        (Some(left), right) => {
            // every key on the left is smaller, so this brings the predecessor up with no right
            // child
            let mut new_root = splay(left, key, observer);
            new_root.right = right;
            Some(new_root)
        },
    };
    true
}

/// Splays `key` to the root and reports whether it is there.
pub fn search<T, O>(tree: &mut Tree<T>, key: &T, observer: &mut O) -> bool
where
    T: Ord + Clone,
    O: Observer<T>,
{
    *tree = tree.take().map(|node| splay(node, key, observer));
    match tree {
        Some(ref node) => node.key == *key,
        None => false,
    }
}
