use crate::avl_tree::node::Node;
use crate::observer::{Direction, Observer, Rotation, RotationCase};
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T, O>(mut node: Box<Node<T>>, case: RotationCase, observer: &mut O) -> Box<Node<T>>
where
    T: Clone,
    O: Observer<T>,
{
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    observer.rotate(&Rotation::new(
        Direction::Left,
        case,
        &node.key,
        &child.key,
        child.left.as_ref().map(|moved| &moved.key),
    ));
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T, O>(mut node: Box<Node<T>>, case: RotationCase, observer: &mut O) -> Box<Node<T>>
where
    T: Clone,
    O: Observer<T>,
{
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    observer.rotate(&Rotation::new(
        Direction::Right,
        case,
        &node.key,
        &child.key,
        child.right.as_ref().map(|moved| &moved.key),
    ));
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Recomputes the height of the root of `tree` and restores the balance invariant there.
fn balance<T, O>(tree: &mut Tree<T>, observer: &mut O)
where
    T: Clone,
    O: Observer<T>,
{
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance_factor() > 1 {
        let mut case = RotationCase::LeftLeft;
        if let Some(child) = node.left.take() {
            if child.balance_factor() < 0 {
                case = RotationCase::LeftRight;
                node.left = Some(rotate_left(child, case, observer));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node, case, observer);
    } else if node.balance_factor() < -1 {
        let mut case = RotationCase::RightRight;
        if let Some(child) = node.right.take() {
            if child.balance_factor() > 0 {
                case = RotationCase::RightLeft;
                node.right = Some(rotate_right(child, case, observer));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node, case, observer);
    }

    *tree = Some(node);
}

// precondition: the tree is not empty
pub fn find_min<'a, T, O>(tree: &'a Tree<T>, observer: &mut O) -> &'a T
where
    O: Observer<T>,
{
    let mut curr = tree.as_ref().expect("Expected a non-empty subtree.");
    observer.visit(&curr.key);
    while let Some(ref left_node) = curr.left {
        curr = left_node;
        observer.visit(&curr.key);
    }
    &curr.key
}

/// Returns `false` if the key was already present, in which case no height changes.
pub fn insert<T, O>(tree: &mut Tree<T>, key: T, observer: &mut O) -> bool
where
    T: Ord + Clone,
    O: Observer<T>,
{
    let ret = match tree {
        Some(ref mut node) => {
            observer.visit(&node.key);
            match key.cmp(&node.key) {
                Ordering::Less => insert(&mut node.left, key, observer),
                Ordering::Greater => insert(&mut node.right, key, observer),
                Ordering::Equal => return false,
            }
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return true;
        },
    };

    balance(tree, observer);
    ret
}

/// Returns `true` if a node holding `key` was found and removed. Every node on the path back to
/// the root is rebalanced, so one removal can rotate at several levels.
pub fn remove<T, O>(tree: &mut Tree<T>, key: &T, observer: &mut O) -> bool
where
    T: Ord + Clone,
    O: Observer<T>,
{
    let ret = match tree.take() {
        Some(mut node) => {
            observer.visit(&node.key);
            match key.cmp(&node.key) {
                Ordering::Less => {
                    let ret = remove(&mut node.left, key, observer);
                    *tree = Some(node);
                    ret
                },
                Ordering::Greater => {
                    let ret = remove(&mut node.right, key, observer);
                    *tree = Some(node);
                    ret
                },
                Ordering::Equal => {
                    match (node.left.take(), node.right.take()) {
                        (None, right) => *tree = right,
                        (left, None) => *tree = left,
                        (left, right) => {
                            node.left = left;
                            node.right = right;
                            let successor = find_min(&node.right, observer).clone();
                            observer.replace(&node.key, &successor);
                            node.key = successor.clone();
                            remove(&mut node.right, &successor, observer);
                            *tree = Some(node);
                        },
                    }
                    true
                },
            }
        },
        None => return false,
    };

    balance(tree, observer);
    ret
}
