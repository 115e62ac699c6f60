use crate::bst::node::Node;
use crate::observer::Observer;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

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

/// Returns `false` if the key was already present.
pub fn insert<T, O>(tree: &mut Tree<T>, key: T, observer: &mut O) -> bool
where
    T: Ord,
    O: Observer<T>,
{
    match tree {
        Some(ref mut node) => {
            observer.visit(&node.key);
            match key.cmp(&node.key) {
                Ordering::Less => insert(&mut node.left, key, observer),
                Ordering::Greater => insert(&mut node.right, key, observer),
                Ordering::Equal => false,
            }
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            true
        },
    }
}

/// Returns `true` if a node holding `key` was found and removed.
pub fn remove<T, O>(tree: &mut Tree<T>, key: &T, observer: &mut O) -> bool
where
    T: Ord + Clone,
    O: Observer<T>,
{
    let mut node = match tree.take() {
        Some(node) => node,
        None => return false,
    };

    observer.visit(&node.key);
    let found = match key.cmp(&node.key) {
        Ordering::Less => remove(&mut node.left, key, observer),
        Ordering::Greater => remove(&mut node.right, key, observer),
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
            return true;
        },
    };

    *tree = Some(node);
    found
}
