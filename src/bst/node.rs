use crate::bst::tree;
use crate::node::BinaryNode;

/// A struct representing an internal node of a binary search tree.
pub struct Node<T> {
    pub(crate) key: T,
    pub(crate) left: tree::Tree<T>,
    pub(crate) right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            left: None,
            right: None,
        }
    }
}

impl<T> BinaryNode for Node<T> {
    type Key = T;

    fn key(&self) -> &T {
        &self.key
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_ref().map(|node| &**node)
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_ref().map(|node| &**node)
    }

    fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    fn into_key(self) -> T {
        self.key
    }
}
