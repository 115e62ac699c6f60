use crate::avl_tree::tree;
use crate::node::BinaryNode;
use std::cmp;

/// A struct representing an internal node of an avl tree.
pub struct Node<T> {
    pub(crate) key: T,
    pub(crate) height: usize,
    pub(crate) left: tree::Tree<T>,
    pub(crate) right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Height of the subtree rooted at this node. A leaf has height 1.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Height of the left subtree minus height of the right subtree.
    pub fn balance_factor(&self) -> i32 {
        (tree::height(&self.left) as i32) - (tree::height(&self.right) as i32)
    }

    pub(crate) fn update(&mut self) {
        let Node { ref mut height, ref left, ref right, .. } = self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
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

    fn annotations(&self) -> (Option<usize>, Option<i32>) {
        (Some(self.height), Some(self.balance_factor()))
    }
}
