//! Read-only traversal shared by every tree variant.

use crate::observer::Observer;
use crate::shape::Shape;
use std::cmp::Ordering;

/// A node of a binary search tree that owns its children.
///
/// This is the handle renderers get from `root()`: every variant's node exposes its key and its
/// two children through it.
pub trait BinaryNode: Sized {
    type Key;

    fn key(&self) -> &Self::Key;

    fn left(&self) -> Option<&Self>;

    fn right(&self) -> Option<&Self>;

    #[doc(hidden)]
    fn take_left(&mut self) -> Option<Box<Self>>;

    #[doc(hidden)]
    fn take_right(&mut self) -> Option<Box<Self>>;

    #[doc(hidden)]
    fn into_key(self) -> Self::Key;

    /// Stored height and balance factor, for variants that keep them.
    fn annotations(&self) -> (Option<usize>, Option<i32>) {
        (None, None)
    }
}

pub(crate) fn contains<N>(mut curr: Option<&N>, key: &N::Key) -> bool
where
    N: BinaryNode,
    N::Key: Ord,
{
    while let Some(node) = curr {
        curr = match key.cmp(node.key()) {
            Ordering::Less => node.left(),
            Ordering::Greater => node.right(),
            Ordering::Equal => return true,
        };
    }
    false
}

/// Same as `contains`, but reports every node on the search path to `observer`.
pub(crate) fn search<N, O>(mut curr: Option<&N>, key: &N::Key, observer: &mut O) -> bool
where
    N: BinaryNode,
    N::Key: Ord,
    O: Observer<N::Key>,
{
    while let Some(node) = curr {
        observer.visit(node.key());
        curr = match key.cmp(node.key()) {
            Ordering::Less => node.left(),
            Ordering::Greater => node.right(),
            Ordering::Equal => return true,
        };
    }
    false
}

pub(crate) fn min<N>(tree: Option<&N>) -> Option<&N::Key>
where
    N: BinaryNode,
{
    tree.map(|node| {
        let mut curr = node;
        while let Some(left_node) = curr.left() {
            curr = left_node;
        }
        curr.key()
    })
}

pub(crate) fn max<N>(tree: Option<&N>) -> Option<&N::Key>
where
    N: BinaryNode,
{
    tree.map(|node| {
        let mut curr = node;
        while let Some(right_node) = curr.right() {
            curr = right_node;
        }
        curr.key()
    })
}

/// Number of levels below and including `tree`.
pub(crate) fn depth<N>(tree: Option<&N>) -> usize
where
    N: BinaryNode,
{
    match tree {
        None => 0,
        Some(node) => 1 + depth(node.left()).max(depth(node.right())),
    }
}

pub(crate) fn shape<N>(node: &N) -> Shape<N::Key>
where
    N: BinaryNode,
    N::Key: Clone,
{
    let (height, balance) = node.annotations();
    Shape {
        key: node.key().clone(),
        height,
        balance,
        left: node.left().map(|left| Box::new(shape(left))),
        right: node.right().map(|right| Box::new(shape(right))),
    }
}

/// An iterator over the keys of a tree.
///
/// This iterator traverses the tree in-order and yields immutable references.
pub struct Iter<'a, N>
where
    N: 'a,
{
    current: Option<&'a N>,
    stack: Vec<&'a N>,
}

impl<'a, N> Iter<'a, N>
where
    N: 'a,
{
    pub(crate) fn new(root: Option<&'a N>) -> Self {
        Iter {
            current: root,
            stack: Vec::new(),
        }
    }
}

impl<'a, N> Iterator for Iter<'a, N>
where
    N: 'a + BinaryNode,
{
    type Item = &'a N::Key;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.current = node.left();
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = node.right();
            node.key()
        })
    }
}

/// An owning iterator over the keys of a tree.
///
/// This iterator traverses the tree in-order and yields owned keys.
pub struct IntoIter<N> {
    current: Option<Box<N>>,
    stack: Vec<Box<N>>,
}

impl<N> IntoIter<N> {
    pub(crate) fn new(root: Option<Box<N>>) -> Self {
        IntoIter {
            current: root,
            stack: Vec::new(),
        }
    }
}

impl<N> Iterator for IntoIter<N>
where
    N: BinaryNode,
{
    type Item = N::Key;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.take_left();
            self.stack.push(node);
        }
        self.stack.pop().map(|mut node| {
            self.current = node.take_right();
            (*node).into_key()
        })
    }
}
