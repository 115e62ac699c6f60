use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::node::{self, IntoIter, Iter};
use crate::observer::{NoopObserver, Observer};
use crate::outcome::{DeleteOutcome, InsertOutcome};
use crate::shape::Shape;
use crate::SearchTree;

/// An ordered set of keys stored in an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Every rotation performed to
/// restore that invariant is reported to the tree's observer along with the imbalance case it
/// fixes.
///
/// # Examples
///
/// ```
/// use visual_trees::avl_tree::AvlTree;
/// use visual_trees::node::BinaryNode;
///
/// let mut tree = AvlTree::new();
/// tree.insert(10);
/// tree.insert(20);
/// tree.insert(30);
///
/// let root = tree.root().unwrap();
/// assert_eq!(*root.key(), 20);
/// assert_eq!(root.height(), 2);
/// assert_eq!(root.balance_factor(), 0);
/// ```
pub struct AvlTree<T, O = NoopObserver> {
    tree: tree::Tree<T>,
    len: usize,
    observer: O,
}

impl<T> AvlTree<T> {
    /// Constructs a new, empty `AvlTree<T>` that reports to nobody.
    pub fn new() -> Self {
        Self::with_observer(NoopObserver)
    }
}

impl<T, O> AvlTree<T, O> {
    /// Constructs a new, empty tree that reports visits and rotations to `observer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use visual_trees::avl_tree::AvlTree;
    /// use visual_trees::observer::{Direction, Recorder, RotationCase};
    ///
    /// let mut tree = AvlTree::with_observer(Recorder::new());
    /// tree.insert(30);
    /// tree.insert(10);
    /// tree.insert(20);
    ///
    /// let rotations = tree.observer().rotations();
    /// assert_eq!(rotations.len(), 2);
    /// assert_eq!(rotations[0].direction, Direction::Left);
    /// assert_eq!(rotations[1].direction, Direction::Right);
    /// assert!(rotations.iter().all(|rotation| rotation.case == RotationCase::LeftRight));
    /// ```
    pub fn with_observer(observer: O) -> Self {
        AvlTree {
            tree: None,
            len: 0,
            observer,
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Returns the root node, if the tree is not empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.tree.as_ref().map(|node| &**node)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the tree, removing all keys.
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the number of levels in the tree. This is the stored height of the root.
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    pub fn min(&self) -> Option<&T> {
        node::min(self.root())
    }

    pub fn max(&self) -> Option<&T> {
        node::max(self.root())
    }

    /// Returns an iterator over the tree. The iterator will yield keys using in-order traversal.
    pub fn iter(&self) -> Iter<Node<T>> {
        Iter::new(self.root())
    }

    /// Returns a detached copy of the tree's shape, including every node's height and balance
    /// factor.
    pub fn snapshot(&self) -> Option<Shape<T>>
    where
        T: Clone,
    {
        self.root().map(node::shape)
    }
}

impl<T, O> AvlTree<T, O>
where
    T: Ord + Clone,
    O: Observer<T>,
{
    /// Inserts a key into the tree and rebalances every node on the path back to the root.
    /// Inserting a key that already exists leaves the tree, heights included, as it is.
    ///
    /// # Examples
    ///
    /// ```
    /// use visual_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(!tree.insert(1).already_existed);
    /// assert!(tree.insert(1).already_existed);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> InsertOutcome {
        let AvlTree {
            ref mut tree,
            ref mut len,
            ref mut observer,
        } = self;
        if tree::insert(tree, key, observer) {
            *len += 1;
            InsertOutcome::inserted()
        } else {
            InsertOutcome::duplicate()
        }
    }

    /// Deletes a key from the tree and rebalances every node on the path back to the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use visual_trees::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert!(tree.delete(&1).found);
    /// assert!(!tree.delete(&1).found);
    /// ```
    pub fn delete(&mut self, key: &T) -> DeleteOutcome {
        let AvlTree {
            ref mut tree,
            ref mut len,
            ref mut observer,
        } = self;
        let found = tree::remove(tree, key, observer);
        if found {
            *len -= 1;
        }
        DeleteOutcome::found(found)
    }

    /// Looks up a key, reporting every node on the search path.
    pub fn search(&mut self, key: &T) -> bool {
        let AvlTree {
            ref tree,
            ref mut observer,
            ..
        } = self;
        node::search(tree.as_ref().map(|node| &**node), key, observer)
    }

    /// Checks if a key exists in the tree without notifying the observer.
    pub fn contains(&self, key: &T) -> bool {
        node::contains(self.root(), key)
    }
}

impl<T, O> SearchTree<T> for AvlTree<T, O>
where
    T: Ord + Clone,
    O: Observer<T>,
{
    fn insert(&mut self, key: T) -> InsertOutcome {
        AvlTree::insert(self, key)
    }

    fn delete(&mut self, key: &T) -> DeleteOutcome {
        AvlTree::delete(self, key)
    }

    fn search(&mut self, key: &T) -> bool {
        AvlTree::search(self, key)
    }

    fn contains(&self, key: &T) -> bool {
        AvlTree::contains(self, key)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        AvlTree::clear(self)
    }

    fn min(&self) -> Option<&T> {
        AvlTree::min(self)
    }

    fn max(&self) -> Option<&T> {
        AvlTree::max(self)
    }

    fn keys(&self) -> Vec<&T> {
        self.iter().collect()
    }

    fn height(&self) -> usize {
        AvlTree::height(self)
    }

    fn snapshot(&self) -> Option<Shape<T>> {
        AvlTree::snapshot(self)
    }
}

impl<T, O> IntoIterator for AvlTree<T, O> {
    type Item = T;
    type IntoIter = IntoIter<Node<T>>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.tree)
    }
}

impl<'a, T, O> IntoIterator for &'a AvlTree<T, O>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, Node<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}
