use crate::bst::node::Node;
use crate::bst::tree;
use crate::node::{self, IntoIter, Iter};
use crate::observer::{NoopObserver, Observer};
use crate::outcome::{DeleteOutcome, InsertOutcome};
use crate::shape::Shape;
use crate::SearchTree;

/// An ordered set of keys stored in an unbalanced binary search tree.
///
/// Keys are placed purely by comparison, so the shape of the tree depends on insertion order.
/// Every node compared against during an operation is reported to the tree's observer.
///
/// # Examples
///
/// ```
/// use visual_trees::bst::BinarySearchTree;
///
/// let mut tree = BinarySearchTree::new();
/// for key in &[50, 30, 70, 20, 40] {
///     tree.insert(*key);
/// }
///
/// assert!(tree.delete(&30).found);
/// assert!(!tree.delete(&30).found);
/// assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&20, &40, &50, &70]);
/// ```
pub struct BinarySearchTree<T, O = NoopObserver> {
    tree: tree::Tree<T>,
    len: usize,
    observer: O,
}

impl<T> BinarySearchTree<T> {
    /// Constructs a new, empty `BinarySearchTree<T>` that reports to nobody.
    pub fn new() -> Self {
        Self::with_observer(NoopObserver)
    }
}

impl<T, O> BinarySearchTree<T, O> {
    /// Constructs a new, empty tree that reports visits to `observer`.
    pub fn with_observer(observer: O) -> Self {
        BinarySearchTree {
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

    /// Returns the number of levels in the tree.
    pub fn height(&self) -> usize {
        node::depth(self.root())
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

    /// Returns a detached copy of the tree's shape.
    pub fn snapshot(&self) -> Option<Shape<T>>
    where
        T: Clone,
    {
        self.root().map(node::shape)
    }
}

impl<T, O> BinarySearchTree<T, O>
where
    T: Ord + Clone,
    O: Observer<T>,
{
    /// Inserts a key into the tree. Inserting a key that already exists leaves the tree as it is.
    ///
    /// # Examples
    ///
    /// ```
    /// use visual_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert!(!tree.insert(1).already_existed);
    /// assert!(tree.insert(1).already_existed);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> InsertOutcome {
        let BinarySearchTree {
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

    /// Deletes a key from the tree.
    pub fn delete(&mut self, key: &T) -> DeleteOutcome {
        let BinarySearchTree {
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
        let BinarySearchTree {
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

impl<T, O> SearchTree<T> for BinarySearchTree<T, O>
where
    T: Ord + Clone,
    O: Observer<T>,
{
    fn insert(&mut self, key: T) -> InsertOutcome {
        BinarySearchTree::insert(self, key)
    }

    fn delete(&mut self, key: &T) -> DeleteOutcome {
        BinarySearchTree::delete(self, key)
    }

    fn search(&mut self, key: &T) -> bool {
        BinarySearchTree::search(self, key)
    }

    fn contains(&self, key: &T) -> bool {
        BinarySearchTree::contains(self, key)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        BinarySearchTree::clear(self)
    }

    fn min(&self) -> Option<&T> {
        BinarySearchTree::min(self)
    }

    fn max(&self) -> Option<&T> {
        BinarySearchTree::max(self)
    }

    fn keys(&self) -> Vec<&T> {
        self.iter().collect()
    }

    fn height(&self) -> usize {
        BinarySearchTree::height(self)
    }

    fn snapshot(&self) -> Option<Shape<T>> {
        BinarySearchTree::snapshot(self)
    }
}

impl<T, O> IntoIterator for BinarySearchTree<T, O> {
    type Item = T;
    type IntoIter = IntoIter<Node<T>>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.tree)
    }
}

impl<'a, T, O> IntoIterator for &'a BinarySearchTree<T, O>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, Node<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}
