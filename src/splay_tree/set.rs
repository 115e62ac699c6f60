use crate::node::{self, IntoIter, Iter};
use crate::observer::{NoopObserver, Observer};
use crate::outcome::{DeleteOutcome, InsertOutcome};
use crate::shape::Shape;
use crate::splay_tree::node::Node;
use crate::splay_tree::tree;
use crate::SearchTree;

/// An ordered set of keys stored in a splay tree.
///
/// A splay tree is a self-adjusting binary tree with an additional property that recently
/// accessed keys are quick to access again. After each insert, delete or search, the key that was
/// accessed (or the last node on its search path) is "splayed" to the root of the tree.
///
/// # Examples
///
/// ```
/// use visual_trees::node::BinaryNode;
/// use visual_trees::splay_tree::SplayTree;
///
/// let mut tree = SplayTree::new();
/// tree.insert(5);
/// tree.insert(3);
/// tree.insert(8);
/// assert_eq!(tree.root().map(|node| *node.key()), Some(8));
///
/// assert!(tree.insert(3).already_existed);
/// assert_eq!(tree.root().map(|node| *node.key()), Some(3));
/// assert_eq!(tree.len(), 3);
/// ```
pub struct SplayTree<T, O = NoopObserver> {
    tree: tree::Tree<T>,
    len: usize,
    observer: O,
}

impl<T> SplayTree<T> {
    /// Constructs a new, empty `SplayTree<T>` that reports to nobody.
    pub fn new() -> Self {
        Self::with_observer(NoopObserver)
    }
}

impl<T, O> SplayTree<T, O> {
    /// Constructs a new, empty tree that reports visits and rotations to `observer`.
    pub fn with_observer(observer: O) -> Self {
        SplayTree {
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

    /// Returns the minimum key of the tree. Note that `min` does not splay the tree in order to use
    /// a non-mutable reference.
    pub fn min(&self) -> Option<&T> {
        node::min(self.root())
    }

    /// Returns the maximum key of the tree. Note that `max` does not splay the tree in order to use
    /// a non-mutable reference.
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

impl<T, O> SplayTree<T, O>
where
    T: Ord + Clone,
    O: Observer<T>,
{
    /// Inserts a key into the tree and splays it to the root. Inserting a key that already exists
    /// splays the existing node instead.
    pub fn insert(&mut self, key: T) -> InsertOutcome {
        let SplayTree {
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

    /// Deletes a key from the tree. The tree is splayed on `key` even when the key is absent, so
    /// the shape can change while the key set does not.
    ///
    /// # Examples
    ///
    /// ```
    /// use visual_trees::node::BinaryNode;
    /// use visual_trees::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// for key in &[10, 20, 30, 40, 50] {
    ///     tree.insert(*key);
    /// }
    ///
    /// assert!(!tree.delete(&25).found);
    /// assert_eq!(tree.root().map(|node| *node.key()), Some(20));
    /// assert_eq!(tree.len(), 5);
    /// ```
    pub fn delete(&mut self, key: &T) -> DeleteOutcome {
        let SplayTree {
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

    /// Looks up a key and splays it, or the last node on its search path, to the root.
    pub fn search(&mut self, key: &T) -> bool {
        let SplayTree {
            ref mut tree,
            ref mut observer,
            ..
        } = self;
        tree::search(tree, key, observer)
    }

    /// Checks if a key exists in the tree. Note that `contains` does not splay the tree in order
    /// to use a non-mutable reference.
    pub fn contains(&self, key: &T) -> bool {
        node::contains(self.root(), key)
    }
}

impl<T, O> SearchTree<T> for SplayTree<T, O>
where
    T: Ord + Clone,
    O: Observer<T>,
{
    fn insert(&mut self, key: T) -> InsertOutcome {
        SplayTree::insert(self, key)
    }

    fn delete(&mut self, key: &T) -> DeleteOutcome {
        SplayTree::delete(self, key)
    }

    fn search(&mut self, key: &T) -> bool {
        SplayTree::search(self, key)
    }

    fn contains(&self, key: &T) -> bool {
        SplayTree::contains(self, key)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        SplayTree::clear(self)
    }

    fn min(&self) -> Option<&T> {
        SplayTree::min(self)
    }

    fn max(&self) -> Option<&T> {
        SplayTree::max(self)
    }

    fn keys(&self) -> Vec<&T> {
        self.iter().collect()
    }

    fn height(&self) -> usize {
        SplayTree::height(self)
    }

    fn snapshot(&self) -> Option<Shape<T>> {
        SplayTree::snapshot(self)
    }
}

impl<T, O> IntoIterator for SplayTree<T, O> {
    type Item = T;
    type IntoIter = IntoIter<Node<T>>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.tree)
    }
}

impl<'a, T, O> IntoIterator for &'a SplayTree<T, O>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, Node<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for SplayTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::SplayTree;
    use crate::node::BinaryNode;
    use crate::observer::{Direction, Event, Recorder, Rotation, RotationCase};

    fn build(keys: &[u32]) -> SplayTree<u32, Recorder<u32>> {
        let mut tree = SplayTree::with_observer(Recorder::new());
        for key in keys {
            tree.insert(*key);
        }
        tree.observer_mut().drain();
        tree
    }

    fn root_key(tree: &SplayTree<u32, Recorder<u32>>) -> Option<u32> {
        tree.root().map(|node| *node.key())
    }

    fn cases(tree: &SplayTree<u32, Recorder<u32>>) -> Vec<RotationCase> {
        tree.observer().rotations().iter().map(|rotation| rotation.case).collect()
    }

    #[test]
    fn test_len_empty() {
        let tree: SplayTree<u32> = SplayTree::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let tree: SplayTree<u32> = SplayTree::new();
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
    }

    #[test]
    fn test_insert_splays_to_root() {
        let mut tree = SplayTree::new();
        for key in 0..10 {
            assert!(!tree.insert(key).already_existed);
            assert_eq!(tree.root().map(|node| *node.key()), Some(key));
        }
        assert_eq!(tree.len(), 10);
    }

    #[test]
    fn test_insert_duplicate() {
        let mut tree = build(&[5, 3, 8]);
        assert_eq!(root_key(&tree), Some(8));

        assert!(tree.insert(3).already_existed);
        assert_eq!(root_key(&tree), Some(3));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&3, &5, &8]);
        assert_eq!(cases(&tree), vec![RotationCase::ZigZig, RotationCase::ZigZig]);
    }

    #[test]
    fn test_insert_zig_zag() {
        let mut tree = build(&[50, 10, 30]);
        assert_eq!(root_key(&tree), Some(30));

        tree.insert(20);
        assert_eq!(root_key(&tree), Some(20));
        assert_eq!(
            tree.observer().rotations(),
            vec![
                &Rotation {
                    direction: Direction::Left,
                    case: RotationCase::ZigZag,
                    old_root: 10,
                    new_root: 20,
                    moved: None,
                },
                &Rotation {
                    direction: Direction::Right,
                    case: RotationCase::ZigZag,
                    old_root: 30,
                    new_root: 20,
                    moved: None,
                },
            ],
        );
    }

    #[test]
    fn test_search_zig_zig_path() {
        let mut tree = SplayTree::with_observer(Recorder::new());
        for key in 1..8 {
            tree.insert(key);
        }
        assert_eq!(tree.height(), 7);
        tree.observer_mut().drain();

        assert!(tree.search(&1));
        assert_eq!(root_key(&tree), Some(1));
        assert_eq!(tree.observer().visits(), vec![&7, &6, &5, &4, &3, &2, &1]);
        assert_eq!(cases(&tree), vec![RotationCase::ZigZig; 6]);
        assert_eq!(tree.height(), 5);
    }

    #[test]
    fn test_search_missing_splays_last_visited() {
        let mut tree = build(&[10, 20, 30, 40, 50]);
        assert!(!tree.search(&35));
        assert_eq!(root_key(&tree), Some(30));
        assert_eq!(tree.len(), 5);
        assert!(!tree.contains(&35));
    }

    #[test]
    fn test_contains_does_not_splay() {
        let tree = build(&[10, 20, 30]);
        assert!(tree.contains(&10));
        assert_eq!(root_key(&tree), Some(30));
        assert!(tree.observer().events().is_empty());
    }

    #[test]
    fn test_delete_missing_restructures() {
        let mut tree = build(&[10, 20, 30, 40, 50]);
        assert!(!tree.delete(&25).found);
        assert_eq!(root_key(&tree), Some(20));
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&10, &20, &30, &40, &50]);
        assert_eq!(
            cases(&tree),
            vec![RotationCase::Zig, RotationCase::ZigZig, RotationCase::ZigZig],
        );
    }

    #[test]
    fn test_delete_two_children_joins_at_predecessor() {
        let mut tree = build(&[10, 20, 30, 40, 50]);
        tree.delete(&25);
        tree.observer_mut().drain();

        assert!(tree.delete(&30).found);
        assert_eq!(root_key(&tree), Some(20));
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&10, &20, &40, &50]);
        let root = tree.root().unwrap();
        assert_eq!(root.right().map(|node| *node.key()), Some(40));
        assert_eq!(tree.observer().events().last(), Some(&Event::Visit(20)));
    }

    #[test]
    fn test_delete_without_right_child() {
        let mut tree = build(&[20, 10]);
        assert!(tree.delete(&20).found);
        assert_eq!(root_key(&tree), Some(10));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_delete_without_left_child() {
        let mut tree = build(&[20, 10]);
        assert!(tree.delete(&10).found);
        assert_eq!(root_key(&tree), Some(20));
        assert_eq!(tree.observer().visits(), vec![&10]);
    }

    #[test]
    fn test_delete_last() {
        let mut tree = build(&[1]);
        assert!(tree.delete(&1).found);
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert!(!tree.delete(&1).found);
    }

    #[test]
    fn test_min_max() {
        let tree = build(&[3, 1, 5]);
        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&5));
    }

    #[test]
    fn test_into_iter() {
        let tree = build(&[1, 5, 3]);
        assert_eq!(tree.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }
}
