//! Binary search tree, AVL tree and splay tree engines built for animating their operations.
//!
//! Each tree reports the nodes it compares against and the rotations it performs to an injected
//! [`Observer`](observer::Observer), and exposes its shape through read-only node handles and
//! serializable [`Shape`](shape::Shape) snapshots. Timing and drawing are left entirely to the
//! observer and the renderer.

pub mod avl_tree;
pub mod bst;
pub mod command;
pub mod node;
pub mod observer;
mod outcome;
pub mod shape;
pub mod splay_tree;

pub use crate::node::BinaryNode;
pub use crate::outcome::{DeleteOutcome, InsertOutcome};

use crate::shape::Shape;

/// The operations shared by every tree variant.
///
/// This lets a caller drive any of the trees without knowing which one it holds.
pub trait SearchTree<T> {
    fn insert(&mut self, key: T) -> InsertOutcome;

    fn delete(&mut self, key: &T) -> DeleteOutcome;

    /// Looks up `key`, notifying the observer. Splay trees restructure on lookup.
    fn search(&mut self, key: &T) -> bool;

    /// Looks up `key` without notifying anyone or changing the shape.
    fn contains(&self, key: &T) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    fn min(&self) -> Option<&T>;

    fn max(&self) -> Option<&T>;

    /// Keys in in-order sequence.
    fn keys(&self) -> Vec<&T>;

    /// Number of levels in the tree.
    fn height(&self) -> usize;

    fn snapshot(&self) -> Option<Shape<T>>;
}
