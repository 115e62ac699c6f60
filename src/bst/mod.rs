//! Unbalanced binary search tree. Deleting a node with two children copies the key of its
//! in-order successor up and then deletes the successor from the right subtree.

mod node;
mod set;
mod tree;

pub use self::node::Node;
pub use self::set::BinarySearchTree;
