//! Owned copies of a tree's shape for renderers.

use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// A detached copy of a subtree.
///
/// `height` and `balance` are only filled in for AVL trees.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape<T> {
    pub key: T,
    pub height: Option<usize>,
    pub balance: Option<i32>,
    pub left: Option<Box<Shape<T>>>,
    pub right: Option<Box<Shape<T>>>,
}

impl<T> Shape<T> {
    /// Number of nodes in the shape.
    pub fn len(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |left| left.len())
            + self.right.as_ref().map_or(0, |right| right.len())
    }

    /// Number of levels in the shape.
    pub fn depth(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |left| left.depth());
        let right = self.right.as_ref().map_or(0, |right| right.depth());
        1 + left.max(right)
    }

    /// Keys in in-order sequence.
    pub fn keys(&self) -> Vec<&T> {
        let mut ret = Vec::with_capacity(self.len());
        self.collect_keys(&mut ret);
        ret
    }

    fn collect_keys<'a>(&'a self, keys: &mut Vec<&'a T>) {
        if let Some(ref left) = self.left {
            left.collect_keys(keys);
        }
        keys.push(&self.key);
        if let Some(ref right) = self.right {
            right.collect_keys(keys);
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter, level: usize) -> fmt::Result
    where
        T: fmt::Display,
    {
        if let Some(ref right) = self.right {
            right.write_indented(f, level + 1)?;
        }
        write!(f, "{:width$}{}", "", self.key, width = level * 4)?;
        if let (Some(height), Some(balance)) = (self.height, self.balance) {
            write!(f, " (h={}, bf={})", height, balance)?;
        }
        writeln!(f)?;
        if let Some(ref left) = self.left {
            left.write_indented(f, level + 1)?;
        }
        Ok(())
    }
}

/// Draws the tree sideways: the root sits in the first column and right subtrees are printed
/// above their parents.
impl<T> fmt::Display for Shape<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
