//! Hooks that report what a tree operation touches, in the order it touches it.
//!
//! Every tree in this crate owns an [`Observer`]. The tree calls [`Observer::visit`] right before
//! it compares against a node and [`Observer::rotate`] right before it rewrites the links of a
//! rotation, so a presentation layer can highlight nodes and pause without the tree algorithms
//! knowing anything about timing or drawing.

use log::debug;
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// The direction of a single rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// The right child of the old root becomes the new root.
    Left,
    /// The left child of the old root becomes the new root.
    Right,
}

/// Why a rotation happened.
///
/// AVL rotations are labelled by the imbalance they fix. Splay rotations are labelled by the
/// access pattern that triggered them. Both halves of a double rotation carry the same label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationCase {
    LeftLeft,
    RightRight,
    LeftRight,
    RightLeft,
    Zig,
    ZigZig,
    ZigZag,
}

impl fmt::Display for RotationCase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            RotationCase::LeftLeft => "LL",
            RotationCase::RightRight => "RR",
            RotationCase::LeftRight => "LR",
            RotationCase::RightLeft => "RL",
            RotationCase::Zig => "zig",
            RotationCase::ZigZig => "zig-zig",
            RotationCase::ZigZag => "zig-zag",
        };
        write!(f, "{}", label)
    }
}

/// A rotation that is about to be applied to a subtree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rotation<T> {
    pub direction: Direction,
    pub case: RotationCase,
    /// Key of the subtree root before the rotation.
    pub old_root: T,
    /// Key of the subtree root after the rotation.
    pub new_root: T,
    /// Key of the inner grandchild that is handed from `new_root` to `old_root`, if any.
    pub moved: Option<T>,
}

impl<T> Rotation<T>
where
    T: Clone,
{
    pub(crate) fn new(
        direction: Direction,
        case: RotationCase,
        old_root: &T,
        new_root: &T,
        moved: Option<&T>,
    ) -> Self {
        Rotation {
            direction,
            case,
            old_root: old_root.clone(),
            new_root: new_root.clone(),
            moved: moved.cloned(),
        }
    }
}

/// Receives notifications from tree operations.
///
/// All methods default to doing nothing so implementors only override what they consume.
pub trait Observer<T> {
    /// Called once for every node on the active search path, before the tree compares against
    /// it or mutates anything below it.
    fn visit(&mut self, _key: &T) {}

    /// Called once per rotation, before the links are rewritten.
    fn rotate(&mut self, _rotation: &Rotation<T>) {}

    /// Called when a node with two children takes over the key of its in-order successor.
    fn replace(&mut self, _key: &T, _successor: &T) {}
}

impl<'a, T, O> Observer<T> for &'a mut O
where
    O: Observer<T> + ?Sized,
{
    fn visit(&mut self, key: &T) {
        (**self).visit(key)
    }

    fn rotate(&mut self, rotation: &Rotation<T>) {
        (**self).rotate(rotation)
    }

    fn replace(&mut self, key: &T, successor: &T) {
        (**self).replace(key, successor)
    }
}

/// An observer that ignores every notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoopObserver;

impl<T> Observer<T> for NoopObserver {}

/// A single notification captured by a [`Recorder`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event<T> {
    Visit(T),
    Rotate(Rotation<T>),
    Replace { key: T, successor: T },
}

/// An observer that keeps every notification so it can be replayed later.
///
/// # Examples
///
/// ```
/// use visual_trees::avl_tree::AvlTree;
/// use visual_trees::observer::{Event, Recorder};
///
/// let mut tree = AvlTree::with_observer(Recorder::new());
/// tree.insert(1);
/// tree.insert(2);
/// assert_eq!(tree.observer().events(), &[Event::Visit(1)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recorder<T> {
    events: Vec<Event<T>>,
}

impl<T> Recorder<T> {
    pub fn new() -> Self {
        Recorder { events: Vec::new() }
    }

    pub fn events(&self) -> &[Event<T>] {
        &self.events
    }

    /// Removes and returns everything recorded so far.
    pub fn drain(&mut self) -> Vec<Event<T>> {
        self.events.drain(..).collect()
    }

    /// The keys passed to `visit`, in order.
    pub fn visits(&self) -> Vec<&T> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Visit(key) => Some(key),
                _ => None,
            })
            .collect()
    }

    /// The rotations passed to `rotate`, in order.
    pub fn rotations(&self) -> Vec<&Rotation<T>> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Rotate(rotation) => Some(rotation),
                _ => None,
            })
            .collect()
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Observer<T> for Recorder<T>
where
    T: Clone,
{
    fn visit(&mut self, key: &T) {
        self.events.push(Event::Visit(key.clone()));
    }

    fn rotate(&mut self, rotation: &Rotation<T>) {
        self.events.push(Event::Rotate(rotation.clone()));
    }

    fn replace(&mut self, key: &T, successor: &T) {
        self.events.push(Event::Replace {
            key: key.clone(),
            successor: successor.clone(),
        });
    }
}

/// An observer that forwards every notification to the `log` facade at `debug` level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LogObserver;

impl<T> Observer<T> for LogObserver
where
    T: fmt::Debug,
{
    fn visit(&mut self, key: &T) {
        debug!("visit {:?}", key);
    }

    fn rotate(&mut self, rotation: &Rotation<T>) {
        debug!(
            "rotate {:?} ({}) at {:?}: {:?} becomes the subtree root, moved {:?}",
            rotation.direction, rotation.case, rotation.old_root, rotation.new_root, rotation.moved,
        );
    }

    fn replace(&mut self, key: &T, successor: &T) {
        debug!("replace {:?} with successor {:?}", key, successor);
    }
}
