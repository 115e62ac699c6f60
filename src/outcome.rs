use serde_derive::{Deserialize, Serialize};

/// The result of inserting a key into a tree.
///
/// Inserting a key that is already present leaves the tree untouched and reports
/// `already_existed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InsertOutcome {
    pub already_existed: bool,
}

/// The result of deleting a key from a tree.
///
/// Deleting a key that is not present reports `found == false`. A splay tree may still have been
/// restructured by the failed lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeleteOutcome {
    pub found: bool,
}

impl InsertOutcome {
    pub(crate) fn inserted() -> Self {
        InsertOutcome { already_existed: false }
    }

    pub(crate) fn duplicate() -> Self {
        InsertOutcome { already_existed: true }
    }
}

impl DeleteOutcome {
    pub(crate) fn found(found: bool) -> Self {
        DeleteOutcome { found }
    }
}
