//! Custodian identities.
//!
//! [`CustodianSlot`] is what a resolution produces: one of the two parents or
//! no custody at all. [`Parent`] is the two-valued subset used wherever "no
//! custody" is not a meaningful answer (pattern starters, single-day
//! exceptions, vacation starters), so that invariant is carried by the type.

use std::fmt;

use serde::Serialize;

/// One of the two custodians.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Parent {
    #[default]
    Parent1,
    Parent2,
}

impl Parent {
    /// The other parent.
    pub fn toggle(self) -> Parent {
        match self {
            Parent::Parent1 => Parent::Parent2,
            Parent::Parent2 => Parent::Parent1,
        }
    }

    /// Map the persisted 1/2 numbering onto a parent. Any other value is not a parent.
    pub fn from_number(n: i64) -> Option<Parent> {
        match n {
            1 => Some(Parent::Parent1),
            2 => Some(Parent::Parent2),
            _ => None,
        }
    }

    /// The persisted 1/2 numbering.
    pub fn number(self) -> u8 {
        match self {
            Parent::Parent1 => 1,
            Parent::Parent2 => 2,
        }
    }
}

impl fmt::Display for Parent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        CustodianSlot::from(*self).fmt(f)
    }
}

/// Who holds custody on a date. `None` means "no custody assigned", which is
/// a legitimate answer rather than an unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CustodianSlot {
    Parent1,
    Parent2,
    None,
}

impl CustodianSlot {
    /// Every slot, in display order.
    pub const ALL: [CustodianSlot; 3] = [
        CustodianSlot::Parent1,
        CustodianSlot::Parent2,
        CustodianSlot::None,
    ];

    /// Swap the parents; `None` stays `None`.
    pub fn toggle(self) -> CustodianSlot {
        match self {
            CustodianSlot::Parent1 => CustodianSlot::Parent2,
            CustodianSlot::Parent2 => CustodianSlot::Parent1,
            CustodianSlot::None => CustodianSlot::None,
        }
    }

    /// The parent holding this slot, if any.
    pub fn parent(self) -> Option<Parent> {
        match self {
            CustodianSlot::Parent1 => Some(Parent::Parent1),
            CustodianSlot::Parent2 => Some(Parent::Parent2),
            CustodianSlot::None => None,
        }
    }

    /// Map the persisted numbering: 1 and 2 are parents, anything else is no custody.
    pub fn from_number(n: i64) -> CustodianSlot {
        Parent::from_number(n).map_or(CustodianSlot::None, CustodianSlot::from)
    }

    /// The persisted numbering (0 for no custody).
    pub fn number(self) -> u8 {
        self.parent().map_or(0, Parent::number)
    }

    pub fn is_none(self) -> bool {
        self == CustodianSlot::None
    }
}

impl From<Parent> for CustodianSlot {
    fn from(parent: Parent) -> Self {
        match parent {
            Parent::Parent1 => CustodianSlot::Parent1,
            Parent::Parent2 => CustodianSlot::Parent2,
        }
    }
}

impl fmt::Display for CustodianSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CustodianSlot::Parent1 => "Parent 1",
            CustodianSlot::Parent2 => "Parent 2",
            CustodianSlot::None => "No custody",
        };
        f.write_str(s)
    }
}
