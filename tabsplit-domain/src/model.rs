use crate::services::RoundingMode;
use indexmap::IndexMap;
use std::fmt;

/// Stable identity of a group member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberId(pub i64);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BillId(pub i64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
}

/// Balances below this magnitude count as settled. Amounts are in the
/// currency's base unit, so the band absorbs floating-point drift without
/// swallowing real debt.
pub const SETTLED_TOLERANCE: f64 = 1.0;

/// Net position per member for one computation pass.
///
/// Keyed in insertion order: the greedy matcher's tie-break between equal
/// balances is the order members entered the table.
pub type MemberBalances = IndexMap<MemberId, f64>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BillStatus {
    Open,
    /// Archived by a settle-all checkpoint. `batch` groups bills closed in
    /// the same checkpoint.
    Closed { batch: Option<i64> },
}

/// A named sub-amount of an itemized bill, owed by a subset of the group.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitItem {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    pub members: Vec<MemberId>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SplitRule {
    /// Divide the full amount evenly among the selected members.
    Equal { selected: Vec<MemberId> },
    /// Allocate named sub-amounts to subsets of members; any unallocated
    /// remainder is split evenly across the whole group.
    Itemized { items: Vec<SplitItem> },
}

/// A shared expense record.
#[derive(Clone, Debug, PartialEq)]
pub struct Bill {
    pub id: BillId,
    pub amount: f64,
    pub description: String,
    pub payer: MemberId,
    pub date: String,
    pub split: SplitRule,
    pub status: BillStatus,
}

impl Bill {
    pub fn is_open(&self) -> bool {
        matches!(self.status, BillStatus::Open)
    }

    /// Sum of the itemized sub-amounts. Equal-split bills allocate nothing
    /// item-wise, so this is zero for them.
    pub fn allocated_amount(&self) -> f64 {
        match &self.split {
            SplitRule::Equal { .. } => 0.0,
            SplitRule::Itemized { items } => items.iter().map(|item| item.amount).sum(),
        }
    }

    /// Portion of the bill not yet claimed by a sub-item.
    pub fn unallocated_amount(&self) -> f64 {
        self.amount - self.allocated_amount()
    }
}

/// A single directed payment instruction. Never self-referential, and the
/// amount is always positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transfer {
    pub from: MemberId,
    pub to: MemberId,
    pub amount: f64,
}

/// Per-computation configuration supplied by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettlementPolicy {
    pub rounding: RoundingMode,
    /// When true, net all balances through a minimal chain of transfers;
    /// when false, preserve who-owes-whom per bill and net each pair.
    pub simplify_debts: bool,
}

impl Default for SettlementPolicy {
    fn default() -> Self {
        Self {
            rounding: RoundingMode::None,
            simplify_debts: true,
        }
    }
}
