use crate::model::{Bill, Member, MemberBalances, MemberId, SplitRule};
use indexmap::IndexMap;

/// Accumulates each member's net position across open bills.
///
/// A fresh balance table is built per pass; nothing is shared between calls.
/// Positive means the member is owed money, negative means they owe.
pub struct BalanceAccumulator<'a> {
    group: &'a [Member],
    balances: MemberBalances,
}

impl<'a> BalanceAccumulator<'a> {
    /// Every known member starts at zero so non-participants still appear
    /// in the result.
    pub fn new(group: &'a [Member]) -> Self {
        let balances = group.iter().map(|member| (member.id, 0.0)).collect();
        Self { group, balances }
    }

    /// Credits the payer with the full amount and debits each involved
    /// member by their share. Closed bills are ignored entirely.
    pub fn apply(&mut self, bill: &Bill) {
        if !bill.is_open() {
            return;
        }

        *self.balances.entry(bill.payer).or_insert(0.0) += bill.amount;
        for_each_share(bill, self.group, |member, share| {
            *self.balances.entry(member).or_insert(0.0) -= share;
        });
    }

    pub fn balances(&self) -> &MemberBalances {
        &self.balances
    }

    pub fn into_balances(self) -> MemberBalances {
        self.balances
    }
}

/// One-shot accumulation over a bill list.
pub fn accumulate_balances(group: &[Member], bills: &[Bill]) -> MemberBalances {
    let mut accumulator = BalanceAccumulator::new(group);
    for bill in bills {
        accumulator.apply(bill);
    }
    accumulator.into_balances()
}

/// Walks a bill's split rule and yields each involved member's share.
///
/// Equal splits divide the amount by the selected-member count, floored to 1
/// when the selection is empty (degenerate input: the amount is then
/// attributed to nobody, which is accepted rather than rejected). Itemized
/// splits accumulate per-item shares, skip items with no members, and spread
/// any positive unallocated remainder evenly across the whole group.
pub fn for_each_share<F>(bill: &Bill, group: &[Member], mut f: F)
where
    F: FnMut(MemberId, f64),
{
    match &bill.split {
        SplitRule::Equal { selected } => {
            let share = bill.amount / selected.len().max(1) as f64;
            for &member in selected {
                f(member, share);
            }
        }
        SplitRule::Itemized { items } => {
            let mut shares: IndexMap<MemberId, f64> = IndexMap::new();
            let mut allocated = 0.0;
            for item in items {
                if item.members.is_empty() {
                    continue;
                }
                let item_share = item.amount / item.members.len() as f64;
                for &member in &item.members {
                    *shares.entry(member).or_insert(0.0) += item_share;
                }
                allocated += item.amount;
            }

            let remaining = bill.amount - allocated;
            if remaining > 0.0 && !group.is_empty() {
                let remainder_share = remaining / group.len() as f64;
                for member in group {
                    *shares.entry(member.id).or_insert(0.0) += remainder_share;
                }
            }

            for (member, share) in shares {
                f(member, share);
            }
        }
    }
}
