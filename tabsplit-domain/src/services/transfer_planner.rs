use crate::{
    model::{Bill, Member, MemberBalances, MemberId, SettlementPolicy, Transfer, SETTLED_TOLERANCE},
    services::{
        balance_accumulator::{accumulate_balances, for_each_share},
        rounding::{smart_round, RoundingMode},
    },
};
use indexmap::IndexMap;

/// Produces the transfers that settle a group's open bills.
///
/// Both strategies are pure functions of the snapshot: same input, same
/// output, in the same order.
pub trait TransferPlanner {
    fn plan(&self, group: &[Member], bills: &[Bill], rounding: RoundingMode) -> Vec<Transfer>;
}

/// Selects the planner for the caller's policy.
pub fn planner_for(policy: &SettlementPolicy) -> &'static dyn TransferPlanner {
    if policy.simplify_debts {
        &SimplifiedPlanner
    } else {
        &DirectPlanner
    }
}

/// Nets all balances through a greedy debtor/creditor matching.
///
/// This is not an exact minimum-transfer solver; it is the standard
/// two-pointer greedy over sorted balance lists, which is minimal in
/// practice for small groups and always terminates in O(members) steps.
pub struct SimplifiedPlanner;

impl SimplifiedPlanner {
    /// Matches debtors against creditors from a precomputed balance table.
    ///
    /// Members within the settled tolerance band are treated as already
    /// settled. Ties between equal balances keep the table's insertion
    /// order (the sort is stable and no secondary key is defined).
    ///
    /// Rounding applies to the emitted amount only; the running balances
    /// use the unrounded amount so rounding error never carries over into
    /// the next match.
    pub fn match_balances(balances: &MemberBalances, rounding: RoundingMode) -> Vec<Transfer> {
        let mut debtors: Vec<(MemberId, f64)> = Vec::new();
        let mut creditors: Vec<(MemberId, f64)> = Vec::new();
        for (&member, &balance) in balances {
            if balance < -SETTLED_TOLERANCE {
                debtors.push((member, balance));
            } else if balance > SETTLED_TOLERANCE {
                creditors.push((member, balance));
            }
        }

        debtors.sort_by(|a, b| a.1.total_cmp(&b.1));
        creditors.sort_by(|a, b| b.1.total_cmp(&a.1));

        let mut transfers = Vec::new();
        let mut i = 0;
        let mut j = 0;
        while i < debtors.len() && j < creditors.len() {
            let amount = debtors[i].1.abs().min(creditors[j].1);
            if amount > 0.0 {
                let emitted = smart_round(amount, rounding);
                if emitted > 0.0 {
                    transfers.push(Transfer {
                        from: debtors[i].0,
                        to: creditors[j].0,
                        amount: emitted,
                    });
                }
            }
            debtors[i].1 += amount;
            creditors[j].1 -= amount;
            if debtors[i].1.abs() < SETTLED_TOLERANCE {
                i += 1;
            }
            if creditors[j].1 < SETTLED_TOLERANCE {
                j += 1;
            }
        }

        tracing::debug!(
            debtor_count = debtors.len(),
            creditor_count = creditors.len(),
            transfer_count = transfers.len(),
            rounding = ?rounding,
            "matched balances into settlement transfers"
        );

        transfers
    }
}

impl TransferPlanner for SimplifiedPlanner {
    fn plan(&self, group: &[Member], bills: &[Bill], rounding: RoundingMode) -> Vec<Transfer> {
        let balances = accumulate_balances(group, bills);
        Self::match_balances(&balances, rounding)
    }
}

/// Preserves who-owes-whom per bill instead of netting the whole group.
///
/// Each non-payer owes the payer their share directly; the resulting
/// pairwise debt matrix is then netted bidirectionally so at most one
/// transfer is emitted per pair.
pub struct DirectPlanner;

impl TransferPlanner for DirectPlanner {
    fn plan(&self, group: &[Member], bills: &[Bill], rounding: RoundingMode) -> Vec<Transfer> {
        // debts[from][to] = gross amount `from` owes `to`, in first-seen
        // order so output order is deterministic.
        let mut debts: IndexMap<MemberId, IndexMap<MemberId, f64>> = IndexMap::new();
        for bill in bills.iter().filter(|bill| bill.is_open()) {
            let payer = bill.payer;
            for_each_share(bill, group, |member, share| {
                if member == payer {
                    return;
                }
                *debts
                    .entry(member)
                    .or_insert_with(IndexMap::new)
                    .entry(payer)
                    .or_insert(0.0) += share;
            });
        }

        let mut transfers = Vec::new();
        for (&from, owed) in &debts {
            for (&to, &amount) in owed {
                let reverse = debts
                    .get(&to)
                    .and_then(|owed_back| owed_back.get(&from))
                    .copied()
                    .unwrap_or(0.0);
                // Only the heavier direction of a pair produces a transfer.
                if amount > reverse {
                    let net = smart_round(amount - reverse, rounding);
                    if net > 0.0 {
                        transfers.push(Transfer {
                            from,
                            to,
                            amount: net,
                        });
                    }
                }
            }
        }

        tracing::debug!(
            pair_count = debts.values().map(|owed| owed.len()).sum::<usize>(),
            transfer_count = transfers.len(),
            rounding = ?rounding,
            "netted pairwise debts into settlement transfers"
        );

        transfers
    }
}
