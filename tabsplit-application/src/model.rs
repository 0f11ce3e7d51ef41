use tabsplit_domain::{
    accumulate_balances, planner_for, Bill, Member, MemberBalances, SettlementPolicy, Transfer,
};

/// Read-only view of the host application's store for one computation pass.
///
/// The engine borrows the snapshot and returns new values; it never mutates
/// the underlying records, so concurrent computations over different
/// snapshots cannot interfere.
#[derive(Clone, Copy, Debug)]
pub struct LedgerSnapshot<'a> {
    pub members: &'a [Member],
    pub bills: &'a [Bill],
    pub policy: SettlementPolicy,
}

impl LedgerSnapshot<'_> {
    /// Net balance per member across the snapshot's open bills.
    pub fn balances(&self) -> MemberBalances {
        accumulate_balances(self.members, self.bills)
    }

    /// The flat settlement plan, computed with the planner the policy
    /// selects.
    pub fn settlement_plan(&self) -> Vec<Transfer> {
        tracing::debug!(
            member_count = self.members.len(),
            open_bills = self.open_bill_count(),
            simplify_debts = self.policy.simplify_debts,
            rounding = ?self.policy.rounding,
            "computing settlement plan"
        );
        planner_for(&self.policy).plan(self.members, self.bills, self.policy.rounding)
    }

    pub fn open_bill_count(&self) -> usize {
        self.bills.iter().filter(|bill| bill.is_open()).count()
    }
}
