#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    Bill, BillId, BillStatus, Member, MemberBalances, MemberId, SettlementPolicy, SplitItem,
    SplitRule, Transfer, SETTLED_TOLERANCE,
};
pub use services::{
    accumulate_balances, for_each_share, planner_for, smart_round, BalanceAccumulator,
    DirectPlanner, RoundingMode, SimplifiedPlanner, TransferPlanner,
};
