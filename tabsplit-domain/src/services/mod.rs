pub mod balance_accumulator;
pub mod rounding;
pub mod transfer_planner;

pub use balance_accumulator::{accumulate_balances, for_each_share, BalanceAccumulator};
pub use rounding::{smart_round, RoundingMode};
pub use transfer_planner::{planner_for, DirectPlanner, SimplifiedPlanner, TransferPlanner};
