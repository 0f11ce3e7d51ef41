#![warn(clippy::uninlined_format_args)]

pub mod debt_book;
pub mod error;
pub mod model;
pub mod roster;
pub mod settlement;

pub use debt_book::{DebtBook, DebtKind, DebtRecord, DebtStatus};
pub use error::{validate_bill, BillValidationError};
pub use model::LedgerSnapshot;
pub use roster::{add_member, remove_member};
pub use settlement::settle_all_bills;
