//! Divvy is the settlement engine behind a shared-expenses group tracker.
//!
//! The engine turns a group's expense log into two derived views:
//! - the net balance of every member, via [compute_balances], and
//! - the shortest list of transfers that settles those balances, via
//!   [plan_settlements].
//!
//! Both are pure functions over an in-memory [GroupSnapshot]. Persistence,
//! HTTP, and display belong to the embedding application; the engine only
//! reads the records it is handed and derives everything else on each call,
//! so results are idempotent and safe to recompute concurrently. Amounts are
//! exact decimals rounded to cents, and a balance within one cent of zero
//! counts as settled.
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use time::macros::date;
//!
//! use divvy::{Expense, GroupSnapshot, settle_group};
//!
//! let members = vec!["Alice".to_owned(), "Bob".to_owned(), "Carol".to_owned()];
//! let dinner = Expense::build(
//!         "Dinner".to_owned(),
//!         date!(2024 - 03 - 05),
//!         "Alice".to_owned(),
//!         dec!(300),
//!     )
//!     .split_equally_among(&members)
//!     .unwrap();
//!
//! let report = settle_group(&GroupSnapshot {
//!     members,
//!     expenses: vec![dinner],
//! })
//! .unwrap();
//!
//! assert_eq!(report.balances["Alice"], dec!(200));
//! assert_eq!(report.settlements.len(), 2);
//! ```

#![warn(missing_docs)]

mod balance;
mod error;
mod expense;
mod group;
mod money;
mod report;
mod settlement;

pub use balance::compute_balances;
pub use error::Error;
pub use expense::{Expense, ExpenseBuilder, SplitShare};
pub use group::{GroupSnapshot, Member};
pub use money::{CENT, EPSILON, is_settled, round_to_cent};
pub use report::{SettlementReport, settle_group};
pub use settlement::{Settlement, apply_settlements, plan_settlements};
