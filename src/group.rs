//! The group snapshot handed to the settlement engine by its caller.

use serde::{Deserialize, Serialize};

use crate::expense::Expense;

/// Alias for the opaque, case-sensitive identifier naming a group member.
pub type Member = String;

/// A read-only snapshot of a group's roster and expense log.
///
/// The surrounding group-management layer owns and persists both lists; the
/// engine reads them per invocation and derives everything else, so there is
/// no balance state to go stale. `members` is the authoritative participant
/// set, and expenses naming anyone outside it are rejected as a
/// data-integrity error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSnapshot {
    /// Every participant in the group, including those with no activity.
    pub members: Vec<Member>,
    /// The full expense log for the group.
    pub expenses: Vec<Expense>,
}
