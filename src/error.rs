//! Defines the crate level error type for data-integrity failures.

use rust_decimal::Decimal;

use crate::group::Member;

/// The errors that may occur while turning a group's expense log into
/// balances and settlements.
///
/// Every variant is a data-integrity failure in the caller-supplied records.
/// The computation is rejected outright rather than patched up, since a
/// silently corrected result would misstate who owes what.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An expense names a payer or split member that is not in the
    /// authoritative member list.
    ///
    /// The member list the caller supplies is the single source of truth for
    /// who belongs to the group, so a name outside it points at corrupted
    /// expense data and is never silently dropped.
    #[error("expense \"{description}\" references \"{member}\", who is not a group member")]
    UnknownMember {
        /// The description of the offending expense.
        description: String,
        /// The name that could not be matched against the member list.
        member: Member,
    },

    /// An expense was recorded with a zero or negative amount.
    #[error("expense \"{description}\" has a non-positive amount of {amount}")]
    NonPositiveAmount {
        /// The description of the offending expense.
        description: String,
        /// The recorded amount.
        amount: Decimal,
    },

    /// A split share assigns a member a negative portion of an expense.
    #[error("expense \"{description}\" assigns \"{member}\" a negative share of {amount}")]
    NegativeShare {
        /// The description of the offending expense.
        description: String,
        /// The member the share is assigned to.
        member: Member,
        /// The recorded share.
        amount: Decimal,
    },

    /// The split shares of an expense do not add up to the amount paid.
    ///
    /// Accepting such an expense would make the group's balances drift away
    /// from zero-sum, leaving money unaccounted for.
    #[error("shares of expense \"{description}\" sum to {share_total}, expected {amount}")]
    SplitSumMismatch {
        /// The description of the offending expense.
        description: String,
        /// What the shares add up to.
        share_total: Decimal,
        /// The amount the expense was recorded with.
        amount: Decimal,
    },

    /// An expense was split among no one.
    #[error("expense \"{description}\" is split among no members")]
    EmptySplit {
        /// The description of the offending expense.
        description: String,
    },

    /// The percentages of a percentage split do not add up to 100.
    #[error("split percentages for expense \"{description}\" sum to {total}, expected 100")]
    InvalidPercentageSplit {
        /// The description of the offending expense.
        description: String,
        /// What the percentages add up to.
        total: Decimal,
    },
}
