//! Net balance computation for a group's expense log.
//!
//! Balances are recomputed fresh from the full expense list on every call.
//! Nothing is persisted between calls, so there is no balance state to go
//! stale; the expense log is the single source of truth.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::{
    error::Error,
    expense::Expense,
    group::Member,
    money::{EPSILON, round_to_cent},
};

/// Compute the net balance of every member across `expenses`.
///
/// A positive balance is owed money, a negative balance owes money. The
/// result has an entry for every member in `members`, including members with
/// no activity, and duplicate names in `members` collapse to one entry.
/// Whenever every expense's shares sum to its amount, the returned balances
/// sum to zero.
///
/// Pure function: the inputs are only read, so repeated and concurrent calls
/// are safe and always produce the same result.
///
/// # Errors
/// Returns an error when the expense log fails validation, rather than a
/// partial result that would misstate who owes what:
/// - [Error::UnknownMember] if an expense names a payer or split member
///   outside `members`.
/// - [Error::NonPositiveAmount] if an expense amount is zero or negative.
/// - [Error::NegativeShare] if a split share is negative.
/// - [Error::SplitSumMismatch] if an expense's shares diverge from its
///   amount by more than a cent.
pub fn compute_balances(
    members: &[Member],
    expenses: &[Expense],
) -> Result<BTreeMap<Member, Decimal>, Error> {
    let mut balances: BTreeMap<Member, Decimal> = members
        .iter()
        .map(|member| (member.clone(), Decimal::ZERO))
        .collect();

    for expense in expenses {
        validate(expense, &balances)?;

        *balances
            .get_mut(&expense.paid_by)
            .expect("payer validated against the member list") += expense.amount;

        for share in &expense.split_details {
            *balances
                .get_mut(&share.member)
                .expect("share member validated against the member list") -= share.amount;
        }
    }

    for balance in balances.values_mut() {
        *balance = round_to_cent(*balance);
    }

    Ok(balances)
}

fn validate(expense: &Expense, balances: &BTreeMap<Member, Decimal>) -> Result<(), Error> {
    if expense.amount <= Decimal::ZERO {
        return Err(Error::NonPositiveAmount {
            description: expense.description.clone(),
            amount: expense.amount,
        });
    }

    if !balances.contains_key(&expense.paid_by) {
        return Err(Error::UnknownMember {
            description: expense.description.clone(),
            member: expense.paid_by.clone(),
        });
    }

    let mut share_total = Decimal::ZERO;

    for share in &expense.split_details {
        if share.amount < Decimal::ZERO {
            return Err(Error::NegativeShare {
                description: expense.description.clone(),
                member: share.member.clone(),
                amount: share.amount,
            });
        }

        if !balances.contains_key(&share.member) {
            return Err(Error::UnknownMember {
                description: expense.description.clone(),
                member: share.member.clone(),
            });
        }

        share_total += share.amount;
    }

    if (share_total - expense.amount).abs() > EPSILON {
        return Err(Error::SplitSumMismatch {
            description: expense.description.clone(),
            share_total,
            amount: expense.amount,
        });
    }

    Ok(())
}
