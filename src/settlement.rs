//! Debt simplification: turning net balances into a short list of transfers.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{group::Member, money::EPSILON};

/// A proposed transfer that reduces outstanding net balances toward zero.
///
/// Settlements are suggestions for display, not expenses. Recording one as
/// paid is the caller's concern and does not feed back into the balance
/// computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    /// The debtor making the transfer.
    pub from: Member,
    /// The creditor receiving the transfer.
    pub to: Member,
    /// The amount to transfer.
    pub amount: Decimal,
}

/// Plan the transfers that settle every balance.
///
/// Members within a cent of zero are already settled and take no part in the
/// plan. The rest are split into debtors and creditors and matched greedily,
/// largest remainders first, transferring the smaller of the two remainders
/// at each step. The plan needs at most one fewer transfer than there are
/// unsettled members, and applying it in full drives every balance to within
/// a cent of zero. An already settled group produces an empty plan.
///
/// When the creditor and debtor totals do not match, meaning the balances
/// did not come out of [crate::compute_balances], the plan settles as much
/// as possible and the leftover is logged at `warn` level rather than
/// silently absorbed.
pub fn plan_settlements(balances: &BTreeMap<Member, Decimal>) -> Vec<Settlement> {
    let mut creditors: Vec<(&Member, Decimal)> = Vec::new();
    let mut debtors: Vec<(&Member, Decimal)> = Vec::new();

    for (member, &balance) in balances {
        if balance > EPSILON {
            creditors.push((member, balance));
        } else if balance < -EPSILON {
            debtors.push((member, -balance));
        }
    }

    // Largest remainders first; the ordered input map breaks ties by name.
    creditors.sort_by(|a, b| b.1.cmp(&a.1));
    debtors.sort_by(|a, b| b.1.cmp(&a.1));

    let mut settlements = Vec::new();
    let mut debtor_index = 0;
    let mut creditor_index = 0;

    while debtor_index < debtors.len() && creditor_index < creditors.len() {
        let transferred = debtors[debtor_index].1.min(creditors[creditor_index].1);

        settlements.push(Settlement {
            from: debtors[debtor_index].0.clone(),
            to: creditors[creditor_index].0.clone(),
            amount: transferred,
        });

        debtors[debtor_index].1 -= transferred;
        creditors[creditor_index].1 -= transferred;

        if debtors[debtor_index].1 <= EPSILON {
            debtor_index += 1;
        }
        if creditors[creditor_index].1 <= EPSILON {
            creditor_index += 1;
        }
    }

    let leftover: Decimal = debtors[debtor_index..]
        .iter()
        .chain(&creditors[creditor_index..])
        .map(|(_, remaining)| *remaining)
        .sum();
    if leftover > EPSILON {
        tracing::warn!(
            %leftover,
            "balances are not zero-sum, the settlement plan leaves a residual"
        );
    }

    settlements
}

/// Apply a settlement plan to a set of balances.
///
/// Each settlement credits the debtor and debits the creditor, so applying
/// the full plan from [plan_settlements] drives every balance to within a
/// cent of zero. Members named by a settlement but missing from `balances`
/// are left out.
pub fn apply_settlements(balances: &mut BTreeMap<Member, Decimal>, settlements: &[Settlement]) {
    for settlement in settlements {
        if let Some(balance) = balances.get_mut(&settlement.from) {
            *balance += settlement.amount;
        }
        if let Some(balance) = balances.get_mut(&settlement.to) {
            *balance -= settlement.amount;
        }
    }
}


#[cfg(test)]
mod apply_settlements_tests {
    use std::collections::BTreeMap;

    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::{Settlement, apply_settlements};

    #[test]
    fn credits_the_debtor_and_debits_the_creditor() {
        let mut balances: BTreeMap<String, Decimal> =
            [("Alice".to_owned(), dec!(50)), ("Bob".to_owned(), dec!(-50))].into();

        apply_settlements(
            &mut balances,
            &[Settlement {
                from: "Bob".to_owned(),
                to: "Alice".to_owned(),
                amount: dec!(50),
            }],
        );

        assert_eq!(balances["Alice"], Decimal::ZERO);
        assert_eq!(balances["Bob"], Decimal::ZERO);
    }

    #[test]
    fn leaves_unknown_members_out() {
        let mut balances: BTreeMap<String, Decimal> = [("Alice".to_owned(), dec!(50))].into();

        apply_settlements(
            &mut balances,
            &[Settlement {
                from: "Bob".to_owned(),
                to: "Alice".to_owned(),
                amount: dec!(50),
            }],
        );

        assert_eq!(balances["Alice"], Decimal::ZERO);
        assert_eq!(balances.len(), 1);
    }
}
