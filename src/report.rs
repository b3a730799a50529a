//! The combined settlement report consumed by display layers.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    balance::compute_balances,
    error::Error,
    group::{GroupSnapshot, Member},
    settlement::{Settlement, plan_settlements},
};

/// Everyone's net balance plus the transfers that would settle them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementReport {
    /// Net balance per member. Positive is owed money, negative owes money.
    pub balances: BTreeMap<Member, Decimal>,
    /// The transfers that settle every balance.
    pub settlements: Vec<Settlement>,
}

/// Compute the full settlement report for a group snapshot.
///
/// The one-call entry point for callers that want both views at once, such
/// as a service layer answering a read-only settlements request. The report
/// is derived in full on every call and holds no reference to the snapshot.
///
/// # Errors
/// Returns the data-integrity errors of [compute_balances]; no report is
/// produced from an expense log that fails validation.
pub fn settle_group(group: &GroupSnapshot) -> Result<SettlementReport, Error> {
    let balances = compute_balances(&group.members, &group.expenses)?;
    let settlements = plan_settlements(&balances);

    tracing::debug!(
        members = group.members.len(),
        expenses = group.expenses.len(),
        settlements = settlements.len(),
        "settlement report computed"
    );

    Ok(SettlementReport {
        balances,
        settlements,
    })
}


#[cfg(test)]
mod wire_format_tests {
    use rust_decimal_macros::dec;
    use serde_json::json;
    use time::macros::date;

    use super::settle_group;
    use crate::{expense::Expense, group::GroupSnapshot};

    #[test]
    fn snapshot_deserializes_from_the_wire_shape() {
        let payload = json!({
            "members": ["Alice", "Bob", "Carol"],
            "expenses": [{
                "description": "Dinner",
                "date": "2024-03-05",
                "paidBy": "Alice",
                "amount": 300.0,
                "splitDetails": [
                    { "member": "Alice", "amount": 100.0 },
                    { "member": "Bob", "amount": 100.0 },
                    { "member": "Carol", "amount": 100.0 }
                ]
            }]
        });

        let group: GroupSnapshot =
            serde_json::from_value(payload).expect("payload matches the snapshot shape");

        let report = settle_group(&group).expect("expense log is valid");
        assert_eq!(report.settlements.len(), 2);
    }

    #[test]
    fn report_serializes_with_the_wire_field_names() {
        let group = GroupSnapshot {
            members: vec!["Alice".to_owned(), "Bob".to_owned()],
            expenses: vec![
                Expense::build(
                    "Lunch".to_owned(),
                    date!(2024 - 03 - 05),
                    "Alice".to_owned(),
                    dec!(50),
                )
                .split_equally_among(&["Alice".to_owned(), "Bob".to_owned()])
                .expect("two participants should be a valid split"),
            ],
        };

        let report = settle_group(&group).expect("expense log is valid");
        let value = serde_json::to_value(&report).expect("report serializes to JSON");

        assert_eq!(value["balances"]["Alice"], json!(25.0));
        assert_eq!(value["balances"]["Bob"], json!(-25.0));
        assert_eq!(value["settlements"][0]["from"], json!("Bob"));
        assert_eq!(value["settlements"][0]["to"], json!("Alice"));
        assert_eq!(value["settlements"][0]["amount"], json!(25.0));
    }
}
