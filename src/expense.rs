//! Shared expense records and the split strategies that divide them.
//!
//! This module contains everything related to expenses:
//! - The `Expense` model and `ExpenseBuilder` for creating expenses
//! - The split strategies groups record expenses with: even splits, exact
//!   amounts, and percentages of the total

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    error::Error,
    group::Member,
    money::{CENT, EPSILON},
};

/// One member's portion of an expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitShare {
    /// The member the portion is assigned to.
    pub member: Member,
    /// The portion of the expense amount owed by the member.
    pub amount: Decimal,
}

/// A single shared expense fronted by one member on behalf of the group.
///
/// To create a new `Expense`, use [Expense::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// A text description of what the expense was for.
    pub description: String,
    /// When the expense happened.
    pub date: Date,
    /// The member who fronted the money.
    pub paid_by: Member,
    /// The amount of money paid.
    pub amount: Decimal,
    /// How the amount divides among members.
    ///
    /// The shares should sum to `amount`; [crate::compute_balances] rejects
    /// expenses where they do not.
    pub split_details: Vec<SplitShare>,
}

impl Expense {
    /// Create a new expense.
    ///
    /// Shortcut for [ExpenseBuilder] for discoverability.
    pub fn build(
        description: String,
        date: Date,
        paid_by: Member,
        amount: Decimal,
    ) -> ExpenseBuilder {
        ExpenseBuilder {
            description,
            date,
            paid_by,
            amount,
        }
    }
}

/// A builder for creating [Expense] instances.
///
/// The builder captures who paid and how much; one of the split methods then
/// divides the amount among members and produces the finished [Expense].
///
/// # Examples
///
/// ```rust
/// use rust_decimal_macros::dec;
/// use time::macros::date;
///
/// use divvy::Expense;
///
/// let dinner = Expense::build(
///         "Dinner".to_owned(),
///         date!(2024 - 03 - 05),
///         "Alice".to_owned(),
///         dec!(90),
///     )
///     .split_equally_among(&["Alice".to_owned(), "Bob".to_owned(), "Carol".to_owned()])
///     .unwrap();
///
/// assert_eq!(dinner.split_details[1].amount, dec!(30));
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct ExpenseBuilder {
    description: String,
    date: Date,
    paid_by: Member,
    amount: Decimal,
}

impl ExpenseBuilder {
    /// Divide the amount evenly among `participants`.
    ///
    /// Shares are expanded to exact cents. When the amount does not divide
    /// evenly, the leftover cents go to the participants at the front of the
    /// list, one cent each, so the shares still sum to the amount.
    ///
    /// # Errors
    /// Returns [Error::EmptySplit] if `participants` is empty.
    pub fn split_equally_among(self, participants: &[Member]) -> Result<Expense, Error> {
        if participants.is_empty() {
            return Err(Error::EmptySplit {
                description: self.description,
            });
        }

        let count = Decimal::from(participants.len() as u64);
        let base = (self.amount / count).round_dp_with_strategy(2, RoundingStrategy::ToZero);
        let mut leftover = self.amount - base * count;

        let split_details = participants
            .iter()
            .map(|member| {
                let mut amount = base;
                if leftover >= CENT {
                    amount += CENT;
                    leftover -= CENT;
                }
                SplitShare {
                    member: member.clone(),
                    amount,
                }
            })
            .collect();

        Ok(Expense {
            description: self.description,
            date: self.date,
            paid_by: self.paid_by,
            amount: self.amount,
            split_details,
        })
    }

    /// Assign each participant an exact share.
    ///
    /// No validation happens here; [crate::compute_balances] checks the
    /// shares against the amount when the expense enters a computation.
    pub fn split_exact(self, split_details: Vec<SplitShare>) -> Expense {
        Expense {
            description: self.description,
            date: self.date,
            paid_by: self.paid_by,
            amount: self.amount,
            split_details,
        }
    }

    /// Divide the amount by percentage of the total.
    ///
    /// All but the last share are rounded to the nearest cent; the last
    /// share absorbs the rounding so the shares sum to the amount exactly.
    ///
    /// # Errors
    /// Returns [Error::EmptySplit] if `percentages` is empty, or
    /// [Error::InvalidPercentageSplit] if the percentages do not sum to 100.
    pub fn split_by_percentage(
        self,
        percentages: &[(Member, Decimal)],
    ) -> Result<Expense, Error> {
        if percentages.is_empty() {
            return Err(Error::EmptySplit {
                description: self.description,
            });
        }

        let total: Decimal = percentages.iter().map(|(_, percent)| *percent).sum();
        if (total - dec!(100)).abs() > EPSILON {
            return Err(Error::InvalidPercentageSplit {
                description: self.description,
                total,
            });
        }

        let mut split_details = Vec::with_capacity(percentages.len());
        let mut allocated = Decimal::ZERO;

        for (index, (member, percent)) in percentages.iter().enumerate() {
            let amount = if index == percentages.len() - 1 {
                self.amount - allocated
            } else {
                let share = (self.amount * *percent / dec!(100)).round_dp(2);
                allocated += share;
                share
            };

            split_details.push(SplitShare {
                member: member.clone(),
                amount,
            });
        }

        Ok(Expense {
            description: self.description,
            date: self.date,
            paid_by: self.paid_by,
            amount: self.amount,
            split_details,
        })
    }
}


#[cfg(test)]
mod split_by_percentage_tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use time::macros::date;

    use super::Expense;
    use crate::error::Error;

    #[test]
    fn divides_by_percentage() {
        let expense = Expense::build(
            "Rent".to_owned(),
            date!(2024 - 03 - 01),
            "Alice".to_owned(),
            dec!(1200),
        )
        .split_by_percentage(&[
            ("Alice".to_owned(), dec!(50)),
            ("Bob".to_owned(), dec!(30)),
            ("Carol".to_owned(), dec!(20)),
        ])
        .expect("percentages summing to 100 should be a valid split");

        let amounts: Vec<Decimal> = expense
            .split_details
            .iter()
            .map(|share| share.amount)
            .collect();

        assert_eq!(amounts, vec![dec!(600), dec!(360), dec!(240)]);
    }

    #[test]
    fn last_share_absorbs_rounding() {
        let expense = Expense::build(
            "Rent".to_owned(),
            date!(2024 - 03 - 01),
            "Alice".to_owned(),
            dec!(10),
        )
        .split_by_percentage(&[
            ("Alice".to_owned(), dec!(33.33)),
            ("Bob".to_owned(), dec!(33.33)),
            ("Carol".to_owned(), dec!(33.34)),
        ])
        .expect("percentages summing to 100 should be a valid split");

        let share_total: Decimal = expense
            .split_details
            .iter()
            .map(|share| share.amount)
            .sum();

        assert_eq!(share_total, dec!(10));
        // 33.34% of 10 rounds to 3.33; the last share picks up the cent.
        assert_eq!(expense.split_details[2].amount, dec!(3.34));
    }

    #[test]
    fn rejects_percentages_that_do_not_sum_to_100() {
        let result = Expense::build(
            "Rent".to_owned(),
            date!(2024 - 03 - 01),
            "Alice".to_owned(),
            dec!(1200),
        )
        .split_by_percentage(&[
            ("Alice".to_owned(), dec!(50)),
            ("Bob".to_owned(), dec!(30)),
        ]);

        assert_eq!(
            result,
            Err(Error::InvalidPercentageSplit {
                description: "Rent".to_owned(),
                total: dec!(80),
            })
        );
    }

    #[test]
    fn rejects_an_empty_percentage_list() {
        let result = Expense::build(
            "Rent".to_owned(),
            date!(2024 - 03 - 01),
            "Alice".to_owned(),
            dec!(1200),
        )
        .split_by_percentage(&[]);

        assert_eq!(
            result,
            Err(Error::EmptySplit {
                description: "Rent".to_owned()
            })
        );
    }
}
