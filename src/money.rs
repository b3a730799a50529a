//! Cent precision helpers shared by the balance and settlement logic.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// The smallest tracked denomination of the group's currency unit.
pub const CENT: Decimal = dec!(0.01);

/// The tolerance within which a balance counts as settled.
///
/// Matches the smallest tracked denomination so that rounding a share to
/// cents can never leave a member looking unsettled.
pub const EPSILON: Decimal = dec!(0.01);

/// Round an amount to the smallest tracked denomination.
pub fn round_to_cent(amount: Decimal) -> Decimal {
    amount.round_dp(2)
}

/// Whether a balance is close enough to zero to count as settled.
pub fn is_settled(balance: Decimal) -> bool {
    balance.abs() <= EPSILON
}


#[cfg(test)]
mod is_settled_tests {
    use rust_decimal_macros::dec;

    use super::is_settled;

    #[test]
    fn treats_amounts_within_a_cent_as_settled() {
        assert!(is_settled(dec!(0)));
        assert!(is_settled(dec!(0.01)));
        assert!(is_settled(dec!(-0.01)));
    }

    #[test]
    fn treats_amounts_beyond_a_cent_as_unsettled() {
        assert!(!is_settled(dec!(0.02)));
        assert!(!is_settled(dec!(-100)));
    }
}
