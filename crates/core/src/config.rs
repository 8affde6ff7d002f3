//! # Config Module
//!
//! All tunable constants of the ledger gathered into one immutable
//! struct held by the ledger root, so tests can override fees, rates,
//! and id ranges without touching the domain types.

use rust_decimal::Decimal;
use std::ops::RangeInclusive;

/// Ledger-wide configuration: identifier ranges, balance bounds, and
/// the business-rule constants for the account variants.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bank ids are drawn from this closed range
    pub bank_id_range: RangeInclusive<u32>,
    /// Customer ids are drawn from this closed range
    pub customer_id_range: RangeInclusive<u32>,
    /// Numeric part of account ids (a type suffix char is appended)
    pub account_id_range: RangeInclusive<u32>,
    /// Transaction ids are drawn from this closed range
    pub transaction_id_range: RangeInclusive<u32>,

    /// Customer age accepted at creation
    pub age_range: RangeInclusive<u8>,

    /// Floor for the initial balance of a new account
    pub min_starting_balance: Decimal,
    /// Ceiling for any balance the input layer will accept
    pub max_balance: Decimal,
    /// Smallest transaction amount the input layer will accept
    pub min_transaction_amount: Decimal,
    /// Largest transaction amount the input layer will accept
    pub max_transaction_amount: Decimal,

    /// Interest rate applied to Saving accounts
    pub interest_rate: Decimal,
    /// Fixed penalty when a Checking withdrawal leaves the balance negative
    pub overdraft_fee: Decimal,
    /// Maximum negative balance a Checking account may reach
    pub overdraft_limit: Decimal,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bank_id_range: 1_000..=9_999,
            customer_id_range: 10_000..=99_999,
            account_id_range: 100_000..=999_999,
            transaction_id_range: 1_000_000..=9_999_999,
            age_range: 16..=120,
            min_starting_balance: Decimal::new(5_000, 2), // 50.00
            max_balance: Decimal::new(100_000_000, 2),    // 1,000,000.00
            min_transaction_amount: Decimal::new(100, 2), // 1.00
            max_transaction_amount: Decimal::new(1_000_000, 2), // 10,000.00
            interest_rate: Decimal::new(5, 2),            // 0.05
            overdraft_fee: Decimal::new(3_500, 2),        // 35.00
            overdraft_limit: Decimal::new(10_000, 2),     // 100.00
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn default_constants() {
        let config = Config::default();
        assert_eq!(config.bank_id_range, 1_000..=9_999);
        assert_eq!(config.transaction_id_range, 1_000_000..=9_999_999);
        assert_eq!(config.min_starting_balance, dec!(50.00));
        assert_eq!(config.interest_rate, dec!(0.05));
        assert_eq!(config.overdraft_fee, dec!(35.00));
        assert_eq!(config.overdraft_limit, dec!(100.00));
    }
}
