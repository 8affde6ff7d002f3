//! # Account Module
//!
//! The closed account variant {Checking, Saving} and the account
//! entity: a type-tagged id, a balance, and the id-sorted sequence of
//! executed transactions.
//!
//! Variant rules:
//! - Checking: a withdrawal is rejected iff it would push the balance
//!   below the negative overdraft limit; a successful withdrawal that
//!   leaves the balance negative incurs the fixed overdraft fee, with
//!   no second limit check.
//! - Saving: a withdrawal is rejected iff the amount exceeds the
//!   balance; interest applies only to this variant.

use crate::config::Config;
use crate::customer::CustomerId;
use crate::id::IdGenerator;
use crate::sorted;
use crate::transaction::{Transaction, TransactionId, TransactionKind};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use tracing::{info, warn};

/// Closed set of account variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountType {
    Checking,
    Saving,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Checking => "Checking",
            AccountType::Saving => "Saving",
        }
    }

    /// One-character tag appended to the numeric id.
    pub fn suffix(&self) -> char {
        match self {
            AccountType::Checking => 'C',
            AccountType::Saving => 'S',
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Type-tagged account id: the numeric part followed by the variant
/// suffix ('C' or 'S'). The numeric part is fixed-width, so the
/// lexicographic ordering used by the sorted containers matches the
/// numeric ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(numeric: u32, account_type: AccountType) -> Self {
        Self(format!("{}{}", numeric, account_type.suffix()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Lookup keys may come straight from user input; an id that matches
// no account simply fails the search.
impl From<&str> for AccountId {
    fn from(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer's account: balance plus the id-sorted transaction log.
///
/// `customer_id` is a non-owning back-reference to the owner, kept
/// for display only.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub account_type: AccountType,
    pub customer_id: CustomerId,
    pub balance: Decimal,
    transactions: Vec<Transaction>,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub(crate) fn new(
        id: AccountId,
        account_type: AccountType,
        customer_id: CustomerId,
        balance: Decimal,
    ) -> Self {
        info!(account_id = %id, %account_type, customer_id, %balance, "account created");
        Self {
            id,
            account_type,
            customer_id,
            balance,
            transactions: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Transactions in ascending id order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Binary search over the sorted transaction log.
    pub fn find_transaction(&self, id: TransactionId) -> Option<&Transaction> {
        sorted::find_by_key(&self.transactions, &id, |t| t.id).map(|index| &self.transactions[index])
    }

    /// Execute an operation against this account and retain the record
    /// at its sorted position. Rejected withdrawals leave the balance
    /// untouched and come back with the `invalid` flag set.
    ///
    /// Transfer kinds only debit this account; the sibling credit and
    /// all transfer validation belong to [`crate::customer::Customer::transfer`].
    pub(crate) fn record(
        &mut self,
        kind: TransactionKind,
        amount: Decimal,
        ids: &mut IdGenerator,
        config: &Config,
    ) -> &Transaction {
        let id = ids.generate(&config.transaction_id_range, |candidate| {
            self.find_transaction(candidate).is_some()
        });

        let balance_before = self.balance;
        let accepted = match &kind {
            TransactionKind::Deposit => {
                self.deposit(amount);
                true
            }
            TransactionKind::Withdraw => self.withdraw(amount, config),
            TransactionKind::Transfer { .. } => {
                // Caller has already validated the destination and amount.
                self.balance -= amount;
                true
            }
        };

        let transaction = Transaction {
            id,
            account_id: self.id.clone(),
            amount,
            kind,
            balance_before,
            balance_after: self.balance,
            invalid: !accepted,
            created_at: Utc::now(),
        };
        let index = sorted::insert_by_key(&mut self.transactions, transaction, |t| t.id);
        &self.transactions[index]
    }

    /// Always succeeds; positivity is validated upstream.
    fn deposit(&mut self, amount: Decimal) {
        self.balance += amount;
    }

    /// Variant-specific withdrawal. Returns whether the debit was
    /// accepted; a rejection mutates nothing.
    fn withdraw(&mut self, amount: Decimal, config: &Config) -> bool {
        match self.account_type {
            AccountType::Checking => {
                if self.balance - amount < -config.overdraft_limit {
                    warn!(account_id = %self.id, %amount, "withdrawal rejected: overdraft limit");
                    return false;
                }
                self.balance -= amount;
                if self.balance < Decimal::ZERO {
                    self.apply_overdraft_fee(config.overdraft_fee);
                }
                true
            }
            AccountType::Saving => {
                if amount > self.balance {
                    warn!(account_id = %self.id, %amount, "withdrawal rejected: insufficient funds");
                    return false;
                }
                self.balance -= amount;
                true
            }
        }
    }

    /// Internal to the Checking withdrawal path; the fee itself is not
    /// re-validated against the overdraft limit.
    fn apply_overdraft_fee(&mut self, fee: Decimal) {
        self.balance -= fee;
        info!(account_id = %self.id, %fee, "overdraft fee applied");
    }

    /// Credit interest. Only Saving accounts accrue; a negative
    /// configured rate is ignored. Returns whether interest applied.
    pub(crate) fn apply_interest(&mut self, rate: Decimal) -> bool {
        if self.account_type != AccountType::Saving || rate < Decimal::ZERO {
            return false;
        }
        self.balance += self.balance * rate;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn checking(balance: Decimal) -> Account {
        Account::new(
            AccountId::new(123_456, AccountType::Checking),
            AccountType::Checking,
            10_000,
            balance,
        )
    }

    fn saving(balance: Decimal) -> Account {
        Account::new(
            AccountId::new(654_321, AccountType::Saving),
            AccountType::Saving,
            10_000,
            balance,
        )
    }

    fn harness() -> (IdGenerator, Config) {
        (IdGenerator::from_seed(42), Config::default())
    }

    #[test]
    fn id_carries_type_suffix() {
        assert_eq!(AccountId::new(100_000, AccountType::Checking).as_str(), "100000C");
        assert_eq!(AccountId::new(999_999, AccountType::Saving).as_str(), "999999S");
    }

    #[test]
    fn deposit_never_invalid() {
        let (mut ids, config) = harness();
        let mut account = saving(dec!(0));
        let tx = account.record(TransactionKind::Deposit, dec!(10.00), &mut ids, &config);
        assert!(!tx.invalid);
        assert_eq!(tx.balance_before, dec!(0));
        assert_eq!(tx.balance_after, dec!(10.00));
        assert_eq!(account.balance, dec!(10.00));
    }

    #[test]
    fn checking_overdraft_fee_triggers() {
        let (mut ids, config) = harness();
        let mut account = checking(dec!(50.00));
        let tx = account.record(TransactionKind::Withdraw, dec!(60.00), &mut ids, &config);
        assert!(!tx.invalid);
        // 50 - 60 = -10, then the 35.00 fee lands with no re-check.
        assert_eq!(tx.balance_after, dec!(-45.00));
        assert_eq!(account.balance, dec!(-45.00));
    }

    #[test]
    fn checking_overdraft_limit_rejects() {
        let (mut ids, config) = harness();
        let mut account = checking(dec!(50.00));
        let tx = account.record(TransactionKind::Withdraw, dec!(200.00), &mut ids, &config);
        assert!(tx.invalid);
        assert_eq!(tx.amount, dec!(200.00));
        assert_eq!(tx.balance_before, dec!(50.00));
        assert_eq!(tx.balance_after, dec!(50.00));
        assert_eq!(account.balance, dec!(50.00));
        // The rejected attempt is retained as an audit record.
        assert_eq!(account.transactions().len(), 1);
    }

    #[test]
    fn checking_exact_limit_is_accepted() {
        let (mut ids, config) = harness();
        let mut account = checking(dec!(50.00));
        // 50 + 100 = 150 is exactly withdrawable.
        let tx = account.record(TransactionKind::Withdraw, dec!(150.00), &mut ids, &config);
        assert!(!tx.invalid);
        assert_eq!(account.balance, dec!(-135.00)); // -100 then the fee
    }

    #[test]
    fn saving_insufficient_funds_rejects() {
        let (mut ids, config) = harness();
        let mut account = saving(dec!(30.00));
        let tx = account.record(TransactionKind::Withdraw, dec!(50.00), &mut ids, &config);
        assert!(tx.invalid);
        assert_eq!(account.balance, dec!(30.00));
    }

    #[test]
    fn saving_balance_never_negative() {
        let (mut ids, config) = harness();
        let mut account = saving(dec!(100.00));
        for amount in [dec!(40.00), dec!(40.00), dec!(40.00), dec!(40.00)] {
            account.record(TransactionKind::Withdraw, amount, &mut ids, &config);
            assert!(account.balance >= Decimal::ZERO);
        }
        assert_eq!(account.balance, dec!(20.00));
    }

    #[test]
    fn interest_on_saving_only() {
        let rate = dec!(0.05);
        let mut savings = saving(dec!(100.00));
        assert!(savings.apply_interest(rate));
        assert_eq!(savings.balance, dec!(105.00));

        let mut spending = checking(dec!(100.00));
        assert!(!spending.apply_interest(rate));
        assert_eq!(spending.balance, dec!(100.00));
    }

    #[test]
    fn negative_rate_is_ignored() {
        let mut savings = saving(dec!(100.00));
        assert!(!savings.apply_interest(dec!(-0.05)));
        assert_eq!(savings.balance, dec!(100.00));
    }

    #[test]
    fn transaction_log_stays_sorted() {
        let (mut ids, config) = harness();
        let mut account = checking(dec!(1000.00));
        for _ in 0..20 {
            account.record(TransactionKind::Deposit, dec!(1.00), &mut ids, &config);
        }
        let log = account.transactions();
        assert!(log.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn find_transaction_round_trip() {
        let (mut ids, config) = harness();
        let mut account = checking(dec!(100.00));
        let id = account
            .record(TransactionKind::Deposit, dec!(5.00), &mut ids, &config)
            .id;
        assert_eq!(account.find_transaction(id).map(|t| t.id), Some(id));
        // An id from outside the populated set misses.
        let absent = if id == 1_000_000 { 1_000_001 } else { 1_000_000 };
        assert!(account.find_transaction(absent).is_none());
    }
}
