//! # Transaction Module
//!
//! An immutable record of one ledger operation and its effect on the
//! owning account's balance. A transaction is created and executed in
//! a single step by [`crate::account::Account::record`] and never
//! mutated afterward; rejected withdrawals are retained with the
//! `invalid` flag set, as an audit trail of the attempt.

use crate::account::AccountId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;

pub type TransactionId = u32;

/// The operation a transaction performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionKind {
    /// Credit the owning account
    Deposit,
    /// Debit the owning account, subject to the variant's rules
    Withdraw,
    /// Debit the owning account and credit a sibling account
    Transfer { destination: AccountId },
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdraw => "Withdraw",
            TransactionKind::Transfer { .. } => "Transfer",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One executed ledger operation.
///
/// `account_id` is a back-reference to the owning account, kept only
/// for display; the account owns the record, not the other way round.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: TransactionId,
    pub account_id: AccountId,
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub balance_before: Decimal,
    pub balance_after: Decimal,
    /// Set iff a Withdraw was rejected by the account's business rules
    pub invalid: bool,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Transaction ID: {}", self.id)?;
        writeln!(f, "Transaction Type: {}", self.kind)?;
        if let TransactionKind::Transfer { destination } = &self.kind {
            writeln!(f, "Destination Account: {}", destination)?;
        }
        writeln!(f, "Transaction Amount: ${:.2}", self.amount)?;
        writeln!(f, "Balance before transaction: ${:.2}", self.balance_before)?;
        write!(f, "Balance after transaction: ${:.2}", self.balance_after)?;
        if self.invalid {
            write!(f, "\nStatus: INVALID (rejected by account rules)")?;
        }
        Ok(())
    }
}
