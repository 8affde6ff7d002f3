//! # Error Module
//!
//! Domain errors for the ledger core, via thiserror.
//!
//! Rejected withdrawals are not errors: they produce a retained,
//! flagged transaction record (see [`crate::transaction`]). Errors
//! here cover lookup misses, transfer rejections, and the
//! no-savings interest no-op.

use crate::account::AccountId;
use crate::bank::BankId;
use crate::customer::CustomerId;
use crate::transaction::TransactionId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Core domain errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Bank not found: {0}")]
    BankNotFound(BankId),

    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),

    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("Transaction not found: {0}")]
    TransactionNotFound(TransactionId),

    #[error("Cannot transfer from account {0} to itself")]
    SameAccountTransfer(AccountId),

    #[error("Transfer of {requested} exceeds balance {available} on account {account}")]
    TransferExceedsBalance {
        account: AccountId,
        requested: Decimal,
        available: Decimal,
    },

    #[error("No saving accounts exist anywhere; interest not applied")]
    NoSavingAccounts,
}

pub type CoreResult<T> = Result<T, CoreError>;
