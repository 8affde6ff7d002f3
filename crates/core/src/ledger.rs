//! # Ledger Root
//!
//! The top-level, id-sorted collection of banks. The ledger holds the
//! immutable [`Config`] and the [`IdGenerator`] and exposes the
//! cascading create/lookup entry points the console layer drives, so
//! collection internals never leak past this module.

use crate::account::{Account, AccountId, AccountType};
use crate::bank::{Bank, BankId};
use crate::config::Config;
use crate::customer::{Customer, CustomerId};
use crate::error::{CoreError, CoreResult};
use crate::id::IdGenerator;
use crate::sorted;
use crate::transaction::{Transaction, TransactionKind};
use rust_decimal::Decimal;

/// Process-wide root of the entity tree:
/// banks → customers → accounts → transactions.
#[derive(Debug)]
pub struct Ledger {
    banks: Vec<Bank>,
    config: Config,
    ids: IdGenerator,
}

impl Ledger {
    pub fn new(config: Config) -> Self {
        Self {
            banks: Vec::new(),
            config,
            ids: IdGenerator::new(),
        }
    }

    /// Deterministic id sequence for tests.
    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self {
            banks: Vec::new(),
            config,
            ids: IdGenerator::from_seed(seed),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Banks in ascending id order.
    pub fn banks(&self) -> &[Bank] {
        &self.banks
    }

    /// Create a bank and insert it at its sorted position.
    pub fn add_bank(&mut self, name: &str) -> &Bank {
        let Self { banks, config, ids } = self;
        let id = ids.generate(&config.bank_id_range, |candidate| {
            sorted::find_by_key(banks, &candidate, |b| b.id).is_some()
        });
        let index = sorted::insert_by_key(banks, Bank::new(id, name), |b| b.id);
        &self.banks[index]
    }

    /// Binary search over the sorted bank sequence.
    pub fn find_bank(&self, id: BankId) -> Option<&Bank> {
        sorted::find_by_key(&self.banks, &id, |b| b.id).map(|index| &self.banks[index])
    }

    /// Create a customer in the given bank.
    pub fn add_customer(
        &mut self,
        bank_id: BankId,
        first_name: &str,
        last_name: &str,
        age: u8,
    ) -> CoreResult<&Customer> {
        let Self { banks, config, ids } = self;
        let index = sorted::find_by_key(banks, &bank_id, |b| b.id)
            .ok_or(CoreError::BankNotFound(bank_id))?;
        Ok(banks[index].add_customer(first_name, last_name, age, ids, config))
    }

    /// Open an account for the given customer.
    pub fn open_account(
        &mut self,
        bank_id: BankId,
        customer_id: CustomerId,
        account_type: AccountType,
        initial_balance: Decimal,
    ) -> CoreResult<&Account> {
        let Self { banks, config, ids } = self;
        let index = sorted::find_by_key(banks, &bank_id, |b| b.id)
            .ok_or(CoreError::BankNotFound(bank_id))?;
        let customer = banks[index]
            .find_customer_mut(customer_id)
            .ok_or(CoreError::CustomerNotFound(customer_id))?;
        Ok(customer.open_account(account_type, initial_balance, ids, config))
    }

    /// Execute a transaction against the given account.
    ///
    /// Deposits and withdrawals go straight to the account (a rejected
    /// withdrawal comes back as a retained record with `invalid` set);
    /// transfers are routed through the owning customer so the
    /// destination is validated before any balance moves.
    pub fn create_transaction(
        &mut self,
        bank_id: BankId,
        customer_id: CustomerId,
        account_id: &AccountId,
        kind: TransactionKind,
        amount: Decimal,
    ) -> CoreResult<&Transaction> {
        let Self { banks, config, ids } = self;
        let index = sorted::find_by_key(banks, &bank_id, |b| b.id)
            .ok_or(CoreError::BankNotFound(bank_id))?;
        let customer = banks[index]
            .find_customer_mut(customer_id)
            .ok_or(CoreError::CustomerNotFound(customer_id))?;

        match kind {
            TransactionKind::Transfer { destination } => {
                customer.transfer(account_id, &destination, amount, ids, config)
            }
            other => {
                let account = customer
                    .find_account_mut(account_id)
                    .ok_or_else(|| CoreError::AccountNotFound(account_id.clone()))?;
                Ok(account.record(other, amount, ids, config))
            }
        }
    }

    /// Apply the configured interest rate to every Saving account of
    /// every bank. Reports a no-op instead of silently doing nothing
    /// when no Saving account exists anywhere. Returns accounts
    /// credited.
    pub fn apply_interest(&mut self) -> CoreResult<usize> {
        if !self.banks.iter().any(Bank::has_saving_accounts) {
            return Err(CoreError::NoSavingAccounts);
        }
        let rate = self.config.interest_rate;
        Ok(self
            .banks
            .iter_mut()
            .map(|bank| bank.apply_interest(rate))
            .sum())
    }
}
