//! # Customer Module
//!
//! A customer owns its accounts, sorted ascending by account id.
//! Same-customer transfers live here because they need two sibling
//! accounts at once: the destination is validated before any balance
//! moves, then the debit and credit happen as one unit.

use crate::account::{Account, AccountId, AccountType};
use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use crate::id::IdGenerator;
use crate::sorted;
use crate::transaction::{Transaction, TransactionKind};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::info;

pub type CustomerId = u32;

/// A bank's customer and their id-sorted accounts.
#[derive(Debug, Clone)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub age: u8,
    accounts: Vec<Account>,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    pub(crate) fn new(id: CustomerId, first_name: &str, last_name: &str, age: u8) -> Self {
        info!(customer_id = id, first_name, last_name, age, "customer created");
        Self {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age,
            accounts: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Accounts in ascending id order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Open a Checking or Saving account and insert it at its sorted
    /// position. The initial-balance floor is the input layer's job.
    pub(crate) fn open_account(
        &mut self,
        account_type: AccountType,
        initial_balance: Decimal,
        ids: &mut IdGenerator,
        config: &Config,
    ) -> &Account {
        let numeric = ids.generate(&config.account_id_range, |candidate| {
            self.find_account(&AccountId::new(candidate, account_type))
                .is_some()
        });
        let account = Account::new(
            AccountId::new(numeric, account_type),
            account_type,
            self.id,
            initial_balance,
        );
        let index = sorted::insert_by_key(&mut self.accounts, account, |a| a.id.clone());
        &self.accounts[index]
    }

    /// Binary search over the sorted account sequence.
    pub fn find_account(&self, id: &AccountId) -> Option<&Account> {
        sorted::find_by_key(&self.accounts, id, |a| a.id.clone()).map(|index| &self.accounts[index])
    }

    pub(crate) fn find_account_mut(&mut self, id: &AccountId) -> Option<&mut Account> {
        sorted::find_by_key(&self.accounts, id, |a| a.id.clone())
            .map(move |index| &mut self.accounts[index])
    }

    /// Move funds between two of this customer's accounts.
    ///
    /// Everything is validated before any mutation: both accounts must
    /// exist, the destination must differ from the source, and the
    /// amount may not exceed the source balance (transfers never enter
    /// the overdraft path). On success the source account retains a
    /// single Transfer record; the destination is credited directly.
    pub(crate) fn transfer(
        &mut self,
        source: &AccountId,
        destination: &AccountId,
        amount: Decimal,
        ids: &mut IdGenerator,
        config: &Config,
    ) -> CoreResult<&Transaction> {
        if source == destination {
            return Err(CoreError::SameAccountTransfer(source.clone()));
        }
        let source_index = sorted::find_by_key(&self.accounts, source, |a| a.id.clone())
            .ok_or_else(|| CoreError::AccountNotFound(source.clone()))?;
        let destination_index = sorted::find_by_key(&self.accounts, destination, |a| a.id.clone())
            .ok_or_else(|| CoreError::AccountNotFound(destination.clone()))?;

        let available = self.accounts[source_index].balance;
        if amount > available {
            return Err(CoreError::TransferExceedsBalance {
                account: source.clone(),
                requested: amount,
                available,
            });
        }

        self.accounts[destination_index].balance += amount;
        let transaction = self.accounts[source_index].record(
            TransactionKind::Transfer {
                destination: destination.clone(),
            },
            amount,
            ids,
            config,
        );
        Ok(transaction)
    }

    pub(crate) fn apply_interest(&mut self, rate: Decimal) -> usize {
        self.accounts
            .iter_mut()
            .map(|account| account.apply_interest(rate))
            .filter(|&applied| applied)
            .count()
    }

    pub(crate) fn has_saving_accounts(&self) -> bool {
        self.accounts
            .iter()
            .any(|account| account.account_type == AccountType::Saving)
    }
}
