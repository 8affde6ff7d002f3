//! # Bank Module
//!
//! A bank owns its customers, sorted ascending by customer id, and
//! applies interest across every Saving account it holds.

use crate::config::Config;
use crate::customer::{Customer, CustomerId};
use crate::id::IdGenerator;
use crate::sorted;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::info;

pub type BankId = u32;

/// One bank and its id-sorted customer roster.
#[derive(Debug, Clone)]
pub struct Bank {
    pub id: BankId,
    pub name: String,
    customers: Vec<Customer>,
    pub created_at: DateTime<Utc>,
}

impl Bank {
    pub(crate) fn new(id: BankId, name: &str) -> Self {
        info!(bank_id = id, name, "bank created");
        Self {
            id,
            name: name.to_string(),
            customers: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Customers in ascending id order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Create a customer and insert them at their sorted position.
    /// Age bounds are the input layer's job.
    pub(crate) fn add_customer(
        &mut self,
        first_name: &str,
        last_name: &str,
        age: u8,
        ids: &mut IdGenerator,
        config: &Config,
    ) -> &Customer {
        let id = ids.generate(&config.customer_id_range, |candidate| {
            self.find_customer(candidate).is_some()
        });
        let customer = Customer::new(id, first_name, last_name, age);
        let index = sorted::insert_by_key(&mut self.customers, customer, |c| c.id);
        &self.customers[index]
    }

    /// Binary search over the sorted customer roster.
    pub fn find_customer(&self, id: CustomerId) -> Option<&Customer> {
        sorted::find_by_key(&self.customers, &id, |c| c.id).map(|index| &self.customers[index])
    }

    pub(crate) fn find_customer_mut(&mut self, id: CustomerId) -> Option<&mut Customer> {
        sorted::find_by_key(&self.customers, &id, |c| c.id)
            .map(move |index| &mut self.customers[index])
    }

    /// Credit interest to every Saving account of every customer;
    /// Checking accounts are skipped. Returns accounts credited.
    pub(crate) fn apply_interest(&mut self, rate: Decimal) -> usize {
        self.customers
            .iter_mut()
            .map(|customer| customer.apply_interest(rate))
            .sum()
    }

    pub(crate) fn has_saving_accounts(&self) -> bool {
        self.customers.iter().any(Customer::has_saving_accounts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountType;
    use rust_decimal_macros::dec;

    fn harness() -> (Bank, IdGenerator, Config) {
        (
            Bank::new(1_234, "First National"),
            IdGenerator::from_seed(42),
            Config::default(),
        )
    }

    #[test]
    fn customers_stay_sorted() {
        let (mut bank, mut ids, config) = harness();
        for i in 0..10 {
            bank.add_customer("Customer", &format!("{i}"), 30, &mut ids, &config);
        }
        let roster = bank.customers();
        assert!(roster.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn find_customer_round_trip() {
        let (mut bank, mut ids, config) = harness();
        let id = bank.add_customer("Ada", "Lovelace", 36, &mut ids, &config).id;
        assert_eq!(
            bank.find_customer(id).map(|c| c.full_name()),
            Some("Ada Lovelace".to_string())
        );
        // 0 is outside the customer id range, so it can never be inserted.
        assert!(bank.find_customer(0).is_none());
    }

    #[test]
    fn interest_sweeps_every_customer() {
        let (mut bank, mut ids, config) = harness();
        for _ in 0..2 {
            let id = bank.add_customer("Saver", "One", 40, &mut ids, &config).id;
            let customer = bank.find_customer_mut(id).unwrap();
            customer.open_account(AccountType::Saving, dec!(100.00), &mut ids, &config);
            customer.open_account(AccountType::Checking, dec!(100.00), &mut ids, &config);
        }

        assert!(bank.has_saving_accounts());
        let credited = bank.apply_interest(dec!(0.05));
        assert_eq!(credited, 2);
        for customer in bank.customers() {
            for account in customer.accounts() {
                let expected = match account.account_type {
                    AccountType::Saving => dec!(105.00),
                    AccountType::Checking => dec!(100.00),
                };
                assert_eq!(account.balance, expected);
            }
        }
    }

    #[test]
    fn no_savings_detected() {
        let (mut bank, mut ids, config) = harness();
        let id = bank.add_customer("Spender", "Only", 25, &mut ids, &config).id;
        bank.find_customer_mut(id)
            .unwrap()
            .open_account(AccountType::Checking, dec!(60.00), &mut ids, &config);
        assert!(!bank.has_saving_accounts());
    }
}
