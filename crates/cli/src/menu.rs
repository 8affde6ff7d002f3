//! The interactive menu loop.
//!
//! One numbered screen per iteration; every handler validates its
//! input through [`crate::input`] before touching the ledger, reports
//! the outcome, and returns to the menu. Nothing here is fatal except
//! a closed input stream.

use crate::input;
use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::Path;
use teller_core::{AccountId, AccountType, BankId, CustomerId, Ledger, TransactionKind};
use teller_reports::{SnapshotExporter, TextExporter};

const MENU: &str = "\n========= BANK MANAGEMENT MENU =========\n\
1.  Add Bank\n\
2.  Add Customer\n\
3.  Add Account\n\
4.  Add Transaction\n\
5.  View All Banks\n\
6.  View All Customers\n\
7.  View All Accounts\n\
8.  View All Transactions\n\
9.  Search For Bank\n\
10. Search For Customer\n\
11. Search For Account\n\
12. Search For Transaction\n\
13. Apply Interest To All Banks\n\
14. Dump Ledger To File\n\
15. Exit\n\
========================================";

/// Console driver: reads menu choices from `input`, writes everything
/// user-facing to `output`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn run(&mut self, ledger: &mut Ledger, dump_path: &Path) -> Result<()> {
        writeln!(self.output, "Welcome to Teller.")?;
        loop {
            writeln!(self.output, "{MENU}")?;
            let choice =
                input::prompt_u32(&mut self.input, &mut self.output, "Enter choice: ", &(1..=15))?;
            match choice {
                1 => self.add_bank(ledger)?,
                2 => self.add_customer(ledger)?,
                3 => self.add_account(ledger)?,
                4 => self.add_transaction(ledger)?,
                5 => self.view_all_banks(ledger)?,
                6 => self.view_customers(ledger)?,
                7 => self.view_accounts(ledger)?,
                8 => self.view_transactions(ledger)?,
                9 => self.search_bank(ledger)?,
                10 => self.search_customer(ledger)?,
                11 => self.search_account(ledger)?,
                12 => self.search_transaction(ledger)?,
                13 => self.apply_interest(ledger)?,
                14 => self.dump(ledger, dump_path)?,
                _ => break,
            }
        }
        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Selection helpers (by index, as the menu presents entities)
    // ------------------------------------------------------------------

    fn select_bank(&mut self, ledger: &Ledger) -> Result<Option<BankId>> {
        if ledger.banks().is_empty() {
            writeln!(self.output, "Error: No banks available. Create a bank first.")?;
            return Ok(None);
        }
        let max = ledger.banks().len() as u32 - 1;
        let index = input::prompt_u32(
            &mut self.input,
            &mut self.output,
            "Enter bank index: ",
            &(0..=max),
        )?;
        Ok(Some(ledger.banks()[index as usize].id))
    }

    fn select_customer(&mut self, ledger: &Ledger, bank_id: BankId) -> Result<Option<CustomerId>> {
        let customers = match ledger.find_bank(bank_id) {
            Some(bank) => bank.customers(),
            None => &[],
        };
        if customers.is_empty() {
            writeln!(self.output, "Error: No customers available. Add a customer first.")?;
            return Ok(None);
        }
        let max = customers.len() as u32 - 1;
        let index = input::prompt_u32(
            &mut self.input,
            &mut self.output,
            "Enter customer index: ",
            &(0..=max),
        )?;
        let customers = ledger.find_bank(bank_id).map(|b| b.customers()).unwrap_or(&[]);
        Ok(Some(customers[index as usize].id))
    }

    fn select_account(
        &mut self,
        ledger: &Ledger,
        bank_id: BankId,
        customer_id: CustomerId,
    ) -> Result<Option<AccountId>> {
        let accounts = Self::accounts_of(ledger, bank_id, customer_id);
        if accounts.is_empty() {
            writeln!(self.output, "Error: No accounts available. Create an account first.")?;
            return Ok(None);
        }
        let max = accounts.len() as u32 - 1;
        let index = input::prompt_u32(
            &mut self.input,
            &mut self.output,
            "Enter account index: ",
            &(0..=max),
        )?;
        let accounts = Self::accounts_of(ledger, bank_id, customer_id);
        Ok(Some(accounts[index as usize].id.clone()))
    }

    fn accounts_of<'a>(
        ledger: &'a Ledger,
        bank_id: BankId,
        customer_id: CustomerId,
    ) -> &'a [teller_core::Account] {
        ledger
            .find_bank(bank_id)
            .and_then(|bank| bank.find_customer(customer_id))
            .map(|customer| customer.accounts())
            .unwrap_or(&[])
    }

    // ------------------------------------------------------------------
    // Creation
    // ------------------------------------------------------------------

    fn add_bank(&mut self, ledger: &mut Ledger) -> Result<()> {
        let name = input::prompt_string(&mut self.input, &mut self.output, "Enter bank name: ")?;
        let bank = ledger.add_bank(&name);
        writeln!(
            self.output,
            "Bank created: {} (Bank ID: {})",
            bank.name, bank.id
        )?;
        Ok(())
    }

    fn add_customer(&mut self, ledger: &mut Ledger) -> Result<()> {
        let Some(bank_id) = self.select_bank(ledger)? else {
            return Ok(());
        };
        let first = input::prompt_string(&mut self.input, &mut self.output, "Enter first name: ")?;
        let last = input::prompt_string(&mut self.input, &mut self.output, "Enter last name: ")?;
        let age_range = ledger.config().age_range.clone();
        let age_range = u32::from(*age_range.start())..=u32::from(*age_range.end());
        let age = input::prompt_u32(&mut self.input, &mut self.output, "Enter age: ", &age_range)?;

        let customer = ledger.add_customer(bank_id, &first, &last, age as u8)?;
        writeln!(
            self.output,
            "Customer created: {} (Customer ID: {})",
            customer.full_name(),
            customer.id
        )?;
        Ok(())
    }

    fn add_account(&mut self, ledger: &mut Ledger) -> Result<()> {
        let Some(bank_id) = self.select_bank(ledger)? else {
            return Ok(());
        };
        let Some(customer_id) = self.select_customer(ledger, bank_id)? else {
            return Ok(());
        };
        let choice = input::prompt_u32(
            &mut self.input,
            &mut self.output,
            "Enter account type (0: CHECKING, 1: SAVING): ",
            &(0..=1),
        )?;
        let account_type = if choice == 0 {
            AccountType::Checking
        } else {
            AccountType::Saving
        };
        let (min, max) = (
            ledger.config().min_starting_balance,
            ledger.config().max_balance,
        );
        let balance = input::prompt_decimal(
            &mut self.input,
            &mut self.output,
            "Enter initial balance: ",
            min,
            max,
        )?;

        let account = ledger.open_account(bank_id, customer_id, account_type, balance)?;
        writeln!(
            self.output,
            "{} account created (Account ID: {})",
            account.account_type, account.id
        )?;
        Ok(())
    }

    fn add_transaction(&mut self, ledger: &mut Ledger) -> Result<()> {
        let Some(bank_id) = self.select_bank(ledger)? else {
            return Ok(());
        };
        let Some(customer_id) = self.select_customer(ledger, bank_id)? else {
            return Ok(());
        };
        let Some(account_id) = self.select_account(ledger, bank_id, customer_id)? else {
            return Ok(());
        };
        let choice = input::prompt_u32(
            &mut self.input,
            &mut self.output,
            "Enter transaction type (0: DEPOSIT, 1: WITHDRAW, 2: TRANSFER): ",
            &(0..=2),
        )?;

        let kind = match choice {
            0 => TransactionKind::Deposit,
            1 => TransactionKind::Withdraw,
            _ => {
                let accounts = Self::accounts_of(ledger, bank_id, customer_id);
                if accounts.len() < 2 {
                    writeln!(
                        self.output,
                        "Error: You must have at least two accounts to transfer funds."
                    )?;
                    return Ok(());
                }
                let max = accounts.len() as u32 - 1;
                let index = input::prompt_u32(
                    &mut self.input,
                    &mut self.output,
                    "Enter the index of the destination account: ",
                    &(0..=max),
                )?;
                let destination =
                    Self::accounts_of(ledger, bank_id, customer_id)[index as usize].id.clone();
                TransactionKind::Transfer { destination }
            }
        };

        let (min, max) = (
            ledger.config().min_transaction_amount,
            ledger.config().max_transaction_amount,
        );
        let amount = input::prompt_decimal(
            &mut self.input,
            &mut self.output,
            "Enter transaction amount: ",
            min,
            max,
        )?;

        match ledger.create_transaction(bank_id, customer_id, &account_id, kind, amount) {
            Ok(tx) if tx.invalid => writeln!(
                self.output,
                "Withdrawal rejected by account rules; kept as invalid transaction {}.",
                tx.id
            )?,
            Ok(tx) => writeln!(self.output, "Transaction created (Transaction ID: {})", tx.id)?,
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    fn view_all_banks(&mut self, ledger: &Ledger) -> Result<()> {
        if ledger.banks().is_empty() {
            writeln!(self.output, "Error: No banks available.")?;
            return Ok(());
        }
        writeln!(self.output, "\n========= All Banks =========")?;
        for (i, bank) in ledger.banks().iter().enumerate() {
            writeln!(self.output, "Bank #{}", i + 1)?;
            writeln!(self.output, "Bank Name: {}", bank.name)?;
            writeln!(self.output, "Bank ID: {}", bank.id)?;
            writeln!(self.output, "--------------------------------")?;
        }
        Ok(())
    }

    fn view_customers(&mut self, ledger: &Ledger) -> Result<()> {
        let Some(bank_id) = self.select_bank(ledger)? else {
            return Ok(());
        };
        let customers = ledger.find_bank(bank_id).map(|b| b.customers()).unwrap_or(&[]);
        if customers.is_empty() {
            writeln!(self.output, "Error: No customers available in this bank.")?;
            return Ok(());
        }
        writeln!(self.output, "\n========= All Customers =========")?;
        for (i, customer) in customers.iter().enumerate() {
            writeln!(self.output, "Customer #{}", i + 1)?;
            writeln!(self.output, "Customer ID: {}", customer.id)?;
            writeln!(self.output, "Name: {}", customer.full_name())?;
            writeln!(self.output, "Age: {}", customer.age)?;
            writeln!(self.output, "---------------------------------")?;
        }
        Ok(())
    }

    fn view_accounts(&mut self, ledger: &Ledger) -> Result<()> {
        let Some(bank_id) = self.select_bank(ledger)? else {
            return Ok(());
        };
        let Some(customer_id) = self.select_customer(ledger, bank_id)? else {
            return Ok(());
        };
        let accounts = Self::accounts_of(ledger, bank_id, customer_id);
        if accounts.is_empty() {
            writeln!(self.output, "Error: This customer has no accounts.")?;
            return Ok(());
        }
        writeln!(self.output, "\n========= Customer's Accounts =========")?;
        for (i, account) in accounts.iter().enumerate() {
            writeln!(self.output, "Account #{}", i + 1)?;
            writeln!(self.output, "Account ID: {}", account.id)?;
            writeln!(self.output, "Account balance: ${:.2}", account.balance)?;
            writeln!(self.output, "----------------------------")?;
        }
        Ok(())
    }

    fn view_transactions(&mut self, ledger: &Ledger) -> Result<()> {
        let Some(bank_id) = self.select_bank(ledger)? else {
            return Ok(());
        };
        let Some(customer_id) = self.select_customer(ledger, bank_id)? else {
            return Ok(());
        };
        let Some(account_id) = self.select_account(ledger, bank_id, customer_id)? else {
            return Ok(());
        };
        let account = Self::accounts_of(ledger, bank_id, customer_id)
            .iter()
            .find(|a| a.id == account_id);
        let Some(account) = account else {
            return Ok(());
        };
        if account.transactions().is_empty() {
            writeln!(self.output, "Error: This account has no transactions.")?;
            return Ok(());
        }
        writeln!(self.output, "\n========= Account Transactions =========")?;
        for (i, transaction) in account.transactions().iter().enumerate() {
            writeln!(self.output, "Transaction #{}", i + 1)?;
            writeln!(self.output, "{transaction}")?;
            writeln!(self.output, "--------------------------------")?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Searches (by id, binary search in the core)
    // ------------------------------------------------------------------

    fn search_bank(&mut self, ledger: &Ledger) -> Result<()> {
        if ledger.banks().is_empty() {
            writeln!(self.output, "Error: No banks available.")?;
            return Ok(());
        }
        let id = input::prompt_u32(
            &mut self.input,
            &mut self.output,
            "Enter bank ID: ",
            &(0..=u32::MAX),
        )?;
        match ledger.find_bank(id) {
            Some(bank) => {
                writeln!(self.output, "Bank found!")?;
                writeln!(self.output, "Bank Name: {}", bank.name)?;
                writeln!(self.output, "Bank ID: {}", bank.id)?;
            }
            None => writeln!(self.output, "Error: Bank not found.")?,
        }
        Ok(())
    }

    fn search_customer(&mut self, ledger: &Ledger) -> Result<()> {
        let Some(bank_id) = self.select_bank(ledger)? else {
            return Ok(());
        };
        if ledger.find_bank(bank_id).map_or(true, |b| b.customers().is_empty()) {
            writeln!(self.output, "Error: No customers available in this bank.")?;
            return Ok(());
        }
        let id = input::prompt_u32(
            &mut self.input,
            &mut self.output,
            "Enter customer ID: ",
            &(0..=u32::MAX),
        )?;
        match ledger.find_bank(bank_id).and_then(|bank| bank.find_customer(id)) {
            Some(customer) => {
                writeln!(self.output, "Customer found!")?;
                writeln!(self.output, "Customer ID: {}", customer.id)?;
                writeln!(self.output, "Name: {}", customer.full_name())?;
                writeln!(self.output, "Age: {}", customer.age)?;
            }
            None => writeln!(self.output, "Error: Customer not found.")?,
        }
        Ok(())
    }

    fn search_account(&mut self, ledger: &Ledger) -> Result<()> {
        let Some(bank_id) = self.select_bank(ledger)? else {
            return Ok(());
        };
        let Some(customer_id) = self.select_customer(ledger, bank_id)? else {
            return Ok(());
        };
        if Self::accounts_of(ledger, bank_id, customer_id).is_empty() {
            writeln!(self.output, "Error: This customer has no accounts.")?;
            return Ok(());
        }
        let raw = input::prompt_string(&mut self.input, &mut self.output, "Enter account ID: ")?;
        let id = AccountId::from(raw.as_str());
        let found = ledger
            .find_bank(bank_id)
            .and_then(|bank| bank.find_customer(customer_id))
            .and_then(|customer| customer.find_account(&id));
        match found {
            Some(account) => {
                writeln!(self.output, "Account found!")?;
                writeln!(self.output, "Account ID: {}", account.id)?;
                writeln!(self.output, "Balance: ${:.2}", account.balance)?;
            }
            None => writeln!(self.output, "Error: Account not found.")?,
        }
        Ok(())
    }

    fn search_transaction(&mut self, ledger: &Ledger) -> Result<()> {
        let Some(bank_id) = self.select_bank(ledger)? else {
            return Ok(());
        };
        let Some(customer_id) = self.select_customer(ledger, bank_id)? else {
            return Ok(());
        };
        let Some(account_id) = self.select_account(ledger, bank_id, customer_id)? else {
            return Ok(());
        };
        let id = input::prompt_u32(
            &mut self.input,
            &mut self.output,
            "Enter transaction ID: ",
            &(0..=u32::MAX),
        )?;
        let found = Self::accounts_of(ledger, bank_id, customer_id)
            .iter()
            .find(|a| a.id == account_id)
            .and_then(|account| account.find_transaction(id));
        match found {
            Some(transaction) => {
                writeln!(self.output, "Transaction found!")?;
                writeln!(self.output, "{transaction}")?;
            }
            None => writeln!(self.output, "Error: Transaction not found.")?,
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Interest & dump
    // ------------------------------------------------------------------

    fn apply_interest(&mut self, ledger: &mut Ledger) -> Result<()> {
        match ledger.apply_interest() {
            Ok(credited) => writeln!(
                self.output,
                "Interest applied to {credited} saving account(s)."
            )?,
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(())
    }

    fn dump(&mut self, ledger: &Ledger, path: &Path) -> Result<()> {
        let report = TextExporter::new().export(ledger);
        std::fs::write(path, report)?;
        writeln!(self.output, "Ledger dumped to {}", path.display())?;
        Ok(())
    }
}
