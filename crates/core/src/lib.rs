//! # Teller Core
//!
//! In-memory domain model for the menu-driven banking ledger:
//! an id-sorted tree of banks → customers → accounts → transactions.
//!
//! Ownership is strictly tree-shaped; the two back-references
//! (account → customer, transaction → account) are plain ids kept for
//! display. Every collection is maintained by sorted insertion and
//! queried by binary search. All operations are synchronous and
//! single-threaded; the console driver sits behind [`Ledger`]'s
//! narrow interface and validates all input before it gets here.

pub mod account;
pub mod bank;
pub mod config;
pub mod customer;
pub mod error;
pub mod id;
pub mod ledger;
pub mod transaction;

mod sorted;

pub use account::{Account, AccountId, AccountType};
pub use bank::{Bank, BankId};
pub use config::Config;
pub use customer::{Customer, CustomerId};
pub use error::{CoreError, CoreResult};
pub use id::IdGenerator;
pub use ledger::Ledger;
pub use transaction::{Transaction, TransactionId, TransactionKind};
