//! Snapshot exporters - flat text dump and markdown.
//!
//! Each exporter walks the ledger top-down and renders one
//! human-readable report; the core is never mutated.

use teller_core::{Ledger, Transaction, TransactionKind};

/// Renders a full ledger snapshot into one format.
pub trait SnapshotExporter {
    /// Walk the ledger and produce the report.
    fn export(&self, ledger: &Ledger) -> String;

    /// File extension for this format.
    fn extension(&self) -> &'static str;
}

// ============================================================================
// Text Exporter
// ============================================================================

/// The reference flat dump: one line per entity, each level indented
/// under its owner.
///
/// ```text
/// Bank: 1234 | First National
///   Customer: 12345 | Ada Lovelace | 36
///     Account: 123456C | $100.00
///       Transaction: 1234567 | $50.00 | Deposit
/// ```
///
/// Rejected withdrawals carry an ` [INVALID]` suffix.
#[derive(Debug, Default)]
pub struct TextExporter;

impl TextExporter {
    pub fn new() -> Self {
        Self
    }

    fn transaction_line(transaction: &Transaction) -> String {
        let mut line = format!(
            "      Transaction: {} | ${:.2} | {}",
            transaction.id,
            transaction.amount,
            transaction.kind.as_str()
        );
        if transaction.invalid {
            line.push_str(" [INVALID]");
        }
        line
    }
}

impl SnapshotExporter for TextExporter {
    fn export(&self, ledger: &Ledger) -> String {
        let mut output = String::new();
        for bank in ledger.banks() {
            output.push_str(&format!("Bank: {} | {}\n", bank.id, bank.name));
            for customer in bank.customers() {
                output.push_str(&format!(
                    "  Customer: {} | {} | {}\n",
                    customer.id,
                    customer.full_name(),
                    customer.age
                ));
                for account in customer.accounts() {
                    output.push_str(&format!(
                        "    Account: {} | ${:.2}\n",
                        account.id, account.balance
                    ));
                    for transaction in account.transactions() {
                        output.push_str(&Self::transaction_line(transaction));
                        output.push('\n');
                    }
                }
            }
        }
        output
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}

// ============================================================================
// Markdown Exporter
// ============================================================================

/// Markdown rendering of the same traversal: a heading per bank and
/// customer, a table per account's transaction log.
#[derive(Debug, Default)]
pub struct MarkdownExporter;

impl MarkdownExporter {
    pub fn new() -> Self {
        Self
    }

    fn transaction_row(transaction: &Transaction) -> String {
        let destination = match &transaction.kind {
            TransactionKind::Transfer { destination } => destination.to_string(),
            _ => "-".to_string(),
        };
        let status = if transaction.invalid { "INVALID" } else { "ok" };
        format!(
            "| {} | {} | {} | {:.2} | {:.2} | {:.2} | {} |",
            transaction.id,
            transaction.kind.as_str(),
            destination,
            transaction.amount,
            transaction.balance_before,
            transaction.balance_after,
            status
        )
    }
}

impl SnapshotExporter for MarkdownExporter {
    fn export(&self, ledger: &Ledger) -> String {
        let mut output = String::from("# Ledger Report\n");
        for bank in ledger.banks() {
            output.push_str(&format!("\n## Bank {}: {}\n", bank.id, bank.name));
            for customer in bank.customers() {
                output.push_str(&format!(
                    "\n### Customer {}: {} (age {})\n",
                    customer.id,
                    customer.full_name(),
                    customer.age
                ));
                for account in customer.accounts() {
                    output.push_str(&format!(
                        "\n**Account {}** ({}) - balance ${:.2}\n",
                        account.id, account.account_type, account.balance
                    ));
                    if account.transactions().is_empty() {
                        continue;
                    }
                    output.push_str(
                        "\n| ID | Kind | Destination | Amount | Before | After | Status |\n",
                    );
                    output.push_str("|---|---|---|---|---|---|---|\n");
                    for transaction in account.transactions() {
                        output.push_str(&Self::transaction_row(transaction));
                        output.push('\n');
                    }
                }
            }
        }
        output
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}
