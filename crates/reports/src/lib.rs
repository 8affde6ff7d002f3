//! # Teller Reports
//!
//! Read-only snapshot exporters over the ledger traversal
//! (banks → customers → accounts → transactions).
//!
//! ## Exporters
//!
//! - [`TextExporter`] - the flat line-per-entity dump
//! - [`MarkdownExporter`] - markdown rendering of the same traversal
//!
//! Both outputs are human-readable reports; neither can be loaded
//! back into a running ledger.
//!
//! ## Example
//!
//! ```rust,ignore
//! use teller_reports::{SnapshotExporter, TextExporter};
//!
//! let dump = TextExporter::new().export(&ledger);
//! std::fs::write("ledger.txt", dump)?;
//! ```

pub mod exporters;

pub use exporters::{MarkdownExporter, SnapshotExporter, TextExporter};
