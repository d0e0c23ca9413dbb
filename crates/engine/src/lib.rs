//! Ledger engine for Splitledger.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! It converts a stream of shared expenses and settlements into per-user net
//! balances and a minimal set of settling payments.
//!
//! # Modules
//!
//! - `split` - Expense splitting (equal / exact / percentage)
//! - `expense` - Expense records and balance deltas
//! - `ledger` - Balance aggregation and debt minimization
//! - `settlement` - Recorded real-world payments
//! - `engine` - The scope-keyed engine facade

pub mod engine;
pub mod error;
pub mod expense;
pub mod ledger;
pub mod scope;
pub mod settlement;
pub mod split;

pub use engine::LedgerEngine;
pub use error::{EngineError, EngineResult};
pub use scope::Scope;
