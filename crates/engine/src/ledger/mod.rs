//! Balance aggregation and debt minimization.
//!
//! This module implements the per-scope ledger:
//! - Net balance tables folded from balance deltas
//! - Tolerance pruning of rounding noise
//! - Zero-sum invariant enforcement
//! - Greedy debt minimization into a transfer list

pub mod aggregator;
pub mod minimizer;
pub mod types;

#[cfg(test)]
mod aggregator_props;
#[cfg(test)]
mod minimizer_props;

pub use aggregator::ScopeLedger;
pub use minimizer::minimize;
pub use types::{LedgerSnapshot, LedgerState, Transfer};
