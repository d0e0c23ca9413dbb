//! Expense splitting.
//!
//! Turns a raw expense (total amount, payer contributions, split rule)
//! into per-user paid/owed share lists that each sum exactly to the total.
//!
//! - `allocation` - exact-sum amount allocation helpers
//! - `types` - split specifications and share lists
//! - `splitter` - the pure splitting service

pub mod allocation;
pub mod splitter;
pub mod types;

#[cfg(test)]
mod splitter_props;

pub use splitter::ExpenseSplitter;
pub use types::{Share, SplitRequest, SplitResult, SplitSpec, SplitType};
