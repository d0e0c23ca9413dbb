//! Shared types and configuration for Splitledger.
//!
//! This crate provides common types used across all other crates:
//! - Money type with decimal precision
//! - Typed IDs for type-safe entity references
//! - Engine configuration management

pub mod config;
pub mod types;

pub use config::EngineConfig;
pub use types::Money;
