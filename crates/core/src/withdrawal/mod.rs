//! Cash withdrawal breakdown.
//!
//! This module implements the dispenser's only business operation:
//! - Fixed bill denominations
//! - Ordered validation of the requested amount
//! - Greedy decomposition into the fewest bills
//! - Human-readable delivery lines
//! - Error types for rejected withdrawals

pub mod breakdown;
pub mod denomination;
pub mod error;
pub mod service;
pub mod validation;

#[cfg(test)]
mod props;

pub use breakdown::{BreakdownLine, BreakdownResult, compute_breakdown, decompose};
pub use denomination::Denomination;
pub use error::WithdrawalError;
pub use service::WithdrawalService;
pub use validation::validate_amount;
