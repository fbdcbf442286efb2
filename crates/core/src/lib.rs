//! Core business logic for Cashpoint.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `withdrawal` - Bill denominations, withdrawal validation and the greedy
//!   breakdown into the fewest bills

pub mod withdrawal;

pub use withdrawal::{
    BreakdownLine, BreakdownResult, Denomination, WithdrawalError, WithdrawalService,
    compute_breakdown,
};
