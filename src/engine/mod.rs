//! Pool operations, independent of how assets are custodied.
//!
//! Each operation reads pre-call reserves, validates and prices everything,
//! commits share changes, and only then moves assets. A failure anywhere
//! aborts the whole instruction, so partial effects never persist.

pub mod liquidity;
pub mod swap;

#[cfg(test)]
mod tests;

pub use liquidity::{
    add_liquidity, quote_deposit, quote_withdrawal, remove_liquidity, DepositQuote,
    WithdrawnAmounts,
};
pub use swap::{swap_native_for_paired, swap_paired_for_native};
