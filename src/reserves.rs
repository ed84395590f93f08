//! Seams between pool accounting and whoever actually holds the assets.

use anchor_lang::prelude::*;

use crate::error::AmmError;

/// Custody of the native asset. `receive` moves funds from the caller into the
/// pool, `send` moves them back out.
pub trait NativeCustody {
    fn reserve(&self) -> Result<u64>;
    fn receive(&mut self, amount: u64) -> Result<()>;
    fn send(&mut self, amount: u64) -> Result<()>;
}

/// The external ledger of the paired asset, seen from the pool. `pull` spends
/// the caller's pre-authorized balance, `push` pays the caller from the pool.
pub trait PairedLedger {
    fn reserve(&self) -> Result<u64>;
    fn pull(&mut self, amount: u64) -> Result<()>;
    fn push(&mut self, amount: u64) -> Result<()>;
}

/// Both reserves as observed before an operation moves anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reserves {
    pub native: u64,
    pub paired: u64,
}

impl Reserves {
    pub fn read(native: &impl NativeCustody, paired: &impl PairedLedger) -> Result<Self> {
        Ok(Self {
            native: native.reserve()?,
            paired: paired.reserve()?,
        })
    }

    /// A pool with no paired asset has never been seeded (or was fully drained).
    pub fn is_empty(&self) -> bool {
        self.paired == 0
    }

    #[cfg(test)]
    pub fn product(&self) -> u128 {
        self.native as u128 * self.paired as u128
    }
}

/// Balance after `amount` arrives.
pub fn credited(balance: u64, amount: u64) -> Result<u64> {
    Ok(balance.checked_add(amount).ok_or(AmmError::MathOverflow)?)
}

/// Balance after `amount` leaves.
pub fn debited(balance: u64, amount: u64) -> Result<u64> {
    Ok(balance
        .checked_sub(amount)
        .ok_or(AmmError::InsufficientBalance)?)
}
