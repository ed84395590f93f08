//! LP share accounting. Shares are a fungible token; the ledger seen by an
//! operation is the mint's supply plus the caller's holding.

use anchor_lang::prelude::*;

use crate::reserves::{credited, debited};

/// LP shares from the point of view of one caller. `mint` and `burn` always
/// move the caller's balance and the total supply together.
pub trait ShareLedger {
    fn total_supply(&self) -> Result<u64>;
    fn balance_of(&self) -> Result<u64>;
    fn mint(&mut self, amount: u64) -> Result<()>;
    fn burn(&mut self, amount: u64) -> Result<()>;
}

/// `(supply, balance)` after minting `amount` to the holder.
pub fn after_mint(supply: u64, balance: u64, amount: u64) -> Result<(u64, u64)> {
    Ok((credited(supply, amount)?, credited(balance, amount)?))
}

/// `(supply, balance)` after burning `amount` from the holder.
pub fn after_burn(supply: u64, balance: u64, amount: u64) -> Result<(u64, u64)> {
    let balance = debited(balance, amount)?;
    Ok((debited(supply, amount)?, balance))
}
