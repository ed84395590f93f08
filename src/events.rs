use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub paired_mint: Pubkey,
    pub paired_vault: Pubkey,
    pub lp_mint: Pubkey,
}

#[event]
pub struct LiquidityAdded {
    pub provider: Pubkey,
    pub native_in: u64,
    pub paired_in: u64,
    pub shares: u64,
}

#[event]
pub struct LiquidityRemoved {
    pub provider: Pubkey,
    pub shares: u64,
    pub native_out: u64,
    pub paired_out: u64,
}

#[event]
pub struct Swapped {
    pub trader: Pubkey,
    pub native_in: bool,
    pub amount_in: u64,
    pub amount_out: u64,
}
