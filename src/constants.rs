use anchor_lang::prelude::*;

#[constant]
pub const POOL_SEED: &[u8] = b"pool";

#[constant]
pub const LP_MINT_SEED: &[u8] = b"lp_mint";

#[constant]
pub const LP_DECIMALS: u8 = 9;

/// Share of the input that reaches the curve; the rest stays in the pool (1% fee).
#[constant]
pub const FEE_NUMERATOR: u128 = 99;

#[constant]
pub const FEE_DENOMINATOR: u128 = 100;
