#![allow(unexpected_cfgs)]
#![allow(deprecated)]

pub mod constants;
pub mod engine;
pub mod error;
pub mod events;
pub mod instructions;
pub mod math;
pub mod reserves;
pub mod shares;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::*;
pub use engine::WithdrawnAmounts;
pub use instructions::*;
pub use state::*;

declare_id!("9jNhfFUHXekeCecWWBn34ApXKBJ4NQXJSEG8ZoKGRWb1");

#[program]
pub mod native_pair_amm {
    use super::*;

    /// Create the pool for one paired mint, with its token vault owned by the
    /// pool PDA. The PDA also custodies the native reserve.
    pub fn initialize_pool(ctx: Context<InitializePool>) -> Result<()> {
        instructions::initialize::initialize_pool_handler(ctx)
    }

    /// Deposit `native_sent` lamports plus up to `amount` paired tokens.
    /// Returns the LP shares minted to the caller.
    pub fn add_liquidity(ctx: Context<AddLiquidity>, amount: u64, native_sent: u64) -> Result<u64> {
        instructions::liquidity::add_liquidity_handler(ctx, amount, native_sent)
    }

    /// Burn `amount` LP shares for a pro-rata slice of both reserves.
    pub fn remove_liquidity(
        ctx: Context<RemoveLiquidity>,
        amount: u64,
    ) -> Result<WithdrawnAmounts> {
        instructions::liquidity::remove_liquidity_handler(ctx, amount)
    }

    pub fn swap_native_for_paired(
        ctx: Context<Swap>,
        min_tokens: u64,
        native_sent: u64,
    ) -> Result<()> {
        instructions::swap::swap_native_for_paired_handler(ctx, min_tokens, native_sent)
    }

    pub fn swap_paired_for_native(
        ctx: Context<Swap>,
        tokens_sold: u64,
        min_native: u64,
    ) -> Result<()> {
        instructions::swap::swap_paired_for_native_handler(ctx, tokens_sold, min_native)
    }

    /// Paired-asset balance of the pool.
    pub fn get_reserve(ctx: Context<GetReserve>) -> Result<u64> {
        instructions::views::get_reserve_handler(ctx)
    }

    pub fn get_amount_of_tokens(
        ctx: Context<Quote>,
        input_amount: u64,
        input_reserve: u64,
        output_reserve: u64,
    ) -> Result<u64> {
        instructions::views::get_amount_of_tokens_handler(
            ctx,
            input_amount,
            input_reserve,
            output_reserve,
        )
    }
}
