use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::POOL_SEED;
use crate::math;
use crate::state::Pool;

#[derive(Accounts)]
pub struct GetReserve<'info> {
    #[account(
        seeds = [POOL_SEED, pool.paired_mint.as_ref()],
        bump = pool.bump,
        has_one = paired_vault
    )]
    pub pool: Account<'info, Pool>,

    pub paired_vault: Account<'info, TokenAccount>,
}

#[derive(Accounts)]
pub struct Quote {}

pub fn get_reserve_handler(ctx: Context<GetReserve>) -> Result<u64> {
    Ok(ctx.accounts.paired_vault.amount)
}

pub fn get_amount_of_tokens_handler(
    _ctx: Context<Quote>,
    input_amount: u64,
    input_reserve: u64,
    output_reserve: u64,
) -> Result<u64> {
    math::get_amount_of_tokens(input_amount, input_reserve, output_reserve)
}
