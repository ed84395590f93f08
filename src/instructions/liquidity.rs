use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use super::vaults::{LamportVault, LpMint, TokenVault};
use crate::constants::POOL_SEED;
use crate::engine::{self, WithdrawnAmounts};
use crate::events::{LiquidityAdded, LiquidityRemoved};
use crate::state::Pool;

#[derive(Accounts)]
pub struct AddLiquidity<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.paired_mint.as_ref()],
        bump = pool.bump,
        has_one = paired_vault,
        has_one = lp_mint
    )]
    pub pool: Account<'info, Pool>,

    #[account(mut)]
    pub lp_mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = lp_mint,
        associated_token::authority = user
    )]
    pub user_lp: Account<'info, TokenAccount>,

    #[account(mut)]
    pub paired_vault: Account<'info, TokenAccount>,

    #[account(mut, token::mint = pool.paired_mint)]
    pub user_paired: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct RemoveLiquidity<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.paired_mint.as_ref()],
        bump = pool.bump,
        has_one = paired_vault,
        has_one = lp_mint
    )]
    pub pool: Account<'info, Pool>,

    #[account(mut)]
    pub lp_mint: Account<'info, Mint>,

    #[account(mut, token::mint = lp_mint, token::authority = user)]
    pub user_lp: Account<'info, TokenAccount>,

    #[account(mut)]
    pub paired_vault: Account<'info, TokenAccount>,

    #[account(mut, token::mint = pool.paired_mint)]
    pub user_paired: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn add_liquidity_handler(
    ctx: Context<AddLiquidity>,
    amount: u64,
    native_sent: u64,
) -> Result<u64> {
    let accounts = &ctx.accounts;

    let mut shares = LpMint::new(
        &accounts.pool,
        &accounts.lp_mint,
        &accounts.user_lp,
        &accounts.user,
        &accounts.token_program,
    );
    let mut native = LamportVault::new(&accounts.pool, &accounts.user, &accounts.system_program)?;
    let mut paired = TokenVault::new(
        &accounts.pool,
        &accounts.paired_vault,
        &accounts.user_paired,
        &accounts.user,
        &accounts.token_program,
    );

    let deposit =
        engine::add_liquidity(&mut shares, &mut native, &mut paired, amount, native_sent)?;

    emit!(LiquidityAdded {
        provider: accounts.user.key(),
        native_in: native_sent,
        paired_in: deposit.paired_in,
        shares: deposit.shares,
    });
    Ok(deposit.shares)
}

pub fn remove_liquidity_handler(
    ctx: Context<RemoveLiquidity>,
    amount: u64,
) -> Result<WithdrawnAmounts> {
    let accounts = &ctx.accounts;

    let mut shares = LpMint::new(
        &accounts.pool,
        &accounts.lp_mint,
        &accounts.user_lp,
        &accounts.user,
        &accounts.token_program,
    );
    let mut native = LamportVault::new(&accounts.pool, &accounts.user, &accounts.system_program)?;
    let mut paired = TokenVault::new(
        &accounts.pool,
        &accounts.paired_vault,
        &accounts.user_paired,
        &accounts.user,
        &accounts.token_program,
    );

    let withdrawn = engine::remove_liquidity(&mut shares, &mut native, &mut paired, amount)?;

    emit!(LiquidityRemoved {
        provider: accounts.user.key(),
        shares: amount,
        native_out: withdrawn.native_out,
        paired_out: withdrawn.paired_out,
    });
    Ok(withdrawn)
}
