use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{LP_DECIMALS, LP_MINT_SEED, POOL_SEED};
use crate::events::PoolInitialized;
use crate::state::Pool;

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + Pool::INIT_SPACE,
        seeds = [POOL_SEED, paired_mint.key().as_ref()],
        bump
    )]
    pub pool: Account<'info, Pool>,

    pub paired_mint: Account<'info, Mint>,

    /// Paired reserve, owned by the pool PDA.
    #[account(
        init,
        payer = payer,
        associated_token::mint = paired_mint,
        associated_token::authority = pool
    )]
    pub paired_vault: Account<'info, TokenAccount>,

    /// LP shares; only the pool PDA can mint.
    #[account(
        init,
        payer = payer,
        seeds = [LP_MINT_SEED, pool.key().as_ref()],
        bump,
        mint::decimals = LP_DECIMALS,
        mint::authority = pool,
        mint::freeze_authority = pool
    )]
    pub lp_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn initialize_pool_handler(ctx: Context<InitializePool>) -> Result<()> {
    let paired_mint = ctx.accounts.paired_mint.key();
    let paired_vault = ctx.accounts.paired_vault.key();
    let lp_mint = ctx.accounts.lp_mint.key();
    let pool = &mut ctx.accounts.pool;
    pool.bind(paired_mint, paired_vault, lp_mint, ctx.bumps.pool)?;

    msg!("pool {} bound to mint {}", pool.key(), paired_mint);
    emit!(PoolInitialized {
        pool: pool.key(),
        paired_mint,
        paired_vault,
        lp_mint,
    });
    Ok(())
}
