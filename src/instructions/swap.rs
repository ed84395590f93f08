use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use super::vaults::{LamportVault, TokenVault};
use crate::constants::POOL_SEED;
use crate::engine;
use crate::events::Swapped;
use crate::state::Pool;

/// Shared by both swap directions; the pool's share ledger is untouched.
#[derive(Accounts)]
pub struct Swap<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.paired_mint.as_ref()],
        bump = pool.bump,
        has_one = paired_vault
    )]
    pub pool: Account<'info, Pool>,

    #[account(mut)]
    pub paired_vault: Account<'info, TokenAccount>,

    #[account(mut, token::mint = pool.paired_mint)]
    pub user_paired: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Swap<'info> {
    fn vaults(&self) -> Result<(LamportVault<'info>, TokenVault<'info>)> {
        let native = LamportVault::new(&self.pool, &self.user, &self.system_program)?;
        let paired = TokenVault::new(
            &self.pool,
            &self.paired_vault,
            &self.user_paired,
            &self.user,
            &self.token_program,
        );
        Ok((native, paired))
    }
}

pub fn swap_native_for_paired_handler(
    ctx: Context<Swap>,
    min_tokens: u64,
    native_sent: u64,
) -> Result<()> {
    let (mut native, mut paired) = ctx.accounts.vaults()?;
    let paired_out =
        engine::swap_native_for_paired(&mut native, &mut paired, native_sent, min_tokens)?;

    emit!(Swapped {
        trader: ctx.accounts.user.key(),
        native_in: true,
        amount_in: native_sent,
        amount_out: paired_out,
    });
    Ok(())
}

pub fn swap_paired_for_native_handler(
    ctx: Context<Swap>,
    tokens_sold: u64,
    min_native: u64,
) -> Result<()> {
    let (mut native, mut paired) = ctx.accounts.vaults()?;
    let native_out =
        engine::swap_paired_for_native(&mut native, &mut paired, tokens_sold, min_native)?;

    emit!(Swapped {
        trader: ctx.accounts.user.key(),
        native_in: false,
        amount_in: tokens_sold,
        amount_out: native_out,
    });
    Ok(())
}
