//! CPI-backed custody for the engine: lamports on the pool PDA, the pool's
//! associated token account for the paired mint, and the pool-owned LP mint.

use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, Burn, Mint, MintTo, Token, TokenAccount, Transfer};

use crate::error::AmmError;
use crate::reserves::{credited, debited, NativeCustody, PairedLedger};
use crate::shares::{after_burn, after_mint, ShareLedger};
use crate::state::{Pool, PoolSeeds};

/// Lamports held by the pool PDA above its rent-exempt minimum.
pub struct LamportVault<'info> {
    pool: AccountInfo<'info>,
    caller: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
    rent_floor: u64,
}

impl<'info> LamportVault<'info> {
    pub fn new(
        pool: &Account<'info, Pool>,
        caller: &Signer<'info>,
        system_program: &Program<'info, System>,
    ) -> Result<Self> {
        let pool = pool.to_account_info();
        let rent_floor = Rent::get()?.minimum_balance(pool.data_len());
        Ok(Self {
            pool,
            caller: caller.to_account_info(),
            system_program: system_program.to_account_info(),
            rent_floor,
        })
    }
}

impl NativeCustody for LamportVault<'_> {
    fn reserve(&self) -> Result<u64> {
        Ok(self.pool.lamports().saturating_sub(self.rent_floor))
    }

    fn receive(&mut self, amount: u64) -> Result<()> {
        let cpi_accounts = system_program::Transfer {
            from: self.caller.clone(),
            to: self.pool.clone(),
        };
        system_program::transfer(
            CpiContext::new(self.system_program.clone(), cpi_accounts),
            amount,
        )
    }

    fn send(&mut self, amount: u64) -> Result<()> {
        require!(amount <= self.reserve()?, AmmError::InsufficientBalance);
        let pool_lamports = debited(self.pool.lamports(), amount)?;
        let caller_lamports = credited(self.caller.lamports(), amount)?;
        // The pool PDA is owned by this program, so it can be debited directly.
        **self.pool.try_borrow_mut_lamports()? = pool_lamports;
        **self.caller.try_borrow_mut_lamports()? = caller_lamports;
        Ok(())
    }
}

/// The pool's paired-asset token account, with its balance as loaded at the
/// start of the instruction and adjusted for every transfer made since.
pub struct TokenVault<'info> {
    balance: u64,
    vault: AccountInfo<'info>,
    caller_tokens: AccountInfo<'info>,
    caller: AccountInfo<'info>,
    pool: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    seeds: PoolSeeds,
}

impl<'info> TokenVault<'info> {
    pub fn new(
        pool: &Account<'info, Pool>,
        vault: &Account<'info, TokenAccount>,
        caller_tokens: &Account<'info, TokenAccount>,
        caller: &Signer<'info>,
        token_program: &Program<'info, Token>,
    ) -> Self {
        Self {
            balance: vault.amount,
            vault: vault.to_account_info(),
            caller_tokens: caller_tokens.to_account_info(),
            caller: caller.to_account_info(),
            pool: pool.to_account_info(),
            token_program: token_program.to_account_info(),
            seeds: pool.signer_seeds(),
        }
    }
}

impl PairedLedger for TokenVault<'_> {
    fn reserve(&self) -> Result<u64> {
        Ok(self.balance)
    }

    fn pull(&mut self, amount: u64) -> Result<()> {
        let balance = credited(self.balance, amount)?;
        let cpi_accounts = Transfer {
            from: self.caller_tokens.clone(),
            to: self.vault.clone(),
            authority: self.caller.clone(),
        };
        token::transfer(
            CpiContext::new(self.token_program.clone(), cpi_accounts),
            amount,
        )?;
        self.balance = balance;
        Ok(())
    }

    fn push(&mut self, amount: u64) -> Result<()> {
        let balance = debited(self.balance, amount)?;
        let seeds = self.seeds.as_slices();
        let signer = &[&seeds[..]];
        let cpi_accounts = Transfer {
            from: self.vault.clone(),
            to: self.caller_tokens.clone(),
            authority: self.pool.clone(),
        };
        token::transfer(
            CpiContext::new_with_signer(self.token_program.clone(), cpi_accounts, signer),
            amount,
        )?;
        self.balance = balance;
        Ok(())
    }
}

/// The pool's LP mint together with one holder's LP token account. Minting
/// is signed by the pool PDA; burning is authorized by the holder.
pub struct LpMint<'info> {
    supply: u64,
    balance: u64,
    mint: AccountInfo<'info>,
    holder_tokens: AccountInfo<'info>,
    holder: AccountInfo<'info>,
    pool: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    seeds: PoolSeeds,
}

impl<'info> LpMint<'info> {
    pub fn new(
        pool: &Account<'info, Pool>,
        mint: &Account<'info, Mint>,
        holder_tokens: &Account<'info, TokenAccount>,
        holder: &Signer<'info>,
        token_program: &Program<'info, Token>,
    ) -> Self {
        Self {
            supply: mint.supply,
            balance: holder_tokens.amount,
            mint: mint.to_account_info(),
            holder_tokens: holder_tokens.to_account_info(),
            holder: holder.to_account_info(),
            pool: pool.to_account_info(),
            token_program: token_program.to_account_info(),
            seeds: pool.signer_seeds(),
        }
    }
}

impl ShareLedger for LpMint<'_> {
    fn total_supply(&self) -> Result<u64> {
        Ok(self.supply)
    }

    fn balance_of(&self) -> Result<u64> {
        Ok(self.balance)
    }

    fn mint(&mut self, amount: u64) -> Result<()> {
        let (supply, balance) = after_mint(self.supply, self.balance, amount)?;
        let seeds = self.seeds.as_slices();
        let signer = &[&seeds[..]];
        let cpi_accounts = MintTo {
            mint: self.mint.clone(),
            to: self.holder_tokens.clone(),
            authority: self.pool.clone(),
        };
        token::mint_to(
            CpiContext::new_with_signer(self.token_program.clone(), cpi_accounts, signer),
            amount,
        )?;
        (self.supply, self.balance) = (supply, balance);
        Ok(())
    }

    fn burn(&mut self, amount: u64) -> Result<()> {
        let (supply, balance) = after_burn(self.supply, self.balance, amount)?;
        let cpi_accounts = Burn {
            mint: self.mint.clone(),
            from: self.holder_tokens.clone(),
            authority: self.holder.clone(),
        };
        token::burn(
            CpiContext::new(self.token_program.clone(), cpi_accounts),
            amount,
        )?;
        (self.supply, self.balance) = (supply, balance);
        Ok(())
    }
}
