use anchor_lang::prelude::*;

use crate::constants::POOL_SEED;
use crate::error::AmmError;

/// One pool per paired mint. Lamports held above the rent-exempt minimum are
/// the native reserve; the paired reserve is the vault's token balance and
/// LP shares are tokens of `lp_mint`, whose authority is the pool PDA.
#[account]
#[derive(Debug, Default, InitSpace)]
pub struct Pool {
    pub bump: u8,
    pub paired_mint: Pubkey,
    pub paired_vault: Pubkey,
    pub lp_mint: Pubkey,
}

impl Pool {
    /// Binds a fresh pool to its paired mint.
    pub fn bind(
        &mut self,
        paired_mint: Pubkey,
        paired_vault: Pubkey,
        lp_mint: Pubkey,
        bump: u8,
    ) -> Result<()> {
        require_keys_neq!(paired_mint, Pubkey::default(), AmmError::InvalidConstruction);
        self.bump = bump;
        self.paired_mint = paired_mint;
        self.paired_vault = paired_vault;
        self.lp_mint = lp_mint;
        Ok(())
    }

    pub fn signer_seeds(&self) -> PoolSeeds {
        PoolSeeds {
            paired_mint: self.paired_mint,
            bump: [self.bump],
        }
    }
}

/// Owned copy of the pool PDA seeds, for CPIs signed by the pool.
#[derive(Debug, Clone, Copy)]
pub struct PoolSeeds {
    paired_mint: Pubkey,
    bump: [u8; 1],
}

impl PoolSeeds {
    pub fn as_slices(&self) -> [&[u8]; 3] {
        [POOL_SEED, self.paired_mint.as_ref(), &self.bump]
    }
}
