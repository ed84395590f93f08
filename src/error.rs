use anchor_lang::prelude::*;

#[error_code]
pub enum AmmError {
    #[msg("Paired asset mint must not be the default key")]
    InvalidConstruction,
    #[msg("Reserves must be positive")]
    InvalidReserves,
    #[msg("Slippage bound exceeded")]
    SlippageExceeded,
    #[msg("Insufficient balance")]
    InsufficientBalance,
    #[msg("Amount must be positive")]
    InvalidAmount,
    #[msg("Math overflow")]
    MathOverflow,
}
