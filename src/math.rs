//! Integer pricing math. Every division floors; swap products use a 256-bit
//! intermediate so no pair of `u64` reserves can overflow them.

use anchor_lang::prelude::*;

use crate::constants::{FEE_DENOMINATOR, FEE_NUMERATOR};
use crate::error::AmmError;

mod u256 {
    use uint::construct_uint;

    construct_uint! {
        /// 256-bit integer for intermediate swap products.
        pub struct U256(4);
    }
}
pub use u256::U256;

/// Output of a swap of `input_amount` against `(input_reserve, output_reserve)`
/// after the 1% fee:
///
/// `out = floor(in * 99 * r_out / (r_in * 100 + in * 99))`
///
/// The result is always strictly below `output_reserve`, so it fits in `u64`.
pub fn get_amount_of_tokens(
    input_amount: u64,
    input_reserve: u64,
    output_reserve: u64,
) -> Result<u64> {
    require!(input_reserve > 0 && output_reserve > 0, AmmError::InvalidReserves);

    // Below 2^71, so the numerator stays below 2^135.
    let effective_input = U256::from(input_amount as u128 * FEE_NUMERATOR);
    let numerator = effective_input * U256::from(output_reserve);
    let denominator = U256::from(input_reserve) * U256::from(FEE_DENOMINATOR) + effective_input;

    let output = numerator / denominator;
    require!(output <= U256::from(u64::MAX), AmmError::MathOverflow);
    Ok(output.low_u64())
}

/// `floor(a * b / c)`, failing on a zero divisor instead of trapping.
pub fn mul_div_floor(a: u64, b: u64, c: u64) -> Result<u64> {
    require!(c > 0, AmmError::InvalidReserves);
    let product = (a as u128)
        .checked_mul(b as u128)
        .ok_or(AmmError::MathOverflow)?;
    narrow(product / c as u128)
}

fn narrow(value: u128) -> Result<u64> {
    u64::try_from(value).map_err(|_| error!(AmmError::MathOverflow))
}
