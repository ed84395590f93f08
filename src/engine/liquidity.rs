use anchor_lang::prelude::*;

use crate::error::AmmError;
use crate::math::mul_div_floor;
use crate::reserves::{NativeCustody, PairedLedger, Reserves};
use crate::shares::ShareLedger;

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawnAmounts {
    pub native_out: u64,
    pub paired_out: u64,
}

/// What a deposit of `native_sent` costs in paired asset and what it mints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositQuote {
    pub paired_in: u64,
    pub shares: u64,
}

/// Prices a deposit against pre-call reserves. The first deposit sets the
/// price; later ones must bring paired asset in the current ratio.
pub fn quote_deposit(
    reserves: Reserves,
    total_supply: u64,
    amount: u64,
    native_sent: u64,
) -> Result<DepositQuote> {
    if reserves.is_empty() {
        // Seeding with one side missing would leave a reserve at zero while
        // shares exist.
        require!(amount > 0 && native_sent > 0, AmmError::InvalidAmount);
        return Ok(DepositQuote {
            paired_in: amount,
            shares: native_sent,
        });
    }

    require!(reserves.native > 0, AmmError::InvalidReserves);
    let paired_in = mul_div_floor(native_sent, reserves.paired, reserves.native)?;
    require!(amount >= paired_in, AmmError::SlippageExceeded);

    let shares = mul_div_floor(total_supply, native_sent, reserves.native)?;
    Ok(DepositQuote { paired_in, shares })
}

/// Deposits `native_sent` lamports plus the matching paired amount (at most
/// `amount`) and mints LP shares to the caller.
pub fn add_liquidity(
    shares: &mut impl ShareLedger,
    native: &mut impl NativeCustody,
    paired: &mut impl PairedLedger,
    amount: u64,
    native_sent: u64,
) -> Result<DepositQuote> {
    let reserves = Reserves::read(&*native, &*paired)?;
    let quote = quote_deposit(reserves, shares.total_supply()?, amount, native_sent)?;

    shares.mint(quote.shares)?;

    native.receive(native_sent)?;
    paired.pull(quote.paired_in)?;

    Ok(quote)
}

/// Pro-rata share of both reserves for `lp_amount` out of `total_supply`.
pub fn quote_withdrawal(
    reserves: Reserves,
    total_supply: u64,
    lp_amount: u64,
) -> Result<WithdrawnAmounts> {
    require!(lp_amount > 0, AmmError::InvalidAmount);
    require!(lp_amount <= total_supply, AmmError::InsufficientBalance);
    Ok(WithdrawnAmounts {
        native_out: mul_div_floor(reserves.native, lp_amount, total_supply)?,
        paired_out: mul_div_floor(reserves.paired, lp_amount, total_supply)?,
    })
}

/// Burns `lp_amount` from the caller and pays out both assets. The burn lands
/// before either transfer, so anything re-entering sees the reduced balance.
pub fn remove_liquidity(
    shares: &mut impl ShareLedger,
    native: &mut impl NativeCustody,
    paired: &mut impl PairedLedger,
    lp_amount: u64,
) -> Result<WithdrawnAmounts> {
    require!(lp_amount > 0, AmmError::InvalidAmount);
    require!(
        shares.balance_of()? >= lp_amount,
        AmmError::InsufficientBalance
    );

    let reserves = Reserves::read(&*native, &*paired)?;
    let withdrawn = quote_withdrawal(reserves, shares.total_supply()?, lp_amount)?;

    shares.burn(lp_amount)?;

    native.send(withdrawn.native_out)?;
    paired.push(withdrawn.paired_out)?;

    Ok(withdrawn)
}
