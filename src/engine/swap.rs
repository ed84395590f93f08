use anchor_lang::prelude::*;

use crate::error::AmmError;
use crate::math::get_amount_of_tokens;
use crate::reserves::{NativeCustody, PairedLedger, Reserves};

/// Sells `native_sent` lamports for at least `min_paired_out` paired asset.
/// Returns the paired amount paid out.
pub fn swap_native_for_paired(
    native: &mut impl NativeCustody,
    paired: &mut impl PairedLedger,
    native_sent: u64,
    min_paired_out: u64,
) -> Result<u64> {
    let reserves = Reserves::read(&*native, &*paired)?;
    let paired_out = get_amount_of_tokens(native_sent, reserves.native, reserves.paired)?;
    require!(paired_out >= min_paired_out, AmmError::SlippageExceeded);

    native.receive(native_sent)?;
    paired.push(paired_out)?;

    Ok(paired_out)
}

/// Sells `paired_in` of the paired asset for at least `min_native_out`
/// lamports. Reserves are read before the caller's tokens are pulled in.
pub fn swap_paired_for_native(
    native: &mut impl NativeCustody,
    paired: &mut impl PairedLedger,
    paired_in: u64,
    min_native_out: u64,
) -> Result<u64> {
    let reserves = Reserves::read(&*native, &*paired)?;
    let native_out = get_amount_of_tokens(paired_in, reserves.paired, reserves.native)?;
    require!(native_out >= min_native_out, AmmError::SlippageExceeded);

    paired.pull(paired_in)?;
    native.send(native_out)?;

    Ok(native_out)
}
