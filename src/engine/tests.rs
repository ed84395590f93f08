use anchor_lang::error::Error;
use anchor_lang::prelude::*;

use super::*;
use crate::error::AmmError;
use crate::reserves::{NativeCustody, PairedLedger, Reserves};
use crate::shares::{after_burn, after_mint, ShareLedger};

const WALLET: u64 = u64::MAX / 4;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Lamports {
    pool: u64,
    caller: u64,
}

impl NativeCustody for Lamports {
    fn reserve(&self) -> Result<u64> {
        Ok(self.pool)
    }

    fn receive(&mut self, amount: u64) -> Result<()> {
        require!(self.caller >= amount, AmmError::InsufficientBalance);
        self.caller -= amount;
        self.pool += amount;
        Ok(())
    }

    fn send(&mut self, amount: u64) -> Result<()> {
        require!(self.pool >= amount, AmmError::InsufficientBalance);
        self.pool -= amount;
        self.caller += amount;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Tokens {
    pool: u64,
    caller: u64,
    allowance: u64,
}

impl PairedLedger for Tokens {
    fn reserve(&self) -> Result<u64> {
        Ok(self.pool)
    }

    fn pull(&mut self, amount: u64) -> Result<()> {
        require!(
            self.allowance >= amount && self.caller >= amount,
            AmmError::InsufficientBalance
        );
        self.allowance -= amount;
        self.caller -= amount;
        self.pool += amount;
        Ok(())
    }

    fn push(&mut self, amount: u64) -> Result<()> {
        require!(self.pool >= amount, AmmError::InsufficientBalance);
        self.pool -= amount;
        self.caller += amount;
        Ok(())
    }
}

/// LP supply plus the caller's holding; anything above `caller` belongs to
/// other holders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Shares {
    supply: u64,
    caller: u64,
}

impl ShareLedger for Shares {
    fn total_supply(&self) -> Result<u64> {
        Ok(self.supply)
    }

    fn balance_of(&self) -> Result<u64> {
        Ok(self.caller)
    }

    fn mint(&mut self, amount: u64) -> Result<()> {
        (self.supply, self.caller) = after_mint(self.supply, self.caller, amount)?;
        Ok(())
    }

    fn burn(&mut self, amount: u64) -> Result<()> {
        (self.supply, self.caller) = after_burn(self.supply, self.caller, amount)?;
        Ok(())
    }
}

/// One pool, one caller, and the host's all-or-nothing rule: a failed
/// operation leaves every ledger exactly as it found it.
#[derive(Debug, Clone)]
struct Market {
    shares: Shares,
    native: Lamports,
    paired: Tokens,
}

impl Market {
    fn new() -> Self {
        Self {
            shares: Shares::default(),
            native: Lamports {
                pool: 0,
                caller: WALLET,
            },
            paired: Tokens {
                pool: 0,
                caller: WALLET,
                allowance: WALLET,
            },
        }
    }

    fn seeded(native: u64, paired: u64) -> Self {
        let mut market = Self::new();
        market.add(paired, native).unwrap();
        market
    }

    fn atomically<T>(
        &mut self,
        op: impl FnOnce(&mut Shares, &mut Lamports, &mut Tokens) -> Result<T>,
    ) -> Result<T> {
        let before = self.clone();
        let result = op(&mut self.shares, &mut self.native, &mut self.paired);
        if result.is_err() {
            *self = before;
        }
        result
    }

    fn add(&mut self, amount: u64, native_sent: u64) -> Result<u64> {
        self.atomically(|shares, native, paired| {
            add_liquidity(shares, native, paired, amount, native_sent).map(|quote| quote.shares)
        })
    }

    fn remove(&mut self, lp_amount: u64) -> Result<WithdrawnAmounts> {
        self.atomically(|shares, native, paired| {
            remove_liquidity(shares, native, paired, lp_amount)
        })
    }

    fn sell_native(&mut self, native_sent: u64, min_out: u64) -> Result<u64> {
        self.atomically(|_, native, paired| {
            swap_native_for_paired(native, paired, native_sent, min_out)
        })
    }

    fn sell_paired(&mut self, paired_in: u64, min_out: u64) -> Result<u64> {
        self.atomically(|_, native, paired| {
            swap_paired_for_native(native, paired, paired_in, min_out)
        })
    }

    fn reserves(&self) -> Reserves {
        Reserves::read(&self.native, &self.paired).unwrap()
    }
}

#[test]
fn first_deposit_sets_price() {
    let mut market = Market::new();
    let shares = market.add(200, 100).unwrap();

    assert_eq!(shares, 100);
    assert_eq!(market.reserves(), Reserves { native: 100, paired: 200 });
    assert_eq!(market.shares.supply, 100);
    assert_eq!(market.shares.caller, 100);
    assert_eq!(market.paired.caller, WALLET - 200);
}

#[test]
fn first_deposit_needs_both_assets() {
    let mut market = Market::new();
    assert_eq!(
        market.add(200, 0).unwrap_err(),
        Error::from(AmmError::InvalidAmount)
    );
    assert_eq!(
        market.add(0, 100).unwrap_err(),
        Error::from(AmmError::InvalidAmount)
    );
    assert_eq!(market.shares.supply, 0);
    assert!(market.reserves().is_empty());
}

#[test]
fn later_deposit_pulls_only_the_ratio() {
    let mut market = Market::seeded(100, 200);
    let shares = market.add(150, 50).unwrap();

    assert_eq!(shares, 50);
    assert_eq!(market.reserves(), Reserves { native: 150, paired: 300 });
    assert_eq!(market.paired.caller, WALLET - 300);
    assert_eq!(market.shares.supply, 150);
}

#[test]
fn later_deposit_below_ratio_moves_nothing() {
    let mut market = Market::seeded(100, 200);
    let before = market.clone();

    let err = market.add(99, 50).unwrap_err();

    assert_eq!(err, Error::from(AmmError::SlippageExceeded));
    assert_eq!(market.native, before.native);
    assert_eq!(market.paired, before.paired);
    assert_eq!(market.shares.supply, 100);
}

#[test]
fn deposit_without_allowance_rolls_back_mint() {
    let mut market = Market::seeded(100, 200);
    market.paired.allowance = 10;

    let err = market.add(100, 50).unwrap_err();

    assert_eq!(err, Error::from(AmmError::InsufficientBalance));
    assert_eq!(market.shares.supply, 100);
    assert_eq!(market.shares.caller, 100);
    assert_eq!(market.reserves(), Reserves { native: 100, paired: 200 });
}

#[test]
fn deposit_too_small_to_mint_settles_for_nothing() {
    let mut market = Market::seeded(1_000, 1_000);
    market.shares = Shares { supply: 1, caller: 1 };

    assert_eq!(market.add(1, 1).unwrap(), 0);
    assert_eq!(market.reserves(), Reserves { native: 1_001, paired: 1_001 });
    assert_eq!(market.shares, Shares { supply: 1, caller: 1 });
}

#[test]
fn deposit_without_native_mints_nothing() {
    let mut market = Market::seeded(100, 200);

    assert_eq!(market.add(1_000, 0).unwrap(), 0);
    assert_eq!(market.reserves(), Reserves { native: 100, paired: 200 });
    assert_eq!(market.paired.caller, WALLET - 200);
    assert_eq!(market.shares.supply, 100);
}

#[test]
fn withdraw_pays_pro_rata() {
    let mut market = Market::seeded(100, 200);
    let out = market.remove(25).unwrap();

    assert_eq!(
        out,
        WithdrawnAmounts {
            native_out: 25,
            paired_out: 50
        }
    );
    assert_eq!(market.reserves(), Reserves { native: 75, paired: 150 });
    assert_eq!(market.shares.caller, 75);
    assert_eq!(market.shares.supply, 75);
}

#[test]
fn withdraw_beyond_balance_fails() {
    let mut market = Market::seeded(100, 200);
    let err = market.remove(101).unwrap_err();

    assert_eq!(err, Error::from(AmmError::InsufficientBalance));
    assert_eq!(market.reserves(), Reserves { native: 100, paired: 200 });
    assert_eq!(market.shares.caller, 100);
}

#[test]
fn withdraw_zero_is_invalid() {
    let mut market = Market::seeded(100, 200);
    assert_eq!(market.remove(0).unwrap_err(), Error::from(AmmError::InvalidAmount));
}

#[test]
fn full_withdrawal_empties_pool() {
    let mut market = Market::seeded(100, 200);
    market.remove(100).unwrap();

    assert!(market.reserves().is_empty());
    assert_eq!(market.reserves().native, 0);
    assert_eq!(market.shares.supply, 0);

    // An emptied pool accepts a fresh first deposit at a new price.
    assert_eq!(market.add(30, 10).unwrap(), 10);
    assert_eq!(market.reserves(), Reserves { native: 10, paired: 30 });
}

#[test]
fn native_swap_honours_minimum() {
    let mut market = Market::seeded(100, 200);
    let before = market.clone();

    let err = market.sell_native(10, 19).unwrap_err();
    assert_eq!(err, Error::from(AmmError::SlippageExceeded));
    assert_eq!(market.native, before.native);
    assert_eq!(market.paired, before.paired);

    assert_eq!(market.sell_native(10, 18).unwrap(), 18);
    assert_eq!(market.reserves(), Reserves { native: 110, paired: 182 });
}

#[test]
fn paired_swap_reads_reserves_before_pull() {
    let mut market = Market::seeded(100, 200);

    // 20 * 99 * 100 / (200 * 100 + 20 * 99) = 198000 / 21980
    assert_eq!(market.sell_paired(20, 9).unwrap(), 9);
    assert_eq!(market.reserves(), Reserves { native: 91, paired: 220 });
}

#[test]
fn paired_swap_honours_minimum() {
    let mut market = Market::seeded(100, 200);
    let err = market.sell_paired(20, 10).unwrap_err();

    assert_eq!(err, Error::from(AmmError::SlippageExceeded));
    assert_eq!(market.reserves(), Reserves { native: 100, paired: 200 });
    assert_eq!(market.paired.caller, WALLET - 200);
}

#[test]
fn swaps_need_liquidity() {
    let mut market = Market::new();
    assert_eq!(
        market.sell_native(10, 0).unwrap_err(),
        Error::from(AmmError::InvalidReserves)
    );
    assert_eq!(
        market.sell_paired(10, 0).unwrap_err(),
        Error::from(AmmError::InvalidReserves)
    );
}

#[test]
fn zero_input_swaps_pay_nothing() {
    let mut market = Market::seeded(100, 200);

    assert_eq!(market.sell_native(0, 0).unwrap(), 0);
    assert_eq!(market.sell_paired(0, 0).unwrap(), 0);
    assert_eq!(market.reserves(), Reserves { native: 100, paired: 200 });

    assert_eq!(
        market.sell_native(0, 1).unwrap_err(),
        Error::from(AmmError::SlippageExceeded)
    );
}

#[test]
fn withdraw_is_limited_to_own_shares() {
    let mut market = Market::seeded(100, 200);
    // Another provider holds 100 more shares against the same reserves.
    market.shares.supply = 200;

    assert_eq!(
        market.remove(101).unwrap_err(),
        Error::from(AmmError::InsufficientBalance)
    );
    let out = market.remove(100).unwrap();
    assert_eq!(
        out,
        WithdrawnAmounts {
            native_out: 50,
            paired_out: 100
        }
    );
    assert_eq!(market.shares, Shares { supply: 100, caller: 0 });
}

#[test]
fn fees_accrue_to_liquidity_providers() {
    let mut market = Market::seeded(1_000_000, 1_000_000);
    let bought = market.sell_native(100_000, 0).unwrap();
    market.sell_paired(bought, 0).unwrap();

    let out = market.remove(1_000_000).unwrap();
    assert!(out.native_out as u128 * out.paired_out as u128 > 1_000_000u128 * 1_000_000);
}

#[test]
fn quote_deposit_is_pure() {
    let reserves = Reserves { native: 100, paired: 200 };
    assert_eq!(
        quote_deposit(reserves, 100, 1_000, 10).unwrap(),
        DepositQuote {
            paired_in: 20,
            shares: 10
        }
    );
    assert_eq!(
        quote_deposit(Reserves { native: 0, paired: 5 }, 0, 10, 10).unwrap_err(),
        Error::from(AmmError::InvalidReserves)
    );
}

mod properties {
    use proptest::prelude::*;

    use super::{Market, WALLET};

    proptest! {
        #[test]
        fn round_trip_never_pays_out_more(
            amount in 1u64..=1_000_000_000_000,
            native_sent in 1u64..=1_000_000_000_000,
        ) {
            let mut market = Market::new();
            let shares = market.add(amount, native_sent).unwrap();
            let out = market.remove(shares).unwrap();
            prop_assert!(out.native_out <= native_sent);
            prop_assert!(out.paired_out <= amount);
        }

        #[test]
        fn deposits_keep_the_ratio(
            native in 1u64..=1_000_000_000,
            paired in 1u64..=1_000_000_000,
            native_sent in 1u64..=1_000_000_000,
        ) {
            let mut market = Market::seeded(native, paired);
            if market.add(WALLET, native_sent).is_ok() {
                let after = market.reserves();
                // paired_after is the floor of paired * native_after / native.
                let exact = paired as u128 * after.native as u128;
                let floored = after.paired as u128 * native as u128;
                prop_assert!(floored <= exact);
                prop_assert!(exact < floored + native as u128);
            }
        }

        #[test]
        fn withdrawals_keep_the_ratio(
            native in 1u64..=1_000_000_000,
            paired in 1u64..=1_000_000_000,
            lp in 1u64..=1_000_000_000,
        ) {
            let mut market = Market::seeded(native, paired);
            let lp = 1 + lp % native;
            let out = market.remove(lp).unwrap();
            // Each payout is within one unit of its exact pro-rata share.
            let supply = native as u128;
            prop_assert!(out.native_out as u128 * supply <= native as u128 * lp as u128);
            prop_assert!(out.paired_out as u128 * supply <= paired as u128 * lp as u128);
            prop_assert!((out.paired_out as u128 + 1) * supply > paired as u128 * lp as u128);
        }

        #[test]
        fn native_swap_grows_product(
            native in 1u64..=1_000_000_000_000,
            paired in 1u64..=1_000_000_000_000,
            input in 1u64..=1_000_000_000_000,
        ) {
            let mut market = Market::seeded(native, paired);
            let before = market.reserves().product();
            market.sell_native(input, 0).unwrap();
            prop_assert!(market.reserves().product() > before);
        }

        #[test]
        fn paired_swap_grows_product(
            native in 1u64..=1_000_000_000_000,
            paired in 1u64..=1_000_000_000_000,
            input in 1u64..=1_000_000_000_000,
        ) {
            let mut market = Market::seeded(native, paired);
            let before = market.reserves().product();
            market.sell_paired(input, 0).unwrap();
            prop_assert!(market.reserves().product() > before);
        }
    }
}
