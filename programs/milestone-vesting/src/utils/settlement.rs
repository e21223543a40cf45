//! Waterfall disbursement planning.
//!
//! Given an owed normalized amount and the pool balances of the registered
//! assets in priority order, compute the per-asset draws: drain each asset
//! before moving to the next. Each draw is floored to the asset's native
//! precision and the ledger amount re-derived from the floored native amount,
//! so what gets recorded exactly matches what gets transferred. Any remainder
//! stays owed and is claimable by a later settlement (carry-forward).

use crate::error::VestingError;
use crate::utils::decimals::{denormalize, normalize};

/// Snapshot of one registered asset's pool at settlement time.
#[derive(Clone, Copy, Debug)]
pub struct PoolBalance {
    pub decimals: u8,
    /// Native units held by the pool token account.
    pub available: u64,
}

/// One transfer the settlement must execute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssetDraw {
    /// Index into the asset registry (and the pool slice).
    pub asset_index: usize,
    pub native_amount: u64,
    /// Ledger credit for this draw, re-derived from the floored native amount.
    pub normalized_amount: u128,
}

/// Plan the draws needed to satisfy `owed`, in pool (registry) order.
///
/// Assets with nothing to contribute are skipped, including assets whose
/// contribution would floor to zero native units.
pub fn plan_disbursement(
    owed: u128,
    pools: &[PoolBalance],
) -> Result<Vec<AssetDraw>, VestingError> {
    let mut remaining = owed;
    let mut draws = Vec::new();

    for (asset_index, pool) in pools.iter().enumerate() {
        if remaining == 0 {
            break;
        }
        let available = normalize(pool.available, pool.decimals)?;
        let take = remaining.min(available);
        if take == 0 {
            continue;
        }
        let native_amount = denormalize(take, pool.decimals)?;
        if native_amount == 0 {
            continue;
        }
        let normalized_amount = normalize(native_amount, pool.decimals)?;
        draws.push(AssetDraw {
            asset_index,
            native_amount,
            normalized_amount,
        });
        remaining = remaining
            .checked_sub(normalized_amount)
            .ok_or(VestingError::MathOverflow)?;
    }

    Ok(draws)
}

/// Sum of the ledger credits of a plan.
pub fn planned_total(draws: &[AssetDraw]) -> Result<u128, VestingError> {
    let mut total = 0u128;
    for d in draws {
        total = total
            .checked_add(d.normalized_amount)
            .ok_or(VestingError::MathOverflow)?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ClaimLedger, Schedule};
    use anchor_lang::prelude::Pubkey;

    const ONE: u128 = 1_000_000_000_000_000_000;

    fn pool18(available_whole: u64) -> PoolBalance {
        PoolBalance {
            decimals: 18,
            available: available_whole,
        }
    }

    #[test]
    fn waterfall_drains_assets_in_priority_order() {
        // Owed 100, first asset holds 40, second holds 100: 40 then 60.
        let pools = [pool18(40), pool18(100)];
        let draws = plan_disbursement(100, &pools).unwrap();
        assert_eq!(
            draws,
            vec![
                AssetDraw {
                    asset_index: 0,
                    native_amount: 40,
                    normalized_amount: 40,
                },
                AssetDraw {
                    asset_index: 1,
                    native_amount: 60,
                    normalized_amount: 60,
                },
            ]
        );
        assert_eq!(planned_total(&draws).unwrap(), 100);
    }

    #[test]
    fn empty_pools_are_skipped() {
        let pools = [pool18(0), pool18(30)];
        let draws = plan_disbursement(100, &pools).unwrap();
        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].asset_index, 1);
        assert_eq!(draws[0].native_amount, 30);
    }

    #[test]
    fn carry_forward_never_regrants() {
        // First settlement: only 30 of 100 available.
        let mut ledger = ClaimLedger { entries: vec![] };
        let wallet = Pubkey::new_unique();
        let draws = plan_disbursement(100, &[pool18(0), pool18(30)]).unwrap();
        ledger
            .credit(wallet, planned_total(&draws).unwrap())
            .unwrap();
        assert_eq!(ledger.claimed_of(&wallet), 30);

        // Pool gains 70 more; the next settlement owes exactly the remainder.
        let owed = 100 - ledger.claimed_of(&wallet);
        let draws = plan_disbursement(owed, &[pool18(0), pool18(70)]).unwrap();
        ledger
            .credit(wallet, planned_total(&draws).unwrap())
            .unwrap();
        assert_eq!(ledger.claimed_of(&wallet), 100);
    }

    #[test]
    fn draw_floors_to_native_precision_and_records_floored_value() {
        // 6-decimal asset: owed carries dust below 10^12 which cannot be
        // transferred; the recorded credit must match the floored transfer.
        let owed = 123_456_789_000_000_000_123u128;
        let pools = [PoolBalance {
            decimals: 6,
            available: u64::MAX,
        }];
        let draws = plan_disbursement(owed, &pools).unwrap();
        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].native_amount, 123_456_789);
        assert_eq!(draws[0].normalized_amount, 123_456_789_000_000_000_000);
        // The 123 dust units stay owed for a later settlement.
        assert_eq!(owed - planned_total(&draws).unwrap(), 123);
    }

    #[test]
    fn dust_only_draw_is_skipped_not_zero_transferred() {
        // Owed less than one native unit of a 6-decimal asset: no draw at all.
        let pools = [PoolBalance {
            decimals: 6,
            available: 1_000_000,
        }];
        let draws = plan_disbursement(999_999_999_999, &pools).unwrap();
        assert!(draws.is_empty());
    }

    #[test]
    fn mixed_decimals_waterfall() {
        // 6-decimal asset first, 9-decimal second; owed 100 whole units with
        // 40 available in the first.
        let pools = [
            PoolBalance {
                decimals: 6,
                available: 40_000_000,
            },
            PoolBalance {
                decimals: 9,
                available: 100_000_000_000,
            },
        ];
        let draws = plan_disbursement(100 * ONE, &pools).unwrap();
        assert_eq!(draws[0].native_amount, 40_000_000);
        assert_eq!(draws[0].normalized_amount, 40 * ONE);
        assert_eq!(draws[1].native_amount, 60_000_000_000);
        assert_eq!(draws[1].normalized_amount, 60 * ONE);
    }

    #[test]
    fn settlement_end_to_end_against_schedule() {
        // Milestones [t1, t2] with allocations [100, 200]; single funded asset
        // holding 1800. Settle after t1 yields 100, after t2 a further 200,
        // and a third settlement is a no-op.
        let wallet = Pubkey::new_unique();
        let schedule = Schedule {
            milestones: vec![1_000, 2_000],
            beneficiaries: vec![wallet],
            cumulative: vec![100, 300],
        };
        let mut ledger = ClaimLedger { entries: vec![] };
        let mut pool = pool18(1800);

        let settle = |ledger: &mut ClaimLedger, pool: &mut PoolBalance, now: i64| -> u128 {
            let vested = schedule.vested_amount(&wallet, now);
            let owed = vested.saturating_sub(ledger.claimed_of(&wallet));
            if owed == 0 {
                return 0;
            }
            let draws = plan_disbursement(owed, std::slice::from_ref(pool)).unwrap();
            let total = planned_total(&draws).unwrap();
            for d in &draws {
                pool.available -= d.native_amount;
            }
            if total > 0 {
                ledger.credit(wallet, total).unwrap();
            }
            total
        };

        assert_eq!(settle(&mut ledger, &mut pool, 1_001), 100);
        assert_eq!(ledger.claimed_of(&wallet), 100);
        assert_eq!(settle(&mut ledger, &mut pool, 2_000), 200);
        assert_eq!(ledger.claimed_of(&wallet), 300);
        assert_eq!(settle(&mut ledger, &mut pool, 3_000), 0);
        assert_eq!(pool.available, 1500);

        // Invariant: claimed never exceeds vested at any checkpoint.
        assert!(ledger.claimed_of(&wallet) <= schedule.vested_amount(&wallet, 3_000));
    }

    #[test]
    fn mixed_assets_two_beneficiaries_incremental_funding() {
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let schedule = Schedule {
            milestones: vec![1_000, 2_000],
            beneficiaries: vec![alice, bob],
            cumulative: vec![100 * ONE, 300 * ONE, 500 * ONE, 1_500 * ONE],
        };
        let mut ledger = ClaimLedger { entries: vec![] };
        // usdc-like 6-decimal pool, then a 9-decimal pool, funded later.
        let mut pools = [
            PoolBalance {
                decimals: 6,
                available: 150_000_000, // 150 whole units
            },
            PoolBalance {
                decimals: 9,
                available: 0,
            },
        ];

        let settle = |ledger: &mut ClaimLedger,
                      pools: &mut [PoolBalance; 2],
                      wallet: Pubkey,
                      now: i64|
         -> u128 {
            let vested = schedule.vested_amount(&wallet, now);
            let owed = vested.saturating_sub(ledger.claimed_of(&wallet));
            if owed == 0 {
                return 0;
            }
            let draws = plan_disbursement(owed, pools.as_slice()).unwrap();
            let total = planned_total(&draws).unwrap();
            for d in &draws {
                pools[d.asset_index].available -= d.native_amount;
            }
            if total > 0 {
                ledger.credit(wallet, total).unwrap();
            }
            total
        };

        // After t1 alice is owed 100; the 6-decimal pool covers it fully.
        assert_eq!(settle(&mut ledger, &mut pools, alice, 1_000), 100 * ONE);
        assert_eq!(pools[0].available, 50_000_000);

        // Bob is owed 500; only 50 remain in the first pool, second is empty.
        assert_eq!(settle(&mut ledger, &mut pools, bob, 1_000), 50 * ONE);
        assert_eq!(pools[0].available, 0);
        assert_eq!(ledger.claimed_of(&bob), 50 * ONE);

        // Fund the second pool; bob recovers the remaining 450.
        pools[1].available = 2_000_000_000_000; // 2000 whole units at 9 decimals
        assert_eq!(settle(&mut ledger, &mut pools, bob, 1_000), 450 * ONE);
        assert_eq!(ledger.claimed_of(&bob), 500 * ONE);

        // After t2 both claim their second tranche from the second pool.
        assert_eq!(settle(&mut ledger, &mut pools, alice, 2_000), 200 * ONE);
        assert_eq!(settle(&mut ledger, &mut pools, bob, 2_000), 1_000 * ONE);
        assert_eq!(ledger.claimed_of(&alice), 300 * ONE);
        assert_eq!(ledger.claimed_of(&bob), 1_500 * ONE);

        for wallet in [alice, bob] {
            assert!(ledger.claimed_of(&wallet) <= schedule.vested_amount(&wallet, i64::MAX));
        }
    }
}
