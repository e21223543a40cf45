use anchor_lang::prelude::*;

use crate::constants::{MAX_BENEFICIARIES, MAX_MILESTONES};
use crate::error::VestingError;

/// Schedule PDA: global milestone list plus the beneficiary allocation matrix.
///
/// Allocations are stored as row-major prefix sums over the milestone axis, built
/// once at replace time, so a vested-amount lookup is a binary search over the
/// milestones followed by a single indexed read.
#[account]
pub struct Schedule {
    /// Milestone timestamps (unix seconds, UTC), strictly increasing.
    pub milestones: Vec<i64>,
    /// Beneficiary wallets; row order of `cumulative`.
    pub beneficiaries: Vec<Pubkey>,
    /// Row-major cumulative normalized allocations, beneficiaries x milestones.
    pub cumulative: Vec<u128>,
}

impl Schedule {
    /// Space for discriminator + vec headers + max-capacity contents.
    pub const fn space() -> usize {
        8 + (4 + 8 * MAX_MILESTONES)
            + (4 + 32 * MAX_BENEFICIARIES)
            + (4 + 16 * MAX_MILESTONES * MAX_BENEFICIARIES)
    }

    pub fn beneficiary_index(&self, wallet: &Pubkey) -> Option<usize> {
        self.beneficiaries.iter().position(|b| b == wallet)
    }

    fn cumulative_row(&self, index: usize) -> &[u128] {
        let cols = self.milestones.len();
        &self.cumulative[index * cols..(index + 1) * cols]
    }

    /// Total normalized amount vested for `wallet` at `as_of`: the prefix sum at
    /// the last milestone whose timestamp is <= `as_of` (boundary inclusive).
    /// Unknown wallets vest nothing.
    pub fn vested_amount(&self, wallet: &Pubkey, as_of: i64) -> u128 {
        let Some(index) = self.beneficiary_index(wallet) else {
            return 0;
        };
        let reached = self.milestones.partition_point(|t| *t <= as_of);
        if reached == 0 {
            0
        } else {
            self.cumulative_row(index)[reached - 1]
        }
    }

    /// Per-milestone allocation amounts for reporting (de-cumulated).
    pub fn allocation_row(&self, index: usize) -> Vec<u128> {
        let row = self.cumulative_row(index);
        let mut prev = 0u128;
        row.iter()
            .map(|c| {
                let amount = c - prev;
                prev = *c;
                amount
            })
            .collect()
    }
}

/// Validate replacement inputs and build the row-major cumulative matrix.
///
/// Checks capacity, timestamp positivity and strict monotonicity, beneficiary
/// uniqueness and matrix shape; on success returns the prefix sums ready to be
/// swapped into the account. Pure, so a failure leaves nothing half-written.
pub fn validate_replacement(
    milestones: &[i64],
    beneficiaries: &[Pubkey],
    amounts: &[Vec<u128>],
) -> core::result::Result<Vec<u128>, VestingError> {
    if milestones.len() > MAX_MILESTONES || beneficiaries.len() > MAX_BENEFICIARIES {
        return Err(VestingError::ScheduleTooLarge);
    }
    if amounts.len() != beneficiaries.len() {
        return Err(VestingError::InvalidConfig);
    }
    for t in milestones {
        if *t <= 0 {
            return Err(VestingError::InvalidTimestamp);
        }
    }
    for pair in milestones.windows(2) {
        if pair[0] >= pair[1] {
            return Err(VestingError::NonMonotonicSchedule);
        }
    }
    for (i, wallet) in beneficiaries.iter().enumerate() {
        if *wallet == Pubkey::default() {
            return Err(VestingError::InvalidConfig);
        }
        if beneficiaries[i + 1..].contains(wallet) {
            return Err(VestingError::DuplicateBeneficiary);
        }
    }

    let mut cumulative = Vec::with_capacity(beneficiaries.len() * milestones.len());
    for row in amounts {
        if row.len() != milestones.len() {
            return Err(VestingError::InvalidConfig);
        }
        let mut acc: u128 = 0;
        for amount in row {
            acc = acc.checked_add(*amount).ok_or(VestingError::MathOverflow)?;
            cumulative.push(acc);
        }
    }
    Ok(cumulative)
}
