use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{Schedule, VestingState};

/// Report a beneficiary's (milestone, amount) allocation sequence as an event.
pub fn emit_allocation(ctx: Context<EmitAllocation>, beneficiary: Pubkey) -> Result<()> {
    let schedule = &ctx.accounts.schedule;
    let index = schedule
        .beneficiary_index(&beneficiary)
        .ok_or(VestingError::UnknownBeneficiary)?;

    emit!(AllocationReport {
        beneficiary,
        milestones: schedule.milestones.clone(),
        amounts: schedule.allocation_row(index),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitAllocation<'info> {
    #[account(seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(seeds = [b"schedule", vesting_state.key().as_ref()], bump)]
    pub schedule: Box<Account<'info, Schedule>>,
}

#[event]
pub struct AllocationReport {
    pub beneficiary: Pubkey,
    pub milestones: Vec<i64>,
    pub amounts: Vec<u128>,
}
