use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{validate_replacement, Schedule, VestingState};

/// Replace the whole schedule: milestone list, beneficiary list and the
/// allocation matrix (normalized 18-decimal amounts, one row per beneficiary,
/// one column per milestone). The claim ledger is deliberately untouched, so
/// amounts already disbursed stay counted against the new schedule.
pub fn set_schedule(
    ctx: Context<SetSchedule>,
    milestones: Vec<i64>,
    beneficiaries: Vec<Pubkey>,
    amounts: Vec<Vec<u128>>,
) -> Result<()> {
    let st = &ctx.accounts.vesting_state;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        st.admin,
        VestingError::UnauthorizedAdmin
    );
    require!(!st.started, VestingError::ConfigurationLocked);

    // Build the full snapshot before touching the account, so a failure in any
    // row leaves the previous schedule intact.
    let cumulative = validate_replacement(&milestones, &beneficiaries, &amounts)?;

    let schedule = &mut ctx.accounts.schedule;
    schedule.milestones = milestones;
    schedule.beneficiaries = beneficiaries;
    schedule.cumulative = cumulative;

    emit!(ScheduleReplaced {
        milestone_count: schedule.milestones.len() as u8,
        beneficiary_count: schedule.beneficiaries.len() as u8,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetSchedule<'info> {
    #[account(seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        mut,
        seeds = [b"schedule", vesting_state.key().as_ref()],
        bump
    )]
    pub schedule: Box<Account<'info, Schedule>>,

    pub admin: Signer<'info>,
}

#[event]
pub struct ScheduleReplaced {
    pub milestone_count: u8,
    pub beneficiary_count: u8,
}
