use anchor_lang::prelude::*;

use crate::state::{AssetRegistry, ClaimLedger, Schedule, VestingState};

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let st = &mut ctx.accounts.vesting_state;
    st.admin = ctx.accounts.admin.key();
    st.started = false;

    let schedule = &mut ctx.accounts.schedule;
    schedule.milestones = Vec::new();
    schedule.beneficiaries = Vec::new();
    schedule.cumulative = Vec::new();

    ctx.accounts.asset_registry.assets = Vec::new();
    ctx.accounts.claim_ledger.entries = Vec::new();

    emit!(VestingInitialized {
        admin: st.admin,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + VestingState::SIZE,
        seeds = [b"vesting_state"],
        bump
    )]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        init,
        payer = admin,
        space = Schedule::space(),
        seeds = [b"schedule", vesting_state.key().as_ref()],
        bump
    )]
    pub schedule: Box<Account<'info, Schedule>>,

    #[account(
        init,
        payer = admin,
        space = AssetRegistry::space(),
        seeds = [b"asset_registry", vesting_state.key().as_ref()],
        bump
    )]
    pub asset_registry: Account<'info, AssetRegistry>,

    #[account(
        init,
        payer = admin,
        space = ClaimLedger::space(),
        seeds = [b"claim_ledger", vesting_state.key().as_ref()],
        bump
    )]
    pub claim_ledger: Box<Account<'info, ClaimLedger>>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct VestingInitialized {
    pub admin: Pubkey,
}
