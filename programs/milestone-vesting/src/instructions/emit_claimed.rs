use anchor_lang::prelude::*;

use crate::state::{ClaimLedger, VestingState};

/// Report the cumulative normalized amount ever disbursed to a wallet.
/// Wallets with no ledger entry report zero, mirroring a mapping read.
pub fn emit_claimed(ctx: Context<EmitClaimed>, beneficiary: Pubkey) -> Result<()> {
    emit!(ClaimedReport {
        beneficiary,
        claimed: ctx.accounts.claim_ledger.claimed_of(&beneficiary),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitClaimed<'info> {
    #[account(seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(seeds = [b"claim_ledger", vesting_state.key().as_ref()], bump)]
    pub claim_ledger: Box<Account<'info, ClaimLedger>>,
}

#[event]
pub struct ClaimedReport {
    pub beneficiary: Pubkey,
    pub claimed: u128,
}
