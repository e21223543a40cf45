use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingState;

/// Flip the lifecycle gate from configuring to started. One-way; a repeat
/// call fails rather than silently succeeding.
pub fn start(ctx: Context<Start>) -> Result<()> {
    let st = &mut ctx.accounts.vesting_state;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        st.admin,
        VestingError::UnauthorizedAdmin
    );
    require!(!st.started, VestingError::AlreadyStarted);

    st.started = true;

    emit!(VestingStarted {
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Start<'info> {
    #[account(mut, seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    pub admin: Signer<'info>,
}

#[event]
pub struct VestingStarted {
    pub timestamp: i64,
}
