use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::{AssetRegistry, ClaimLedger, Schedule, VestingState};
use crate::utils::settlement::{plan_disbursement, planned_total, PoolBalance};

/// Settle a beneficiary's outstanding entitlement against the asset pools.
///
/// Callable by anyone; the beneficiary argument selects whose entitlement is
/// pulled. Remaining accounts carry one (pool, destination) token-account pair
/// per registered asset, in registry order.
///
/// Disbursement is best-effort: whatever the pools cannot cover stays owed and
/// is claimable once more balance arrives. A failed transfer aborts the whole
/// instruction, ledger writes included, so the ledger never diverges from the
/// funds actually moved.
pub fn settle_claim<'info>(
    ctx: Context<'_, '_, 'info, 'info, SettleClaim<'info>>,
    beneficiary: Pubkey,
) -> Result<()> {
    let state_key = ctx.accounts.vesting_state.key();
    let now = Clock::get()?.unix_timestamp;

    let vested = ctx.accounts.schedule.vested_amount(&beneficiary, now);
    let claimed = ctx.accounts.claim_ledger.claimed_of(&beneficiary);

    // Nothing vested yet, wallet not in the schedule, or already fully
    // settled: always a legal no-op, never an error.
    let owed = vested.saturating_sub(claimed);
    if owed == 0 {
        return Ok(());
    }

    let assets = ctx.accounts.asset_registry.assets.clone();
    require!(
        ctx.remaining_accounts.len() == assets.len() * 2,
        VestingError::MissingAssetAccounts
    );

    let mut pools = Vec::with_capacity(assets.len());
    for (i, asset) in assets.iter().enumerate() {
        let pool = Account::<TokenAccount>::try_from(&ctx.remaining_accounts[2 * i])
            .map_err(|_| error!(VestingError::InvalidPoolAccount))?;
        require_keys_eq!(pool.mint, asset.mint, VestingError::InvalidPoolAccount);
        require_keys_eq!(pool.owner, state_key, VestingError::InvalidPoolAccount);
        pools.push(PoolBalance {
            decimals: asset.decimals,
            available: pool.amount,
        });
    }

    let draws = plan_disbursement(owed, &pools)?;
    if draws.is_empty() {
        return Ok(());
    }

    let state_ai = ctx.accounts.vesting_state.to_account_info();
    let signer_seeds: &[&[&[u8]]] = &[&[b"vesting_state", &[ctx.bumps.vesting_state]]];

    for draw in &draws {
        let pool_ai = &ctx.remaining_accounts[2 * draw.asset_index];
        let dest_ai = &ctx.remaining_accounts[2 * draw.asset_index + 1];

        let dest = Account::<TokenAccount>::try_from(dest_ai)
            .map_err(|_| error!(VestingError::InvalidDestinationAccount))?;
        require_keys_eq!(
            dest.mint,
            assets[draw.asset_index].mint,
            VestingError::InvalidDestinationAccount
        );
        require_keys_eq!(
            dest.owner,
            beneficiary,
            VestingError::InvalidDestinationAccount
        );

        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: pool_ai.clone(),
                    to: dest_ai.clone(),
                    authority: state_ai.clone(),
                },
                signer_seeds,
            ),
            draw.native_amount,
        )?;
    }

    let disbursed = planned_total(&draws)?;
    ctx.accounts.claim_ledger.credit(beneficiary, disbursed)?;

    emit!(ClaimSettled {
        beneficiary,
        vested,
        previously_claimed: claimed,
        disbursed,
        outstanding: owed
            .checked_sub(disbursed)
            .ok_or(VestingError::MathOverflow)?,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SettleClaim<'info> {
    #[account(seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(seeds = [b"schedule", vesting_state.key().as_ref()], bump)]
    pub schedule: Box<Account<'info, Schedule>>,

    #[account(seeds = [b"asset_registry", vesting_state.key().as_ref()], bump)]
    pub asset_registry: Account<'info, AssetRegistry>,

    #[account(
        mut,
        seeds = [b"claim_ledger", vesting_state.key().as_ref()],
        bump
    )]
    pub claim_ledger: Box<Account<'info, ClaimLedger>>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct ClaimSettled {
    pub beneficiary: Pubkey,
    pub vested: u128,
    pub previously_claimed: u128,
    pub disbursed: u128,
    pub outstanding: u128,
}
