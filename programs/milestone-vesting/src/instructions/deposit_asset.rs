use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::{AssetRegistry, VestingState};

/// Fund the pool for one registered asset. Any signer may deposit, before or
/// after start; the pool is just a token account owned by the state PDA, so a
/// plain external transfer works as well. This instruction only adds a
/// registry-membership check on top.
pub fn deposit_asset(ctx: Context<DepositAsset>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidConfig);

    let registry = &ctx.accounts.asset_registry;
    let mint = ctx.accounts.pool.mint;
    require!(
        registry.assets.iter().any(|a| a.mint == mint),
        VestingError::InvalidAssetMint
    );
    require_keys_eq!(
        ctx.accounts.funder_token_account.mint,
        mint,
        VestingError::InvalidAssetMint
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.funder_token_account.to_account_info(),
                to: ctx.accounts.pool.to_account_info(),
                authority: ctx.accounts.funder.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.pool.reload()?;

    emit!(AssetDeposited {
        mint,
        amount,
        pool_balance: ctx.accounts.pool.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DepositAsset<'info> {
    #[account(seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        seeds = [b"asset_registry", vesting_state.key().as_ref()],
        bump
    )]
    pub asset_registry: Account<'info, AssetRegistry>,

    #[account(
        mut,
        constraint = pool.owner == vesting_state.key() @ VestingError::InvalidPoolAccount,
    )]
    pub pool: Account<'info, TokenAccount>,

    #[account(mut)]
    pub funder_token_account: Account<'info, TokenAccount>,

    pub funder: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct AssetDeposited {
    pub mint: Pubkey,
    pub amount: u64,
    pub pool_balance: u64,
}
