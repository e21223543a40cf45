use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::{MAX_ASSETS, NORMALIZED_DECIMALS};
use crate::error::VestingError;
use crate::state::{AssetInfo, AssetRegistry, VestingState};

/// Replace the whole asset registry. Mints arrive as remaining accounts in
/// disbursement-priority order; native decimals are read from the mint itself.
pub fn set_asset_registry<'info>(
    ctx: Context<'_, '_, 'info, 'info, SetAssetRegistry<'info>>,
) -> Result<()> {
    let st = &ctx.accounts.vesting_state;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        st.admin,
        VestingError::UnauthorizedAdmin
    );
    require!(!st.started, VestingError::ConfigurationLocked);
    require!(
        ctx.remaining_accounts.len() <= MAX_ASSETS,
        VestingError::RegistryTooLarge
    );

    let mut assets: Vec<AssetInfo> = Vec::with_capacity(ctx.remaining_accounts.len());
    for account_info in ctx.remaining_accounts {
        let mint = Account::<Mint>::try_from(account_info)
            .map_err(|_| error!(VestingError::InvalidAssetMint))?;
        require!(
            mint.decimals <= NORMALIZED_DECIMALS,
            VestingError::UnsupportedAssetDecimals
        );
        require!(
            assets.iter().all(|a| a.mint != account_info.key()),
            VestingError::DuplicateAssetMint
        );
        assets.push(AssetInfo {
            mint: account_info.key(),
            decimals: mint.decimals,
        });
    }

    ctx.accounts.asset_registry.assets = assets;

    emit!(AssetRegistryReplaced {
        asset_count: ctx.accounts.asset_registry.assets.len() as u8,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetAssetRegistry<'info> {
    #[account(seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        mut,
        seeds = [b"asset_registry", vesting_state.key().as_ref()],
        bump
    )]
    pub asset_registry: Account<'info, AssetRegistry>,

    pub admin: Signer<'info>,
}

#[event]
pub struct AssetRegistryReplaced {
    pub asset_count: u8,
}
