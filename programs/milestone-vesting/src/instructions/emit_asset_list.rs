use anchor_lang::prelude::*;

use crate::state::{AssetInfo, AssetRegistry, VestingState};

/// Report the registered assets in disbursement-priority order.
pub fn emit_asset_list(ctx: Context<EmitAssetList>) -> Result<()> {
    emit!(AssetListReport {
        assets: ctx.accounts.asset_registry.assets.clone(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitAssetList<'info> {
    #[account(seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(seeds = [b"asset_registry", vesting_state.key().as_ref()], bump)]
    pub asset_registry: Account<'info, AssetRegistry>,
}

#[event]
pub struct AssetListReport {
    pub assets: Vec<AssetInfo>,
}
