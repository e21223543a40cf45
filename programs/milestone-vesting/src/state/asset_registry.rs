use anchor_lang::prelude::*;

use crate::constants::MAX_ASSETS;

/// One accepted fungible asset: the mint handle plus its native decimal scale.
/// Registry position is disbursement priority. Immutable once registered;
/// the registry is only ever replaced wholesale.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssetInfo {
    pub mint: Pubkey,
    pub decimals: u8,
}

/// Asset registry PDA: accepted mints in disbursement-priority order.
#[account]
pub struct AssetRegistry {
    pub assets: Vec<AssetInfo>,
}

impl AssetRegistry {
    /// Space for discriminator + vec header + max-capacity entries.
    pub const fn space() -> usize {
        8 + 4 + (32 + 1) * MAX_ASSETS
    }
}
