use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("2Ut9RKeaqo895gVTEZ6fgG9WJ2sZAPfws5Hp3WGkcAg8");

#[program]
pub mod milestone_vesting {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    pub fn set_schedule(
        ctx: Context<SetSchedule>,
        milestones: Vec<i64>,
        beneficiaries: Vec<Pubkey>,
        amounts: Vec<Vec<u128>>,
    ) -> Result<()> {
        instructions::set_schedule(ctx, milestones, beneficiaries, amounts)
    }

    pub fn set_asset_registry<'info>(
        ctx: Context<'_, '_, 'info, 'info, SetAssetRegistry<'info>>,
    ) -> Result<()> {
        instructions::set_asset_registry(ctx)
    }

    pub fn start(ctx: Context<Start>) -> Result<()> {
        instructions::start(ctx)
    }

    pub fn deposit_asset(ctx: Context<DepositAsset>, amount: u64) -> Result<()> {
        instructions::deposit_asset(ctx, amount)
    }

    pub fn settle_claim<'info>(
        ctx: Context<'_, '_, 'info, 'info, SettleClaim<'info>>,
        beneficiary: Pubkey,
    ) -> Result<()> {
        instructions::settle_claim(ctx, beneficiary)
    }

    pub fn emit_allocation(ctx: Context<EmitAllocation>, beneficiary: Pubkey) -> Result<()> {
        instructions::emit_allocation(ctx, beneficiary)
    }

    pub fn emit_claimed(ctx: Context<EmitClaimed>, beneficiary: Pubkey) -> Result<()> {
        instructions::emit_claimed(ctx, beneficiary)
    }

    pub fn emit_asset_list(ctx: Context<EmitAssetList>) -> Result<()> {
        instructions::emit_asset_list(ctx)
    }
}
