use anchor_lang::prelude::*;

/// Root state PDA: admin authority and the lifecycle gate.
///
/// `started == false` is the configuring phase; `start` flips it exactly once
/// and there is no reverse transition.
#[account]
pub struct VestingState {
    /// Admin authority for configuration and lifecycle instructions.
    pub admin: Pubkey,
    /// Lifecycle gate; configuration is rejected once set.
    pub started: bool,
}

impl VestingState {
    pub const SIZE: usize =
        32 + // admin
        1;   // started
}
