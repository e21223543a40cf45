//! Program-wide constants.

/// Decimal scale of the canonical internal accounting unit.
pub const NORMALIZED_DECIMALS: u8 = 18;

/// Max milestones stored in the schedule PDA.
pub const MAX_MILESTONES: usize = 16;

/// Max beneficiaries stored in the schedule PDA (and claim ledger).
pub const MAX_BENEFICIARIES: usize = 32;

/// Max fungible assets in the registry PDA.
pub const MAX_ASSETS: usize = 8;
