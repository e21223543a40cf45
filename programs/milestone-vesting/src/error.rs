use anchor_lang::prelude::*;

/// Custom error codes for the milestone vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Invalid configuration (allocation matrix shape mismatch)")]
    InvalidConfig,

    #[msg("Milestone timestamps must be strictly increasing")]
    NonMonotonicSchedule,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Schedule exceeds capacity")]
    ScheduleTooLarge,

    #[msg("Duplicate beneficiary wallet")]
    DuplicateBeneficiary,

    #[msg("Asset registry exceeds capacity")]
    RegistryTooLarge,

    #[msg("Duplicate asset mint")]
    DuplicateAssetMint,

    #[msg("Asset decimals exceed the normalized scale")]
    UnsupportedAssetDecimals,

    #[msg("Account is not a valid asset mint")]
    InvalidAssetMint,

    #[msg("Vesting already started")]
    AlreadyStarted,

    #[msg("Configuration is locked after start")]
    ConfigurationLocked,

    #[msg("Beneficiary not found in schedule")]
    UnknownBeneficiary,

    #[msg("Expected one pool and one destination account per registered asset")]
    MissingAssetAccounts,

    #[msg("Pool token account does not match registry asset")]
    InvalidPoolAccount,

    #[msg("Destination token account does not belong to beneficiary")]
    InvalidDestinationAccount,

    #[msg("Claim ledger is full")]
    LedgerFull,

    #[msg("Math overflow")]
    MathOverflow,
}
