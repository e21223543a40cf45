pub mod asset_registry;
pub mod claim_ledger;
pub mod schedule;
pub mod vesting_state;

pub use asset_registry::*;
pub use claim_ledger::*;
pub use schedule::*;
pub use vesting_state::*;
