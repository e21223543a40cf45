pub mod initialize;
pub mod set_schedule;
pub mod set_asset_registry;
pub mod start;
pub mod deposit_asset;
pub mod settle_claim;
pub mod emit_allocation;
pub mod emit_claimed;
pub mod emit_asset_list;

pub use initialize::*;
pub use set_schedule::*;
pub use set_asset_registry::*;
pub use start::*;
pub use deposit_asset::*;
pub use settle_claim::*;
pub use emit_allocation::*;
pub use emit_claimed::*;
pub use emit_asset_list::*;
