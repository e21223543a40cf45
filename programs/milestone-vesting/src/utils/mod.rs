pub mod decimals;
pub mod settlement;
