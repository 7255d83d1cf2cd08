pub mod rate_registry;
pub mod staking_ledger;

pub use rate_registry::*;
pub use staking_ledger::*;
