pub mod open_registry;
pub mod open_ledger;
pub mod stake;
pub mod unstake;
pub mod distribute_rewards;
pub mod set_rates;

pub use open_registry::*;
pub use open_ledger::*;
pub use stake::*;
pub use unstake::*;
pub use distribute_rewards::*;
pub use set_rates::*;
