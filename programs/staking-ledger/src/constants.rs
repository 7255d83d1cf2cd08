// Staking Ledger Constants

use anchor_lang::prelude::*;

// Seeds for PDA derivation: ["staking", owner]
#[constant]
pub const LEDGER_SEED: &[u8] = b"staking";

// Seeds for PDA derivation: ["registry"]
#[constant]
pub const REGISTRY_SEED: &[u8] = b"registry";

// Withdrawals within this many seconds of the last deposit are early (7 days)
#[constant]
pub const MATURITY_WINDOW_SECONDS: i64 = 7 * 24 * 60 * 60;

// Penalty rate is expressed in percentage points
pub const MAX_PENALTY_RATE: u64 = 100;
pub const PENALTY_RATE_DENOMINATOR: u128 = 100;

pub const ANCHOR_DISCRIMINATOR: usize = 8;
