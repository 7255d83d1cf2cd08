// Staking Ledger Program
//
// Custodial token staking. Each participant owns one ledger PDA with its own
// vault; a singleton registry holds the reward and penalty rates behind a
// single authority.
//
// Instructions:
// - open_registry: Create the rate registry (signer becomes authority)
// - open_ledger: Create the caller's ledger and vault
// - stake / unstake: Move tokens into / out of the vault
// - distribute_rewards: Credit staked_amount * reward_rate to the ledger
// - set_reward_rate / set_penalty_rate: Authority-only rate updates

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("4Dd4gbfRWDQuNuLTQXifnNSk6Cp75EkAYYRoYgunrqkt");

#[program]
pub mod staking_ledger {
    use super::*;

    pub fn open_registry(ctx: Context<OpenRegistry>) -> Result<()> {
        ctx.accounts.open_registry(&ctx.bumps)
    }

    pub fn open_ledger(ctx: Context<OpenLedger>) -> Result<()> {
        ctx.accounts.open_ledger(&ctx.bumps)
    }

    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        ctx.accounts.stake(amount)
    }

    // Early withdrawals (inside the maturity window) pay the penalty rate
    pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
        ctx.accounts.unstake(amount)
    }

    pub fn distribute_rewards(ctx: Context<DistributeRewards>) -> Result<()> {
        ctx.accounts.distribute_rewards()
    }

    pub fn set_reward_rate(ctx: Context<SetRate>, new_rate: u64) -> Result<()> {
        ctx.accounts.set_reward_rate(new_rate)
    }

    // new_rate is in percentage points, 0..=100
    pub fn set_penalty_rate(ctx: Context<SetRate>, new_rate: u64) -> Result<()> {
        ctx.accounts.set_penalty_rate(new_rate)
    }
}
