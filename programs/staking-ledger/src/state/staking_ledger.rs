use anchor_lang::prelude::*;

use crate::{errors::*, helpers::*};

/// Per-participant staking record.
/// PDA seeds: ["staking", owner]
#[account]
#[derive(InitSpace)]
pub struct StakingLedger {
    /// Participant allowed to deposit, withdraw and accrue; never reassigned
    pub owner: Pubkey,

    /// Token account holding the deposit, authority is this PDA; never reassigned
    pub vault: Pubkey,

    /// Tokens held in custody for the owner
    pub staked_amount: u64,

    /// Reward units credited but not paid out
    pub accrued_reward: u64,

    /// Unix timestamp of the latest deposit, or of creation before any deposit
    pub last_stake_timestamp: i64,

    pub is_open: bool,

    /// Bump seed used to sign vault withdrawals
    pub bump: u8,
}

impl StakingLedger {
    pub fn open(&mut self, owner: Pubkey, vault: Pubkey, bump: u8, now: i64) -> Result<()> {
        require!(!self.is_open, StakingError::AlreadyExists);

        *self = StakingLedger {
            owner,
            vault,
            staked_amount: 0,
            accrued_reward: 0,
            last_stake_timestamp: now,
            is_open: true,
            bump,
        };

        Ok(())
    }

    pub fn assert_is_owner(&self, caller: &Pubkey) -> Result<()> {
        require!(self.owner == *caller, StakingError::Unauthorized);
        Ok(())
    }

    pub fn record_deposit(&mut self, amount: u64, now: i64) -> Result<()> {
        require!(amount > 0, StakingError::InvalidAmount);

        self.staked_amount = self
            .staked_amount
            .checked_add(amount)
            .ok_or(StakingError::Overflow)?;
        self.last_stake_timestamp = now;

        Ok(())
    }

    /// Validates `amount` against the balance and prices the penalty.
    /// Does not touch the record.
    pub fn quote_withdrawal(
        &self,
        amount: u64,
        penalty_rate: u64,
        now: i64,
    ) -> Result<WithdrawalQuote> {
        require!(amount > 0, StakingError::InvalidAmount);
        require!(amount <= self.staked_amount, StakingError::InvalidAmount);

        quote_withdrawal(amount, penalty_rate, self.last_stake_timestamp, now)
    }

    /// The full quoted amount leaves the balance, penalty included.
    pub fn record_withdrawal(&mut self, quote: &WithdrawalQuote) -> Result<()> {
        self.staked_amount = self
            .staked_amount
            .checked_sub(quote.amount)
            .ok_or(StakingError::InvalidAmount)?;
        Ok(())
    }

    /// Credits `staked_amount * reward_rate` and returns the credited reward.
    pub fn accrue(&mut self, reward_rate: u64) -> Result<u64> {
        require!(self.staked_amount > 0, StakingError::NothingStaked);

        let reward = calculate_reward(self.staked_amount, reward_rate)?;
        self.accrued_reward = self
            .accrued_reward
            .checked_add(reward)
            .ok_or(StakingError::Overflow)?;

        Ok(reward)
    }
}
