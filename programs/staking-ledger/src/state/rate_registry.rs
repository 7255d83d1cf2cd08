// Rate Registry State
//
// Singleton record holding the global economic parameters and the only key
// allowed to change them.

use anchor_lang::prelude::*;
use crate::{constants::*, errors::*};

#[account]
#[derive(InitSpace)]
pub struct RateRegistry {
    pub authority: Pubkey,      // Sole key allowed to change rates, fixed at creation
    pub stake_mint: Pubkey,     // Token accepted by every vault
    pub reward_rate: u64,       // Reward units per staked unit per accrual
    pub penalty_rate: u64,      // Percentage points withheld on early withdrawal
    pub is_initialized: bool,
    pub bump: u8,
}

impl RateRegistry {
    pub fn open(&mut self, authority: Pubkey, stake_mint: Pubkey, bump: u8) -> Result<()> {
        require!(!self.is_initialized, StakingError::AlreadyExists);

        *self = RateRegistry {
            authority,
            stake_mint,
            reward_rate: 0,
            penalty_rate: 0,
            is_initialized: true,
            bump,
        };

        Ok(())
    }

    pub fn assert_is_authority(&self, caller: &Pubkey) -> Result<()> {
        require!(self.authority == *caller, StakingError::Unauthorized);
        Ok(())
    }

    // Returns the previous rate
    pub fn set_reward_rate(&mut self, new_rate: u64) -> Result<u64> {
        let old_rate = self.reward_rate;
        self.reward_rate = new_rate;
        Ok(old_rate)
    }

    // Returns the previous rate
    pub fn set_penalty_rate(&mut self, new_rate: u64) -> Result<u64> {
        require!(new_rate <= MAX_PENALTY_RATE, StakingError::InvalidRate);

        let old_rate = self.penalty_rate;
        self.penalty_rate = new_rate;
        Ok(old_rate)
    }
}
