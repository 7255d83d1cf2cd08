// Set Rate Instructions
//
// Registry authority overwrites the reward or penalty rate. No history kept.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

#[derive(Accounts)]
pub struct SetRate<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
        has_one = authority @ StakingError::Unauthorized,
    )]
    pub registry: Account<'info, RateRegistry>,
}

impl<'info> SetRate<'info> {
    pub fn set_reward_rate(&mut self, new_rate: u64) -> Result<()> {
        self.registry.assert_is_authority(&self.authority.key())?;

        // Unbounded; accrual reports overflow instead
        let old_rate = self.registry.set_reward_rate(new_rate)?;

        msg!("Reward rate {} -> {}", old_rate, new_rate);
        emit!(RateUpdated {
            kind: RateKind::Reward,
            old_rate,
            new_rate,
        });

        Ok(())
    }

    pub fn set_penalty_rate(&mut self, new_rate: u64) -> Result<()> {
        self.registry.assert_is_authority(&self.authority.key())?;

        // Bounded to 100 so a penalty can never exceed the withdrawn amount
        let old_rate = self.registry.set_penalty_rate(new_rate)?;

        msg!("Penalty rate {} -> {}", old_rate, new_rate);
        emit!(RateUpdated {
            kind: RateKind::Penalty,
            old_rate,
            new_rate,
        });

        Ok(())
    }
}
