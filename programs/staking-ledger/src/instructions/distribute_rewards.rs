// Distribute Rewards Instruction
//
// Credits staked_amount * reward_rate to the ledger. Bookkeeping only, no
// tokens move.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

#[derive(Accounts)]
pub struct DistributeRewards<'info> {
    pub owner: Signer<'info>,

    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, RateRegistry>,

    #[account(
        mut,
        seeds = [LEDGER_SEED, owner.key().as_ref()],
        bump = staking_ledger.bump,
        has_one = owner @ StakingError::Unauthorized,
    )]
    pub staking_ledger: Account<'info, StakingLedger>,
}

impl<'info> DistributeRewards<'info> {
    pub fn distribute_rewards(&mut self) -> Result<()> {
        self.staking_ledger.assert_is_owner(&self.owner.key())?;

        // Rejects an empty ledger and overflow, leaving the record as it was
        let reward = self.staking_ledger.accrue(self.registry.reward_rate)?;

        msg!(
            "Accrued {} for {}, total {}",
            reward,
            self.owner.key(),
            self.staking_ledger.accrued_reward
        );

        emit!(RewardsDistributed {
            owner: self.owner.key(),
            reward,
            accrued_reward: self.staking_ledger.accrued_reward,
        });

        Ok(())
    }
}
