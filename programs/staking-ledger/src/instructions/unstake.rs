// Unstake Instruction
//
// Returns tokens from the vault to the owner. Inside the maturity window a
// penalty of amount * penalty_rate / 100 is withheld and stays in the vault;
// the full amount still leaves the staked balance.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct Unstake<'info> {
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
        has_one = vault @ StakingError::InvalidVault,
    )]
    pub staking_ledger: Account<'info, StakingLedger>,

    // Must be the vault recorded at open_ledger, checked by has_one above
    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    // Destination of the payout
    #[account(
        mut,
        token::authority = owner,
        constraint = user_token_account.mint == vault.mint @ StakingError::InvalidStakeMint,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Unstake<'info> {
    pub fn unstake(&mut self, amount: u64) -> Result<()> {
        self.staking_ledger.assert_is_owner(&self.owner.key())?;

        // Quote validates amount against the staked balance and applies the
        // penalty only inside the maturity window
        let now = Clock::get()?.unix_timestamp;
        let quote = self
            .staking_ledger
            .quote_withdrawal(amount, self.registry.penalty_rate, now)?;

        // Only the returned part leaves the vault, so that is what must be there
        require!(
            self.vault.amount >= quote.returned,
            StakingError::TransferFailed
        );

        // The ledger PDA is the vault authority and signs the payout
        let owner_key = self.owner.key();
        let bump = self.staking_ledger.bump;
        let ledger_seeds = &[LEDGER_SEED, owner_key.as_ref(), &[bump]];

        release_from_vault(
            quote.returned,
            &self.token_program.to_account_info(),
            &self.vault.to_account_info(),
            &self.user_token_account.to_account_info(),
            &self.staking_ledger.to_account_info(),
            &ledger_seeds[..],
        )?;

        // The full amount leaves the staked balance, penalty included
        self.staking_ledger.record_withdrawal(&quote)?;

        msg!(
            "Unstaked {} for {}: returned {}, penalty {}",
            amount,
            owner_key,
            quote.returned,
            quote.penalty
        );

        emit!(Unstaked {
            owner: owner_key,
            amount,
            penalty: quote.penalty,
            returned: quote.returned,
            staked_amount: self.staking_ledger.staked_amount,
        });

        Ok(())
    }
}
