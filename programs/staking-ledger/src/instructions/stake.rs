// Stake Instruction
//
// Moves tokens from the owner's token account into their vault and credits
// the ledger. Restarts the maturity window.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct Stake<'info> {
    pub owner: Signer<'info>,

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

    // Source of the deposit
    #[account(
        mut,
        token::authority = owner,
        constraint = user_token_account.mint == vault.mint @ StakingError::InvalidStakeMint,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Stake<'info> {
    pub fn stake(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, StakingError::InvalidAmount);
        self.staking_ledger.assert_is_owner(&self.owner.key())?;

        // Insufficient balance is reported before any CPI runs. Otherwise the
        // token program aborts with its own code and the caller never sees
        // TransferFailed.
        require!(
            self.user_token_account.amount >= amount,
            StakingError::TransferFailed
        );

        deposit_to_vault(
            amount,
            &self.token_program.to_account_info(),
            &self.user_token_account.to_account_info(),
            &self.vault.to_account_info(),
            &self.owner.to_account_info(),
        )?;

        // Record only after the transfer succeeded; every deposit restarts the
        // maturity window
        let now = Clock::get()?.unix_timestamp;
        self.staking_ledger.record_deposit(amount, now)?;

        msg!(
            "Staked {} for {}, balance {}",
            amount,
            self.owner.key(),
            self.staking_ledger.staked_amount
        );

        emit!(Staked {
            owner: self.owner.key(),
            amount,
            staked_amount: self.staking_ledger.staked_amount,
        });

        Ok(())
    }
}
