// Open Ledger Instruction
//
// Creates the caller's staking ledger and the vault that holds their deposit.
// One ledger per owner, enforced by the ["staking", owner] seeds.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::*, events::*, state::*};

#[derive(Accounts)]
pub struct OpenLedger<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Box<Account<'info, RateRegistry>>,

    #[account(address = registry.stake_mint @ StakingError::InvalidStakeMint)]
    pub stake_mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + StakingLedger::INIT_SPACE,
        seeds = [LEDGER_SEED, owner.key().as_ref()],
        bump,
    )]
    pub staking_ledger: Box<Account<'info, StakingLedger>>,

    // Vault authority is the ledger PDA, so only this program can move funds out
    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = stake_mint,
        associated_token::authority = staking_ledger,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> OpenLedger<'info> {
    pub fn open_ledger(&mut self, bumps: &OpenLedgerBumps) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        self.staking_ledger.open(
            self.owner.key(),
            self.vault.key(),
            bumps.staking_ledger,
            now,
        )?;

        msg!("Ledger opened for {} with vault {}", self.owner.key(), self.vault.key());

        emit!(LedgerOpened {
            owner: self.owner.key(),
            vault: self.vault.key(),
        });

        Ok(())
    }
}
