// Open Registry Instruction
//
// Creates the singleton rate registry. The signer becomes the only key that
// can change the reward and penalty rates.

use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::{constants::*, events::*, state::*};

#[derive(Accounts)]
pub struct OpenRegistry<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    // Token every ledger vault will hold
    pub stake_mint: Account<'info, Mint>,

    // init_if_needed so a second attempt reaches the AlreadyExists check
    #[account(
        init_if_needed,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + RateRegistry::INIT_SPACE,
        seeds = [REGISTRY_SEED],
        bump,
    )]
    pub registry: Account<'info, RateRegistry>,

    pub system_program: Program<'info, System>,
}

impl<'info> OpenRegistry<'info> {
    pub fn open_registry(&mut self, bumps: &OpenRegistryBumps) -> Result<()> {
        self.registry
            .open(self.authority.key(), self.stake_mint.key(), bumps.registry)?;

        msg!(
            "Registry opened: authority {}, stake mint {}",
            self.authority.key(),
            self.stake_mint.key()
        );

        emit!(RegistryOpened {
            authority: self.authority.key(),
            stake_mint: self.stake_mint.key(),
        });

        Ok(())
    }
}
