// Staking Ledger Helper Functions
//
// Pure reward/penalty policy plus the token CPI wrappers that move funds
// between a participant's token account and their vault.

use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Transfer};

use crate::{constants::*, errors::*};

// POLICY HELPERS

// A withdrawal is early while fewer than MATURITY_WINDOW_SECONDS have passed
// since the last deposit
pub fn is_early_withdrawal(last_stake_timestamp: i64, now: i64) -> bool {
    now.saturating_sub(last_stake_timestamp) < MATURITY_WINDOW_SECONDS
}

// floor(amount * penalty_rate / 100)
//
// Integer division floors, so the rounding remainder always goes to the
// participant: the program never withholds more than the stated rate.
// The product is taken in u128 because amount * 100 can exceed u64::MAX
// for large balances; with penalty_rate <= 100 the quotient fits back in u64.
pub fn calculate_penalty(amount: u64, penalty_rate: u64) -> Result<u64> {
    let penalty = (amount as u128)
        .checked_mul(penalty_rate as u128)
        .ok_or(StakingError::Overflow)?
        / PENALTY_RATE_DENOMINATOR;

    u64::try_from(penalty).map_err(|_| error!(StakingError::Overflow))
}

// Flat per-call accrual: staked_amount * reward_rate
// The reward rate is unbounded, so overflow surfaces here instead of wrapping
pub fn calculate_reward(staked_amount: u64, reward_rate: u64) -> Result<u64> {
    staked_amount
        .checked_mul(reward_rate)
        .ok_or(error!(StakingError::Overflow))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WithdrawalQuote {
    pub amount: u64,
    pub penalty: u64,
    pub returned: u64,
}

// Splits a withdrawal into the quantity paid out and the penalty kept by the vault
//
// Pure function of the ledger timestamp and the clock reading taken by the
// caller, so the same quote can be checked against the vault balance before
// any tokens move. penalty <= amount whenever penalty_rate <= 100, so the
// subtraction only fails on a corrupted rate.
pub fn quote_withdrawal(
    amount: u64,
    penalty_rate: u64,
    last_stake_timestamp: i64,
    now: i64,
) -> Result<WithdrawalQuote> {
    let penalty = if is_early_withdrawal(last_stake_timestamp, now) {
        calculate_penalty(amount, penalty_rate)?
    } else {
        0
    };

    let returned = amount
        .checked_sub(penalty)
        .ok_or(StakingError::Overflow)?;

    Ok(WithdrawalQuote {
        amount,
        penalty,
        returned,
    })
}

// CPI HELPERS

// Move tokens from the participant's account into their vault
pub fn deposit_to_vault<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    vault: &AccountInfo<'info>,
    owner: &AccountInfo<'info>,
) -> Result<()> {
    transfer(
        CpiContext::new(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: vault.clone(),
                authority: owner.clone(),
            },
        ),
        amount,
    )
}

// Move tokens out of a vault; the ledger PDA signs as vault authority
pub fn release_from_vault<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    vault: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    ledger: &AccountInfo<'info>,
    ledger_seeds: &[&[u8]],
) -> Result<()> {
    let signer_seeds = &[ledger_seeds];

    transfer(
        CpiContext::new_with_signer(
            token_program.clone(),
            Transfer {
                from: vault.clone(),
                to: to.clone(),
                authority: ledger.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}
