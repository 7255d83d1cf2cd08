use anchor_lang::prelude::*;

#[event]
pub struct RegistryOpened {
    pub authority: Pubkey,
    pub stake_mint: Pubkey,
}

#[event]
pub struct LedgerOpened {
    pub owner: Pubkey,
    pub vault: Pubkey,
}

#[event]
pub struct Staked {
    pub owner: Pubkey,
    pub amount: u64,
    pub staked_amount: u64,
}

#[event]
pub struct Unstaked {
    pub owner: Pubkey,
    pub amount: u64,
    pub penalty: u64,
    pub returned: u64,
    pub staked_amount: u64,
}

#[event]
pub struct RewardsDistributed {
    pub owner: Pubkey,
    pub reward: u64,
    pub accrued_reward: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RateKind {
    Reward,
    Penalty,
}

#[event]
pub struct RateUpdated {
    pub kind: RateKind,
    pub old_rate: u64,
    pub new_rate: u64,
}
