use anchor_lang::prelude::*;

#[error_code]
pub enum StakingError {
    #[msg("Record has already been opened")]
    AlreadyExists,

    #[msg("Signer is not allowed to perform this action")]
    Unauthorized,

    #[msg("Amount must be non-zero and within the staked balance")]
    InvalidAmount,

    #[msg("Penalty rate must be between 0 and 100")]
    InvalidRate,

    #[msg("Nothing is staked in this ledger")]
    NothingStaked,

    #[msg("Token transfer could not move the requested amount")]
    TransferFailed,

    #[msg("Arithmetic overflow")]
    Overflow,

    #[msg("Vault does not belong to this ledger")]
    InvalidVault,

    #[msg("Token mint does not match the registry stake mint")]
    InvalidStakeMint,
}
