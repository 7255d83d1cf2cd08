// Test utilities for the staking ledger program

#![allow(dead_code)]

use std::path::PathBuf;

use anchor_lang::AccountDeserialize;
use litesvm::LiteSVM;
use litesvm_token::get_spl_account;
use solana_sdk::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use spl_associated_token_account::get_associated_token_address;
use staking_ledger::{
    errors::StakingError,
    state::{RateRegistry, StakingLedger},
};

// Program ID matching declare_id!
pub const STAKING_PROGRAM_ID: Pubkey = Pubkey::new_from_array(staking_ledger::ID.to_bytes());

// Standard program IDs
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;
use solana_system_interface::program::ID as system_program;

// PDA Seeds (must match constants.rs)
pub const LEDGER_SEED: &[u8] = b"staking";
pub const REGISTRY_SEED: &[u8] = b"registry";

// 7 days, must match MATURITY_WINDOW_SECONDS
pub const MATURITY_WINDOW_SECONDS: u64 = 7 * 24 * 60 * 60;

pub const DECIMALS: u8 = 0;

// ======================== HELPERS ========================

/// Build Anchor instruction discriminator (first 8 bytes of sha256("global:method_name"))
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash = hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash.to_bytes()[..8]);
    discriminator
}

// Location of the program built by `anchor build`, overridable with SBF_OUT_DIR
pub fn program_path() -> PathBuf {
    std::env::var("SBF_OUT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/deploy"))
        .join("staking_ledger.so")
}

// Setup LiteSVM with the staking program.
// A missing build is a hard failure, never a silent pass.
pub fn setup_svm() -> LiteSVM {
    let path = program_path();
    let program_bytes = std::fs::read(&path).unwrap_or_else(|e| {
        panic!(
            "Failed to read {}: {}. Run `anchor build` first",
            path.display(),
            e
        )
    });

    let mut svm = LiteSVM::new();
    svm.add_program(STAKING_PROGRAM_ID, &program_bytes);
    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

// Sign, send and roll the blockhash so an identical follow-up transaction is not
// rejected as already processed
pub fn send_ix(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
) -> Result<(), String> {
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        &[payer],
        svm.latest_blockhash(),
    );
    let result = svm.send_transaction(tx).map(|_| ()).map_err(|e| format!("{:?}", e));
    svm.expire_blockhash();
    result
}

// Assert a transaction failed with the given program error
pub fn assert_staking_error(result: Result<(), String>, expected: StakingError) {
    let name = format!("{:?}", expected);
    let code: u32 = expected.into();
    let err = result.expect_err(&format!("Expected {} but transaction succeeded", name));
    assert!(
        err.contains(&format!("Custom({})", code)),
        "Expected {} ({}), got: {}",
        name,
        code,
        err
    );
}

// Derive registry PDA
pub fn derive_registry_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REGISTRY_SEED], &STAKING_PROGRAM_ID)
}

// Derive ledger PDA
pub fn derive_ledger_pda(owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[LEDGER_SEED, owner.as_ref()], &STAKING_PROGRAM_ID)
}

// Vault is the ledger PDA's associated token account
pub fn derive_vault(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    let (ledger, _) = derive_ledger_pda(owner);
    get_associated_token_address(&ledger, mint)
}

pub fn fetch_ledger(svm: &LiteSVM, owner: &Pubkey) -> StakingLedger {
    let (ledger, _) = derive_ledger_pda(owner);
    let account = svm.get_account(&ledger).expect("Ledger should exist");
    StakingLedger::try_deserialize(&mut account.data.as_slice())
        .expect("Ledger should deserialize")
}

pub fn fetch_registry(svm: &LiteSVM) -> RateRegistry {
    let (registry, _) = derive_registry_pda();
    let account = svm.get_account(&registry).expect("Registry should exist");
    RateRegistry::try_deserialize(&mut account.data.as_slice())
        .expect("Registry should deserialize")
}

pub fn token_balance(svm: &LiteSVM, token_account: &Pubkey) -> u64 {
    let account: spl_token::state::Account =
        get_spl_account(svm, token_account).expect("Token account should exist");
    account.amount
}

// Build open_registry instruction
pub fn build_open_registry_ix(authority: &Pubkey, stake_mint: &Pubkey) -> Instruction {
    let (registry, _) = derive_registry_pda();

    Instruction {
        program_id: STAKING_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(*stake_mint, false),
            AccountMeta::new(registry, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: anchor_discriminator("open_registry").to_vec(),
    }
}

// Build open_ledger instruction
pub fn build_open_ledger_ix(owner: &Pubkey, stake_mint: &Pubkey) -> Instruction {
    let (registry, _) = derive_registry_pda();
    let (ledger, _) = derive_ledger_pda(owner);
    let vault = derive_vault(owner, stake_mint);

    Instruction {
        program_id: STAKING_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*owner, true),
            AccountMeta::new_readonly(registry, false),
            AccountMeta::new_readonly(*stake_mint, false),
            AccountMeta::new(ledger, false),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: anchor_discriminator("open_ledger").to_vec(),
    }
}

// Build stake instruction. `ledger_owner` selects the ledger, `signer` signs.
pub fn build_stake_ix(
    signer: &Pubkey,
    ledger_owner: &Pubkey,
    stake_mint: &Pubkey,
    amount: u64,
) -> Instruction {
    let (ledger, _) = derive_ledger_pda(ledger_owner);
    let vault = derive_vault(ledger_owner, stake_mint);
    let user_token_account = get_associated_token_address(signer, stake_mint);

    let mut data = anchor_discriminator("stake").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: STAKING_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*signer, true),
            AccountMeta::new(ledger, false),
            AccountMeta::new(vault, false),
            AccountMeta::new(user_token_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data,
    }
}

// Build unstake instruction. `ledger_owner` selects the ledger, `signer` signs.
pub fn build_unstake_ix(
    signer: &Pubkey,
    ledger_owner: &Pubkey,
    stake_mint: &Pubkey,
    amount: u64,
) -> Instruction {
    let (registry, _) = derive_registry_pda();
    let (ledger, _) = derive_ledger_pda(ledger_owner);
    let vault = derive_vault(ledger_owner, stake_mint);
    let user_token_account = get_associated_token_address(signer, stake_mint);

    let mut data = anchor_discriminator("unstake").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: STAKING_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*signer, true),
            AccountMeta::new_readonly(registry, false),
            AccountMeta::new(ledger, false),
            AccountMeta::new(vault, false),
            AccountMeta::new(user_token_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data,
    }
}

// Build distribute_rewards instruction
pub fn build_distribute_rewards_ix(signer: &Pubkey, ledger_owner: &Pubkey) -> Instruction {
    let (registry, _) = derive_registry_pda();
    let (ledger, _) = derive_ledger_pda(ledger_owner);

    Instruction {
        program_id: STAKING_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*signer, true),
            AccountMeta::new_readonly(registry, false),
            AccountMeta::new(ledger, false),
        ],
        data: anchor_discriminator("distribute_rewards").to_vec(),
    }
}

fn build_set_rate_ix(method: &str, authority: &Pubkey, new_rate: u64) -> Instruction {
    let (registry, _) = derive_registry_pda();

    let mut data = anchor_discriminator(method).to_vec();
    data.extend_from_slice(&new_rate.to_le_bytes());

    Instruction {
        program_id: STAKING_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(registry, false),
        ],
        data,
    }
}

// Build set_reward_rate instruction
pub fn build_set_reward_rate_ix(authority: &Pubkey, new_rate: u64) -> Instruction {
    build_set_rate_ix("set_reward_rate", authority, new_rate)
}

// Build set_penalty_rate instruction
pub fn build_set_penalty_rate_ix(authority: &Pubkey, new_rate: u64) -> Instruction {
    build_set_rate_ix("set_penalty_rate", authority, new_rate)
}

// Advance the SVM clock by the specified number of seconds
pub fn advance_time(svm: &mut LiteSVM, seconds: u64) {
    let mut clock: solana_sdk::clock::Clock = svm.get_sysvar();
    clock.unix_timestamp += seconds as i64;
    svm.set_sysvar(&clock);

    let current_slot = clock.slot;
    svm.warp_to_slot(current_slot + (seconds * 2) + 5);
}
