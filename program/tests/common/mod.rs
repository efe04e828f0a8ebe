#![allow(dead_code)]

use solana_program_test::{ProgramTest, ProgramTestBanksClientExt};
use std::{env, path::Path};

pub use solana_program_test::{BanksClient, BanksClientError, ProgramTestContext};
pub use solana_sdk::{
    instruction::InstructionError,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_instruction,
    transaction::{Transaction, TransactionError},
};

pub fn program_id() -> Pubkey {
    Pubkey::new_from_array(pinocchio_unite::ID)
}

pub fn program_test() -> ProgramTest {
    let deploy_dir = format!("{}/../target/deploy", env!("CARGO_MANIFEST_DIR"));
    env::set_var("BPF_OUT_DIR", &deploy_dir);
    let so_path = Path::new(&deploy_dir).join("pinocchio_unite.so");
    assert!(
        so_path.exists(),
        "SBF artifact not found at {}.\nBuild first: `cargo-build-sbf --no-default-features --features sbf --manifest-path program/Cargo.toml`",
        so_path.display()
    );

    let mut pt = ProgramTest::default();
    pt.prefer_bpf(true);
    pt.add_upgradeable_program_to_genesis("pinocchio_unite", &program_id());
    pt
}

// Shared adapter for instruction building + state helpers
pub mod pin_adapter;

pub async fn refresh_blockhash(ctx: &mut ProgramTestContext) {
    ctx.last_blockhash = ctx
        .banks_client
        .get_new_latest_blockhash(&ctx.last_blockhash)
        .await
        .unwrap();
}

pub async fn transfer(ctx: &mut ProgramTestContext, recipient: &Pubkey, amount: u64) {
    let tx = Transaction::new_signed_with_payer(
        &[system_instruction::transfer(&ctx.payer.pubkey(), recipient, amount)],
        Some(&ctx.payer.pubkey()),
        &[&ctx.payer],
        ctx.last_blockhash,
    );
    ctx.banks_client.process_transaction(tx).await.unwrap();
}

/// Fresh keypair holding `lamports`, paid from the context payer.
pub async fn funded_authority(ctx: &mut ProgramTestContext, lamports: u64) -> Keypair {
    let authority = Keypair::new();
    transfer(ctx, &authority.pubkey(), lamports).await;
    authority
}
