use solana_program_test::{BanksClient, BanksClientError};
use solana_sdk::{
    instruction::{AccountMeta, Instruction, InstructionError},
    pubkey::Pubkey,
    system_program,
    transaction::TransactionError,
};

use pinocchio_unite::{
    error::UniteError,
    helpers::ORGANIZER_SEED,
    instruction::{UniteInstruction, INITIALIZE_ORGANIZER_SIGHASH},
    state::OrganizerAccount,
};

pub mod ixn {
    use super::*;

    fn metas(organizer: &Pubkey, authority: &Pubkey, authority_signs: bool) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(*organizer, false),
            AccountMeta::new(*authority, authority_signs),
            AccountMeta::new_readonly(system_program::id(), false),
        ]
    }

    /// Native encoding: tag, then the optional bump.
    pub fn initialize_organizer(organizer: &Pubkey, authority: &Pubkey, bump: Option<u8>) -> Instruction {
        let mut data = vec![UniteInstruction::INITIALIZE_ORGANIZER];
        data.extend(bump);
        Instruction {
            program_id: crate::common::program_id(),
            accounts: metas(organizer, authority, true),
            data,
        }
    }

    /// Same accounts, Anchor sighash as data (what generated TS clients send).
    pub fn initialize_organizer_anchor(organizer: &Pubkey, authority: &Pubkey) -> Instruction {
        Instruction {
            program_id: crate::common::program_id(),
            accounts: metas(organizer, authority, true),
            data: INITIALIZE_ORGANIZER_SIGHASH.to_vec(),
        }
    }

    /// Authority listed without the signer flag.
    pub fn initialize_organizer_unsigned(organizer: &Pubkey, authority: &Pubkey) -> Instruction {
        Instruction {
            program_id: crate::common::program_id(),
            accounts: metas(organizer, authority, false),
            data: vec![UniteInstruction::INITIALIZE_ORGANIZER],
        }
    }
}

// Re-export ixn::* so tests can `use crate::common::pin_adapter as ixn;`
pub use ixn::*;

pub fn organizer_pda(authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[ORGANIZER_SEED, authority.as_ref()],
        &crate::common::program_id(),
    )
}

// ---------- State helpers ----------
pub async fn get_organizer_account(
    banks_client: &mut BanksClient,
    address: &Pubkey,
) -> Result<OrganizerAccount, UniteError> {
    let account = banks_client
        .get_account(*address)
        .await
        .unwrap()
        .ok_or(UniteError::NotFound)?;
    if account.owner != crate::common::program_id() && !account.data.is_empty() {
        return Err(UniteError::DecodeError);
    }
    OrganizerAccount::from_account_data(&account.data)
}

pub async fn get_organizer_rent(banks_client: &mut BanksClient) -> u64 {
    let rent = banks_client.get_rent().await.unwrap();
    rent.minimum_balance(OrganizerAccount::LEN)
}

// ---------- Error helpers ----------
pub mod err {
    use super::*;

    pub fn custom_code(e: &BanksClientError) -> Option<u32> {
        match e.unwrap() {
            TransactionError::InstructionError(_, InstructionError::Custom(code)) => Some(code),
            _ => None,
        }
    }

    pub fn matches_unite_error(e: &BanksClientError, expected: UniteError) -> bool {
        custom_code(e).and_then(UniteError::from_code) == Some(expected)
    }
}
