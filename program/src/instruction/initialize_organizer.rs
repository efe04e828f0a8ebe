use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    msg,
    program_error::ProgramError,
    pubkey,
    sysvars::{rent::Rent, Sysvar},
    ProgramResult,
};
use pinocchio_log::log;
use pinocchio_system::instructions::{Allocate, Assign, CreateAccount, Transfer};

use crate::error::{to_program_error, UniteError};
use crate::helpers::*;
use crate::instruction::InitializeOrganizerArgs;
use crate::state::OrganizerAccount;

pub fn process_initialize_organizer(
    accounts: &[AccountInfo],
    args: InitializeOrganizerArgs,
) -> ProgramResult {
    // [organizer (w), authority (w, s), system_program]
    let [organizer_info, authority_info, system_program_info, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !authority_info.is_signer() {
        return Err(to_program_error(UniteError::UnauthorizedSigner));
    }
    if system_program_info.key() != &pinocchio_system::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    let bump = verify_organizer_address(
        authority_info.key(),
        organizer_info.key(),
        args.bump,
        &crate::ID,
    )
    .map_err(to_program_error)?;

    // Anything the program already owns, or any allocated data, is taken.
    if organizer_info.is_owned_by(&crate::ID) || !organizer_info.data_is_empty() {
        return Err(to_program_error(UniteError::AlreadyInitialized));
    }

    let rent = Rent::get()?;
    let top_up = required_top_up(rent.minimum_balance(OrganizerAccount::LEN), organizer_info.lamports());
    if !payer_covers(authority_info.lamports(), top_up, rent.minimum_balance(0)) {
        return Err(to_program_error(UniteError::InsufficientFunds));
    }

    let bump_seed = [bump];
    let seeds = [
        Seed::from(ORGANIZER_SEED),
        Seed::from(authority_info.key()),
        Seed::from(&bump_seed),
    ];
    allocate_organizer(organizer_info, authority_info, top_up, &seeds)?;

    let record = OrganizerAccount::new(*authority_info.key(), bump);
    {
        let mut data = organizer_info.try_borrow_mut_data()?;
        record.serialize(&mut data)?;
    }

    msg!("Organizer initialized");
    pubkey::log(authority_info.key());
    log!("bump: {}, rent paid: {}", bump, top_up);

    Ok(())
}

// CreateAccount refuses an address that already holds lamports, so a pre-funded
// PDA is topped up, allocated and assigned instead.
fn allocate_organizer(
    organizer_info: &AccountInfo,
    authority_info: &AccountInfo,
    top_up: u64,
    seeds: &[Seed],
) -> ProgramResult {
    let space = OrganizerAccount::LEN as u64;

    if organizer_info.lamports() == 0 {
        return CreateAccount {
            from: authority_info,
            to: organizer_info,
            lamports: top_up,
            space,
            owner: &crate::ID,
        }
        .invoke_signed(&[Signer::from(seeds)]);
    }

    if top_up > 0 {
        Transfer {
            from: authority_info,
            to: organizer_info,
            lamports: top_up,
        }
        .invoke()?;
    }

    Allocate {
        account: organizer_info,
        space,
    }
    .invoke_signed(&[Signer::from(seeds)])?;

    Assign {
        account: organizer_info,
        owner: &crate::ID,
    }
    .invoke_signed(&[Signer::from(seeds)])
}
