use pinocchio::{
    account_info::AccountInfo, msg, program_entrypoint, program_error::ProgramError,
    pubkey::Pubkey, ProgramResult,
};

use crate::instruction::{self, UniteInstruction};

// Entrypoint macro
program_entrypoint!(process_instruction);

#[inline(always)]
fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if *program_id != crate::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    match UniteInstruction::unpack(instruction_data)? {
        UniteInstruction::InitializeOrganizer(args) => {
            msg!("Instruction: InitializeOrganizer");
            instruction::initialize_organizer::process_initialize_organizer(accounts, args)
        }
    }
}
