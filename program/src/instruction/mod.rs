use pinocchio::program_error::ProgramError;
use shank::ShankInstruction;

pub mod initialize_organizer;
pub use initialize_organizer::*;

/// sha256("global:initialize_organizer")[..8], the discriminator Anchor clients send.
pub const INITIALIZE_ORGANIZER_SIGHASH: [u8; 8] = [223, 252, 246, 108, 132, 141, 11, 217];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InitializeOrganizerArgs {
    /// Bump the caller derived off-chain; must be the canonical one when present.
    pub bump: Option<u8>,
}

#[derive(ShankInstruction, Clone, Copy, Debug, PartialEq, Eq)]
pub enum UniteInstruction {
    /// Creates the organizer record for the signing authority.
    #[account(0, writable, name = "organizer", desc = "Organizer PDA seeded with organizer and the authority")]
    #[account(1, writable, signer, name = "authority", desc = "Owner of the record, pays rent")]
    #[account(2, name = "system_program", desc = "System program")]
    InitializeOrganizer(InitializeOrganizerArgs),
}

impl UniteInstruction {
    pub const INITIALIZE_ORGANIZER: u8 = 0;

    /// Accepts either the native `[0]` / `[0, bump]` encoding or the bare Anchor
    /// sighash.
    pub fn unpack(data: &[u8]) -> Result<Self, ProgramError> {
        if let Some(rest) = data.strip_prefix(&INITIALIZE_ORGANIZER_SIGHASH[..]) {
            if !rest.is_empty() {
                return Err(ProgramError::InvalidInstructionData);
            }
            return Ok(UniteInstruction::InitializeOrganizer(InitializeOrganizerArgs::default()));
        }

        let (disc, payload) = data
            .split_first()
            .ok_or(ProgramError::InvalidInstructionData)?;

        match *disc {
            Self::INITIALIZE_ORGANIZER => {
                let bump = match payload {
                    [] => None,
                    [bump] => Some(*bump),
                    _ => return Err(ProgramError::InvalidInstructionData),
                };
                Ok(UniteInstruction::InitializeOrganizer(InitializeOrganizerArgs { bump }))
            }
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}
