use core::fmt;

use pinocchio::program_error::ProgramError;

/// Failures of the organizer lifecycle. Each variant has its own custom code so
/// clients can tell them apart after a transaction fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UniteError {
    /// The organizer account (or supplied bump) is not the canonical derivation
    /// for the signing authority.
    AddressMismatch = 0x1,
    /// A record already occupies the derived address.
    AlreadyInitialized = 0x2,
    /// The payer cannot cover the rent-exempt minimum of the record.
    InsufficientFunds = 0x3,
    /// The authority did not sign.
    UnauthorizedSigner = 0x4,
    /// No record lives at the address.
    NotFound = 0x5,
    /// Bytes exist at the address but are not an organizer record.
    DecodeError = 0x6,
    /// No bump in 0..=255 produced an off-curve address.
    DerivationExhausted = 0x7,
}

impl UniteError {
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0x1 => Some(UniteError::AddressMismatch),
            0x2 => Some(UniteError::AlreadyInitialized),
            0x3 => Some(UniteError::InsufficientFunds),
            0x4 => Some(UniteError::UnauthorizedSigner),
            0x5 => Some(UniteError::NotFound),
            0x6 => Some(UniteError::DecodeError),
            0x7 => Some(UniteError::DerivationExhausted),
            _ => None,
        }
    }
}

// map internal errors to a program error carrying the custom code
pub fn to_program_error(err: UniteError) -> ProgramError {
    ProgramError::Custom(err.code())
}

impl From<UniteError> for ProgramError {
    fn from(err: UniteError) -> Self {
        to_program_error(err)
    }
}

impl fmt::Display for UniteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            UniteError::AddressMismatch => "organizer address does not match the authority derivation",
            UniteError::AlreadyInitialized => "organizer already initialized",
            UniteError::InsufficientFunds => "insufficient funds for organizer rent",
            UniteError::UnauthorizedSigner => "authority did not sign",
            UniteError::NotFound => "organizer not found",
            UniteError::DecodeError => "account data is not an organizer record",
            UniteError::DerivationExhausted => "no valid bump for organizer address",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UniteError {}
