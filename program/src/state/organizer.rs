use pinocchio::{program_error::ProgramError, pubkey::Pubkey};
use shank::ShankAccount;

use crate::error::UniteError;

/// Organizer record stored at `[b"organizer", authority, [bump]]`.
///
/// Layout (little-endian, fields only ever appended):
/// - `[0..8]`   discriminator
/// - `[8..40]`  authority
/// - `[40..44]` event_count
/// - `[44]`     is_verified (0 or 1)
/// - `[45..53]` collateral_amount
/// - `[53]`     bump
#[derive(ShankAccount, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct OrganizerAccount {
    pub authority: Pubkey,
    pub event_count: u32,
    pub is_verified: bool,
    pub collateral_amount: u64,
    pub bump: u8,
}

impl OrganizerAccount {
    /// sha256("account:OrganizerAccount")[..8], shared with Anchor-generated clients.
    pub const DISCRIMINATOR: [u8; 8] = [68, 201, 38, 125, 135, 112, 11, 149];

    pub const LEN: usize = 8 + 32 + 4 + 1 + 8 + 1;

    const AUTHORITY: usize = 8;
    const EVENT_COUNT: usize = 40;
    const IS_VERIFIED: usize = 44;
    const COLLATERAL: usize = 45;
    const BUMP: usize = 53;

    /// Fresh record: everything zeroed except the owner and its bump.
    pub fn new(authority: Pubkey, bump: u8) -> Self {
        Self {
            authority,
            event_count: 0,
            is_verified: false,
            collateral_amount: 0,
            bump,
        }
    }

    /// True once a record header has been written; allocated-but-zeroed data is
    /// still uninitialized.
    #[inline]
    pub fn is_initialized(data: &[u8]) -> bool {
        data.len() >= 8 && data[..8] != [0u8; 8]
    }

    pub fn to_bytes(&self) -> [u8; OrganizerAccount::LEN] {
        let mut out = [0u8; OrganizerAccount::LEN];
        out[..Self::AUTHORITY].copy_from_slice(&Self::DISCRIMINATOR);
        out[Self::AUTHORITY..Self::EVENT_COUNT].copy_from_slice(&self.authority);
        out[Self::EVENT_COUNT..Self::IS_VERIFIED].copy_from_slice(&self.event_count.to_le_bytes());
        out[Self::IS_VERIFIED] = self.is_verified as u8;
        out[Self::COLLATERAL..Self::BUMP].copy_from_slice(&self.collateral_amount.to_le_bytes());
        out[Self::BUMP] = self.bump;
        out
    }

    pub fn serialize(&self, dst: &mut [u8]) -> Result<(), ProgramError> {
        if dst.len() < Self::LEN {
            return Err(ProgramError::AccountDataTooSmall);
        }
        dst[..Self::LEN].copy_from_slice(&self.to_bytes());
        Ok(())
    }

    pub fn deserialize(src: &[u8]) -> Result<Self, UniteError> {
        if src.len() < Self::LEN || src[..Self::AUTHORITY] != Self::DISCRIMINATOR {
            return Err(UniteError::DecodeError);
        }

        let mut authority = [0u8; 32];
        authority.copy_from_slice(&src[Self::AUTHORITY..Self::EVENT_COUNT]);

        let mut event_count = [0u8; 4];
        event_count.copy_from_slice(&src[Self::EVENT_COUNT..Self::IS_VERIFIED]);

        let is_verified = match src[Self::IS_VERIFIED] {
            0 => false,
            1 => true,
            _ => return Err(UniteError::DecodeError),
        };

        let mut collateral = [0u8; 8];
        collateral.copy_from_slice(&src[Self::COLLATERAL..Self::BUMP]);

        Ok(Self {
            authority,
            event_count: u32::from_le_bytes(event_count),
            is_verified,
            collateral_amount: u64::from_le_bytes(collateral),
            bump: src[Self::BUMP],
        })
    }

    /// Decodes raw account bytes as fetched from the ledger.
    /// Empty or never-written data is `NotFound`; anything else that fails the
    /// layout is `DecodeError`.
    pub fn from_account_data(data: &[u8]) -> Result<Self, UniteError> {
        if !Self::is_initialized(data) {
            return Err(UniteError::NotFound);
        }
        Self::deserialize(data)
    }
}
