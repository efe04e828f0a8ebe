use pinocchio::pubkey::Pubkey;

use crate::error::UniteError;
use crate::helpers::pda::derive_organizer_address;

/// Lamports the payer still owes once whatever already sits at the address is
/// counted towards the rent-exempt minimum.
#[inline]
pub fn required_top_up(minimum_balance: u64, current_lamports: u64) -> u64 {
    minimum_balance.saturating_sub(current_lamports)
}

/// True when `balance` can pay `top_up` and what is left is either nothing or
/// still rent-exempt as an empty system account (`system_floor`). The runtime
/// fails any transaction that leaves a debited payer in between.
#[inline]
pub fn payer_covers(balance: u64, top_up: u64, system_floor: u64) -> bool {
    if top_up == 0 {
        return true;
    }
    match balance.checked_sub(top_up) {
        Some(0) => true,
        Some(remaining) => remaining >= system_floor,
        None => false,
    }
}

/// Checks that `target` is the canonical organizer address for `authority` and
/// returns the canonical bump. A supplied bump must be the canonical one; other
/// off-curve bumps are refused.
pub fn verify_organizer_address(
    authority: &Pubkey,
    target: &Pubkey,
    bump: Option<u8>,
    program_id: &Pubkey,
) -> Result<u8, UniteError> {
    let (expected, canonical_bump) = derive_organizer_address(authority, program_id)?;
    if bump.is_some_and(|b| b != canonical_bump) {
        return Err(UniteError::AddressMismatch);
    }
    if *target != expected {
        return Err(UniteError::AddressMismatch);
    }
    Ok(canonical_bump)
}
