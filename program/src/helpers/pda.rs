use pinocchio::pubkey::Pubkey;

use crate::error::UniteError;
use crate::helpers::constant::*;

/// Walks candidate bumps from 255 down to 0 and returns the first address
/// `try_bump` accepts. Anyone recomputing an address must walk the same order
/// to land on the same canonical bump.
pub fn search_bump<F>(mut try_bump: F) -> Result<(Pubkey, u8), UniteError>
where
    F: FnMut(u8) -> Option<Pubkey>,
{
    for bump in (0..=u8::MAX).rev() {
        if let Some(address) = try_bump(bump) {
            return Ok((address, bump));
        }
    }
    Err(UniteError::DerivationExhausted)
}

/// Address for `seeds || [bump]` under `program_id`, or `None` when the hash
/// lands on the ed25519 curve (or the seeds break the runtime limits).
pub fn create_program_address(seeds: &[&[u8]], bump: u8, program_id: &Pubkey) -> Option<Pubkey> {
    if seeds.len() >= MAX_SEEDS || seeds.iter().any(|seed| seed.len() > MAX_SEED_LEN) {
        return None;
    }

    let bump_seed = [bump];
    let mut buf: [&[u8]; MAX_SEEDS] = [&[]; MAX_SEEDS];
    buf[..seeds.len()].copy_from_slice(seeds);
    buf[seeds.len()] = &bump_seed;
    let with_bump = &buf[..seeds.len() + 1];

    #[cfg(target_os = "solana")]
    {
        pinocchio::pubkey::create_program_address(with_bump, program_id).ok()
    }

    #[cfg(not(target_os = "solana"))]
    {
        use solana_program::pubkey::Pubkey as HostPubkey;

        HostPubkey::create_program_address(with_bump, &HostPubkey::new_from_array(*program_id))
            .ok()
            .map(|address| address.to_bytes())
    }
}

pub fn find_program_address(seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8), UniteError> {
    search_bump(|bump| create_program_address(seeds, bump, program_id))
}

/// Canonical organizer address and bump for `authority`.
///
/// Seeds: `[b"organizer", authority, [bump]]`.
pub fn derive_organizer_address(
    authority: &Pubkey,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), UniteError> {
    find_program_address(&[ORGANIZER_SEED, authority.as_ref()], program_id)
}

/// Recomputes one candidate without searching.
pub fn organizer_address_with_bump(
    authority: &Pubkey,
    bump: u8,
    program_id: &Pubkey,
) -> Option<Pubkey> {
    create_program_address(&[ORGANIZER_SEED, authority.as_ref()], bump, program_id)
}
