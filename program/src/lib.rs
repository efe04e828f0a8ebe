// Only go no_std when building for SBF.
#![cfg_attr(feature = "sbf", no_std)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(feature = "no-entrypoint"))]
pub mod entrypoint;

pub mod error;
pub mod helpers;
pub mod instruction;
pub mod state;

#[cfg(feature = "std")]
pub mod ledger;

pinocchio_pubkey::declare_id!("FiAZqb938M568QeGyekNEZbb27MLLvBCoaZwHQEtKw6h");

// ---- SBF-only runtime shims (no_std builds) ----
#[cfg(feature = "sbf")]
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    // On-chain panic: spin forever (abort semantics)
    loop {}
}

#[cfg(feature = "sbf")]
pinocchio::no_allocator!();
