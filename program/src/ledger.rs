//! In-memory account store that runs the organizer lifecycle off-chain.
//!
//! The store has no transactions of its own, so `initialize_organizer` takes the
//! organizer slot and the payer slot under their own mutexes (always in address
//! order) and commits the rent debit and the record write together. A failed
//! call returns before anything is written.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use std::vec::Vec;

use pinocchio::pubkey::Pubkey;
use pinocchio_log::log;
use serde::{Deserialize, Serialize};

use crate::error::UniteError;
use crate::helpers::*;
use crate::state::OrganizerAccount;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentSchedule {
    pub lamports_per_byte_year: u64,
    pub exemption_threshold_years: u64,
}

impl Default for RentSchedule {
    fn default() -> Self {
        Self {
            lamports_per_byte_year: DEFAULT_LAMPORTS_PER_BYTE_YEAR,
            exemption_threshold_years: DEFAULT_EXEMPTION_THRESHOLD_YEARS,
        }
    }
}

impl RentSchedule {
    pub fn minimum_balance(&self, data_len: usize) -> u64 {
        (ACCOUNT_STORAGE_OVERHEAD + data_len as u64)
            .saturating_mul(self.lamports_per_byte_year)
            .saturating_mul(self.exemption_threshold_years)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerAccount {
    pub lamports: u64,
    pub owner: Pubkey,
    pub data: Vec<u8>,
}

impl Default for LedgerAccount {
    fn default() -> Self {
        Self {
            lamports: 0,
            owner: pinocchio_system::ID,
            data: Vec::new(),
        }
    }
}

type Slot = Arc<Mutex<LedgerAccount>>;

pub struct Ledger {
    program_id: Pubkey,
    rent: RentSchedule,
    accounts: RwLock<HashMap<Pubkey, Slot>>,
}

#[derive(Serialize, Deserialize)]
struct Snapshot {
    program_id: Pubkey,
    rent: RentSchedule,
    accounts: Vec<(Pubkey, LedgerAccount)>,
}

// Every commit is a single assignment under the lock, so a poisoned slot still
// holds a consistent account.
fn lock(slot: &Mutex<LedgerAccount>) -> MutexGuard<'_, LedgerAccount> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Ledger {
    pub fn new(program_id: Pubkey) -> Self {
        Self::with_rent(program_id, RentSchedule::default())
    }

    pub fn with_rent(program_id: Pubkey, rent: RentSchedule) -> Self {
        Self {
            program_id,
            rent,
            accounts: RwLock::new(HashMap::new()),
        }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub fn rent(&self) -> &RentSchedule {
        &self.rent
    }

    fn existing_slot(&self, address: &Pubkey) -> Option<Slot> {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(address)
            .cloned()
    }

    fn slot(&self, address: &Pubkey) -> Slot {
        if let Some(slot) = self.existing_slot(address) {
            return slot;
        }
        self.accounts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(*address)
            .or_default()
            .clone()
    }

    /// Credits `lamports` to `address` (the airdrop of a real cluster) and
    /// returns the new balance.
    pub fn fund(&self, address: &Pubkey, lamports: u64) -> u64 {
        let slot = self.slot(address);
        let mut account = lock(&slot);
        account.lamports = account.lamports.saturating_add(lamports);
        account.lamports
    }

    pub fn balance(&self, address: &Pubkey) -> u64 {
        self.get_account(address).map_or(0, |account| account.lamports)
    }

    /// Raw account at `address`; never creates a slot.
    pub fn get_account(&self, address: &Pubkey) -> Option<LedgerAccount> {
        let slot = self.existing_slot(address)?;
        let account = lock(&slot).clone();
        Some(account)
    }

    /// Overwrites an account wholesale, the way a test validator seeds genesis
    /// accounts.
    pub fn set_account(&self, address: &Pubkey, account: LedgerAccount) {
        let slot = self.slot(address);
        *lock(&slot) = account;
    }

    /// Creates the organizer record at `target` for `authority`.
    ///
    /// `signers` are the identities that authorized the request; `authority`
    /// must be among them and pays the rent.
    pub fn initialize_organizer(
        &self,
        authority: &Pubkey,
        signers: &[Pubkey],
        target: &Pubkey,
        bump: u8,
    ) -> Result<OrganizerAccount, UniteError> {
        if !signers.contains(authority) {
            return Err(UniteError::UnauthorizedSigner);
        }
        if target == authority {
            return Err(UniteError::AddressMismatch);
        }
        let bump = verify_organizer_address(authority, target, Some(bump), &self.program_id)?;

        // Reject without touching the map so failed calls leave no empty slots.
        let current = self.get_account(target).unwrap_or_default();
        self.check_vacant_and_funded(&current, self.balance(authority))?;

        let organizer_slot = self.slot(target);
        let payer_slot = self.slot(authority);
        let (mut organizer, mut payer) = if target < authority {
            let organizer = lock(&organizer_slot);
            (organizer, lock(&payer_slot))
        } else {
            let payer = lock(&payer_slot);
            (lock(&organizer_slot), payer)
        };

        // Re-check under both locks; another caller may have won in between.
        let top_up = self.check_vacant_and_funded(&organizer, payer.lamports)?;

        let record = OrganizerAccount::new(*authority, bump);
        let lamports = organizer.lamports.saturating_add(top_up);
        payer.lamports -= top_up;
        *organizer = LedgerAccount {
            lamports,
            owner: self.program_id,
            data: record.to_bytes().to_vec(),
        };

        log!("organizer initialized, bump: {}, rent paid: {}", bump, top_up);
        Ok(record)
    }

    /// Lamports `payer_lamports` must hand over to make `organizer` a record,
    /// or why it cannot.
    fn check_vacant_and_funded(
        &self,
        organizer: &LedgerAccount,
        payer_lamports: u64,
    ) -> Result<u64, UniteError> {
        if organizer.owner == self.program_id || !organizer.data.is_empty() {
            return Err(UniteError::AlreadyInitialized);
        }
        let minimum_balance = self.rent.minimum_balance(OrganizerAccount::LEN);
        let top_up = required_top_up(minimum_balance, organizer.lamports);
        if !payer_covers(payer_lamports, top_up, self.rent.minimum_balance(0)) {
            return Err(UniteError::InsufficientFunds);
        }
        Ok(top_up)
    }

    /// Decoded organizer record at `address`.
    pub fn fetch_organizer(&self, address: &Pubkey) -> Result<OrganizerAccount, UniteError> {
        let account = self.get_account(address).ok_or(UniteError::NotFound)?;
        if account.owner != self.program_id && !account.data.is_empty() {
            return Err(UniteError::DecodeError);
        }
        OrganizerAccount::from_account_data(&account.data)
    }

    /// Serializes every account into a consistent cut. All slots are held (in
    /// address order) while the copy is taken.
    pub fn snapshot(&self) -> Result<Vec<u8>, bincode::Error> {
        let map = self.accounts.write().unwrap_or_else(PoisonError::into_inner);
        let mut keys: Vec<&Pubkey> = map.keys().collect();
        keys.sort();

        let guards: Vec<(Pubkey, MutexGuard<'_, LedgerAccount>)> =
            keys.into_iter().map(|key| (*key, lock(&map[key]))).collect();
        let snapshot = Snapshot {
            program_id: self.program_id,
            rent: self.rent,
            accounts: guards
                .iter()
                .map(|(key, account)| (*key, LedgerAccount::clone(account)))
                .collect(),
        };
        bincode::serialize(&snapshot)
    }

    pub fn restore(bytes: &[u8]) -> Result<Self, bincode::Error> {
        let snapshot: Snapshot = bincode::deserialize(bytes)?;
        let accounts: HashMap<Pubkey, Slot> = snapshot
            .accounts
            .into_iter()
            .map(|(key, account)| (key, Arc::new(Mutex::new(account))))
            .collect();
        Ok(Self {
            program_id: snapshot.program_id,
            rent: snapshot.rent,
            accounts: RwLock::new(accounts),
        })
    }
}
