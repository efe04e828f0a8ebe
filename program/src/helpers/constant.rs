/// Domain tag prefixed to every organizer derivation.
pub const ORGANIZER_SEED: &[u8] = b"organizer";

pub const MAX_SEEDS: usize = 16;
pub const MAX_SEED_LEN: usize = 32;

// Cluster rent defaults; on-chain code reads the Rent sysvar instead.
pub const ACCOUNT_STORAGE_OVERHEAD: u64 = 128;
pub const DEFAULT_LAMPORTS_PER_BYTE_YEAR: u64 = 3_480;
pub const DEFAULT_EXEMPTION_THRESHOLD_YEARS: u64 = 2;
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
