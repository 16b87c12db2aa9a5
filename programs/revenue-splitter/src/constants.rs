// PDA Seeds
pub const SPLITTER_CONFIG_SEED: &[u8] = b"splitter_config";
pub const POOL_VAULT_SEED: &[u8] = b"pool_vault";

// Share arithmetic
pub const BPS_DENOMINATOR: u64 = 10_000; // 100% in basis points

// Validation constants
pub const MAX_RECEIVERS: usize = 32; // receiver table capacity, account space is fixed at allocation
