pub const GENESIS_SEED: u8 = 42; // Raw byte hashed into the genesis digest
pub const DEFAULT_WORKERS: usize = 16;
pub const CANCEL_CHECK_INTERVAL: u64 = 4_096; // Trials between cancellation checks
pub const NONCE_WARN_LEN: usize = 8; // Nonce length (bytes) that triggers a diagnostic
