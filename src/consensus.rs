use crate::hash::Digest;

/// Probability of a uniform digest passing [`is_valid_hash`] is 2^-16.
pub const EXPECTED_TRIALS: u64 = 1 << 16;

pub struct Consensus;

impl Consensus {
    // Proof of Work condition: the last and third-to-last digest bytes are zero
    pub fn is_valid_hash(digest: &Digest) -> bool {
        let bytes = digest.as_bytes();
        let len = bytes.len();
        bytes[len - 1] == 0 && bytes[len - 3] == 0
    }
}
