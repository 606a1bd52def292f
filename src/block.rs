use crate::consensus::Consensus;
use crate::hash::{hash, Digest};
use crate::nonce::Nonce;
use serde::Serialize;

/// Fixed pad byte closing every candidate.
const TRAILER: u8 = 0;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Block {
    pub message: String,
    pub digest: Digest,
    pub nonce: Nonce,
}

impl Block {
    pub fn new(message: String, digest: Digest, nonce: Nonce) -> Self {
        Block {
            message,
            digest,
            nonce,
        }
    }

    /// Recomputes the digest from `previous` and checks it matches and passes
    /// the proof of work condition.
    pub fn verify(&self, previous: &Digest) -> bool {
        let candidate = build_message_bytes(previous, &self.message, &self.nonce);
        let digest = hash(&candidate);
        digest == self.digest && Consensus::is_valid_hash(&digest)
    }
}

/// Bytes hashed for one trial: `previous ‖ nonce ‖ message ‖ 0x00`.
pub fn build_message_bytes(previous: &Digest, message: &str, nonce: &Nonce) -> Vec<u8> {
    let mut bytes =
        Vec::with_capacity(previous.as_bytes().len() + nonce.width() + message.len() + 1);
    bytes.extend_from_slice(previous.as_bytes());
    bytes.extend_from_slice(nonce.as_bytes());
    bytes.extend_from_slice(message.as_bytes());
    bytes.push(TRAILER);
    bytes
}
