use serde::{Serialize, Serializer};
use std::fmt;

/// Little-endian unsigned counter of unbounded width.
///
/// The buffer is never empty. It only grows when a carry runs out of the
/// most significant byte, so a nonce stays a few bytes long in practice.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Nonce {
    bytes: Vec<u8>,
}

impl Nonce {
    /// Minimal little-endian encoding of `offset`, at least one byte long.
    pub fn from_offset(offset: usize) -> Self {
        let mut bytes = Vec::with_capacity(std::mem::size_of::<usize>());
        let mut rest = offset;
        loop {
            bytes.push(rest as u8);
            rest >>= 8;
            if rest == 0 {
                break;
            }
        }
        Nonce { bytes }
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Option<Self> {
        if bytes.is_empty() {
            None
        } else {
            Some(Nonce { bytes })
        }
    }

    /// Adds `delta` in place, carrying into (and appending) higher bytes.
    pub fn increase(&mut self, delta: u64) {
        let mut carry = delta;
        let mut index = 0;
        while carry != 0 {
            if index == self.bytes.len() {
                self.bytes.push(0);
            }
            let sum = self.bytes[index] as u64 + (carry & 0xff);
            self.bytes[index] = sum as u8;
            carry = (carry >> 8) + (sum >> 8);
            index += 1;
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn width(&self) -> usize {
        self.bytes.len()
    }

    /// Integer value, or `None` when it does not fit in a `u128`.
    pub fn to_u128(&self) -> Option<u128> {
        let significant = self
            .bytes
            .iter()
            .rposition(|&b| b != 0)
            .map_or(0, |pos| pos + 1);
        if significant > 16 {
            return None;
        }
        Some(
            self.bytes[..significant]
                .iter()
                .rev()
                .fold(0u128, |acc, &b| (acc << 8) | b as u128),
        )
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.bytes))
    }
}

impl fmt::Debug for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nonce({})", self)
    }
}

impl Serialize for Nonce {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(&self.bytes))
    }
}
