use crate::block::Block;
use crate::chain_info;
use crate::error::Result;
use crate::hash::{hash, Digest};
use crate::miner::Miner;

/// Append-only sequence of mined blocks.
///
/// Block `0` was mined on top of the genesis digest, every later block on
/// top of its predecessor's digest.
pub struct Blockchain {
    genesis: Digest,
    chain: Vec<Block>,
    miner: Miner,
}

impl Blockchain {
    pub fn new(seed: u8, miner: Miner) -> Self {
        let genesis = hash(&[seed]);
        chain_info!("Genesis digest {} (seed {})", genesis, seed);
        Blockchain {
            genesis,
            chain: Vec::new(),
            miner,
        }
    }

    pub fn genesis(&self) -> &Digest {
        &self.genesis
    }

    /// Digest the next block gets mined on top of.
    pub fn last_digest(&self) -> &Digest {
        self.chain
            .last()
            .map_or(&self.genesis, |block| &block.digest)
    }

    /// Mines `message` into a new block and appends it.
    ///
    /// Resolves only once a worker finds a valid nonce. Taking `&mut self`
    /// keeps two mining runs from targeting the same predecessor.
    pub async fn add_message(&mut self, message: String) -> Result<&Block> {
        let previous = *self.last_digest();
        let block = self.miner.mine(&message, &previous).await?;
        debug_assert!(block.verify(&previous));

        self.chain.push(block);
        chain_info!("Block #{} appended", self.chain.len() - 1);
        Ok(&self.chain[self.chain.len() - 1])
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        self.chain.iter()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}
