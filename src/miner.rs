//! Parallel proof of work search.
//!
//! Worker `i` of `n` tests the nonces `i, i + n, i + 2n, ...`, so the workers
//! never overlap and together cover every nonce. The first worker to report a
//! valid block wins; the others are cancelled and their work is discarded.

use crate::block::{build_message_bytes, Block};
use crate::consensus::{Consensus, EXPECTED_TRIALS};
use crate::constants::{CANCEL_CHECK_INTERVAL, NONCE_WARN_LEN};
use crate::error::{ChainError, Result};
use crate::hash::{hash, Digest};
use crate::nonce::Nonce;
use crate::{miner_debug, miner_info, miner_warn};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::task;
use tokio_util::sync::CancellationToken;

#[derive(Clone, Debug)]
pub struct Miner {
    workers: usize,
}

/// A valid block along with the worker that found it.
#[derive(Debug)]
struct Solution {
    worker_id: usize,
    trials: u64,
    block: Block,
}

impl Miner {
    pub fn new(workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(ChainError::InvalidConfig {
                message: "miner needs at least one worker".to_string(),
            });
        }
        Ok(Miner { workers })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Searches for a nonce that makes `message` a valid successor of
    /// `previous`. Resolves once the first worker succeeds.
    ///
    /// There is no timeout: the search only ends when a valid block is found.
    pub async fn mine(&self, message: &str, previous: &Digest) -> Result<Block> {
        miner_info!(
            "Mining {:?} on top of {} with {} workers (~{} trials expected)",
            message,
            previous,
            self.workers,
            EXPECTED_TRIALS
        );
        let start_time = Instant::now();

        let cancellation = CancellationToken::new();
        // Stops the workers if this future is dropped before a winner shows up
        let _guard = cancellation.clone().drop_guard();
        let (solution_tx, mut solution_rx) = mpsc::unbounded_channel();

        let message: Arc<str> = Arc::from(message);
        let stride = self.workers as u64;
        let mut handles = Vec::with_capacity(self.workers);
        for worker_id in 0..self.workers {
            let message = Arc::clone(&message);
            let previous = *previous;
            let cancellation = cancellation.clone();
            let solution_tx = solution_tx.clone();

            handles.push(task::spawn_blocking(move || {
                brute_nonce(
                    worker_id,
                    stride,
                    &message,
                    &previous,
                    &cancellation,
                    &solution_tx,
                )
            }));
        }

        // The channel closes once every worker has returned
        drop(solution_tx);

        let solution = solution_rx.recv().await;
        cancellation.cancel();

        let mut failure = None;
        for handle in handles {
            if let Err(err) = handle.await {
                miner_warn!("Mining worker ended abnormally: {}", err);
                failure.get_or_insert(err);
            }
        }

        match (solution, failure) {
            (Some(solution), _) => {
                miner_info!(
                    "Mining complete! Worker {} found nonce {} after {} trials (Elapsed: {:?})",
                    solution.worker_id,
                    solution.block.nonce,
                    solution.trials,
                    start_time.elapsed()
                );
                Ok(solution.block)
            }
            (None, Some(err)) => Err(err.into()),
            (None, None) => Err(ChainError::Worker {
                message: "all workers stopped without a solution".to_string(),
            }),
        }
    }
}

// Runs on a blocking thread until a valid block is found or the search is cancelled
fn brute_nonce(
    worker_id: usize,
    stride: u64,
    message: &str,
    previous: &Digest,
    cancellation: &CancellationToken,
    solution_tx: &UnboundedSender<Solution>,
) {
    let mut nonce = Nonce::from_offset(worker_id);
    let mut trials: u64 = 0;
    let mut warned = false;

    loop {
        let candidate = build_message_bytes(previous, message, &nonce);
        let digest = hash(&candidate);
        trials += 1;

        if Consensus::is_valid_hash(&digest) {
            let block = Block::new(message.to_string(), digest, nonce);
            // Receiver is gone when another worker already won
            let _ = solution_tx.send(Solution {
                worker_id,
                trials,
                block,
            });
            return;
        }

        nonce.increase(stride);

        if !warned && nonce.width() > NONCE_WARN_LEN {
            miner_warn!(
                "Worker {} nonce grew past {} bytes after {} trials",
                worker_id,
                NONCE_WARN_LEN,
                trials
            );
            warned = true;
        }

        if trials % CANCEL_CHECK_INTERVAL == 0 && cancellation.is_cancelled() {
            miner_debug!("Worker {} cancelled after {} trials", worker_id, trials);
            return;
        }
    }
}
