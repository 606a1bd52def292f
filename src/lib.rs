pub mod block;
pub mod blockchain;
pub mod config;
pub mod consensus;
pub mod constants;
pub mod driver;
pub mod error;
pub mod hash;
pub mod logger;
pub mod miner;
pub mod nonce;
pub mod render;
