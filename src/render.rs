use crate::blockchain::Blockchain;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One `{msg: "...", digest: ..., nonce: ...}` line per block, in chain order.
pub fn render_text(blockchain: &Blockchain) -> String {
    let mut out = String::new();
    for block in blockchain.blocks() {
        // Writing into a String cannot fail
        let _ = writeln!(
            out,
            "{{msg: \"{}\", digest: {}, nonce: {}}}",
            block.message, block.digest, block.nonce
        );
    }
    out
}

pub fn render_json(blockchain: &Blockchain) -> Result<String> {
    let blocks: Vec<_> = blockchain.blocks().collect();
    let mut out = serde_json::to_string_pretty(&blocks)?;
    out.push('\n');
    Ok(out)
}

pub fn render(blockchain: &Blockchain, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(blockchain)),
        OutputFormat::Json => render_json(blockchain),
    }
}
