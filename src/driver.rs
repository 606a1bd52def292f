use crate::blockchain::Blockchain;
use crate::chain_info;
use crate::error::Result;
use crate::render::{render, OutputFormat};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const WAIT_NOTICE: &str = "Hashing, please wait.";

/// Mines every input line into `blockchain`, printing the whole chain after
/// each block. Returns when `input` reaches EOF.
pub async fn run<R, W>(
    blockchain: &mut Blockchain,
    input: R,
    mut output: W,
    format: OutputFormat,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    while let Some(message) = lines.next_line().await? {
        output.write_all(WAIT_NOTICE.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;

        blockchain.add_message(message).await?;

        let rendered = render(blockchain, format)?;
        output.write_all(rendered.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
    }

    chain_info!("Input closed with {} blocks in the chain", blockchain.len());
    Ok(())
}
