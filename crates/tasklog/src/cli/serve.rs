//! Line-delimited JSON tool server.
//!
//! Reads one request per line on stdin, writes one [`ToolResponse`] per line on stdout.
//! Blank lines are skipped. Malformed requests get an `ok: false` response; the loop
//! only stops at end of input or on an I/O error.

use anyhow::Result;
use std::io::{BufRead, Write};
use tasklogapp::api::TasklogApi;
use tasklogapp::checkpoint::Checkpoint;
use tasklogapp::clock::Clock;
use tasklogapp::store::DocumentStore;
use tasklogapp::tools::{handle_request, ToolResponse};
use tracing::debug;

pub fn serve<S, C, K, R, W>(api: &mut TasklogApi<S, C, K>, input: R, mut output: W) -> Result<()>
where
    S: DocumentStore,
    C: Checkpoint,
    K: Clock,
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response: ToolResponse = handle_request(api, &line);
        debug!(ok = response.ok, "tool request handled");
        serde_json::to_writer(&mut output, &response)?;
        output.write_all(b"\n")?;
        output.flush()?;
    }
    Ok(())
}
