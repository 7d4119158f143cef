//! Prints three scalar literals, then walks a mixed-width string and prints
//! each scalar value with the byte offset it starts at.
//!
//! Diagnostics go to stderr and are filtered by `RUST_LOG` (default `warn`),
//! so stdout only ever carries the transcript.
//!
//! ```bash
//! cargo run -p runewalk --bin runes
//! ```

use std::io::{self, Write};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let transcript = runewalk::render_transcript();
    tracing::debug!(bytes = transcript.len(), "rendered transcript");

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(transcript.as_bytes())
        .context("failed to write transcript to stdout")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}
