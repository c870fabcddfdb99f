//! # `PractRand` Stream Generator
//!
//! Stream generator for `PractRand` testing.
//!
//! This binary generates a continuous stream of binary data by hashing an
//! incrementing 64-bit counter with QRH-256, or tagging it with HMAC-QRH-256
//! when a key is given.
//!
//! ```text
//! qrh_stream --size 64 | RNG_test stdin64
//! qrh_stream --cyclic --key 000102 | RNG_test stdin64
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, ErrorKind, Write};

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "qrh_stream")]
#[command(about = "Write QRH-256 digests of a counter to stdout", long_about = None)]
#[command(version)]
struct Cli {
    /// Input size in bytes; the counter is repeated to fill it
    #[arg(short, long, default_value_t = 64)]
    size: usize,

    /// Cycle through 16, 32, 64 and 128 byte inputs (overrides --size)
    #[arg(long)]
    cyclic: bool,

    /// Hex-encoded HMAC key; switches the stream to HMAC tags
    #[arg(short, long, value_name = "HEX")]
    key: Option<String>,

    /// Stop after this many bytes of output (default: until stdout closes)
    #[arg(short, long, value_name = "BYTES")]
    limit: Option<u64>,
}

// =============================================================================
// STREAM
// =============================================================================

fn input_size(cli: &Cli, counter: u64) -> usize {
    if !cli.cyclic {
        return cli.size;
    }
    match counter % 4 {
        0 => 16,
        1 => 32,
        2 => 64,
        _ => 128,
    }
}

/// Fill `input` with the counter's little-endian bytes, repeated.
fn fill_counter(input: &mut [u8], counter: u64) {
    let counter_bytes = counter.to_le_bytes();
    for (i, item) in input.iter_mut().enumerate() {
        *item = counter_bytes[i % 8];
    }
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.cyclic && cli.size == 0 {
        bail!("--size must be at least 1 byte");
    }

    let key = cli
        .key
        .as_deref()
        .map(hex::decode)
        .transpose()
        .context("--key is not valid hex")?;

    let stdout = io::stdout();
    let mut handle = io::BufWriter::new(stdout.lock());
    let mut input = Vec::new();
    let mut written: u64 = 0;
    let mut counter: u64 = 0;

    loop {
        if cli.limit.is_some_and(|limit| written >= limit) {
            break;
        }

        input.resize(input_size(&cli, counter), 0);
        fill_counter(&mut input, counter);

        let digest = match &key {
            Some(key) => qrh::hmac(key, &input),
            None => qrh::hash(&input),
        };

        match handle.write_all(&digest) {
            Ok(()) => {}
            // The consumer closing the pipe is the normal way to stop.
            Err(e) if e.kind() == ErrorKind::BrokenPipe => return Ok(()),
            Err(e) => return Err(e).context("failed to write to stdout"),
        }

        written += qrh::HASH_SIZE as u64;
        counter = counter.wrapping_add(1);
    }

    handle.flush().context("failed to flush stdout")?;
    eprintln!("qrh_stream: wrote {written} bytes ({counter} digests)");
    Ok(())
}
