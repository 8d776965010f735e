//! Build a few frames and validate simulated camera replies
//!
//! Run with `RUST_LOG=mcxcomm=trace` to see the checksum traces.

use mcxcomm::{Frame, Validator, build_get, build_set, constants::offset, dump};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("mcxcomm=info".parse()?))
        .init();

    let set = build_set(0x10, &[0x01, 0x02]);
    println!("-> {}", dump(&set));

    let get = build_get(0x05, 0x01, 0x00);
    println!("-> {}", dump(&get));

    let validator = Validator::new();

    // Camera acknowledges the set
    let mut reply = Frame::decode(&set);
    reply.code = 0xA0;
    reply.seal();
    let reply = reply.encode();
    println!("<- {}", dump(&reply));
    let frame = validator.validate(&reply).into_result()?;
    println!("✓ Accepted response 0x{:02x}", frame.code);

    // Line noise flips a payload bit
    let mut noisy = reply;
    noisy[offset::DATA + 1] ^= 0x10;
    println!("<- {}", dump(&noisy));
    let validation = validator.validate(&noisy);
    println!("✗ Rejected: {}", validation.failures());

    Ok(())
}
