//! hsig0-verify: check the SIG(0) signature of a captured Handshake
//! name-server response.

mod config;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{ArgGroup, Parser};

use config::LogConfig;
use hsig0::{
    parse_public_key, Clock, FixedClock, Sig0VerificationApi, Sig0VerificationService,
    SystemClock,
};

/// Verify a SIG(0)-signed DNS response against an hsd node key
#[derive(Parser, Debug)]
#[command(name = "hsig0-verify", version)]
#[command(group(ArgGroup::new("input").required(true).args(["hex", "file"])))]
struct Args {
    /// Node identifier (base-32 public key)
    #[arg(short, long)]
    key: String,

    /// Message as hex
    #[arg(long)]
    hex: Option<String>,

    /// File holding the raw message, or its hex form
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Unix time to verify at (default: now)
    #[arg(long)]
    now: Option<u32>,

    /// Print the verification summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = LogConfig::from_env().init() {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let key = parse_public_key(&args.key).context("invalid --key")?;
    let wire = read_message(args)?;
    tracing::info!(bytes = wire.len(), key = %key, "verifying message");

    let verified = match args.now {
        Some(now) => verify_with(FixedClock(now), &wire, &key)?,
        None => verify_with(SystemClock, &wire, &key)?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&verified)?);
    } else {
        println!("OK");
    }
    Ok(())
}

fn verify_with<C: Clock>(
    clock: C,
    wire: &[u8],
    key: &hsig0::PublicKey,
) -> anyhow::Result<hsig0::VerifiedSig0> {
    let service = Sig0VerificationService::new(clock);
    service
        .verify_wire(wire, key)
        .context("signature verification failed")
}

fn read_message(args: &Args) -> anyhow::Result<Vec<u8>> {
    if let Some(text) = &args.hex {
        return hex::decode(text.trim()).context("invalid --hex");
    }
    let Some(path) = &args.file else {
        bail!("one of --hex or --file is required");
    };
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(decode_file(bytes))
}

/// Hex text when the whole file decodes as hex, raw wire bytes otherwise.
fn decode_file(bytes: Vec<u8>) -> Vec<u8> {
    let text: Vec<u8> = bytes
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    match hex::decode(&text) {
        Ok(decoded) if !text.is_empty() => decoded,
        _ => bytes,
    }
}
