//! Command-line interface for the `aes-core` AES-128 engine.

#![forbid(unsafe_code)]

mod logger;
mod vectors;

use aes_core::sbox::{INV_SBOX, SBOX};
use aes_core::{block_from_slice, expand_key, Aes128, Aes128Key, Block};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, metadata::LevelFilter};

/// AES-128 CLI.
#[derive(Parser)]
#[command(name = "aes128", version, about = "From-scratch AES-128 block cipher")]
struct Cli {
    /// Default log level when RUST_LOG is unset.
    #[arg(long, global = true, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in known-answer tests.
    SelfTest,
    /// Encrypt a single 16-byte block.
    Encrypt {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt a single 16-byte block.
    Decrypt {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Print the 11 round keys derived from a key.
    ExpandKey {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
    },
    /// Print the S-box as a 16x16 grid.
    Sbox {
        /// Print the inverse S-box instead.
        #[arg(long, default_value_t = false)]
        inverse: bool,
    },
    /// Encrypt and decrypt a random block under a random key.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.log_level);
    match cli.command {
        Commands::SelfTest => cmd_self_test(),
        Commands::Encrypt { key_hex, block_hex } => cmd_encrypt(&key_hex, &block_hex),
        Commands::Decrypt { key_hex, block_hex } => cmd_decrypt(&key_hex, &block_hex),
        Commands::ExpandKey { key_hex } => cmd_expand_key(&key_hex),
        Commands::Sbox { inverse } => cmd_sbox(inverse),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_self_test() -> Result<()> {
    vectors::run_all()?;
    println!("all known-answer tests passed");
    Ok(())
}

fn cmd_encrypt(key_hex: &str, block_hex: &str) -> Result<()> {
    let cipher = Aes128::new(&parse_key_hex(key_hex)?);
    let block = parse_block_hex(block_hex)?;
    println!("{}", hex::encode(cipher.encrypt_block(&block)));
    Ok(())
}

fn cmd_decrypt(key_hex: &str, block_hex: &str) -> Result<()> {
    let cipher = Aes128::new(&parse_key_hex(key_hex)?);
    let block = parse_block_hex(block_hex)?;
    println!("{}", hex::encode(cipher.decrypt_block(&block)));
    Ok(())
}

fn cmd_expand_key(key_hex: &str) -> Result<()> {
    let round_keys = expand_key(&parse_key_hex(key_hex)?);
    for (round, round_key) in round_keys.iter().enumerate() {
        println!("round {round:02}: {}", hex::encode(round_key));
    }
    Ok(())
}

fn cmd_sbox(inverse: bool) -> Result<()> {
    let table = if inverse { &INV_SBOX } else { &SBOX };
    let header: Vec<u8> = (0..16).collect();
    println!("    {}", hex_row(&header));
    for (row, entries) in table.chunks_exact(16).enumerate() {
        println!("{:02x}: {}", row * 16, hex_row(entries));
    }
    Ok(())
}

fn hex_row(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    rng.fill_bytes(&mut block);
    debug!(seeded = seed.is_some(), "drew demo key and block");

    let cipher = Aes128::new(&Aes128Key::from(key_bytes));
    let ciphertext = cipher.encrypt_block(&block);
    let decrypted = cipher.decrypt_block(&ciphertext);

    println!("demo key: {}", hex::encode(key_bytes));
    println!("plaintext: {}", hex::encode(block));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted: {}", hex::encode(decrypted));
    if decrypted != block {
        bail!("demo roundtrip failed");
    }
    info!("demo roundtrip succeeded");
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    Aes128Key::try_from(bytes.as_slice())
        .context("AES-128 key must be 16 bytes (32 hex characters)")
}

fn parse_block_hex(hex_str: &str) -> Result<Block> {
    let bytes = hex::decode(hex_str.trim()).context("decode block hex")?;
    block_from_slice(&bytes)
        .context("block must be 16 bytes (32 hex characters)")
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => ChaCha20Rng::seed_from_u64(value),
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
