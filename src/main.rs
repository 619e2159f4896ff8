//! Seed Material CLI
//!
//! Command-line interface for demonstrating seed-material gathering and
//! downstream consumption by a PRNG.

use clap::Parser;
use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};
use seed_material::{SeedConfig, SeedMaterial, ENTROPY_BITS_NEEDED};
use tracing::{info, warn};

/// Gather entropy, fold in the process salt, and seed a demo PRNG.
#[derive(Debug, Parser)]
#[command(name = "seed-material", version)]
struct Args {
    /// Entropy requirement in bits.
    #[arg(long, default_value_t = ENTROPY_BITS_NEEDED)]
    bits: usize,

    /// Path to a TOML configuration file (takes precedence over --bits).
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Skip folding the process-wide salt into the material.
    #[arg(long)]
    no_salt: bool,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Seed Material v{}", seed_material::VERSION);

    let mut config = match args.config {
        Some(path) => match SeedConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config: {}", e);
                std::process::exit(1);
            }
        },
        None => SeedConfig::with_entropy_bits(args.bits),
    };
    if args.no_salt {
        config.salt = false;
    }

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    let mut material = match SeedMaterial::gather(&config) {
        Ok(material) => material,
        Err(e) => {
            eprintln!("Failed to gather seed material: {}", e);
            std::process::exit(1);
        }
    };

    if config.salt && !material.is_salted() {
        warn!("Process salt unavailable, material left unsalted");
    }

    // Disambiguate runs that share correlated OS entropy.
    material.mix(&[std::process::id()]);

    println!(
        "Seed material ({} bits): {}",
        material.bit_len(),
        material
            .as_blocks()
            .iter()
            .map(|b| format!("{:08x}", b))
            .collect::<String>()
    );

    // Demonstrate downstream consumption with a ChaCha20 generator.
    if material.bit_len() == 256 {
        let mut seed = [0u8; 32];
        for (chunk, block) in seed.chunks_exact_mut(4).zip(material.as_blocks()) {
            chunk.copy_from_slice(&block.to_le_bytes());
        }

        let mut rng = ChaCha20Rng::from_seed(seed);
        let mut output = [0u8; 16];
        rng.fill_bytes(&mut output);

        println!(
            "ChaCha20 output: {}",
            output
                .iter()
                .map(|b| format!("{:02x}", b))
                .collect::<String>()
        );
    }

    info!("Done");
}
