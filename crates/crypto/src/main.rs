use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand_core::{OsRng, RngCore};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use flow_crypto::{
    HashAlgorithm, Signature, SigningAlgorithm, decode_private_key, decode_public_key,
    generate_private_key,
    signing::ECDSA_SEED_MIN_LEN,
};

#[derive(Parser)]
#[clap(name = "flow-keys", about = "Generate, sign and verify with Flow account keys")]
struct Args {
    #[clap(long, env = "FLOW_SIGNING_ALGORITHM", default_value = "ECDSA_P256", global = true)]
    algorithm: SigningAlgorithm,
    #[clap(long, env = "FLOW_HASH_ALGORITHM", default_value = "SHA3_256", global = true)]
    hash: HashAlgorithm,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a key pair, from OS entropy unless a seed is given
    Generate {
        #[clap(long)]
        seed: Option<String>,
    },
    /// Derive the public key of a private key
    PublicKey {
        #[clap(long, env = "FLOW_PRIVATE_KEY")]
        private_key: String,
    },
    /// Hash a message and sign the digest
    Sign {
        #[clap(long, env = "FLOW_PRIVATE_KEY")]
        private_key: String,
        #[clap(long)]
        message: String,
    },
    /// Check a signature; exits non-zero when it does not verify
    Verify {
        #[clap(long)]
        public_key: String,
        #[clap(long)]
        signature: String,
        #[clap(long)]
        message: String,
    },
}

#[derive(Serialize)]
struct KeyPairOutput {
    algorithm: SigningAlgorithm,
    private_key: String,
    public_key: String,
}

#[derive(Serialize)]
struct PublicKeyOutput {
    algorithm: SigningAlgorithm,
    public_key: String,
    public_key_compressed: String,
}

#[derive(Serialize)]
struct SignedOutput {
    algorithm: SigningAlgorithm,
    hash_algorithm: HashAlgorithm,
    signature: String,
    public_key: String,
}

#[derive(Serialize)]
struct VerifyOutput {
    valid: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let hasher = args.hash.hasher();

    match args.command {
        Command::Generate { seed } => {
            let seed = match seed {
                Some(seed) => parse_hex(&seed).context("parsing --seed")?,
                None => {
                    let mut seed = vec![0u8; ECDSA_SEED_MIN_LEN];
                    OsRng.fill_bytes(&mut seed);
                    seed
                }
            };
            let private_key = generate_private_key(args.algorithm, &seed)?;
            print_json(&KeyPairOutput {
                algorithm: private_key.algorithm(),
                private_key: hex::encode(private_key.encode()),
                public_key: hex::encode(private_key.public_key().encode()),
            })?;
        }
        Command::PublicKey { private_key } => {
            let bytes = parse_hex(&private_key).context("parsing --private-key")?;
            let public_key = decode_private_key(args.algorithm, &bytes)?.public_key();
            print_json(&PublicKeyOutput {
                algorithm: public_key.algorithm(),
                public_key: hex::encode(public_key.encode()),
                public_key_compressed: hex::encode(public_key.encode_compressed()),
            })?;
        }
        Command::Sign { private_key, message } => {
            let bytes = parse_hex(&private_key).context("parsing --private-key")?;
            let private_key = decode_private_key(args.algorithm, &bytes)?;
            let signature = private_key
                .sign(message.as_bytes(), hasher.as_ref())
                .context("signing message")?;
            print_json(&SignedOutput {
                algorithm: private_key.algorithm(),
                hash_algorithm: hasher.algorithm(),
                signature: hex::encode(&signature),
                public_key: hex::encode(private_key.public_key().encode()),
            })?;
        }
        Command::Verify { public_key, signature, message } => {
            let bytes = parse_hex(&public_key).context("parsing --public-key")?;
            let public_key = decode_public_key(args.algorithm, &bytes)?;
            let signature = Signature::from(parse_hex(&signature).context("parsing --signature")?);
            let valid = public_key
                .verify(&signature, message.as_bytes(), hasher.as_ref())
                .context("verifying signature")?;
            print_json(&VerifyOutput { valid })?;
            if !valid {
                bail!("signature {signature} does not verify under {public_key}");
            }
        }
    }

    Ok(())
}

fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let hex_str = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(hex_str).map_err(|e| anyhow::anyhow!("invalid hex: {e}"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{json}");
    Ok(())
}
