#[macro_use]
mod macros;
mod signer;
mod ecdsa_p256;
mod ecdsa_secp256k1;

use rand_chacha::ChaCha20Rng;
use rand_chacha::rand_core::SeedableRng;
use sha2::{Digest, Sha256};

use crate::algorithm::SigningAlgorithm;
use crate::error::{CryptoError, Result};

pub use signer::Signer;
pub use ecdsa_p256::{P256PrivateKey, P256PublicKey, P256Signer};
pub use ecdsa_secp256k1::{Secp256k1PrivateKey, Secp256k1PublicKey, Secp256k1Signer};

/// Raw scalar length shared by both 256-bit curves.
pub const ECDSA_PRIVATE_KEY_LEN: usize = 32;
/// Uncompressed point without the SEC1 tag byte: `X || Y`.
pub const ECDSA_PUBLIC_KEY_LEN: usize = 64;
/// `r || s`.
pub const ECDSA_SIGNATURE_LEN: usize = 64;
/// Scalar length plus 128 bits of margin.
pub const ECDSA_SEED_MIN_LEN: usize = ECDSA_PRIVATE_KEY_LEN + 16;
pub const ECDSA_SEED_MAX_LEN: usize = 256;
pub const ECDSA_MIN_DIGEST_LEN: usize = 32;

/// Deterministic CSPRNG for key generation.
///
/// The SHA-256 hash of the algorithm name and the seed seeds a ChaCha20
/// stream, so one seed yields unrelated keys on different curves.
pub(crate) fn seeded_rng(algorithm: SigningAlgorithm, seed: &[u8]) -> Result<ChaCha20Rng> {
    if !(ECDSA_SEED_MIN_LEN..=ECDSA_SEED_MAX_LEN).contains(&seed.len()) {
        return Err(CryptoError::InvalidEntropy {
            algorithm,
            min: ECDSA_SEED_MIN_LEN,
            max: ECDSA_SEED_MAX_LEN,
            got: seed.len(),
        });
    }
    let hash = Sha256::new()
        .chain_update(algorithm.to_string().as_bytes())
        .chain_update(seed)
        .finalize();
    Ok(ChaCha20Rng::from_seed(hash.into()))
}

pub(crate) fn check_digest(algorithm: SigningAlgorithm, digest: &[u8]) -> Result<()> {
    if digest.len() < ECDSA_MIN_DIGEST_LEN {
        return Err(CryptoError::InvalidDigest {
            algorithm,
            min: ECDSA_MIN_DIGEST_LEN,
            got: digest.len(),
        });
    }
    Ok(())
}

pub(crate) fn check_signature_len(algorithm: SigningAlgorithm, signature: &[u8]) -> Result<()> {
    if signature.len() != ECDSA_SIGNATURE_LEN {
        return Err(CryptoError::MalformedSignature {
            algorithm,
            reason: format!(
                "expected {ECDSA_SIGNATURE_LEN} bytes, got {}",
                signature.len()
            ),
        });
    }
    Ok(())
}

/// Prepend the SEC1 uncompressed tag to a raw `X || Y` point.
pub(crate) fn sec1_uncompressed(algorithm: SigningAlgorithm, bytes: &[u8]) -> Result<Vec<u8>> {
    if bytes.len() != ECDSA_PUBLIC_KEY_LEN {
        return Err(CryptoError::MalformedKey {
            algorithm,
            reason: format!(
                "public key must be {ECDSA_PUBLIC_KEY_LEN} bytes, got {}",
                bytes.len()
            ),
        });
    }
    let mut sec1 = Vec::with_capacity(ECDSA_PUBLIC_KEY_LEN + 1);
    sec1.push(0x04);
    sec1.extend_from_slice(bytes);
    Ok(sec1)
}

pub(crate) fn check_private_key_len(algorithm: SigningAlgorithm, bytes: &[u8]) -> Result<()> {
    if bytes.len() != ECDSA_PRIVATE_KEY_LEN {
        return Err(CryptoError::MalformedKey {
            algorithm,
            reason: format!(
                "private key must be {ECDSA_PRIVATE_KEY_LEN} bytes, got {}",
                bytes.len()
            ),
        });
    }
    Ok(())
}
