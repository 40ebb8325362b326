use crate::algorithm::SigningAlgorithm;
use crate::error::{CryptoError, Operation, Result};
use crate::keys::{PrivateKey, PublicKey};
use crate::signing::{P256Signer, Secp256k1Signer, Signer};

static P256: P256Signer = P256Signer;
static SECP256K1: Secp256k1Signer = Secp256k1Signer;

/// Map an algorithm to its signer.
///
/// This is the only place identifiers are bound to implementations. A new
/// scheme gets one arm here and nothing changes for callers.
pub fn resolve(algo: SigningAlgorithm) -> Result<&'static dyn Signer> {
    match algo {
        SigningAlgorithm::EcdsaP256 => Ok(&P256),
        SigningAlgorithm::EcdsaSecp256k1 => Ok(&SECP256K1),
        SigningAlgorithm::BlsBls12381 => Err(CryptoError::UnsupportedAlgorithm(algo.to_string())),
    }
}

/// Algorithms that currently have a registered signer, in code order.
pub fn supported_algorithms() -> Vec<SigningAlgorithm> {
    SigningAlgorithm::ALL
        .into_iter()
        .filter(|algo| resolve(*algo).is_ok())
        .collect()
}

/// Generate a private key of `algo` from the entropy in `seed`.
pub fn generate_private_key(algo: SigningAlgorithm, seed: &[u8]) -> Result<PrivateKey> {
    tracing::debug!(algorithm = %algo, seed_len = seed.len(), "generating private key");
    dispatch(Operation::GenerateKey, algo, |signer| signer.generate_private_key(seed))
}

/// Decode the canonical encoding of an `algo` private key.
pub fn decode_private_key(algo: SigningAlgorithm, bytes: &[u8]) -> Result<PrivateKey> {
    tracing::debug!(algorithm = %algo, len = bytes.len(), "decoding private key");
    dispatch(Operation::DecodePrivateKey, algo, |signer| signer.decode_private_key(bytes))
}

/// Decode the canonical encoding of an `algo` public key.
pub fn decode_public_key(algo: SigningAlgorithm, bytes: &[u8]) -> Result<PublicKey> {
    tracing::debug!(algorithm = %algo, len = bytes.len(), "decoding public key");
    dispatch(Operation::DecodePublicKey, algo, |signer| signer.decode_public_key(bytes))
}

fn dispatch<T>(
    operation: Operation,
    algo: SigningAlgorithm,
    f: impl FnOnce(&dyn Signer) -> Result<T>,
) -> Result<T> {
    let signer = resolve(algo).map_err(|e| e.context(operation))?;
    f(signer).map_err(|e| e.context(operation))
}
