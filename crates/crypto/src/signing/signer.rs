use crate::algorithm::SigningAlgorithm;
use crate::error::Result;
use crate::keys::{PrivateKey, PublicKey};

/// Per-algorithm key factory.
///
/// Implementations are stateless unit structs; the registry hands out
/// `&'static dyn Signer` references, so the trait must stay object-safe.
pub trait Signer: Send + Sync {
    /// The one algorithm every key produced by this signer is bound to.
    fn algorithm(&self) -> SigningAlgorithm;

    /// Derive a private key from seed entropy. Same seed, same key pair.
    fn generate_private_key(&self, seed: &[u8]) -> Result<PrivateKey>;

    /// Load a private key from its canonical encoding.
    fn decode_private_key(&self, bytes: &[u8]) -> Result<PrivateKey>;

    /// Load a public key from its canonical encoding.
    fn decode_public_key(&self, bytes: &[u8]) -> Result<PublicKey>;
}
