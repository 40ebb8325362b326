//! Algorithm-tagged key objects.
//!
//! Each variant owns the key material for exactly one [`SigningAlgorithm`].
//! Once built, a key signs, verifies, encodes and compares itself without
//! going back through the registry.

use std::fmt;

use crate::algorithm::SigningAlgorithm;
use crate::error::Result;
use crate::hash::Hasher;
use crate::signature::Signature;
use crate::signing::{
    ECDSA_PRIVATE_KEY_LEN, ECDSA_PUBLIC_KEY_LEN, P256PrivateKey, P256PublicKey,
    Secp256k1PrivateKey, Secp256k1PublicKey,
};

#[derive(Clone)]
pub enum PrivateKey {
    EcdsaP256(P256PrivateKey),
    EcdsaSecp256k1(Secp256k1PrivateKey),
}

impl PrivateKey {
    pub fn algorithm(&self) -> SigningAlgorithm {
        match self {
            PrivateKey::EcdsaP256(_) => SigningAlgorithm::EcdsaP256,
            PrivateKey::EcdsaSecp256k1(_) => SigningAlgorithm::EcdsaSecp256k1,
        }
    }

    /// Length of the canonical encoding in bytes.
    pub fn size(&self) -> usize {
        match self {
            PrivateKey::EcdsaP256(_) | PrivateKey::EcdsaSecp256k1(_) => ECDSA_PRIVATE_KEY_LEN,
        }
    }

    /// Hash `message` with `hasher` and sign the digest.
    ///
    /// ECDSA nonces come from RFC 6979, but callers should only rely on the
    /// result verifying, not on it being byte-stable.
    pub fn sign(&self, message: &[u8], hasher: &dyn Hasher) -> Result<Signature> {
        match self {
            PrivateKey::EcdsaP256(key) => key.sign(message, hasher),
            PrivateKey::EcdsaSecp256k1(key) => key.sign(message, hasher),
        }
    }

    pub fn public_key(&self) -> PublicKey {
        match self {
            PrivateKey::EcdsaP256(key) => PublicKey::EcdsaP256(key.public_key()),
            PrivateKey::EcdsaSecp256k1(key) => PublicKey::EcdsaSecp256k1(key.public_key()),
        }
    }

    /// Canonical encoding: the big-endian secret scalar.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            PrivateKey::EcdsaP256(key) => key.encode(),
            PrivateKey::EcdsaSecp256k1(key) => key.encode(),
        }
    }

    /// Equal iff the algorithms match and the canonical encodings are byte-equal.
    pub fn equals(&self, other: &PrivateKey) -> bool {
        self.algorithm() == other.algorithm() && self.encode() == other.encode()
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for PrivateKey {}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.encode()))
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("algorithm", &self.algorithm())
            .field("public_key", &self.public_key())
            .finish_non_exhaustive()
    }
}

#[derive(Clone)]
pub enum PublicKey {
    EcdsaP256(P256PublicKey),
    EcdsaSecp256k1(Secp256k1PublicKey),
}

impl PublicKey {
    pub fn algorithm(&self) -> SigningAlgorithm {
        match self {
            PublicKey::EcdsaP256(_) => SigningAlgorithm::EcdsaP256,
            PublicKey::EcdsaSecp256k1(_) => SigningAlgorithm::EcdsaSecp256k1,
        }
    }

    pub fn size(&self) -> usize {
        match self {
            PublicKey::EcdsaP256(_) | PublicKey::EcdsaSecp256k1(_) => ECDSA_PUBLIC_KEY_LEN,
        }
    }

    /// Check `signature` over `message` with the hasher used at signing time.
    ///
    /// `Ok(false)` means the signature was evaluated and rejected. `Err` means
    /// it could not be evaluated at all (wrong length, unusable digest).
    pub fn verify(&self, signature: &Signature, message: &[u8], hasher: &dyn Hasher) -> Result<bool> {
        match self {
            PublicKey::EcdsaP256(key) => key.verify(signature, message, hasher),
            PublicKey::EcdsaSecp256k1(key) => key.verify(signature, message, hasher),
        }
    }

    /// Canonical encoding: raw uncompressed `X || Y`.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            PublicKey::EcdsaP256(key) => key.encode(),
            PublicKey::EcdsaSecp256k1(key) => key.encode(),
        }
    }

    pub fn encode_compressed(&self) -> Vec<u8> {
        match self {
            PublicKey::EcdsaP256(key) => key.encode_compressed(),
            PublicKey::EcdsaSecp256k1(key) => key.encode_compressed(),
        }
    }

    pub fn equals(&self, other: &PublicKey) -> bool {
        self.algorithm() == other.algorithm() && self.encode() == other.encode()
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for PublicKey {}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.encode()))
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({}, {})", self.algorithm(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::generate_private_key;

    fn seed(byte: u8) -> [u8; 48] {
        [byte; 48]
    }

    #[test]
    fn keys_report_their_algorithm() {
        let p256 = generate_private_key(SigningAlgorithm::EcdsaP256, &seed(1)).unwrap();
        let k256 = generate_private_key(SigningAlgorithm::EcdsaSecp256k1, &seed(1)).unwrap();
        assert_eq!(p256.algorithm(), SigningAlgorithm::EcdsaP256);
        assert_eq!(p256.public_key().algorithm(), SigningAlgorithm::EcdsaP256);
        assert_eq!(k256.algorithm(), SigningAlgorithm::EcdsaSecp256k1);
        assert_eq!(k256.public_key().algorithm(), SigningAlgorithm::EcdsaSecp256k1);
    }

    #[test]
    fn sizes_match_encodings() {
        let key = generate_private_key(SigningAlgorithm::EcdsaSecp256k1, &seed(2)).unwrap();
        assert_eq!(key.size(), key.encode().len());
        assert_eq!(key.public_key().size(), key.public_key().encode().len());
    }

    #[test]
    fn same_bytes_different_algorithm_are_unequal() {
        let p256 = generate_private_key(SigningAlgorithm::EcdsaP256, &seed(3)).unwrap();
        let reinterpreted = crate::registry::decode_private_key(
            SigningAlgorithm::EcdsaSecp256k1,
            &p256.encode(),
        )
        .unwrap();
        assert_eq!(p256.encode(), reinterpreted.encode());
        assert_ne!(p256, reinterpreted);
    }

    #[test]
    fn display_is_prefixed_hex_of_encoding() {
        let key = generate_private_key(SigningAlgorithm::EcdsaP256, &seed(4)).unwrap();
        let public = key.public_key();
        assert_eq!(public.to_string(), format!("0x{}", hex::encode(public.encode())));
        assert_eq!(public.to_string().len(), 2 + 128);
    }

    #[test]
    fn debug_redacts_private_scalar() {
        let key = generate_private_key(SigningAlgorithm::EcdsaP256, &seed(5)).unwrap();
        let rendered = format!("{key:?}");
        assert!(rendered.contains("ECDSA_P256"));
        assert!(!rendered.contains(&hex::encode(key.encode())));
    }

    #[test]
    fn keys_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PrivateKey>();
        assert_send_sync::<PublicKey>();
    }
}
