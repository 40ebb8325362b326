use sha2::Digest;

use crate::algorithm::HashAlgorithm;

/// Reduces a message to a fixed-length digest before signing or verification.
///
/// Implementations must be stateless: the same message always hashes to
/// the same digest, so a hasher can be shared across threads.
pub trait Hasher: Send + Sync {
    fn algorithm(&self) -> HashAlgorithm;

    /// Digest length in bytes.
    fn size(&self) -> usize;

    fn compute_hash(&self, message: &[u8]) -> Vec<u8>;
}

/// SHA2-256, 32-byte digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha2_256;

impl Hasher for Sha2_256 {
    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Sha2_256
    }

    fn size(&self) -> usize {
        32
    }

    fn compute_hash(&self, message: &[u8]) -> Vec<u8> {
        sha2::Sha256::digest(message).to_vec()
    }
}

/// SHA2-384, 48-byte digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha2_384;

impl Hasher for Sha2_384 {
    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Sha2_384
    }

    fn size(&self) -> usize {
        48
    }

    fn compute_hash(&self, message: &[u8]) -> Vec<u8> {
        sha2::Sha384::digest(message).to_vec()
    }
}

/// SHA3-256, 32-byte digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha3_256;

impl Hasher for Sha3_256 {
    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Sha3_256
    }

    fn size(&self) -> usize {
        32
    }

    fn compute_hash(&self, message: &[u8]) -> Vec<u8> {
        sha3::Sha3_256::digest(message).to_vec()
    }
}

/// SHA3-384, 48-byte digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha3_384;

impl Hasher for Sha3_384 {
    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Sha3_384
    }

    fn size(&self) -> usize {
        48
    }

    fn compute_hash(&self, message: &[u8]) -> Vec<u8> {
        sha3::Sha3_384::digest(message).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_match_digest_lengths() {
        let hashers: [&dyn Hasher; 4] = [&Sha2_256, &Sha2_384, &Sha3_256, &Sha3_384];
        for hasher in hashers {
            assert_eq!(hasher.compute_hash(b"abc").len(), hasher.size());
        }
    }

    #[test]
    fn sha2_256_known_vector() {
        assert_eq!(
            hex::encode(Sha2_256.compute_hash(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn sha3_256_known_vector() {
        assert_eq!(
            hex::encode(Sha3_256.compute_hash(b"")),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
    }

    #[test]
    fn sha2_and_sha3_differ() {
        assert_ne!(Sha2_256.compute_hash(b"data"), Sha3_256.compute_hash(b"data"));
    }
}
