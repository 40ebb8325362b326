use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CryptoError;
use crate::hash::{Hasher, Sha2_256, Sha2_384, Sha3_256, Sha3_384};

/// Signature scheme identifiers, numbered as in account key encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SigningAlgorithm {
    #[serde(rename = "BLS_BLS12_381")]
    BlsBls12381,
    #[serde(rename = "ECDSA_P256")]
    EcdsaP256,
    #[serde(rename = "ECDSA_secp256k1")]
    EcdsaSecp256k1,
}

impl SigningAlgorithm {
    /// Every identifier, in code order.
    pub const ALL: [SigningAlgorithm; 3] = [
        SigningAlgorithm::BlsBls12381,
        SigningAlgorithm::EcdsaP256,
        SigningAlgorithm::EcdsaSecp256k1,
    ];

    pub fn code(self) -> u32 {
        match self {
            SigningAlgorithm::BlsBls12381 => 1,
            SigningAlgorithm::EcdsaP256 => 2,
            SigningAlgorithm::EcdsaSecp256k1 => 3,
        }
    }
}

impl fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigningAlgorithm::BlsBls12381 => write!(f, "BLS_BLS12_381"),
            SigningAlgorithm::EcdsaP256 => write!(f, "ECDSA_P256"),
            SigningAlgorithm::EcdsaSecp256k1 => write!(f, "ECDSA_secp256k1"),
        }
    }
}

impl FromStr for SigningAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BLS_BLS12_381" => Ok(SigningAlgorithm::BlsBls12381),
            "ECDSA_P256" | "P256" | "P-256" => Ok(SigningAlgorithm::EcdsaP256),
            "ECDSA_SECP256K1" | "SECP256K1" => Ok(SigningAlgorithm::EcdsaSecp256k1),
            _ => Err(CryptoError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl TryFrom<u32> for SigningAlgorithm {
    type Error = CryptoError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        SigningAlgorithm::ALL
            .into_iter()
            .find(|algo| algo.code() == code)
            .ok_or_else(|| CryptoError::UnsupportedAlgorithm(code.to_string()))
    }
}

/// Hash function identifiers, numbered as in account key encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    #[serde(rename = "SHA2_256")]
    Sha2_256,
    #[serde(rename = "SHA2_384")]
    Sha2_384,
    #[serde(rename = "SHA3_256")]
    Sha3_256,
    #[serde(rename = "SHA3_384")]
    Sha3_384,
}

impl HashAlgorithm {
    pub fn code(self) -> u32 {
        match self {
            HashAlgorithm::Sha2_256 => 1,
            HashAlgorithm::Sha2_384 => 2,
            HashAlgorithm::Sha3_256 => 3,
            HashAlgorithm::Sha3_384 => 4,
        }
    }

    pub fn hasher(self) -> Box<dyn Hasher> {
        match self {
            HashAlgorithm::Sha2_256 => Box::new(Sha2_256),
            HashAlgorithm::Sha2_384 => Box::new(Sha2_384),
            HashAlgorithm::Sha3_256 => Box::new(Sha3_256),
            HashAlgorithm::Sha3_384 => Box::new(Sha3_384),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlgorithm::Sha2_256 => write!(f, "SHA2_256"),
            HashAlgorithm::Sha2_384 => write!(f, "SHA2_384"),
            HashAlgorithm::Sha3_256 => write!(f, "SHA3_256"),
            HashAlgorithm::Sha3_384 => write!(f, "SHA3_384"),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SHA2_256" | "SHA256" => Ok(HashAlgorithm::Sha2_256),
            "SHA2_384" | "SHA384" => Ok(HashAlgorithm::Sha2_384),
            "SHA3_256" => Ok(HashAlgorithm::Sha3_256),
            "SHA3_384" => Ok(HashAlgorithm::Sha3_384),
            _ => Err(CryptoError::UnsupportedHashAlgorithm(s.to_string())),
        }
    }
}

impl TryFrom<u32> for HashAlgorithm {
    type Error = CryptoError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(HashAlgorithm::Sha2_256),
            2 => Ok(HashAlgorithm::Sha2_384),
            3 => Ok(HashAlgorithm::Sha3_256),
            4 => Ok(HashAlgorithm::Sha3_384),
            other => Err(CryptoError::UnsupportedHashAlgorithm(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_variant_once() {
        for (i, algo) in SigningAlgorithm::ALL.into_iter().enumerate() {
            // A new variant fails to compile here until it is listed in ALL.
            let position = match algo {
                SigningAlgorithm::BlsBls12381 => 0,
                SigningAlgorithm::EcdsaP256 => 1,
                SigningAlgorithm::EcdsaSecp256k1 => 2,
            };
            assert_eq!(position, i);
        }
        assert_eq!(SigningAlgorithm::ALL.len(), 3);
    }

    #[test]
    fn signing_algorithm_codes_roundtrip() {
        for algo in SigningAlgorithm::ALL {
            assert_eq!(SigningAlgorithm::try_from(algo.code()).unwrap(), algo);
        }
    }

    #[test]
    fn unknown_code_is_unsupported() {
        let err = SigningAlgorithm::try_from(999).unwrap_err();
        assert!(matches!(err, CryptoError::UnsupportedAlgorithm(ref s) if s == "999"));
        assert!(SigningAlgorithm::try_from(0).is_err());
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!(
            "ecdsa_secp256k1".parse::<SigningAlgorithm>().unwrap(),
            SigningAlgorithm::EcdsaSecp256k1
        );
        assert_eq!("P256".parse::<SigningAlgorithm>().unwrap(), SigningAlgorithm::EcdsaP256);
        assert_eq!(
            SigningAlgorithm::EcdsaSecp256k1.to_string().parse::<SigningAlgorithm>().unwrap(),
            SigningAlgorithm::EcdsaSecp256k1
        );
        assert!("ed25519".parse::<SigningAlgorithm>().is_err());
    }

    #[test]
    fn unknown_hash_is_reported_as_hash() {
        let err = "sha1".parse::<HashAlgorithm>().unwrap_err();
        assert!(matches!(err, CryptoError::UnsupportedHashAlgorithm(ref s) if s == "sha1"));
        assert_eq!(err.to_string(), "the hash algorithm sha1 is not supported");
        assert!(matches!(
            HashAlgorithm::try_from(9).unwrap_err(),
            CryptoError::UnsupportedHashAlgorithm(_)
        ));
    }

    #[test]
    fn serde_uses_display_names() {
        let json = serde_json::to_string(&SigningAlgorithm::EcdsaP256).unwrap();
        assert_eq!(json, "\"ECDSA_P256\"");
        let back: HashAlgorithm = serde_json::from_str("\"SHA3_256\"").unwrap();
        assert_eq!(back, HashAlgorithm::Sha3_256);
    }

    #[test]
    fn hasher_matches_identifier() {
        for algo in [
            HashAlgorithm::Sha2_256,
            HashAlgorithm::Sha2_384,
            HashAlgorithm::Sha3_256,
            HashAlgorithm::Sha3_384,
        ] {
            assert_eq!(algo.hasher().algorithm(), algo);
            assert_eq!(HashAlgorithm::try_from(algo.code()).unwrap(), algo);
            assert_eq!(algo.to_string().parse::<HashAlgorithm>().unwrap(), algo);
        }
    }
}
