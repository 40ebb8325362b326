//! Pluggable signature schemes for Flow account keys.
//!
//! Keys are obtained only through [`generate_private_key`],
//! [`decode_private_key`] and [`decode_public_key`], which resolve a
//! [`SigningAlgorithm`] to its signer. The resulting [`PrivateKey`] and
//! [`PublicKey`] values are self-contained from then on.
//!
//! ```
//! use flow_crypto::{generate_private_key, Sha3_256, SigningAlgorithm};
//!
//! let key = generate_private_key(SigningAlgorithm::EcdsaP256, &[7u8; 48]).unwrap();
//! let signature = key.sign(b"payload", &Sha3_256).unwrap();
//! assert!(key.public_key().verify(&signature, b"payload", &Sha3_256).unwrap());
//! ```

pub mod algorithm;
pub mod error;
pub mod hash;
pub mod keys;
pub mod registry;
pub mod signature;
pub mod signing;

pub use algorithm::{HashAlgorithm, SigningAlgorithm};
pub use error::{CryptoError, Operation, Result};
pub use hash::{Hasher, Sha2_256, Sha2_384, Sha3_256, Sha3_384};
pub use keys::{PrivateKey, PublicKey};
pub use registry::{decode_private_key, decode_public_key, generate_private_key, resolve, supported_algorithms};
pub use signature::Signature;
pub use signing::Signer;
