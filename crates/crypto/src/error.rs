use std::fmt;

use crate::algorithm::SigningAlgorithm;

pub type Result<T> = std::result::Result<T, CryptoError>;

/// Top-level operation a dispatch error is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GenerateKey,
    DecodePrivateKey,
    DecodePublicKey,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::GenerateKey => write!(f, "key generation"),
            Operation::DecodePrivateKey => write!(f, "decode private key"),
            Operation::DecodePublicKey => write!(f, "decode public key"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    #[error("the signature scheme {0} is not supported")]
    UnsupportedAlgorithm(String),
    #[error("the hash algorithm {0} is not supported")]
    UnsupportedHashAlgorithm(String),
    #[error("{algorithm}: seed length {got} is outside the allowed range [{min}, {max}]")]
    InvalidEntropy {
        algorithm: SigningAlgorithm,
        min: usize,
        max: usize,
        got: usize,
    },
    #[error("{algorithm}: malformed key: {reason}")]
    MalformedKey {
        algorithm: SigningAlgorithm,
        reason: String,
    },
    #[error("{algorithm}: malformed signature: {reason}")]
    MalformedSignature {
        algorithm: SigningAlgorithm,
        reason: String,
    },
    #[error("{algorithm}: digest must be at least {min} bytes, hasher produced {got}")]
    InvalidDigest {
        algorithm: SigningAlgorithm,
        min: usize,
        got: usize,
    },
    #[error("{algorithm}: {reason}")]
    CryptoFailure {
        algorithm: SigningAlgorithm,
        reason: String,
    },
    /// The cause is reachable through `source()` and is not repeated here.
    #[error("{operation} failed")]
    Context {
        operation: Operation,
        #[source]
        source: Box<CryptoError>,
    },
}

impl CryptoError {
    pub(crate) fn context(self, operation: Operation) -> Self {
        CryptoError::Context {
            operation,
            source: Box::new(self),
        }
    }

    /// The underlying error with every `Context` layer stripped.
    pub fn root(&self) -> &CryptoError {
        match self {
            CryptoError::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// The operation this error was raised under, if it came through dispatch.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            CryptoError::Context { operation, .. } => Some(*operation),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_prefixes_operation() {
        let error = CryptoError::UnsupportedAlgorithm("999".into()).context(Operation::GenerateKey);
        assert_eq!(error.to_string(), "key generation failed");
        assert_eq!(
            format!("{:#}", anyhow::Error::from(error)),
            "key generation failed: the signature scheme 999 is not supported"
        );
    }

    #[test]
    fn cause_is_rendered_once_in_error_chain() {
        let error = CryptoError::InvalidEntropy {
            algorithm: SigningAlgorithm::EcdsaP256,
            min: 48,
            max: 256,
            got: 2,
        }
        .context(Operation::GenerateKey);
        let rendered = format!("{:#}", anyhow::Error::from(error));
        assert_eq!(rendered.matches("seed length 2").count(), 1, "{rendered}");
        assert!(rendered.starts_with("key generation failed: ECDSA_P256:"));
    }

    #[test]
    fn source_exposes_wrapped_error() {
        use std::error::Error;

        let error = CryptoError::UnsupportedAlgorithm("x".into()).context(Operation::DecodePublicKey);
        let source = error.source().map(|e| e.to_string());
        assert_eq!(source.as_deref(), Some("the signature scheme x is not supported"));
    }

    #[test]
    fn hash_errors_name_hash_algorithm() {
        let error = CryptoError::UnsupportedHashAlgorithm("sha1".into());
        assert_eq!(error.to_string(), "the hash algorithm sha1 is not supported");
    }

    #[test]
    fn root_strips_context() {
        let error = CryptoError::MalformedKey {
            algorithm: SigningAlgorithm::EcdsaP256,
            reason: "bad".into(),
        }
        .context(Operation::DecodePrivateKey);
        assert!(matches!(error.root(), CryptoError::MalformedKey { .. }));
        assert_eq!(error.operation(), Some(Operation::DecodePrivateKey));
    }

    #[test]
    fn root_of_plain_error_is_itself() {
        let error = CryptoError::UnsupportedAlgorithm("x".into());
        assert!(matches!(error.root(), CryptoError::UnsupportedAlgorithm(_)));
        assert_eq!(error.operation(), None);
    }

    #[test]
    fn decode_public_key_prefix() {
        let error = CryptoError::UnsupportedAlgorithm("BLS_BLS12_381".into())
            .context(Operation::DecodePublicKey);
        assert_eq!(error.to_string(), "decode public key failed");
    }
}
