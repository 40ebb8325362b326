/// Generates the signer and key types for one short-Weierstrass curve crate
/// from the RustCrypto family (`p256`, `k256`, ...).
///
/// The variant named by `algorithm` must exist on `SigningAlgorithm`,
/// `PrivateKey` and `PublicKey`.
macro_rules! ecdsa_signer {
    (
        $(#[$meta:meta])*
        curve: $curve:ident,
        algorithm: $algorithm:ident,
        signer: $signer:ident,
        private_key: $private_key:ident,
        public_key: $public_key:ident $(,)?
    ) => {
        const ALGORITHM: $crate::algorithm::SigningAlgorithm =
            $crate::algorithm::SigningAlgorithm::$algorithm;

        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $signer;

        impl $crate::signing::Signer for $signer {
            fn algorithm(&self) -> $crate::algorithm::SigningAlgorithm {
                ALGORITHM
            }

            fn generate_private_key(
                &self,
                seed: &[u8],
            ) -> $crate::error::Result<$crate::keys::PrivateKey> {
                let mut rng = $crate::signing::seeded_rng(ALGORITHM, seed)?;
                let signing_key = $curve::ecdsa::SigningKey::random(&mut rng);
                Ok($crate::keys::PrivateKey::$algorithm($private_key { signing_key }))
            }

            fn decode_private_key(
                &self,
                bytes: &[u8],
            ) -> $crate::error::Result<$crate::keys::PrivateKey> {
                $crate::signing::check_private_key_len(ALGORITHM, bytes)?;
                let signing_key = $curve::ecdsa::SigningKey::from_slice(bytes).map_err(|e| {
                    $crate::error::CryptoError::MalformedKey {
                        algorithm: ALGORITHM,
                        reason: format!("invalid scalar: {e}"),
                    }
                })?;
                Ok($crate::keys::PrivateKey::$algorithm($private_key { signing_key }))
            }

            fn decode_public_key(
                &self,
                bytes: &[u8],
            ) -> $crate::error::Result<$crate::keys::PublicKey> {
                let sec1 = $crate::signing::sec1_uncompressed(ALGORITHM, bytes)?;
                let verifying_key =
                    $curve::ecdsa::VerifyingKey::from_sec1_bytes(&sec1).map_err(|e| {
                        $crate::error::CryptoError::MalformedKey {
                            algorithm: ALGORITHM,
                            reason: format!("invalid curve point: {e}"),
                        }
                    })?;
                Ok($crate::keys::PublicKey::$algorithm($public_key { verifying_key }))
            }
        }

        /// Secret scalar. The inner key zeroizes itself on drop.
        #[derive(Clone)]
        pub struct $private_key {
            signing_key: $curve::ecdsa::SigningKey,
        }

        impl $private_key {
            pub fn sign(
                &self,
                message: &[u8],
                hasher: &dyn $crate::hash::Hasher,
            ) -> $crate::error::Result<$crate::signature::Signature> {
                use $curve::ecdsa::signature::hazmat::PrehashSigner;

                let digest = hasher.compute_hash(message);
                $crate::signing::check_digest(ALGORITHM, &digest)?;
                let signature: $curve::ecdsa::Signature = self
                    .signing_key
                    .sign_prehash(&digest)
                    .map_err(|e| $crate::error::CryptoError::CryptoFailure {
                        algorithm: ALGORITHM,
                        reason: format!("sign_prehash failed: {e}"),
                    })?;
                Ok($crate::signature::Signature::new(signature.to_bytes().to_vec()))
            }

            pub fn public_key(&self) -> $public_key {
                $public_key {
                    verifying_key: $curve::ecdsa::VerifyingKey::from(&self.signing_key),
                }
            }

            pub fn encode(&self) -> Vec<u8> {
                self.signing_key.to_bytes().to_vec()
            }
        }

        impl ::std::fmt::Debug for $private_key {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($private_key))
                    .field("public_key", &self.public_key())
                    .finish_non_exhaustive()
            }
        }

        #[derive(Clone)]
        pub struct $public_key {
            verifying_key: $curve::ecdsa::VerifyingKey,
        }

        impl $public_key {
            pub fn verify(
                &self,
                signature: &$crate::signature::Signature,
                message: &[u8],
                hasher: &dyn $crate::hash::Hasher,
            ) -> $crate::error::Result<bool> {
                use $curve::ecdsa::signature::hazmat::PrehashVerifier;

                $crate::signing::check_signature_len(ALGORITHM, signature.bytes())?;
                let digest = hasher.compute_hash(message);
                $crate::signing::check_digest(ALGORITHM, &digest)?;
                // Right length but r or s out of range: well-formed, just not valid.
                let Ok(signature) = $curve::ecdsa::Signature::from_slice(signature.bytes()) else {
                    return Ok(false);
                };
                Ok(self.verifying_key.verify_prehash(&digest, &signature).is_ok())
            }

            /// Raw `X || Y`.
            pub fn encode(&self) -> Vec<u8> {
                self.verifying_key.to_encoded_point(false).as_bytes()[1..].to_vec()
            }

            /// SEC1 compressed point (33 bytes).
            pub fn encode_compressed(&self) -> Vec<u8> {
                self.verifying_key.to_encoded_point(true).as_bytes().to_vec()
            }
        }

        impl ::std::fmt::Debug for $public_key {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}(0x{})", stringify!($public_key), hex::encode(self.encode()))
            }
        }
    };
}
