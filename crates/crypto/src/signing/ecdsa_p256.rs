ecdsa_signer! {
    /// ECDSA over NIST P-256.
    curve: p256,
    algorithm: EcdsaP256,
    signer: P256Signer,
    private_key: P256PrivateKey,
    public_key: P256PublicKey,
}
