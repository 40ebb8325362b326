ecdsa_signer! {
    /// ECDSA over secp256k1.
    curve: k256,
    algorithm: EcdsaSecp256k1,
    signer: Secp256k1Signer,
    private_key: Secp256k1PrivateKey,
    public_key: Secp256k1PublicKey,
}
