use std::fmt;

/// Raw signature bytes. Carries no algorithm tag: the verifier must already
/// know the scheme and hasher that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Signature(Vec<u8>);

impl Signature {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for Signature {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Signature {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Hex rendering for logs. Not meant to be parsed back.
impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_prefixed_hex() {
        let sig = Signature::new(vec![0x00, 0xab, 0xff]);
        assert_eq!(sig.to_string(), "0x00abff");
    }

    #[test]
    fn empty_signature_displays_prefix_only() {
        assert_eq!(Signature::default().to_string(), "0x");
        assert!(Signature::default().is_empty());
    }

    #[test]
    fn bytes_are_preserved() {
        let sig = Signature::from(&[1u8, 2, 3][..]);
        assert_eq!(sig.bytes(), &[1, 2, 3]);
        assert_eq!(sig.len(), 3);
        assert_eq!(sig.into_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn converts_from_vec_and_exposes_slice() {
        let sig = Signature::from(vec![0xde, 0xad]);
        let slice: &[u8] = sig.as_ref();
        assert_eq!(slice, &[0xde, 0xad]);
        assert_eq!(hex::encode(&sig), "dead");
    }
}
