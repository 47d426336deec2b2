use std::fmt;

use sha1::{Digest, Sha1};

/// The length of the hash prefix sent to the range API (5 hex characters).
pub const PREFIX_LEN: usize = 5;

/// The length of the withheld hash suffix (35 hex characters).
pub const SUFFIX_LEN: usize = 35;

/// The length of a full SHA1 digest rendered as hex.
pub const DIGEST_HEX_LEN: usize = PREFIX_LEN + SUFFIX_LEN;

/// Hex lookup table for uppercase digest rendering.
pub const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// The disclosed part of a digest: the first 5 uppercase hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix([u8; PREFIX_LEN]);

/// The withheld part of a digest: the last 35 uppercase hex characters.
///
/// Suffixes coming back from the range API are validated with
/// [`Suffix::from_hex`], so both sides of a comparison share the same alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Suffix([u8; SUFFIX_LEN]);

impl Prefix {
    pub fn as_bytes(&self) -> &[u8; PREFIX_LEN] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // SAFETY: only ever built from HEX_CHARS, which is ASCII
        unsafe { std::str::from_utf8_unchecked(&self.0) }
    }
}

impl Suffix {
    /// Builds a suffix from exactly 35 uppercase hex characters.
    ///
    /// Returns `None` for any other length or for characters outside `0-9A-F`.
    /// Lowercase is rejected rather than folded.
    pub fn from_hex(hex: &[u8]) -> Option<Self> {
        let bytes: [u8; SUFFIX_LEN] = hex.try_into().ok()?;
        bytes.iter().all(|b| matches!(b, b'0'..=b'9' | b'A'..=b'F')).then_some(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; SUFFIX_LEN] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // SAFETY: from_hex and split only admit ASCII hex digits
        unsafe { std::str::from_utf8_unchecked(&self.0) }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computes the SHA1 digest of the password's UTF-8 bytes as 40 uppercase hex characters.
#[inline]
pub fn digest_hex(password: &str) -> [u8; DIGEST_HEX_LEN] {
    let mut hasher = Sha1::new();
    hasher.update(password.as_bytes());
    let hash: [u8; 20] = hasher.finalize().into();

    let mut hex = [0u8; DIGEST_HEX_LEN];
    for (i, byte) in hash.iter().enumerate() {
        hex[i * 2] = HEX_CHARS[(byte >> 4) as usize];
        hex[i * 2 + 1] = HEX_CHARS[(byte & 0x0f) as usize];
    }
    hex
}

/// Splits the password's digest into the prefix that is sent to the range API
/// and the suffix that is matched locally.
///
/// Every string is accepted, including the empty one.
pub fn split(password: &str) -> (Prefix, Suffix) {
    let hex = digest_hex(password);

    let mut prefix = [0u8; PREFIX_LEN];
    let mut suffix = [0u8; SUFFIX_LEN];
    prefix.copy_from_slice(&hex[..PREFIX_LEN]);
    suffix.copy_from_slice(&hex[PREFIX_LEN..]);

    (Prefix(prefix), Suffix(suffix))
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn test_sha1_raw_bytes() {
        // password -> SHA1: 5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8
        let hash: [u8; 20] = Sha1::digest(b"password").into();
        assert_eq!(hash, hex!("5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8"));
    }

    #[test]
    fn test_digest_hex() {
        assert_eq!(&digest_hex("password"), b"5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8");
        assert_eq!(&digest_hex("password123"), b"CBFDAC6008F9CAB4083784CBD1874F76618D2A97");
    }

    #[test]
    fn test_split_known_password() {
        let (prefix, suffix) = split("password");
        assert_eq!(prefix.as_str(), "5BAA6");
        assert_eq!(suffix.as_str(), "1E4C9B93F3F0682250B6CF8331B7EE68FD8");
    }

    #[test]
    fn test_split_empty_password() {
        // SHA1 of the empty string: DA39A3EE5E6B4B0D3255BFEF95601890AFD80709
        let (prefix, suffix) = split("");
        assert_eq!(prefix.as_str(), "DA39A");
        assert_eq!(suffix.as_str(), "3EE5E6B4B0D3255BFEF95601890AFD80709");
    }

    #[test]
    fn test_split_concatenates_to_digest() {
        // SHA1 over the UTF-8 bytes, computed outside this crate
        let known = [
            ("a", "86F7E437FAA5A7FCE15D1DDCB9EAEAEA377667B8"),
            ("hunter2", "F3BBBD66A63D4BF1747940578EC3D0103530E21D"),
            ("correct horse battery staple", "ABF7AAD6438836DBE526AA231ABDE2D0EEF74D42"),
            ("pässwörd", "F517DDF1D32A112FF1AD55C66D1B12CB38E7E8F7"),
            ("🔑🔑", "67A1C46EDBEE58B5B7CC8A0C745264CD6B6FDE77"),
        ];

        for (password, digest) in known {
            let (prefix, suffix) = split(password);
            let joined = format!("{prefix}{suffix}");

            assert_eq!(joined, digest, "digest of {password:?}");
            let raw: [u8; 20] = Sha1::digest(password.as_bytes()).into();
            let rendered: String = raw.iter().map(|b| format!("{b:02X}")).collect();
            assert_eq!(joined, rendered);
            assert_eq!(prefix.as_bytes().len(), PREFIX_LEN);
            assert_eq!(suffix.as_bytes().len(), SUFFIX_LEN);
            assert!(joined.bytes().all(|b| HEX_CHARS.contains(&b)));
        }
    }

    #[test]
    fn test_split_is_deterministic() {
        assert_eq!(split("hunter2"), split("hunter2"));
        assert_ne!(split("hunter2"), split("hunter3"));
    }

    #[test]
    fn test_suffix_from_hex() {
        let suffix = Suffix::from_hex(b"1E4C9B93F3F0682250B6CF8331B7EE68FD8").unwrap();
        assert_eq!(suffix, split("password").1);

        // lowercase, wrong length, non-hex
        assert!(Suffix::from_hex(b"1e4c9b93f3f0682250b6cf8331b7ee68fd8").is_none());
        assert!(Suffix::from_hex(b"1E4C9B93F3F0682250B6CF8331B7EE68FD").is_none());
        assert!(Suffix::from_hex(b"1E4C9B93F3F0682250B6CF8331B7EE68FD88").is_none());
        assert!(Suffix::from_hex(b"1E4C9B93F3F0682250B6CF8331B7EE68FDG").is_none());
        assert!(Suffix::from_hex(b"").is_none());
    }
}
