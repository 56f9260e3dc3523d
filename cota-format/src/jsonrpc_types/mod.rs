mod cota;
mod entry;

pub use cota::{
    hash_type_from_byte, CotaNFTId, CotaNFTInfo, DefineCotaNFTId, DefineCotaNFTValue,
    LockScript, WithdrawalCotaNFTKeyV1, WithdrawalCotaNFTValue, WithdrawalCotaNFTValueV1,
};
pub use entry::{
    CotaEntry, Define, GetCotaEntriesPayload, GetCotaEntriesResponse, Mint, MintWithdrawal,
};

/// Lowercase hex with a `0x` prefix.
pub fn hex_string(raw: &[u8]) -> String {
    format!("0x{}", hex::encode(raw))
}

/// Decodes action text, deleting every byte sequence that is not valid UTF-8.
///
/// A literal U+FFFD in the input is deleted as well.
pub fn sanitize_action(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .chars()
        .filter(|c| *c != char::REPLACEMENT_CHARACTER)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_string() {
        assert_eq!(hex_string(&[]), "0x");
        assert_eq!(hex_string(&[0xAB, 0x01, 0xff]), "0xab01ff");
    }

    #[test]
    fn test_sanitize_action() {
        assert_eq!(sanitize_action(b"Create a new NFT"), "Create a new NFT");
        assert_eq!(sanitize_action(b"Mint\xff NFT"), "Mint NFT");
        assert_eq!(sanitize_action(b"\xe4\xb8"), "");
        assert_eq!(sanitize_action("铸造".as_bytes()), "铸造");
        assert_eq!(sanitize_action("a\u{FFFD}b".as_bytes()), "ab");
    }
}
