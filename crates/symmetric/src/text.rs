//! Conversions between text and byte buffers

/// UTF-8 bytes of `text`
pub fn bytes_of(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Text view of `bytes`
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than rejected, so
/// arbitrary ciphertext can be shown.
pub fn text_of(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
