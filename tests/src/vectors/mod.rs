//! FIPS-197 and SP 800-38A known-answer vectors
//!
//! Block vectors are checked against the bare block primitive. Mode vectors
//! are unpadded, so they are checked against the chaining loops directly and
//! against the padded engines by comparing the ciphertext prefix.


pub use error::{Result, VectorError};
pub use model::{BlockVector, ModeVector, VectorFile};

use ucrypt_algorithms::block::{Aes, BlockCipher, Cbc, Ecb};
use ucrypt_api::{CipherMode, SymmetricCipher};
use ucrypt_symmetric::CipherFactory;

const AES_KAT: &str = include_str!("../../vectors/aes_kat.json");

/// Parses the bundled vector file
pub fn load() -> Result<VectorFile> {
    Ok(serde_json::from_str(AES_KAT)?)
}

fn expect_eq(name: &str, expected: &[u8], actual: &[u8]) -> Result<()> {
    if expected != actual {
        return Err(VectorError::Mismatch {
            name: name.to_string(),
            expected: hex::encode(expected),
            actual: hex::encode(actual),
        });
    }
    Ok(())
}

/// Encrypts and decrypts one block with the primitive
pub fn check_block(vector: &BlockVector) -> Result<()> {
    let key = hex::decode(&vector.key)?;
    let plaintext = hex::decode(&vector.plaintext)?;
    let ciphertext = hex::decode(&vector.ciphertext)?;

    let cipher = Aes::new(&key)?;
    let mut block = [0u8; 16];
    block.copy_from_slice(&plaintext);

    cipher.encrypt_block(&mut block);
    expect_eq(&vector.name, &ciphertext, &block)?;
    cipher.decrypt_block(&mut block);
    expect_eq(&vector.name, &plaintext, &block)
}

/// Checks a mode vector against the chaining loop and the padded engine
pub fn check_mode(vector: &ModeVector) -> Result<()> {
    let mode: CipherMode = vector.mode.parse()?;
    let key = hex::decode(&vector.key)?;
    let iv = vector.iv.as_deref().map(hex::decode).transpose()?;
    let plaintext = hex::decode(&vector.plaintext)?;
    let ciphertext = hex::decode(&vector.ciphertext)?;

    let cipher = Aes::new(&key)?;
    let (raw_ct, raw_pt) = match mode {
        CipherMode::Cbc => {
            let iv = iv.as_deref().unwrap_or_default();
            (
                Cbc::new(&cipher, iv)?.encrypt(&plaintext)?,
                Cbc::new(&cipher, iv)?.decrypt(&ciphertext)?,
            )
        }
        _ => (
            Ecb::new(&cipher).encrypt(&plaintext)?,
            Ecb::new(&cipher).decrypt(&ciphertext)?,
        ),
    };
    expect_eq(&vector.name, &ciphertext, &raw_ct)?;
    expect_eq(&vector.name, &plaintext, &raw_pt)?;

    let engine = CipherFactory::create_aes(mode)?;
    let padded = engine.encrypt(&plaintext, &key, iv.as_deref(), None)?;
    expect_eq(&vector.name, &ciphertext, &padded[..ciphertext.len()])?;
    let recovered = engine.decrypt(&padded, &key, iv.as_deref(), None)?;
    expect_eq(&vector.name, &plaintext, &recovered)
}

/// Runs every bundled vector, returning how many passed
pub fn check_all() -> Result<usize> {
    let file = load()?;
    for vector in &file.block {
        check_block(vector)?;
    }
    for vector in &file.modes {
        check_mode(vector)?;
    }
    Ok(file.block.len() + file.modes.len())
}
