//! Random key and IV generation
//!
//! Callers supply the generator so tests can seed it; with the `std` feature
//! the `random_*` helpers draw from the operating system.

use api::types::KeySize;
use params::utils::symmetric::AES_CBC_IV_SIZE;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Fresh CBC initialization vector
pub fn generate_iv<R: RngCore + CryptoRng>(rng: &mut R) -> [u8; AES_CBC_IV_SIZE] {
    let mut iv = [0u8; AES_CBC_IV_SIZE];
    rng.fill_bytes(&mut iv);
    iv
}

/// Fresh key of the given size, wiped when dropped
pub fn generate_key<R: RngCore + CryptoRng>(rng: &mut R, size: KeySize) -> Zeroizing<Vec<u8>> {
    let mut key = Zeroizing::new(vec![0u8; size.len()]);
    rng.fill_bytes(&mut key);
    key
}

/// [`generate_iv`] backed by the operating system RNG
#[cfg(feature = "std")]
pub fn random_iv() -> [u8; AES_CBC_IV_SIZE] {
    generate_iv(&mut rand::rngs::OsRng)
}

/// [`generate_key`] backed by the operating system RNG
#[cfg(feature = "std")]
pub fn random_key(size: KeySize) -> Zeroizing<Vec<u8>> {
    generate_key(&mut rand::rngs::OsRng, size)
}
