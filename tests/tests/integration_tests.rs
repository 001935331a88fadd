//! End-to-end behaviour of the engines obtained through the factory

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread;

use ucrypt_algorithms::block::{Aes, Cbc, Ecb};
use ucrypt_api::{Algorithm, CancelFlag, CipherMode, Error, ErrorKind, RunOptions, SymmetricCipher};
use ucrypt_symmetric::{CipherConfig, CipherFactory};
use ucrypt_tests::{init_logging, seeded_bytes, vectors};

const KEY_LENGTHS: [usize; 3] = [16, 24, 32];
const PLAINTEXT_LENGTHS: [usize; 6] = [0, 1, 15, 16, 17, 1000];
const MODES: [CipherMode; 2] = [CipherMode::Ecb, CipherMode::Cbc];

fn parallel(mode: CipherMode) -> ucrypt_symmetric::Cipher {
    let config = CipherConfig::default()
        .with_workers(4)
        .with_min_blocks_per_worker(4);
    CipherFactory::create_with(Algorithm::Aes, mode, config).unwrap()
}

fn sequential(mode: CipherMode) -> ucrypt_symmetric::Cipher {
    CipherFactory::create_with(Algorithm::Aes, mode, CipherConfig::sequential()).unwrap()
}

#[test]
fn test_known_answer_vectors() {
    init_logging();
    let checked = vectors::check_all().unwrap();
    assert_eq!(checked, 10);
}

#[test]
fn test_round_trip_matrix() {
    init_logging();
    let iv = seeded_bytes(0xC0FFEE, 16);

    for mode in MODES {
        let cipher = CipherFactory::create(Algorithm::Aes, mode).unwrap();
        for key_len in KEY_LENGTHS {
            let key = seeded_bytes(key_len as u64, key_len);
            for len in PLAINTEXT_LENGTHS {
                let plaintext = seeded_bytes(1000 + len as u64, len);
                let ciphertext = cipher.encrypt(&plaintext, &key, Some(&iv), None).unwrap();

                assert_eq!(ciphertext.len() % 16, 0);
                assert!(ciphertext.len() > plaintext.len());
                assert!(ciphertext.len() <= plaintext.len() + 16);

                let decrypted = cipher.decrypt(&ciphertext, &key, Some(&iv), None).unwrap();
                assert_eq!(decrypted, plaintext, "{} key {} len {}", mode, key_len, len);
            }
        }
    }
}

#[test]
fn test_ecb_leaks_equal_blocks_cbc_does_not() {
    let key = [0x33u8; 16];
    let iv = [0x44u8; 16];
    let plaintext = [0x55u8; 48];

    let ecb = sequential(CipherMode::Ecb)
        .encrypt(&plaintext, &key, None, None)
        .unwrap();
    assert_eq!(ecb[..16], ecb[16..32]);
    assert_eq!(ecb[16..32], ecb[32..48]);

    let cbc = sequential(CipherMode::Cbc)
        .encrypt(&plaintext, &key, Some(&iv), None)
        .unwrap();
    assert_ne!(cbc[..16], cbc[16..32]);
    assert_ne!(cbc[16..32], cbc[32..48]);
}

#[test]
fn test_cbc_bit_flip_propagation() {
    let key = seeded_bytes(5, 32);
    let iv = seeded_bytes(6, 16);
    let plaintext = seeded_bytes(7, 64);
    let cipher = sequential(CipherMode::Cbc);

    let mut ciphertext = cipher.encrypt(&plaintext, &key, Some(&iv), None).unwrap();
    // Flip one bit of the second ciphertext block
    ciphertext[16 + 3] ^= 0x01;

    let decrypted = cipher.decrypt(&ciphertext, &key, Some(&iv), None).unwrap();
    assert_eq!(decrypted[..16], plaintext[..16]);
    assert_ne!(decrypted[16..32], plaintext[16..32]);

    let mut expected = plaintext[32..48].to_vec();
    expected[3] ^= 0x01;
    assert_eq!(decrypted[32..48], expected[..]);
    assert_eq!(decrypted[48..], plaintext[48..]);
}

#[test]
fn test_invalid_inputs() {
    let cbc = CipherFactory::from_name("AES-CBC").unwrap();
    let ecb = CipherFactory::from_name("AES-ECB").unwrap();
    let key = [0u8; 16];
    let iv = [0u8; 16];

    for bad in [0usize, 8, 15, 17, 31, 33, 64] {
        let err = ecb.encrypt(b"x", &vec![0u8; bad], None, None).unwrap_err();
        assert_eq!(err, Error::InvalidKeySize { actual: bad });
    }

    let err = cbc.encrypt(b"x", &key, Some(&iv[..12]), None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidIvSize);
    let err = cbc.decrypt(&[0u8; 32], &key, None, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidIvSize);

    let err = ecb.decrypt(&[0u8; 20], &key, None, None).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidCiphertextLength { block_size: 16, actual: 20 }
    );
}

#[test]
fn test_padding_rejection() {
    let key = seeded_bytes(11, 24);
    let iv = seeded_bytes(12, 16);
    let aes = Aes::new(&key).unwrap();

    // Final plaintext bytes: 0x00, 0x11 (> 16) and an inconsistent run
    let mut zero = seeded_bytes(13, 32);
    zero[31] = 0x00;
    let mut too_long = seeded_bytes(14, 32);
    too_long[31] = 0x11;
    let mut mixed = vec![0x03u8; 32];
    mixed[29] = 0x04;

    for raw in [zero, too_long, mixed] {
        let ecb_ct = Ecb::new(&aes).encrypt(&raw).unwrap();
        let err = sequential(CipherMode::Ecb)
            .decrypt(&ecb_ct, &key, None, None)
            .unwrap_err();
        assert_eq!(err, Error::InvalidPadding);

        let cbc_ct = Cbc::new(&aes, &iv).unwrap().encrypt(&raw).unwrap();
        let err = parallel(CipherMode::Cbc)
            .decrypt(&cbc_ct, &key, Some(&iv), None)
            .unwrap_err();
        assert_eq!(err, Error::InvalidPadding);
    }
}

#[test]
fn test_unsupported_selections() {
    for mode in [CipherMode::Cfb, CipherMode::Ofb, CipherMode::Ctr, CipherMode::Gcm] {
        assert_eq!(
            CipherFactory::create(Algorithm::Aes, mode).unwrap_err(),
            Error::UnsupportedMode { mode }
        );
    }
    assert_eq!(
        CipherFactory::create(Algorithm::ChaCha20, CipherMode::Ctr).unwrap_err(),
        Error::UnsupportedAlgorithm { algorithm: Algorithm::ChaCha20 }
    );
    assert_eq!(
        CipherFactory::available_algorithms(),
        ["AES-ECB", "AES-CBC"]
    );
}

#[test]
fn test_parallel_output_identical() {
    init_logging();
    let iv = seeded_bytes(21, 16);

    for mode in MODES {
        for key_len in KEY_LENGTHS {
            let key = seeded_bytes(20 + key_len as u64, key_len);
            for len in [0usize, 63, 64 * 16, 1000 * 16 + 7] {
                let plaintext = seeded_bytes(len as u64, len);
                let expected = sequential(mode)
                    .encrypt(&plaintext, &key, Some(&iv), None)
                    .unwrap();
                let actual = parallel(mode)
                    .encrypt(&plaintext, &key, Some(&iv), None)
                    .unwrap();
                assert_eq!(expected, actual);

                let decrypted = parallel(mode)
                    .decrypt(&actual, &key, Some(&iv), None)
                    .unwrap();
                assert_eq!(decrypted, plaintext);
            }
        }
    }
}

#[test]
fn test_engines_shared_across_threads() {
    let cipher = parallel(CipherMode::Cbc);
    let key = [0x0fu8; 32];

    thread::scope(|scope| {
        for t in 0..4u8 {
            let cipher = &cipher;
            scope.spawn(move || {
                let iv = [t; 16];
                let plaintext = seeded_bytes(t as u64, 4096 + t as usize);
                let ciphertext = cipher.encrypt(&plaintext, &key, Some(&iv), None).unwrap();
                assert_eq!(
                    cipher.decrypt(&ciphertext, &key, Some(&iv), None).unwrap(),
                    plaintext
                );
            });
        }
    });
}

#[test]
fn test_cancellation() {
    let key = [1u8; 16];
    let iv = [2u8; 16];
    let plaintext = vec![0u8; 16 * 500];

    let flag = CancelFlag::new();
    flag.cancel();
    let options = RunOptions::new().with_cancel(&flag);
    for mode in MODES {
        let err = parallel(mode)
            .encrypt_with(&plaintext, &key, Some(&iv), &options)
            .unwrap_err();
        assert_eq!(err, Error::Cancelled);
    }

    // Cancel from inside the callback, midway through a sequential call
    let flag = CancelFlag::new();
    let seen = AtomicUsize::new(0);
    let callback = |percent: f64, _: &str| {
        seen.fetch_add(1, Ordering::SeqCst);
        if percent > 30.0 {
            flag.cancel();
        }
    };
    let options = RunOptions::new().with_progress(&callback).with_cancel(&flag);
    let err = sequential(CipherMode::Cbc)
        .encrypt_with(&plaintext, &key, Some(&iv), &options)
        .unwrap_err();
    assert_eq!(err, Error::Cancelled);
    assert!(seen.load(Ordering::SeqCst) < 6);

    // An untouched flag changes nothing
    let idle = CancelFlag::new();
    let options = RunOptions::new().with_cancel(&idle);
    let ct = parallel(CipherMode::Ecb)
        .encrypt_with(&plaintext, &key, None, &options)
        .unwrap();
    assert_eq!(
        ct,
        sequential(CipherMode::Ecb).encrypt(&plaintext, &key, None, None).unwrap()
    );
}

#[test]
fn test_progress_reporting() {
    let key = [9u8; 32];
    let iv = [8u8; 16];
    let plaintext = seeded_bytes(99, 16 * 1000);

    for mode in MODES {
        for (cipher, concurrent) in [(sequential(mode), false), (parallel(mode), true)] {
            let events = Mutex::new(Vec::new());
            let callback = |percent: f64, message: &str| {
                events.lock().unwrap().push((percent, message.to_string()));
            };

            let ciphertext = cipher
                .encrypt(&plaintext, &key, Some(&iv), Some(&callback))
                .unwrap();
            let silent = cipher.encrypt(&plaintext, &key, Some(&iv), None).unwrap();
            assert_eq!(ciphertext, silent);

            let decrypted = cipher
                .decrypt(&ciphertext, &key, Some(&iv), Some(&callback))
                .unwrap();
            assert_eq!(decrypted, plaintext);

            let events = events.into_inner().unwrap();
            let (encrypting, decrypting) = events.split_at(
                events
                    .iter()
                    .position(|(_, m)| m == "Encryption complete")
                    .unwrap()
                    + 1,
            );

            for phase in [encrypting, decrypting] {
                assert!(phase.windows(2).all(|w| w[0].0 <= w[1].0));
                assert!(phase.iter().all(|(p, _)| (0.0..=100.0).contains(p)));
                assert_eq!(phase.last().unwrap().0, 100.0);
            }
            assert!(encrypting[0].1.starts_with("Encrypting block "));
            assert!(encrypting[0].1.ends_with("/1001"));
            assert_eq!(decrypting.last().unwrap().1, "Decryption complete");
            // 1001 blocks at the default interval: blocks 1, 101, ..., 1001.
            // Concurrent workers may skip a report another worker overtook.
            if concurrent {
                assert!(encrypting.len() <= 12);
            } else {
                assert_eq!(encrypting.len(), 12);
                assert_eq!(decrypting.len(), 12);
            }
        }
    }
}

#[test]
fn test_panicking_callback_is_isolated() {
    let calls = AtomicUsize::new(0);
    let callback = |_: f64, _: &str| {
        calls.fetch_add(1, Ordering::SeqCst);
        panic!("progress sink failed");
    };
    let key = [4u8; 16];
    let iv = [5u8; 16];
    let plaintext = seeded_bytes(3, 16 * 300);

    for mode in MODES {
        let cipher = parallel(mode);
        let ciphertext = cipher
            .encrypt(&plaintext, &key, Some(&iv), Some(&callback))
            .unwrap();
        assert_eq!(ciphertext, cipher.encrypt(&plaintext, &key, Some(&iv), None).unwrap());
        let decrypted = cipher
            .decrypt(&ciphertext, &key, Some(&iv), Some(&callback))
            .unwrap();
        assert_eq!(decrypted, plaintext);
    }
    // One muted call per encrypt and decrypt
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}
