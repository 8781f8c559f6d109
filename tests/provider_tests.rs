// tests/provider_tests.rs
mod common;

use std::sync::Arc;
use std::thread;

use rotating_aead::fake::{self, FakeEncryption, FAKE_KEY, FAKE_PREFIX};
use rotating_aead::{
    parse_key, Aes256GcmAdapter, EncryptOptions, Encrypter, Encryption, EncryptionError,
    KeyFormat,
};

use common::sequential_key;

fn real_encrypter() -> Encrypter {
    Encrypter::from(Aes256GcmAdapter::from_keys(sequential_key(0), vec![]))
}

#[test]
fn test_string_roundtrip_through_encrypter() {
    common::setup();
    let enc = real_encrypter();
    let opts = EncryptOptions::new();

    let envelope = enc.encrypt("hello world", &opts).unwrap();
    assert_eq!(enc.decrypt_string(&envelope, &opts).unwrap(), "hello world");
    assert_eq!(enc.decrypt(envelope.as_bytes(), &opts).unwrap(), b"hello world");
}

#[test]
fn test_bytes_roundtrip_with_aad() {
    let enc = real_encrypter();
    let opts = EncryptOptions::new().with_aad("user:7");

    let envelope = enc.encrypt([0u8, 159, 146, 150], &opts).unwrap();
    assert_eq!(enc.decrypt(&envelope, &opts).unwrap(), vec![0u8, 159, 146, 150]);
    assert_eq!(
        enc.decrypt(&envelope, &EncryptOptions::new().with_aad("user:8")),
        Err(EncryptionError::AllKeysFailed)
    );
}

#[test]
fn test_decrypt_string_rejects_invalid_utf8() {
    let enc = real_encrypter();
    let opts = EncryptOptions::new();
    let envelope = enc.encrypt([0xffu8, 0xfe, 0xfd], &opts).unwrap();
    assert_eq!(
        enc.decrypt_string(&envelope, &opts),
        Err(EncryptionError::InvalidUtf8)
    );
}

#[test]
fn test_generate_key_in_both_formats() {
    let enc = real_encrypter();
    for format in KeyFormat::ALL {
        let key = enc.generate_key(format).unwrap();
        assert!(key.starts_with(format.as_str()));
        assert_eq!(parse_key(&key).unwrap().len(), 32);
    }
}

#[test]
fn test_encrypter_is_shareable_across_threads() {
    let enc = real_encrypter();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let enc = enc.clone();
            thread::spawn(move || {
                let msg = format!("message {i}");
                let opts = EncryptOptions::new();
                let envelope = enc.encrypt(&msg, &opts).unwrap();
                assert_eq!(enc.decrypt_string(&envelope, &opts).unwrap(), msg);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

// --- fake adapter ---

#[test]
fn test_fake_roundtrip_and_recording() {
    let (enc, fake) = fake::encrypter();
    let opts = EncryptOptions::new().with_aad("ctx");

    let envelope = enc.encrypt("secret", &opts).unwrap();
    assert!(envelope.starts_with(FAKE_PREFIX));
    assert_eq!(enc.decrypt_string(&envelope, &opts).unwrap(), "secret");

    fake.assert_encrypted();
    fake.assert_encrypted_count(1);
    fake.assert_encrypted_string("secret");
    fake.assert_encrypted_data(b"secret");
    fake.assert_encrypted_with_aad(b"ctx");
    fake.assert_decrypted();
    fake.assert_decrypted_count(1);
    fake.assert_decrypted_envelope(&envelope);

    let last = fake.last_encrypt_call().unwrap();
    assert_eq!(last.plaintext, b"secret");
    assert_eq!(last.aad.as_deref(), Some(b"ctx".as_slice()));
    assert_eq!(last.result, envelope);

    let last = fake.last_decrypt_call().unwrap();
    assert_eq!(last.result, b"secret");
}

#[test]
fn test_fake_unknown_envelope_fails() {
    let (enc, fake) = fake::encrypter();
    assert_eq!(
        enc.decrypt("never-produced", &EncryptOptions::new()),
        Err(EncryptionError::AllKeysFailed)
    );
    fake.assert_nothing_decrypted();
}

#[test]
fn test_fake_decodes_envelopes_from_another_instance() {
    let (producer, _) = fake::encrypter();
    let (consumer, _) = fake::encrypter();
    let opts = EncryptOptions::new();
    let envelope = producer.encrypt("portable", &opts).unwrap();
    assert_eq!(consumer.decrypt_string(&envelope, &opts).unwrap(), "portable");
}

#[test]
fn test_fake_injected_errors() {
    let (enc, fake) = fake::encrypter();
    let opts = EncryptOptions::new();

    fake.fail_encrypt_with(EncryptionError::Injected("encrypt down".into()));
    fake.fail_decrypt_with(EncryptionError::AuthenticationFailed);
    fake.fail_generate_key_with(EncryptionError::RandomnessUnavailable("mocked".into()));

    assert_eq!(
        enc.encrypt("x", &opts),
        Err(EncryptionError::Injected("encrypt down".into()))
    );
    assert_eq!(
        enc.decrypt("fake:eA==", &opts),
        Err(EncryptionError::AuthenticationFailed)
    );
    assert!(matches!(
        enc.generate_key(KeyFormat::Hex),
        Err(EncryptionError::RandomnessUnavailable(_))
    ));

    fake.assert_nothing_encrypted();
    fake.assert_nothing_decrypted();
    assert_eq!(fake.generate_key_count(), 1);
}

#[test]
fn test_fake_custom_behaviour() {
    let (enc, fake) = fake::encrypter();
    let opts = EncryptOptions::new();

    fake.on_encrypt(|plain, _aad| Ok(format!("custom:{}", plain.len())));
    fake.on_decrypt(|envelope, _aad| Ok(envelope.as_bytes().to_vec()));
    fake.on_generate_key(|| Ok(vec![7u8; 32]));

    assert_eq!(enc.encrypt("abcd", &opts).unwrap(), "custom:4");
    assert_eq!(enc.decrypt("echo", &opts).unwrap(), b"echo");
    assert_eq!(
        enc.generate_key(KeyFormat::Hex).unwrap(),
        format!("hex:{}", "07".repeat(32))
    );

    fake.assert_encrypted_count(1);
    fake.assert_decrypted_envelope("echo");
}

#[test]
fn test_fake_default_key_and_reset() {
    let (enc, fake) = fake::encrypter();
    let opts = EncryptOptions::new();

    assert_eq!(*fake.generate_key().unwrap(), FAKE_KEY.to_vec());

    fake.fail_encrypt_with(EncryptionError::MissingKey);
    assert!(enc.encrypt("x", &opts).is_err());
    fake.reset();

    enc.encrypt("after reset", &opts).unwrap();
    fake.assert_encrypted_count(1);
    assert_eq!(fake.generate_key_count(), 0);
    assert_eq!(fake.encrypt_calls().len(), 1);
    assert!(fake.decrypt_calls().is_empty());
}

#[test]
fn test_fake_counts_across_threads() {
    let fake = Arc::new(FakeEncryption::new());
    let enc = Encrypter::from_shared(fake.clone());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let enc = enc.clone();
            thread::spawn(move || {
                for _ in 0..25 {
                    enc.encrypt("payload", &EncryptOptions::new()).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    fake.assert_encrypted_count(100);
}

#[test]
#[should_panic(expected = "expected data to be encrypted")]
fn test_fake_assertion_failure_panics() {
    let (_, fake) = fake::encrypter();
    fake.assert_encrypted();
}
