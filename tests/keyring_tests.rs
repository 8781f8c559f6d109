// tests/keyring_tests.rs
mod common;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use rotating_aead::{EncryptOptions, Encrypter, EncryptionError, KeyRing};

use common::sequential_key;

#[test]
fn test_live_rotation_keeps_old_ciphertexts_readable() {
    common::setup();
    let ring = KeyRing::new(sequential_key(0)).unwrap();
    let adapter = ring.adapter();

    let before = adapter.encrypt(b"written with key 0", None).unwrap();
    ring.rotate(sequential_key(1)).unwrap();
    let after = adapter.encrypt(b"written with key 1", None).unwrap();

    assert_eq!(adapter.decrypt(&before, None).unwrap(), b"written with key 0");
    assert_eq!(adapter.decrypt(&after, None).unwrap(), b"written with key 1");

    // the adapter picked up the new current key without being rebuilt
    assert!(rotating_aead::open(&sequential_key(1), &after, None).is_ok());
    assert!(rotating_aead::open(&sequential_key(0), &after, None).is_err());
}

#[test]
fn test_prune_strands_pruned_ciphertexts() {
    let ring = KeyRing::new(sequential_key(0)).unwrap();
    let adapter = ring.adapter();
    let oldest = adapter.encrypt(b"oldest", None).unwrap();

    ring.rotate(sequential_key(1)).unwrap();
    let middle = adapter.encrypt(b"middle", None).unwrap();
    ring.rotate(sequential_key(2)).unwrap();

    assert_eq!(ring.prune(1), 1);
    assert_eq!(adapter.decrypt(&middle, None).unwrap(), b"middle");
    assert_eq!(
        adapter.decrypt(&oldest, None),
        Err(EncryptionError::AllKeysFailed)
    );
}

#[test]
fn test_reencrypt_before_prune() {
    let ring = KeyRing::new(sequential_key(0)).unwrap();
    let adapter = ring.adapter();
    let stored = adapter.encrypt(b"long lived", Some(b"row:1")).unwrap();

    ring.rotate_to_new_key().unwrap();
    let migrated = adapter.reencrypt(&stored, Some(b"row:1")).unwrap();
    ring.prune(0);

    assert_eq!(ring.previous_count(), 0);
    assert_eq!(
        adapter.decrypt(&migrated, Some(b"row:1")).unwrap(),
        b"long lived"
    );
}

#[test]
fn test_rotate_to_new_key_returns_installed_key() {
    let ring = KeyRing::new(sequential_key(0)).unwrap();
    let key = ring.rotate_to_new_key().unwrap();

    let keys = ring.keys();
    assert_eq!(keys.len(), 2);
    assert_eq!(keys[0].as_slice(), key.as_slice());
    assert_eq!(keys[1].as_slice(), sequential_key(0).as_slice());
}

#[test]
fn test_encrypter_over_keyring() {
    let ring = KeyRing::with_previous(sequential_key(3), vec![sequential_key(2)]).unwrap();
    let enc = Encrypter::from(ring.adapter());
    let opts = EncryptOptions::new();

    let envelope = enc.encrypt("through the ring", &opts).unwrap();
    ring.rotate(sequential_key(4)).unwrap();
    assert_eq!(
        enc.decrypt_string(&envelope, &opts).unwrap(),
        "through the ring"
    );
}

#[test]
fn test_concurrent_use_during_rotation() {
    let ring = KeyRing::new(sequential_key(0)).unwrap();
    let done = Arc::new(AtomicBool::new(false));

    let workers: Vec<_> = (0..4)
        .map(|i| {
            let adapter = ring.adapter();
            let done = Arc::clone(&done);
            thread::spawn(move || {
                let mut rounds = 0usize;
                while !done.load(Ordering::SeqCst) || rounds < 10 {
                    let msg = format!("worker {i} round {rounds}");
                    let envelope = adapter.encrypt(msg.as_bytes(), None).unwrap();
                    assert_eq!(adapter.decrypt(&envelope, None).unwrap(), msg.as_bytes());
                    rounds += 1;
                }
                rounds
            })
        })
        .collect();

    for offset in 1..=5u8 {
        ring.rotate(sequential_key(offset)).unwrap();
    }
    done.store(true, Ordering::SeqCst);

    for worker in workers {
        assert!(worker.join().unwrap() >= 10);
    }
    assert_eq!(ring.previous_count(), 5);
}
