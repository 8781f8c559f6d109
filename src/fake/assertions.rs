// src/fake/assertions.rs
//! Panicking assertions for use inside tests

use super::FakeEncryption;

impl FakeEncryption {
    #[track_caller]
    pub fn assert_encrypted(&self) {
        assert!(
            self.encrypt_count() > 0,
            "expected data to be encrypted, but it was not"
        );
    }

    #[track_caller]
    pub fn assert_encrypted_count(&self, count: usize) {
        let actual = self.encrypt_count();
        assert_eq!(actual, count, "expected {count} encryptions, got {actual}");
    }

    #[track_caller]
    pub fn assert_encrypted_data(&self, plaintext: &[u8]) {
        assert!(
            self.encrypt_calls().iter().any(|c| c.plaintext == plaintext),
            "expected data {:?} to be encrypted, but it was not",
            String::from_utf8_lossy(plaintext)
        );
    }

    #[track_caller]
    pub fn assert_encrypted_string(&self, plaintext: &str) {
        self.assert_encrypted_data(plaintext.as_bytes());
    }

    /// Some encryption bound exactly this AAD
    #[track_caller]
    pub fn assert_encrypted_with_aad(&self, aad: &[u8]) {
        assert!(
            self.encrypt_calls()
                .iter()
                .any(|c| c.aad.as_deref() == Some(aad)),
            "expected an encryption with the given AAD, but there was none"
        );
    }

    #[track_caller]
    pub fn assert_decrypted(&self) {
        assert!(
            self.decrypt_count() > 0,
            "expected data to be decrypted, but it was not"
        );
    }

    #[track_caller]
    pub fn assert_decrypted_count(&self, count: usize) {
        let actual = self.decrypt_count();
        assert_eq!(actual, count, "expected {count} decryptions, got {actual}");
    }

    #[track_caller]
    pub fn assert_decrypted_envelope(&self, envelope: &str) {
        assert!(
            self.decrypt_calls().iter().any(|c| c.envelope == envelope),
            "expected ciphertext {envelope:?} to be decrypted, but it was not"
        );
    }

    #[track_caller]
    pub fn assert_nothing_encrypted(&self) {
        let actual = self.encrypt_count();
        assert_eq!(actual, 0, "expected no encryptions, but {actual} occurred");
    }

    #[track_caller]
    pub fn assert_nothing_decrypted(&self) {
        let actual = self.decrypt_count();
        assert_eq!(actual, 0, "expected no decryptions, but {actual} occurred");
    }
}
