// Copyright 2020 The Tink-Rust Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
////////////////////////////////////////////////////////////////////////////////

//! Tests against the low-level subtle implementations directly, bypassing
//! key managers and keysets.

use tink::Aead;

#[test]
fn aes_gcm_round_trip() {
    for key_size in [16, 32] {
        let key = tink_testutil::get_random_bytes(key_size);
        let a = tink_aead::subtle::AesGcm::new(&key).unwrap();
        let pt = b"this data needs to be encrypted";
        let ad = b"authenticated but not encrypted";
        let ct = a.encrypt(pt, ad).unwrap();
        assert_eq!(a.decrypt(&ct, ad).unwrap(), pt.to_vec());
    }
}

#[test]
fn aes_gcm_rejects_bad_key_size() {
    let key = tink_testutil::get_random_bytes(20);
    assert!(tink_aead::subtle::AesGcm::new(&key).is_err());
}

#[test]
fn aes_gcm_detects_tampering() {
    let key = tink_testutil::get_random_bytes(16);
    let a = tink_aead::subtle::AesGcm::new(&key).unwrap();
    let ct = a.encrypt(b"secret message", b"ad").unwrap();
    for mutated in tink_testutil::generate_mutations(&ct) {
        assert!(
            a.decrypt(&mutated, b"ad").is_err(),
            "mutated ciphertext decrypted without error: {:?}",
            mutated
        );
    }
    assert!(a.decrypt(&ct, b"wrong ad").is_err());
}

#[test]
fn chacha20poly1305_round_trip() {
    let key = tink_testutil::get_random_bytes(32);
    let a = tink_aead::subtle::ChaCha20Poly1305::new(&key).unwrap();
    let pt = b"this data needs to be encrypted";
    let ad = b"authenticated but not encrypted";
    let ct = a.encrypt(pt, ad).unwrap();
    assert_eq!(a.decrypt(&ct, ad).unwrap(), pt.to_vec());
}

#[test]
fn xchacha20poly1305_round_trip() {
    let key = tink_testutil::get_random_bytes(32);
    let a = tink_aead::subtle::XChaCha20Poly1305::new(&key).unwrap();
    let pt = b"this data needs to be encrypted";
    let ad = b"authenticated but not encrypted";
    let ct = a.encrypt(pt, ad).unwrap();
    assert_eq!(a.decrypt(&ct, ad).unwrap(), pt.to_vec());
}

#[test]
fn xchacha20poly1305_and_chacha20poly1305_ciphertexts_are_not_interchangeable() {
    let key = tink_testutil::get_random_bytes(32);
    let x = tink_aead::subtle::XChaCha20Poly1305::new(&key).unwrap();
    let c = tink_aead::subtle::ChaCha20Poly1305::new(&key).unwrap();
    let ct = x.encrypt(b"message", b"ad").unwrap();
    assert!(c.decrypt(&ct, b"ad").is_err());
}

#[test]
fn encrypt_then_authenticate_round_trip() {
    use tink::proto::HashType;

    let aes_key = tink_testutil::get_random_bytes(16);
    let hmac_key = tink_testutil::get_random_bytes(32);
    let ctr = tink_aead::subtle::aes_ctr::AesCtr::new(&aes_key, 16).unwrap();
    let mac = tink_mac::subtle::Hmac::new(HashType::Sha256, &hmac_key, 16).unwrap();
    let a = tink_aead::subtle::EncryptThenAuthenticate::new(ctr, mac, 16);

    let pt = b"this data needs to be encrypted";
    let ad = b"authenticated but not encrypted";
    let ct = a.encrypt(pt, ad).unwrap();
    assert_eq!(a.decrypt(&ct, ad).unwrap(), pt.to_vec());
}

#[test]
fn encrypt_then_authenticate_detects_tampering() {
    use tink::proto::HashType;

    let aes_key = tink_testutil::get_random_bytes(16);
    let hmac_key = tink_testutil::get_random_bytes(32);
    let ctr = tink_aead::subtle::aes_ctr::AesCtr::new(&aes_key, 16).unwrap();
    let mac = tink_mac::subtle::Hmac::new(HashType::Sha256, &hmac_key, 16).unwrap();
    let a = tink_aead::subtle::EncryptThenAuthenticate::new(ctr, mac, 16);

    let ct = a.encrypt(b"secret message", b"ad").unwrap();
    for mutated in tink_testutil::generate_mutations(&ct) {
        assert!(a.decrypt(&mutated, b"ad").is_err());
    }
}
