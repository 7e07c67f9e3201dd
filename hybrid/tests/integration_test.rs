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

mod subtle;

use tink::keyset::Handle;

fn init() {
    tink_aead::init().unwrap();
    tink_hybrid::init().unwrap();
}

#[test]
fn example() {
    init();
    let template = tink_hybrid::ecies_hkdf_p256_ctr_hmac_sha256_aes128_gcm_key_template();
    let handle = Handle::new(&template).unwrap();
    let public_handle = handle.public().unwrap();

    let encrypter = tink_hybrid::new_hybrid_encrypt(&public_handle).unwrap();
    let decrypter = tink_hybrid::new_hybrid_decrypt(&handle).unwrap();

    let plaintext = b"this message is secret";
    let context_info = b"context info";
    let ciphertext = encrypter.encrypt(plaintext, context_info).unwrap();
    let got = decrypter.decrypt(&ciphertext, context_info).unwrap();
    assert_eq!(got, plaintext);
}

#[test]
fn test_hybrid_init() {
    init();
    for type_url in &[
        tink_testutil::ECIES_AEAD_HKDF_PRIVATE_KEY_TYPE_URL,
        tink_testutil::ECIES_AEAD_HKDF_PUBLIC_KEY_TYPE_URL,
    ] {
        tink::registry::get_key_manager(type_url)
            .unwrap_or_else(|e| panic!("no key manager for {}: {:?}", type_url, e));
    }
}

#[test]
fn all_key_templates_round_trip() {
    init();
    let templates: Vec<tink::proto::KeyTemplate> = vec![
        tink_hybrid::ecies_hkdf_p256_ctr_hmac_sha256_aes128_ctr_hmac_sha256_key_template(),
        tink_hybrid::ecies_hkdf_p256_ctr_hmac_sha256_aes128_gcm_key_template(),
        tink_hybrid::ecies_hkdf_p256_compressed_key_template(),
    ];
    for template in templates {
        let handle = Handle::new(&template).unwrap();
        let public_handle = handle.public().unwrap();
        let encrypter = tink_hybrid::new_hybrid_encrypt(&public_handle).unwrap();
        let decrypter = tink_hybrid::new_hybrid_decrypt(&handle).unwrap();

        let plaintext = b"secret message";
        let ciphertext = encrypter.encrypt(plaintext, b"info").unwrap();
        let got = decrypter.decrypt(&ciphertext, b"info").unwrap();
        assert_eq!(got, plaintext);
    }
}

#[test]
fn mismatched_context_info_fails() {
    init();
    let template = tink_hybrid::ecies_hkdf_p256_ctr_hmac_sha256_aes128_gcm_key_template();
    let handle = Handle::new(&template).unwrap();
    let public_handle = handle.public().unwrap();
    let encrypter = tink_hybrid::new_hybrid_encrypt(&public_handle).unwrap();
    let decrypter = tink_hybrid::new_hybrid_decrypt(&handle).unwrap();

    let ciphertext = encrypter.encrypt(b"hello", b"context a").unwrap();
    assert!(decrypter.decrypt(&ciphertext, b"context b").is_err());
}

#[test]
fn wrong_recipient_key_fails() {
    init();
    let template = tink_hybrid::ecies_hkdf_p256_ctr_hmac_sha256_aes128_gcm_key_template();
    let handle = Handle::new(&template).unwrap();
    let public_handle = handle.public().unwrap();
    let other_handle = Handle::new(&template).unwrap();

    let encrypter = tink_hybrid::new_hybrid_encrypt(&public_handle).unwrap();
    let wrong_decrypter = tink_hybrid::new_hybrid_decrypt(&other_handle).unwrap();

    let ciphertext = encrypter.encrypt(b"hello", b"info").unwrap();
    assert!(wrong_decrypter.decrypt(&ciphertext, b"info").is_err());
}

#[test]
fn tampered_ciphertext_fails() {
    init();
    let template = tink_hybrid::ecies_hkdf_p256_ctr_hmac_sha256_aes128_gcm_key_template();
    let handle = Handle::new(&template).unwrap();
    let public_handle = handle.public().unwrap();
    let encrypter = tink_hybrid::new_hybrid_encrypt(&public_handle).unwrap();
    let decrypter = tink_hybrid::new_hybrid_decrypt(&handle).unwrap();

    let ciphertext = encrypter.encrypt(b"hello world", b"info").unwrap();
    for mutated in tink_testutil::generate_mutations(&ciphertext) {
        assert!(
            decrypter.decrypt(&mutated, b"info").is_err(),
            "mutation of ciphertext unexpectedly decrypted"
        );
    }
}
