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
use tink::DeterministicAead;

#[test]
fn example() {
    tink_daead::init().unwrap();
    let template = tink_daead::aes_siv_key_template();
    let handle = Handle::new(&template).unwrap();
    let daead = tink_daead::new(&handle).unwrap();

    let plaintext = b"this data is authenticated but not secret from traffic analysis";
    let associated_data = b"extra data";
    let ciphertext = daead
        .encrypt_deterministically(plaintext, associated_data)
        .unwrap();
    let got = daead
        .decrypt_deterministically(&ciphertext, associated_data)
        .unwrap();
    assert_eq!(got, plaintext);
}

#[test]
fn test_daead_init() {
    tink_daead::init().unwrap();
    tink::registry::get_key_manager(tink_testutil::AES_SIV_TYPE_URL)
        .expect("AES-SIV key manager should be registered");
}

#[test]
fn encryption_is_deterministic() {
    tink_daead::init().unwrap();
    let template = tink_daead::aes_siv_key_template();
    let handle = Handle::new(&template).unwrap();
    let daead = tink_daead::new(&handle).unwrap();

    let plaintext = b"same plaintext every time";
    let c1 = daead.encrypt_deterministically(plaintext, b"ad").unwrap();
    let c2 = daead.encrypt_deterministically(plaintext, b"ad").unwrap();
    assert_eq!(c1, c2, "AES-SIV encryption must be deterministic for identical inputs");
}

#[test]
fn wrong_associated_data_fails() {
    tink_daead::init().unwrap();
    let template = tink_daead::aes_siv_key_template();
    let handle = Handle::new(&template).unwrap();
    let daead = tink_daead::new(&handle).unwrap();

    let ciphertext = daead.encrypt_deterministically(b"hello", b"ad-1").unwrap();
    assert!(daead.decrypt_deterministically(&ciphertext, b"ad-2").is_err());
}

#[test]
fn tampered_ciphertext_fails() {
    tink_daead::init().unwrap();
    let template = tink_daead::aes_siv_key_template();
    let handle = Handle::new(&template).unwrap();
    let daead = tink_daead::new(&handle).unwrap();

    let ciphertext = daead.encrypt_deterministically(b"hello, world", b"ad").unwrap();
    for mutated in tink_testutil::generate_mutations(&ciphertext) {
        assert!(
            daead.decrypt_deterministically(&mutated, b"ad").is_err(),
            "mutation of ciphertext unexpectedly decrypted"
        );
    }
}
