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
use tink::{Signer, Verifier};

#[test]
fn example() {
    tink_signature::init().unwrap();
    let template = tink_signature::ecdsa_p256_key_template();
    let handle = Handle::new(&template).unwrap();
    let public_handle = handle.public().unwrap();

    let signer = tink_signature::new_signer(&handle).unwrap();
    let verifier = tink_signature::new_verifier(&public_handle).unwrap();

    let data = b"this message will be signed";
    let sig = signer.sign(data).unwrap();
    verifier.verify(&sig, data).unwrap();
}

#[test]
fn test_signature_init() {
    tink_signature::init().unwrap();
    for type_url in &[
        tink_testutil::ECDSA_SIGNER_TYPE_URL,
        tink_testutil::ECDSA_VERIFIER_TYPE_URL,
        tink_testutil::ED25519_SIGNER_TYPE_URL,
        tink_testutil::ED25519_VERIFIER_TYPE_URL,
    ] {
        tink::registry::get_key_manager(type_url)
            .unwrap_or_else(|e| panic!("no key manager for {}: {:?}", type_url, e));
    }
}

#[test]
fn all_key_templates_round_trip() {
    tink_signature::init().unwrap();
    let templates = vec![
        tink_signature::ecdsa_p256_key_template(),
        tink_signature::ecdsa_p384_key_template(),
        tink_signature::ecdsa_p521_key_template(),
        tink_signature::ecdsa_p256_key_without_prefix_template(),
        tink_signature::ed25519_key_template(),
    ];
    for template in templates {
        let handle = Handle::new(&template).unwrap();
        let public_handle = handle.public().unwrap();
        let signer = tink_signature::new_signer(&handle).unwrap();
        let verifier = tink_signature::new_verifier(&public_handle).unwrap();

        let data = b"data to sign";
        let sig = signer.sign(data).unwrap();
        verifier.verify(&sig, data).unwrap();
    }
}

#[test]
fn tampered_message_is_rejected() {
    tink_signature::init().unwrap();
    let template = tink_signature::ed25519_key_template();
    let handle = Handle::new(&template).unwrap();
    let public_handle = handle.public().unwrap();
    let signer = tink_signature::new_signer(&handle).unwrap();
    let verifier = tink_signature::new_verifier(&public_handle).unwrap();

    let sig = signer.sign(b"original message").unwrap();
    assert!(verifier.verify(&sig, b"different message").is_err());
}

#[test]
fn tampered_signature_is_rejected() {
    tink_signature::init().unwrap();
    let template = tink_signature::ecdsa_p256_key_template();
    let handle = Handle::new(&template).unwrap();
    let public_handle = handle.public().unwrap();
    let signer = tink_signature::new_signer(&handle).unwrap();
    let verifier = tink_signature::new_verifier(&public_handle).unwrap();

    let data = b"sign this";
    let sig = signer.sign(data).unwrap();
    for mutated in tink_testutil::generate_mutations(&sig) {
        assert!(verifier.verify(&mutated, data).is_err());
    }
}

#[test]
fn wrong_verifier_key_is_rejected() {
    tink_signature::init().unwrap();
    let template = tink_signature::ecdsa_p256_key_template();
    let handle = Handle::new(&template).unwrap();
    let other_handle = Handle::new(&template).unwrap();
    let other_public = other_handle.public().unwrap();

    let signer = tink_signature::new_signer(&handle).unwrap();
    let wrong_verifier = tink_signature::new_verifier(&other_public).unwrap();

    let sig = signer.sign(b"hello").unwrap();
    assert!(wrong_verifier.verify(&sig, b"hello").is_err());
}
