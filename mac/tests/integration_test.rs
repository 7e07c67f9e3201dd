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
use tink::Mac;

#[test]
fn example() {
    tink_mac::init().unwrap();
    let template = tink_mac::hmac_sha256_tag256_key_template();
    let handle = Handle::new(&template).unwrap();
    let mac = tink_mac::new(&handle).unwrap();

    let data = b"authenticate, but don't hide, this data";
    let tag = mac.compute_mac(data).unwrap();
    mac.verify_mac(&tag, data).unwrap();
}

#[test]
fn test_mac_init() {
    tink_mac::init().unwrap();
    tink::registry::get_key_manager(tink_testutil::HMAC_TYPE_URL)
        .expect("HMAC key manager should be registered");
}

#[test]
fn all_key_templates_round_trip() {
    tink_mac::init().unwrap();
    let templates = vec![
        tink_mac::hmac_sha256_tag256_key_template(),
        tink_mac::hmac_sha256_tag128_key_template(),
        tink_mac::hmac_sha512_tag512_key_template(),
        tink_mac::hmac_sha512_tag256_key_template(),
    ];
    for template in templates {
        let handle = Handle::new(&template).unwrap();
        let mac = tink_mac::new(&handle).unwrap();
        let data = b"some data to authenticate";
        let tag = mac.compute_mac(data).unwrap();
        mac.verify_mac(&tag, data).unwrap();
    }
}

#[test]
fn wrong_tag_is_rejected() {
    tink_mac::init().unwrap();
    let template = tink_mac::hmac_sha256_tag256_key_template();
    let handle = Handle::new(&template).unwrap();
    let mac = tink_mac::new(&handle).unwrap();

    let tag = mac.compute_mac(b"hello").unwrap();
    assert!(mac.verify_mac(&tag, b"goodbye").is_err());
}

#[test]
fn tampered_tag_is_rejected() {
    tink_mac::init().unwrap();
    let template = tink_mac::hmac_sha256_tag256_key_template();
    let handle = Handle::new(&template).unwrap();
    let mac = tink_mac::new(&handle).unwrap();

    let data = b"some message";
    let tag = mac.compute_mac(data).unwrap();
    for mutated in tink_testutil::generate_mutations(&tag) {
        assert!(mac.verify_mac(&mutated, data).is_err());
    }
}
