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

//! Pre-generated [`KeyTemplate`]s for ECDSA and Ed25519 keys.

use prost::Message;
use tink::proto::{
    EcdsaKeyFormat, EcdsaParams, EcdsaSignatureEncoding, EllipticCurveType, HashType, KeyTemplate,
    OutputPrefixType,
};

/// Return a [`KeyTemplate`] that generates an ECDSA P-256/SHA-256 key with
/// DER signature encoding.
pub fn ecdsa_p256_key_template() -> KeyTemplate {
    create_ecdsa_key_template(
        HashType::Sha256,
        EllipticCurveType::NistP256,
        EcdsaSignatureEncoding::Der,
    )
}

/// Return a [`KeyTemplate`] that generates an ECDSA P-384/SHA-512 key with
/// DER signature encoding.
pub fn ecdsa_p384_key_template() -> KeyTemplate {
    create_ecdsa_key_template(
        HashType::Sha512,
        EllipticCurveType::NistP384,
        EcdsaSignatureEncoding::Der,
    )
}

/// Return a [`KeyTemplate`] that generates an ECDSA P-521/SHA-512 key with
/// DER signature encoding.
pub fn ecdsa_p521_key_template() -> KeyTemplate {
    create_ecdsa_key_template(
        HashType::Sha512,
        EllipticCurveType::NistP521,
        EcdsaSignatureEncoding::Der,
    )
}

/// Return a [`KeyTemplate`] that generates an ECDSA P-256/SHA-256 key with
/// IEEE-P1363 (fixed-width `r ‖ s`) signature encoding.
pub fn ecdsa_p256_key_without_prefix_template() -> KeyTemplate {
    let mut t = create_ecdsa_key_template(
        HashType::Sha256,
        EllipticCurveType::NistP256,
        EcdsaSignatureEncoding::IeeeP1363,
    );
    t.output_prefix_type = OutputPrefixType::Raw as i32;
    t
}

/// Return a [`KeyTemplate`] that generates an Ed25519 key.
pub fn ed25519_key_template() -> KeyTemplate {
    KeyTemplate {
        value: vec![],
        type_url: crate::ED25519_SIGNER_TYPE_URL.to_string(),
        output_prefix_type: OutputPrefixType::Tink as i32,
    }
}

fn create_ecdsa_key_template(
    hash_type: HashType,
    curve: EllipticCurveType,
    encoding: EcdsaSignatureEncoding,
) -> KeyTemplate {
    let params = EcdsaParams {
        hash_type: hash_type as i32,
        curve: curve as i32,
        encoding: encoding as i32,
    };
    let format = EcdsaKeyFormat {
        params: Some(params),
        version: crate::ECDSA_SIGNER_KEY_VERSION,
    };
    let mut serialized_format = Vec::new();
    format.encode(&mut serialized_format).unwrap(); // safe: proto-encode
    KeyTemplate {
        type_url: crate::ECDSA_SIGNER_TYPE_URL.to_string(),
        value: serialized_format,
        output_prefix_type: OutputPrefixType::Tink as i32,
    }
}
