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

//! Produces `Verifier` primitives from `EcdsaPublicKey`s. Does not support
//! key generation — public keys are always derived from a private key via
//! [`crate::ecdsa_signer_key_manager::EcdsaSignerKeyManager`].

use crate::subtle;
use prost::Message;
use tink::proto::{EcdsaPublicKey, EllipticCurveType, HashType, KeyData};
use tink::registry::KeyManager;
use tink::{Primitive, TinkError};

#[derive(Default)]
pub struct EcdsaVerifierKeyManager;

impl KeyManager for EcdsaVerifierKeyManager {
    fn primitive(&self, serialized_key: &[u8]) -> Result<Primitive, TinkError> {
        if serialized_key.is_empty() {
            return Err("EcdsaVerifierKeyManager: invalid key".into());
        }
        let key = EcdsaPublicKey::decode(serialized_key)
            .map_err(|e| tink::utils::wrap_err("EcdsaVerifierKeyManager: invalid key", e))?;
        validate_key(&key)?;
        let params = key.params.as_ref().unwrap();
        let (hash, curve, encoding) = parse_params(params)?;
        let verifier = subtle::EcdsaVerifier::new(hash, curve, encoding, &key.x, &key.y)
            .map_err(|e| TinkError::new(&format!("EcdsaVerifierKeyManager: {}", e)))?;
        Ok(Primitive::Verifier(std::sync::Arc::new(verifier)))
    }

    fn new_key(&self, _serialized_key_format: &[u8]) -> Result<Vec<u8>, TinkError> {
        Err("EcdsaVerifierKeyManager: not implemented".into())
    }

    fn new_key_data(&self, _serialized_key_format: &[u8]) -> Result<KeyData, TinkError> {
        Err("EcdsaVerifierKeyManager: not implemented".into())
    }

    fn does_support(&self, type_url: &str) -> bool {
        type_url == crate::ECDSA_VERIFIER_TYPE_URL
    }

    fn type_url(&self) -> &'static str {
        crate::ECDSA_VERIFIER_TYPE_URL
    }
}

fn parse_params(
    params: &tink::proto::EcdsaParams,
) -> Result<
    (
        HashType,
        EllipticCurveType,
        tink::proto::EcdsaSignatureEncoding,
    ),
    TinkError,
> {
    let hash = HashType::from_i32(params.hash_type)
        .ok_or_else(|| TinkError::new("EcdsaVerifierKeyManager: unknown hash"))?;
    let curve = EllipticCurveType::from_i32(params.curve)
        .ok_or_else(|| TinkError::new("EcdsaVerifierKeyManager: unknown curve"))?;
    let encoding = tink::proto::EcdsaSignatureEncoding::from_i32(params.encoding)
        .ok_or_else(|| TinkError::new("EcdsaVerifierKeyManager: unknown encoding"))?;
    Ok((hash, curve, encoding))
}

fn validate_key(key: &EcdsaPublicKey) -> Result<(), TinkError> {
    tink::keyset::validate_key_version(key.version, crate::ECDSA_VERIFIER_KEY_VERSION)?;
    let params = key
        .params
        .as_ref()
        .ok_or_else(|| TinkError::new("EcdsaVerifierKeyManager: missing params"))?;
    let (hash, curve, encoding) = parse_params(params)?;
    subtle::validate_ecdsa_params(hash, curve, encoding)
}
