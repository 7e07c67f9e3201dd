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

use crate::subtle;
use prost::Message;
use tink::proto::{Ed25519PublicKey, KeyData};
use tink::registry::KeyManager;
use tink::{Primitive, TinkError};

#[derive(Default)]
pub struct Ed25519VerifierKeyManager;

impl KeyManager for Ed25519VerifierKeyManager {
    fn primitive(&self, serialized_key: &[u8]) -> Result<Primitive, TinkError> {
        if serialized_key.is_empty() {
            return Err("Ed25519VerifierKeyManager: invalid key".into());
        }
        let key = Ed25519PublicKey::decode(serialized_key)
            .map_err(|e| tink::utils::wrap_err("Ed25519VerifierKeyManager: invalid key", e))?;
        validate_key(&key)?;
        let verifier = subtle::Ed25519Verifier::new(&key.key_value)
            .map_err(|e| TinkError::new(&format!("Ed25519VerifierKeyManager: {}", e)))?;
        Ok(Primitive::Verifier(std::sync::Arc::new(verifier)))
    }

    fn new_key(&self, _serialized_key_format: &[u8]) -> Result<Vec<u8>, TinkError> {
        Err("Ed25519VerifierKeyManager: not implemented".into())
    }

    fn new_key_data(&self, _serialized_key_format: &[u8]) -> Result<KeyData, TinkError> {
        Err("Ed25519VerifierKeyManager: not implemented".into())
    }

    fn does_support(&self, type_url: &str) -> bool {
        type_url == crate::ED25519_VERIFIER_TYPE_URL
    }

    fn type_url(&self) -> &'static str {
        crate::ED25519_VERIFIER_TYPE_URL
    }
}

fn validate_key(key: &Ed25519PublicKey) -> Result<(), TinkError> {
    tink::keyset::validate_key_version(key.version, crate::ED25519_VERIFIER_KEY_VERSION)?;
    if key.key_value.len() != subtle::ED25519_PUBLIC_KEY_SIZE {
        return Err("Ed25519VerifierKeyManager: invalid key size".into());
    }
    Ok(())
}
