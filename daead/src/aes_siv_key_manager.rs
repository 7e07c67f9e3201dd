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

//! Generates new `AesSivKey` keys and produces [`tink::Primitive::Daead`]
//! instances from them. Key size and other parameters are fixed, so the
//! key-format argument is ignored other than validating its shape.

use crate::subtle;
use prost::Message;
use tink::proto::{AesSivKey, KeyData};
use tink::registry::KeyManager;
use tink::{Primitive, TinkError};

#[derive(Default)]
pub struct AesSivKeyManager;

impl KeyManager for AesSivKeyManager {
    fn primitive(&self, serialized_key: &[u8]) -> Result<Primitive, TinkError> {
        if serialized_key.is_empty() {
            return Err("AesSivKeyManager: invalid key".into());
        }
        let key = AesSivKey::decode(serialized_key)
            .map_err(|e| tink::utils::wrap_err("AesSivKeyManager: invalid key", e))?;
        validate_key(&key)?;
        let daead = subtle::AesSiv::new(&key.key_value)
            .map_err(|e| TinkError::new(&format!("AesSivKeyManager: {}", e)))?;
        Ok(Primitive::Daead(std::sync::Arc::new(daead)))
    }

    fn new_key(&self, _serialized_key_format: &[u8]) -> Result<Vec<u8>, TinkError> {
        let key_value = tink::subtle::random::get_random_bytes(subtle::KEY_SIZE_IN_BYTES);
        let key = AesSivKey {
            version: crate::AES_SIV_KEY_VERSION,
            key_value,
        };
        let mut out = Vec::new();
        key.encode(&mut out)
            .map_err(|e| tink::utils::wrap_err("AesSivKeyManager: encoding failed", e))?;
        Ok(out)
    }

    fn new_key_data(&self, serialized_key_format: &[u8]) -> Result<KeyData, TinkError> {
        let serialized_key = self.new_key(serialized_key_format)?;
        Ok(KeyData {
            type_url: crate::AES_SIV_TYPE_URL.to_string(),
            value: serialized_key,
            key_material_type: tink::proto::key_data::KeyMaterialType::Symmetric as i32,
        })
    }

    fn does_support(&self, type_url: &str) -> bool {
        type_url == crate::AES_SIV_TYPE_URL
    }

    fn type_url(&self) -> &'static str {
        crate::AES_SIV_TYPE_URL
    }
}

fn validate_key(key: &AesSivKey) -> Result<(), TinkError> {
    tink::keyset::validate_key_version(key.version, crate::AES_SIV_KEY_VERSION)?;
    if key.key_value.len() != subtle::KEY_SIZE_IN_BYTES {
        return Err(format!(
            "AesSivKeyManager: key size {} != {}",
            key.key_value.len(),
            subtle::KEY_SIZE_IN_BYTES
        )
        .into());
    }
    Ok(())
}
