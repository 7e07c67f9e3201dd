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

use crate::subtle::AesGcm;
use prost::Message;
use tink::proto::{AesGcmKey, AesGcmKeyFormat, KeyData};
use tink::registry::KeyManager;
use tink::{Primitive, TinkError};

#[derive(Default)]
pub struct AesGcmKeyManager;

impl KeyManager for AesGcmKeyManager {
    fn primitive(&self, serialized_key: &[u8]) -> Result<Primitive, TinkError> {
        let key = AesGcmKey::decode(serialized_key)
            .map_err(|e| tink::utils::wrap_err("AesGcmKeyManager: invalid key", e))?;
        validate_key(&key)?;
        let aead = AesGcm::new(&key.key_value)?;
        Ok(Primitive::Aead(std::sync::Arc::new(aead)))
    }

    fn new_key(&self, serialized_key_format: &[u8]) -> Result<Vec<u8>, TinkError> {
        let format = AesGcmKeyFormat::decode(serialized_key_format)
            .map_err(|e| tink::utils::wrap_err("AesGcmKeyManager: invalid key format", e))?;
        validate_key_format(&format)?;
        let key_value = tink::subtle::random::get_random_bytes(format.key_size as usize);
        let key = AesGcmKey {
            version: crate::AES_GCM_KEY_VERSION,
            key_value,
        };
        let mut out = Vec::new();
        key.encode(&mut out)
            .map_err(|e| tink::utils::wrap_err("AesGcmKeyManager: encoding failed", e))?;
        Ok(out)
    }

    fn new_key_data(&self, serialized_key_format: &[u8]) -> Result<KeyData, TinkError> {
        let serialized_key = self.new_key(serialized_key_format)?;
        Ok(KeyData {
            type_url: crate::AES_GCM_TYPE_URL.to_string(),
            value: serialized_key,
            key_material_type: tink::proto::key_data::KeyMaterialType::Symmetric as i32,
        })
    }

    fn does_support(&self, type_url: &str) -> bool {
        type_url == crate::AES_GCM_TYPE_URL
    }

    fn type_url(&self) -> &'static str {
        crate::AES_GCM_TYPE_URL
    }
}

fn validate_key(key: &AesGcmKey) -> Result<(), TinkError> {
    tink::keyset::validate_key_version(key.version, crate::AES_GCM_KEY_VERSION)?;
    tink::subtle::validate_aes_key_size(key.key_value.len())
}

fn validate_key_format(format: &AesGcmKeyFormat) -> Result<(), TinkError> {
    tink::subtle::validate_aes_key_size(format.key_size as usize)
}
