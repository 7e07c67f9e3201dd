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
use tink::proto::{HashType, HmacKey, HmacKeyFormat, HmacParams, KeyData};
use tink::registry::KeyManager;
use tink::{Primitive, TinkError};

#[derive(Default)]
pub struct HmacKeyManager;

impl KeyManager for HmacKeyManager {
    fn primitive(&self, serialized_key: &[u8]) -> Result<Primitive, TinkError> {
        let key = HmacKey::decode(serialized_key)
            .map_err(|e| tink::utils::wrap_err("HmacKeyManager: invalid key", e))?;
        validate_key(&key)?;
        let params = key.params.as_ref().unwrap();
        let hash = HashType::from_i32(params.hash)
            .ok_or_else(|| TinkError::new("HmacKeyManager: unknown hash"))?;
        let mac = subtle::Hmac::new(hash, &key.key_value, params.tag_size as usize)?;
        Ok(Primitive::Mac(std::sync::Arc::new(mac)))
    }

    fn new_key(&self, serialized_key_format: &[u8]) -> Result<Vec<u8>, TinkError> {
        let format = HmacKeyFormat::decode(serialized_key_format)
            .map_err(|e| tink::utils::wrap_err("HmacKeyManager: invalid key format", e))?;
        validate_key_format(&format)?;
        let key_value = tink::subtle::random::get_random_bytes(format.key_size as usize);
        let key = HmacKey {
            version: crate::HMAC_KEY_VERSION,
            params: format.params.clone(),
            key_value,
        };
        let mut out = Vec::new();
        key.encode(&mut out)
            .map_err(|e| tink::utils::wrap_err("HmacKeyManager: encoding failed", e))?;
        Ok(out)
    }

    fn new_key_data(&self, serialized_key_format: &[u8]) -> Result<KeyData, TinkError> {
        let serialized_key = self.new_key(serialized_key_format)?;
        Ok(KeyData {
            type_url: crate::HMAC_TYPE_URL.to_string(),
            value: serialized_key,
            key_material_type: tink::proto::key_data::KeyMaterialType::Symmetric as i32,
        })
    }

    fn does_support(&self, type_url: &str) -> bool {
        type_url == crate::HMAC_TYPE_URL
    }

    fn type_url(&self) -> &'static str {
        crate::HMAC_TYPE_URL
    }
}

fn validate_key(key: &HmacKey) -> Result<(), TinkError> {
    tink::keyset::validate_key_version(key.version, crate::HMAC_KEY_VERSION)?;
    let params = key
        .params
        .as_ref()
        .ok_or_else(|| TinkError::new("HmacKeyManager: missing params"))?;
    validate_params(params, key.key_value.len())
}

fn validate_key_format(format: &HmacKeyFormat) -> Result<(), TinkError> {
    let params = format
        .params
        .as_ref()
        .ok_or_else(|| TinkError::new("HmacKeyManager: missing params"))?;
    validate_params(params, format.key_size as usize)
}

fn validate_params(params: &HmacParams, key_size: usize) -> Result<(), TinkError> {
    let hash = HashType::from_i32(params.hash)
        .ok_or_else(|| TinkError::new("HmacKeyManager: unknown hash"))?;
    subtle::validate_hmac_params(hash, key_size, params.tag_size as usize)
}
