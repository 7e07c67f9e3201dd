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

//! Key manager for AES-CTR-HMAC-AEAD. The HMAC half is always constructed
//! with a tag size equal to the hash's full digest length — truncation to
//! the configured tag size is [`crate::subtle::EncryptThenAuthenticate`]'s
//! job, not the underlying `Hmac`'s.

use crate::subtle::aes_ctr::MIN_IV_SIZE_IN_BYTES;
use crate::subtle::{AesCtr, EncryptThenAuthenticate};
use prost::Message;
use tink::proto::{
    AesCtrHmacAeadKey, AesCtrHmacAeadKeyFormat, AesCtrKey, HashType, HmacKey, HmacParams, KeyData,
};
use tink::registry::KeyManager;
use tink::{Primitive, TinkError};
use tink_mac::subtle::Hmac;

#[derive(Default)]
pub struct AesCtrHmacAeadKeyManager;

impl KeyManager for AesCtrHmacAeadKeyManager {
    fn primitive(&self, serialized_key: &[u8]) -> Result<Primitive, TinkError> {
        let key = AesCtrHmacAeadKey::decode(serialized_key)
            .map_err(|e| tink::utils::wrap_err("AesCtrHmacAeadKeyManager: invalid key", e))?;
        validate_key(&key)?;

        let aes_ctr_key = key.aes_ctr_key.as_ref().unwrap();
        let aes_ctr_params = aes_ctr_key.params.as_ref().unwrap();
        let hmac_key = key.hmac_key.as_ref().unwrap();
        let hmac_params = hmac_key.params.as_ref().unwrap();
        let hash = HashType::from_i32(hmac_params.hash)
            .ok_or_else(|| TinkError::new("AesCtrHmacAeadKeyManager: unknown hash"))?;

        let ctr = AesCtr::new(&aes_ctr_key.key_value, aes_ctr_params.iv_size as usize)?;
        let tag_size = hmac_params.tag_size as usize;
        let full_tag_size = tink_mac::subtle::max_tag_size(hash)?;
        let mac = Hmac::new(hash, &hmac_key.key_value, full_tag_size)?;
        let aead = EncryptThenAuthenticate::new(ctr, mac, tag_size);
        Ok(Primitive::Aead(std::sync::Arc::new(aead)))
    }

    fn new_key(&self, serialized_key_format: &[u8]) -> Result<Vec<u8>, TinkError> {
        let format = AesCtrHmacAeadKeyFormat::decode(serialized_key_format)
            .map_err(|e| {
                tink::utils::wrap_err("AesCtrHmacAeadKeyManager: invalid key format", e)
            })?;
        validate_key_format(&format)?;

        let aes_ctr_format = format.aes_ctr_key_format.as_ref().unwrap();
        let hmac_format = format.hmac_key_format.as_ref().unwrap();
        let aes_ctr_key = AesCtrKey {
            version: crate::AES_CTR_HMAC_AEAD_KEY_VERSION,
            params: aes_ctr_format.params.clone(),
            key_value: tink::subtle::random::get_random_bytes(aes_ctr_format.key_size as usize),
        };
        let hmac_key = HmacKey {
            version: crate::AES_CTR_HMAC_AEAD_KEY_VERSION,
            params: hmac_format.params.clone(),
            key_value: tink::subtle::random::get_random_bytes(hmac_format.key_size as usize),
        };
        let key = AesCtrHmacAeadKey {
            version: crate::AES_CTR_HMAC_AEAD_KEY_VERSION,
            aes_ctr_key: Some(aes_ctr_key),
            hmac_key: Some(hmac_key),
        };
        let mut out = Vec::new();
        key.encode(&mut out).map_err(|e| {
            tink::utils::wrap_err("AesCtrHmacAeadKeyManager: encoding failed", e)
        })?;
        Ok(out)
    }

    fn new_key_data(&self, serialized_key_format: &[u8]) -> Result<KeyData, TinkError> {
        let serialized_key = self.new_key(serialized_key_format)?;
        Ok(KeyData {
            type_url: crate::AES_CTR_HMAC_AEAD_TYPE_URL.to_string(),
            value: serialized_key,
            key_material_type: tink::proto::key_data::KeyMaterialType::Symmetric as i32,
        })
    }

    fn does_support(&self, type_url: &str) -> bool {
        type_url == crate::AES_CTR_HMAC_AEAD_TYPE_URL
    }

    fn type_url(&self) -> &'static str {
        crate::AES_CTR_HMAC_AEAD_TYPE_URL
    }
}

fn validate_key(key: &AesCtrHmacAeadKey) -> Result<(), TinkError> {
    tink::keyset::validate_key_version(key.version, crate::AES_CTR_HMAC_AEAD_KEY_VERSION)?;
    let aes_ctr_key = key
        .aes_ctr_key
        .as_ref()
        .ok_or_else(|| TinkError::new("AesCtrHmacAeadKeyManager: missing aes_ctr_key"))?;
    tink::subtle::validate_aes_key_size(aes_ctr_key.key_value.len())?;
    let aes_ctr_params = aes_ctr_key
        .params
        .as_ref()
        .ok_or_else(|| TinkError::new("AesCtrHmacAeadKeyManager: missing aes_ctr params"))?;
    if (aes_ctr_params.iv_size as usize) < MIN_IV_SIZE_IN_BYTES
        || aes_ctr_params.iv_size > 16
    {
        return Err("AesCtrHmacAeadKeyManager: invalid IV size".into());
    }
    let hmac_key = key
        .hmac_key
        .as_ref()
        .ok_or_else(|| TinkError::new("AesCtrHmacAeadKeyManager: missing hmac_key"))?;
    validate_hmac_params(
        hmac_key
            .params
            .as_ref()
            .ok_or_else(|| TinkError::new("AesCtrHmacAeadKeyManager: missing hmac params"))?,
        hmac_key.key_value.len(),
    )
}

fn validate_key_format(format: &AesCtrHmacAeadKeyFormat) -> Result<(), TinkError> {
    let aes_ctr_format = format
        .aes_ctr_key_format
        .as_ref()
        .ok_or_else(|| TinkError::new("AesCtrHmacAeadKeyManager: missing aes_ctr_key_format"))?;
    tink::subtle::validate_aes_key_size(aes_ctr_format.key_size as usize)?;
    let aes_ctr_params = aes_ctr_format
        .params
        .as_ref()
        .ok_or_else(|| TinkError::new("AesCtrHmacAeadKeyManager: missing aes_ctr params"))?;
    if (aes_ctr_params.iv_size as usize) < MIN_IV_SIZE_IN_BYTES
        || aes_ctr_params.iv_size > 16
    {
        return Err("AesCtrHmacAeadKeyManager: invalid IV size".into());
    }
    let hmac_format = format
        .hmac_key_format
        .as_ref()
        .ok_or_else(|| TinkError::new("AesCtrHmacAeadKeyManager: missing hmac_key_format"))?;
    validate_hmac_params(
        hmac_format
            .params
            .as_ref()
            .ok_or_else(|| TinkError::new("AesCtrHmacAeadKeyManager: missing hmac params"))?,
        hmac_format.key_size as usize,
    )
}

fn validate_hmac_params(params: &HmacParams, key_size: usize) -> Result<(), TinkError> {
    let hash = HashType::from_i32(params.hash)
        .ok_or_else(|| TinkError::new("AesCtrHmacAeadKeyManager: unknown hash"))?;
    tink_mac::subtle::validate_hmac_params(hash, key_size, params.tag_size as usize)
}
