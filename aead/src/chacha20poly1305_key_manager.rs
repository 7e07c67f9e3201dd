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

//! Key managers for ChaCha20-Poly1305 and XChaCha20-Poly1305. Both key
//! types carry no parameters of their own, so `new_key`/`primitive` only
//! need to size and validate a raw 32-byte key.

use crate::subtle::{ChaCha20Poly1305, XChaCha20Poly1305};
use prost::Message;
use tink::proto::{ChaCha20Poly1305Key, KeyData, XChaCha20Poly1305Key};
use tink::registry::KeyManager;
use tink::{Primitive, TinkError};

const KEY_SIZE_IN_BYTES: usize = 32;

#[derive(Default)]
pub struct ChaCha20Poly1305KeyManager;

impl KeyManager for ChaCha20Poly1305KeyManager {
    fn primitive(&self, serialized_key: &[u8]) -> Result<Primitive, TinkError> {
        let key = ChaCha20Poly1305Key::decode(serialized_key)
            .map_err(|e| tink::utils::wrap_err("ChaCha20Poly1305KeyManager: invalid key", e))?;
        tink::keyset::validate_key_version(key.version, crate::CHA_CHA20_POLY1305_KEY_VERSION)?;
        let aead = ChaCha20Poly1305::new(&key.key_value)?;
        Ok(Primitive::Aead(std::sync::Arc::new(aead)))
    }

    fn new_key(&self, _serialized_key_format: &[u8]) -> Result<Vec<u8>, TinkError> {
        let key_value = tink::subtle::random::get_random_bytes(KEY_SIZE_IN_BYTES);
        let key = ChaCha20Poly1305Key {
            version: crate::CHA_CHA20_POLY1305_KEY_VERSION,
            key_value,
        };
        let mut out = Vec::new();
        key.encode(&mut out)
            .map_err(|e| tink::utils::wrap_err("ChaCha20Poly1305KeyManager: encoding failed", e))?;
        Ok(out)
    }

    fn new_key_data(&self, serialized_key_format: &[u8]) -> Result<KeyData, TinkError> {
        let serialized_key = self.new_key(serialized_key_format)?;
        Ok(KeyData {
            type_url: crate::CHA_CHA20_POLY1305_TYPE_URL.to_string(),
            value: serialized_key,
            key_material_type: tink::proto::key_data::KeyMaterialType::Symmetric as i32,
        })
    }

    fn does_support(&self, type_url: &str) -> bool {
        type_url == crate::CHA_CHA20_POLY1305_TYPE_URL
    }

    fn type_url(&self) -> &'static str {
        crate::CHA_CHA20_POLY1305_TYPE_URL
    }
}

#[derive(Default)]
pub struct XChaCha20Poly1305KeyManager;

impl KeyManager for XChaCha20Poly1305KeyManager {
    fn primitive(&self, serialized_key: &[u8]) -> Result<Primitive, TinkError> {
        let key = XChaCha20Poly1305Key::decode(serialized_key)
            .map_err(|e| tink::utils::wrap_err("XChaCha20Poly1305KeyManager: invalid key", e))?;
        tink::keyset::validate_key_version(key.version, crate::X_CHA_CHA20_POLY1305_KEY_VERSION)?;
        let aead = XChaCha20Poly1305::new(&key.key_value)?;
        Ok(Primitive::Aead(std::sync::Arc::new(aead)))
    }

    fn new_key(&self, _serialized_key_format: &[u8]) -> Result<Vec<u8>, TinkError> {
        let key_value = tink::subtle::random::get_random_bytes(KEY_SIZE_IN_BYTES);
        let key = XChaCha20Poly1305Key {
            version: crate::X_CHA_CHA20_POLY1305_KEY_VERSION,
            key_value,
        };
        let mut out = Vec::new();
        key.encode(&mut out).map_err(|e| {
            tink::utils::wrap_err("XChaCha20Poly1305KeyManager: encoding failed", e)
        })?;
        Ok(out)
    }

    fn new_key_data(&self, serialized_key_format: &[u8]) -> Result<KeyData, TinkError> {
        let serialized_key = self.new_key(serialized_key_format)?;
        Ok(KeyData {
            type_url: crate::X_CHA_CHA20_POLY1305_TYPE_URL.to_string(),
            value: serialized_key,
            key_material_type: tink::proto::key_data::KeyMaterialType::Symmetric as i32,
        })
    }

    fn does_support(&self, type_url: &str) -> bool {
        type_url == crate::X_CHA_CHA20_POLY1305_TYPE_URL
    }

    fn type_url(&self) -> &'static str {
        crate::X_CHA_CHA20_POLY1305_TYPE_URL
    }
}
