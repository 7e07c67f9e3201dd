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

//! Produces `HybridEncrypt` primitives from `EciesAeadHkdfPublicKey` keys.

use crate::ecies_aead_hkdf_private_key_manager::parse_params;
use crate::subtle;
use prost::Message;
use tink::proto::{EciesAeadHkdfPublicKey, KeyData};
use tink::registry::KeyManager;
use tink::{Primitive, TinkError};

#[derive(Default)]
pub struct EciesAeadHkdfPublicKeyManager;

impl KeyManager for EciesAeadHkdfPublicKeyManager {
    fn primitive(&self, serialized_key: &[u8]) -> Result<Primitive, TinkError> {
        if serialized_key.is_empty() {
            return Err("EciesAeadHkdfPublicKeyManager: invalid key".into());
        }
        let key = EciesAeadHkdfPublicKey::decode(serialized_key)
            .map_err(|e| tink::utils::wrap_err("EciesAeadHkdfPublicKeyManager: invalid key", e))?;
        tink::keyset::validate_key_version(key.version, crate::ECIES_AEAD_HKDF_PUBLIC_KEY_VERSION)?;
        let params = key
            .params
            .as_ref()
            .ok_or_else(|| TinkError::new("EciesAeadHkdfPublicKeyManager: missing params"))?;
        let (curve, hash, point_format, dem_helper) = parse_params(params)?;

        let encrypter = subtle::EciesAeadHkdfHybridEncrypt::new(
            curve,
            &key.x,
            &key.y,
            params.kem_params.as_ref().unwrap().hkdf_salt.clone(),
            hash,
            point_format,
            dem_helper,
        )?;
        Ok(Primitive::HybridEncrypt(std::sync::Arc::new(encrypter)))
    }

    fn new_key(&self, _serialized_key_format: &[u8]) -> Result<Vec<u8>, TinkError> {
        Err("EciesAeadHkdfPublicKeyManager: public key manager does not generate new keys".into())
    }

    fn new_key_data(&self, _serialized_key_format: &[u8]) -> Result<KeyData, TinkError> {
        Err("EciesAeadHkdfPublicKeyManager: public key manager does not generate new keys".into())
    }

    fn does_support(&self, type_url: &str) -> bool {
        type_url == crate::ECIES_AEAD_HKDF_PUBLIC_KEY_TYPE_URL
    }

    fn type_url(&self) -> &'static str {
        crate::ECIES_AEAD_HKDF_PUBLIC_KEY_TYPE_URL
    }
}
