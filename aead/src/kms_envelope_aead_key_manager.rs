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

//! Key manager for the envelope AEAD. Unlike every other key manager in
//! this crate, the "key" is not symmetric key material at all — it's a
//! `kek_uri` plus a DEK template, and `primitive()` resolves the KEK via
//! the registered [`tink::registry::KmsClient`] at call time.

use crate::KmsEnvelopeAead;
use prost::Message;
use tink::proto::{KeyData, KmsEnvelopeAeadKey, KmsEnvelopeAeadKeyFormat};
use tink::registry::KeyManager;
use tink::{Primitive, TinkError};

#[derive(Default)]
pub struct KmsEnvelopeAeadKeyManager;

impl KeyManager for KmsEnvelopeAeadKeyManager {
    fn primitive(&self, serialized_key: &[u8]) -> Result<Primitive, TinkError> {
        let key = KmsEnvelopeAeadKey::decode(serialized_key)
            .map_err(|e| tink::utils::wrap_err("KmsEnvelopeAeadKeyManager: invalid key", e))?;
        tink::keyset::validate_key_version(key.version, crate::KMS_ENVELOPE_AEAD_KEY_VERSION)?;
        let params = key
            .params
            .ok_or_else(|| TinkError::new("KmsEnvelopeAeadKeyManager: missing params"))?;
        let dek_template = params
            .dek_template
            .ok_or_else(|| TinkError::new("KmsEnvelopeAeadKeyManager: missing dek_template"))?;
        let kms_client = tink::registry::get_kms_client(&params.kek_uri)?;
        let remote = kms_client.get_aead(&params.kek_uri)?;
        Ok(Primitive::Aead(std::sync::Arc::new(KmsEnvelopeAead::new(
            dek_template,
            remote,
        ))))
    }

    fn new_key(&self, serialized_key_format: &[u8]) -> Result<Vec<u8>, TinkError> {
        let format = KmsEnvelopeAeadKeyFormat::decode(serialized_key_format).map_err(|e| {
            tink::utils::wrap_err("KmsEnvelopeAeadKeyManager: invalid key format", e)
        })?;
        let key = KmsEnvelopeAeadKey {
            version: crate::KMS_ENVELOPE_AEAD_KEY_VERSION,
            params: Some(format),
        };
        let mut out = Vec::new();
        key.encode(&mut out).map_err(|e| {
            tink::utils::wrap_err("KmsEnvelopeAeadKeyManager: encoding failed", e)
        })?;
        Ok(out)
    }

    fn new_key_data(&self, serialized_key_format: &[u8]) -> Result<KeyData, TinkError> {
        let serialized_key = self.new_key(serialized_key_format)?;
        Ok(KeyData {
            type_url: crate::KMS_ENVELOPE_AEAD_TYPE_URL.to_string(),
            value: serialized_key,
            key_material_type: tink::proto::key_data::KeyMaterialType::Remote as i32,
        })
    }

    fn does_support(&self, type_url: &str) -> bool {
        type_url == crate::KMS_ENVELOPE_AEAD_TYPE_URL
    }

    fn type_url(&self) -> &'static str {
        crate::KMS_ENVELOPE_AEAD_TYPE_URL
    }
}
