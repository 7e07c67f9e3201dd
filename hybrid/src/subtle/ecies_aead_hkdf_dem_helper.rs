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

//! Binds the ECIES KEM to a concrete DEM (AEAD) algorithm, named by a
//! `KeyTemplate`. The helper knows how much HKDF-derived keying material
//! each supported DEM needs and how to turn that keying material plus the
//! template into a live [`tink::Aead`] — by building the DEM's own key
//! proto around the derived bytes and handing it to the registry exactly
//! as a `KeyManager::primitive` call would.

use prost::Message;
use std::sync::Arc;
use tink::proto::{
    AesCtrHmacAeadKey, AesCtrKey, AesCtrParams, AesGcmKey, ChaCha20Poly1305Key, HmacKey, HmacParams,
    KeyTemplate, XChaCha20Poly1305Key,
};
use tink::{Aead, TinkError};

enum DemKind {
    AesGcm { key_size: usize },
    AesCtrHmac {
        iv_size: u32,
        aes_key_size: usize,
        hmac_key_size: usize,
        hmac_hash: i32,
        hmac_tag_size: u32,
    },
    ChaCha20Poly1305,
    XChaCha20Poly1305,
}

pub struct DemHelper {
    type_url: String,
    kind: DemKind,
}

impl DemHelper {
    pub fn new(dem_key_template: &KeyTemplate) -> Result<DemHelper, TinkError> {
        let kind = match dem_key_template.type_url.as_str() {
            tink_aead::AES_GCM_TYPE_URL => {
                let format = tink::proto::AesGcmKeyFormat::decode(dem_key_template.value.as_slice())
                    .map_err(|e| tink::utils::wrap_err("DemHelper: invalid AES-GCM key format", e))?;
                tink::subtle::validate_aes_key_size(format.key_size as usize)?;
                DemKind::AesGcm {
                    key_size: format.key_size as usize,
                }
            }
            tink_aead::AES_CTR_HMAC_AEAD_TYPE_URL => {
                let format = tink::proto::AesCtrHmacAeadKeyFormat::decode(
                    dem_key_template.value.as_slice(),
                )
                .map_err(|e| {
                    tink::utils::wrap_err("DemHelper: invalid AES-CTR-HMAC key format", e)
                })?;
                let aes_ctr_format = format
                    .aes_ctr_key_format
                    .ok_or_else(|| TinkError::new("DemHelper: missing aes_ctr_key_format"))?;
                let hmac_format = format
                    .hmac_key_format
                    .ok_or_else(|| TinkError::new("DemHelper: missing hmac_key_format"))?;
                let hmac_params = hmac_format
                    .params
                    .ok_or_else(|| TinkError::new("DemHelper: missing hmac params"))?;
                DemKind::AesCtrHmac {
                    iv_size: aes_ctr_format
                        .params
                        .ok_or_else(|| TinkError::new("DemHelper: missing aes_ctr params"))?
                        .iv_size,
                    aes_key_size: aes_ctr_format.key_size as usize,
                    hmac_key_size: hmac_format.key_size as usize,
                    hmac_hash: hmac_params.hash,
                    hmac_tag_size: hmac_params.tag_size,
                }
            }
            tink_aead::CHA_CHA20_POLY1305_TYPE_URL => DemKind::ChaCha20Poly1305,
            tink_aead::X_CHA_CHA20_POLY1305_TYPE_URL => DemKind::XChaCha20Poly1305,
            url => return Err(format!("DemHelper: unsupported DEM type url {}", url).into()),
        };
        Ok(DemHelper {
            type_url: dem_key_template.type_url.clone(),
            kind,
        })
    }

    /// Number of bytes of HKDF-derived keying material this DEM needs.
    pub fn dem_key_size(&self) -> usize {
        match &self.kind {
            DemKind::AesGcm { key_size } => *key_size,
            DemKind::AesCtrHmac {
                aes_key_size,
                hmac_key_size,
                ..
            } => aes_key_size + hmac_key_size,
            DemKind::ChaCha20Poly1305 | DemKind::XChaCha20Poly1305 => 32,
        }
    }

    /// Build the DEM's [`Aead`], keyed with exactly `dem_key_size()` bytes
    /// of caller-supplied (HKDF-derived) key material.
    pub fn get_aead(&self, symmetric_key_value: &[u8]) -> Result<Arc<dyn Aead>, TinkError> {
        if symmetric_key_value.len() != self.dem_key_size() {
            return Err("DemHelper: derived key material has the wrong length".into());
        }
        let serialized_key = match &self.kind {
            DemKind::AesGcm { .. } => encode(&AesGcmKey {
                version: tink_aead::AES_GCM_KEY_VERSION,
                key_value: symmetric_key_value.to_vec(),
            })?,
            DemKind::AesCtrHmac {
                iv_size,
                aes_key_size,
                hmac_hash,
                hmac_tag_size,
                ..
            } => {
                let (aes_key, hmac_key) = symmetric_key_value.split_at(*aes_key_size);
                encode(&AesCtrHmacAeadKey {
                    version: tink_aead::AES_CTR_HMAC_AEAD_KEY_VERSION,
                    aes_ctr_key: Some(AesCtrKey {
                        version: tink_aead::AES_CTR_HMAC_AEAD_KEY_VERSION,
                        params: Some(AesCtrParams { iv_size: *iv_size }),
                        key_value: aes_key.to_vec(),
                    }),
                    hmac_key: Some(HmacKey {
                        version: tink_aead::AES_CTR_HMAC_AEAD_KEY_VERSION,
                        params: Some(HmacParams {
                            hash: *hmac_hash,
                            tag_size: *hmac_tag_size,
                        }),
                        key_value: hmac_key.to_vec(),
                    }),
                })?
            }
            DemKind::ChaCha20Poly1305 => encode(&ChaCha20Poly1305Key {
                version: tink_aead::CHA_CHA20_POLY1305_KEY_VERSION,
                key_value: symmetric_key_value.to_vec(),
            })?,
            DemKind::XChaCha20Poly1305 => encode(&XChaCha20Poly1305Key {
                version: tink_aead::X_CHA_CHA20_POLY1305_KEY_VERSION,
                key_value: symmetric_key_value.to_vec(),
            })?,
        };
        let primitive = tink::registry::primitive(&self.type_url, &serialized_key)?;
        Ok(primitive.as_aead()?.clone())
    }
}

fn encode<M: Message>(msg: &M) -> Result<Vec<u8>, TinkError> {
    let mut out = Vec::new();
    msg.encode(&mut out)
        .map_err(|e| tink::utils::wrap_err("DemHelper: encoding failed", e))?;
    Ok(out)
}
