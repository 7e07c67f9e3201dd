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

//! AEAD (authenticated encryption with associated data) primitives: key
//! managers for AES-GCM, AES-CTR-HMAC, (X)ChaCha20-Poly1305 and the KMS
//! envelope AEAD, plus the composite factory that dispatches across a
//! keyset's entries.

mod aead_factory;
pub mod aead_key_templates;
mod aes_ctr_hmac_aead_key_manager;
mod aes_gcm_key_manager;
mod chacha20poly1305_key_manager;
mod kms_envelope_aead;
mod kms_envelope_aead_key_manager;
pub mod subtle;

pub use aead_key_templates::*;
pub use kms_envelope_aead::KmsEnvelopeAead;

use std::sync::Arc;
use tink::{Aead, TinkError};

pub const AES_GCM_TYPE_URL: &str = "type.googleapis.com/google.crypto.tink.AesGcmKey";
pub const AES_GCM_KEY_VERSION: u32 = 0;

pub const AES_CTR_HMAC_AEAD_TYPE_URL: &str =
    "type.googleapis.com/google.crypto.tink.AesCtrHmacAeadKey";
pub const AES_CTR_HMAC_AEAD_KEY_VERSION: u32 = 0;

pub const CHA_CHA20_POLY1305_TYPE_URL: &str =
    "type.googleapis.com/google.crypto.tink.ChaCha20Poly1305Key";
pub const CHA_CHA20_POLY1305_KEY_VERSION: u32 = 0;

pub const X_CHA_CHA20_POLY1305_TYPE_URL: &str =
    "type.googleapis.com/google.crypto.tink.XChaCha20Poly1305Key";
pub const X_CHA_CHA20_POLY1305_KEY_VERSION: u32 = 0;

pub const KMS_ENVELOPE_AEAD_TYPE_URL: &str =
    "type.googleapis.com/google.crypto.tink.KmsEnvelopeAeadKey";
pub const KMS_ENVELOPE_AEAD_KEY_VERSION: u32 = 0;

/// Register every AEAD key manager with the global registry. Must be called
/// once (per process) before `tink::keyset::Handle::new` is used with an
/// AEAD template, or before a keyset containing AEAD keys is loaded.
pub fn init() -> Result<(), TinkError> {
    tink::registry::register_key_manager(Arc::new(
        aes_gcm_key_manager::AesGcmKeyManager::default(),
    ))?;
    tink::registry::register_key_manager(Arc::new(
        aes_ctr_hmac_aead_key_manager::AesCtrHmacAeadKeyManager::default(),
    ))?;
    tink::registry::register_key_manager(Arc::new(
        chacha20poly1305_key_manager::ChaCha20Poly1305KeyManager::default(),
    ))?;
    tink::registry::register_key_manager(Arc::new(
        chacha20poly1305_key_manager::XChaCha20Poly1305KeyManager::default(),
    ))?;
    tink::registry::register_key_manager(Arc::new(
        kms_envelope_aead_key_manager::KmsEnvelopeAeadKeyManager::default(),
    ))?;
    Ok(())
}

/// Build a composite [`Aead`] from every ENABLED key in `handle`.
pub fn new(handle: &tink::keyset::Handle) -> Result<Arc<dyn Aead>, TinkError> {
    let ps = handle.primitives()?;
    aead_factory::new_aead(ps)
}
