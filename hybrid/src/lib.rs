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

//! Hybrid encryption: ECIES-AEAD-HKDF key managers plus the composite
//! encrypt/decrypt factories.

mod ecies_aead_hkdf_private_key_manager;
mod ecies_aead_hkdf_public_key_manager;
mod hybrid_decrypt_factory;
mod hybrid_encrypt_factory;
pub mod hybrid_key_templates;
pub mod subtle;

pub use hybrid_key_templates::*;

use std::sync::Arc;
use tink::{HybridDecrypt, HybridEncrypt, TinkError};

pub const ECIES_AEAD_HKDF_PRIVATE_KEY_TYPE_URL: &str =
    "type.googleapis.com/google.crypto.tink.EciesAeadHkdfPrivateKey";
pub const ECIES_AEAD_HKDF_PRIVATE_KEY_VERSION: u32 = 0;

pub const ECIES_AEAD_HKDF_PUBLIC_KEY_TYPE_URL: &str =
    "type.googleapis.com/google.crypto.tink.EciesAeadHkdfPublicKey";
pub const ECIES_AEAD_HKDF_PUBLIC_KEY_VERSION: u32 = 0;

/// Register every hybrid encryption key manager provided by this crate with
/// the global registry.
pub fn init() -> Result<(), TinkError> {
    tink::registry::register_key_manager(Arc::new(
        ecies_aead_hkdf_private_key_manager::EciesAeadHkdfPrivateKeyManager::default(),
    ))?;
    tink::registry::register_key_manager(Arc::new(
        ecies_aead_hkdf_public_key_manager::EciesAeadHkdfPublicKeyManager::default(),
    ))?;
    Ok(())
}

/// Build a composite [`HybridEncrypt`] out of all the primitives in `handle`.
pub fn new_hybrid_encrypt(handle: &tink::keyset::Handle) -> Result<Arc<dyn HybridEncrypt>, TinkError> {
    let ps = handle.primitives()?;
    hybrid_encrypt_factory::new_hybrid_encrypt(ps)
}

/// Build a composite [`HybridDecrypt`] out of all the primitives in `handle`.
pub fn new_hybrid_decrypt(handle: &tink::keyset::Handle) -> Result<Arc<dyn HybridDecrypt>, TinkError> {
    let ps = handle.primitives()?;
    hybrid_decrypt_factory::new_hybrid_decrypt(ps)
}
