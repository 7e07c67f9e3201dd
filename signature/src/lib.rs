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

//! Digital signatures: key managers for ECDSA (P-256/P-384/P-521) and
//! Ed25519, plus the composite signer/verifier factories.

mod ecdsa_signer_key_manager;
mod ecdsa_verifier_key_manager;
mod ed25519_signer_key_manager;
mod ed25519_verifier_key_manager;
pub mod signature_key_templates;
mod signer_factory;
pub mod subtle;
mod verifier_factory;

pub use signature_key_templates::*;

use std::sync::Arc;
use tink::{Signer, TinkError, Verifier};

pub const ECDSA_SIGNER_TYPE_URL: &str = "type.googleapis.com/google.crypto.tink.EcdsaPrivateKey";
pub const ECDSA_SIGNER_KEY_VERSION: u32 = 0;

pub const ECDSA_VERIFIER_TYPE_URL: &str = "type.googleapis.com/google.crypto.tink.EcdsaPublicKey";
pub const ECDSA_VERIFIER_KEY_VERSION: u32 = 0;

pub const ED25519_SIGNER_TYPE_URL: &str =
    "type.googleapis.com/google.crypto.tink.Ed25519PrivateKey";
pub const ED25519_SIGNER_KEY_VERSION: u32 = 0;

pub const ED25519_VERIFIER_TYPE_URL: &str =
    "type.googleapis.com/google.crypto.tink.Ed25519PublicKey";
pub const ED25519_VERIFIER_KEY_VERSION: u32 = 0;

/// Register every signature key manager provided by this crate with the
/// global registry.
pub fn init() -> Result<(), TinkError> {
    tink::registry::register_key_manager(Arc::new(
        ecdsa_signer_key_manager::EcdsaSignerKeyManager::default(),
    ))?;
    tink::registry::register_key_manager(Arc::new(
        ecdsa_verifier_key_manager::EcdsaVerifierKeyManager::default(),
    ))?;
    tink::registry::register_key_manager(Arc::new(
        ed25519_signer_key_manager::Ed25519SignerKeyManager::default(),
    ))?;
    tink::registry::register_key_manager(Arc::new(
        ed25519_verifier_key_manager::Ed25519VerifierKeyManager::default(),
    ))?;
    Ok(())
}

/// Build a composite [`Signer`] out of all the primitives in `handle`.
pub fn new_signer(handle: &tink::keyset::Handle) -> Result<Arc<dyn Signer>, TinkError> {
    let ps = handle.primitives()?;
    signer_factory::new_signer(ps)
}

/// Build a composite [`Verifier`] out of all the primitives in `handle`.
pub fn new_verifier(handle: &tink::keyset::Handle) -> Result<Arc<dyn Verifier>, TinkError> {
    let ps = handle.primitives()?;
    verifier_factory::new_verifier(ps)
}
