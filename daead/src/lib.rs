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

//! Deterministic AEAD: the AES-SIV-CMAC key manager (RFC 5297) and the
//! composite factory that dispatches across a keyset's entries.

mod aes_siv_key_manager;
pub mod daead_factory;
pub mod daead_key_templates;
pub mod subtle;

pub use daead_key_templates::*;

use std::sync::Arc;
use tink::{DeterministicAead, TinkError};

pub const AES_SIV_TYPE_URL: &str = "type.googleapis.com/google.crypto.tink.AesSivKey";
pub const AES_SIV_KEY_VERSION: u32 = 0;

/// Register every deterministic-AEAD key manager provided by this crate with
/// the global registry.
pub fn init() -> Result<(), TinkError> {
    tink::registry::register_key_manager(Arc::new(
        aes_siv_key_manager::AesSivKeyManager::default(),
    ))
}

/// Build a composite [`DeterministicAead`] out of all the primitives in
/// `handle`.
pub fn new(handle: &tink::keyset::Handle) -> Result<Arc<dyn DeterministicAead>, TinkError> {
    let ps = handle.primitives()?;
    daead_factory::new_daead(ps)
}
