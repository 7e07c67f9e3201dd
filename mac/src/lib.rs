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

//! Message authentication codes: key manager, composite factory and key
//! templates for HMAC.

pub mod hmac_key_manager;
pub mod mac_factory;
pub mod mac_key_templates;
pub mod subtle;

pub use mac_key_templates::*;

use std::sync::Arc;
use tink::{Mac, TinkError};

/// Type URL for HMAC keys, as registered in the global registry.
pub const HMAC_TYPE_URL: &str = "type.googleapis.com/google.crypto.tink.HmacKey";
pub const HMAC_KEY_VERSION: u32 = 0;

/// Register the key managers provided by this crate with the global
/// registry. Must be called before any of this crate's key templates can be
/// used to build a [`tink::keyset::Handle`].
pub fn init() -> Result<(), TinkError> {
    tink::registry::register_key_manager(Arc::new(
        hmac_key_manager::HmacKeyManager::default(),
    ))
}

/// Build a composite [`Mac`] out of all the primitives in `handle`.
pub fn new(handle: &tink::keyset::Handle) -> Result<Arc<dyn Mac>, TinkError> {
    let ps = handle.primitives()?;
    mac_factory::new_mac(ps)
}
