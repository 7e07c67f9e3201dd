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

//! Process-wide registry mapping key-type URLs to [`KeyManager`]s, plus the
//! ordered list of registered [`KmsClient`]s.
//!
//! Registration is write-once: re-registering an existing URL is always an
//! error, even if the manager instance is identical. Reads never block on
//! other reads; writes are serialized against everything.

use crate::proto::{KeyData, KeyTemplate};
use crate::{Primitive, TinkError};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// A key record as returned by `new_key`: the serialized key-format was
/// validated and a fresh serialized key was produced.
pub type KeyRecord = Vec<u8>;

/// Implemented by every per-algorithm key manager. Managers are registered
/// once (at process start, conventionally from a crate's `init()`) and are
/// thereafter invoked only through the registry.
pub trait KeyManager: Send + Sync {
    /// Instantiate the primitive for a serialized key.
    fn primitive(&self, serialized_key: &[u8]) -> Result<Primitive, TinkError>;
    /// Generate a new serialized key from a serialized key-format.
    fn new_key(&self, serialized_key_format: &[u8]) -> Result<KeyRecord, TinkError>;
    /// Generate a new `KeyData` from a serialized key-format.
    fn new_key_data(&self, serialized_key_format: &[u8]) -> Result<KeyData, TinkError>;
    /// Whether this manager can handle the given type URL.
    fn does_support(&self, type_url: &str) -> bool;
    /// This manager's type URL.
    fn type_url(&self) -> &'static str;
    /// Downcast to [`PrivateKeyManager`], for managers of asymmetric
    /// private keys. Trait objects can't be downcast automatically, so
    /// private-key managers override this to return `Some(self)`.
    fn as_private_key_manager(&self) -> Option<&dyn PrivateKeyManager> {
        None
    }
}

/// Implemented in addition to [`KeyManager`] by managers of asymmetric
/// private keys, to derive the corresponding public `KeyData`.
pub trait PrivateKeyManager: KeyManager {
    fn public_key_data(&self, serialized_priv_key: &[u8]) -> Result<KeyData, TinkError>;
}

/// A remote key-encryption service capable of wrapping/unwrapping DEKs.
pub trait KmsClient: Send + Sync {
    /// Whether this client handles key URIs with the given prefix.
    fn supported(&self, key_uri: &str) -> bool;
    /// Obtain an AEAD backed by the remote key identified by `key_uri`.
    fn get_aead(&self, key_uri: &str) -> Result<Arc<dyn crate::Aead>, TinkError>;
}

#[derive(Default)]
struct RegistryState {
    managers: HashMap<String, Arc<dyn KeyManager>>,
    kms_clients: Vec<Arc<dyn KmsClient>>,
}

lazy_static! {
    static ref REGISTRY: RwLock<RegistryState> = RwLock::new(RegistryState::default());
}

/// Register a key manager. Fails if a manager is already registered for
/// `km.type_url()` — registration is permanently write-once.
pub fn register_key_manager(km: Arc<dyn KeyManager>) -> Result<(), TinkError> {
    let mut state = REGISTRY
        .write()
        .map_err(|_| TinkError::new("registry: lock poisoned"))?;
    let url = km.type_url().to_string();
    if state.managers.contains_key(&url) {
        return Err(format!("registry: key manager for type url {} already registered", url).into());
    }
    state.managers.insert(url, km);
    Ok(())
}

/// Look up the key manager registered for `type_url`.
pub fn get_key_manager(type_url: &str) -> Result<Arc<dyn KeyManager>, TinkError> {
    let state = REGISTRY
        .read()
        .map_err(|_| TinkError::new("registry: lock poisoned"))?;
    state
        .managers
        .get(type_url)
        .cloned()
        .ok_or_else(|| format!("registry: unknown type url {}", type_url).into())
}

/// Generate a new `KeyData` from a `KeyTemplate`, dispatching to the
/// registered manager for the template's type URL.
pub fn new_key_data(template: &KeyTemplate) -> Result<KeyData, TinkError> {
    let km = get_key_manager(&template.type_url)?;
    km.new_key_data(&template.value)
}

/// Generate a new serialized key from a `KeyTemplate`.
pub fn new_key(template: &KeyTemplate) -> Result<KeyRecord, TinkError> {
    let km = get_key_manager(&template.type_url)?;
    km.new_key(&template.value)
}

/// Instantiate the primitive for `(type_url, serialized_key)`.
pub fn primitive(type_url: &str, serialized_key: &[u8]) -> Result<Primitive, TinkError> {
    if serialized_key.is_empty() {
        return Err("registry: empty serialized key".into());
    }
    let km = get_key_manager(type_url)?;
    km.primitive(serialized_key)
}

/// Instantiate the primitive embedded in a `KeyData`.
pub fn primitive_from_key_data(key_data: &KeyData) -> Result<Primitive, TinkError> {
    primitive(&key_data.type_url, &key_data.value)
}

/// Register a KMS client. Clients are tried in registration order by
/// [`get_kms_client`].
pub fn register_kms_client(client: Arc<dyn KmsClient>) -> Result<(), TinkError> {
    let mut state = REGISTRY
        .write()
        .map_err(|_| TinkError::new("registry: lock poisoned"))?;
    state.kms_clients.push(client);
    Ok(())
}

/// Return the first registered KMS client whose URI prefix matches `key_uri`.
pub fn get_kms_client(key_uri: &str) -> Result<Arc<dyn KmsClient>, TinkError> {
    let state = REGISTRY
        .read()
        .map_err(|_| TinkError::new("registry: lock poisoned"))?;
    state
        .kms_clients
        .iter()
        .find(|c| c.supported(key_uri))
        .cloned()
        .ok_or_else(|| format!("registry: no kms client for {}", key_uri).into())
}
