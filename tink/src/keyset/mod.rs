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

//! Keyset lifecycle: validation, the [`Handle`](handle::Handle) read-only
//! view, and a [`Manager`](manager::Manager) for building/rotating keysets.

pub mod handle;
#[cfg(feature = "insecure")]
pub mod insecure;
pub mod manager;

pub use handle::Handle;
pub use manager::Manager;

use crate::proto::{KeyData, Keyset, KeyStatusType};
use crate::TinkError;

/// Abstracts the source a [`Handle`] is read from: an encrypted keyset blob
/// plus associated data for `read`, or a cleartext keyset for
/// `read_with_no_secrets`. Persisting/parsing the bytes themselves is left
/// to the caller (e.g. via [`crate::proto`]'s `prost::Message` impls).
pub trait Reader {
    fn read(&self) -> Result<(Vec<u8>, Vec<u8>), TinkError>;
    fn read_with_no_secrets(&self) -> Result<Keyset, TinkError>;
}

/// The write-side counterpart of [`Reader`].
pub trait Writer {
    fn write(&mut self, encrypted: &[u8], associated_data: &[u8]) -> Result<(), TinkError>;
    fn write_with_no_secrets(&mut self, keyset: &Keyset) -> Result<(), TinkError>;
}

/// A [`Reader`]/[`Writer`] pair backed by an in-memory buffer, matching the
/// reference crate's in-process keyset-I/O test doubles.
#[derive(Default)]
pub struct BinaryKeyset {
    pub encrypted: Vec<u8>,
    pub associated_data: Vec<u8>,
    pub cleartext: Option<Keyset>,
}

impl Reader for BinaryKeyset {
    fn read(&self) -> Result<(Vec<u8>, Vec<u8>), TinkError> {
        Ok((self.encrypted.clone(), self.associated_data.clone()))
    }

    fn read_with_no_secrets(&self) -> Result<Keyset, TinkError> {
        self.cleartext
            .clone()
            .ok_or_else(|| TinkError::new("keyset: no cleartext keyset available"))
    }
}

impl Writer for BinaryKeyset {
    fn write(&mut self, encrypted: &[u8], associated_data: &[u8]) -> Result<(), TinkError> {
        self.encrypted = encrypted.to_vec();
        self.associated_data = associated_data.to_vec();
        Ok(())
    }

    fn write_with_no_secrets(&mut self, keyset: &Keyset) -> Result<(), TinkError> {
        self.cleartext = Some(keyset.clone());
        Ok(())
    }
}

/// A key manager's maximum supported key version is always 0 for every
/// algorithm currently in scope.
pub const MAX_KEY_VERSION: u32 = 0;

/// Validate that `version` does not exceed the manager's maximum supported
/// version.
pub fn validate_key_version(version: u32, max_version: u32) -> Result<(), TinkError> {
    if version > max_version {
        Err(format!(
            "key has version {} greater than max supported version {}",
            version, max_version
        )
        .into())
    } else {
        Ok(())
    }
}

/// Whether `key_data`'s material type marks it as secret (symmetric,
/// asymmetric-private, or unknown).
fn is_secret_material(key_data: &KeyData) -> bool {
    use crate::proto::key_data::KeyMaterialType;
    matches!(
        KeyMaterialType::from_i32(key_data.key_material_type),
        Some(KeyMaterialType::Symmetric)
            | Some(KeyMaterialType::AsymmetricPrivate)
            | Some(KeyMaterialType::UnknownKeymaterial)
            | None
    )
}

/// Whether any key in `keyset` holds secret material, regardless of status.
pub fn has_secrets(keyset: &Keyset) -> bool {
    keyset
        .key
        .iter()
        .filter_map(|k| k.key_data.as_ref())
        .any(is_secret_material)
}

/// Validate the structural invariants of a [`Keyset`]: the primary key id
/// must name an existing, ENABLED key, and at least one key must be ENABLED.
pub fn validate(keyset: &Keyset) -> Result<(), TinkError> {
    if keyset.key.is_empty() {
        return Err("keyset: empty keyset".into());
    }
    let primary = keyset
        .key
        .iter()
        .find(|k| k.key_id == keyset.primary_key_id);
    match primary {
        None => Err("keyset: primary key not found".into()),
        Some(k) if KeyStatusType::from_i32(k.status) != Some(KeyStatusType::Enabled) => {
            Err("keyset: primary key is not enabled".into())
        }
        Some(_) => {
            if keyset
                .key
                .iter()
                .any(|k| KeyStatusType::from_i32(k.status) == Some(KeyStatusType::Enabled))
            {
                Ok(())
            } else {
                Err("keyset: no enabled key".into())
            }
        }
    }
}
