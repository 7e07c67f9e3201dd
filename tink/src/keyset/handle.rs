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

//! A read-only, shared view over a keyset.

use super::{Reader, Writer};
use crate::proto::key_data::KeyMaterialType;
use crate::proto::{KeyStatusType, KeyTemplate, Keyset, OutputPrefixType};
use crate::registry::KeyManager;
use crate::{primitiveset, registry, subtle, Aead, TinkError};
use prost::Message;
use std::fmt;
use std::sync::Arc;

/// Shared, immutable wrapper around a [`Keyset`]. Never exposes raw key
/// material directly; the only way to get at plaintext bytes is the
/// `insecure` module.
pub struct Handle {
    pub(crate) ks: Keyset,
}

impl Handle {
    pub(crate) fn from_keyset(ks: Keyset) -> Handle {
        Handle { ks }
    }

    /// Generate a fresh keyset containing a single, primary key produced
    /// from `template` via the registry.
    pub fn new(template: &KeyTemplate) -> Result<Handle, TinkError> {
        let key_data = registry::new_key_data(template)?;
        let key_id = subtle::random::new_key_id();
        let ks = Keyset {
            primary_key_id: key_id,
            key: vec![new_keyset_key(key_id, key_data, template.output_prefix_type)],
        };
        Ok(Handle::from_keyset(ks))
    }

    /// Read and decrypt a keyset using `wrapping_aead`.
    pub fn read(reader: &dyn Reader, wrapping_aead: &dyn Aead) -> Result<Handle, TinkError> {
        let (encrypted, associated_data) = reader.read()?;
        let serialized = wrapping_aead
            .decrypt(&encrypted, &associated_data)
            .map_err(|e| crate::utils::wrap_err("keyset: decryption failed", e))?;
        let ks = Keyset::decode(serialized.as_slice())
            .map_err(|e| crate::utils::wrap_err("keyset: invalid encoding", e))?;
        super::validate(&ks)?;
        Ok(Handle::from_keyset(ks))
    }

    /// Read an unencrypted keyset; fails if any key carries secret material.
    pub fn read_with_no_secrets(reader: &dyn Reader) -> Result<Handle, TinkError> {
        let ks = reader.read_with_no_secrets()?;
        if super::has_secrets(&ks) {
            return Err(
                "keyset: cannot load secret key material with read_with_no_secrets".into(),
            );
        }
        super::validate(&ks)?;
        Ok(Handle::from_keyset(ks))
    }

    /// Encrypt and write this keyset.
    pub fn write(&self, writer: &mut dyn Writer, wrapping_aead: &dyn Aead) -> Result<(), TinkError> {
        let encrypted = encrypt(&self.ks, wrapping_aead)?;
        writer.write(&encrypted, &[])
    }

    /// Write this keyset in cleartext; fails if any key carries secret
    /// material.
    pub fn write_with_no_secrets(&self, writer: &mut dyn Writer) -> Result<(), TinkError> {
        if self.has_secrets() {
            return Err(
                "keyset: cannot write secret key material with write_with_no_secrets".into(),
            );
        }
        writer.write_with_no_secrets(&self.ks)
    }

    /// Return a public-only handle derived from this (all-private-key)
    /// handle, by asking each key's manager for its public `KeyData`.
    pub fn public(&self) -> Result<Handle, TinkError> {
        let mut keys = Vec::with_capacity(self.ks.key.len());
        for k in &self.ks.key {
            let kd = k
                .key_data
                .as_ref()
                .ok_or_else(|| TinkError::new("keyset: key has no key data"))?;
            if KeyMaterialType::from_i32(kd.key_material_type)
                != Some(KeyMaterialType::AsymmetricPrivate)
            {
                return Err(
                    "keyset: public() requires every key to be an asymmetric private key".into(),
                );
            }
            let km = registry::get_key_manager(&kd.type_url)?;
            let priv_km = km
                .as_private_key_manager()
                .ok_or_else(|| TinkError::new("keyset: key manager is not a private key manager"))?;
            let pub_kd = priv_km.public_key_data(&kd.value)?;
            let mut nk = k.clone();
            nk.key_data = Some(pub_kd);
            keys.push(nk);
        }
        Ok(Handle::from_keyset(Keyset {
            primary_key_id: self.ks.primary_key_id,
            key: keys,
        }))
    }

    /// Mint a [`primitiveset::PrimitiveSet`] using the registry exclusively.
    pub fn primitives(&self) -> Result<primitiveset::PrimitiveSet, TinkError> {
        self.primitives_with_key_manager(None)
    }

    /// Mint a [`primitiveset::PrimitiveSet`], preferring `km` (if it
    /// supports a key's type URL) over the registry.
    pub fn primitives_with_key_manager(
        &self,
        km: Option<Arc<dyn KeyManager>>,
    ) -> Result<primitiveset::PrimitiveSet, TinkError> {
        let mut set = primitiveset::PrimitiveSet::new();
        let mut found_primary = false;
        for k in &self.ks.key {
            if KeyStatusType::from_i32(k.status) != Some(KeyStatusType::Enabled) {
                continue;
            }
            let kd = k
                .key_data
                .as_ref()
                .ok_or_else(|| TinkError::new("keyset: key has no key data"))?;
            let primitive = match &km {
                Some(m) if m.does_support(&kd.type_url) => m.primitive(&kd.value)?,
                _ => registry::primitive_from_key_data(kd)?,
            };
            let prefix_type = OutputPrefixType::from_i32(k.output_prefix_type)
                .ok_or_else(|| TinkError::new("keyset: invalid output prefix type"))?;
            let prefix = crate::cryptofmt::output_prefix(prefix_type, k.key_id)?;
            let entry = primitiveset::Entry {
                primitive,
                prefix,
                prefix_type,
                status: KeyStatusType::from_i32(k.status).unwrap(),
                type_url: kd.type_url.clone(),
                key_id: k.key_id,
            };
            if k.key_id == self.ks.primary_key_id {
                set.set_primary(entry.clone());
                found_primary = true;
            }
            set.add(entry);
        }
        if !found_primary {
            return Err("keyset: primary key not found among enabled keys".into());
        }
        Ok(set)
    }

    fn has_secrets(&self) -> bool {
        super::has_secrets(&self.ks)
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Handle")
            .field("keyset_info", &keyset_info(&self.ks))
            .finish()
    }
}

fn new_keyset_key(
    key_id: u32,
    key_data: crate::proto::KeyData,
    output_prefix_type: i32,
) -> crate::proto::keyset::Key {
    crate::proto::keyset::Key {
        key_data: Some(key_data),
        status: KeyStatusType::Enabled as i32,
        key_id,
        output_prefix_type,
    }
}

/// Non-secret summary of a keyset, safe to log or print.
pub fn keyset_info(ks: &Keyset) -> crate::proto::KeysetInfo {
    crate::proto::KeysetInfo {
        primary_key_id: ks.primary_key_id,
        key_info: ks
            .key
            .iter()
            .map(|k| crate::proto::keyset_info::KeyInfo {
                type_url: k
                    .key_data
                    .as_ref()
                    .map(|kd| kd.type_url.clone())
                    .unwrap_or_default(),
                output_prefix_type: k.output_prefix_type,
                key_id: k.key_id,
                status: k.status,
            })
            .collect(),
    }
}

/// Decrypt a keyset encrypted by [`Handle::write`], without constructing a
/// [`Handle`].
pub fn decrypt_keyset(
    encrypted_keyset: &[u8],
    associated_data: &[u8],
    wrapping_aead: &dyn Aead,
) -> Result<Keyset, TinkError> {
    let serialized = wrapping_aead.decrypt(encrypted_keyset, associated_data)?;
    Keyset::decode(serialized.as_slice())
        .map_err(|e| crate::utils::wrap_err("keyset: invalid encoding", e))
}

/// Encrypt a keyset with `wrapping_aead`, without constructing a [`Handle`].
pub fn encrypt(keyset: &Keyset, wrapping_aead: &dyn Aead) -> Result<Vec<u8>, TinkError> {
    let mut serialized = Vec::new();
    keyset
        .encode(&mut serialized)
        .map_err(|e| crate::utils::wrap_err("keyset: encoding failed", e))?;
    wrapping_aead.encrypt(&serialized, &[])
}
