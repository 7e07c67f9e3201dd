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

//! Builds and mutates keysets one key at a time, for callers that need more
//! control than [`super::Handle::new`]'s single-key generation.

use super::Handle;
use crate::proto::{KeyStatusType, KeyTemplate, Keyset};
use crate::{registry, subtle, TinkError};

/// Accumulates keys into a [`Keyset`] under construction.
#[derive(Default)]
pub struct Manager {
    ks: Keyset,
}

impl Manager {
    pub fn new() -> Manager {
        Manager::default()
    }

    /// Add a new, disabled-by-default-unless-primary key generated from
    /// `template`; returns its fresh key id.
    pub fn add(&mut self, template: &KeyTemplate) -> Result<u32, TinkError> {
        let key_data = registry::new_key_data(template)?;
        let key_id = loop {
            let candidate = subtle::random::new_key_id();
            if !self.ks.key.iter().any(|k| k.key_id == candidate) {
                break candidate;
            }
        };
        self.ks.key.push(crate::proto::keyset::Key {
            key_data: Some(key_data),
            status: KeyStatusType::Enabled as i32,
            key_id,
            output_prefix_type: template.output_prefix_type,
        });
        if self.ks.key.len() == 1 {
            self.ks.primary_key_id = key_id;
        }
        Ok(key_id)
    }

    /// Designate `key_id` as the primary key. Fails if no such key exists.
    pub fn set_primary(&mut self, key_id: u32) -> Result<(), TinkError> {
        if !self.ks.key.iter().any(|k| k.key_id == key_id) {
            return Err(format!("keyset manager: no such key id {}", key_id).into());
        }
        self.ks.primary_key_id = key_id;
        Ok(())
    }

    /// Add a new key from `template` and immediately make it primary —
    /// the common "rotate" operation.
    pub fn rotate(&mut self, template: &KeyTemplate) -> Result<u32, TinkError> {
        let id = self.add(template)?;
        self.set_primary(id)?;
        Ok(id)
    }

    /// Disable (but do not remove) a key.
    pub fn disable(&mut self, key_id: u32) -> Result<(), TinkError> {
        if key_id == self.ks.primary_key_id {
            return Err("keyset manager: cannot disable the primary key".into());
        }
        let k = self
            .ks
            .key
            .iter_mut()
            .find(|k| k.key_id == key_id)
            .ok_or_else(|| TinkError::new("keyset manager: no such key id"))?;
        k.status = KeyStatusType::Disabled as i32;
        Ok(())
    }

    /// Consume the manager, producing a [`Handle`] over the accumulated
    /// keyset.
    pub fn handle(self) -> Result<Handle, TinkError> {
        super::validate(&self.ks)?;
        Ok(Handle::from_keyset(self.ks))
    }
}
