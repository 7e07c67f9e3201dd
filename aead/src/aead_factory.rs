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

//! Composite [`Aead`] built from a [`PrimitiveSet`]: encrypt always uses the
//! primary key and prepends its prefix; decrypt tries matching non-raw
//! entries by prefix, then falls back to every raw entry, collapsing all
//! failures into a single uniform error.

use std::sync::Arc;
use tink::primitiveset::PrimitiveSet;
use tink::{cryptofmt, Aead, TinkError};

struct WrappedAead {
    ps: PrimitiveSet,
}

pub fn new_aead(ps: PrimitiveSet) -> Result<Arc<dyn Aead>, TinkError> {
    validate(&ps)?;
    Ok(Arc::new(WrappedAead { ps }))
}

fn validate(ps: &PrimitiveSet) -> Result<(), TinkError> {
    if ps.primary().is_none() {
        return Err("aead factory: primary key not found".into());
    }
    Ok(())
}

impl Aead for WrappedAead {
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>, TinkError> {
        let primary = self
            .ps
            .primary()
            .ok_or_else(|| TinkError::new("aead factory: no primary"))?;
        let aead = primary.primitive.as_aead()?;
        let ct = aead.encrypt(plaintext, associated_data)?;
        let mut out = primary.prefix.clone();
        out.extend_from_slice(&ct);
        Ok(out)
    }

    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>, TinkError> {
        if ciphertext.len() > cryptofmt::NON_RAW_PREFIX_SIZE {
            let prefix = &ciphertext[..cryptofmt::NON_RAW_PREFIX_SIZE];
            let tail = &ciphertext[cryptofmt::NON_RAW_PREFIX_SIZE..];
            for entry in self.ps.entries_for_prefix(prefix) {
                let aead = match entry.primitive.as_aead() {
                    Ok(a) => a,
                    Err(_) => continue,
                };
                if let Ok(pt) = aead.decrypt(tail, associated_data) {
                    return Ok(pt);
                }
            }
        }
        for entry in self.ps.raw_entries() {
            let aead = match entry.primitive.as_aead() {
                Ok(a) => a,
                Err(_) => continue,
            };
            if let Ok(pt) = aead.decrypt(ciphertext, associated_data) {
                return Ok(pt);
            }
        }
        Err("aead factory: decryption failed".into())
    }
}
