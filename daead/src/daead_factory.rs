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

//! Composite [`DeterministicAead`] built from a [`PrimitiveSet`]: the same
//! dispatch shape as the AEAD factory, with no legacy-byte logic.

use std::sync::Arc;
use tink::primitiveset::PrimitiveSet;
use tink::{cryptofmt, DeterministicAead, TinkError};

struct WrappedDaead {
    ps: PrimitiveSet,
}

pub fn new_daead(ps: PrimitiveSet) -> Result<Arc<dyn DeterministicAead>, TinkError> {
    if ps.primary().is_none() {
        return Err("daead factory: primary key not found".into());
    }
    Ok(Arc::new(WrappedDaead { ps }))
}

impl DeterministicAead for WrappedDaead {
    fn encrypt_deterministically(
        &self,
        plaintext: &[u8],
        associated_data: &[u8],
    ) -> Result<Vec<u8>, TinkError> {
        let primary = self
            .ps
            .primary()
            .ok_or_else(|| TinkError::new("daead factory: no primary"))?;
        let daead = primary.primitive.as_daead()?;
        let ct = daead.encrypt_deterministically(plaintext, associated_data)?;
        let mut out = primary.prefix.clone();
        out.extend_from_slice(&ct);
        Ok(out)
    }

    fn decrypt_deterministically(
        &self,
        ciphertext: &[u8],
        associated_data: &[u8],
    ) -> Result<Vec<u8>, TinkError> {
        if ciphertext.len() > cryptofmt::NON_RAW_PREFIX_SIZE {
            let prefix = &ciphertext[..cryptofmt::NON_RAW_PREFIX_SIZE];
            let tail = &ciphertext[cryptofmt::NON_RAW_PREFIX_SIZE..];
            for entry in self.ps.entries_for_prefix(prefix) {
                let daead = match entry.primitive.as_daead() {
                    Ok(d) => d,
                    Err(_) => continue,
                };
                if let Ok(pt) = daead.decrypt_deterministically(tail, associated_data) {
                    return Ok(pt);
                }
            }
        }
        for entry in self.ps.raw_entries() {
            let daead = match entry.primitive.as_daead() {
                Ok(d) => d,
                Err(_) => continue,
            };
            if let Ok(pt) = daead.decrypt_deterministically(ciphertext, associated_data) {
                return Ok(pt);
            }
        }
        Err("daead factory: decryption failed".into())
    }
}
