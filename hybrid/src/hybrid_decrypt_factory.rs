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

//! Composite [`HybridDecrypt`] built from a [`PrimitiveSet`]: tries matching
//! non-raw entries by prefix, then falls back to every raw entry against
//! the full ciphertext, collapsing all failures into a single uniform
//! error — the same dispatch as the AEAD factory.

use std::sync::Arc;
use tink::primitiveset::PrimitiveSet;
use tink::{cryptofmt, HybridDecrypt, TinkError};

struct WrappedHybridDecrypt {
    ps: PrimitiveSet,
}

pub fn new_hybrid_decrypt(ps: PrimitiveSet) -> Result<Arc<dyn HybridDecrypt>, TinkError> {
    validate(&ps)?;
    Ok(Arc::new(WrappedHybridDecrypt { ps }))
}

fn validate(ps: &PrimitiveSet) -> Result<(), TinkError> {
    if ps.primary().is_none() {
        return Err("hybrid decrypt factory: primary key not found".into());
    }
    Ok(())
}

impl HybridDecrypt for WrappedHybridDecrypt {
    fn decrypt(&self, ciphertext: &[u8], context_info: &[u8]) -> Result<Vec<u8>, TinkError> {
        if ciphertext.len() > cryptofmt::NON_RAW_PREFIX_SIZE {
            let prefix = &ciphertext[..cryptofmt::NON_RAW_PREFIX_SIZE];
            let tail = &ciphertext[cryptofmt::NON_RAW_PREFIX_SIZE..];
            for entry in self.ps.entries_for_prefix(prefix) {
                let decrypter = match entry.primitive.as_hybrid_decrypt() {
                    Ok(d) => d,
                    Err(_) => continue,
                };
                if let Ok(pt) = decrypter.decrypt(tail, context_info) {
                    return Ok(pt);
                }
            }
        }
        for entry in self.ps.raw_entries() {
            let decrypter = match entry.primitive.as_hybrid_decrypt() {
                Ok(d) => d,
                Err(_) => continue,
            };
            if let Ok(pt) = decrypter.decrypt(ciphertext, context_info) {
                return Ok(pt);
            }
        }
        Err("hybrid decrypt factory: decryption failed".into())
    }
}
