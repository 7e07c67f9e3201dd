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

//! Composite [`HybridEncrypt`] built from a [`PrimitiveSet`]: always uses
//! the primary key and prepends its prefix, with no legacy compatibility
//! byte (the ciphertext is opaque bytes, not authenticated data).

use std::sync::Arc;
use tink::primitiveset::PrimitiveSet;
use tink::{HybridEncrypt, TinkError};

struct WrappedHybridEncrypt {
    ps: PrimitiveSet,
}

pub fn new_hybrid_encrypt(ps: PrimitiveSet) -> Result<Arc<dyn HybridEncrypt>, TinkError> {
    validate(&ps)?;
    Ok(Arc::new(WrappedHybridEncrypt { ps }))
}

fn validate(ps: &PrimitiveSet) -> Result<(), TinkError> {
    if ps.primary().is_none() {
        return Err("hybrid encrypt factory: primary key not found".into());
    }
    Ok(())
}

impl HybridEncrypt for WrappedHybridEncrypt {
    fn encrypt(&self, plaintext: &[u8], context_info: &[u8]) -> Result<Vec<u8>, TinkError> {
        let primary = self
            .ps
            .primary()
            .ok_or_else(|| TinkError::new("hybrid encrypt factory: no primary"))?;
        let encrypter = primary.primitive.as_hybrid_encrypt()?;
        let ct = encrypter.encrypt(plaintext, context_info)?;
        let mut out = primary.prefix.clone();
        out.extend_from_slice(&ct);
        Ok(out)
    }
}
