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

//! Composite [`Signer`] built from a [`PrimitiveSet`]: signing always uses
//! the primary key and prepends its prefix, adding the legacy compat byte
//! to the signed data when the primary is LEGACY-prefixed.

use std::sync::Arc;
use tink::primitiveset::PrimitiveSet;
use tink::proto::OutputPrefixType;
use tink::{cryptofmt, Signer, TinkError};

struct WrappedSigner {
    ps: PrimitiveSet,
}

pub fn new_signer(ps: PrimitiveSet) -> Result<Arc<dyn Signer>, TinkError> {
    if ps.primary().is_none() {
        return Err("signer factory: primary key not found".into());
    }
    Ok(Arc::new(WrappedSigner { ps }))
}

impl Signer for WrappedSigner {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, TinkError> {
        let primary = self
            .ps
            .primary()
            .ok_or_else(|| TinkError::new("signer factory: no primary"))?;
        let signer = primary.primitive.as_signer()?;
        let signed_data = if primary.prefix_type == OutputPrefixType::Legacy {
            let mut v = data.to_vec();
            v.push(cryptofmt::LEGACY_COMPAT_BYTE);
            v
        } else {
            data.to_vec()
        };
        let sig = signer.sign(&signed_data)?;
        let mut out = primary.prefix.clone();
        out.extend_from_slice(&sig);
        Ok(out)
    }
}
