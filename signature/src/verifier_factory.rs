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

//! Composite [`Verifier`] built from a [`PrimitiveSet`].

use std::sync::Arc;
use tink::primitiveset::PrimitiveSet;
use tink::proto::OutputPrefixType;
use tink::{cryptofmt, TinkError, Verifier};

struct WrappedVerifier {
    ps: PrimitiveSet,
}

pub fn new_verifier(ps: PrimitiveSet) -> Result<Arc<dyn Verifier>, TinkError> {
    if ps.primary().is_none() {
        return Err("verifier factory: primary key not found".into());
    }
    Ok(Arc::new(WrappedVerifier { ps }))
}

impl Verifier for WrappedVerifier {
    fn verify(&self, signature: &[u8], data: &[u8]) -> Result<(), TinkError> {
        if signature.len() > cryptofmt::NON_RAW_PREFIX_SIZE {
            let prefix = &signature[..cryptofmt::NON_RAW_PREFIX_SIZE];
            let tail = &signature[cryptofmt::NON_RAW_PREFIX_SIZE..];
            for entry in self.ps.entries_for_prefix(prefix) {
                let verifier = match entry.primitive.as_verifier() {
                    Ok(v) => v,
                    Err(_) => continue,
                };
                let signed_data = if entry.prefix_type == OutputPrefixType::Legacy {
                    let mut v = data.to_vec();
                    v.push(cryptofmt::LEGACY_COMPAT_BYTE);
                    v
                } else {
                    data.to_vec()
                };
                if verifier.verify(tail, &signed_data).is_ok() {
                    return Ok(());
                }
            }
        }
        for entry in self.ps.raw_entries() {
            let verifier = match entry.primitive.as_verifier() {
                Ok(v) => v,
                Err(_) => continue,
            };
            if verifier.verify(signature, data).is_ok() {
                return Ok(());
            }
        }
        Err("verifier factory: invalid signature".into())
    }
}
