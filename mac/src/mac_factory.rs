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

//! Composite [`Mac`] built from a [`PrimitiveSet`].

use std::sync::Arc;
use tink::primitiveset::PrimitiveSet;
use tink::proto::OutputPrefixType;
use tink::{cryptofmt, Mac, TinkError};

struct WrappedMac {
    ps: PrimitiveSet,
}

pub fn new_mac(ps: PrimitiveSet) -> Result<Arc<dyn Mac>, TinkError> {
    if ps.primary().is_none() {
        return Err("mac factory: primary key not found".into());
    }
    Ok(Arc::new(WrappedMac { ps }))
}

fn with_legacy_byte(prefix_type: OutputPrefixType, data: &[u8]) -> Vec<u8> {
    if prefix_type == OutputPrefixType::Legacy {
        let mut v = data.to_vec();
        v.push(cryptofmt::LEGACY_COMPAT_BYTE);
        v
    } else {
        data.to_vec()
    }
}

impl Mac for WrappedMac {
    fn compute_mac(&self, data: &[u8]) -> Result<Vec<u8>, TinkError> {
        let primary = self
            .ps
            .primary()
            .ok_or_else(|| TinkError::new("mac factory: no primary"))?;
        let mac = primary.primitive.as_mac()?;
        let signed = with_legacy_byte(primary.prefix_type, data);
        let tag = mac.compute_mac(&signed)?;
        let mut out = primary.prefix.clone();
        out.extend_from_slice(&tag);
        Ok(out)
    }

    fn verify_mac(&self, mac_bytes: &[u8], data: &[u8]) -> Result<(), TinkError> {
        if mac_bytes.len() <= cryptofmt::NON_RAW_PREFIX_SIZE {
            return Err("mac factory: invalid mac".into());
        }
        let prefix = &mac_bytes[..cryptofmt::NON_RAW_PREFIX_SIZE];
        let tag = &mac_bytes[cryptofmt::NON_RAW_PREFIX_SIZE..];
        for entry in self.ps.entries_for_prefix(prefix) {
            let mac = match entry.primitive.as_mac() {
                Ok(m) => m,
                Err(_) => continue,
            };
            let signed = with_legacy_byte(entry.prefix_type, data);
            if mac.verify_mac(tag, &signed).is_ok() {
                return Ok(());
            }
        }
        for entry in self.ps.raw_entries() {
            let mac = match entry.primitive.as_mac() {
                Ok(m) => m,
                Err(_) => continue,
            };
            if mac.verify_mac(mac_bytes, data).is_ok() {
                return Ok(());
            }
        }
        Err("mac factory: invalid mac".into())
    }
}
