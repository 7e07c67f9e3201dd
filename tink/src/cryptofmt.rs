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

//! Computation of the 5-byte key-id prefix that precedes ciphertexts, MACs
//! and signatures produced by non-RAW keys.

use crate::proto::OutputPrefixType;
use crate::TinkError;

/// Size in bytes of a non-RAW prefix.
pub const NON_RAW_PREFIX_SIZE: usize = 5;

/// Tink-format prefix leading byte.
pub const TINK_START_BYTE: u8 = 0x01;

/// Legacy/Crunchy-format prefix leading byte.
pub const LEGACY_START_BYTE: u8 = 0x00;

/// The single byte appended to the signed/authenticated data (never the
/// ciphertext) when operating under a LEGACY-prefixed key.
pub const LEGACY_COMPAT_BYTE: u8 = 0x00;

/// Compute the 5-byte (or empty, for RAW) output prefix for a key id under
/// the given prefix type.
pub fn output_prefix(prefix_type: OutputPrefixType, key_id: u32) -> Result<Vec<u8>, TinkError> {
    match prefix_type {
        OutputPrefixType::Tink => {
            let mut v = Vec::with_capacity(NON_RAW_PREFIX_SIZE);
            v.push(TINK_START_BYTE);
            v.extend_from_slice(&key_id.to_be_bytes());
            Ok(v)
        }
        OutputPrefixType::Legacy | OutputPrefixType::Crunchy => {
            let mut v = Vec::with_capacity(NON_RAW_PREFIX_SIZE);
            v.push(LEGACY_START_BYTE);
            v.extend_from_slice(&key_id.to_be_bytes());
            Ok(v)
        }
        OutputPrefixType::Raw => Ok(Vec::new()),
        OutputPrefixType::UnknownPrefix => Err("unknown output prefix type".into()),
    }
}
