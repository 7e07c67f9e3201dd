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

//! HKDF key derivation, shared by the hybrid ECIES-AEAD-HKDF KEM and any
//! other primitive that needs to stretch keying material.

use crate::proto::HashType;
use crate::TinkError;
use hkdf::Hkdf;
use sha2::{Sha256, Sha384, Sha512};

/// Derive `out_len` bytes of keying material from `ikm` using HKDF with the
/// given hash, `salt` and `info`.
pub fn compute_hkdf(
    hash: HashType,
    ikm: &[u8],
    salt: &[u8],
    info: &[u8],
    out_len: usize,
) -> Result<Vec<u8>, TinkError> {
    let mut okm = vec![0u8; out_len];
    match hash {
        HashType::Sha256 => {
            let hk = Hkdf::<Sha256>::new(Some(salt), ikm);
            hk.expand(info, &mut okm)
                .map_err(|_| TinkError::new("hkdf: expand failed (output too long)"))?;
        }
        HashType::Sha384 => {
            let hk = Hkdf::<Sha384>::new(Some(salt), ikm);
            hk.expand(info, &mut okm)
                .map_err(|_| TinkError::new("hkdf: expand failed (output too long)"))?;
        }
        HashType::Sha512 => {
            let hk = Hkdf::<Sha512>::new(Some(salt), ikm);
            hk.expand(info, &mut okm)
                .map_err(|_| TinkError::new("hkdf: expand failed (output too long)"))?;
        }
        HashType::Sha1 => {
            use sha1::Sha1;
            let hk = Hkdf::<Sha1>::new(Some(salt), ikm);
            hk.expand(info, &mut okm)
                .map_err(|_| TinkError::new("hkdf: expand failed (output too long)"))?;
        }
        HashType::UnknownHash => return Err("hkdf: unknown hash type".into()),
    }
    Ok(okm)
}
