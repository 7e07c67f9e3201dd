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

//! HMAC, generic over the hash function, truncated to a configured tag
//! size on output.

use hmac::{Hmac as HmacImpl, Mac as HmacCrateMac, NewMac};
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;
use tink::proto::HashType;
use tink::{Mac, TinkError};
use zeroize::Zeroizing;

pub const MIN_KEY_SIZE_IN_BYTES: usize = 16;
pub const MIN_TAG_SIZE_IN_BYTES: usize = 10;

/// Maximum tag size (the underlying hash's full digest length) for each
/// supported hash.
pub fn max_tag_size(hash: HashType) -> Result<usize, TinkError> {
    match hash {
        HashType::Sha1 => Ok(20),
        HashType::Sha256 => Ok(32),
        HashType::Sha384 => Ok(48),
        HashType::Sha512 => Ok(64),
        HashType::UnknownHash => Err("Hmac: unknown hash type".into()),
    }
}

/// Validate HMAC key/tag parameters against the shared bounds used by both
/// the standalone HMAC primitive and the AES-CTR-HMAC-AEAD construction.
pub fn validate_hmac_params(hash: HashType, key_size: usize, tag_size: usize) -> Result<(), TinkError> {
    if key_size < MIN_KEY_SIZE_IN_BYTES {
        return Err(format!(
            "Hmac: key too short: got {} bytes, want at least {}",
            key_size, MIN_KEY_SIZE_IN_BYTES
        )
        .into());
    }
    let max = max_tag_size(hash)?;
    if tag_size < MIN_TAG_SIZE_IN_BYTES {
        return Err(format!(
            "Hmac: tag size {} smaller than minimum {}",
            tag_size, MIN_TAG_SIZE_IN_BYTES
        )
        .into());
    }
    if tag_size > max {
        return Err(format!(
            "Hmac: tag size {} larger than maximum {} for this hash",
            tag_size, max
        )
        .into());
    }
    Ok(())
}

pub struct Hmac {
    hash: HashType,
    key: Zeroizing<Vec<u8>>,
    tag_size: usize,
}

impl Hmac {
    pub fn new(hash: HashType, key: &[u8], tag_size: usize) -> Result<Hmac, TinkError> {
        validate_hmac_params(hash, key.len(), tag_size)?;
        Ok(Hmac {
            hash,
            key: Zeroizing::new(key.to_vec()),
            tag_size,
        })
    }

    fn full_tag(&self, data: &[u8]) -> Result<Vec<u8>, TinkError> {
        match self.hash {
            HashType::Sha1 => {
                let mut m = HmacImpl::<Sha1>::new_varkey(&self.key)
                    .map_err(|_| TinkError::new("Hmac: invalid key"))?;
                m.update(data);
                Ok(m.finalize().into_bytes().to_vec())
            }
            HashType::Sha256 => {
                let mut m = HmacImpl::<Sha256>::new_varkey(&self.key)
                    .map_err(|_| TinkError::new("Hmac: invalid key"))?;
                m.update(data);
                Ok(m.finalize().into_bytes().to_vec())
            }
            HashType::Sha384 => {
                let mut m = HmacImpl::<Sha384>::new_varkey(&self.key)
                    .map_err(|_| TinkError::new("Hmac: invalid key"))?;
                m.update(data);
                Ok(m.finalize().into_bytes().to_vec())
            }
            HashType::Sha512 => {
                let mut m = HmacImpl::<Sha512>::new_varkey(&self.key)
                    .map_err(|_| TinkError::new("Hmac: invalid key"))?;
                m.update(data);
                Ok(m.finalize().into_bytes().to_vec())
            }
            HashType::UnknownHash => Err("Hmac: unknown hash type".into()),
        }
    }
}

impl Mac for Hmac {
    fn compute_mac(&self, data: &[u8]) -> Result<Vec<u8>, TinkError> {
        let full = self.full_tag(data)?;
        Ok(full[..self.tag_size].to_vec())
    }

    fn verify_mac(&self, mac: &[u8], data: &[u8]) -> Result<(), TinkError> {
        if mac.len() != self.tag_size {
            return Err("Hmac: invalid mac".into());
        }
        let full = self.full_tag(data)?;
        if full[..self.tag_size].ct_eq(mac).unwrap_u8() == 1 {
            Ok(())
        } else {
            Err("Hmac: invalid mac".into())
        }
    }
}
