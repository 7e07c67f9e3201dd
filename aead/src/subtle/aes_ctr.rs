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

//! Raw AES-CTR, keyed at 128 or 256 bits. Not authenticated on its own —
//! only used as the encryption half of [`super::encrypt_then_authenticate`].

use ctr::cipher::{NewCipher, StreamCipher};
use ctr::Ctr128BE;
use tink::TinkError;
use zeroize::Zeroizing;

pub const MIN_IV_SIZE_IN_BYTES: usize = 12;

enum Variant {
    Aes128(Ctr128BE<aes::Aes128>),
    Aes256(Ctr128BE<aes::Aes256>),
}

/// `AesCtr` applies the AES-CTR keystream to a buffer in place.
pub struct AesCtr {
    key: Zeroizing<Vec<u8>>,
    iv_size: usize,
}

impl AesCtr {
    pub fn new(key: &[u8], iv_size: usize) -> Result<AesCtr, TinkError> {
        tink::subtle::validate_aes_key_size(key.len())?;
        if !(MIN_IV_SIZE_IN_BYTES..=16).contains(&iv_size) {
            return Err(format!(
                "AesCtr: invalid IV size {} (want [{}, 16])",
                iv_size, MIN_IV_SIZE_IN_BYTES
            )
            .into());
        }
        Ok(AesCtr {
            key: Zeroizing::new(key.to_vec()),
            iv_size,
        })
    }

    pub fn iv_size(&self) -> usize {
        self.iv_size
    }

    /// Encrypt (or decrypt — CTR is symmetric) `src` with a freshly chosen
    /// random IV, returning `iv ‖ transformed`.
    pub fn encrypt(&self, src: &[u8]) -> Result<Vec<u8>, TinkError> {
        let iv = tink::subtle::random::get_random_bytes(self.iv_size);
        let mut buf = src.to_vec();
        self.apply_keystream(&iv, &mut buf)?;
        let mut out = iv;
        out.extend_from_slice(&buf);
        Ok(out)
    }

    /// Decrypt `src`, whose first `iv_size` bytes are the IV.
    pub fn decrypt(&self, src: &[u8]) -> Result<Vec<u8>, TinkError> {
        if src.len() < self.iv_size {
            return Err("AesCtr: ciphertext too short".into());
        }
        let (iv, ct) = src.split_at(self.iv_size);
        let mut buf = ct.to_vec();
        self.apply_keystream(iv, &mut buf)?;
        Ok(buf)
    }

    fn apply_keystream(&self, iv: &[u8], buf: &mut [u8]) -> Result<(), TinkError> {
        let mut full_iv = [0u8; 16];
        full_iv[..iv.len()].copy_from_slice(iv);
        let mut cipher = match self.key.len() {
            16 => Variant::Aes128(Ctr128BE::new(
                generic_array::GenericArray::from_slice(&self.key),
                generic_array::GenericArray::from_slice(&full_iv),
            )),
            32 => Variant::Aes256(Ctr128BE::new(
                generic_array::GenericArray::from_slice(&self.key),
                generic_array::GenericArray::from_slice(&full_iv),
            )),
            l => return Err(format!("AesCtr: invalid key size {}", l).into()),
        };
        match &mut cipher {
            Variant::Aes128(c) => c.apply_keystream(buf),
            Variant::Aes256(c) => c.apply_keystream(buf),
        }
        Ok(())
    }
}

