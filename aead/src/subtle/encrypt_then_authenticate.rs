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

//! AES-CTR-HMAC-AEAD: encrypt-then-MAC composition of raw AES-CTR with an
//! HMAC tag that binds the IV and ciphertext, not just the plaintext.
//!
//! Wire format: `iv ‖ ctr_ciphertext ‖ tag`, where
//! `tag = HMAC(associated_data ‖ iv ‖ ctr_ciphertext)`.

use super::aes_ctr::AesCtr;
use subtle::ConstantTimeEq;
use tink::{Aead, TinkError};
use tink_mac::subtle::Hmac;

pub struct EncryptThenAuthenticate {
    ctr: AesCtr,
    mac: Hmac,
    tag_size: usize,
}

impl EncryptThenAuthenticate {
    pub fn new(ctr: AesCtr, mac: Hmac, tag_size: usize) -> EncryptThenAuthenticate {
        EncryptThenAuthenticate {
            ctr,
            mac,
            tag_size,
        }
    }
}

impl Aead for EncryptThenAuthenticate {
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>, TinkError> {
        let iv_and_ct = self.ctr.encrypt(plaintext)?;
        let mut to_auth = Vec::with_capacity(associated_data.len() + iv_and_ct.len());
        to_auth.extend_from_slice(associated_data);
        to_auth.extend_from_slice(&iv_and_ct);
        let full_tag = self.mac.compute_mac(&to_auth)?;
        if full_tag.len() < self.tag_size {
            return Err("EncryptThenAuthenticate: tag shorter than configured tag size".into());
        }
        let mut out = iv_and_ct;
        out.extend_from_slice(&full_tag[..self.tag_size]);
        Ok(out)
    }

    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>, TinkError> {
        if ciphertext.len() < self.ctr.iv_size() + self.tag_size {
            return Err("EncryptThenAuthenticate: ciphertext too short".into());
        }
        let split = ciphertext.len() - self.tag_size;
        let (iv_and_ct, tag) = ciphertext.split_at(split);

        let mut to_auth = Vec::with_capacity(associated_data.len() + iv_and_ct.len());
        to_auth.extend_from_slice(associated_data);
        to_auth.extend_from_slice(iv_and_ct);
        let full_tag = self.mac.compute_mac(&to_auth)?;
        if full_tag.len() < self.tag_size {
            return Err("EncryptThenAuthenticate: invalid ciphertext".into());
        }
        if full_tag[..self.tag_size].ct_eq(tag).unwrap_u8() != 1 {
            return Err("EncryptThenAuthenticate: invalid ciphertext".into());
        }

        self.ctr.decrypt(iv_and_ct)
    }
}
