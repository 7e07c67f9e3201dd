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

//! AES-GCM, keyed at 128 or 256 bits. Wire format is `nonce (12 bytes) ‖
//! ciphertext ‖ tag`.

use aes_gcm::aead::{generic_array::GenericArray, Aead as _, NewAead};
use tink::subtle::random::get_random_bytes;
use tink::{Aead, TinkError};

const NONCE_SIZE: usize = 12;

#[derive(Clone)]
enum Key {
    Aes128(Box<aes_gcm::Aes128Gcm>),
    Aes256(Box<aes_gcm::Aes256Gcm>),
}

/// `AesGcm` implements the [`Aead`] trait for AES-GCM.
#[derive(Clone)]
pub struct AesGcm {
    key: Key,
}

impl AesGcm {
    pub fn new(key: &[u8]) -> Result<AesGcm, TinkError> {
        let key = match key.len() {
            16 => Key::Aes128(Box::new(aes_gcm::Aes128Gcm::new(GenericArray::from_slice(key)))),
            32 => Key::Aes256(Box::new(aes_gcm::Aes256Gcm::new(GenericArray::from_slice(key)))),
            l => return Err(format!("AesGcm: invalid key size {} (want 16 or 32)", l).into()),
        };
        Ok(AesGcm { key })
    }
}

impl Aead for AesGcm {
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>, TinkError> {
        let nonce_bytes = get_random_bytes(NONCE_SIZE);
        let nonce = GenericArray::from_slice(&nonce_bytes);
        let payload = aes_gcm::aead::Payload {
            msg: plaintext,
            aad: associated_data,
        };
        let ct = match &self.key {
            Key::Aes128(k) => k.encrypt(nonce, payload),
            Key::Aes256(k) => k.encrypt(nonce, payload),
        }
        .map_err(|e| TinkError::new(&format!("AesGcm: encryption failed: {:?}", e)))?;
        let mut out = nonce_bytes;
        out.extend_from_slice(&ct);
        Ok(out)
    }

    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>, TinkError> {
        if ciphertext.len() < NONCE_SIZE {
            return Err("AesGcm: ciphertext too short".into());
        }
        let (nonce_bytes, ct) = ciphertext.split_at(NONCE_SIZE);
        let nonce = GenericArray::from_slice(nonce_bytes);
        let payload = aes_gcm::aead::Payload {
            msg: ct,
            aad: associated_data,
        };
        match &self.key {
            Key::Aes128(k) => k.decrypt(nonce, payload),
            Key::Aes256(k) => k.decrypt(nonce, payload),
        }
        .map_err(|e| TinkError::new(&format!("AesGcm: decryption failed: {:?}", e)))
    }
}
