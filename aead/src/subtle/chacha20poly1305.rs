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

//! ChaCha20-Poly1305. Wire format is `nonce (12 bytes) ‖ ciphertext ‖ tag`.

use chacha20poly1305::aead::{generic_array::GenericArray, Aead as _, NewAead};
use tink::subtle::random::get_random_bytes;
use tink::{Aead, TinkError};

const KEY_SIZE: usize = 32;
const NONCE_SIZE: usize = 12;

#[derive(Clone)]
pub struct ChaCha20Poly1305 {
    cipher: chacha20poly1305::ChaCha20Poly1305,
}

impl ChaCha20Poly1305 {
    pub fn new(key: &[u8]) -> Result<ChaCha20Poly1305, TinkError> {
        if key.len() != KEY_SIZE {
            return Err(format!("ChaCha20Poly1305: invalid key size {}", key.len()).into());
        }
        Ok(ChaCha20Poly1305 {
            cipher: chacha20poly1305::ChaCha20Poly1305::new(GenericArray::from_slice(key)),
        })
    }
}

impl Aead for ChaCha20Poly1305 {
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>, TinkError> {
        let nonce_bytes = get_random_bytes(NONCE_SIZE);
        let nonce = GenericArray::from_slice(&nonce_bytes);
        let payload = chacha20poly1305::aead::Payload {
            msg: plaintext,
            aad: associated_data,
        };
        let ct = self
            .cipher
            .encrypt(nonce, payload)
            .map_err(|e| TinkError::new(&format!("ChaCha20Poly1305: encryption failed: {:?}", e)))?;
        let mut out = nonce_bytes;
        out.extend_from_slice(&ct);
        Ok(out)
    }

    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>, TinkError> {
        if ciphertext.len() < NONCE_SIZE {
            return Err("ChaCha20Poly1305: ciphertext too short".into());
        }
        let (nonce_bytes, ct) = ciphertext.split_at(NONCE_SIZE);
        let nonce = GenericArray::from_slice(nonce_bytes);
        let payload = chacha20poly1305::aead::Payload {
            msg: ct,
            aad: associated_data,
        };
        self.cipher
            .decrypt(nonce, payload)
            .map_err(|e| TinkError::new(&format!("ChaCha20Poly1305: decryption failed: {:?}", e)))
    }
}
