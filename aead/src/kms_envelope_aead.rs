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

//! Envelope encryption: a DEK is freshly generated per message, wrapped by
//! a remote [`tink::registry::KmsClient`]-backed AEAD, and the wire format
//! is `BE32(len(encrypted_dek)) ‖ encrypted_dek ‖ payload`.

use std::sync::Arc;
use tink::proto::KeyTemplate;
use tink::{Aead, TinkError};

const LEN_DEK: usize = 4;

pub struct KmsEnvelopeAead {
    dek_template: KeyTemplate,
    remote: Arc<dyn Aead>,
}

impl KmsEnvelopeAead {
    pub fn new(dek_template: KeyTemplate, remote: Arc<dyn Aead>) -> KmsEnvelopeAead {
        KmsEnvelopeAead {
            dek_template,
            remote,
        }
    }
}

impl Aead for KmsEnvelopeAead {
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>, TinkError> {
        let dek = tink::registry::new_key(&self.dek_template)?;
        let encrypted_dek = self.remote.encrypt(&dek, &[])?;
        let dek_primitive = tink::registry::primitive(&self.dek_template.type_url, &dek)?;
        let dek_aead = dek_primitive.as_aead()?;
        let payload = dek_aead.encrypt(plaintext, associated_data)?;

        let mut out = Vec::with_capacity(LEN_DEK + encrypted_dek.len() + payload.len());
        out.extend_from_slice(&(encrypted_dek.len() as u32).to_be_bytes());
        out.extend_from_slice(&encrypted_dek);
        out.extend_from_slice(&payload);
        Ok(out)
    }

    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>, TinkError> {
        if ciphertext.len() < LEN_DEK {
            return Err("kms envelope aead: invalid ciphertext".into());
        }
        let mut len_buf = [0u8; LEN_DEK];
        len_buf.copy_from_slice(&ciphertext[..LEN_DEK]);
        let encrypted_dek_size = u32::from_be_bytes(len_buf) as usize;
        if encrypted_dek_size == 0 || encrypted_dek_size > ciphertext.len() - LEN_DEK {
            return Err("kms envelope aead: invalid ciphertext".into());
        }

        let encrypted_dek = &ciphertext[LEN_DEK..LEN_DEK + encrypted_dek_size];
        let payload = &ciphertext[LEN_DEK + encrypted_dek_size..];

        let dek = self.remote.decrypt(encrypted_dek, &[])?;
        let dek_primitive = tink::registry::primitive(&self.dek_template.type_url, &dek)
            .map_err(|e| TinkError::new(&format!("kms envelope aead: {}", e)))?;
        let dek_aead = dek_primitive.as_aead()?;
        dek_aead.decrypt(payload, associated_data)
    }
}
