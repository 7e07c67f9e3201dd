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

use crate::subtle;
use ed25519_dalek::Keypair;
use prost::Message;
use tink::proto::{Ed25519PrivateKey, Ed25519PublicKey, KeyData};
use tink::registry::{KeyManager, PrivateKeyManager};
use tink::{Primitive, TinkError};

#[derive(Default)]
pub struct Ed25519SignerKeyManager;

impl KeyManager for Ed25519SignerKeyManager {
    fn primitive(&self, serialized_key: &[u8]) -> Result<Primitive, TinkError> {
        if serialized_key.is_empty() {
            return Err("Ed25519SignerKeyManager: invalid key".into());
        }
        let key = Ed25519PrivateKey::decode(serialized_key)
            .map_err(|e| tink::utils::wrap_err("Ed25519SignerKeyManager: invalid key", e))?;
        validate_key(&key)?;
        let signer = subtle::Ed25519Signer::new(&key.key_value)
            .map_err(|e| TinkError::new(&format!("Ed25519SignerKeyManager: {}", e)))?;
        Ok(Primitive::Signer(std::sync::Arc::new(signer)))
    }

    fn new_key(&self, _serialized_key_format: &[u8]) -> Result<Vec<u8>, TinkError> {
        let mut csprng = rand::rngs::OsRng {};
        let keypair = Keypair::generate(&mut csprng);
        let public_key = Ed25519PublicKey {
            version: crate::ED25519_SIGNER_KEY_VERSION,
            key_value: keypair.public.to_bytes().to_vec(),
        };
        let private_key = Ed25519PrivateKey {
            version: crate::ED25519_SIGNER_KEY_VERSION,
            public_key: Some(public_key),
            key_value: keypair.secret.to_bytes().to_vec(),
        };
        let mut out = Vec::new();
        private_key
            .encode(&mut out)
            .map_err(|e| tink::utils::wrap_err("Ed25519SignerKeyManager: encoding failed", e))?;
        Ok(out)
    }

    fn new_key_data(&self, serialized_key_format: &[u8]) -> Result<KeyData, TinkError> {
        let serialized_key = self.new_key(serialized_key_format)?;
        Ok(KeyData {
            type_url: crate::ED25519_SIGNER_TYPE_URL.to_string(),
            value: serialized_key,
            key_material_type: tink::proto::key_data::KeyMaterialType::AsymmetricPrivate as i32,
        })
    }

    fn does_support(&self, type_url: &str) -> bool {
        type_url == crate::ED25519_SIGNER_TYPE_URL
    }

    fn type_url(&self) -> &'static str {
        crate::ED25519_SIGNER_TYPE_URL
    }

    fn as_private_key_manager(&self) -> Option<&dyn PrivateKeyManager> {
        Some(self)
    }
}

impl PrivateKeyManager for Ed25519SignerKeyManager {
    fn public_key_data(&self, serialized_priv_key: &[u8]) -> Result<KeyData, TinkError> {
        let priv_key = Ed25519PrivateKey::decode(serialized_priv_key)
            .map_err(|e| tink::utils::wrap_err("Ed25519SignerKeyManager: invalid key", e))?;
        let public_key = priv_key
            .public_key
            .ok_or_else(|| TinkError::new("Ed25519SignerKeyManager: missing public key"))?;
        let mut out = Vec::new();
        public_key
            .encode(&mut out)
            .map_err(|e| tink::utils::wrap_err("Ed25519SignerKeyManager: encoding failed", e))?;
        Ok(KeyData {
            type_url: crate::ED25519_VERIFIER_TYPE_URL.to_string(),
            value: out,
            key_material_type: tink::proto::key_data::KeyMaterialType::AsymmetricPublic as i32,
        })
    }
}

fn validate_key(key: &Ed25519PrivateKey) -> Result<(), TinkError> {
    tink::keyset::validate_key_version(key.version, crate::ED25519_SIGNER_KEY_VERSION)?;
    if key.key_value.len() != subtle::ED25519_SECRET_KEY_SIZE {
        return Err("Ed25519SignerKeyManager: invalid key size".into());
    }
    Ok(())
}
