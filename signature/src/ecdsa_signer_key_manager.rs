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

//! Generates new `EcdsaPrivateKey` keys and produces `Signer` primitives,
//! with the `PrivateKeyManager` extension to derive the corresponding
//! public key data.

use crate::subtle;
use prost::Message;
use tink::proto::{
    EcdsaKeyFormat, EcdsaPrivateKey, EcdsaPublicKey, EllipticCurveType, HashType, KeyData,
};
use tink::registry::{KeyManager, PrivateKeyManager};
use tink::{Primitive, TinkError};

#[derive(Default)]
pub struct EcdsaSignerKeyManager;

impl KeyManager for EcdsaSignerKeyManager {
    fn primitive(&self, serialized_key: &[u8]) -> Result<Primitive, TinkError> {
        if serialized_key.is_empty() {
            return Err("EcdsaSignerKeyManager: invalid key".into());
        }
        let key = EcdsaPrivateKey::decode(serialized_key)
            .map_err(|e| tink::utils::wrap_err("EcdsaSignerKeyManager: invalid key", e))?;
        validate_key(&key)?;
        let public_key = key
            .public_key
            .as_ref()
            .ok_or_else(|| TinkError::new("EcdsaSignerKeyManager: missing public key"))?;
        let params = public_key
            .params
            .as_ref()
            .ok_or_else(|| TinkError::new("EcdsaSignerKeyManager: missing params"))?;
        let (hash, curve, encoding) = parse_params(params)?;
        let signer = subtle::EcdsaSigner::new(hash, curve, encoding, &key.key_value)
            .map_err(|e| TinkError::new(&format!("EcdsaSignerKeyManager: {}", e)))?;
        Ok(Primitive::Signer(std::sync::Arc::new(signer)))
    }

    fn new_key(&self, serialized_key_format: &[u8]) -> Result<Vec<u8>, TinkError> {
        let format = EcdsaKeyFormat::decode(serialized_key_format)
            .map_err(|e| tink::utils::wrap_err("EcdsaSignerKeyManager: invalid key format", e))?;
        let params = format
            .params
            .as_ref()
            .ok_or_else(|| TinkError::new("EcdsaSignerKeyManager: missing params"))?;
        let (hash, curve, encoding) = parse_params(params)?;
        subtle::validate_ecdsa_params(hash, curve, encoding)
            .map_err(|e| TinkError::new(&format!("EcdsaSignerKeyManager: {}", e)))?;

        let (secret_scalar, x, y) = generate_key_pair(curve)?;
        let public_key = EcdsaPublicKey {
            version: crate::ECDSA_SIGNER_KEY_VERSION,
            params: Some(params.clone()),
            x,
            y,
        };
        let private_key = EcdsaPrivateKey {
            version: crate::ECDSA_SIGNER_KEY_VERSION,
            public_key: Some(public_key),
            key_value: secret_scalar,
        };
        let mut out = Vec::new();
        private_key
            .encode(&mut out)
            .map_err(|e| tink::utils::wrap_err("EcdsaSignerKeyManager: encoding failed", e))?;
        Ok(out)
    }

    fn new_key_data(&self, serialized_key_format: &[u8]) -> Result<KeyData, TinkError> {
        let serialized_key = self.new_key(serialized_key_format)?;
        Ok(KeyData {
            type_url: crate::ECDSA_SIGNER_TYPE_URL.to_string(),
            value: serialized_key,
            key_material_type: tink::proto::key_data::KeyMaterialType::AsymmetricPrivate as i32,
        })
    }

    fn does_support(&self, type_url: &str) -> bool {
        type_url == crate::ECDSA_SIGNER_TYPE_URL
    }

    fn type_url(&self) -> &'static str {
        crate::ECDSA_SIGNER_TYPE_URL
    }

    fn as_private_key_manager(&self) -> Option<&dyn PrivateKeyManager> {
        Some(self)
    }
}

impl PrivateKeyManager for EcdsaSignerKeyManager {
    fn public_key_data(&self, serialized_priv_key: &[u8]) -> Result<KeyData, TinkError> {
        let priv_key = EcdsaPrivateKey::decode(serialized_priv_key)
            .map_err(|e| tink::utils::wrap_err("EcdsaSignerKeyManager: invalid key", e))?;
        let public_key = priv_key
            .public_key
            .ok_or_else(|| TinkError::new("EcdsaSignerKeyManager: missing public key"))?;
        let mut out = Vec::new();
        public_key
            .encode(&mut out)
            .map_err(|e| tink::utils::wrap_err("EcdsaSignerKeyManager: encoding failed", e))?;
        Ok(KeyData {
            type_url: crate::ECDSA_VERIFIER_TYPE_URL.to_string(),
            value: out,
            key_material_type: tink::proto::key_data::KeyMaterialType::AsymmetricPublic as i32,
        })
    }
}

fn parse_params(
    params: &tink::proto::EcdsaParams,
) -> Result<
    (
        HashType,
        EllipticCurveType,
        tink::proto::EcdsaSignatureEncoding,
    ),
    TinkError,
> {
    let hash = HashType::from_i32(params.hash_type)
        .ok_or_else(|| TinkError::new("EcdsaSignerKeyManager: unknown hash"))?;
    let curve = EllipticCurveType::from_i32(params.curve)
        .ok_or_else(|| TinkError::new("EcdsaSignerKeyManager: unknown curve"))?;
    let encoding = tink::proto::EcdsaSignatureEncoding::from_i32(params.encoding)
        .ok_or_else(|| TinkError::new("EcdsaSignerKeyManager: unknown encoding"))?;
    Ok((hash, curve, encoding))
}

fn validate_key(key: &EcdsaPrivateKey) -> Result<(), TinkError> {
    tink::keyset::validate_key_version(key.version, crate::ECDSA_SIGNER_KEY_VERSION)?;
    let public_key = key
        .public_key
        .as_ref()
        .ok_or_else(|| TinkError::new("EcdsaSignerKeyManager: missing public key"))?;
    let params = public_key
        .params
        .as_ref()
        .ok_or_else(|| TinkError::new("EcdsaSignerKeyManager: missing params"))?;
    let (hash, curve, encoding) = parse_params(params)?;
    subtle::validate_ecdsa_params(hash, curve, encoding)
}

fn generate_key_pair(curve: EllipticCurveType) -> Result<(Vec<u8>, Vec<u8>, Vec<u8>), TinkError> {
    match curve {
        EllipticCurveType::NistP256 => {
            let signing_key = p256::ecdsa::SigningKey::random(rand::rngs::OsRng);
            let point = p256::EncodedPoint::from(signing_key.verifying_key());
            let x = point
                .x()
                .ok_or_else(|| TinkError::new("EcdsaSignerKeyManager: missing x coordinate"))?;
            let y = point
                .y()
                .ok_or_else(|| TinkError::new("EcdsaSignerKeyManager: missing y coordinate"))?;
            Ok((signing_key.to_bytes().to_vec(), x.to_vec(), y.to_vec()))
        }
        EllipticCurveType::NistP384 => {
            let signing_key = p384::ecdsa::SigningKey::random(rand::rngs::OsRng);
            let point = p384::EncodedPoint::from(signing_key.verifying_key());
            let x = point
                .x()
                .ok_or_else(|| TinkError::new("EcdsaSignerKeyManager: missing x coordinate"))?;
            let y = point
                .y()
                .ok_or_else(|| TinkError::new("EcdsaSignerKeyManager: missing y coordinate"))?;
            Ok((signing_key.to_bytes().to_vec(), x.to_vec(), y.to_vec()))
        }
        EllipticCurveType::NistP521 => {
            let signing_key = p521::ecdsa::SigningKey::random(rand::rngs::OsRng);
            let point = p521::EncodedPoint::from(signing_key.verifying_key());
            let x = point
                .x()
                .ok_or_else(|| TinkError::new("EcdsaSignerKeyManager: missing x coordinate"))?;
            let y = point
                .y()
                .ok_or_else(|| TinkError::new("EcdsaSignerKeyManager: missing y coordinate"))?;
            Ok((signing_key.to_bytes().to_vec(), x.to_vec(), y.to_vec()))
        }
        _ => Err("EcdsaSignerKeyManager: unsupported curve".into()),
    }
}
