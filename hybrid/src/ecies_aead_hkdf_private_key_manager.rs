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

//! Generates new `EciesAeadHkdfPrivateKey` keys and produces `HybridDecrypt`
//! primitives, with the `PrivateKeyManager` extension to derive the
//! corresponding public key data.

use crate::subtle;
use prost::Message;
use tink::proto::{
    EciesAeadHkdfKeyFormat, EciesAeadHkdfParams, EciesAeadHkdfPrivateKey, EciesAeadHkdfPublicKey,
    EcPointFormat, EllipticCurveType, HashType, KeyData,
};
use tink::registry::{KeyManager, PrivateKeyManager};
use tink::{Primitive, TinkError};

#[derive(Default)]
pub struct EciesAeadHkdfPrivateKeyManager;

impl KeyManager for EciesAeadHkdfPrivateKeyManager {
    fn primitive(&self, serialized_key: &[u8]) -> Result<Primitive, TinkError> {
        if serialized_key.is_empty() {
            return Err("EciesAeadHkdfPrivateKeyManager: invalid key".into());
        }
        let key = EciesAeadHkdfPrivateKey::decode(serialized_key)
            .map_err(|e| tink::utils::wrap_err("EciesAeadHkdfPrivateKeyManager: invalid key", e))?;
        validate_key(&key)?;
        let public_key = key.public_key.as_ref().unwrap();
        let params = public_key.params.as_ref().unwrap();
        let (curve, hash, point_format, dem_helper) = parse_params(params)?;

        let decrypter = subtle::EciesAeadHkdfHybridDecrypt::new(
            curve,
            &key.key_value,
            params.kem_params.as_ref().unwrap().hkdf_salt.clone(),
            hash,
            point_format,
            dem_helper,
        )?;
        Ok(Primitive::HybridDecrypt(std::sync::Arc::new(decrypter)))
    }

    fn new_key(&self, serialized_key_format: &[u8]) -> Result<Vec<u8>, TinkError> {
        let format = EciesAeadHkdfKeyFormat::decode(serialized_key_format).map_err(|e| {
            tink::utils::wrap_err("EciesAeadHkdfPrivateKeyManager: invalid key format", e)
        })?;
        let params = format
            .params
            .ok_or_else(|| TinkError::new("EciesAeadHkdfPrivateKeyManager: missing params"))?;
        let (curve, _hash, _point_format, _dem_helper) = parse_params(&params)?;

        let (private_key, public_key) = subtle::ecdh::generate_key_pair(curve)?;
        let (x, y) = subtle::ecdh::coordinates(&public_key)?;
        let key_value = match &private_key {
            subtle::ecdh::EcdhPrivateKey::P256(sk) => sk.to_bytes().to_vec(),
            subtle::ecdh::EcdhPrivateKey::P384(sk) => sk.to_bytes().to_vec(),
            subtle::ecdh::EcdhPrivateKey::P521(sk) => sk.to_bytes().to_vec(),
        };

        let public_key = EciesAeadHkdfPublicKey {
            version: crate::ECIES_AEAD_HKDF_PRIVATE_KEY_VERSION,
            params: Some(params),
            x,
            y,
        };
        let private_key = EciesAeadHkdfPrivateKey {
            version: crate::ECIES_AEAD_HKDF_PRIVATE_KEY_VERSION,
            public_key: Some(public_key),
            key_value,
        };
        let mut out = Vec::new();
        private_key.encode(&mut out).map_err(|e| {
            tink::utils::wrap_err("EciesAeadHkdfPrivateKeyManager: encoding failed", e)
        })?;
        Ok(out)
    }

    fn new_key_data(&self, serialized_key_format: &[u8]) -> Result<KeyData, TinkError> {
        let serialized_key = self.new_key(serialized_key_format)?;
        Ok(KeyData {
            type_url: crate::ECIES_AEAD_HKDF_PRIVATE_KEY_TYPE_URL.to_string(),
            value: serialized_key,
            key_material_type: tink::proto::key_data::KeyMaterialType::AsymmetricPrivate as i32,
        })
    }

    fn does_support(&self, type_url: &str) -> bool {
        type_url == crate::ECIES_AEAD_HKDF_PRIVATE_KEY_TYPE_URL
    }

    fn type_url(&self) -> &'static str {
        crate::ECIES_AEAD_HKDF_PRIVATE_KEY_TYPE_URL
    }

    fn as_private_key_manager(&self) -> Option<&dyn PrivateKeyManager> {
        Some(self)
    }
}

impl PrivateKeyManager for EciesAeadHkdfPrivateKeyManager {
    fn public_key_data(&self, serialized_priv_key: &[u8]) -> Result<KeyData, TinkError> {
        let priv_key = EciesAeadHkdfPrivateKey::decode(serialized_priv_key)
            .map_err(|e| tink::utils::wrap_err("EciesAeadHkdfPrivateKeyManager: invalid key", e))?;
        let public_key = priv_key
            .public_key
            .ok_or_else(|| TinkError::new("EciesAeadHkdfPrivateKeyManager: missing public key"))?;
        let mut out = Vec::new();
        public_key.encode(&mut out).map_err(|e| {
            tink::utils::wrap_err("EciesAeadHkdfPrivateKeyManager: encoding failed", e)
        })?;
        Ok(KeyData {
            type_url: crate::ECIES_AEAD_HKDF_PUBLIC_KEY_TYPE_URL.to_string(),
            value: out,
            key_material_type: tink::proto::key_data::KeyMaterialType::AsymmetricPublic as i32,
        })
    }
}

/// Validate params and build the pieces every primitive constructed from
/// them needs: the curve, hash, point format and a ready DEM helper for the
/// configured AEAD template.
pub(crate) fn parse_params(
    params: &EciesAeadHkdfParams,
) -> Result<(EllipticCurveType, HashType, EcPointFormat, subtle::DemHelper), TinkError> {
    let kem_params = params
        .kem_params
        .as_ref()
        .ok_or_else(|| TinkError::new("EciesAeadHkdfPrivateKeyManager: missing kem_params"))?;
    let curve = EllipticCurveType::from_i32(kem_params.curve_type)
        .ok_or_else(|| TinkError::new("EciesAeadHkdfPrivateKeyManager: unknown curve"))?;
    let hash = HashType::from_i32(kem_params.hkdf_hash_type)
        .ok_or_else(|| TinkError::new("EciesAeadHkdfPrivateKeyManager: unknown hash"))?;
    let point_format = EcPointFormat::from_i32(params.ec_point_format)
        .ok_or_else(|| TinkError::new("EciesAeadHkdfPrivateKeyManager: unknown point format"))?;
    let dem_params = params
        .dem_params
        .as_ref()
        .ok_or_else(|| TinkError::new("EciesAeadHkdfPrivateKeyManager: missing dem_params"))?;
    let dem_template = dem_params
        .aead_dem
        .as_ref()
        .ok_or_else(|| TinkError::new("EciesAeadHkdfPrivateKeyManager: missing aead_dem"))?;
    let dem_helper = subtle::DemHelper::new(dem_template)?;
    Ok((curve, hash, point_format, dem_helper))
}

fn validate_key(key: &EciesAeadHkdfPrivateKey) -> Result<(), TinkError> {
    tink::keyset::validate_key_version(key.version, crate::ECIES_AEAD_HKDF_PRIVATE_KEY_VERSION)?;
    let public_key = key
        .public_key
        .as_ref()
        .ok_or_else(|| TinkError::new("EciesAeadHkdfPrivateKeyManager: missing public key"))?;
    let params = public_key
        .params
        .as_ref()
        .ok_or_else(|| TinkError::new("EciesAeadHkdfPrivateKeyManager: missing params"))?;
    parse_params(params).map(|_| ())
}
