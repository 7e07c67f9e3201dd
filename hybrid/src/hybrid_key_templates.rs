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

//! Pre-generated [`KeyTemplate`]s for ECIES-AEAD-HKDF hybrid encryption keys.

use prost::Message;
use tink::proto::{
    EcPointFormat, EciesAeadHkdfKeyFormat, EciesAeadHkdfParams, EciesAeadDemParams,
    EciesHkdfKemParams, EllipticCurveType, HashType, KeyTemplate, OutputPrefixType,
};

/// Return a [`KeyTemplate`] that generates an ECIES-AEAD-HKDF P-256 key with
/// HKDF-SHA256 and an AES-128-CTR-HMAC-SHA256 DEM.
pub fn ecies_hkdf_p256_ctr_hmac_sha256_aes128_ctr_hmac_sha256_key_template() -> KeyTemplate {
    create_ecies_aead_hkdf_key_template(
        EllipticCurveType::NistP256,
        HashType::Sha256,
        EcPointFormat::Uncompressed,
        tink_aead::aes128_ctr_hmac_sha256_key_template(),
        &[],
    )
}

/// Return a [`KeyTemplate`] that generates an ECIES-AEAD-HKDF P-256 key with
/// HKDF-SHA256 and an AES-128-GCM DEM.
pub fn ecies_hkdf_p256_ctr_hmac_sha256_aes128_gcm_key_template() -> KeyTemplate {
    create_ecies_aead_hkdf_key_template(
        EllipticCurveType::NistP256,
        HashType::Sha256,
        EcPointFormat::Uncompressed,
        tink_aead::aes128_gcm_key_template(),
        &[],
    )
}

/// Return a [`KeyTemplate`] that generates an ECIES-AEAD-HKDF P-256 key whose
/// serialized ephemeral public keys are compressed points (33 bytes instead
/// of 65), paired with an AES-128-GCM DEM.
pub fn ecies_hkdf_p256_compressed_key_template() -> KeyTemplate {
    create_ecies_aead_hkdf_key_template(
        EllipticCurveType::NistP256,
        HashType::Sha256,
        EcPointFormat::Compressed,
        tink_aead::aes128_gcm_key_template(),
        &[],
    )
}

fn create_ecies_aead_hkdf_key_template(
    curve: EllipticCurveType,
    hash: HashType,
    point_format: EcPointFormat,
    dem_key_template: KeyTemplate,
    salt: &[u8],
) -> KeyTemplate {
    let params = EciesAeadHkdfParams {
        kem_params: Some(EciesHkdfKemParams {
            curve_type: curve as i32,
            hkdf_hash_type: hash as i32,
            hkdf_salt: salt.to_vec(),
        }),
        dem_params: Some(EciesAeadDemParams {
            aead_dem: Some(dem_key_template),
        }),
        ec_point_format: point_format as i32,
    };
    let format = EciesAeadHkdfKeyFormat {
        params: Some(params),
    };
    let mut serialized_format = Vec::new();
    format.encode(&mut serialized_format).unwrap(); // safe: proto-encode
    KeyTemplate {
        value: serialized_format,
        type_url: crate::ECIES_AEAD_HKDF_PRIVATE_KEY_TYPE_URL.to_string(),
        output_prefix_type: OutputPrefixType::Tink as i32,
    }
}
