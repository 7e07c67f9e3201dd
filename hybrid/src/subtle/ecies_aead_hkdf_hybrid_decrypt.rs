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

//! The decrypt half of ECIES-AEAD-HKDF: recover the ephemeral public key
//! from the KEM prefix, redo the ECDH and HKDF the encrypt side did, and
//! decrypt the remaining DEM payload.

use super::ecdh;
use super::ecies_aead_hkdf_dem_helper::DemHelper;
use tink::proto::{EcPointFormat, EllipticCurveType, HashType};
use tink::{HybridDecrypt, TinkError};

pub struct EciesAeadHkdfHybridDecrypt {
    curve: EllipticCurveType,
    private_key: ecdh::EcdhPrivateKey,
    hkdf_salt: Vec<u8>,
    hkdf_hash: HashType,
    point_format: EcPointFormat,
    dem_helper: DemHelper,
}

impl EciesAeadHkdfHybridDecrypt {
    pub fn new(
        curve: EllipticCurveType,
        key_value: &[u8],
        hkdf_salt: Vec<u8>,
        hkdf_hash: HashType,
        point_format: EcPointFormat,
        dem_helper: DemHelper,
    ) -> Result<EciesAeadHkdfHybridDecrypt, TinkError> {
        let private_key = ecdh::private_key_from_bytes(curve, key_value)?;
        Ok(EciesAeadHkdfHybridDecrypt {
            curve,
            private_key,
            hkdf_salt,
            hkdf_hash,
            point_format,
            dem_helper,
        })
    }
}

impl HybridDecrypt for EciesAeadHkdfHybridDecrypt {
    fn decrypt(&self, ciphertext: &[u8], context_info: &[u8]) -> Result<Vec<u8>, TinkError> {
        let kem_size = ecdh::kem_bytes_size(self.curve, self.point_format)?;
        if ciphertext.len() < kem_size {
            return Err("EciesAeadHkdfHybridDecrypt: ciphertext too short".into());
        }
        let (kem_bytes, payload) = ciphertext.split_at(kem_size);

        let ephemeral_public = ecdh::public_key_from_bytes(self.curve, kem_bytes)?;
        let shared_secret = ecdh::compute_shared_secret(&self.private_key, &ephemeral_public)?;

        let mut ikm = kem_bytes.to_vec();
        ikm.extend_from_slice(&shared_secret);
        let dem_key = tink::subtle::compute_hkdf(
            self.hkdf_hash,
            &ikm,
            &self.hkdf_salt,
            context_info,
            self.dem_helper.dem_key_size(),
        )?;

        let aead = self.dem_helper.get_aead(&dem_key)?;
        aead.decrypt(payload, &[])
    }
}
