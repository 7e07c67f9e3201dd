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

//! ECIES-AEAD-HKDF hybrid encryption: a fresh ephemeral EC key pair is
//! generated per message, ECDH'd against the recipient's public key, and
//! the shared secret (prefixed with the serialized ephemeral public key)
//! is stretched with HKDF into DEM key material. Wire format is
//! `kem_bytes ‖ dem_ciphertext`.

use super::ecdh;
use super::ecies_aead_hkdf_dem_helper::DemHelper;
use tink::proto::{EcPointFormat, EllipticCurveType, HashType};
use tink::{HybridEncrypt, TinkError};

pub struct EciesAeadHkdfHybridEncrypt {
    curve: EllipticCurveType,
    recipient_public_key: ecdh::EcdhPublicKey,
    hkdf_salt: Vec<u8>,
    hkdf_hash: HashType,
    point_format: EcPointFormat,
    dem_helper: DemHelper,
}

impl EciesAeadHkdfHybridEncrypt {
    pub fn new(
        curve: EllipticCurveType,
        x: &[u8],
        y: &[u8],
        hkdf_salt: Vec<u8>,
        hkdf_hash: HashType,
        point_format: EcPointFormat,
        dem_helper: DemHelper,
    ) -> Result<EciesAeadHkdfHybridEncrypt, TinkError> {
        let recipient_public_key = ecdh::public_key_from_coordinates(curve, x, y)?;
        Ok(EciesAeadHkdfHybridEncrypt {
            curve,
            recipient_public_key,
            hkdf_salt,
            hkdf_hash,
            point_format,
            dem_helper,
        })
    }
}

impl HybridEncrypt for EciesAeadHkdfHybridEncrypt {
    fn encrypt(&self, plaintext: &[u8], context_info: &[u8]) -> Result<Vec<u8>, TinkError> {
        let (ephemeral_private, ephemeral_public) = ecdh::generate_key_pair(self.curve)?;
        let kem_bytes = ecdh::encode_public_key(&ephemeral_public, self.point_format)?;
        let shared_secret = ecdh::compute_shared_secret(&ephemeral_private, &self.recipient_public_key)?;

        let mut ikm = kem_bytes.clone();
        ikm.extend_from_slice(&shared_secret);
        let dem_key = tink::subtle::compute_hkdf(
            self.hkdf_hash,
            &ikm,
            &self.hkdf_salt,
            context_info,
            self.dem_helper.dem_key_size(),
        )?;

        let aead = self.dem_helper.get_aead(&dem_key)?;
        let payload = aead.encrypt(plaintext, &[])?;

        let mut out = kem_bytes;
        out.extend_from_slice(&payload);
        Ok(out)
    }
}
