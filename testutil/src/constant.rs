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

//! Type URLs and max key versions for every key type this workspace
//! supports, duplicated here (rather than re-exported from each algorithm
//! crate) so tests can check a key manager's own advertised `type_url()`
//! against an independent expectation.

// AEAD
pub const AES_CTR_HMAC_AEAD_KEY_VERSION: u32 = 0;
pub const AES_CTR_HMAC_AEAD_TYPE_URL: &str = "type.googleapis.com/google.crypto.tink.AesCtrHmacAeadKey";

pub const AES_GCM_KEY_VERSION: u32 = 0;
pub const AES_GCM_TYPE_URL: &str = "type.googleapis.com/google.crypto.tink.AesGcmKey";

pub const CHA_CHA20_POLY1305_KEY_VERSION: u32 = 0;
pub const CHA_CHA20_POLY1305_TYPE_URL: &str =
    "type.googleapis.com/google.crypto.tink.ChaCha20Poly1305Key";

pub const X_CHA_CHA20_POLY1305_KEY_VERSION: u32 = 0;
pub const X_CHA_CHA20_POLY1305_TYPE_URL: &str =
    "type.googleapis.com/google.crypto.tink.XChaCha20Poly1305Key";

pub const KMS_ENVELOPE_AEAD_KEY_VERSION: u32 = 0;
pub const KMS_ENVELOPE_AEAD_TYPE_URL: &str =
    "type.googleapis.com/google.crypto.tink.KmsEnvelopeAeadKey";

// Hybrid
pub const ECIES_AEAD_HKDF_PRIVATE_KEY_VERSION: u32 = 0;
pub const ECIES_AEAD_HKDF_PRIVATE_KEY_TYPE_URL: &str =
    "type.googleapis.com/google.crypto.tink.EciesAeadHkdfPrivateKey";

pub const ECIES_AEAD_HKDF_PUBLIC_KEY_VERSION: u32 = 0;
pub const ECIES_AEAD_HKDF_PUBLIC_KEY_TYPE_URL: &str =
    "type.googleapis.com/google.crypto.tink.EciesAeadHkdfPublicKey";

// Deterministic AEAD
pub const AES_SIV_KEY_VERSION: u32 = 0;
pub const AES_SIV_TYPE_URL: &str = "type.googleapis.com/google.crypto.tink.AesSivKey";
pub const AES_SIV_KEY_SIZE: usize = 64;

// MAC
pub const HMAC_KEY_VERSION: u32 = 0;
pub const HMAC_TYPE_URL: &str = "type.googleapis.com/google.crypto.tink.HmacKey";

// Digital signatures
pub const ECDSA_SIGNER_KEY_VERSION: u32 = 0;
pub const ECDSA_SIGNER_TYPE_URL: &str = "type.googleapis.com/google.crypto.tink.EcdsaPrivateKey";

pub const ECDSA_VERIFIER_KEY_VERSION: u32 = 0;
pub const ECDSA_VERIFIER_TYPE_URL: &str = "type.googleapis.com/google.crypto.tink.EcdsaPublicKey";

pub const ED25519_SIGNER_KEY_VERSION: u32 = 0;
pub const ED25519_SIGNER_TYPE_URL: &str =
    "type.googleapis.com/google.crypto.tink.Ed25519PrivateKey";

pub const ED25519_VERIFIER_KEY_VERSION: u32 = 0;
pub const ED25519_VERIFIER_TYPE_URL: &str =
    "type.googleapis.com/google.crypto.tink.Ed25519PublicKey";
