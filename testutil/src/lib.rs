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

//! Helpers shared by the test suites of every crate in this workspace:
//! fixture keys and keysets, dummy primitives for registry/factory tests,
//! and the statistical randomness checks used by AEAD/MAC tests.

mod constant;
pub use constant::*;

use rand::{thread_rng, Rng};
use std::convert::TryInto;
use std::sync::Arc;
use tink::proto::{
    keyset::Key, key_data::KeyMaterialType, EcdsaKeyFormat, EcdsaParams, EcdsaPrivateKey,
    EcdsaPublicKey, EcPointFormat, EciesAeadDemParams, EciesAeadHkdfParams, EciesAeadHkdfPrivateKey,
    EciesAeadHkdfPublicKey, EciesHkdfKemParams, Ed25519PrivateKey, Ed25519PublicKey,
    EllipticCurveType, HashType, HmacKey, HmacKeyFormat, HmacParams, KeyData, KeyStatusType,
    KeyTemplate, Keyset, OutputPrefixType,
};
use tink::TinkError;

/// Fill a freshly allocated buffer of `size` bytes with random data.
pub fn get_random_bytes(size: usize) -> Vec<u8> {
    let mut data = vec![0u8; size];
    thread_rng().fill(&mut data[..]);
    data
}

/// Dummy [`tink::Aead`] that always fails — used to exercise factory error
/// paths without depending on a real cipher implementation.
#[derive(Debug, Default)]
pub struct DummyAead;

impl tink::Aead for DummyAead {
    fn encrypt(&self, _plaintext: &[u8], _associated_data: &[u8]) -> Result<Vec<u8>, TinkError> {
        Err("dummy aead: encrypt not implemented".into())
    }

    fn decrypt(&self, _ciphertext: &[u8], _associated_data: &[u8]) -> Result<Vec<u8>, TinkError> {
        Err("dummy aead: decrypt not implemented".into())
    }
}

/// Dummy [`tink::Mac`] whose tag is just `data ‖ name`, so tests can assert
/// which entry in a `PrimitiveSet` actually handled a call.
#[derive(Debug)]
pub struct DummyMac {
    pub name: String,
}

impl tink::Mac for DummyMac {
    fn compute_mac(&self, data: &[u8]) -> Result<Vec<u8>, TinkError> {
        let mut m = data.to_vec();
        m.extend_from_slice(self.name.as_bytes());
        Ok(m)
    }

    fn verify_mac(&self, mac: &[u8], data: &[u8]) -> Result<(), TinkError> {
        if mac == self.compute_mac(data)?.as_slice() {
            Ok(())
        } else {
            Err("dummy mac: verification failed".into())
        }
    }
}

/// Dummy [`tink::registry::KeyManager`] that always mints a [`DummyAead`].
#[derive(Debug, Default)]
pub struct DummyAeadKeyManager;

impl tink::registry::KeyManager for DummyAeadKeyManager {
    fn primitive(&self, _serialized_key: &[u8]) -> Result<tink::Primitive, TinkError> {
        Ok(tink::Primitive::Aead(Arc::new(DummyAead)))
    }

    fn new_key(&self, _serialized_key_format: &[u8]) -> Result<Vec<u8>, TinkError> {
        Err("dummy aead key manager: new_key not implemented".into())
    }

    fn new_key_data(&self, _serialized_key_format: &[u8]) -> Result<KeyData, TinkError> {
        Err("dummy aead key manager: new_key_data not implemented".into())
    }

    fn does_support(&self, type_url: &str) -> bool {
        type_url == self.type_url()
    }

    fn type_url(&self) -> &'static str {
        AES_GCM_TYPE_URL
    }
}

/// Dummy [`tink::registry::KmsClient`] that only recognizes the `"dummy"`
/// key URI and hands back a [`DummyAead`].
#[derive(Debug, Default)]
pub struct DummyKmsClient;

impl tink::registry::KmsClient for DummyKmsClient {
    fn supported(&self, key_uri: &str) -> bool {
        key_uri == "dummy"
    }

    fn get_aead(&self, _key_uri: &str) -> Result<Arc<dyn tink::Aead>, TinkError> {
        Ok(Arc::new(DummyAead))
    }
}

/// Serialize a protobuf message, panicking on failure (this is test-only
/// code operating on messages this crate builds itself).
pub fn proto_encode<T: prost::Message>(msg: &T) -> Vec<u8> {
    let mut data = Vec::new();
    msg.encode(&mut data).expect("failed to encode proto message");
    data
}

/// Build a [`KeyData`] wrapping an already-serialized key.
pub fn new_key_data(type_url: &str, value: &[u8], material_type: KeyMaterialType) -> KeyData {
    KeyData {
        type_url: type_url.to_string(),
        value: value.to_vec(),
        key_material_type: material_type as i32,
    }
}

/// Build a [`Key`] entry for a [`Keyset`].
pub fn new_key(key_data: &KeyData, status: KeyStatusType, key_id: u32, prefix_type: OutputPrefixType) -> Key {
    Key {
        key_data: Some(key_data.clone()),
        status: status as i32,
        key_id,
        output_prefix_type: prefix_type as i32,
    }
}

/// Build a [`Keyset`] out of already-built keys.
pub fn new_keyset(primary_key_id: u32, keys: Vec<Key>) -> Keyset {
    Keyset {
        primary_key_id,
        key: keys,
    }
}

/// Build a test [`Keyset`] with five entries sharing the same `key_data`:
/// the enabled primary (at the requested prefix type) plus one entry each
/// at RAW, LEGACY, TINK and CRUNCHY — useful for exercising a factory's
/// prefix-dispatch logic against every combination in one keyset.
pub fn new_test_keyset(key_data: KeyData, primary_output_prefix_type: OutputPrefixType) -> Keyset {
    let primary_key = new_key(&key_data, KeyStatusType::Enabled, 42, primary_output_prefix_type);
    let raw_key = new_key(&key_data, KeyStatusType::Enabled, 43, OutputPrefixType::Raw);
    let legacy_key = new_key(&key_data, KeyStatusType::Enabled, 44, OutputPrefixType::Legacy);
    let tink_key = new_key(&key_data, KeyStatusType::Enabled, 45, OutputPrefixType::Tink);
    let crunchy_key = new_key(&key_data, KeyStatusType::Enabled, 46, OutputPrefixType::Crunchy);
    let primary_key_id = primary_key.key_id;
    new_keyset(
        primary_key_id,
        vec![primary_key, raw_key, legacy_key, tink_key, crunchy_key],
    )
}

/// Build a randomly keyed [`tink::proto::AesGcmKey`].
pub fn new_aes_gcm_key(key_version: u32, key_size: u32) -> tink::proto::AesGcmKey {
    tink::proto::AesGcmKey {
        version: key_version,
        key_value: get_random_bytes(key_size.try_into().unwrap()),
    }
}

/// Build a [`KeyData`] wrapping a randomly keyed AES-GCM key.
pub fn new_aes_gcm_key_data(key_size: u32) -> KeyData {
    let key = new_aes_gcm_key(AES_GCM_KEY_VERSION, key_size);
    new_key_data(AES_GCM_TYPE_URL, &proto_encode(&key), KeyMaterialType::Symmetric)
}

/// Build an [`tink::proto::AesGcmKeyFormat`] requesting `key_size` bytes.
pub fn new_aes_gcm_key_format(key_size: u32) -> tink::proto::AesGcmKeyFormat {
    tink::proto::AesGcmKeyFormat {
        key_size,
        version: AES_GCM_KEY_VERSION,
    }
}

/// Build a test [`Keyset`] containing one [`tink::proto::AesGcmKey`].
pub fn new_test_aes_gcm_keyset(primary_output_prefix_type: OutputPrefixType) -> Keyset {
    new_test_keyset(new_aes_gcm_key_data(16), primary_output_prefix_type)
}

/// Build a randomly keyed [`tink::proto::AesSivKey`].
pub fn new_aes_siv_key() -> tink::proto::AesSivKey {
    tink::proto::AesSivKey {
        version: AES_SIV_KEY_VERSION,
        key_value: get_random_bytes(AES_SIV_KEY_SIZE),
    }
}

/// Build a test [`Keyset`] containing one [`tink::proto::AesSivKey`].
pub fn new_test_aes_siv_keyset(primary_output_prefix_type: OutputPrefixType) -> Keyset {
    let key = new_aes_siv_key();
    let key_data = new_key_data(AES_SIV_TYPE_URL, &proto_encode(&key), KeyMaterialType::Symmetric);
    new_test_keyset(key_data, primary_output_prefix_type)
}

/// Build [`HmacParams`] for the given hash and tag size.
pub fn new_hmac_params(hash_type: HashType, tag_size: u32) -> HmacParams {
    HmacParams {
        hash: hash_type as i32,
        tag_size,
    }
}

/// Build a randomly keyed [`HmacKey`].
pub fn new_hmac_key(hash_type: HashType, tag_size: u32) -> HmacKey {
    HmacKey {
        version: HMAC_KEY_VERSION,
        params: Some(new_hmac_params(hash_type, tag_size)),
        key_value: get_random_bytes(20),
    }
}

/// Build an [`HmacKeyFormat`] for the given hash and tag size.
pub fn new_hmac_key_format(hash_type: HashType, tag_size: u32) -> HmacKeyFormat {
    HmacKeyFormat {
        params: Some(new_hmac_params(hash_type, tag_size)),
        key_size: 32,
        version: HMAC_KEY_VERSION,
    }
}

/// Build a [`KeyData`] wrapping a randomly keyed HMAC key.
pub fn new_hmac_key_data(hash_type: HashType, tag_size: u32) -> KeyData {
    let key = new_hmac_key(hash_type, tag_size);
    new_key_data(HMAC_TYPE_URL, &proto_encode(&key), KeyMaterialType::Symmetric)
}

/// Build a test [`Keyset`] containing one [`HmacKey`].
pub fn new_test_hmac_keyset(tag_size: u32, primary_output_prefix_type: OutputPrefixType) -> Keyset {
    new_test_keyset(
        new_hmac_key_data(HashType::Sha256, tag_size),
        primary_output_prefix_type,
    )
}

/// Build [`EcdsaParams`] for the given hash, curve and encoding.
pub fn new_ecdsa_params(
    hash_type: HashType,
    curve: EllipticCurveType,
    encoding: tink::proto::EcdsaSignatureEncoding,
) -> EcdsaParams {
    EcdsaParams {
        hash_type: hash_type as i32,
        curve: curve as i32,
        encoding: encoding as i32,
    }
}

/// Build an [`EcdsaKeyFormat`] wrapping the given params.
pub fn new_ecdsa_key_format(params: EcdsaParams) -> EcdsaKeyFormat {
    EcdsaKeyFormat { params: Some(params) }
}

/// Build an [`EcdsaPublicKey`] from already-known coordinates.
pub fn new_ecdsa_public_key(version: u32, params: EcdsaParams, x: &[u8], y: &[u8]) -> EcdsaPublicKey {
    EcdsaPublicKey {
        version,
        params: Some(params),
        x: x.to_vec(),
        y: y.to_vec(),
    }
}

/// Build an [`EcdsaPrivateKey`] from an already-known scalar.
pub fn new_ecdsa_private_key(version: u32, public_key: EcdsaPublicKey, key_value: &[u8]) -> EcdsaPrivateKey {
    EcdsaPrivateKey {
        version,
        public_key: Some(public_key),
        key_value: key_value.to_vec(),
    }
}

/// Build an [`Ed25519PublicKey`] from an already-known key.
pub fn new_ed25519_public_key(key_value: &[u8]) -> Ed25519PublicKey {
    Ed25519PublicKey {
        version: ED25519_SIGNER_KEY_VERSION,
        key_value: key_value.to_vec(),
    }
}

/// Build an [`Ed25519PrivateKey`] from an already-known seed and public key.
pub fn new_ed25519_private_key(public_key: Ed25519PublicKey, key_value: &[u8]) -> Ed25519PrivateKey {
    Ed25519PrivateKey {
        version: ED25519_SIGNER_KEY_VERSION,
        public_key: Some(public_key),
        key_value: key_value.to_vec(),
    }
}

/// Build an [`EciesAeadHkdfPublicKey`] with the given parameters.
pub fn new_ecies_aead_hkdf_public_key(
    curve: EllipticCurveType,
    hash: HashType,
    point_format: EcPointFormat,
    dem_key_template: KeyTemplate,
    x: &[u8],
    y: &[u8],
    salt: &[u8],
) -> EciesAeadHkdfPublicKey {
    EciesAeadHkdfPublicKey {
        version: ECIES_AEAD_HKDF_PUBLIC_KEY_VERSION,
        params: Some(EciesAeadHkdfParams {
            kem_params: Some(EciesHkdfKemParams {
                curve_type: curve as i32,
                hkdf_hash_type: hash as i32,
                hkdf_salt: salt.to_vec(),
            }),
            dem_params: Some(EciesAeadDemParams {
                aead_dem: Some(dem_key_template),
            }),
            ec_point_format: point_format as i32,
        }),
        x: x.to_vec(),
        y: y.to_vec(),
    }
}

/// Build an [`EciesAeadHkdfPrivateKey`] wrapping the given public key.
pub fn new_ecies_aead_hkdf_private_key(public_key: EciesAeadHkdfPublicKey, key_value: &[u8]) -> EciesAeadHkdfPrivateKey {
    EciesAeadHkdfPrivateKey {
        version: ECIES_AEAD_HKDF_PRIVATE_KEY_VERSION,
        public_key: Some(public_key),
        key_value: key_value.to_vec(),
    }
}

/// Every single-bit-flip, left-truncation and one-byte-append mutation of
/// `src`. Used to check that a codec rejects every perturbation of a valid
/// ciphertext/signature/tag instead of just the ones the happy-path test
/// picked.
pub fn generate_mutations(src: &[u8]) -> Vec<Vec<u8>> {
    let mut all = Vec::new();
    for i in 0..src.len() {
        for j in 0..8u8 {
            let mut n = src.to_vec();
            n[i] ^= 1 << j;
            all.push(n);
        }
    }
    for i in 0..src.len() {
        all.push(src[i..].to_vec());
    }
    let mut appended = src.to_vec();
    appended.push(0);
    all.push(appended);
    all
}

/// Z-test on a byte string for bits being uniformly distributed with
/// probability 1/2. Fails if the number of set bits is more than 10
/// standard deviations from the expected count. A weak randomness check on
/// its own, but useful to catch gross failures like all-zero output.
pub fn z_test_uniform_string(bytes: &[u8]) -> Result<(), TinkError> {
    let expected = (bytes.len() as f64) * 8.0 / 2.0;
    let stddev = ((bytes.len() as f64) * 8.0 / 4.0).sqrt();
    let num_set_bits: u32 = bytes.iter().map(|b| b.count_ones()).sum();
    if ((num_set_bits as f64) - expected).abs() < 10.0 * stddev {
        Ok(())
    } else {
        Err(format!(
            "z-test for uniformly distributed bits out of bounds: {} set bits, expected {}, 10 stddev = {}",
            num_set_bits,
            expected,
            10.0 * stddev
        )
        .into())
    }
}

/// Z-test on the XOR of two equal-length byte strings, to check they are
/// independent of one another.
pub fn z_test_crosscorrelation_uniform_strings(bytes1: &[u8], bytes2: &[u8]) -> Result<(), TinkError> {
    if bytes1.len() != bytes2.len() {
        return Err("z-test: strings are not of equal length".into());
    }
    let crossed: Vec<u8> = bytes1.iter().zip(bytes2).map(|(a, b)| a ^ b).collect();
    z_test_uniform_string(&crossed)
}

/// Generate a fresh ECDSA P-256/SHA-256/DER private key, for tests that
/// need real key material rather than a serialized fixture.
pub fn new_random_ecdsa_p256_private_key() -> EcdsaPrivateKey {
    let secret = p256::SecretKey::random(&mut rand::rngs::OsRng);
    let point = secret.public_key().to_encoded_point(false);
    let params = new_ecdsa_params(
        HashType::Sha256,
        EllipticCurveType::NistP256,
        tink::proto::EcdsaSignatureEncoding::Der,
    );
    let public_key = new_ecdsa_public_key(
        ECDSA_VERIFIER_KEY_VERSION,
        params,
        point.x().expect("P-256 point has an x-coordinate"),
        point.y().expect("P-256 point has a y-coordinate"),
    );
    new_ecdsa_private_key(ECDSA_SIGNER_KEY_VERSION, public_key, &secret.to_bytes())
}

/// Generate a fresh Ed25519 private key, for tests that need real key
/// material rather than a serialized fixture.
pub fn new_random_ed25519_private_key() -> Ed25519PrivateKey {
    let keypair = ed25519_dalek::Keypair::generate(&mut rand::rngs::OsRng {});
    let public_key = new_ed25519_public_key(&keypair.public.to_bytes());
    new_ed25519_private_key(public_key, &keypair.secret.to_bytes())
}

/// A fixed (not freshly generated) ECDSA P-256 scalar, for round-trip tests
/// that need the same key material on every run instead of
/// [`new_random_ecdsa_p256_private_key`]'s fresh one.
const FIXED_ECDSA_P256_SCALAR: [u8; 32] = [
    0xc9, 0xaf, 0xa9, 0xd8, 0x45, 0xba, 0x75, 0x16, 0x6b, 0x5c, 0x21, 0x57, 0x67, 0xb1, 0xd6, 0x93,
    0x4e, 0x50, 0xc3, 0xdb, 0x36, 0xe8, 0x9b, 0x12, 0x7b, 0x8a, 0x62, 0x2b, 0x12, 0x0f, 0x67, 0x21,
];

/// Build an ECDSA P-256/SHA-256/DER private key from a fixed scalar, so
/// repeated test runs sign with the same key instead of a new one every
/// time.
pub fn new_fixed_ecdsa_p256_private_key() -> EcdsaPrivateKey {
    let secret = p256::SecretKey::from_bytes(&FIXED_ECDSA_P256_SCALAR)
        .expect("fixed scalar is a valid P-256 private key");
    let point = secret.public_key().to_encoded_point(false);
    let params = new_ecdsa_params(
        HashType::Sha256,
        EllipticCurveType::NistP256,
        tink::proto::EcdsaSignatureEncoding::Der,
    );
    let public_key = new_ecdsa_public_key(
        ECDSA_VERIFIER_KEY_VERSION,
        params,
        point.x().expect("P-256 point has an x-coordinate"),
        point.y().expect("P-256 point has a y-coordinate"),
    );
    new_ecdsa_private_key(ECDSA_SIGNER_KEY_VERSION, public_key, &secret.to_bytes())
}

/// RFC 8032 §7.1 test vector 1's fixed Ed25519 seed, for round-trip tests
/// that need the same key material on every run instead of
/// [`new_random_ed25519_private_key`]'s fresh one.
const FIXED_ED25519_SEED: [u8; 32] = [
    0x9d, 0x61, 0xb1, 0x9d, 0xef, 0xfd, 0x5a, 0x60, 0xba, 0x84, 0x4a, 0xf4, 0x92, 0xec, 0x2c, 0xc4,
    0x44, 0x49, 0xc5, 0x69, 0x7b, 0x32, 0x69, 0x19, 0x70, 0x3b, 0xac, 0x03, 0x1c, 0xae, 0x7f, 0x60,
];

/// Build an Ed25519 private key from a fixed seed, so repeated test runs
/// sign with the same key instead of a new one every time.
pub fn new_fixed_ed25519_private_key() -> Ed25519PrivateKey {
    let secret = ed25519_dalek::SecretKey::from_bytes(&FIXED_ED25519_SEED)
        .expect("32-byte seed is always a valid Ed25519 secret key");
    let public: ed25519_dalek::PublicKey = (&secret).into();
    let public_key = new_ed25519_public_key(public.as_bytes());
    new_ed25519_private_key(public_key, &FIXED_ED25519_SEED)
}
