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

//! ECDSA over NIST P-256/P-384/P-521, with hash chosen independently of the
//! curve's "native" digest size (P-384 and P-521 both pair with SHA-512, per
//! policy) and DER or IEEE-P1363 (fixed-width `r ‖ s`) signature encoding.

use ecdsa::signature::digest::Digest;
use ecdsa::signature::{DigestSigner, DigestVerifier};
use generic_array::GenericArray;
use sha2::{Sha256, Sha512};
use tink::proto::{EcdsaSignatureEncoding, EllipticCurveType, HashType};
use tink::{Signer, TinkError, Verifier};

/// Curve/hash pairing policy: P-256 signs with SHA-256, P-384 and P-521 both
/// sign with SHA-512.
pub fn validate_ecdsa_params(
    hash: HashType,
    curve: EllipticCurveType,
    encoding: EcdsaSignatureEncoding,
) -> Result<(), TinkError> {
    match (curve, hash) {
        (EllipticCurveType::NistP256, HashType::Sha256) => {}
        (EllipticCurveType::NistP384, HashType::Sha512) => {}
        (EllipticCurveType::NistP521, HashType::Sha512) => {}
        (c, h) => {
            return Err(format!("Ecdsa: invalid curve/hash pairing {:?}/{:?}", c, h).into())
        }
    }
    match encoding {
        EcdsaSignatureEncoding::Der | EcdsaSignatureEncoding::IeeeP1363 => Ok(()),
        EcdsaSignatureEncoding::UnknownEncoding => Err("Ecdsa: unknown signature encoding".into()),
    }
}

fn left_pad(bytes: &[u8], len: usize) -> Result<Vec<u8>, TinkError> {
    if bytes.len() > len {
        return Err("Ecdsa: coordinate too long".into());
    }
    let mut out = vec![0u8; len - bytes.len()];
    out.extend_from_slice(bytes);
    Ok(out)
}

enum SignKey {
    P256(p256::ecdsa::SigningKey),
    P384(p384::ecdsa::SigningKey),
    P521(p521::ecdsa::SigningKey),
}

/// `EcdsaSigner` implements the [`Signer`] trait for ECDSA.
pub struct EcdsaSigner {
    key: SignKey,
    encoding: EcdsaSignatureEncoding,
}

impl EcdsaSigner {
    pub fn new(
        hash: HashType,
        curve: EllipticCurveType,
        encoding: EcdsaSignatureEncoding,
        key_value: &[u8],
    ) -> Result<EcdsaSigner, TinkError> {
        validate_ecdsa_params(hash, curve, encoding)?;
        let key = match curve {
            EllipticCurveType::NistP256 => SignKey::P256(
                p256::ecdsa::SigningKey::from_bytes(key_value)
                    .map_err(|_| TinkError::new("Ecdsa: invalid private key"))?,
            ),
            EllipticCurveType::NistP384 => SignKey::P384(
                p384::ecdsa::SigningKey::from_bytes(key_value)
                    .map_err(|_| TinkError::new("Ecdsa: invalid private key"))?,
            ),
            EllipticCurveType::NistP521 => SignKey::P521(
                p521::ecdsa::SigningKey::from_bytes(key_value)
                    .map_err(|_| TinkError::new("Ecdsa: invalid private key"))?,
            ),
            _ => return Err("Ecdsa: unsupported curve".into()),
        };
        Ok(EcdsaSigner { key, encoding })
    }
}

impl Signer for EcdsaSigner {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, TinkError> {
        match &self.key {
            SignKey::P256(k) => {
                let sig: p256::ecdsa::Signature = k.sign_digest(Sha256::new().chain(data));
                Ok(match self.encoding {
                    EcdsaSignatureEncoding::Der => sig.to_der().as_bytes().to_vec(),
                    _ => sig.as_ref().to_vec(),
                })
            }
            SignKey::P384(k) => {
                let sig: p384::ecdsa::Signature = k.sign_digest(Sha512::new().chain(data));
                Ok(match self.encoding {
                    EcdsaSignatureEncoding::Der => sig.to_der().as_bytes().to_vec(),
                    _ => sig.as_ref().to_vec(),
                })
            }
            SignKey::P521(k) => {
                let sig: p521::ecdsa::Signature = k.sign_digest(Sha512::new().chain(data));
                Ok(match self.encoding {
                    EcdsaSignatureEncoding::Der => sig.to_der().as_bytes().to_vec(),
                    _ => sig.as_ref().to_vec(),
                })
            }
        }
    }
}

enum VerifyKey {
    P256(p256::ecdsa::VerifyingKey),
    P384(p384::ecdsa::VerifyingKey),
    P521(p521::ecdsa::VerifyingKey),
}

/// `EcdsaVerifier` implements the [`Verifier`] trait for ECDSA.
pub struct EcdsaVerifier {
    key: VerifyKey,
    encoding: EcdsaSignatureEncoding,
}

impl EcdsaVerifier {
    pub fn new(
        hash: HashType,
        curve: EllipticCurveType,
        encoding: EcdsaSignatureEncoding,
        x: &[u8],
        y: &[u8],
    ) -> Result<EcdsaVerifier, TinkError> {
        validate_ecdsa_params(hash, curve, encoding)?;
        let key = match curve {
            EllipticCurveType::NistP256 => {
                let x = left_pad(x, 32)?;
                let y = left_pad(y, 32)?;
                let point = p256::EncodedPoint::from_affine_coordinates(
                    GenericArray::from_slice(&x),
                    GenericArray::from_slice(&y),
                    false,
                );
                VerifyKey::P256(
                    p256::ecdsa::VerifyingKey::from_encoded_point(&point)
                        .map_err(|_| TinkError::new("Ecdsa: invalid public key"))?,
                )
            }
            EllipticCurveType::NistP384 => {
                let x = left_pad(x, 48)?;
                let y = left_pad(y, 48)?;
                let point = p384::EncodedPoint::from_affine_coordinates(
                    GenericArray::from_slice(&x),
                    GenericArray::from_slice(&y),
                    false,
                );
                VerifyKey::P384(
                    p384::ecdsa::VerifyingKey::from_encoded_point(&point)
                        .map_err(|_| TinkError::new("Ecdsa: invalid public key"))?,
                )
            }
            EllipticCurveType::NistP521 => {
                let x = left_pad(x, 66)?;
                let y = left_pad(y, 66)?;
                let point = p521::EncodedPoint::from_affine_coordinates(
                    GenericArray::from_slice(&x),
                    GenericArray::from_slice(&y),
                    false,
                );
                VerifyKey::P521(
                    p521::ecdsa::VerifyingKey::from_encoded_point(&point)
                        .map_err(|_| TinkError::new("Ecdsa: invalid public key"))?,
                )
            }
            _ => return Err("Ecdsa: unsupported curve".into()),
        };
        Ok(EcdsaVerifier { key, encoding })
    }
}

impl Verifier for EcdsaVerifier {
    fn verify(&self, signature_bytes: &[u8], data: &[u8]) -> Result<(), TinkError> {
        match &self.key {
            VerifyKey::P256(k) => {
                let sig = match self.encoding {
                    EcdsaSignatureEncoding::Der => p256::ecdsa::Signature::from_der(signature_bytes),
                    _ => p256::ecdsa::Signature::try_from(signature_bytes),
                }
                .map_err(|_| TinkError::new("Ecdsa: invalid signature encoding"))?;
                k.verify_digest(Sha256::new().chain(data), &sig)
                    .map_err(|_| TinkError::new("Ecdsa: invalid signature"))
            }
            VerifyKey::P384(k) => {
                let sig = match self.encoding {
                    EcdsaSignatureEncoding::Der => p384::ecdsa::Signature::from_der(signature_bytes),
                    _ => p384::ecdsa::Signature::try_from(signature_bytes),
                }
                .map_err(|_| TinkError::new("Ecdsa: invalid signature encoding"))?;
                k.verify_digest(Sha512::new().chain(data), &sig)
                    .map_err(|_| TinkError::new("Ecdsa: invalid signature"))
            }
            VerifyKey::P521(k) => {
                let sig = match self.encoding {
                    EcdsaSignatureEncoding::Der => p521::ecdsa::Signature::from_der(signature_bytes),
                    _ => p521::ecdsa::Signature::try_from(signature_bytes),
                }
                .map_err(|_| TinkError::new("Ecdsa: invalid signature encoding"))?;
                k.verify_digest(Sha512::new().chain(data), &sig)
                    .map_err(|_| TinkError::new("Ecdsa: invalid signature"))
            }
        }
    }
}
