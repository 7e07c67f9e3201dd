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

//! Elliptic-curve Diffie-Hellman over NIST P-256/P-384/P-521, the KEM half
//! of ECIES-AEAD-HKDF. Shared with both the private and public key
//! managers, since both sides need to serialize/deserialize points and the
//! encrypt side additionally needs to run the DH computation.

use generic_array::GenericArray;
use tink::proto::{EcPointFormat, EllipticCurveType};
use tink::TinkError;

fn left_pad(bytes: &[u8], len: usize) -> Result<Vec<u8>, TinkError> {
    if bytes.len() > len {
        return Err("Ecdh: coordinate too long".into());
    }
    let mut out = vec![0u8; len - bytes.len()];
    out.extend_from_slice(bytes);
    Ok(out)
}

fn compressed(format: EcPointFormat) -> Result<bool, TinkError> {
    match format {
        EcPointFormat::Compressed => Ok(true),
        EcPointFormat::Uncompressed => Ok(false),
        EcPointFormat::UnknownFormat => Err("Ecdh: unknown point format".into()),
    }
}

fn coordinate_size(curve: EllipticCurveType) -> Result<usize, TinkError> {
    match curve {
        EllipticCurveType::NistP256 => Ok(32),
        EllipticCurveType::NistP384 => Ok(48),
        EllipticCurveType::NistP521 => Ok(66),
        c => Err(format!("Ecdh: unsupported curve {:?}", c).into()),
    }
}

/// Size in bytes of a SEC1-encoded point on `curve` in the given format —
/// the length of the KEM component at the front of an ECIES ciphertext.
pub fn kem_bytes_size(curve: EllipticCurveType, format: EcPointFormat) -> Result<usize, TinkError> {
    let coord = coordinate_size(curve)?;
    Ok(if compressed(format)? { 1 + coord } else { 1 + 2 * coord })
}

pub enum EcdhPrivateKey {
    P256(p256::SecretKey),
    P384(p384::SecretKey),
    P521(p521::SecretKey),
}

pub enum EcdhPublicKey {
    P256(p256::PublicKey),
    P384(p384::PublicKey),
    P521(p521::PublicKey),
}

/// Generate a fresh key pair on the given curve.
pub fn generate_key_pair(
    curve: EllipticCurveType,
) -> Result<(EcdhPrivateKey, EcdhPublicKey), TinkError> {
    match curve {
        EllipticCurveType::NistP256 => {
            let sk = p256::SecretKey::random(&mut rand::rngs::OsRng);
            let pk = sk.public_key();
            Ok((EcdhPrivateKey::P256(sk), EcdhPublicKey::P256(pk)))
        }
        EllipticCurveType::NistP384 => {
            let sk = p384::SecretKey::random(&mut rand::rngs::OsRng);
            let pk = sk.public_key();
            Ok((EcdhPrivateKey::P384(sk), EcdhPublicKey::P384(pk)))
        }
        EllipticCurveType::NistP521 => {
            let sk = p521::SecretKey::random(&mut rand::rngs::OsRng);
            let pk = sk.public_key();
            Ok((EcdhPrivateKey::P521(sk), EcdhPublicKey::P521(pk)))
        }
        c => Err(format!("Ecdh: unsupported curve {:?}", c).into()),
    }
}

/// Reconstruct a private key from its raw scalar bytes.
pub fn private_key_from_bytes(
    curve: EllipticCurveType,
    key_value: &[u8],
) -> Result<EcdhPrivateKey, TinkError> {
    match curve {
        EllipticCurveType::NistP256 => Ok(EcdhPrivateKey::P256(
            p256::SecretKey::from_bytes(key_value)
                .map_err(|_| TinkError::new("Ecdh: invalid private key"))?,
        )),
        EllipticCurveType::NistP384 => Ok(EcdhPrivateKey::P384(
            p384::SecretKey::from_bytes(key_value)
                .map_err(|_| TinkError::new("Ecdh: invalid private key"))?,
        )),
        EllipticCurveType::NistP521 => Ok(EcdhPrivateKey::P521(
            p521::SecretKey::from_bytes(key_value)
                .map_err(|_| TinkError::new("Ecdh: invalid private key"))?,
        )),
        c => Err(format!("Ecdh: unsupported curve {:?}", c).into()),
    }
}

/// Reconstruct a public key from its affine `(x, y)` coordinates, as stored
/// in an `EciesAeadHkdfPublicKey` proto.
pub fn public_key_from_coordinates(
    curve: EllipticCurveType,
    x: &[u8],
    y: &[u8],
) -> Result<EcdhPublicKey, TinkError> {
    match curve {
        EllipticCurveType::NistP256 => {
            let x = left_pad(x, 32)?;
            let y = left_pad(y, 32)?;
            let point = p256::EncodedPoint::from_affine_coordinates(
                GenericArray::from_slice(&x),
                GenericArray::from_slice(&y),
                false,
            );
            Ok(EcdhPublicKey::P256(
                p256::PublicKey::from_encoded_point(&point)
                    .ok_or_else(|| TinkError::new("Ecdh: invalid public key"))?,
            ))
        }
        EllipticCurveType::NistP384 => {
            let x = left_pad(x, 48)?;
            let y = left_pad(y, 48)?;
            let point = p384::EncodedPoint::from_affine_coordinates(
                GenericArray::from_slice(&x),
                GenericArray::from_slice(&y),
                false,
            );
            Ok(EcdhPublicKey::P384(
                p384::PublicKey::from_encoded_point(&point)
                    .ok_or_else(|| TinkError::new("Ecdh: invalid public key"))?,
            ))
        }
        EllipticCurveType::NistP521 => {
            let x = left_pad(x, 66)?;
            let y = left_pad(y, 66)?;
            let point = p521::EncodedPoint::from_affine_coordinates(
                GenericArray::from_slice(&x),
                GenericArray::from_slice(&y),
                false,
            );
            Ok(EcdhPublicKey::P521(
                p521::PublicKey::from_encoded_point(&point)
                    .ok_or_else(|| TinkError::new("Ecdh: invalid public key"))?,
            ))
        }
        c => Err(format!("Ecdh: unsupported curve {:?}", c).into()),
    }
}

/// Parse a SEC1-encoded point (compressed or uncompressed; the encoding is
/// self-describing via its leading byte) received as the KEM component of a
/// ciphertext.
pub fn public_key_from_bytes(
    curve: EllipticCurveType,
    bytes: &[u8],
) -> Result<EcdhPublicKey, TinkError> {
    match curve {
        EllipticCurveType::NistP256 => Ok(EcdhPublicKey::P256(
            p256::PublicKey::from_sec1_bytes(bytes)
                .map_err(|_| TinkError::new("Ecdh: invalid kem bytes"))?,
        )),
        EllipticCurveType::NistP384 => Ok(EcdhPublicKey::P384(
            p384::PublicKey::from_sec1_bytes(bytes)
                .map_err(|_| TinkError::new("Ecdh: invalid kem bytes"))?,
        )),
        EllipticCurveType::NistP521 => Ok(EcdhPublicKey::P521(
            p521::PublicKey::from_sec1_bytes(bytes)
                .map_err(|_| TinkError::new("Ecdh: invalid kem bytes"))?,
        )),
        c => Err(format!("Ecdh: unsupported curve {:?}", c).into()),
    }
}

/// Serialize a public key as a SEC1 point in the requested format. Used both
/// to derive the KEM bytes on encrypt and to store `(x, y)` when generating
/// a new key.
pub fn encode_public_key(key: &EcdhPublicKey, format: EcPointFormat) -> Result<Vec<u8>, TinkError> {
    let compress = compressed(format)?;
    let bytes = match key {
        EcdhPublicKey::P256(pk) => pk.to_encoded_point(compress).as_bytes().to_vec(),
        EcdhPublicKey::P384(pk) => pk.to_encoded_point(compress).as_bytes().to_vec(),
        EcdhPublicKey::P521(pk) => pk.to_encoded_point(compress).as_bytes().to_vec(),
    };
    Ok(bytes)
}

/// Affine `(x, y)` coordinates of a public key, as stored in an
/// `EciesAeadHkdfPublicKey` proto.
pub fn coordinates(key: &EcdhPublicKey) -> Result<(Vec<u8>, Vec<u8>), TinkError> {
    let err = || TinkError::new("Ecdh: missing coordinate");
    match key {
        EcdhPublicKey::P256(pk) => {
            let point = pk.to_encoded_point(false);
            Ok((
                point.x().ok_or_else(err)?.to_vec(),
                point.y().ok_or_else(err)?.to_vec(),
            ))
        }
        EcdhPublicKey::P384(pk) => {
            let point = pk.to_encoded_point(false);
            Ok((
                point.x().ok_or_else(err)?.to_vec(),
                point.y().ok_or_else(err)?.to_vec(),
            ))
        }
        EcdhPublicKey::P521(pk) => {
            let point = pk.to_encoded_point(false);
            Ok((
                point.x().ok_or_else(err)?.to_vec(),
                point.y().ok_or_else(err)?.to_vec(),
            ))
        }
    }
}

/// Compute the ECDH shared secret (the serialized x-coordinate of the DH
/// result). Both keys must be on the same curve.
pub fn compute_shared_secret(
    private_key: &EcdhPrivateKey,
    public_key: &EcdhPublicKey,
) -> Result<Vec<u8>, TinkError> {
    match (private_key, public_key) {
        (EcdhPrivateKey::P256(sk), EcdhPublicKey::P256(pk)) => Ok(p256::elliptic_curve::ecdh::diffie_hellman(
            sk.to_secret_scalar(),
            pk.as_affine(),
        )
        .as_bytes()
        .to_vec()),
        (EcdhPrivateKey::P384(sk), EcdhPublicKey::P384(pk)) => Ok(p384::elliptic_curve::ecdh::diffie_hellman(
            sk.to_secret_scalar(),
            pk.as_affine(),
        )
        .as_bytes()
        .to_vec()),
        (EcdhPrivateKey::P521(sk), EcdhPublicKey::P521(pk)) => Ok(p521::elliptic_curve::ecdh::diffie_hellman(
            sk.to_secret_scalar(),
            pk.as_affine(),
        )
        .as_bytes()
        .to_vec()),
        _ => Err("Ecdh: private and public key are on different curves".into()),
    }
}
