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

//! Core crate: registry, keyset handling and primitive-set plumbing shared
//! by every concrete algorithm crate (`tink-aead`, `tink-daead`, `tink-mac`,
//! `tink-signature`, `tink-hybrid`).

pub mod cryptofmt;
mod error;
pub mod keyset;
pub mod primitiveset;
pub mod registry;
pub mod subtle;
pub mod utils;

pub use error::TinkError;

/// Generated protobuf message types shared by every algorithm crate.
pub mod proto {
    include!(concat!(env!("OUT_DIR"), "/google.crypto.tink.rs"));
}

use std::sync::Arc;

/// Authenticated encryption with associated data.
pub trait Aead: Send + Sync {
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>, TinkError>;
    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>, TinkError>;
}

/// Deterministic AEAD: identical inputs always produce identical outputs.
pub trait DeterministicAead: Send + Sync {
    fn encrypt_deterministically(
        &self,
        plaintext: &[u8],
        associated_data: &[u8],
    ) -> Result<Vec<u8>, TinkError>;
    fn decrypt_deterministically(
        &self,
        ciphertext: &[u8],
        associated_data: &[u8],
    ) -> Result<Vec<u8>, TinkError>;
}

/// Message authentication code.
pub trait Mac: Send + Sync {
    fn compute_mac(&self, data: &[u8]) -> Result<Vec<u8>, TinkError>;
    fn verify_mac(&self, mac: &[u8], data: &[u8]) -> Result<(), TinkError>;
}

/// Digital signature generation.
pub trait Signer: Send + Sync {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, TinkError>;
}

/// Digital signature verification.
pub trait Verifier: Send + Sync {
    fn verify(&self, signature: &[u8], data: &[u8]) -> Result<(), TinkError>;
}

/// Hybrid public-key encryption.
pub trait HybridEncrypt: Send + Sync {
    fn encrypt(&self, plaintext: &[u8], context_info: &[u8]) -> Result<Vec<u8>, TinkError>;
}

/// Hybrid public-key decryption.
pub trait HybridDecrypt: Send + Sync {
    fn decrypt(&self, ciphertext: &[u8], context_info: &[u8]) -> Result<Vec<u8>, TinkError>;
}

/// A tagged union over every primitive kind a key manager can mint. Key
/// managers return this instead of an opaque, downcast-requiring object, so
/// factories can match on the variant they expect and reject the rest at
/// compile time rather than via a fallible cast.
#[derive(Clone)]
pub enum Primitive {
    Aead(Arc<dyn Aead>),
    Daead(Arc<dyn DeterministicAead>),
    Mac(Arc<dyn Mac>),
    Signer(Arc<dyn Signer>),
    Verifier(Arc<dyn Verifier>),
    HybridEncrypt(Arc<dyn HybridEncrypt>),
    HybridDecrypt(Arc<dyn HybridDecrypt>),
}

impl Primitive {
    pub fn as_aead(&self) -> Result<&Arc<dyn Aead>, TinkError> {
        match self {
            Primitive::Aead(p) => Ok(p),
            _ => Err("primitive is not an AEAD".into()),
        }
    }

    pub fn as_daead(&self) -> Result<&Arc<dyn DeterministicAead>, TinkError> {
        match self {
            Primitive::Daead(p) => Ok(p),
            _ => Err("primitive is not a deterministic AEAD".into()),
        }
    }

    pub fn as_mac(&self) -> Result<&Arc<dyn Mac>, TinkError> {
        match self {
            Primitive::Mac(p) => Ok(p),
            _ => Err("primitive is not a MAC".into()),
        }
    }

    pub fn as_signer(&self) -> Result<&Arc<dyn Signer>, TinkError> {
        match self {
            Primitive::Signer(p) => Ok(p),
            _ => Err("primitive is not a signer".into()),
        }
    }

    pub fn as_verifier(&self) -> Result<&Arc<dyn Verifier>, TinkError> {
        match self {
            Primitive::Verifier(p) => Ok(p),
            _ => Err("primitive is not a verifier".into()),
        }
    }

    pub fn as_hybrid_encrypt(&self) -> Result<&Arc<dyn HybridEncrypt>, TinkError> {
        match self {
            Primitive::HybridEncrypt(p) => Ok(p),
            _ => Err("primitive is not a hybrid encrypter".into()),
        }
    }

    pub fn as_hybrid_decrypt(&self) -> Result<&Arc<dyn HybridDecrypt>, TinkError> {
        match self {
            Primitive::HybridDecrypt(p) => Ok(p),
            _ => Err("primitive is not a hybrid decrypter".into()),
        }
    }
}
