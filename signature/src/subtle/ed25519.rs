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

//! Ed25519 signing and verification.

use ed25519_dalek::{Keypair, PublicKey, SecretKey, Signature, Signer as _, Verifier as _};
use tink::{Signer, TinkError, Verifier};

pub const PUBLIC_KEY_SIZE: usize = 32;
pub const SECRET_KEY_SIZE: usize = 32;
pub const SIGNATURE_SIZE: usize = 64;

/// `Ed25519Signer` implements the [`Signer`] trait for Ed25519.
pub struct Ed25519Signer {
    keypair: Keypair,
}

impl Ed25519Signer {
    pub fn new(private_key: &[u8]) -> Result<Ed25519Signer, TinkError> {
        if private_key.len() != SECRET_KEY_SIZE {
            return Err(format!(
                "Ed25519Signer: invalid private key size {} (want {})",
                private_key.len(),
                SECRET_KEY_SIZE
            )
            .into());
        }
        let secret = SecretKey::from_bytes(private_key)
            .map_err(|_| TinkError::new("Ed25519Signer: invalid private key"))?;
        let public = PublicKey::from(&secret);
        Ok(Ed25519Signer {
            keypair: Keypair { secret, public },
        })
    }
}

impl Signer for Ed25519Signer {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, TinkError> {
        Ok(self.keypair.sign(data).to_bytes().to_vec())
    }
}

/// `Ed25519Verifier` implements the [`Verifier`] trait for Ed25519.
pub struct Ed25519Verifier {
    public_key: PublicKey,
}

impl Ed25519Verifier {
    pub fn new(public_key: &[u8]) -> Result<Ed25519Verifier, TinkError> {
        if public_key.len() != PUBLIC_KEY_SIZE {
            return Err(format!(
                "Ed25519Verifier: invalid public key size {} (want {})",
                public_key.len(),
                PUBLIC_KEY_SIZE
            )
            .into());
        }
        let public_key = PublicKey::from_bytes(public_key)
            .map_err(|_| TinkError::new("Ed25519Verifier: invalid public key"))?;
        Ok(Ed25519Verifier { public_key })
    }
}

impl Verifier for Ed25519Verifier {
    fn verify(&self, signature: &[u8], data: &[u8]) -> Result<(), TinkError> {
        if signature.len() != SIGNATURE_SIZE {
            return Err("Ed25519Verifier: invalid signature".into());
        }
        let sig = Signature::from_bytes(signature)
            .map_err(|_| TinkError::new("Ed25519Verifier: invalid signature"))?;
        self.public_key
            .verify(data, &sig)
            .map_err(|_| TinkError::new("Ed25519Verifier: invalid signature"))
    }
}
