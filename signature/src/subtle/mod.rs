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

//! Subtle (low-level) signature implementations.

mod ecdsa;
mod ed25519;

pub use ecdsa::{validate_ecdsa_params, EcdsaSigner, EcdsaVerifier};
pub use ed25519::{
    Ed25519Signer, Ed25519Verifier, PUBLIC_KEY_SIZE as ED25519_PUBLIC_KEY_SIZE,
    SECRET_KEY_SIZE as ED25519_SECRET_KEY_SIZE, SIGNATURE_SIZE as ED25519_SIGNATURE_SIZE,
};
