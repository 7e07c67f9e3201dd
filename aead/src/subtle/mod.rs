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

//! Subtle (low-level) AEAD implementations. These are the building blocks
//! key managers wrap; callers should go through a [`tink::keyset::Handle`]
//! and the [`crate::new`] factory rather than use this module directly.

pub mod aes_ctr;
pub mod aes_gcm;
pub mod chacha20poly1305;
pub mod encrypt_then_authenticate;
pub mod xchacha20poly1305;

pub use aes_gcm::AesGcm;
pub use chacha20poly1305::ChaCha20Poly1305;
pub use encrypt_then_authenticate::EncryptThenAuthenticate;
pub use xchacha20poly1305::XChaCha20Poly1305;
