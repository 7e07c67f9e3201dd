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

//! Subtle (low-level) ECIES-AEAD-HKDF hybrid encryption implementation.

pub mod ecdh;
pub mod ecies_aead_hkdf_dem_helper;
mod ecies_aead_hkdf_hybrid_decrypt;
mod ecies_aead_hkdf_hybrid_encrypt;

pub use ecies_aead_hkdf_dem_helper::DemHelper;
pub use ecies_aead_hkdf_hybrid_decrypt::EciesAeadHkdfHybridDecrypt;
pub use ecies_aead_hkdf_hybrid_encrypt::EciesAeadHkdfHybridEncrypt;
