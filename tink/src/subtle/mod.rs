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

//! Low-level cryptographic helpers shared across the algorithm crates.

pub mod hkdf;
pub mod random;

pub use hkdf::compute_hkdf;
pub use random::get_random_bytes;

use crate::TinkError;

/// Validate that `size_in_bytes` is a supported AES key size (128 or 256 bit).
pub fn validate_aes_key_size(size_in_bytes: usize) -> Result<(), TinkError> {
    match size_in_bytes {
        16 | 32 => Ok(()),
        l => Err(format!("invalid AES key size {} bytes; want 16 or 32", l).into()),
    }
}
