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

//! Builds [`Handle`]s directly from cleartext keysets, bypassing the
//! no-secrets discipline of [`super::Handle::read_with_no_secrets`].
//!
//! Gated behind the `insecure` feature: this exists for test fixtures
//! (`tink-testutil` enables it) and callers with their own key-management
//! story, never for production keyset I/O.

use super::Handle;
use crate::proto::Keyset;
use crate::TinkError;

/// Wrap an already-validated cleartext keyset in a [`Handle`], without
/// requiring a wrapping AEAD.
pub fn new_handle(ks: Keyset) -> Result<Handle, TinkError> {
    super::validate(&ks)?;
    Ok(Handle::from_keyset(ks))
}

/// Extract the cleartext [`Keyset`] behind a [`Handle`].
pub fn key_material(h: &Handle) -> Keyset {
    h.ks.clone()
}
