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

//! Compiles the protobuf message definitions shared by every algorithm crate
//! into a single generated module, re-exported as `tink::proto`.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    prost_build::compile_protos(
        &[
            "proto/tink.proto",
            "proto/aes_gcm.proto",
            "proto/chacha20_poly1305.proto",
            "proto/hmac.proto",
            "proto/aes_ctr_hmac_aead.proto",
            "proto/aes_siv.proto",
            "proto/kms_envelope.proto",
            "proto/ecdsa.proto",
            "proto/ed25519.proto",
            "proto/ecies_aead_hkdf.proto",
        ],
        &["proto/"],
    )?;
    Ok(())
}
