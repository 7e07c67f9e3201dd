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

//! Pre-generated [`KeyTemplate`]s for HMAC keys.

use prost::Message;
use tink::proto::{HashType, KeyTemplate, OutputPrefixType};

/// Return a [`KeyTemplate`] that generates an HMAC-SHA256 key with a 32-byte
/// tag and a 32-byte key.
pub fn hmac_sha256_tag256_key_template() -> KeyTemplate {
    create_hmac_key_template(32, HashType::Sha256, 32)
}

/// Return a [`KeyTemplate`] that generates an HMAC-SHA256 key with a 16-byte
/// (truncated) tag and a 32-byte key.
pub fn hmac_sha256_tag128_key_template() -> KeyTemplate {
    create_hmac_key_template(32, HashType::Sha256, 16)
}

/// Return a [`KeyTemplate`] that generates an HMAC-SHA512 key with a 64-byte
/// tag and a 64-byte key.
pub fn hmac_sha512_tag512_key_template() -> KeyTemplate {
    create_hmac_key_template(64, HashType::Sha512, 64)
}

/// Return a [`KeyTemplate`] that generates an HMAC-SHA512 key with a 32-byte
/// (truncated) tag and a 64-byte key.
pub fn hmac_sha512_tag256_key_template() -> KeyTemplate {
    create_hmac_key_template(64, HashType::Sha512, 32)
}

fn create_hmac_key_template(key_size: u32, hash: HashType, tag_size: u32) -> KeyTemplate {
    let format = tink::proto::HmacKeyFormat {
        version: crate::HMAC_KEY_VERSION,
        params: Some(tink::proto::HmacParams {
            hash: hash as i32,
            tag_size,
        }),
        key_size,
    };
    let mut serialized_format = Vec::new();
    format.encode(&mut serialized_format).unwrap(); // safe: proto-encode
    KeyTemplate {
        type_url: crate::HMAC_TYPE_URL.to_string(),
        value: serialized_format,
        output_prefix_type: OutputPrefixType::Tink as i32,
    }
}
