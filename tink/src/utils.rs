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

//! Small shared helpers.

use crate::TinkError;

/// Wrap an underlying error with a contextual message, turning it into a
/// [`TinkError`].
pub fn wrap_err<E>(msg: &str, cause: E) -> TinkError
where
    E: std::error::Error + Send + Sync + 'static,
{
    TinkError::new(msg).with_cause(cause)
}
