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

//! Common error type used throughout the crate family.

use std::fmt;

/// `TinkError` is the single error type returned by fallible operations
/// across the crate family. It carries a human-readable message plus,
/// optionally, the underlying cause.
#[derive(Debug)]
pub struct TinkError {
    msg: String,
    cause: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl TinkError {
    /// Build a new error from a plain message.
    pub fn new(msg: &str) -> TinkError {
        TinkError {
            msg: msg.to_string(),
            cause: None,
        }
    }

    /// Attach an underlying cause to an existing error.
    pub fn with_cause<E>(mut self, cause: E) -> TinkError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.cause = Some(Box::new(cause));
        self
    }
}

impl fmt::Display for TinkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.cause {
            Some(c) => write!(f, "{}: {}", self.msg, c),
            None => write!(f, "{}", self.msg),
        }
    }
}

impl std::error::Error for TinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause.as_ref().map(|c| c.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<&str> for TinkError {
    fn from(msg: &str) -> TinkError {
        TinkError::new(msg)
    }
}

impl From<String> for TinkError {
    fn from(msg: String) -> TinkError {
        TinkError::new(&msg)
    }
}
