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

//! Groups live primitive objects minted from a [`crate::keyset::Handle`] by
//! their wire-format prefix, so a composite factory can dispatch on
//! decrypt/verify in O(1) expected time.

use crate::proto::{KeyStatusType, OutputPrefixType};
use crate::{Primitive, TinkError};

/// One entry of a [`PrimitiveSet`]: a minted primitive plus the bookkeeping
/// needed to prefix its output and to find it again on the decrypt/verify
/// path.
#[derive(Clone)]
pub struct Entry {
    pub primitive: Primitive,
    pub prefix: Vec<u8>,
    pub prefix_type: OutputPrefixType,
    pub status: KeyStatusType,
    pub type_url: String,
    pub key_id: u32,
}

/// A set of entries grouped by prefix, with one entry designated primary.
#[derive(Clone, Default)]
pub struct PrimitiveSet {
    entries: std::collections::HashMap<Vec<u8>, Vec<Entry>>,
    primary: Option<Entry>,
}

impl PrimitiveSet {
    pub fn new() -> PrimitiveSet {
        PrimitiveSet::default()
    }

    /// Add an entry, indexed under its prefix bytes (the empty vector for
    /// RAW entries).
    pub fn add(&mut self, entry: Entry) {
        self.entries
            .entry(entry.prefix.clone())
            .or_insert_with(Vec::new)
            .push(entry);
    }

    /// Mark `entry` (already added via [`Self::add`]) as the primary.
    pub fn set_primary(&mut self, entry: Entry) {
        self.primary = Some(entry);
    }

    pub fn primary(&self) -> Option<&Entry> {
        self.primary.as_ref()
    }

    /// All entries whose prefix equals `prefix`, in insertion order. Returns
    /// an empty slice if no entry has this prefix — callers treat that as
    /// "no candidate", not an error.
    pub fn entries_for_prefix(&self, prefix: &[u8]) -> &[Entry] {
        match self.entries.get(prefix) {
            Some(v) => v.as_slice(),
            None => &[],
        }
    }

    /// All entries with the empty (RAW) prefix.
    pub fn raw_entries(&self) -> &[Entry] {
        self.entries_for_prefix(&[])
    }
}
