// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::Arc;
#[cfg(test)]
use std::sync::Mutex;

use crate::error::Fallible;

/// The three independently persisted records.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Namespace {
    /// Remaining count per card kind, encoded as a JSON object.
    Counts,
    /// Custom labels for the upgrade slots, encoded as a JSON object.
    Labels,
    /// The heat counter, encoded as a stringified integer.
    Heat,
}

impl Namespace {
    pub fn key(self) -> &'static str {
        match self {
            Namespace::Counts => "counts",
            Namespace::Labels => "labels",
            Namespace::Heat => "heat",
        }
    }
}

/// Storage port for the tracker. Values are opaque text; callers decide the
/// encoding. Each write replaces the whole record (last write wins).
pub trait Store: Send {
    /// Read a record. None if the record was never written.
    fn get(&self, namespace: Namespace) -> Fallible<Option<String>>;

    /// Write a record, replacing any previous value.
    fn set(&self, namespace: Namespace, value: &str) -> Fallible<()>;
}

/// A store that keeps records in memory, so tests can exercise the model
/// without touching disk. Clones share the same records.
#[cfg(test)]
#[derive(Clone)]
pub struct MemoryStore {
    records: Arc<Mutex<HashMap<&'static str, String>>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn empty() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[cfg(test)]
impl Store for MemoryStore {
    fn get(&self, namespace: Namespace) -> Fallible<Option<String>> {
        let records = self.records.lock().unwrap();
        Ok(records.get(namespace.key()).cloned())
    }

    fn set(&self, namespace: Namespace, value: &str) -> Fallible<()> {
        let mut records = self.records.lock().unwrap();
        records.insert(namespace.key(), value.to_string());
        Ok(())
    }
}
