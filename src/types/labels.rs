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

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::types::card_kind::CardKind;

/// Custom display labels for the upgrade slots. Purely cosmetic: labels have
/// no bearing on the odds, and a deck reset leaves them alone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLabels(BTreeMap<CardKind, String>);

impl CardLabels {
    /// An empty label for each labelable kind.
    pub fn empty() -> Self {
        let mut labels = BTreeMap::new();
        for kind in CardKind::LABELABLE {
            labels.insert(kind, String::new());
        }
        Self(labels)
    }

    pub fn get(&self, kind: CardKind) -> &str {
        self.0.get(&kind).map(String::as_str).unwrap_or("")
    }

    /// Set the label for a kind. Returns false, without storing anything,
    /// for kinds that cannot carry a label.
    pub fn set(&mut self, kind: CardKind, label: &str) -> bool {
        if !kind.is_labelable() {
            return false;
        }
        self.0.insert(kind, label.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let labels = CardLabels::empty();
        for kind in CardKind::LABELABLE {
            assert_eq!(labels.get(kind), "");
        }
    }

    #[test]
    fn test_set() {
        let mut labels = CardLabels::empty();
        assert!(labels.set(CardKind::Upgrade1, "Nitro"));
        assert_eq!(labels.get(CardKind::Upgrade1), "Nitro");
    }

    #[test]
    fn test_set_ignores_unlabelable_kinds() {
        let mut labels = CardLabels::empty();
        assert!(!labels.set(CardKind::Stress, "Nope"));
        assert_eq!(labels.get(CardKind::Stress), "");
    }

    #[test]
    fn test_serde_round_trip() {
        let mut labels = CardLabels::empty();
        labels.set(CardKind::Upgrade3, "Cooling");
        let json = serde_json::to_string(&labels).unwrap();
        assert_eq!(json, r#"{"d1":"","d2":"","d3":"Cooling"}"#);
        let parsed: CardLabels = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, labels);
    }
}
