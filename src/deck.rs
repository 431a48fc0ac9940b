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

use crate::types::card_kind::CardKind;

/// The remaining count for every card kind, plus the heat counter. Heat is
/// tracked alongside the deck but is not one of its kinds.
///
/// Transitions clamp at the bounds and report whether anything changed.
/// Persisting the result is the tracker's job, so these stay testable
/// without a storage backend.
pub struct Deck {
    remaining: BTreeMap<CardKind, u32>,
    heat: u32,
}

impl Deck {
    /// A full deck: every kind at its initial count, no heat.
    pub fn full() -> Self {
        Self::from_counts(&BTreeMap::new(), 0)
    }

    /// Rebuild from persisted counts. Kinds missing from the record take
    /// their initial count, and bounded kinds stored above their cap are
    /// clamped down to it.
    pub fn from_counts(counts: &BTreeMap<CardKind, u32>, heat: u32) -> Self {
        let mut remaining = BTreeMap::new();
        for kind in CardKind::ALL {
            let count = counts.get(&kind).copied().unwrap_or_else(|| kind.initial());
            let count = match kind.cap() {
                Some(cap) => count.min(cap),
                None => count,
            };
            remaining.insert(kind, count);
        }
        Self { remaining, heat }
    }

    pub fn counts(&self) -> &BTreeMap<CardKind, u32> {
        &self.remaining
    }

    pub fn remaining(&self, kind: CardKind) -> u32 {
        self.remaining.get(&kind).copied().unwrap_or(0)
    }

    pub fn heat(&self) -> u32 {
        self.heat
    }

    /// Cards left across every kind, heat included.
    pub fn total(&self) -> u32 {
        self.remaining.values().sum::<u32>() + self.heat
    }

    /// Mark one card of the kind as drawn. No-op when the kind is already
    /// exhausted.
    pub fn draw(&mut self, kind: CardKind) -> bool {
        match self.remaining.get_mut(&kind) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Put one card of the kind back into the deck. No-op when the kind is
    /// already at its cap.
    pub fn put_back(&mut self, kind: CardKind) -> bool {
        match self.remaining.get_mut(&kind) {
            Some(count) if kind.cap().is_none_or(|cap| *count < cap) => {
                *count += 1;
                true
            }
            _ => false,
        }
    }

    /// Heat has no upper bound.
    pub fn add_heat(&mut self) {
        self.heat += 1;
    }

    pub fn remove_heat(&mut self) -> bool {
        if self.heat > 0 {
            self.heat -= 1;
            true
        } else {
            false
        }
    }

    /// Restore every kind to its initial count and clear the heat counter.
    pub fn reset(&mut self) {
        for (kind, count) in self.remaining.iter_mut() {
            *count = kind.initial();
        }
        self.heat = 0;
    }
}
