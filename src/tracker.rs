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

use crate::deck::Deck;
use crate::error::Fallible;
use crate::odds::Snapshot;
use crate::store::Namespace;
use crate::store::Store;
use crate::types::card_kind::CardKind;
use crate::types::labels::CardLabels;

/// Owns the deck, the labels, and the storage backend. Every transition
/// flows through here so that changes hit storage before the caller
/// re-renders.
///
/// Counts, labels, and heat persist only when a transition actually changes
/// them; a reset always writes both the counts and heat records.
pub struct Tracker {
    deck: Deck,
    labels: CardLabels,
    store: Box<dyn Store>,
}

impl Tracker {
    /// Load the persisted records, falling back to a full deck, empty
    /// labels, and zero heat for any record that is absent or unreadable.
    pub fn open(store: Box<dyn Store>) -> Fallible<Self> {
        let counts = load_counts(store.as_ref())?;
        let heat = load_heat(store.as_ref())?;
        let labels = load_labels(store.as_ref())?;
        let deck = Deck::from_counts(&counts, heat);
        Ok(Self {
            deck,
            labels,
            store,
        })
    }

    /// Mark one card of the kind as drawn. Returns whether anything changed.
    pub fn draw(&mut self, kind: CardKind) -> Fallible<bool> {
        let changed = self.deck.draw(kind);
        if changed {
            self.save_counts()?;
        }
        Ok(changed)
    }

    /// Put one card of the kind back into the deck.
    pub fn put_back(&mut self, kind: CardKind) -> Fallible<bool> {
        let changed = self.deck.put_back(kind);
        if changed {
            self.save_counts()?;
        }
        Ok(changed)
    }

    pub fn add_heat(&mut self) -> Fallible<()> {
        self.deck.add_heat();
        self.save_heat()
    }

    pub fn remove_heat(&mut self) -> Fallible<bool> {
        let changed = self.deck.remove_heat();
        if changed {
            self.save_heat()?;
        }
        Ok(changed)
    }

    /// Restore the full deck and clear the heat counter. Destructive, so the
    /// caller has to resolve a confirmation first; without it, nothing
    /// happens. Labels survive a reset.
    pub fn reset(&mut self, confirmed: bool) -> Fallible<bool> {
        if !confirmed {
            return Ok(false);
        }
        self.deck.reset();
        self.save_counts()?;
        self.save_heat()?;
        Ok(true)
    }

    /// Change the label on an upgrade slot. Ignored for kinds that cannot
    /// carry a label.
    pub fn rename(&mut self, kind: CardKind, label: &str) -> Fallible<bool> {
        if !self.labels.set(kind, label) {
            return Ok(false);
        }
        self.save_labels()?;
        Ok(true)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.deck, &self.labels)
    }

    fn save_counts(&self) -> Fallible<()> {
        let encoded = serde_json::to_string(self.deck.counts())?;
        self.store.set(Namespace::Counts, &encoded)
    }

    fn save_heat(&self) -> Fallible<()> {
        self.store.set(Namespace::Heat, &self.deck.heat().to_string())
    }

    fn save_labels(&self) -> Fallible<()> {
        let encoded = serde_json::to_string(&self.labels)?;
        self.store.set(Namespace::Labels, &encoded)
    }
}

fn load_counts(store: &dyn Store) -> Fallible<BTreeMap<CardKind, u32>> {
    let raw = match store.get(Namespace::Counts)? {
        Some(raw) => raw,
        None => return Ok(BTreeMap::new()),
    };
    match serde_json::from_str(&raw) {
        Ok(counts) => Ok(counts),
        Err(e) => {
            log::warn!("unreadable counts record, using defaults: {e}");
            Ok(BTreeMap::new())
        }
    }
}

fn load_heat(store: &dyn Store) -> Fallible<u32> {
    let raw = match store.get(Namespace::Heat)? {
        Some(raw) => raw,
        None => return Ok(0),
    };
    match raw.trim().parse::<u32>() {
        Ok(heat) => Ok(heat),
        Err(e) => {
            log::warn!("unreadable heat record, using zero: {e}");
            Ok(0)
        }
    }
}

fn load_labels(store: &dyn Store) -> Fallible<CardLabels> {
    let raw = match store.get(Namespace::Labels)? {
        Some(raw) => raw,
        None => return Ok(CardLabels::empty()),
    };
    match serde_json::from_str(&raw) {
        Ok(labels) => Ok(labels),
        Err(e) => {
            log::warn!("unreadable labels record, using defaults: {e}");
            Ok(CardLabels::empty())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn fresh_tracker(store: &MemoryStore) -> Tracker {
        Tracker::open(Box::new(store.clone())).unwrap()
    }

    #[test]
    fn test_open_with_empty_store() {
        let store = MemoryStore::empty();
        let tracker = fresh_tracker(&store);
        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.total, 18);
        assert_eq!(snapshot.heat.count, 0);
    }

    #[test]
    fn test_mutations_survive_reload() -> Fallible<()> {
        let store = MemoryStore::empty();
        {
            let mut tracker = fresh_tracker(&store);
            tracker.draw(CardKind::Speed1)?;
            tracker.draw(CardKind::Speed1)?;
            tracker.put_back(CardKind::Stress)?;
            tracker.add_heat()?;
            tracker.rename(CardKind::Upgrade2, "Brakes")?;
        }
        let tracker = fresh_tracker(&store);
        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.cards[0].remaining, 1);
        assert_eq!(snapshot.cards[4].remaining, 4);
        assert_eq!(snapshot.heat.count, 1);
        assert_eq!(snapshot.cards[6].label.as_deref(), Some("Brakes"));
        assert_eq!(snapshot.total, 18 - 2 + 1 + 1);
        Ok(())
    }

    #[test]
    fn test_noop_draw_writes_nothing() -> Fallible<()> {
        let store = MemoryStore::empty();
        let mut tracker = fresh_tracker(&store);
        for _ in 0..3 {
            tracker.draw(CardKind::Speed1)?;
        }
        let counts_after_exhaustion = store.get(Namespace::Counts)?;
        // The fourth draw is a no-op and must not touch storage.
        assert!(!tracker.draw(CardKind::Speed1)?);
        assert_eq!(store.get(Namespace::Counts)?, counts_after_exhaustion);
        Ok(())
    }

    #[test]
    fn test_noop_heat_decrement_writes_nothing() -> Fallible<()> {
        let store = MemoryStore::empty();
        let mut tracker = fresh_tracker(&store);
        assert!(!tracker.remove_heat()?);
        assert_eq!(store.get(Namespace::Heat)?, None);
        Ok(())
    }

    #[test]
    fn test_reset_requires_confirmation() -> Fallible<()> {
        let store = MemoryStore::empty();
        let mut tracker = fresh_tracker(&store);
        tracker.draw(CardKind::Speed3)?;
        tracker.add_heat()?;
        assert!(!tracker.reset(false)?);
        assert_eq!(tracker.snapshot().total, 18);
        assert!(tracker.reset(true)?);
        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.total, 18);
        assert_eq!(snapshot.cards[2].remaining, 3);
        assert_eq!(snapshot.heat.count, 0);
        assert_eq!(store.get(Namespace::Heat)?, Some("0".to_string()));
        Ok(())
    }

    #[test]
    fn test_reset_preserves_labels() -> Fallible<()> {
        let store = MemoryStore::empty();
        let mut tracker = fresh_tracker(&store);
        tracker.rename(CardKind::Upgrade1, "Gearbox")?;
        tracker.reset(true)?;
        assert_eq!(
            tracker.snapshot().cards[5].label.as_deref(),
            Some("Gearbox")
        );
        Ok(())
    }

    #[test]
    fn test_rename_unlabelable_kind_is_ignored() -> Fallible<()> {
        let store = MemoryStore::empty();
        let mut tracker = fresh_tracker(&store);
        assert!(!tracker.rename(CardKind::Speed1, "Nope")?);
        assert_eq!(store.get(Namespace::Labels)?, None);
        Ok(())
    }

    #[test]
    fn test_malformed_counts_record_falls_back_to_defaults() -> Fallible<()> {
        let store = MemoryStore::empty();
        store.set(Namespace::Counts, "derp")?;
        store.set(Namespace::Heat, "derp")?;
        store.set(Namespace::Labels, "[1, 2, 3]")?;
        let tracker = fresh_tracker(&store);
        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.total, 18);
        assert_eq!(snapshot.heat.count, 0);
        assert_eq!(snapshot.cards[5].label.as_deref(), Some(""));
        Ok(())
    }

    #[test]
    fn test_persisted_count_encoding() -> Fallible<()> {
        let store = MemoryStore::empty();
        let mut tracker = fresh_tracker(&store);
        tracker.draw(CardKind::Speed1)?;
        let raw = store.get(Namespace::Counts)?.unwrap();
        assert_eq!(
            raw,
            r#"{"1":2,"2":3,"3":3,"4":3,"stress":3,"d1":1,"d2":1,"d3":1}"#
        );
        Ok(())
    }
}
