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

use serde::Serialize;

use crate::deck::Deck;
use crate::types::card_kind::CardKind;
use crate::types::labels::CardLabels;

/// Chance, as a percentage, that the next card drawn out of `total` cards is
/// one of the `remaining` copies. Zero when nothing is left to draw.
pub fn draw_chance(remaining: u32, total: u32) -> f64 {
    if total > 0 {
        (remaining as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

/// The full state of the model after a mutation: everything the
/// presentation layer needs to re-render. Chances are unrounded; display
/// code rounds to one decimal place.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub cards: Vec<CardStatus>,
    pub heat: HeatStatus,
    pub total: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardStatus {
    pub kind: CardKind,
    /// The custom label, for labelable kinds only. Possibly empty.
    pub label: Option<String>,
    pub remaining: u32,
    /// None for the uncapped stress kind.
    pub cap: Option<u32>,
    pub chance: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatStatus {
    pub count: u32,
    pub chance: f64,
}

impl Snapshot {
    pub fn of(deck: &Deck, labels: &CardLabels) -> Self {
        let total = deck.total();
        let cards = CardKind::ALL
            .into_iter()
            .map(|kind| CardStatus {
                kind,
                label: kind
                    .is_labelable()
                    .then(|| labels.get(kind).to_string()),
                remaining: deck.remaining(kind),
                cap: kind.cap(),
                chance: draw_chance(deck.remaining(kind), total),
            })
            .collect();
        let heat = HeatStatus {
            count: deck.heat(),
            chance: draw_chance(deck.heat(), total),
        };
        Self { cards, heat, total }
    }
}
