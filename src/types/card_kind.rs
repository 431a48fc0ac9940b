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

use serde::Deserialize;
use serde::Serialize;

/// One of the fixed categories of card in the deck. The set is closed: the
/// deck's composition never changes, only the remaining counts do.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum CardKind {
    #[serde(rename = "1")]
    Speed1,
    #[serde(rename = "2")]
    Speed2,
    #[serde(rename = "3")]
    Speed3,
    #[serde(rename = "4")]
    Speed4,
    /// Stress cards can be added to the deck past their initial count.
    #[serde(rename = "stress")]
    Stress,
    /// Upgrade slots the user can attach a custom label to.
    #[serde(rename = "d1")]
    Upgrade1,
    #[serde(rename = "d2")]
    Upgrade2,
    #[serde(rename = "d3")]
    Upgrade3,
}

impl CardKind {
    /// Every kind, in display order.
    pub const ALL: [CardKind; 8] = [
        CardKind::Speed1,
        CardKind::Speed2,
        CardKind::Speed3,
        CardKind::Speed4,
        CardKind::Stress,
        CardKind::Upgrade1,
        CardKind::Upgrade2,
        CardKind::Upgrade3,
    ];

    /// The kinds the user can label.
    pub const LABELABLE: [CardKind; 3] =
        [CardKind::Upgrade1, CardKind::Upgrade2, CardKind::Upgrade3];

    /// The key under which this kind appears in the persisted counts record
    /// and in form submissions.
    pub fn key(self) -> &'static str {
        match self {
            CardKind::Speed1 => "1",
            CardKind::Speed2 => "2",
            CardKind::Speed3 => "3",
            CardKind::Speed4 => "4",
            CardKind::Stress => "stress",
            CardKind::Upgrade1 => "d1",
            CardKind::Upgrade2 => "d2",
            CardKind::Upgrade3 => "d3",
        }
    }

    pub fn from_key(key: &str) -> Option<CardKind> {
        CardKind::ALL.into_iter().find(|kind| kind.key() == key)
    }

    /// How many cards of this kind a full deck holds.
    pub fn initial(self) -> u32 {
        match self {
            CardKind::Speed1
            | CardKind::Speed2
            | CardKind::Speed3
            | CardKind::Speed4
            | CardKind::Stress => 3,
            CardKind::Upgrade1 | CardKind::Upgrade2 | CardKind::Upgrade3 => 1,
        }
    }

    /// The upper bound on the remaining count, if the kind has one. Stress
    /// cards have no upper bound.
    pub fn cap(self) -> Option<u32> {
        match self {
            CardKind::Stress => None,
            _ => Some(self.initial()),
        }
    }

    pub fn is_labelable(self) -> bool {
        CardKind::LABELABLE.contains(&self)
    }

    /// The built-in display name. Labelable kinds usually display their
    /// custom label instead, when one is set.
    pub fn display_name(self) -> &'static str {
        match self {
            CardKind::Speed1 => "1",
            CardKind::Speed2 => "2",
            CardKind::Speed3 => "3",
            CardKind::Speed4 => "4",
            CardKind::Stress => "Stress",
            CardKind::Upgrade1 => "Upgrade 1",
            CardKind::Upgrade2 => "Upgrade 2",
            CardKind::Upgrade3 => "Upgrade 3",
        }
    }
}
