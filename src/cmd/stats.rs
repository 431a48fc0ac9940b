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

use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;

use crate::error::Fallible;
use crate::odds::CardStatus;
use crate::tracker::Tracker;

#[derive(ValueEnum, Clone)]
pub enum StatsFormat {
    /// Human-readable table.
    Text,
    /// JSON output.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

pub fn print_deck_stats(tracker: &Tracker, format: StatsFormat) -> Fallible<()> {
    let snapshot = tracker.snapshot();
    match format {
        StatsFormat::Text => {
            for card in &snapshot.cards {
                println!(
                    "{:<12} {:>3}  {:>5.1}%",
                    row_name(card),
                    card.remaining,
                    card.chance
                );
            }
            println!(
                "{:<12} {:>3}  {:>5.1}%",
                "Heat", snapshot.heat.count, snapshot.heat.chance
            );
            println!("total: {}", snapshot.total);
        }
        StatsFormat::Json => {
            let stats_json = serde_json::to_string_pretty(&snapshot)?;
            println!("{}", stats_json);
        }
    }
    Ok(())
}

fn row_name(card: &CardStatus) -> String {
    match &card.label {
        Some(label) if !label.is_empty() => label.clone(),
        _ => card.kind.display_name().to_string(),
    }
}
