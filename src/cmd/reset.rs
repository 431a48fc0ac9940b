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

use crate::error::Fallible;
use crate::tracker::Tracker;

/// Reset from the terminal. Destructive, so ask first unless the caller
/// passed `--yes`.
pub fn reset_deck(tracker: &mut Tracker, yes: bool) -> Fallible<()> {
    let confirmed = yes || confirm();
    if tracker.reset(confirmed)? {
        println!("Deck reset.");
    } else {
        println!("Aborted.");
    }
    Ok(())
}

fn confirm() -> bool {
    println!("Reset the deck and clear heat? (y/n)");
    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return false;
    }
    matches!(input.trim(), "y" | "Y" | "yes")
}
