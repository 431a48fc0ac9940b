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

use maud::Markup;
use maud::html;

use crate::odds::CardStatus;
use crate::odds::Snapshot;

pub fn counter(snapshot: &Snapshot) -> Markup {
    html! {
        div.root {
            div.header {
                h1 { "heatdeck" }
                div.total {
                    "Cards left: "
                    span #total-count { (snapshot.total) }
                }
            }
            table.deck {
                thead {
                    tr {
                        th { "Card" }
                        th { "Left" }
                        th { "Draw %" }
                        th {}
                        th {}
                    }
                }
                tbody {
                    @for card in &snapshot.cards {
                        (card_row(card))
                    }
                    (heat_row(snapshot))
                }
            }
            div.controls {
                (action_form("Reset", None, "Reset deck", false))
            }
        }
    }
}

fn card_row(card: &CardStatus) -> Markup {
    let empty = card.remaining == 0;
    let at_cap = card.cap.is_some_and(|cap| card.remaining >= cap);
    html! {
        tr.empty[empty] data-card=(card.kind.key()) {
            td.name {
                @match &card.label {
                    Some(label) => {
                        (label_form(card, label))
                    }
                    None => {
                        (card.kind.display_name())
                    }
                }
            }
            td.remaining { (card.remaining) }
            td.chance { (format!("{:.1}", card.chance)) }
            td { (action_form("Draw", Some(card.kind.key()), "−", empty)) }
            td { (action_form("Return", Some(card.kind.key()), "+", at_cap)) }
        }
    }
}

fn heat_row(snapshot: &Snapshot) -> Markup {
    let heat = &snapshot.heat;
    html! {
        tr.heat data-card="heat" {
            td.name { "Heat" }
            td.remaining { (heat.count) }
            td.chance { (format!("{:.1}", heat.chance)) }
            td { (action_form("HeatDown", None, "−", heat.count == 0)) }
            td { (action_form("HeatUp", None, "+", false)) }
        }
    }
}

/// A one-button form posting the given action, optionally naming a card.
fn action_form(action: &str, card: Option<&str>, text: &str, disabled: bool) -> Markup {
    html! {
        form action="/" method="post" {
            @if let Some(card) = card {
                input type="hidden" name="card" value=(card);
            }
            @if disabled {
                button type="submit" name="action" value=(action) disabled { (text) }
            } @else {
                button type="submit" name="action" value=(action) { (text) }
            }
        }
    }
}

/// Label edits save themselves when focus leaves the input.
fn label_form(card: &CardStatus, label: &str) -> Markup {
    html! {
        form action="/" method="post" {
            input type="hidden" name="action" value="Rename";
            input type="hidden" name="card" value=(card.kind.key());
            input.label type="text" name="label" value=(label)
                placeholder=(card.kind.display_name())
                onchange="this.form.submit()";
        }
    }
}

pub fn confirm_reset() -> Markup {
    html! {
        div.root {
            div.confirm {
                p { "Reset the deck to its full composition and clear heat?" }
                form action="/" method="post" {
                    button type="submit" name="action" value="ConfirmReset" { "Reset" }
                    button type="submit" name="action" value="CancelReset" { "Cancel" }
                }
            }
        }
    }
}
