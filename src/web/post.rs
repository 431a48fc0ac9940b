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

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use serde::Deserialize;

use crate::error::Fallible;
use crate::types::card_kind::CardKind;
use crate::web::state::ServerState;

#[derive(Debug, Deserialize)]
enum Action {
    Draw,
    Return,
    HeatUp,
    HeatDown,
    Reset,
    ConfirmReset,
    CancelReset,
    Rename,
}

#[derive(Deserialize)]
pub struct FormData {
    action: Action,
    card: Option<String>,
    label: Option<String>,
}

pub async fn post_handler(
    State(state): State<ServerState>,
    Form(form): Form<FormData>,
) -> Redirect {
    match action_handler(state, form) {
        Ok(_) => {}
        Err(e) => {
            log::error!("{e}");
        }
    }
    Redirect::to("/")
}

fn action_handler(state: ServerState, form: FormData) -> Fallible<()> {
    let mut mutable = state.mutable.lock().unwrap();
    // Any action other than pressing Reset settles a pending confirmation.
    let confirm_reset = matches!(form.action, Action::Reset);
    mutable.confirm_reset = confirm_reset;
    match form.action {
        Action::Draw => {
            if let Some(kind) = target_kind(&form) {
                mutable.tracker.draw(kind)?;
            }
        }
        Action::Return => {
            if let Some(kind) = target_kind(&form) {
                mutable.tracker.put_back(kind)?;
            }
        }
        Action::HeatUp => {
            mutable.tracker.add_heat()?;
        }
        Action::HeatDown => {
            mutable.tracker.remove_heat()?;
        }
        Action::Reset => {}
        Action::ConfirmReset => {
            mutable.tracker.reset(true)?;
        }
        Action::CancelReset => {}
        Action::Rename => {
            if let Some(kind) = target_kind(&form) {
                let label = form.label.as_deref().unwrap_or("");
                mutable.tracker.rename(kind, label)?;
            }
        }
    }
    Ok(())
}

fn target_kind(form: &FormData) -> Option<CardKind> {
    form.card.as_deref().and_then(CardKind::from_key)
}
