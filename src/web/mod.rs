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

mod get;
mod post;
pub mod server;
mod state;
mod template;
mod view;

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tempfile::TempDir;
    use tokio::net::TcpStream;
    use tokio::spawn;
    use tokio::time::sleep;

    use crate::db::SqliteStore;
    use crate::error::Fallible;
    use crate::store::Namespace;
    use crate::store::Store;
    use crate::tracker::Tracker;
    use crate::web::server::start_server;

    /// Boot a server over a fresh database on a free port. Returns the base
    /// URL and the directory guard that keeps the database alive.
    async fn boot() -> Fallible<(String, TempDir)> {
        let dir = tempfile::tempdir()?;
        let tracker = Tracker::open(Box::new(open_store(&dir)?))?;
        let port = portpicker::pick_unused_port().unwrap();
        spawn(async move { start_server(tracker, port, false).await });
        let bind = format!("127.0.0.1:{port}");
        loop {
            if let Ok(stream) = TcpStream::connect(&bind).await {
                drop(stream);
                break;
            }
            sleep(Duration::from_millis(1)).await;
        }
        Ok((format!("http://{bind}"), dir))
    }

    fn open_store(dir: &TempDir) -> Fallible<SqliteStore> {
        let db_path = dir.path().join("heatdeck.db");
        SqliteStore::new(db_path.to_str().unwrap())
    }

    /// Post an action form and return the page it redirects back to.
    async fn post_action(url: &str, fields: &[(&str, &str)]) -> Fallible<String> {
        let response = reqwest::Client::new()
            .post(format!("{url}/"))
            .form(fields)
            .send()
            .await?;
        assert!(response.status().is_success());
        Ok(response.text().await?)
    }

    #[tokio::test]
    async fn test_initial_page() -> Fallible<()> {
        let (url, _dir) = boot().await?;
        let response = reqwest::get(format!("{url}/")).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        let html = response.text().await?;
        assert!(html.contains("<span id=\"total-count\">18</span>"));
        // Each speed kind starts at 3 of 18.
        assert!(html.contains("16.7"));
        Ok(())
    }

    #[tokio::test]
    async fn test_draw_exhausts_kind() -> Fallible<()> {
        let (url, dir) = boot().await?;
        post_action(&url, &[("action", "Draw"), ("card", "1")]).await?;
        post_action(&url, &[("action", "Draw"), ("card", "1")]).await?;
        let html = post_action(&url, &[("action", "Draw"), ("card", "1")]).await?;
        // The exhausted kind renders a zero chance and a disabled draw button.
        assert!(html.contains("<td class=\"chance\">0.0</td>"));
        assert!(html.contains("value=\"Draw\" disabled"));
        assert!(html.contains("<span id=\"total-count\">15</span>"));

        // The fourth draw is absorbed.
        let html = post_action(&url, &[("action", "Draw"), ("card", "1")]).await?;
        assert!(html.contains("<span id=\"total-count\">15</span>"));

        let store = open_store(&dir)?;
        let counts = store.get(Namespace::Counts)?.unwrap();
        assert_eq!(
            counts,
            r#"{"1":0,"2":3,"3":3,"4":3,"stress":3,"d1":1,"d2":1,"d3":1}"#
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_stress_grows_past_initial_count() -> Fallible<()> {
        let (url, _dir) = boot().await?;
        for _ in 0..5 {
            post_action(&url, &[("action", "Return"), ("card", "stress")]).await?;
        }
        let response = reqwest::get(format!("{url}/")).await?;
        let html = response.text().await?;
        assert!(html.contains("<td class=\"remaining\">8</td>"));
        assert!(html.contains("34.8"));
        assert!(html.contains("<span id=\"total-count\">23</span>"));
        Ok(())
    }

    #[tokio::test]
    async fn test_heat_counter() -> Fallible<()> {
        let (url, dir) = boot().await?;
        for _ in 0..4 {
            post_action(&url, &[("action", "HeatUp")]).await?;
        }
        let response = reqwest::get(format!("{url}/")).await?;
        let html = response.text().await?;
        assert!(html.contains("<td class=\"remaining\">4</td>"));
        assert!(html.contains("18.2"));
        assert!(html.contains("<span id=\"total-count\">22</span>"));

        post_action(&url, &[("action", "HeatDown")]).await?;
        let store = open_store(&dir)?;
        assert_eq!(store.get(Namespace::Heat)?, Some("3".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn test_reset_flow() -> Fallible<()> {
        let (url, dir) = boot().await?;
        post_action(&url, &[("action", "Draw"), ("card", "2")]).await?;
        post_action(&url, &[("action", "Draw"), ("card", "3")]).await?;
        post_action(&url, &[("action", "HeatUp")]).await?;

        // Pressing reset asks for confirmation without touching the deck.
        let html = post_action(&url, &[("action", "Reset")]).await?;
        assert!(html.contains("Reset the deck to its full composition"));
        let html = post_action(&url, &[("action", "CancelReset")]).await?;
        assert!(html.contains("<span id=\"total-count\">17</span>"));

        let html = post_action(&url, &[("action", "Reset")]).await?;
        assert!(html.contains("Reset the deck to its full composition"));
        let html = post_action(&url, &[("action", "ConfirmReset")]).await?;
        assert!(html.contains("<span id=\"total-count\">18</span>"));

        let store = open_store(&dir)?;
        assert_eq!(store.get(Namespace::Heat)?, Some("0".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn test_rename_upgrade_slot() -> Fallible<()> {
        let (url, dir) = boot().await?;
        let html = post_action(
            &url,
            &[("action", "Rename"), ("card", "d1"), ("label", "Nitro")],
        )
        .await?;
        assert!(html.contains("value=\"Nitro\""));

        let store = open_store(&dir)?;
        assert_eq!(
            store.get(Namespace::Labels)?,
            Some(r#"{"d1":"Nitro","d2":"","d3":""}"#.to_string())
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_static_assets_and_fallback() -> Fallible<()> {
        let (url, _dir) = boot().await?;
        let response = reqwest::get(format!("{url}/style.css")).await?;
        assert!(response.status().is_success());
        assert_eq!(response.headers().get("content-type").unwrap(), "text/css");

        let response = reqwest::get(format!("{url}/herp-derp")).await?;
        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
        Ok(())
    }
}
