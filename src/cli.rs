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

use std::path::PathBuf;

use clap::Parser;

use crate::cmd::reset::reset_deck;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_deck_stats;
use crate::db::SqliteStore;
use crate::error::Fallible;
use crate::error::fail;
use crate::tracker::Tracker;
use crate::web::server::start_server;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Track a deck in the browser.
    Track {
        /// Optional path to the directory holding the tracker database.
        directory: Option<String>,
        /// The port to serve the tracker on.
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
    /// Print the current deck snapshot.
    Stats {
        /// Optional path to the directory holding the tracker database.
        directory: Option<String>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
    /// Restore the full deck and clear the heat counter.
    Reset {
        /// Optional path to the directory holding the tracker database.
        directory: Option<String>,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Track { directory, port } => {
            let tracker = open_tracker(directory)?;
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(start_server(tracker, port, true))
        }
        Command::Stats { directory, format } => {
            let tracker = open_tracker(directory)?;
            print_deck_stats(&tracker, format)
        }
        Command::Reset { directory, yes } => {
            let mut tracker = open_tracker(directory)?;
            reset_deck(&mut tracker, yes)
        }
    }
}

fn open_tracker(directory: Option<String>) -> Fallible<Tracker> {
    let directory: PathBuf = match directory {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()?,
    };
    if !directory.exists() {
        return fail("directory does not exist.");
    }
    let db_path = directory.join("heatdeck.db");
    let db_path = match db_path.to_str() {
        Some(path) => path.to_string(),
        None => return fail("invalid database path."),
    };
    let store = SqliteStore::new(&db_path)?;
    Tracker::open(Box::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_tracker_on_non_existent_directory() {
        let result = open_tracker(Some("./derpherp".to_string()));
        assert!(result.is_err());
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "error: directory does not exist.");
    }

    #[test]
    fn test_open_tracker_on_fresh_directory() -> Fallible<()> {
        let dir = tempfile::tempdir()?;
        let tracker = open_tracker(Some(dir.path().display().to_string()))?;
        assert_eq!(tracker.snapshot().total, 18);
        Ok(())
    }
}
