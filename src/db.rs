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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use rusqlite::Transaction;

use crate::error::Fallible;
use crate::store::Namespace;
use crate::store::Store;

/// SQLite-backed store. All three records live in a single key-value table.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    pub fn new(database_path: &str) -> Fallible<Self> {
        let mut conn = Connection::open(database_path)?;
        {
            let tx = conn.transaction()?;
            if !probe_schema_exists(&tx)? {
                tx.execute_batch(include_str!("schema.sql"))?;
                tx.commit()?;
            }
        }
        let conn = Arc::new(Mutex::new(conn));
        Ok(Self { conn })
    }

    fn acquire(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap()
    }
}

impl Store for SqliteStore {
    fn get(&self, namespace: Namespace) -> Fallible<Option<String>> {
        let conn = self.acquire();
        let sql = "select value from records where namespace = ?;";
        let value = conn
            .query_row(sql, [namespace.key()], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    fn set(&self, namespace: Namespace, value: &str) -> Fallible<()> {
        let conn = self.acquire();
        let sql = "insert into records (namespace, value) values (?, ?) on conflict (namespace) do update set value = excluded.value;";
        conn.execute(sql, (namespace.key(), value))?;
        Ok(())
    }
}

fn probe_schema_exists(tx: &Transaction) -> Fallible<bool> {
    let sql = "select count(*) from sqlite_master where type='table' AND name=?;";
    let count: i64 = tx.query_row(sql, ["records"], |row| row.get(0))?;
    Ok(count > 0)
}
