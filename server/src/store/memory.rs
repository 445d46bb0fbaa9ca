//! In-memory table store.
//!
//! DESIGN
//! ======
//! Backs unit tests and the no-config dev fallback. Rows live in a map of
//! table name to insertion-ordered vector, so select-all reflects insert
//! order and delete-eq mirrors the hosted store's column-equality filter.

use std::collections::HashMap;

use tokio::sync::RwLock;

use super::types::{StoreError, TableStore};

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<String, Vec<serde_json::Value>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl TableStore for MemoryStore {
    async fn insert(&self, table: &str, row: serde_json::Value) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.entry(table.to_owned()).or_default().push(row);
        Ok(())
    }

    async fn select_all(&self, table: &str) -> Result<Vec<serde_json::Value>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.get(table).cloned().unwrap_or_default())
    }

    async fn delete_eq(&self, table: &str, column: &str, value: &str) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        if let Some(rows) = tables.get_mut(table) {
            rows.retain(|row| !column_matches(row, column, value));
        }
        Ok(())
    }
}

/// True when `row[column]` equals `value` compared in string form.
/// The hosted store receives filter values as URL text, so numbers and
/// booleans compare through their canonical rendering.
fn column_matches(row: &serde_json::Value, column: &str, value: &str) -> bool {
    match row.get(column) {
        Some(serde_json::Value::String(text)) => text == value,
        Some(other) => other.to_string() == value,
        None => false,
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
