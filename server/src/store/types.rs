//! Store types — table-store operations and errors.
//!
//! The trait keeps the data-access surface small and mockable: the whole
//! application reads and writes through three row operations.

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by table-store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The configured API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the table store failed.
    #[error("store request failed: {0}")]
    Request(String),

    /// The table store returned a non-success HTTP status.
    #[error("store response error: status {status}")]
    Response { status: u16, body: String },

    /// The table store response body could not be deserialized.
    #[error("store response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// TABLE STORE TRAIT
// =============================================================================

/// Async trait over the row operations the table store exposes.
/// Enables the in-memory double in tests and the dev fallback.
#[async_trait::async_trait]
pub trait TableStore: Send + Sync {
    /// Insert one row into a table.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the request fails or the store rejects
    /// the row.
    async fn insert(&self, table: &str, row: serde_json::Value) -> Result<(), StoreError>;

    /// Fetch every row of a table, in store order.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the request fails or the response is
    /// not a JSON array of rows.
    async fn select_all(&self, table: &str) -> Result<Vec<serde_json::Value>, StoreError>;

    /// Delete every row whose `column` equals `value`.
    ///
    /// Deleting rows that do not exist is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the request fails or the store rejects
    /// the delete.
    async fn delete_eq(&self, table: &str, column: &str, value: &str) -> Result<(), StoreError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
