//! REST client for the hosted table store.
//!
//! Thin HTTP wrapper over the store's PostgREST-style row endpoints.
//! URL construction and row parsing are pure functions for testability.

use std::time::Duration;

use super::config::{StoreConfig, StoreTimeouts};
use super::types::{StoreError, TableStore};

// =============================================================================
// CLIENT
// =============================================================================

pub struct RestTableStore {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl RestTableStore {
    /// Build a store client from environment variables.
    ///
    /// See [`StoreConfig::from_env`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is absent or the HTTP client
    /// fails to build.
    pub fn from_env() -> Result<Self, StoreError> {
        let config = StoreConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build a store client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: StoreConfig) -> Result<Self, StoreError> {
        Self::new(config.base_url, config.api_key, config.timeouts)
    }

    /// Build a store client against `base_url` with the given timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::HttpClientBuild`] if the HTTP client fails to
    /// build.
    pub fn new(base_url: String, api_key: Option<String>, timeouts: StoreTimeouts) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| StoreError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url, api_key })
    }

    /// Base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request
                .header("apikey", key)
                .header("Authorization", format!("Bearer {key}")),
            None => request,
        }
    }

    async fn read_success_body(response: reqwest::Response) -> Result<String, StoreError> {
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(StoreError::Response { status, body: text });
        }

        Ok(text)
    }
}

#[async_trait::async_trait]
impl TableStore for RestTableStore {
    async fn insert(&self, table: &str, row: serde_json::Value) -> Result<(), StoreError> {
        let request = self
            .http
            .post(table_url(&self.base_url, table))
            .header("Prefer", "return=minimal")
            .json(&serde_json::Value::Array(vec![row]));

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        Self::read_success_body(response).await?;
        Ok(())
    }

    async fn select_all(&self, table: &str) -> Result<Vec<serde_json::Value>, StoreError> {
        let request = self.http.get(select_all_url(&self.base_url, table));

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        let body = Self::read_success_body(response).await?;
        parse_rows(&body)
    }

    async fn delete_eq(&self, table: &str, column: &str, value: &str) -> Result<(), StoreError> {
        let request = self
            .http
            .delete(delete_eq_url(&self.base_url, table, column, value));

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        Self::read_success_body(response).await?;
        Ok(())
    }
}

// =============================================================================
// URLS + PARSING
// =============================================================================

/// `{base}/{table}` serves inserts.
fn table_url(base: &str, table: &str) -> String {
    format!("{base}/{table}")
}

/// `{base}/{table}?select=*` serves full-table reads.
fn select_all_url(base: &str, table: &str) -> String {
    format!("{base}/{table}?select=*")
}

/// `{base}/{table}?{column}=eq.{value}` filters the rows a delete matches.
fn delete_eq_url(base: &str, table: &str, column: &str, value: &str) -> String {
    format!("{base}/{table}?{column}=eq.{value}")
}

fn parse_rows(json: &str) -> Result<Vec<serde_json::Value>, StoreError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| StoreError::Parse(e.to_string()))?;

    match value {
        serde_json::Value::Array(rows) => Ok(rows),
        _ => Err(StoreError::Parse("expected a JSON array of rows".to_owned())),
    }
}

#[cfg(test)]
#[path = "rest_test.rs"]
mod tests;
