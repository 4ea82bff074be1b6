//! Table store over a hosted backend's REST interface (PostgREST dialect:
//! `/rest/v1/{table}`, `eq.` filters, `Prefer` headers).

use super::TableStore;
use crate::config::RemoteConfig;
use crate::error::{AppError, ConfigError};
use crate::resource::TableName;
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use serde_json::{Map, Value};
use std::time::Duration;

const RETURN_REPRESENTATION: &str = "return=representation";
const MERGE_DUPLICATES: &str = "resolution=merge-duplicates,return=representation";

pub struct RemoteTableStore {
    client: reqwest::Client,
    base_url: String,
    key: String,
}

impl RemoteTableStore {
    pub fn new(config: &RemoteConfig, timeout: Duration) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(RemoteTableStore {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            key: config.key.clone(),
        })
    }

    fn table_url(&self, table: &TableName) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
    }

    /// Sends the request; transport errors and non-2xx statuses become `AppError::Backend`.
    async fn send(&self, builder: RequestBuilder) -> Result<Response, AppError> {
        let response = builder.send().await.map_err(|e| AppError::Backend(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(status = %status, error = %e, "error body unreadable");
                String::new()
            }
        };
        Err(AppError::Backend(backend_message(status, &text)))
    }

    async fn rows(response: Response) -> Result<Vec<Value>, AppError> {
        response
            .json::<Vec<Value>>()
            .await
            .map_err(|e| AppError::Backend(format!("unexpected response body: {}", e)))
    }
}

/// The backend's `message` field when the error body carries one, else the raw text or status.
fn backend_message(status: reqwest::StatusCode, text: &str) -> String {
    serde_json::from_str::<Value>(text)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
        .or_else(|| Some(text.trim().to_string()).filter(|t| !t.is_empty()))
        .unwrap_or_else(|| status.to_string())
}

/// `eq.` filter operand for an id value taken from a JSON body.
fn id_filter(id: &Value) -> String {
    match id {
        Value::String(s) => format!("eq.{}", s),
        other => format!("eq.{}", other),
    }
}

#[async_trait]
impl TableStore for RemoteTableStore {
    async fn list(&self, table: &TableName) -> Result<Vec<Value>, AppError> {
        tracing::debug!(table = %table, "remote select");
        let url = self.table_url(table);
        let response = self.send(self.request(Method::GET, &url).query(&[("select", "*")])).await?;
        Self::rows(response).await
    }

    async fn create(&self, table: &TableName, item: Value) -> Result<Value, AppError> {
        tracing::debug!(table = %table, "remote insert");
        let url = self.table_url(table);
        let builder = self
            .request(Method::POST, &url)
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&item);
        let rows = Self::rows(self.send(builder).await?).await?;
        Ok(rows.into_iter().next().unwrap_or(item))
    }

    async fn upsert_many(&self, table: &TableName, rows: Vec<Value>) -> Result<Value, AppError> {
        tracing::debug!(table = %table, count = rows.len(), "remote upsert");
        let url = self.table_url(table);
        let builder = self
            .request(Method::POST, &url)
            .header("Prefer", MERGE_DUPLICATES)
            .json(&rows);
        Ok(Value::Array(Self::rows(self.send(builder).await?).await?))
    }

    async fn update(&self, table: &TableName, id: &Value, fields: Map<String, Value>) -> Result<Value, AppError> {
        tracing::debug!(table = %table, id = %id, "remote update");
        let url = self.table_url(table);
        let builder = self
            .request(Method::PATCH, &url)
            .query(&[("id", id_filter(id))])
            .header("Prefer", RETURN_REPRESENTATION)
            .json(&fields);
        Ok(Value::Array(Self::rows(self.send(builder).await?).await?))
    }

    async fn delete(&self, table: &TableName, id: &str) -> Result<(), AppError> {
        tracing::debug!(table = %table, id = %id, "remote delete");
        let url = self.table_url(table);
        self.send(self.request(Method::DELETE, &url).query(&[("id", format!("eq.{}", id))]))
            .await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        let url = format!("{}/rest/v1/", self.base_url);
        self.send(self.request(Method::GET, &url)).await?;
        Ok(())
    }
}
