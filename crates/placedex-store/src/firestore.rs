//! Minimal Firestore REST client: token-authenticated, batched commits.

use std::time::Duration;

use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::credentials::{exchange_token, ServiceAccountKey};
use crate::error::StoreError;

const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com";

/// Client for the Firestore REST `documents:commit` endpoint.
///
/// Use [`FirestoreClient::connect`] for production (performs the OAuth
/// exchange) or [`FirestoreClient::with_token`] to point at a mock server in
/// tests with a canned token.
pub struct FirestoreClient {
    http: reqwest::Client,
    project_id: String,
    token: String,
    base_url: String,
}

impl FirestoreClient {
    /// Build an HTTP client and exchange the service-account credential for
    /// a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the client cannot be constructed or
    /// the exchange request fails, [`StoreError::Credential`] /
    /// [`StoreError::TokenExchange`] if the credential is rejected.
    pub async fn connect(key: &ServiceAccountKey, timeout_secs: u64) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("placedex/0.1 (index-loader)")
            .build()?;
        let token = exchange_token(&http, key).await?;
        Ok(Self {
            http,
            project_id: key.project_id.clone(),
            token,
            base_url: DEFAULT_BASE_URL.to_owned(),
        })
    }

    /// Client with a pre-issued token and custom base URL (for wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the underlying client cannot be
    /// constructed.
    pub fn with_token(
        project_id: &str,
        token: &str,
        base_url: &str,
    ) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            project_id: project_id.to_owned(),
            token: token.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn documents_root(&self) -> String {
        format!(
            "projects/{}/databases/(default)/documents",
            self.project_id
        )
    }

    /// Commit one batch of documents into `collection`, each under a fresh
    /// random document ID.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] on network failure or
    /// [`StoreError::Commit`] on a non-2xx response.
    pub async fn commit(&self, collection: &str, docs: &[Value]) -> Result<(), StoreError> {
        let root = self.documents_root();
        let writes: Vec<Value> = docs
            .iter()
            .map(|doc| {
                let doc_id = Uuid::new_v4().simple().to_string();
                json!({
                    "update": {
                        "name": format!("{root}/{collection}/{doc_id}"),
                        "fields": to_document_fields(doc),
                    }
                })
            })
            .collect();

        let url = format!("{}/v1/{root}:commit", self.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&json!({ "writes": writes }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Commit {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    /// Write all documents in chunks of `batch_limit` (the store's per-commit
    /// document ceiling). Returns the number of documents written.
    ///
    /// # Errors
    ///
    /// Propagates the first failing commit; earlier chunks stay written.
    pub async fn write_all(
        &self,
        collection: &str,
        docs: &[Value],
        batch_limit: usize,
    ) -> Result<usize, StoreError> {
        let batch_limit = batch_limit.max(1);
        for (i, chunk) in docs.chunks(batch_limit).enumerate() {
            self.commit(collection, chunk).await?;
            tracing::info!(
                batch = i + 1,
                documents = chunk.len(),
                collection,
                "committed batch"
            );
        }
        Ok(docs.len())
    }
}

/// Convert a JSON object into Firestore's typed `fields` map.
fn to_document_fields(doc: &Value) -> Value {
    match doc {
        Value::Object(map) => {
            let fields: Map<String, Value> = map
                .iter()
                .map(|(k, v)| (k.clone(), to_firestore_value(v)))
                .collect();
            Value::Object(fields)
        }
        other => json!({ "value": to_firestore_value(other) }),
    }
}

/// Map a JSON value onto the Firestore typed-value envelope.
///
/// Integral numbers become `integerValue` (Firestore encodes them as
/// strings), everything else numeric becomes `doubleValue`.
fn to_firestore_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                json!({ "integerValue": i.to_string() })
            } else {
                json!({ "doubleValue": n.as_f64() })
            }
        }
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(to_firestore_value).collect();
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(map) => {
            let fields: Map<String, Value> = map
                .iter()
                .map(|(k, v)| (k.clone(), to_firestore_value(v)))
                .collect();
            json!({ "mapValue": { "fields": fields } })
        }
    }
}
