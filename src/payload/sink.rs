//! Where completed forms are sent

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A mutation ready to be sent to the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationPayload {
    pub id: Uuid,
    pub operation: String,
    pub variables: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

impl MutationPayload {
    pub fn new(operation: impl Into<String>, variables: Map<String, Value>) -> Self {
        Self {
            id: Uuid::new_v4(),
            operation: operation.into(),
            variables,
            created_at: Utc::now(),
        }
    }
}

/// Trait for payload delivery, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PayloadSink: Send + Sync {
    /// Deliver a payload, returning its id
    async fn submit(&mut self, payload: &MutationPayload) -> Result<Uuid>;

    /// Most recent payload sent for `operation`
    async fn latest(&self, operation: &str) -> Result<Option<MutationPayload>>;
}

/// Stores every payload as a JSON file, one per submission
#[derive(Debug, Clone)]
pub struct JsonOutbox {
    dir: PathBuf,
}

impl JsonOutbox {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, payload: &MutationPayload) -> PathBuf {
        self.dir
            .join(format!("{}-{}.json", payload.operation, payload.id))
    }
}

#[async_trait]
impl PayloadSink for JsonOutbox {
    async fn submit(&mut self, payload: &MutationPayload) -> Result<Uuid> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("Failed to create outbox {}", self.dir.display()))?;
        let path = self.path_for(payload);
        let content = serde_json::to_string_pretty(payload)?;
        tokio::fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(operation = %payload.operation, id = %payload.id, "payload stored");
        Ok(payload.id)
    }

    async fn latest(&self, operation: &str) -> Result<Option<MutationPayload>> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let prefix = format!("{operation}-");
        let mut latest: Option<MutationPayload> = None;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if !name.starts_with(&prefix) || !name.ends_with(".json") {
                continue;
            }
            let content = tokio::fs::read_to_string(entry.path()).await?;
            let payload: MutationPayload = match serde_json::from_str(&content) {
                Ok(payload) => payload,
                Err(e) => {
                    tracing::warn!("Skipping unreadable payload {name}: {e}");
                    continue;
                }
            };
            // the prefix alone would also match e.g. "signUpDoctor-"
            if payload.operation != operation {
                continue;
            }
            if latest
                .as_ref()
                .map_or(true, |current| payload.created_at > current.created_at)
            {
                latest = Some(payload);
            }
        }
        Ok(latest)
    }
}
