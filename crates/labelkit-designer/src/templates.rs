//! Template persistence collaborator.
//!
//! The editor never stores templates itself: it hands a named, serialized
//! layout to a [`TemplateStore`] and receives listings back. Calls are
//! async and fire-and-forget from the editor's perspective: the UI stays
//! interactive while a save is pending, completions only ever write to the
//! status surface, and a new save issues a new independent request (no
//! cancellation).

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// A saved template as the store describes it in listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplateRecord {
    /// Store-assigned identifier.
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub width_mm: f64,
    pub height_mm: f64,
    pub created_at: DateTime<Utc>,
}

/// Request to persist a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTemplate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub width_mm: f64,
    pub height_mm: f64,
    /// JSON-encoded layout, produced by the serializer and treated as
    /// opaque by the store.
    pub layout: String,
}

/// External persistence API for label templates.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Persists a new template and returns its record.
    async fn create(&self, template: NewTemplate) -> Result<TemplateRecord>;

    /// Lists saved templates, newest first.
    async fn list(&self) -> Result<Vec<TemplateRecord>>;

    /// Fetches the opaque layout JSON of a saved template.
    async fn fetch_layout(&self, id: i64) -> Result<String>;
}

/// In-memory [`TemplateStore`] for tests and standalone embedding.
#[derive(Debug, Default)]
pub struct MemoryTemplateStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    records: Vec<(TemplateRecord, String)>,
    next_id: i64,
}

impl MemoryTemplateStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored templates.
    pub fn len(&self) -> usize {
        self.inner.lock().records.len()
    }

    /// Whether the store holds no templates.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().records.is_empty()
    }
}

#[async_trait]
impl TemplateStore for MemoryTemplateStore {
    async fn create(&self, template: NewTemplate) -> Result<TemplateRecord> {
        let mut inner = self.inner.lock();
        inner.next_id += 1;
        let record = TemplateRecord {
            id: inner.next_id,
            name: template.name,
            description: template.description,
            width_mm: template.width_mm,
            height_mm: template.height_mm,
            created_at: Utc::now(),
        };
        tracing::info!(id = record.id, name = %record.name, "template stored");
        inner.records.push((record.clone(), template.layout));
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<TemplateRecord>> {
        let inner = self.inner.lock();
        let mut records: Vec<TemplateRecord> =
            inner.records.iter().map(|(r, _)| r.clone()).collect();
        records.reverse();
        Ok(records)
    }

    async fn fetch_layout(&self, id: i64) -> Result<String> {
        let inner = self.inner.lock();
        inner
            .records
            .iter()
            .find(|(r, _)| r.id == id)
            .map(|(_, layout)| layout.clone())
            .ok_or_else(|| anyhow!("Template {} not found", id))
    }
}
