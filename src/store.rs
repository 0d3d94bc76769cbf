//! # Record Store
//!
//! Saved résumés, kept as one JSON array the way the browser editor keeps
//! them in local storage. Every operation reads the file fresh, so two
//! stores over the same path see each other's writes.
//!
//! Loading repairs what the editor tolerated: missing names, `null` fields
//! and timestamps are filled in by the model's deserializers, and an
//! `updatedAt` earlier than `createdAt` is pulled forward.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info};

use crate::error::VitaeError;
use crate::model::{RecordId, ResumeContent, ResumeRecord};

pub trait RecordStore {
    /// Every record, in stored order.
    fn list(&self) -> Result<Vec<ResumeRecord>, VitaeError>;

    fn get(&self, id: &RecordId) -> Result<ResumeRecord, VitaeError> {
        self.list()?
            .into_iter()
            .find(|r| &r.id == id)
            .ok_or_else(|| VitaeError::NotFound(id.to_string()))
    }

    /// Insert or replace by id. Stamps `updatedAt`, and `createdAt` for a
    /// record the store has not seen. Returns the record as stored.
    fn save(&mut self, record: ResumeRecord) -> Result<ResumeRecord, VitaeError>;

    fn delete(&mut self, id: &RecordId) -> Result<(), VitaeError>;

    /// Store new content as a fresh record.
    fn create(&mut self, data: ResumeContent) -> Result<ResumeRecord, VitaeError> {
        self.save(ResumeRecord::from_content(data))
    }

    /// Records whose name contains `query`, ignoring case. A blank query
    /// matches nothing.
    fn search(&self, query: &str) -> Result<Vec<ResumeRecord>, VitaeError> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .list()?
            .into_iter()
            .filter(|r| r.name.to_lowercase().contains(&query))
            .collect())
    }
}

/// A store backed by a single JSON file. A missing or empty file is an
/// empty store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<ResumeRecord>, VitaeError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no store file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        parse_records(&raw)
    }

    fn persist(&self, records: &[ResumeRecord]) -> Result<(), VitaeError> {
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Parse a stored array and repair its timestamps.
pub fn parse_records(raw: &str) -> Result<Vec<ResumeRecord>, VitaeError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut records: Vec<ResumeRecord> = serde_json::from_str(raw)?;
    for record in &mut records {
        if record.updated_at < record.created_at {
            debug!(id = %record.id, "repairing updatedAt before createdAt");
            record.updated_at = record.created_at;
        }
    }
    Ok(records)
}

impl RecordStore for JsonFileStore {
    fn list(&self) -> Result<Vec<ResumeRecord>, VitaeError> {
        self.load()
    }

    fn save(&mut self, mut record: ResumeRecord) -> Result<ResumeRecord, VitaeError> {
        let mut records = self.load()?;
        let now = Utc::now();
        record.updated_at = now;

        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => {
                record.created_at = existing.created_at;
                *existing = record.clone();
                info!(id = %record.id, "updated resume");
            }
            None => {
                record.created_at = now;
                records.push(record.clone());
                info!(id = %record.id, "saved new resume");
            }
        }

        self.persist(&records)?;
        Ok(record)
    }

    fn delete(&mut self, id: &RecordId) -> Result<(), VitaeError> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| &r.id != id);
        if records.len() == before {
            return Err(VitaeError::NotFound(id.to_string()));
        }
        self.persist(&records)?;
        info!(%id, "deleted resume");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UNTITLED_RESUME;
    use tempfile::TempDir;

    fn store() -> (TempDir, JsonFileStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("resumes.json"));
        (dir, store)
    }

    fn content(name: &str) -> ResumeContent {
        ResumeContent {
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn missing_file_is_empty() {
        let (_dir, store) = store();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn save_then_get() {
        let (_dir, mut store) = store();
        let saved = store.create(content("Ada")).unwrap();
        let loaded = store.get(&saved.id).unwrap();
        assert_eq!(loaded, saved);
        assert_eq!(loaded.name, "Ada's Resume");
    }

    #[test]
    fn save_existing_replaces_and_bumps_updated_at() {
        let (_dir, mut store) = store();
        let first = store.create(content("Ada")).unwrap();

        let mut edited = first.clone();
        edited.data.summary = "Mathematician.".into();
        edited.created_at = Utc::now() + chrono::Duration::days(1);
        let second = store.save(edited).unwrap();

        let all = store.list().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].data.summary, "Mathematician.");
        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at >= first.updated_at);
    }

    #[test]
    fn delete_removes_and_reports_missing() {
        let (_dir, mut store) = store();
        let a = store.create(content("Ada")).unwrap();
        let mut b = ResumeRecord::from_content(content("Grace"));
        b.id = RecordId::Text("grace".into());
        store.save(b).unwrap();

        store.delete(&a.id).unwrap();
        let names: Vec<String> = store.list().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Grace's Resume".to_string()]);

        let err = store.delete(&a.id).unwrap_err();
        assert!(matches!(err, VitaeError::NotFound(_)));
    }

    #[test]
    fn search_is_case_insensitive() {
        let (_dir, mut store) = store();
        store.create(content("Ada")).unwrap();
        let mut other = ResumeRecord::new("Backend CV", ResumeContent::default());
        other.id = RecordId::Text("cv".into());
        store.save(other).unwrap();

        let hits = store.search("ADA").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Ada's Resume");
        assert!(store.search("  ").unwrap().is_empty());
    }

    #[test]
    fn load_repairs_stored_records() {
        let raw = r#"[
            { "id": 1, "name": null, "createdAt": "2024-05-01T10:00:00Z",
              "updatedAt": "2024-04-01T10:00:00Z", "data": { "name": null } },
            { "id": 2, "template": "template2", "data": { "selectedTemplate": "template2" } }
        ]"#;
        let records = parse_records(raw).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, UNTITLED_RESUME);
        assert_eq!(records[0].updated_at, records[0].created_at);
        assert_eq!(records[0].data.name, "");
        assert!(records[1].updated_at >= records[1].created_at);
    }

    #[test]
    fn corrupted_store_is_a_parse_error() {
        let (_dir, store) = store();
        fs::write(store.path(), "{ not json").unwrap();
        let err = store.list().unwrap_err();
        assert!(matches!(err, VitaeError::ParseError { .. }));
        assert_eq!(err.user_message(), "Error: Resume data is corrupted");
    }
}
