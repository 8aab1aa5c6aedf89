//! File-backed note store.
//!
//! All notes live in one JSON array on disk, in insertion order. Every
//! operation loads the full document, mutates it in memory, and writes it
//! back. A single async mutex spans each load/mutate/write cycle so
//! interleaved requests cannot clobber each other's writes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;
use tokio::sync::Mutex;

/// A named unit of text content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub note_name: String,
    pub note: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// No note with the requested name
    #[error("note not found")]
    NotFound,

    /// A note with the requested name already exists
    #[error("note already exists")]
    Conflict,

    /// Document missing, unreadable, unparseable, or write failure.
    /// The detail string is for the server log, never for clients.
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Capability set of the note storage backend
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// All notes, in insertion order
    async fn list(&self) -> Result<Vec<Note>, StoreError>;

    /// First note whose name matches
    async fn get(&self, name: &str) -> Result<Note, StoreError>;

    /// Append a new note; duplicate names are rejected, never overwritten
    async fn create(&self, name: &str, content: &str) -> Result<(), StoreError>;

    /// Replace the content of an existing note, position unchanged
    async fn update(&self, name: &str, content: &str) -> Result<(), StoreError>;

    /// Remove exactly one note by name; the rest keep their relative order
    async fn delete(&self, name: &str) -> Result<(), StoreError>;
}

/// Note store over a single JSON document on disk
pub struct FileNoteStore {
    path: PathBuf,
    // Held across the full load/mutate/write cycle of every mutation.
    write_lock: Mutex<()>,
}

impl FileNoteStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Read and parse the full document. A missing document is a storage
    /// failure, not an empty collection.
    async fn load(&self) -> Result<Vec<Note>, StoreError> {
        let data = fs::read_to_string(&self.path)
            .await
            .map_err(|e| StoreError::Storage(format!("read {}: {}", self.path.display(), e)))?;
        serde_json::from_str(&data)
            .map_err(|e| StoreError::Storage(format!("parse {}: {}", self.path.display(), e)))
    }

    /// Serialize and write the full document back, unindented
    async fn save(&self, notes: &[Note]) -> Result<(), StoreError> {
        let data = serde_json::to_string(notes)
            .map_err(|e| StoreError::Storage(format!("serialize notes: {}", e)))?;
        fs::write(&self.path, data)
            .await
            .map_err(|e| StoreError::Storage(format!("write {}: {}", self.path.display(), e)))
    }
}

#[async_trait]
impl NoteStore for FileNoteStore {
    async fn list(&self) -> Result<Vec<Note>, StoreError> {
        self.load().await
    }

    async fn get(&self, name: &str) -> Result<Note, StoreError> {
        let notes = self.load().await?;
        notes
            .into_iter()
            .find(|n| n.note_name == name)
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, name: &str, content: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut notes = self.load().await?;
        if notes.iter().any(|n| n.note_name == name) {
            return Err(StoreError::Conflict);
        }
        notes.push(Note {
            note_name: name.to_string(),
            note: content.to_string(),
        });
        self.save(&notes).await
    }

    async fn update(&self, name: &str, content: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut notes = self.load().await?;
        match notes.iter_mut().find(|n| n.note_name == name) {
            Some(note) => note.note = content.to_string(),
            None => return Err(StoreError::NotFound),
        }
        self.save(&notes).await
    }

    async fn delete(&self, name: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut notes = self.load().await?;
        let index = notes
            .iter()
            .position(|n| n.note_name == name)
            .ok_or(StoreError::NotFound)?;
        notes.remove(index);
        self.save(&notes).await
    }
}
