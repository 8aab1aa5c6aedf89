//! In-memory note store — same contract as the file-backed store minus
//! the I/O failure mode. Backs the HTTP handler tests.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::store::{Note, NoteStore, StoreError};

#[derive(Default)]
pub struct MemoryNoteStore {
    notes: Mutex<Vec<Note>>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn list(&self) -> Result<Vec<Note>, StoreError> {
        Ok(self.notes.lock().await.clone())
    }

    async fn get(&self, name: &str) -> Result<Note, StoreError> {
        self.notes
            .lock()
            .await
            .iter()
            .find(|n| n.note_name == name)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, name: &str, content: &str) -> Result<(), StoreError> {
        let mut notes = self.notes.lock().await;
        if notes.iter().any(|n| n.note_name == name) {
            return Err(StoreError::Conflict);
        }
        notes.push(Note {
            note_name: name.to_string(),
            note: content.to_string(),
        });
        Ok(())
    }

    async fn update(&self, name: &str, content: &str) -> Result<(), StoreError> {
        let mut notes = self.notes.lock().await;
        match notes.iter_mut().find(|n| n.note_name == name) {
            Some(note) => {
                note.note = content.to_string();
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, name: &str) -> Result<(), StoreError> {
        let mut notes = self.notes.lock().await;
        let index = notes
            .iter()
            .position(|n| n.note_name == name)
            .ok_or(StoreError::NotFound)?;
        notes.remove(index);
        Ok(())
    }
}
