//! Notes system — named text notes persisted in a single JSON document.
//!
//! The whole collection is read and rewritten on every mutation. Stores
//! implement the `NoteStore` trait so the HTTP layer can run against the
//! file-backed store in production and an in-memory store in tests.

pub mod memory;
pub mod store;

pub use memory::MemoryNoteStore;
pub use store::{FileNoteStore, Note, NoteStore, StoreError};
