use std::path::PathBuf;

/// Default values
pub mod defaults {
    /// The port is fixed; nothing in the environment overrides it.
    pub const PORT: u16 = 8000;
    pub const NOTES_FILE: &str = "notes.json";
    pub const UPLOAD_DIR: &str = "uploads";
    pub const STATIC_DIR: &str = "static";
}

/// Returns the absolute path to the backend directory.
/// Uses CARGO_MANIFEST_DIR at compile time, so it always resolves
/// the same way regardless of the working directory at runtime.
pub fn backend_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Path of the notes document — a single JSON array holding every note
pub fn notes_file() -> PathBuf {
    backend_dir().join(defaults::NOTES_FILE)
}

/// Directory where uploaded file parts are written
pub fn upload_dir() -> PathBuf {
    backend_dir().join(defaults::UPLOAD_DIR)
}

/// Directory holding the static upload form page
pub fn static_dir() -> PathBuf {
    backend_dir().join(defaults::STATIC_DIR)
}
