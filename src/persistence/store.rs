use anyhow::{Context, Result};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// String-keyed slot storage for app state.
///
/// Everything the app persists goes through this seam, so tests can swap in
/// an in-memory store and inspect exactly what was written.
pub trait Store {
    /// Read the raw value under `key`, or None if the slot has never been written
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store: one JSON file per key inside the daylist directory
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn open(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Store for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(Some(content))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        atomic_write(self.slot_path(key), value)
    }
}

/// In-memory store for tests
#[derive(Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Get the daylist directory - checks for local .daylist first, then falls back to global ~/.daylist
pub fn get_data_dir() -> Result<PathBuf> {
    // Check for local .daylist directory
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(local_dir) = find_local_daylist(&current_dir) {
        return Ok(local_dir);
    }

    // Fall back to global ~/.daylist
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".daylist"))
}

/// Find local .daylist directory by walking up the directory tree
fn find_local_daylist(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let daylist_dir = current.join(".daylist");
        if daylist_dir.exists() && daylist_dir.is_dir() {
            return Some(daylist_dir);
        }

        // Move up to parent directory
        current = current.parent()?;
    }
}

/// Ensure the daylist directory exists
pub fn ensure_data_dir() -> Result<PathBuf> {
    let dir = get_data_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .daylist directory in the current directory
pub fn init_local_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let daylist_dir = current_dir.join(".daylist");

    if daylist_dir.exists() {
        anyhow::bail!("daylist directory already exists: {}", daylist_dir.display());
    }

    fs::create_dir_all(&daylist_dir)
        .with_context(|| format!("Failed to create directory: {}", daylist_dir.display()))?;

    Ok(daylist_dir)
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    // Create temp file in the same directory
    let mut temp_file = NamedTempFile::new_in(dir).context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    // Sync to disk
    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    // Atomically rename temp file to target
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}
