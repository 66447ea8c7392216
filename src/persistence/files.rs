use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Name of the data directory, local or in $HOME
pub const DATA_DIR_NAME: &str = ".sprint";

/// Get the sprint directory - checks for local .sprint first, then falls back to global ~/.sprint
pub fn get_sprint_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;

    if let Some(local_dir) = find_local_sprint(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(DATA_DIR_NAME))
}

/// Find local .sprint directory by walking up the directory tree
fn find_local_sprint(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let sprint_dir = current.join(DATA_DIR_NAME);
        if sprint_dir.is_dir() {
            return Some(sprint_dir);
        }
        current = current.parent()?;
    }
}

/// Ensure the sprint directory exists
pub fn ensure_sprint_dir() -> Result<PathBuf> {
    let dir = get_sprint_dir()?;
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Create `dir` (and parents) if missing
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(())
}

/// Initialize a local .sprint directory in the current directory
pub fn init_local_sprint() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    init_sprint_in(&current_dir)
}

fn init_sprint_in(parent: &Path) -> Result<PathBuf> {
    let sprint_dir = parent.join(DATA_DIR_NAME);

    if sprint_dir.exists() {
        anyhow::bail!("Sprint directory already exists: {}", sprint_dir.display());
    }

    fs::create_dir_all(&sprint_dir)
        .with_context(|| format!("Failed to create directory: {}", sprint_dir.display()))?;

    Ok(sprint_dir)
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}
