use super::state::ChoreStore;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Get the default chore store file path (~/.config/chore-bro/chores.json)
pub fn get_store_path() -> PathBuf {
    crate::config::get_config_dir().join("chores.json")
}

/// Load the chore store from a JSON file
///
/// If the file doesn't exist, returns a new empty store.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_store(path: &Path) -> Result<ChoreStore> {
    if !path.exists() {
        return Ok(ChoreStore::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open chore store at {}", path.display()))?;

    let store: ChoreStore = serde_json::from_reader(file).context("Failed to load chore store")?;

    // Version check
    if store.version != 1 {
        anyhow::bail!("Unsupported chore store version: {}", store.version);
    }

    Ok(store)
}

/// Save the chore store to a JSON file atomically
///
/// Uses atomic-write-file so the store is never left half-written.
/// Creates the config directory if it doesn't exist.
pub fn save_store(path: &Path, store: &ChoreStore) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create store directory at {}", parent.display())
            })?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, store).context("Failed to serialize chore store")?;

    file.commit().context("Failed to save chore store")?;

    Ok(())
}
