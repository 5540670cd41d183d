//! Persistence of the last-used inputs.

use std::fs;
use std::path::{Path, PathBuf};

use mv_sizing::SizingInputs;

use crate::schema::InputsFile;
use crate::{ProjectResult, load_json, save_json};

/// File name used when a store is opened on a directory.
pub const DEFAULT_STATE_FILE: &str = "mvws_conveyor_inputs.json";

/// Somewhere the last-used inputs live between sessions.
pub trait InputStore {
    /// Saved inputs, or `None` when nothing has been saved yet.
    fn load(&self) -> ProjectResult<Option<SizingInputs>>;

    fn save(&mut self, inputs: &SizingInputs) -> ProjectResult<()>;

    fn clear(&mut self) -> ProjectResult<()>;
}

/// Inputs kept in a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileInputStore {
    path: PathBuf,
}

impl FileInputStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_STATE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InputStore for FileInputStore {
    fn load(&self) -> ProjectResult<Option<SizingInputs>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(load_json(&self.path)?.inputs))
    }

    fn save(&mut self, inputs: &SizingInputs) -> ProjectResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }
        save_json(&self.path, &InputsFile::new(*inputs))
    }

    fn clear(&mut self) -> ProjectResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// Inputs kept in memory; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryInputStore {
    saved: Option<SizingInputs>,
}

impl MemoryInputStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_saved(inputs: SizingInputs) -> Self {
        Self {
            saved: Some(inputs),
        }
    }
}

impl InputStore for MemoryInputStore {
    fn load(&self) -> ProjectResult<Option<SizingInputs>> {
        Ok(self.saved)
    }

    fn save(&mut self, inputs: &SizingInputs) -> ProjectResult<()> {
        self.saved = Some(*inputs);
        Ok(())
    }

    fn clear(&mut self) -> ProjectResult<()> {
        self.saved = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryInputStore::new();
        assert_eq!(store.load().unwrap(), None);

        let inputs = SizingInputs {
            belt_count: 3.0,
            ..SizingInputs::default()
        };
        store.save(&inputs).unwrap();
        assert_eq!(store.load().unwrap(), Some(inputs));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn in_dir_uses_default_name() {
        let store = FileInputStore::in_dir(Path::new("/tmp/somewhere"));
        assert!(store.path().ends_with(DEFAULT_STATE_FILE));
    }
}
