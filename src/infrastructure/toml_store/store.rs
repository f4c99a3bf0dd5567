//! TOML file kitchen store
//!
//! One document holds every ingredient, recipe and inventory item. A unit of
//! work takes an exclusive advisory lock on `<file>.lock`, loads the document
//! into staged in-memory repositories and, on commit, rewrites the whole
//! document through a temporary file and a rename. Rolled back or dropped
//! units of work leave the file untouched.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use super::document::KitchenDocument;
use crate::domain::ports::{
    IngredientRepository, InventoryRepository, KitchenStore, RecipeRepository, UnitOfWork,
};
use crate::error::{CookmateError, CookmateResult};
use crate::infrastructure::memory::KitchenState;

#[derive(Debug, Clone)]
pub struct TomlStore {
    path: PathBuf,
}

impl TomlStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn storage_error(&self, message: impl ToString) -> CookmateError {
        CookmateError::Storage {
            path: self.path.clone(),
            message: message.to_string(),
        }
    }

    /// Read the current document; a missing file is an empty kitchen
    pub fn load(&self) -> CookmateResult<KitchenState> {
        if !self.path.exists() {
            return Ok(KitchenState::default());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| self.storage_error(e))?;
        let document: KitchenDocument =
            toml::from_str(&content).map_err(|e| self.storage_error(e))?;
        document
            .into_state()
            .map_err(|e| self.storage_error(format!("invalid record: {}", e)))
    }

    fn save(&self, document: &KitchenDocument) -> CookmateResult<()> {
        let content = toml::to_string_pretty(document).map_err(|e| self.storage_error(e))?;
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(&parent).map_err(|e| self.storage_error(e))?;
        tmp.write_all(content.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| self.storage_error(e))?;
        tmp.persist(&self.path)
            .map_err(|e| self.storage_error(e.error))?;
        debug!(path = %self.path.display(), bytes = content.len(), "kitchen document written");
        Ok(())
    }

    fn acquire_lock(&self) -> CookmateResult<File> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.storage_error(e))?;
        }
        let lock_file = File::create(&lock_path).map_err(|e| self.storage_error(e))?;
        lock_file
            .lock_exclusive()
            .map_err(|e| self.storage_error(e))?;
        Ok(lock_file)
    }
}

impl KitchenStore for TomlStore {
    fn begin(&self) -> CookmateResult<Box<dyn UnitOfWork + '_>> {
        let lock = self.acquire_lock()?;
        let committed = self.load()?;
        Ok(Box::new(TomlUnitOfWork {
            store: self,
            lock,
            staged: committed.clone(),
            committed,
        }))
    }

    fn backend(&self) -> &'static str {
        "toml"
    }
}

pub struct TomlUnitOfWork<'a> {
    store: &'a TomlStore,
    lock: File,
    committed: KitchenState,
    staged: KitchenState,
}

impl UnitOfWork for TomlUnitOfWork<'_> {
    fn ingredients(&mut self) -> &mut dyn IngredientRepository {
        self.staged.ingredients_mut()
    }

    fn recipes(&mut self) -> &mut dyn RecipeRepository {
        self.staged.recipes_mut()
    }

    fn inventory(&mut self) -> &mut dyn InventoryRepository {
        self.staged.inventory_mut()
    }

    fn commit(&mut self) -> CookmateResult<()> {
        // Compare stored rows; Quantity equality normalizes units
        let document = KitchenDocument::from_state(&self.staged);
        if document == KitchenDocument::from_state(&self.committed) {
            return Ok(());
        }
        self.store.save(&document)?;
        self.committed = self.staged.clone();
        Ok(())
    }

    fn rollback(&mut self) -> CookmateResult<()> {
        self.staged = self.committed.clone();
        Ok(())
    }
}

impl Drop for TomlUnitOfWork<'_> {
    fn drop(&mut self) {
        let _ = self.lock.unlock();
    }
}
