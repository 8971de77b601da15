use super::codec;
use super::error::SaveError;
use super::store::BlobStore;
use crate::core::constants::SAVE_KEY;
use crate::core::ProgressionEngine;

/// Saves and loads the game through a [`BlobStore`].
pub struct SaveManager<S: BlobStore> {
    store: S,
    key: String,
}

impl<S: BlobStore> SaveManager<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, SAVE_KEY)
    }

    pub fn with_key(store: S, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Writes the engine's state, stamped with the engine clock.
    pub fn save(&mut self, engine: &ProgressionEngine) -> Result<(), SaveError> {
        let bytes = codec::serialize(engine.state(), engine.now_ms())?;
        self.store.set(&self.key, &bytes)?;
        log::info!("Saved game ({} bytes)", bytes.len());
        Ok(())
    }

    /// Loads the saved game, if there is one.
    ///
    /// Offline earnings since the last save are attached to the engine as a
    /// pending credit.
    pub fn load(&self, now_ms: i64) -> Result<Option<ProgressionEngine>, SaveError> {
        let Some(bytes) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        let loaded = codec::deserialize(&bytes, now_ms)?;
        log::info!("Loaded save (schema {})", loaded.schema_version);
        Ok(Some(loaded.into_engine()))
    }

    /// Loads the saved game, starting fresh when there is none or it is
    /// unreadable.
    pub fn load_or_new(&self, now_ms: i64) -> ProgressionEngine {
        match self.load(now_ms) {
            Ok(Some(engine)) => engine,
            Ok(None) => ProgressionEngine::new(now_ms),
            Err(e) => {
                log::warn!("Could not load save, starting a new game: {}", e);
                ProgressionEngine::new(now_ms)
            }
        }
    }

    /// Deletes the save.
    pub fn reset(&mut self) -> Result<(), SaveError> {
        self.store.remove(&self.key)?;
        log::info!("Save reset");
        Ok(())
    }

    /// The raw save text, for backups.
    pub fn export(&self) -> Result<Option<String>, SaveError> {
        let bytes = self.store.get(&self.key)?;
        Ok(bytes.map(|b| String::from_utf8_lossy(&b).into_owned()))
    }

    /// Replaces the save with `text` after checking it parses.
    pub fn import(&mut self, text: &str) -> Result<(), SaveError> {
        codec::parse_record(text.as_bytes())?;
        self.store.set(&self.key, text.as_bytes())?;
        log::info!("Imported save");
        Ok(())
    }
}
