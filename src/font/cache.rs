use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};

use log::{debug, info};
use once_cell::sync::OnceCell;

use crate::{Error, Result};

use super::FontService;

/// Loaded fonts, keyed by path.  Each path is loaded at most once: the map lock is only held
/// long enough to find (or create) the path's slot, and concurrent first loads of the same path
/// block on that slot rather than loading twice.  A failed load leaves the slot empty, so the
/// next call retries.
#[derive(Debug)]
pub struct FontCache<F> {
    slots: Mutex<HashMap<PathBuf, Arc<OnceCell<Arc<F>>>>>,
}

impl<F> FontCache<F> {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the font at `path`, loading it through `service` if this is the first request
    pub fn get_or_load<S>(&self, service: &S, path: &Path) -> Result<Arc<F>>
    where
        S: FontService<Font = F>,
    {
        let slot = {
            // The map is never left half-updated, so a poisoned lock is still usable
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(slots.entry(path.to_owned()).or_default())
        };
        if let Some(font) = slot.get() {
            debug!("font cache hit for `{}`", path.display());
            return Ok(Arc::clone(font));
        }
        let font = slot.get_or_try_init(|| {
            info!("loading font `{}`", path.display());
            service
                .load(path)
                .map(Arc::new)
                .map_err(|source| Error::FontLoad {
                    path: path.to_owned(),
                    source,
                })
        })?;
        Ok(Arc::clone(font))
    }

    /// Number of fonts which have been successfully loaded
    pub fn len(&self) -> usize {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.values().filter(|s| s.get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<F> Default for FontCache<F> {
    fn default() -> Self {
        Self::new()
    }
}
