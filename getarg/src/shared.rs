//! Publication of parsed arguments to concurrent readers.
//!
//! A new [`ArgMap`] is always built completely before it replaces the
//! published one, so readers only ever hold finished snapshots.

use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::debug;

use crate::args::ArgMap;

#[derive(Debug, Default)]
pub struct SharedArgs {
    current: RwLock<Arc<ArgMap>>,
}

impl SharedArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from `args` and publish the result. Previous contents are
    /// discarded entirely.
    pub fn parse<I, S>(&self, args: I) -> Arc<ArgMap>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.publish(ArgMap::parse(args))
    }

    /// Publish a map built elsewhere, e.g. after applying soft-set defaults.
    pub fn publish(&self, map: ArgMap) -> Arc<ArgMap> {
        let map = Arc::new(map);
        // The guarded value is a single Arc, so a poisoned lock still holds a
        // complete snapshot.
        {
            let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
            *current = Arc::clone(&map);
        }
        debug!(names = map.len(), "published arguments");
        map
    }

    /// The currently published map.
    pub fn snapshot(&self) -> Arc<ArgMap> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*current)
    }
}

/// Process-wide arguments for programs that parse exactly once.
pub fn global() -> &'static SharedArgs {
    static GLOBAL: OnceLock<SharedArgs> = OnceLock::new();
    GLOBAL.get_or_init(SharedArgs::new)
}
