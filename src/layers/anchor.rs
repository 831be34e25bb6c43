//! Anchor creation seam
//!
//! The registry never talks to a renderer directly. It asks an
//! [`AnchorFactory`] for one anchor per POI and hands each anchor a
//! [`SelectHook`] that routes interaction back to the caller.

use crate::{poi::place::Poi, Result};
use std::sync::Arc;

/// Callback invoked with the POI behind a selected anchor.
pub type SelectCallback = Arc<dyn Fn(&Poi) + Send + Sync>;

/// Interaction hook bound to one anchor's POI.
#[derive(Clone)]
pub struct SelectHook {
    poi: Arc<Poi>,
    callback: SelectCallback,
}

impl SelectHook {
    pub fn new(poi: Poi, callback: SelectCallback) -> Self {
        Self {
            poi: Arc::new(poi),
            callback,
        }
    }

    pub fn poi(&self) -> &Poi {
        &self.poi
    }

    /// Fire the selection callback. Reads the POI, never mutates it.
    pub fn trigger(&self) {
        (self.callback)(&self.poi)
    }
}

impl std::fmt::Debug for SelectHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectHook")
            .field("poi", &self.poi.name)
            .finish_non_exhaustive()
    }
}

/// Creates and destroys rendered anchors on behalf of the registry.
pub trait AnchorFactory {
    type Anchor;

    /// Create an anchor for `poi`, wired to `hook`.
    fn create(&mut self, poi: &Poi, hook: SelectHook) -> Result<Self::Anchor>;

    /// Remove an anchor from the scene. Called exactly once per created anchor.
    fn destroy(&mut self, anchor: Self::Anchor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_hook_passes_its_poi() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let hook = SelectHook::new(
            Poi::new("Park", 1.0, 2.0),
            Arc::new(move |poi: &Poi| sink.lock().unwrap().push(poi.name.clone())),
        );

        hook.trigger();
        hook.clone().trigger();
        assert_eq!(*seen.lock().unwrap(), vec!["Park", "Park"]);
        assert_eq!(hook.poi().latitude, 1.0);
    }
}
