//! Active POI set and its rendered anchors
//!
//! The registry is the sole owner of every live anchor. POIs and anchors are
//! stored as paired records, so the two can never drift in length or order,
//! and they are only ever created and destroyed in batches.

use crate::{
    layers::anchor::{AnchorFactory, SelectCallback, SelectHook},
    poi::place::Poi,
    Error,
};

/// One live (POI, anchor) pair.
pub struct ActiveEntry<A> {
    hook: SelectHook,
    anchor: A,
}

impl<A> ActiveEntry<A> {
    pub fn poi(&self) -> &Poi {
        self.hook.poi()
    }

    pub fn anchor(&self) -> &A {
        &self.anchor
    }
}

/// Result of a [`PoiRegistry::replace_all`] call.
#[derive(Debug)]
pub struct ReplaceOutcome {
    pub requested: usize,
    pub created: usize,
    /// Factory failure that stopped creation early
    pub error: Option<Error>,
}

impl ReplaceOutcome {
    pub fn is_complete(&self) -> bool {
        self.error.is_none() && self.created == self.requested
    }
}

pub struct PoiRegistry<F: AnchorFactory> {
    factory: F,
    on_select: SelectCallback,
    entries: Vec<ActiveEntry<F::Anchor>>,
}

impl<F: AnchorFactory> PoiRegistry<F> {
    /// `on_select` is handed to every anchor and called with its POI on interaction.
    pub fn new(factory: F, on_select: SelectCallback) -> Self {
        Self {
            factory,
            on_select,
            entries: Vec::new(),
        }
    }

    /// Destroy every held anchor, then create one anchor per POI in order.
    ///
    /// The clear always happens. Creation stops at the first factory failure,
    /// leaving the registry partially populated; the failure is logged and
    /// reported in the outcome rather than raised.
    pub fn replace_all(&mut self, pois: impl IntoIterator<Item = Poi>) -> ReplaceOutcome {
        self.clear();

        let pois: Vec<Poi> = pois.into_iter().collect();
        let mut outcome = ReplaceOutcome {
            requested: pois.len(),
            created: 0,
            error: None,
        };

        for poi in pois {
            let hook = SelectHook::new(poi, self.on_select.clone());
            match self.factory.create(hook.poi(), hook.clone()) {
                Ok(anchor) => {
                    self.entries.push(ActiveEntry { hook, anchor });
                    outcome.created += 1;
                }
                Err(e) => {
                    log::warn!(
                        "anchor creation failed for {:?} after {}/{} POIs: {}",
                        hook.poi().name,
                        outcome.created,
                        outcome.requested,
                        e
                    );
                    outcome.error = Some(e);
                    break;
                }
            }
        }

        outcome
    }

    /// Destroy all anchors and empty the registry. Idempotent.
    pub fn clear(&mut self) {
        for entry in self.entries.drain(..) {
            self.factory.destroy(entry.anchor);
        }
    }

    /// Fire the selection hook of the entry at `index`.
    pub fn select(&self, index: usize) -> bool {
        match self.entries.get(index) {
            Some(entry) => {
                entry.hook.trigger();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&ActiveEntry<F::Anchor>> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[ActiveEntry<F::Anchor>] {
        &self.entries
    }

    pub fn pois(&self) -> Vec<&Poi> {
        self.entries.iter().map(ActiveEntry::poi).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }
}

impl<F: AnchorFactory> Drop for PoiRegistry<F> {
    fn drop(&mut self) {
        self.clear();
    }
}
