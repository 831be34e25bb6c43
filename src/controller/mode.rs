//! Static/dynamic mode state machine
//!
//! The controller owns the session state, both POI sources, the registry and
//! the display sink. Every load cycle clears the registry first and then
//! repopulates it from whichever source the current mode selects.
//!
//! Each cycle is tagged with a [`LoadTicket`]. Hosts that cannot hold the
//! controller across an await can split a dynamic load into
//! [`ModeController::begin_dynamic_load`] and
//! [`ModeController::finish_dynamic_load`]; results carrying an outdated
//! ticket are dropped instead of repopulating a registry that a newer toggle
//! or refresh has already cleared.

use crate::{
    controller::status::{StatusKind, StatusMessage},
    core::{
        config::{ArConfig, Mode},
        state::AppState,
    },
    layers::{anchor::AnchorFactory, registry::PoiRegistry},
    location::{LocationOptions, LocationProvider},
    poi::place::Poi,
    sources::{static_source::StaticSource, PoiSource, SourceQuery},
    ui::display::DisplaySink,
    Error, Result,
};
use std::sync::Arc;
use std::time::Instant;

/// Identifies one load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub mode: Mode,
}

/// What a load cycle ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Anchors created for this many POIs
    Loaded(usize),
    /// The provider matched nothing
    Empty,
    /// The fetch failed; carries the reported reason
    Failed(String),
    /// A newer cycle started before this one finished
    Stale,
}

pub struct ModeController<F: AnchorFactory, D: DisplaySink> {
    state: AppState,
    static_source: StaticSource,
    dynamic_source: Arc<dyn PoiSource>,
    registry: PoiRegistry<F>,
    display: D,
    status: Option<StatusMessage>,
}

impl<F: AnchorFactory, D: DisplaySink> ModeController<F, D> {
    pub fn new(
        config: &ArConfig,
        dynamic_source: impl PoiSource + 'static,
        registry: PoiRegistry<F>,
        display: D,
    ) -> Self {
        Self {
            state: AppState::new(config),
            static_source: StaticSource::new(config.static_pois.clone()),
            dynamic_source: Arc::new(dynamic_source),
            registry,
            display,
            status: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn registry(&self) -> &PoiRegistry<F> {
        &self.registry
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Status currently on screen, if any.
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Handle to the dynamic source for hosts that run fetches themselves.
    pub fn dynamic_source(&self) -> Arc<dyn PoiSource> {
        Arc::clone(&self.dynamic_source)
    }

    /// Store the category filter used by the next dynamic load.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.state.set_category(category);
    }

    /// Resolve the user's position once and run the first load.
    ///
    /// A location failure is shown as a persistent status and returned; no
    /// POIs are loaded and there is no retry.
    pub async fn start(&mut self, provider: &dyn LocationProvider) -> Result<LoadOutcome> {
        let coordinates = match provider.resolve(&LocationOptions::default()).await {
            Ok(coordinates) => coordinates,
            Err(e) => {
                log::error!("geolocation error: {}", e);
                let status = match &e {
                    Error::LocationUnsupported => {
                        StatusMessage::new(StatusKind::Error, e.to_string())
                    }
                    _ => StatusMessage::location_failed(&e.to_string()),
                };
                self.set_status(status);
                return Err(e);
            }
        };

        self.state.set_coordinates(coordinates)?;
        log::info!("user location resolved at {}", coordinates);
        self.display.mode_changed(self.state.mode());
        self.load_pois().await
    }

    /// Flip the mode, tell the display, and reload.
    pub async fn toggle(&mut self) -> Result<LoadOutcome> {
        let mode = self.state.toggle_mode();
        log::info!("switched to {} mode", mode);
        self.display.mode_changed(mode);
        self.load_pois().await
    }

    /// Reload in dynamic mode. Returns `None` without touching anything in static mode.
    pub async fn refresh(&mut self) -> Result<Option<LoadOutcome>> {
        match self.state.mode() {
            Mode::Static => Ok(None),
            Mode::Dynamic => self.load_pois().await.map(Some),
        }
    }

    /// Clear the registry and repopulate it from the active source.
    pub async fn load_pois(&mut self) -> Result<LoadOutcome> {
        match self.state.mode() {
            Mode::Static => Ok(self.load_static()),
            Mode::Dynamic => {
                let (ticket, query) = self.begin_dynamic_load()?;
                let source = self.dynamic_source();
                let result = source.fetch(&query).await;
                Ok(self.finish_dynamic_load(ticket, result))
            }
        }
    }

    fn load_static(&mut self) -> LoadOutcome {
        self.state.next_generation();
        self.registry.clear();
        if self.status.as_ref().map(|s| s.kind) == Some(StatusKind::Loading) {
            self.clear_status();
        }
        let outcome = self
            .registry
            .replace_all(self.static_source.pois().iter().cloned());
        log::info!("loaded {} static POIs", outcome.created);
        LoadOutcome::Loaded(outcome.created)
    }

    /// Start a dynamic load cycle: clear the registry, show the loading
    /// status, and hand back the ticket and query to fetch with.
    ///
    /// Fails with [`Error::NotDynamic`] in static mode without touching the
    /// registry or the status. The registry is cleared even when this fails
    /// with [`Error::MissingCoordinates`] because the user position was never
    /// resolved.
    pub fn begin_dynamic_load(&mut self) -> Result<(LoadTicket, SourceQuery)> {
        if self.state.mode() != Mode::Dynamic {
            log::warn!("dynamic load requested in {} mode", self.state.mode());
            return Err(Error::NotDynamic);
        }

        let ticket = LoadTicket {
            generation: self.state.next_generation(),
            mode: Mode::Dynamic,
        };
        self.registry.clear();

        if self.state.coordinates().is_none() {
            log::error!("user location not available");
            return Err(Error::MissingCoordinates);
        }

        self.set_status(StatusMessage::loading());
        Ok((ticket, self.state.query()))
    }

    /// Apply the result of a dynamic fetch started with `ticket`.
    pub fn finish_dynamic_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Poi>>,
    ) -> LoadOutcome {
        if ticket.generation != self.state.generation() || ticket.mode != self.state.mode() {
            log::debug!(
                "discarding stale load #{} (current #{})",
                ticket.generation,
                self.state.generation()
            );
            return LoadOutcome::Stale;
        }

        match result {
            Ok(pois) if pois.is_empty() => {
                log::info!("no POIs found for {}", self.state.category());
                self.set_status(StatusMessage::no_results());
                LoadOutcome::Empty
            }
            Ok(pois) => {
                let outcome = self.registry.replace_all(pois);
                self.clear_status();
                LoadOutcome::Loaded(outcome.created)
            }
            Err(e) => {
                log::error!("error loading dynamic POIs: {}", e);
                let reason = e.to_string();
                self.set_status(StatusMessage::fetch_failed(&reason));
                LoadOutcome::Failed(reason)
            }
        }
    }

    /// Fire the selection hook of the active POI at `index`.
    pub fn select(&self, index: usize) -> bool {
        self.registry.select(index)
    }

    pub fn close_place(&mut self) {
        self.display.close_place();
    }

    /// Hide an auto-dismissing status whose time is up. Returns whether one was hidden.
    pub fn dismiss_expired(&mut self, now: Instant) -> bool {
        match &self.status {
            Some(status) if status.is_expired_at(now) => {
                self.clear_status();
                true
            }
            _ => false,
        }
    }

    /// Sleep until the current auto-dismissing status expires, then hide it.
    /// Returns `false` straight away when nothing is waiting to be dismissed.
    #[cfg(feature = "tokio-runtime")]
    pub async fn dismiss_when_due(&mut self) -> bool {
        let Some(deadline) = self
            .status
            .as_ref()
            .and_then(|s| s.auto_dismiss.map(|d| s.shown_at + d))
        else {
            return false;
        };
        tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
        self.dismiss_expired(deadline)
    }

    fn set_status(&mut self, status: StatusMessage) {
        self.display.show_status(&status);
        self.status = Some(status);
    }

    fn clear_status(&mut self) {
        if self.status.take().is_some() {
            self.display.clear_status();
        }
    }
}
