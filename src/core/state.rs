use crate::{
    core::{
        config::{ArConfig, Mode},
        geo::Coordinates,
    },
    sources::SourceQuery,
    Error, Result,
};

/// Session state shared by the controller and its load cycles.
///
/// Mode only changes through the controller, and coordinates are written at
/// most once per session.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    mode: Mode,
    coordinates: Option<Coordinates>,
    category: String,
    radius_m: u32,
    generation: u64,
}

impl AppState {
    pub fn new(config: &ArConfig) -> Self {
        Self {
            mode: config.mode,
            coordinates: None,
            category: config.category.clone(),
            radius_m: config.dynamic_radius_m,
            generation: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub(crate) fn toggle_mode(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    /// Record the resolved user position. Fails if a position was already set.
    pub fn set_coordinates(&mut self, coordinates: Coordinates) -> Result<()> {
        if self.coordinates.is_some() {
            return Err(Error::CoordinatesAlreadySet);
        }
        self.coordinates = Some(coordinates);
        Ok(())
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn radius_m(&self) -> u32 {
        self.radius_m
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Query for the dynamic source built from the current state.
    pub fn query(&self) -> SourceQuery {
        SourceQuery {
            coordinates: self.coordinates,
            category: self.category.clone(),
            radius_m: self.radius_m,
        }
    }
}
