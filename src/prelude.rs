//! Prelude module for common arpoi types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use arpoi::prelude::*;`

pub use crate::core::{
    config::{ArConfig, Mode},
    geo::Coordinates,
    state::AppState,
};

pub use crate::poi::{
    formatter::{DisplayPayload, PlaceFormatter},
    place::{Poi, Tags},
};

pub use crate::sources::{
    overpass::DynamicSource,
    static_source::StaticSource,
    transport::{ReqwestTransport, Transport, TransportResponse},
    PoiSource, SourceQuery,
};

pub use crate::layers::{
    anchor::{AnchorFactory, SelectCallback, SelectHook},
    marker::{Marker, MarkerStyle},
    registry::{PoiRegistry, ReplaceOutcome},
    scene::{Scene, SceneAnchorFactory},
};

pub use crate::controller::{
    mode::{LoadOutcome, LoadTicket, ModeController},
    status::{StatusKind, StatusMessage},
};

pub use crate::location::{FixedLocation, LocationOptions, LocationProvider, UnsupportedLocation};

pub use crate::ui::display::{ChannelDisplay, DisplayEvent, DisplaySink};

pub use crate::{Error as PoiError, Result};

pub use std::{
    sync::Arc,
    time::{Duration, Instant},
};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
