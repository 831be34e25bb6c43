use crate::{
    core::{
        constants::{MARKER_COLOR, MARKER_LABEL_OFFSET, MARKER_OPACITY, MARKER_RADIUS},
        geo::Coordinates,
    },
    layers::anchor::SelectHook,
    poi::place::Poi,
};

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub radius: f32,
    pub color: String,
    pub opacity: f32,
    pub label_color: String,
    pub label_background: String,
    pub label_offset: (f32, f32, f32),
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: MARKER_RADIUS,
            color: MARKER_COLOR.to_string(),
            opacity: MARKER_OPACITY,
            label_color: "white".to_string(),
            label_background: "black".to_string(),
            label_offset: MARKER_LABEL_OFFSET,
        }
    }
}

/// A labelled, clickable sphere placed at a POI's position.
#[derive(Debug, Clone)]
pub struct Marker {
    id: String,
    position: Coordinates,
    label: String,
    style: MarkerStyle,
    interactive: bool,
    hook: SelectHook,
}

impl Marker {
    pub fn new(id: String, poi: &Poi, hook: SelectHook) -> Self {
        Self {
            id,
            position: poi.coordinates(),
            label: poi.name.clone(),
            style: MarkerStyle::default(),
            interactive: true,
            hook,
        }
    }

    pub fn with_style(mut self, style: MarkerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> Coordinates {
        self.position
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn style(&self) -> &MarkerStyle {
        &self.style
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Handle a click. Returns whether the selection hook fired.
    pub fn click(&self) -> bool {
        if !self.interactive {
            return false;
        }
        self.hook.trigger();
        true
    }

    /// Renderer-facing description of the marker.
    pub fn options(&self) -> serde_json::Value {
        let (x, y, z) = self.style.label_offset;
        serde_json::json!({
            "id": self.id,
            "position": {
                "latitude": self.position.latitude,
                "longitude": self.position.longitude
            },
            "geometry": { "primitive": "sphere", "radius": self.style.radius },
            "material": { "color": self.style.color, "opacity": self.style.opacity },
            "label": {
                "value": self.label,
                "color": self.style.label_color,
                "background": self.style.label_background,
                "position": [x, y, z],
                "look_at_camera": true
            },
            "clickable": self.interactive
        })
    }
}
