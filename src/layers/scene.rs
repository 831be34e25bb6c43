use crate::{
    layers::{
        anchor::{AnchorFactory, SelectHook},
        marker::{Marker, MarkerStyle},
    },
    poi::place::Poi,
    prelude::HashMap,
    Error, Result,
};

/// In-memory marker scene, handling ordering and lookup by id
pub struct Scene {
    /// All markers indexed by ID
    markers: HashMap<String, Marker>,
    /// Marker IDs in insertion order
    render_order: Vec<String>,
    /// Upper bound on live markers, if any
    capacity: Option<usize>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            markers: HashMap::default(),
            render_order: Vec::new(),
            capacity: None,
        }
    }

    pub fn with_capacity_limit(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Adds a marker to the scene
    pub fn add_marker(&mut self, marker: Marker) -> Result<()> {
        if self.markers.contains_key(marker.id()) {
            return Err(Error::Anchor(format!("duplicate marker id {}", marker.id())));
        }
        if let Some(capacity) = self.capacity {
            if self.markers.len() >= capacity {
                return Err(Error::Anchor(format!(
                    "scene is full ({} markers)",
                    capacity
                )));
            }
        }

        let id = marker.id().to_string();
        self.markers.insert(id.clone(), marker);
        self.render_order.push(id);
        Ok(())
    }

    /// Removes a marker from the scene
    pub fn remove_marker(&mut self, marker_id: &str) -> Option<Marker> {
        self.render_order.retain(|id| id != marker_id);
        self.markers.remove(marker_id)
    }

    pub fn get_marker(&self, marker_id: &str) -> Option<&Marker> {
        self.markers.get(marker_id)
    }

    /// Gets all markers in render order
    pub fn markers(&self) -> Vec<&Marker> {
        self.render_order
            .iter()
            .filter_map(|id| self.markers.get(id))
            .collect()
    }

    /// Route a click to a marker. Returns whether a selection hook fired.
    pub fn click(&self, marker_id: &str) -> bool {
        match self.markers.get(marker_id) {
            Some(marker) => marker.click(),
            None => {
                log::debug!("click on unknown marker {}", marker_id);
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// Anchor factory that places [`Marker`]s into an owned [`Scene`].
///
/// Anchors are the marker ids; the scene holds the markers themselves.
pub struct SceneAnchorFactory {
    scene: Scene,
    style: MarkerStyle,
    next_id: u64,
}

impl SceneAnchorFactory {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            style: MarkerStyle::default(),
            next_id: 0,
        }
    }

    pub fn with_style(mut self, style: MarkerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}

impl Default for SceneAnchorFactory {
    fn default() -> Self {
        Self::new(Scene::new())
    }
}

impl AnchorFactory for SceneAnchorFactory {
    type Anchor = String;

    fn create(&mut self, poi: &Poi, hook: SelectHook) -> Result<String> {
        self.next_id += 1;
        let id = format!("poi-{}", self.next_id);
        let marker = Marker::new(id.clone(), poi, hook).with_style(self.style.clone());
        self.scene.add_marker(marker)?;
        Ok(id)
    }

    fn destroy(&mut self, anchor: String) {
        if self.scene.remove_marker(&anchor).is_none() {
            log::warn!("marker {} was already gone from the scene", anchor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn hook_for(poi: &Poi, seen: Arc<Mutex<Vec<String>>>) -> SelectHook {
        SelectHook::new(
            poi.clone(),
            Arc::new(move |p: &Poi| seen.lock().unwrap().push(p.name.clone())),
        )
    }

    #[test]
    fn test_factory_places_and_removes_markers() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut factory = SceneAnchorFactory::default();
        let a = Poi::new("A", 1.0, 1.0);
        let b = Poi::new("B", 2.0, 2.0);

        let id_a = factory.create(&a, hook_for(&a, seen.clone())).unwrap();
        let id_b = factory.create(&b, hook_for(&b, seen.clone())).unwrap();
        assert_ne!(id_a, id_b);
        assert_eq!(factory.scene().len(), 2);
        assert_eq!(factory.scene().markers()[1].label(), "B");

        assert!(factory.scene().click(&id_b));
        assert!(!factory.scene().click("missing"));
        assert_eq!(*seen.lock().unwrap(), vec!["B"]);

        factory.destroy(id_a);
        assert_eq!(factory.scene().len(), 1);
        assert!(factory.scene().get_marker(&id_b).is_some());
    }

    #[test]
    fn test_scene_capacity_limit() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut factory = SceneAnchorFactory::new(Scene::new().with_capacity_limit(1));
        let poi = Poi::new("A", 0.0, 0.0);

        factory.create(&poi, hook_for(&poi, seen.clone())).unwrap();
        let err = factory.create(&poi, hook_for(&poi, seen)).unwrap_err();
        assert!(matches!(err, Error::Anchor(_)));
        assert_eq!(factory.scene().len(), 1);
    }
}
