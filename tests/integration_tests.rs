use arpoi::prelude::*;
use async_trait::async_trait;
use crossbeam_channel::Receiver;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

/// Integration tests for full load cycles
/// These tests drive the controller the way a host page does: resolve a
/// location, load, toggle, refresh and click markers.
#[cfg(test)]
mod integration_tests {
    use super::*;

    #[derive(Default)]
    struct FakeState {
        responses: Mutex<Vec<TransportResponse>>,
        urls: Mutex<Vec<String>>,
        calls: AtomicUsize,
    }

    /// Transport returning canned Overpass answers in order and recording requested URLs.
    #[derive(Clone, Default)]
    struct FakeOverpass(Arc<FakeState>);

    #[async_trait]
    impl Transport for FakeOverpass {
        async fn get(&self, url: &str) -> Result<TransportResponse> {
            self.0.calls.fetch_add(1, Ordering::SeqCst);
            self.0.urls.lock().unwrap().push(url.to_string());
            let mut responses = self.0.responses.lock().unwrap();
            if responses.is_empty() {
                return Ok(TransportResponse::new(200, r#"{"elements": []}"#));
            }
            Ok(responses.remove(0))
        }
    }

    const CAFES: &str = r#"{
        "elements": [
            { "type": "node", "id": 10, "lat": 43.1561, "lon": -77.6071,
              "tags": { "amenity": "cafe", "name": "Spot Coffee",
                        "addr:street": "East Avenue", "addr:housenumber": "200",
                        "website": "https://spot.example" } },
            { "type": "node", "id": 11, "lat": 43.1570, "lon": -77.6050,
              "tags": { "amenity": "cafe" } }
        ]
    }"#;

    type Controller = ModeController<SceneAnchorFactory, ChannelDisplay>;

    fn setup(responses: Vec<TransportResponse>) -> (Controller, Receiver<DisplayEvent>, FakeOverpass) {
        let fake = FakeOverpass(Arc::new(FakeState {
            responses: Mutex::new(responses),
            ..Default::default()
        }));
        let config = ArConfig::default().with_category("amenity=cafe").with_radius(800);
        let source = DynamicSource::new(config.endpoint.clone(), fake.clone());
        let (display, rx) = ChannelDisplay::channel();
        let registry = PoiRegistry::new(SceneAnchorFactory::default(), display.select_callback());
        (ModeController::new(&config, source, registry, display), rx, fake)
    }

    fn rochester() -> FixedLocation {
        FixedLocation(Coordinates::new(43.1566, -77.6088))
    }

    #[tokio::test]
    async fn test_static_load_of_example_pois() {
        let (mut ctl, _rx, fake) = setup(vec![]);
        assert_eq!(ctl.start(&rochester()).await.unwrap(), LoadOutcome::Loaded(3));

        let names: Vec<&str> = ctl.registry().pois().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Rochester Abandoned Subway",
                "Washington Square Park",
                "Rochester Contemporary Art Center"
            ]
        );

        let labels: Vec<&str> = ctl
            .registry()
            .factory()
            .scene()
            .markers()
            .iter()
            .map(|m| m.label())
            .collect();
        assert_eq!(labels, names);
        assert_eq!(fake.0.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_dynamic_markers_route_clicks_to_display() {
        let (mut ctl, rx, fake) = setup(vec![TransportResponse::new(200, CAFES)]);
        ctl.start(&rochester()).await.unwrap();

        assert_eq!(ctl.toggle().await.unwrap(), LoadOutcome::Loaded(2));
        assert_eq!(fake.0.calls.load(Ordering::SeqCst), 1);
        let url = fake.0.urls.lock().unwrap()[0].clone();
        assert!(url.contains("around%3A800%2C43.1566%2C-77.6088"));

        let scene = ctl.registry().factory().scene();
        assert_eq!(scene.len(), 2);
        let first = scene.markers()[0].id().to_string();
        rx.try_iter().count();

        assert!(scene.click(&first));
        let payload = match rx.try_recv().unwrap() {
            DisplayEvent::ShowPlace(payload) => payload,
            other => panic!("unexpected event {:?}", other),
        };
        assert_eq!(payload.title, "Spot Coffee");
        assert!(payload.body_html.starts_with("A amenity: cafe location"));
        let website = payload.body_html.find("website").unwrap();
        let street = payload.body_html.find("Address: street</strong>: East Avenue").unwrap();
        let number = payload.body_html.find("Address: housenumber</strong>: 200").unwrap();
        assert!(website < street && street < number);

        assert!(ctl.select(1));
        match rx.try_recv().unwrap() {
            DisplayEvent::ShowPlace(payload) => {
                assert_eq!(payload.title, "Unnamed Location");
                assert!(payload.body_html.ends_with("No additional details available."));
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mode_switch_rebuilds_scene() {
        let (mut ctl, rx, _fake) = setup(vec![TransportResponse::new(200, CAFES)]);
        ctl.start(&rochester()).await.unwrap();
        ctl.toggle().await.unwrap();
        assert_eq!(ctl.registry().factory().scene().len(), 2);

        assert_eq!(ctl.toggle().await.unwrap(), LoadOutcome::Loaded(3));
        assert_eq!(ctl.registry().factory().scene().len(), 3);
        assert_eq!(ctl.mode(), Mode::Static);

        let modes: Vec<Mode> = rx
            .try_iter()
            .filter_map(|e| match e {
                DisplayEvent::ModeChanged(mode) => Some(mode),
                _ => None,
            })
            .collect();
        assert_eq!(modes, vec![Mode::Static, Mode::Dynamic, Mode::Static]);
    }

    #[tokio::test]
    async fn test_zero_elements_reports_no_results() {
        let (mut ctl, rx, _fake) = setup(vec![TransportResponse::new(200, r#"{"elements": []}"#)]);
        ctl.start(&rochester()).await.unwrap();
        rx.try_iter().count();

        assert_eq!(ctl.toggle().await.unwrap(), LoadOutcome::Empty);
        assert!(ctl.registry().is_empty());
        assert!(ctl.registry().factory().scene().is_empty());

        let last_status = rx
            .try_iter()
            .filter_map(|e| match e {
                DisplayEvent::Status(status) => Some(status),
                _ => None,
            })
            .last()
            .unwrap();
        assert_eq!(last_status.kind, StatusKind::Info);
        assert!(last_status.text.contains("No points of interest found nearby"));
    }

    #[tokio::test]
    async fn test_server_error_surfaces_and_clears() {
        let (mut ctl, _rx, fake) = setup(vec![
            TransportResponse::new(200, CAFES),
            TransportResponse::new(500, "Internal Server Error"),
        ]);
        ctl.start(&rochester()).await.unwrap();
        ctl.toggle().await.unwrap();
        assert_eq!(ctl.registry().len(), 2);

        let outcome = ctl.refresh().await.unwrap().unwrap();
        assert!(matches!(outcome, LoadOutcome::Failed(_)));
        assert_eq!(fake.0.calls.load(Ordering::SeqCst), 2);
        assert!(ctl.registry().is_empty());
        assert!(ctl.registry().factory().scene().is_empty());

        let status = ctl.status().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert!(status.text.starts_with("Error loading POIs:"));
        assert!(status.text.contains("500"));
    }

    #[tokio::test]
    async fn test_category_change_applies_to_next_refresh() {
        let (mut ctl, _rx, fake) = setup(vec![]);
        ctl.start(&rochester()).await.unwrap();
        ctl.toggle().await.unwrap();
        ctl.set_category("tourism=museum");
        ctl.refresh().await.unwrap();

        let urls = fake.0.urls.lock().unwrap();
        assert_eq!(urls.len(), 2);
        assert!(urls[0].contains("%22cafe%22"));
        assert!(urls[1].contains("%22museum%22"));
    }

    #[tokio::test]
    async fn test_spawned_fetch_with_ticket() {
        let (mut ctl, _rx, _fake) = setup(vec![
            TransportResponse::new(200, r#"{"elements": []}"#),
            TransportResponse::new(200, CAFES),
        ]);
        ctl.start(&rochester()).await.unwrap();
        ctl.toggle().await.unwrap();

        let (ticket, query) = ctl.begin_dynamic_load().unwrap();
        let source = ctl.dynamic_source();
        let handle = tokio::spawn(async move { source.fetch(&query).await });
        let result = handle.await.unwrap();

        assert_eq!(ctl.finish_dynamic_load(ticket, result), LoadOutcome::Loaded(2));
        assert_eq!(ctl.registry().len(), 2);
    }
}
