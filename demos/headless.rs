use arpoi::prelude::*;

/// Example of driving the POI lifecycle without any renderer.
///
/// Loads the bundled static POIs, clicks a marker and prints its payload.
/// Set `ARPOI_LOCATION="<lat>,<lon>"` to also switch to dynamic mode and
/// query the public Overpass instance around that position; an optional
/// `ARPOI_CATEGORY` overrides the default `amenity` filter.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = ArConfig::default();
    let location: Option<Coordinates> = std::env::var("ARPOI_LOCATION")
        .ok()
        .map(|raw| raw.parse::<Coordinates>())
        .transpose()?;

    let (display, events) = ChannelDisplay::channel();
    let registry = PoiRegistry::new(SceneAnchorFactory::default(), display.select_callback());
    let mut controller = ModeController::new(
        &config,
        DynamicSource::from_config(&config),
        registry,
        display,
    );
    if let Ok(category) = std::env::var("ARPOI_CATEGORY") {
        controller.set_category(category);
    }

    let provider = FixedLocation(location.unwrap_or(Coordinates::new(43.1566, -77.6088)));
    let outcome = controller.start(&provider).await?;
    println!("static load: {:?}", outcome);

    for marker in controller.registry().factory().scene().markers() {
        println!("  {} at {}", marker.label(), marker.position());
    }

    if let Some(first) = controller.registry().factory().scene().markers().first() {
        first.click();
    }

    if location.is_some() {
        let outcome = controller.toggle().await?;
        println!("dynamic load: {:?}", outcome);
        for poi in controller.registry().pois().iter().take(5) {
            println!("\n{}", PlaceFormatter::format_text(poi));
        }
    }

    for event in events.try_iter() {
        match event {
            DisplayEvent::ShowPlace(payload) => {
                println!("\n[panel] {}\n{}", payload.title, payload.body_html)
            }
            DisplayEvent::Status(status) => println!("[status] {}", status.text),
            DisplayEvent::ModeChanged(mode) => {
                println!("[mode] {} ({})", mode, mode.toggle_label())
            }
            DisplayEvent::StatusCleared | DisplayEvent::PlaceClosed => {}
        }
    }

    Ok(())
}
