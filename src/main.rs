// MeetGrid Application
// Main entry point

use meetgrid::models::event_details::EventDetails;
use meetgrid::models::time_window::TimeWindow;
use meetgrid::services::share;
use meetgrid::ui_egui::MeetGridApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    let details = match std::env::args().nth(1) {
        Some(link) => match event_from_link(&link) {
            Ok(details) => details,
            Err(err) => {
                log::warn!("ignoring event link: {err:#}");
                demo_event()
            }
        },
        None => demo_event(),
    };

    log::info!("Starting MeetGrid for event '{}'", details.title);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "MeetGrid",
        options,
        Box::new(move |cc| Ok(Box::new(MeetGridApp::new(cc, details)))),
    )
}

/// Decode an event from a shared link passed on the command line.
fn event_from_link(link: &str) -> anyhow::Result<EventDetails> {
    let (path, query) = link.split_once('?').unwrap_or((link, ""));
    let id = path.rsplit('/').next().unwrap_or("local");
    share::parse_event_query(id, query)
}

/// Fallback event when no link is given.
fn demo_event() -> EventDetails {
    EventDetails {
        id: "local".to_string(),
        title: "Untitled Event".to_string(),
        description: None,
        banner: None,
        window: TimeWindow::default(),
    }
}
