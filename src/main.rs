mod analysis;
mod app;
mod config;
mod logging;
mod upload;

use app::FeedbackReporter;
use config::Config;
use tracing::warn;

fn main() -> eframe::Result<()> {
    logging::init();

    let config = Config::from_env().unwrap_or_else(|e| {
        warn!(error = %e, "Falling back to default analysis service");
        Config::default()
    });

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([640.0, 720.0])
            .with_min_inner_size([420.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Customer Feedback Sentiment Reporter",
        options,
        Box::new(move |cc| Box::new(FeedbackReporter::new(cc, &config))),
    )
}
