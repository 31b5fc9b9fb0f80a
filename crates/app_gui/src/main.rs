mod app;

use eframe::{NativeOptions, egui};
use retina_core::{ClientConfig, HttpPredictor, PredictionWorker};
use std::sync::Arc;

fn main() {
    tracing_subscriber::fmt::init();

    let config = match ClientConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("config ignored: {e:#}");
            ClientConfig::default()
        }
    };
    let predictor = match HttpPredictor::new(&config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Cannot start prediction client: {e:#}");
            return;
        }
    };
    let endpoint = predictor.url().to_string();
    let worker = PredictionWorker::new(Arc::new(predictor));

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 760.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };
    if let Err(e) = eframe::run_native(
        "RetinaScan",
        options,
        Box::new(move |_cc| {
            Ok::<_, Box<dyn std::error::Error + Send + Sync>>(Box::new(app::UiApp::new(
                worker, endpoint,
            )))
        }),
    ) {
        eprintln!("Application stopped with error: {e}");
    }
}
