mod app;

use crate::app::App;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (run with `RUST_LOG=debug` for more).
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([740.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "game of life",
        native_options,
        Box::new(|cc| Ok(Box::new(App::new(cc)))),
    )
}
