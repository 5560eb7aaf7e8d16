#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    // Los registros de `log` llegan por el puente tracing-log del subscriber
    let filter = EnvFilter::try_from_env("LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new("info,trivia_quiz=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([720.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Trivia Quiz",
        options,
        Box::new(|cc| Ok(Box::new(trivia_quiz::ui::create_app(cc)))),
    )
}

// En web el arranque es `trivia_quiz::start`
#[cfg(target_arch = "wasm32")]
fn main() {}
