mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::{AppState, Theme};
use eframe::{App, CreationContext, Frame};
use egui::Context;
use layout::{theme_bar, visuals_for};
use std::time::Duration;

const THEME_KEY: &str = "theme";

/// Construye la app para `run_native` / `WebRunner`: recupera el tema
/// guardado por eframe y arranca la sesión.
pub fn create_app(cc: &CreationContext<'_>) -> QuizApp {
    let mut app = QuizApp::with_platform_defaults();
    app.theme = cc
        .storage
        .and_then(|storage| eframe::get_value::<Theme>(storage, THEME_KEY))
        .unwrap_or_default();
    cc.egui_ctx.set_visuals(visuals_for(app.theme));
    app.initialize();
    app
}

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll_fetch_result();
        if self.is_fetch_pending() {
            // La respuesta llega por canal: hay que volver a mirar
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        theme_bar(ctx, &mut self.theme);

        match self.state {
            AppState::Loading => views::loading::ui_loading(ctx),
            AppState::Question | AppState::Finished | AppState::Failed => {
                views::quiz::ui_quiz(self, ctx)
            }
        }
    }

    /// eframe lo llama en el autoguardado periódico y al cerrar
    /// (en web también al ocultar/descargar la página). Guardar de más es
    /// inocuo: el snapshot se sobrescribe entero.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, THEME_KEY, &self.theme);
        self.on_page_unload();
    }
}
