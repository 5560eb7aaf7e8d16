use crate::ui::layout::quiz_card;
use egui::Context;

pub fn ui_loading(ctx: &Context) {
    quiz_card(ctx, 80.0, 650.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.spinner();
            ui.label("Loading questions…");
        });
    });
}
