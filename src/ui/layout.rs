use crate::model::Theme;
use egui::{Align, CentralPanel, Context, Frame, Layout, Margin, Ui, Visuals};

pub fn visuals_for(theme: Theme) -> Visuals {
    match theme {
        Theme::Dark => Visuals::dark(),
        Theme::Light => Visuals::light(),
    }
}

/// Barra inferior con el interruptor de tema. Aplica el cambio al contexto.
pub fn theme_bar(ctx: &Context, theme: &mut Theme) {
    egui::TopBottomPanel::bottom("theme_bar").show(ctx, |ui| {
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let label = match theme {
                Theme::Dark => "☀ Light mode",
                Theme::Light => "🌙 Dark mode",
            };
            if ui.small_button(label).clicked() {
                *theme = theme.toggled();
                ctx.set_visuals(visuals_for(*theme));
            }
        });
    });
}

/// Tarjeta de ancho máximo `max_width`, centrada en el panel central.
/// `content_height` es una estimación para el margen superior.
pub fn quiz_card(ctx: &Context, content_height: f32, max_width: f32, body: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let top = ((ui.available_height() - content_height) * 0.5).max(0.0);
        ui.add_space(top);
        ui.vertical_centered(|ui| {
            let width = ui.available_width().min(max_width);
            Frame::group(ui.style())
                .inner_margin(Margin::same(20))
                .show(ui, |ui| {
                    ui.set_max_width(width);
                    body(ui);
                });
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_theme_maps_to_its_visuals() {
        assert!(visuals_for(Theme::Dark).dark_mode);
        assert!(!visuals_for(Theme::Light).dark_mode);
        assert!(visuals_for(Theme::Light.toggled()).dark_mode);
    }
}
