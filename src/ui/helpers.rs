// src/ui/helpers.rs
use crate::text_utils::markup_to_display;
use crate::view_models::{AnswerButton, AnswerMark};
use egui::{Button, Color32, RichText, Ui, Vec2};

const CORRECT_FILL: Color32 = Color32::from_rgb(46, 125, 50);
const INCORRECT_FILL: Color32 = Color32::from_rgb(198, 40, 40);

/// Botón de respuesta a ancho completo; devuelve `true` si se pulsó.
pub fn answer_button(ui: &mut Ui, answer: &AnswerButton, width: f32, height: f32) -> bool {
    let text = RichText::new(markup_to_display(&answer.label));
    let mut button = Button::new(text).min_size(Vec2::new(width, height));
    button = match answer.mark {
        AnswerMark::Correct => button.fill(CORRECT_FILL),
        AnswerMark::Incorrect => button.fill(INCORRECT_FILL),
        AnswerMark::None => button,
    };
    ui.add_enabled(!answer.disabled, button).clicked()
}

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32) -> bool {
    ui.add(Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}
