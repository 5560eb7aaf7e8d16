use crate::app::QuizEvent;
use crate::model::AppState;
use crate::text_utils::markup_to_display;
use crate::ui::helpers::{answer_button, big_button};
use crate::ui::layout::quiz_card;
use crate::QuizApp;
use egui::{Context, RichText};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let mut events = Vec::new();
    let view = &app.view;
    let est_height = 120.0 + 48.0 * view.answers.len() as f32;

    quiz_card(ctx, est_height, 650.0, |ui| {
        ui.vertical_centered(|ui| {
            let panel_width = ui.available_width();

            if app.state == AppState::Question {
                ui.label(format!(
                    "Question {} / {}",
                    app.current_index() + 1,
                    app.question_count()
                ));
                ui.add_space(6.0);
            }

            ui.heading(RichText::new(markup_to_display(&view.question_text)));
            ui.add_space(12.0);

            for answer in &view.answers {
                if answer_button(ui, answer, panel_width, 40.0) {
                    events.push(QuizEvent::AnswerSelected(answer.label.clone()));
                }
                ui.add_space(4.0);
            }

            ui.add_space(12.0);
            if view.next_visible && big_button(ui, "Next", panel_width / 2.0, 36.0) {
                events.push(QuizEvent::AdvanceRequested);
            }
            if view.restart_visible && big_button(ui, "⟲ Restart", panel_width / 2.0, 36.0) {
                events.push(QuizEvent::RestartRequested);
            }
        });
    });

    for event in events {
        app.handle_event(event);
    }
}
