use super::*;
use crate::view_models::{AnswerButton, AnswerMark};

impl QuizApp {
    pub fn handle_event(&mut self, event: QuizEvent) {
        match event {
            QuizEvent::AnswerSelected(answer) => self.select_answer(&answer),
            QuizEvent::AdvanceRequested => self.advance(),
            QuizEvent::RestartRequested => self.restart(),
        }
    }

    pub fn start_game(&mut self) {
        self.session.current_index = 0;
        self.state = AppState::Question;
        self.view.next_visible = false;
        self.view.restart_visible = false;
        self.show_question(0);
    }

    /// Pinta la pregunta `index` reemplazando todos los botones anteriores.
    pub fn show_question(&mut self, index: usize) {
        let Some(question) = self.session.questions.get(index) else {
            log::warn!("show_question: index {index} out of range");
            return;
        };

        self.view.question_text = question.text.clone();
        self.view.answers = question.answers.iter().map(AnswerButton::new).collect();
    }

    /// Marca la correcta (y la elegida si falló) y bloquea todos los botones.
    /// Una segunda llamada sobre la misma pregunta no cambia nada.
    pub fn select_answer(&mut self, selected: &str) {
        if self.state != AppState::Question || self.view.is_answered() {
            return;
        }
        let index = self.session.current_index;
        let Some(question) = self.session.questions.get(index) else {
            return;
        };
        let correct = question.correct.as_str();

        for button in &mut self.view.answers {
            if button.label == correct {
                button.mark = AnswerMark::Correct;
            } else if button.label == selected {
                button.mark = AnswerMark::Incorrect;
            }
            button.disabled = true;
        }

        if let Some(slot) = self.selections.get_mut(index) {
            *slot = Some(selected.to_string());
        }
        self.view.next_visible = true;
    }

    /// Botón "siguiente": avanza o termina, y siempre guarda el progreso.
    pub fn advance(&mut self) {
        if self.state != AppState::Question {
            return;
        }

        self.session.current_index += 1;
        if self.session.current_index < self.session.questions.len() {
            self.show_question(self.session.current_index);
            self.view.next_visible = false;
        } else {
            self.finish();
        }
        self.persist_snapshot();
    }

    pub fn finish(&mut self) {
        self.state = AppState::Finished;
        self.view.question_text = COMPLETED_MESSAGE.to_string();
        self.view.clear_answers();
        self.view.next_visible = false;
        self.view.restart_visible = true;
        self.log_summary();
    }

    pub fn score(&self) -> usize {
        self.session
            .questions
            .iter()
            .zip(&self.selections)
            .filter(|(q, sel)| sel.as_deref().is_some_and(|s| q.is_correct(s)))
            .count()
    }

    fn log_summary(&self) {
        log::info!("Quiz completed. Review your answers below.");
        for (i, (q, sel)) in self.session.questions.iter().zip(&self.selections).enumerate() {
            match sel {
                Some(answer) => log::info!(
                    "  {}. {} -> {} ({})",
                    i + 1,
                    q.text,
                    answer,
                    if q.is_correct(answer) { "correct" } else { "incorrect" }
                ),
                None => log::info!("  {}. {} -> (not recorded)", i + 1, q.text),
            }
        }
        log::info!("Score: {}/{}", self.score(), self.session.questions.len());
    }
}
