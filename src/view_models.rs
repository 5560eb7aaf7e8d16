// src/view_models.rs

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnswerMark {
    #[default]
    None,
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerButton {
    pub label: String, // texto crudo, se decodifica al pintar
    pub mark: AnswerMark,
    pub disabled: bool,
}

impl AnswerButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            mark: AnswerMark::None,
            disabled: false,
        }
    }
}

/// Lo que la interfaz muestra en cada momento.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizView {
    pub question_text: String,
    pub answers: Vec<AnswerButton>,
    pub next_visible: bool,
    pub restart_visible: bool,
}

impl QuizView {
    pub fn clear_answers(&mut self) {
        self.answers.clear();
    }

    pub fn is_answered(&self) -> bool {
        self.answers.iter().any(|b| b.disabled)
    }
}
