use serde::{Deserialize, Serialize};

/// Número de opciones por pregunta (3 incorrectas + 1 correcta).
pub const ANSWERS_PER_QUESTION: usize = 4;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,     // Puede traer entidades HTML
    pub answers: Vec<String>, // Orden barajado una sola vez
    pub correct: String,
}

impl Question {
    /// `correct` aparece exactamente una vez y hay 4 opciones.
    pub fn is_well_formed(&self) -> bool {
        self.answers.len() == ANSWERS_PER_QUESTION
            && self.answers.iter().filter(|a| **a == self.correct).count() == 1
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct == answer
    }
}

/// Estado de un intento; es también lo que se persiste: `{currentIndex, questions}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub current_index: usize,
    pub questions: Vec<Question>,
}

impl Session {
    pub fn is_valid(&self) -> bool {
        self.current_index <= self.questions.len()
            && self.questions.iter().all(Question::is_well_formed)
    }

    /// Quedan preguntas por contestar.
    pub fn is_resumable(&self) -> bool {
        self.is_valid() && self.current_index < self.questions.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Loading,
    Question,
    Finished,
    Failed,
}

/// Tema de la interfaz; se guarda en el almacén de eframe.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_question(n: usize) -> Question {
    let correct = format!("right {n}");
    Question {
        text: format!("Question {n}?"),
        answers: vec![
            format!("wrong {n}a"),
            correct.clone(),
            format!("wrong {n}b"),
            format!("wrong {n}c"),
        ],
        correct,
    }
}
