use crate::data::{QuizConfig, read_config_embedded};
use crate::model::{AppState, Session, Theme};
use crate::storage::KeyValueStore;
use crate::trivia::{FetchReply, HttpQuestionSource, QuestionSource};
use crate::view_models::QuizView;
use std::sync::mpsc::{Receiver, Sender, channel};

// Submódulos
pub mod actions;
pub mod fetching;
pub mod progress;
pub mod resets;


pub const FETCH_FAILED_MESSAGE: &str = "Failed to load quiz questions. Please try again later.";
pub const COMPLETED_MESSAGE: &str = "Quiz Completed! Check the console for results.";

/// Eventos que produce la interfaz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    AnswerSelected(String),
    AdvanceRequested,
    RestartRequested,
}

/// Controlador de la sesión: dueño único del estado del quiz.
pub struct QuizApp {
    pub config: QuizConfig,
    pub session: Session,
    pub state: AppState,
    pub view: QuizView,
    pub theme: Theme,
    /// Respuesta elegida por pregunta; sólo para el resumen del log.
    pub selections: Vec<Option<String>>,
    source: Box<dyn QuestionSource>,
    store: Box<dyn KeyValueStore>,
    request_seq: u64,
    pending_ticket: Option<u64>,
    fetch_tx: Sender<FetchReply>,
    fetch_rx: Receiver<FetchReply>,
}

impl QuizApp {
    pub fn new(
        config: QuizConfig,
        source: Box<dyn QuestionSource>,
        store: Box<dyn KeyValueStore>,
    ) -> Self {
        let (fetch_tx, fetch_rx) = channel();
        Self {
            config,
            session: Session::default(),
            state: AppState::Loading,
            view: QuizView::default(),
            theme: Theme::default(),
            selections: Vec::new(),
            source,
            store,
            request_seq: 0,
            pending_ticket: None,
            fetch_tx,
            fetch_rx,
        }
    }

    /// Banco remoto + almacén propio de la plataforma.
    pub fn with_platform_defaults() -> Self {
        let config = read_config_embedded();
        let source = Box::new(HttpQuestionSource::new(&config));

        #[cfg(not(target_arch = "wasm32"))]
        let store: Box<dyn KeyValueStore> =
            Box::new(crate::storage::FileStore::new(&config.progress_file));
        #[cfg(target_arch = "wasm32")]
        let store: Box<dyn KeyValueStore> = Box::new(crate::storage::LocalStorageStore);

        Self::new(config, source, store)
    }

    /// Restaura el progreso guardado; si queda alguna pregunta pendiente se
    /// continúa ahí, si no se pide un lote nuevo.
    pub fn initialize(&mut self) {
        match self.restore_snapshot() {
            Some(saved) if saved.is_resumable() => {
                log::info!(
                    "resuming saved quiz at question {}/{}",
                    saved.current_index + 1,
                    saved.questions.len()
                );
                self.selections = vec![None; saved.questions.len()];
                let index = saved.current_index;
                self.session = saved;
                self.state = AppState::Question;
                self.view.next_visible = false;
                self.view.restart_visible = false;
                self.show_question(index);
            }
            _ => {
                self.session.current_index = 0;
                self.fetch_questions();
            }
        }
    }

    pub fn current_index(&self) -> usize {
        self.session.current_index
    }

    pub fn question_count(&self) -> usize {
        self.session.questions.len()
    }
}
