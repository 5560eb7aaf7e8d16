pub mod api;
pub mod remote;

use crate::data::QuizConfig;
use crate::model::Question;
use std::sync::mpsc::Sender;
use thiserror::Error;

/// Cualquier forma en que el banco remoto no entrega un lote usable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("question source returned HTTP {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Malformed(String),
    #[error("question source reported response code {0}")]
    Api(u32),
    #[error("question source returned no questions")]
    Empty,
    #[error("expected {expected} questions, got {got}")]
    WrongCount { expected: usize, got: usize },
    #[error("question #{0} does not have exactly one correct and three incorrect answers")]
    InvalidQuestion(usize),
}

pub type FetchOutcome = Result<Vec<Question>, FetchError>;

/// Resultado etiquetado con el ticket de la petición que lo produjo.
pub type FetchReply = (u64, FetchOutcome);

/// Origen de preguntas. La implementación lanza la petición en segundo plano
/// y envía `(ticket, resultado)` por `reply` cuando termina.
pub trait QuestionSource {
    fn request(&self, ticket: u64, reply: Sender<FetchReply>);
}

/// Banco remoto por HTTP.
pub struct HttpQuestionSource {
    url: String,
    amount: usize,
}

impl HttpQuestionSource {
    pub fn new(config: &QuizConfig) -> Self {
        Self {
            url: config.request_url(),
            amount: config.amount,
        }
    }
}

impl QuestionSource for HttpQuestionSource {
    #[cfg(not(target_arch = "wasm32"))]
    fn request(&self, ticket: u64, reply: Sender<FetchReply>) {
        let url = self.url.clone();
        let amount = self.amount;
        std::thread::spawn(move || {
            let outcome = remote::fetch_questions(&url, amount);
            let _ = reply.send((ticket, outcome));
        });
    }

    #[cfg(target_arch = "wasm32")]
    fn request(&self, ticket: u64, reply: Sender<FetchReply>) {
        let url = self.url.clone();
        let amount = self.amount;
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = remote::fetch_questions(&url, amount).await;
            let _ = reply.send((ticket, outcome));
        });
    }
}
