use super::*;
use crate::trivia::FetchOutcome;
use std::sync::mpsc::TryRecvError;

impl QuizApp {
    /// Lanza una petición nueva. Cualquier respuesta anterior queda obsoleta.
    pub fn fetch_questions(&mut self) {
        self.request_seq += 1;
        let ticket = self.request_seq;
        self.pending_ticket = Some(ticket);
        self.state = AppState::Loading;
        self.view = QuizView::default();

        log::debug!("requesting questions (ticket {ticket})");
        self.source.request(ticket, self.fetch_tx.clone());
    }

    pub fn is_fetch_pending(&self) -> bool {
        self.pending_ticket.is_some()
    }

    /// Recoge las respuestas que hayan llegado; sólo aplica la del último ticket.
    pub fn poll_fetch_result(&mut self) {
        loop {
            match self.fetch_rx.try_recv() {
                Ok((ticket, outcome)) => {
                    if self.pending_ticket == Some(ticket) {
                        self.pending_ticket = None;
                        self.apply_fetch_outcome(outcome);
                    } else {
                        log::debug!("discarding superseded fetch result (ticket {ticket})");
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    fn apply_fetch_outcome(&mut self, outcome: FetchOutcome) {
        match outcome {
            Ok(questions) => {
                log::info!("loaded {} questions", questions.len());
                self.selections = vec![None; questions.len()];
                self.session.questions = questions;
                self.start_game();
            }
            Err(err) => self.show_fetch_error(&err.to_string()),
        }
    }

    fn show_fetch_error(&mut self, reason: &str) {
        log::error!("error fetching questions: {reason}");
        self.state = AppState::Failed;
        self.view.question_text = FETCH_FAILED_MESSAGE.to_string();
        self.view.clear_answers();
        self.view.next_visible = false;
        self.view.restart_visible = true;
    }
}
