use super::*;
use crate::storage::{load_snapshot, save_snapshot};

impl QuizApp {
    pub fn persist_snapshot(&mut self) {
        let key = self.config.storage_key.as_str();
        if let Err(err) = save_snapshot(self.store.as_mut(), key, &self.session) {
            log::warn!("could not save quiz progress: {err}");
        }
    }

    pub fn restore_snapshot(&self) -> Option<Session> {
        load_snapshot(self.store.as_ref(), &self.config.storage_key)
    }

    /// Cierre de página/ventana: guarda si hay algo cargado.
    pub fn on_page_unload(&mut self) {
        if !self.session.questions.is_empty() {
            self.persist_snapshot();
        }
    }
}
