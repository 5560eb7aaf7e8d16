use super::*;
use crate::storage::clear_snapshot;

impl QuizApp {
    /// Borra el progreso guardado y pide un lote nuevo.
    pub fn restart(&mut self) {
        if let Err(err) = clear_snapshot(self.store.as_mut(), &self.config.storage_key) {
            log::warn!("could not clear saved progress: {err}");
        }
        self.selections.clear();
        self.fetch_questions();
    }
}
