// src/data.rs

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct QuizConfig {
    pub api_url: String,
    pub amount: usize,
    pub category: u32,
    pub difficulty: String,
    pub question_type: String,
    pub storage_key: String,
    pub progress_file: String, // sólo nativo
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            api_url: "https://opentdb.com/api.php".into(),
            amount: 6,
            category: 9,
            difficulty: "easy".into(),
            question_type: "multiple".into(),
            storage_key: "quizProgress".into(),
            progress_file: "quiz_progress.json".into(),
        }
    }
}

impl QuizConfig {
    /// URL completa de la consulta fija al banco de preguntas.
    pub fn request_url(&self) -> String {
        let base = self.api_url.trim_end_matches('?');
        let sep = if base.contains('?') { '&' } else { '?' };
        format!(
            "{base}{sep}amount={}&category={}&difficulty={}&type={}",
            self.amount, self.category, self.difficulty, self.question_type
        )
    }

    fn apply_env_overrides(mut self) -> Self {
        if let Some(url) = api_url_override() {
            self.api_url = url;
        }
        self
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn api_url_override() -> Option<String> {
    std::env::var("TRIVIA_QUIZ_API_URL")
        .ok()
        .filter(|s| !s.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
fn api_url_override() -> Option<String> {
    option_env!("TRIVIA_QUIZ_API_URL")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub fn parse_config(yaml: &str) -> Result<QuizConfig, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

/// Carga la configuración desde el YAML embebido
pub fn read_config_embedded() -> QuizConfig {
    let file_content = include_str!("data/quiz_config.yaml");
    let config = parse_config(file_content).unwrap_or_else(|err| {
        log::warn!("invalid embedded quiz config, using defaults: {err}");
        QuizConfig::default()
    });
    config.apply_env_overrides()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        let parsed = parse_config(include_str!("data/quiz_config.yaml")).unwrap();
        assert_eq!(parsed, QuizConfig::default());
    }

    #[test]
    fn request_url_has_fixed_query() {
        let url = QuizConfig::default().request_url();
        assert_eq!(
            url,
            "https://opentdb.com/api.php?amount=6&category=9&difficulty=easy&type=multiple"
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg = parse_config("amount: 10\n").unwrap();
        assert_eq!(cfg.amount, 10);
        assert_eq!(cfg.storage_key, "quizProgress");
    }
}
